//! Beziehungen zwischen zwei Elementen inkl. geroutetem Pfad.

use super::element::{Anchor, Element, ElementId};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Stabile, eindeutige ID einer Beziehung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RelationshipId(pub u64);

impl fmt::Display for RelationshipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// Art der Beziehung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RelationshipKind {
    /// Ungerichtete/gerichtete Assoziation
    #[default]
    Association,
    /// Abhängigkeit
    Dependency,
    /// Vererbung
    Generalization,
    /// Interface-Realisierung
    Realization,
    /// Komponente stellt Schnittstelle bereit
    ComponentInterfaceProvided,
    /// Komponente benötigt Schnittstelle
    ComponentInterfaceRequired,
}

/// Seite einer Beziehung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointSide {
    /// Quell-Ende (Pfadanfang)
    Source,
    /// Ziel-Ende (Pfadende)
    Target,
}

impl EndpointSide {
    /// Die jeweils andere Seite.
    pub fn opposite(self) -> Self {
        match self {
            Self::Source => Self::Target,
            Self::Target => Self::Source,
        }
    }
}

/// Referenz auf das Element (und optional dessen Anker), an das ein Ende gebunden ist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointRef {
    /// Gebundenes Element
    pub element_id: ElementId,
    /// Optionaler Anker auf dem Element
    pub anchor: Option<Anchor>,
}

impl EndpointRef {
    /// Endpunkt ohne Anker (Mittelpunkt des Elements).
    pub fn element(element_id: ElementId) -> Self {
        Self {
            element_id,
            anchor: None,
        }
    }

    /// Endpunkt auf einem bestimmten Anker.
    pub fn anchored(element_id: ElementId, anchor: Anchor) -> Self {
        Self {
            element_id,
            anchor: Some(anchor),
        }
    }
}

/// Fehler beim Aufbau eines Pfads
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// Weniger als zwei Punkte
    #[error("Pfad benötigt mindestens 2 Punkte, erhalten: {0}")]
    TooShort(usize),
    /// Zwei aufeinanderfolgende Punkte fallen zusammen
    #[error("Segment {index} hat Länge 0 bei {point}")]
    ZeroLengthSegment { index: usize, point: Vec2 },
}

/// Polylinie vom Quell- zum Ziel-Endpunkt (>= 2 Punkte, keine Null-Segmente)
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipPath(Vec<Vec2>);

impl RelationshipPath {
    /// Validiert und erstellt einen Pfad.
    pub fn new(points: Vec<Vec2>) -> Result<Self, PathError> {
        if points.len() < 2 {
            return Err(PathError::TooShort(points.len()));
        }
        if let Some(index) = points.windows(2).position(|w| w[0] == w[1]) {
            return Err(PathError::ZeroLengthSegment {
                index,
                point: points[index],
            });
        }
        Ok(Self(points))
    }

    /// Gerader Pfad zwischen zwei Punkten.
    pub fn straight(source: Vec2, target: Vec2) -> Result<Self, PathError> {
        Self::new(vec![source, target])
    }

    /// Read-only Sicht auf die Punkte.
    pub fn points(&self) -> &[Vec2] {
        &self.0
    }

    /// Punkt am Quell-Ende.
    pub fn source_point(&self) -> Vec2 {
        self.0[0]
    }

    /// Punkt am Ziel-Ende.
    pub fn target_point(&self) -> Vec2 {
        self.0[self.0.len() - 1]
    }
}

/// Eine gerichtete Beziehung zwischen zwei Elementen
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    /// Eindeutige ID
    pub id: RelationshipId,
    /// Art der Beziehung
    pub kind: RelationshipKind,
    /// Quell-Endpunkt
    pub source: EndpointRef,
    /// Ziel-Endpunkt
    pub target: EndpointRef,
    /// Gerouteter Pfad (konsistent mit den Endpunkten)
    pub path: RelationshipPath,
}

impl Relationship {
    /// Endpunkt einer Seite.
    pub fn endpoint(&self, side: EndpointSide) -> EndpointRef {
        match side {
            EndpointSide::Source => self.source,
            EndpointSide::Target => self.target,
        }
    }

    /// Ersetzt den Endpunkt einer Seite (Pfad wird NICHT neu berechnet).
    pub fn set_endpoint(&mut self, side: EndpointSide, endpoint: EndpointRef) {
        match side {
            EndpointSide::Source => self.source = endpoint,
            EndpointSide::Target => self.target = endpoint,
        }
    }

    /// Prüft ob die Beziehung an ein Element gebunden ist.
    pub fn touches(&self, element_id: ElementId) -> bool {
        self.source.element_id == element_id || self.target.element_id == element_id
    }
}

/// Advisory-Check: Beide Endpunkte verweisen auf bekannte Elemente.
///
/// Löscht nichts; Aufrufer entscheiden (z.B. Interaktion unterdrücken).
pub fn is_structurally_valid(
    relationship: &Relationship,
    known_element_ids: &HashSet<ElementId>,
) -> bool {
    known_element_ids.contains(&relationship.source.element_id)
        && known_element_ids.contains(&relationship.target.element_id)
}

/// Berechnet den Pfad zwischen zwei gebundenen Elementen (gerade Linie Port zu Port).
pub fn route_path(
    source: &Element,
    source_anchor: Option<Anchor>,
    target: &Element,
    target_anchor: Option<Anchor>,
) -> Result<RelationshipPath, PathError> {
    RelationshipPath::straight(
        source.port_position(source_anchor),
        target.port_position(target_anchor),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ElementKind;

    fn relationship(source: u64, target: u64) -> Relationship {
        Relationship {
            id: RelationshipId(1),
            kind: RelationshipKind::Association,
            source: EndpointRef::element(ElementId(source)),
            target: EndpointRef::element(ElementId(target)),
            path: RelationshipPath::straight(Vec2::ZERO, Vec2::X).expect("gültiger Pfad"),
        }
    }

    #[test]
    fn path_rejects_short_and_degenerate_input() {
        assert_eq!(
            RelationshipPath::new(vec![Vec2::ZERO]),
            Err(PathError::TooShort(1))
        );
        let err = RelationshipPath::new(vec![Vec2::ZERO, Vec2::X, Vec2::X]).unwrap_err();
        assert!(matches!(err, PathError::ZeroLengthSegment { index: 1, .. }));
    }

    #[test]
    fn structural_validity_requires_both_endpoints() {
        let rel = relationship(1, 2);
        let both: HashSet<_> = [ElementId(1), ElementId(2)].into_iter().collect();
        let only_source: HashSet<_> = [ElementId(1)].into_iter().collect();

        assert!(is_structurally_valid(&rel, &both));
        assert!(!is_structurally_valid(&rel, &only_source));
        assert!(!is_structurally_valid(&rel, &HashSet::new()));
    }

    #[test]
    fn set_endpoint_changes_only_requested_side() {
        let mut rel = relationship(1, 2);
        rel.set_endpoint(
            EndpointSide::Target,
            EndpointRef::anchored(ElementId(5), Anchor::Left),
        );
        assert_eq!(rel.source, EndpointRef::element(ElementId(1)));
        assert_eq!(rel.target, EndpointRef::anchored(ElementId(5), Anchor::Left));
        assert!(rel.touches(ElementId(5)));
        assert!(!rel.touches(ElementId(2)));
    }

    #[test]
    fn route_path_connects_ports() {
        let a = Element::new(ElementId(1), ElementKind::Class, "A", Vec2::ZERO);
        let b = Element::new(ElementId(2), ElementKind::Class, "B", Vec2::new(400.0, 0.0));
        let path = route_path(&a, Some(Anchor::Right), &b, Some(Anchor::Left)).expect("Pfad");
        assert_eq!(path.points(), &[Vec2::new(200.0, 50.0), Vec2::new(400.0, 50.0)]);
    }
}
