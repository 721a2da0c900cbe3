//! Reconnect-Handles einer Beziehung und Hit-Tests für Handles und Anker.

use crate::core::{
    compose_handle_segment, distance_to_segment, Anchor, Element, EndpointSide, Relationship,
    RelationshipId,
};
use crate::repository::DiagramRead;
use glam::Vec2;

/// Greif-Handle an einem Ende einer Beziehung.
///
/// `label` benennt den Endpunkt, der während der Geste fest bleibt (Ursprung
/// der Verbindung). Ersetzt wird immer das gegenüberliegende Ende, also das
/// Ende, an dem das Handle sitzt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconnectHandle {
    /// Beziehung, zu der das Handle gehört
    pub relationship_id: RelationshipId,
    /// Fester Endpunkt (Ursprung der Geste)
    pub label: EndpointSide,
    /// Anker- und Spitzenpunkt des Handles
    pub segment: [Vec2; 2],
}

impl ReconnectHandle {
    /// Seite, die beim Commit neu gesetzt wird (immer die Gegenseite des Labels).
    pub fn rewritten_side(&self) -> EndpointSide {
        self.label.opposite()
    }
}

/// Beide Handles einer Beziehung.
///
/// Das Handle vom Pfadanfang trägt das Label `Target`, das Handle vom
/// umgekehrten Pfad das Label `Source`. Degenerierte Pfade liefern keine Handles.
pub fn relationship_handles(
    relationship: &Relationship,
    handle_length: f32,
) -> Vec<ReconnectHandle> {
    let points = relationship.path.points();
    [(true, EndpointSide::Target), (false, EndpointSide::Source)]
        .into_iter()
        .filter_map(|(from_start, label)| {
            compose_handle_segment(points, from_start, handle_length).map(|segment| {
                ReconnectHandle {
                    relationship_id: relationship.id,
                    label,
                    segment,
                }
            })
        })
        .collect()
}

/// Findet das nächstgelegene Handle innerhalb von `tolerance` um `pos`.
///
/// Beziehungen werden in ID-Reihenfolge geprüft; bei gleichem Abstand gewinnt
/// die kleinere ID.
pub fn hit_test_handles(
    diagram: &dyn DiagramRead,
    pos: Vec2,
    handle_length: f32,
    tolerance: f32,
) -> Option<ReconnectHandle> {
    let mut ids: Vec<_> = diagram.list_relationship_ids().into_iter().collect();
    ids.sort_unstable();

    let mut best: Option<(f32, ReconnectHandle)> = None;
    for id in ids {
        let Some(relationship) = diagram.get_relationship(id) else {
            continue;
        };
        for handle in relationship_handles(relationship, handle_length) {
            let dist = distance_to_segment(pos, handle.segment[0], handle.segment[1]);
            if dist > tolerance {
                continue;
            }
            if best.as_ref().is_none_or(|(best_dist, _)| dist < *best_dist) {
                best = Some((dist, handle));
            }
        }
    }
    best.map(|(_, handle)| handle)
}

/// Anker eines Elements, dessen Kantenmittelpunkt innerhalb von `radius` liegt.
pub fn hit_test_anchor(element: &Element, pos: Vec2, radius: f32) -> Option<Anchor> {
    Anchor::ALL
        .into_iter()
        .map(|anchor| (anchor, element.bounds.anchor_point(anchor).distance(pos)))
        .filter(|(_, dist)| *dist <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(anchor, _)| anchor)
}
