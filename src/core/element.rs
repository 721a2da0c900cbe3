//! Platzierte Diagramm-Elemente (Klassen, Interfaces, Komponenten).

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stabile, eindeutige ID eines Elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// Typ-Tag eines Elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ElementKind {
    /// Klasse (Classifier)
    #[default]
    Class,
    /// Abstrakte Klasse
    AbstractClass,
    /// Interface-Classifier
    Interface,
    /// Aufzählung
    Enumeration,
    /// Komponente (Komponentendiagramm)
    Component,
    /// Bereitgestellte/benötigte Schnittstelle einer Komponente
    ComponentInterface,
    /// Attribut/Methode innerhalb eines Classifiers
    ClassifierMember,
}

impl ElementKind {
    /// Standardgröße beim Platzieren (vor Skalierung).
    pub fn default_size(self) -> Vec2 {
        match self {
            Self::Class | Self::AbstractClass | Self::Interface | Self::Enumeration => {
                Vec2::new(200.0, 100.0)
            }
            Self::Component => Vec2::new(200.0, 100.0),
            Self::ComponentInterface => Vec2::new(20.0, 20.0),
            Self::ClassifierMember => Vec2::new(200.0, 30.0),
        }
    }
}

/// Seite der Bounding-Box, an der ein Endpunkt andockt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    /// Oben (Mitte der oberen Kante)
    Up,
    /// Rechts
    Right,
    /// Unten
    Down,
    /// Links
    Left,
}

impl Anchor {
    /// Alle vier Anker in fester Reihenfolge (für Hit-Tests).
    pub const ALL: [Anchor; 4] = [Anchor::Up, Anchor::Right, Anchor::Down, Anchor::Left];
}

/// Achsenparallele Bounds eines Elements (Position = linke obere Ecke)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Linke obere Ecke in Weltkoordinaten
    pub position: Vec2,
    /// Breite und Höhe
    pub size: Vec2,
}

impl Bounds {
    /// Erstellt Bounds aus Position und Größe.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Mittelpunkt der Bounds.
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Prüft ob ein Punkt innerhalb liegt (Kanten inklusive).
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.position + self.size;
        point.x >= self.position.x
            && point.y >= self.position.y
            && point.x <= max.x
            && point.y <= max.y
    }

    /// Kantenmittelpunkt für einen Anker.
    pub fn anchor_point(&self, anchor: Anchor) -> Vec2 {
        let c = self.center();
        match anchor {
            Anchor::Up => Vec2::new(c.x, self.position.y),
            Anchor::Right => Vec2::new(self.position.x + self.size.x, c.y),
            Anchor::Down => Vec2::new(c.x, self.position.y + self.size.y),
            Anchor::Left => Vec2::new(self.position.x, c.y),
        }
    }
}

/// Ein platziertes Diagramm-Element
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Eindeutige ID
    pub id: ElementId,
    /// Typ-Tag
    pub kind: ElementKind,
    /// Anzeigename
    pub name: String,
    /// Geometrische Bounds
    pub bounds: Bounds,
    /// Zeiger befindet sich über dem Element
    pub hovered: bool,
    /// Element wurde in den interaktiven Modus versetzt
    pub interactive: bool,
}

impl Element {
    /// Erstellt ein Element mit Standardgröße für den Typ.
    pub fn new(id: ElementId, kind: ElementKind, name: impl Into<String>, position: Vec2) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            bounds: Bounds::new(position, kind.default_size()),
            hovered: false,
            interactive: false,
        }
    }

    /// Setzt abweichende Bounds (Builder-Stil).
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Andockpunkt für einen optionalen Anker (ohne Anker: Mittelpunkt).
    pub fn port_position(&self, anchor: Option<Anchor>) -> Vec2 {
        match anchor {
            Some(anchor) => self.bounds.anchor_point(anchor),
            None => self.bounds.center(),
        }
    }
}

/// Palette-Einträge für das Komponentendiagramm (Komponente + Schnittstelle).
///
/// Die Standard-Bounds werden mit `scale` skaliert; IDs sind Platzhalter (0),
/// da Palette-Elemente erst beim Platzieren eine echte ID erhalten.
pub fn compose_component_preview(scale: f32) -> Vec<Element> {
    [
        (ElementKind::Component, "Component"),
        (ElementKind::ComponentInterface, "Interface"),
    ]
    .into_iter()
    .map(|(kind, name)| {
        let element = Element::new(ElementId(0), kind, name, Vec2::ZERO);
        let bounds = Bounds::new(element.bounds.position, element.bounds.size * scale);
        element.with_bounds(bounds)
    })
    .collect()
}
