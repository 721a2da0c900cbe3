//! Auflösung des Drop-Ziels am Ende einer Verbindungs-Geste.
//!
//! Die Auflösung ist asynchron: der Host kann z.B. erst nach dem nächsten
//! Layout-Durchlauf wissen, welches Element unter dem Pointer liegt.

use super::handles::hit_test_anchor;
use crate::core::{ElementId, EndpointRef};
use crate::repository::DiagramRead;
use crate::shared::EditorOptions;
use glam::Vec2;
use std::future::Future;

/// Kontext einer Drop-Auflösung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropRequest {
    /// Fester Endpunkt, von dem die Geste ausgeht
    pub origin: EndpointRef,
    /// Pointer-Position beim Loslassen (Weltkoordinaten)
    pub position: Vec2,
}

/// Löst die Pointer-Position beim Loslassen in einen Endpunkt auf.
///
/// `Ok(None)` bedeutet "kein gültiges Ziel", `Err` einen Fehler bei der
/// Auflösung. Beides bricht die Geste still ab.
pub trait DropTargetResolver {
    /// Startet die Auflösung für `request`.
    fn resolve<'a>(
        &'a self,
        request: DropRequest,
        diagram: &'a dyn DiagramRead,
    ) -> impl Future<Output = anyhow::Result<Option<EndpointRef>>> + 'a;

    /// Übernimmt geänderte Optionen (z.B. Pick-Radien). Standard: nichts zu tun.
    fn apply_options(&mut self, _options: &EditorOptions) {}
}

/// Resolver über die Element-Bounds: Anker-Treffer vor Flächen-Treffer.
///
/// Bei überlappenden Elementen gewinnt die höchste ID (zuletzt eingefügt,
/// liegt oben).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsDropResolver {
    /// Pick-Radius um Anker-Punkte
    pub anchor_hit_radius: f32,
}

impl BoundsDropResolver {
    /// Erstellt einen Resolver mit dem gegebenen Anker-Radius.
    pub fn new(anchor_hit_radius: f32) -> Self {
        Self { anchor_hit_radius }
    }

    /// Synchroner Kern der Auflösung.
    pub fn resolve_now(&self, diagram: &dyn DiagramRead, position: Vec2) -> Option<EndpointRef> {
        let mut ids: Vec<ElementId> = diagram.list_element_ids().into_iter().collect();
        ids.sort_unstable_by(|a, b| b.cmp(a));

        for id in &ids {
            let Some(element) = diagram.get_element(*id) else {
                continue;
            };
            if let Some(anchor) = hit_test_anchor(element, position, self.anchor_hit_radius) {
                return Some(EndpointRef::anchored(*id, anchor));
            }
        }

        ids.into_iter()
            .find(|id| {
                diagram
                    .get_element(*id)
                    .is_some_and(|element| element.bounds.contains(position))
            })
            .map(EndpointRef::element)
    }
}

impl DropTargetResolver for BoundsDropResolver {
    fn resolve<'a>(
        &'a self,
        request: DropRequest,
        diagram: &'a dyn DiagramRead,
    ) -> impl Future<Output = anyhow::Result<Option<EndpointRef>>> + 'a {
        std::future::ready(Ok(self.resolve_now(diagram, request.position)))
    }

    fn apply_options(&mut self, options: &EditorOptions) {
        self.anchor_hit_radius = options.anchor_hit_radius;
    }
}
