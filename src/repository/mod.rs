//! Vertrag zum externen Element-/Beziehungs-Store.
//!
//! Der Kern liest ausschließlich Snapshots über [`DiagramRead`] und mutiert
//! nur über [`Repository::dispatch`]. Nach jeder angewendeten Mutation ruft
//! der Store alle Subscriber synchron mit einer Read-only-Sicht auf.

pub mod memory;

use crate::core::{
    Element, ElementId, EndpointRef, EndpointSide, Relationship, RelationshipId,
    RelationshipKind, RelationshipPath,
};
use std::collections::HashSet;

pub use memory::InMemoryRepository;

/// Read-only Zugriff auf den aktuellen Store-Snapshot
pub trait DiagramRead {
    /// Liefert ein Element oder `None` (NotFound).
    fn get_element(&self, id: ElementId) -> Option<&Element>;

    /// Liefert eine Beziehung oder `None` (NotFound).
    fn get_relationship(&self, id: RelationshipId) -> Option<&Relationship>;

    /// Alle aktuell existierenden Element-IDs.
    fn list_element_ids(&self) -> HashSet<ElementId>;

    /// Alle aktuell existierenden Beziehungs-IDs.
    fn list_relationship_ids(&self) -> HashSet<RelationshipId>;

    /// O(1)-Existenzprüfung für den Prune-Pass der Selektion.
    fn contains_element(&self, id: ElementId) -> bool {
        self.get_element(id).is_some()
    }

    /// O(1)-Existenzprüfung für Beziehungen.
    fn contains_relationship(&self, id: RelationshipId) -> bool {
        self.get_relationship(id).is_some()
    }
}

/// Änderung eines Beziehungs-Endes inkl. neu berechnetem Pfad
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointChange {
    /// Welche Seite ersetzt wird
    pub side: EndpointSide,
    /// Neuer Endpunkt
    pub endpoint: EndpointRef,
    /// Pfad passend zu den neuen Endpunkten
    pub path: RelationshipPath,
}

/// Mutations-Intents, die der Kern an den Store schickt
#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryIntent {
    /// Element um Delta verschieben
    MoveElement {
        element_id: ElementId,
        delta: glam::Vec2,
    },
    /// Ein Ende einer bestehenden Beziehung neu verbinden
    Connect {
        relationship_id: RelationshipId,
        change: EndpointChange,
    },
    /// Neue Beziehung anlegen (ID vergibt der Store)
    AddRelationship {
        kind: RelationshipKind,
        source: EndpointRef,
        target: EndpointRef,
        path: RelationshipPath,
    },
    /// Element in den interaktiven Modus versetzen
    MakeInteractive { element_id: ElementId },
    /// Hover-Status eines Elements setzen
    HoverElement { element_id: ElementId, hovered: bool },
    /// Aktuelle Selektion spiegeln (für Rendering aus dem Store)
    Select {
        element_ids: Vec<ElementId>,
        relationship_ids: Vec<RelationshipId>,
    },
}

/// Opaker Handle einer Store-Subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionHandle(pub u64);

/// Listener, der nach jeder Mutation synchron aufgerufen wird
pub type RepositoryListener = Box<dyn FnMut(&dyn DiagramRead)>;

/// Schreibender Vertrag des Stores
pub trait Repository: DiagramRead {
    /// Wendet einen Intent an (fire-and-forget) und benachrichtigt Subscriber.
    fn dispatch(&mut self, intent: RepositoryIntent);

    /// Registriert einen Listener.
    fn subscribe(&mut self, listener: RepositoryListener) -> SubscriptionHandle;

    /// Entfernt einen Listener. Idempotent: `false` wenn unbekannt.
    fn unsubscribe(&mut self, handle: SubscriptionHandle) -> bool;

    /// Stellt die Lösch-Policy um. `false`, wenn der Store sie nur beim
    /// Erstellen festlegen kann.
    fn set_cascade_on_delete(&mut self, _cascade: bool) -> bool {
        false
    }
}
