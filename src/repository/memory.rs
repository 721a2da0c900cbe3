//! HashMap-basierter Referenz-Store für Tests, Benches und den Demo-Host.

use super::{DiagramRead, Repository, RepositoryIntent, RepositoryListener, SubscriptionHandle};
use crate::core::{
    is_structurally_valid, route_path, Element, ElementId, Relationship, RelationshipId,
};
use std::collections::{HashMap, HashSet};

/// In-Memory-Implementierung des Repository-Vertrags
pub struct InMemoryRepository {
    /// Alle Elemente, indexiert nach ID
    elements: HashMap<ElementId, Element>,
    /// Alle Beziehungen, indexiert nach ID
    relationships: HashMap<RelationshipId, Relationship>,
    /// Beziehungen beim Löschen eines Elements mitentfernen
    cascade_on_delete: bool,
    /// Zuletzt per `Select`-Intent gespiegelte Selektion
    mirrored_selection: (Vec<ElementId>, Vec<RelationshipId>),
    listeners: Vec<(SubscriptionHandle, RepositoryListener)>,
    next_subscription: u64,
    /// Höchste je vergebene Element-ID (wird nie zurückgesetzt)
    last_element_id: u64,
    /// Höchste je vergebene Beziehungs-ID (wird nie zurückgesetzt)
    last_relationship_id: u64,
    /// Zählt angewendete Mutationen
    revision: u64,
}

impl InMemoryRepository {
    /// Erstellt einen leeren Store mit Cascade-Delete.
    pub fn new() -> Self {
        Self::with_cascade(true)
    }

    /// Erstellt einen leeren Store mit expliziter Lösch-Policy.
    pub fn with_cascade(cascade_on_delete: bool) -> Self {
        Self {
            elements: HashMap::new(),
            relationships: HashMap::new(),
            cascade_on_delete,
            mirrored_selection: (Vec::new(), Vec::new()),
            listeners: Vec::new(),
            next_subscription: 0,
            last_element_id: 0,
            last_relationship_id: 0,
            revision: 0,
        }
    }

    /// Fügt ein Element hinzu (ersetzt ein bestehendes mit gleicher ID).
    pub fn insert_element(&mut self, element: Element) {
        self.last_element_id = self.last_element_id.max(element.id.0);
        self.elements.insert(element.id, element);
        self.commit();
    }

    /// Entfernt ein Element. Je nach Policy werden gebundene Beziehungen mitentfernt.
    pub fn remove_element(&mut self, element_id: ElementId) -> Option<Element> {
        let removed = self.elements.remove(&element_id)?;
        if self.cascade_on_delete {
            let before = self.relationships.len();
            self.relationships.retain(|_, r| !r.touches(element_id));
            let dropped = before - self.relationships.len();
            if dropped > 0 {
                log::debug!("{} Beziehung(en) von {} mitentfernt", dropped, element_id);
            }
        }
        self.commit();
        Some(removed)
    }

    /// Fügt eine Beziehung hinzu (ersetzt eine bestehende mit gleicher ID).
    pub fn insert_relationship(&mut self, relationship: Relationship) {
        self.last_relationship_id = self.last_relationship_id.max(relationship.id.0);
        self.relationships.insert(relationship.id, relationship);
        self.commit();
    }

    /// Entfernt eine Beziehung.
    pub fn remove_relationship(&mut self, relationship_id: RelationshipId) -> Option<Relationship> {
        let removed = self.relationships.remove(&relationship_id)?;
        self.commit();
        Some(removed)
    }

    /// Nächste freie Element-ID. Gelöschte IDs werden nicht wiederverwendet.
    pub fn next_element_id(&self) -> ElementId {
        ElementId(self.last_element_id + 1)
    }

    /// Nächste freie Beziehungs-ID. Gelöschte IDs werden nicht wiederverwendet.
    pub fn next_relationship_id(&self) -> RelationshipId {
        RelationshipId(self.last_relationship_id + 1)
    }

    /// Anzahl der Elemente
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Anzahl der Beziehungen
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Anzahl angewendeter Mutationen seit Erstellung
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// IDs aller Beziehungen mit verwaisten Endpunkten (sortiert).
    pub fn invalid_relationships(&self) -> Vec<RelationshipId> {
        let known: HashSet<ElementId> = self.elements.keys().copied().collect();
        let mut invalid: Vec<_> = self
            .relationships
            .values()
            .filter(|r| !is_structurally_valid(r, &known))
            .map(|r| r.id)
            .collect();
        invalid.sort_unstable();
        invalid
    }

    /// Zuletzt gespiegelte Selektion (Element-IDs, Beziehungs-IDs)
    pub fn mirrored_selection(&self) -> (&[ElementId], &[RelationshipId]) {
        (&self.mirrored_selection.0, &self.mirrored_selection.1)
    }

    /// Berechnet die Pfade aller an `element_id` gebundenen Beziehungen neu.
    fn reroute_attached(&mut self, element_id: ElementId) {
        let elements = &self.elements;
        for relationship in self.relationships.values_mut() {
            if !relationship.touches(element_id) {
                continue;
            }
            let (Some(source), Some(target)) = (
                elements.get(&relationship.source.element_id),
                elements.get(&relationship.target.element_id),
            ) else {
                continue;
            };
            match route_path(
                source,
                relationship.source.anchor,
                target,
                relationship.target.anchor,
            ) {
                Ok(path) => relationship.path = path,
                Err(e) => log::warn!("Pfad von {} nicht neu berechnet: {}", relationship.id, e),
            }
        }
    }

    /// Zählt die Revision hoch und benachrichtigt alle Listener synchron.
    fn commit(&mut self) {
        self.revision += 1;
        let mut listeners = std::mem::take(&mut self.listeners);
        let view: &dyn DiagramRead = &*self;
        for (_, listener) in listeners.iter_mut() {
            listener(view);
        }
        self.listeners = listeners;
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramRead for InMemoryRepository {
    fn get_element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    fn get_relationship(&self, id: RelationshipId) -> Option<&Relationship> {
        self.relationships.get(&id)
    }

    fn list_element_ids(&self) -> HashSet<ElementId> {
        self.elements.keys().copied().collect()
    }

    fn list_relationship_ids(&self) -> HashSet<RelationshipId> {
        self.relationships.keys().copied().collect()
    }

    fn contains_element(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    fn contains_relationship(&self, id: RelationshipId) -> bool {
        self.relationships.contains_key(&id)
    }
}

impl Repository for InMemoryRepository {
    fn dispatch(&mut self, intent: RepositoryIntent) {
        match intent {
            RepositoryIntent::MoveElement { element_id, delta } => {
                let Some(element) = self.elements.get_mut(&element_id) else {
                    log::warn!("MoveElement: {} existiert nicht", element_id);
                    return;
                };
                element.bounds.position += delta;
                self.reroute_attached(element_id);
            }
            RepositoryIntent::Connect {
                relationship_id,
                change,
            } => {
                let Some(relationship) = self.relationships.get_mut(&relationship_id) else {
                    log::warn!("Connect: {} existiert nicht", relationship_id);
                    return;
                };
                relationship.set_endpoint(change.side, change.endpoint);
                relationship.path = change.path;
                log::info!(
                    "{}: {:?}-Ende neu verbunden mit {}",
                    relationship_id,
                    change.side,
                    change.endpoint.element_id
                );
            }
            RepositoryIntent::AddRelationship {
                kind,
                source,
                target,
                path,
            } => {
                let id = self.next_relationship_id();
                self.last_relationship_id = id.0;
                self.relationships.insert(
                    id,
                    Relationship {
                        id,
                        kind,
                        source,
                        target,
                        path,
                    },
                );
                log::info!(
                    "{} ({:?}) erstellt: {} -> {}",
                    id,
                    kind,
                    source.element_id,
                    target.element_id
                );
            }
            RepositoryIntent::MakeInteractive { element_id } => {
                let Some(element) = self.elements.get_mut(&element_id) else {
                    return;
                };
                element.interactive = true;
            }
            RepositoryIntent::HoverElement {
                element_id,
                hovered,
            } => {
                let Some(element) = self.elements.get_mut(&element_id) else {
                    return;
                };
                element.hovered = hovered;
            }
            RepositoryIntent::Select {
                element_ids,
                relationship_ids,
            } => {
                self.mirrored_selection = (element_ids, relationship_ids);
            }
        }

        self.commit();
    }

    fn subscribe(&mut self, listener: RepositoryListener) -> SubscriptionHandle {
        self.next_subscription += 1;
        let handle = SubscriptionHandle(self.next_subscription);
        self.listeners.push((handle, listener));
        handle
    }

    fn unsubscribe(&mut self, handle: SubscriptionHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(h, _)| *h != handle);
        self.listeners.len() < before
    }

    fn set_cascade_on_delete(&mut self, cascade: bool) -> bool {
        if self.cascade_on_delete != cascade {
            log::info!("Lösch-Policy: Cascade = {}", cascade);
        }
        self.cascade_on_delete = cascade;
        true
    }
}
