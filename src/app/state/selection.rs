//! Autoritative Selektion inkl. Prune-Pass gegen den Store und Listener-Fan-out.

use crate::core::{ElementId, RelationshipId};
use crate::repository::{DiagramRead, Repository, SubscriptionHandle};
use indexmap::{IndexMap, IndexSet};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Aktuell selektierte Elemente und Beziehungen (zwei disjunkte Mengen)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selektierte Element-IDs (Einfügereihenfolge bleibt erhalten)
    pub element_ids: IndexSet<ElementId>,
    /// Selektierte Beziehungs-IDs
    pub relationship_ids: IndexSet<RelationshipId>,
}

impl Selection {
    /// Leere Selektion.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` wenn weder Elemente noch Beziehungen selektiert sind.
    pub fn is_empty(&self) -> bool {
        self.element_ids.is_empty() && self.relationship_ids.is_empty()
    }

    /// Prüft ob ein Element selektiert ist.
    pub fn contains_element(&self, id: ElementId) -> bool {
        self.element_ids.contains(&id)
    }

    /// Prüft ob eine Beziehung selektiert ist.
    pub fn contains_relationship(&self, id: RelationshipId) -> bool {
        self.relationship_ids.contains(&id)
    }

    /// Prüft ob alle IDs im Store existieren (lineare Suche, keine Allokation).
    fn is_consistent_with(&self, diagram: &dyn DiagramRead) -> bool {
        self.element_ids.iter().all(|id| diagram.contains_element(*id))
            && self
                .relationship_ids
                .iter()
                .all(|id| diagram.contains_relationship(*id))
    }
}

/// Opaker Handle einer Selektions-Subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionSubscription(pub u64);

/// Listener, der bei jedem neuen Selektionswert synchron aufgerufen wird
pub type SelectionListener = Box<dyn FnMut(&Arc<Selection>)>;

/// Hält die Selektion als `Arc` und benachrichtigt bei jedem Austausch.
///
/// Änderungserkennung ist identitätsbasiert: Jede mutierende Operation
/// installiert einen neuen `Arc`, auch wenn die Mengen elementweise gleich
/// bleiben. Nur der Prune-Pass ersetzt den Wert ausschließlich bei
/// tatsächlich verwaisten IDs.
pub struct SelectionSync {
    current: Arc<Selection>,
    listeners: IndexMap<SelectionSubscription, SelectionListener>,
    next_subscription: u64,
}

impl SelectionSync {
    /// Erstellt einen Synchronizer mit leerer Selektion.
    pub fn new() -> Self {
        Self {
            current: Arc::new(Selection::new()),
            listeners: IndexMap::new(),
            next_subscription: 0,
        }
    }

    /// Aktueller Selektionswert (O(1)-Clone für Render-Snapshots).
    pub fn current(&self) -> &Arc<Selection> {
        &self.current
    }

    /// Ersetzt die Selektion durch genau ein Element.
    pub fn select_one(&mut self, element_id: ElementId) {
        let mut next = Selection::new();
        next.element_ids.insert(element_id);
        self.replace(next);
    }

    /// Ersetzt die Selektion durch genau eine Beziehung.
    pub fn select_relationship(&mut self, relationship_id: RelationshipId) {
        let mut next = Selection::new();
        next.relationship_ids.insert(relationship_id);
        self.replace(next);
    }

    /// Schaltet ein Element in der Selektion um; Beziehungen bleiben unverändert.
    pub fn toggle_element(&mut self, element_id: ElementId) {
        let mut next = Selection::clone(&self.current);
        if !next.element_ids.shift_remove(&element_id) {
            next.element_ids.insert(element_id);
        }
        self.replace(next);
    }

    /// Schaltet eine Beziehung in der Selektion um; Elemente bleiben unverändert.
    pub fn toggle_relationship(&mut self, relationship_id: RelationshipId) {
        let mut next = Selection::clone(&self.current);
        if !next.relationship_ids.shift_remove(&relationship_id) {
            next.relationship_ids.insert(relationship_id);
        }
        self.replace(next);
    }

    /// Ersetzt beide Mengen komplett.
    pub fn select_many(
        &mut self,
        element_ids: impl IntoIterator<Item = ElementId>,
        relationship_ids: impl IntoIterator<Item = RelationshipId>,
    ) {
        self.replace(Selection {
            element_ids: element_ids.into_iter().collect(),
            relationship_ids: relationship_ids.into_iter().collect(),
        });
    }

    /// Hebt die gesamte Selektion auf.
    pub fn clear(&mut self) {
        self.replace(Selection::new());
    }

    /// Entfernt alle IDs, die im Store nicht mehr existieren (nie Re-Add).
    ///
    /// Der Normalfall (nichts verwaist) kostet einen linearen Scan ohne
    /// Allokation und ohne Benachrichtigung. Gibt `true` zurück, wenn
    /// etwas entfernt wurde.
    pub fn sync_with(&mut self, diagram: &dyn DiagramRead) -> bool {
        if self.current.is_consistent_with(diagram) {
            return false;
        }

        let pruned = Selection {
            element_ids: self
                .current
                .element_ids
                .iter()
                .copied()
                .filter(|id| diagram.contains_element(*id))
                .collect(),
            relationship_ids: self
                .current
                .relationship_ids
                .iter()
                .copied()
                .filter(|id| diagram.contains_relationship(*id))
                .collect(),
        };

        log::debug!(
            "Selektion bereinigt: {} -> {} Elemente, {} -> {} Beziehungen",
            self.current.element_ids.len(),
            pruned.element_ids.len(),
            self.current.relationship_ids.len(),
            pruned.relationship_ids.len()
        );
        self.replace(pruned);
        true
    }

    /// Registriert einen Listener für Selektionsänderungen.
    pub fn subscribe(&mut self, listener: SelectionListener) -> SelectionSubscription {
        self.next_subscription += 1;
        let handle = SelectionSubscription(self.next_subscription);
        self.listeners.insert(handle, listener);
        handle
    }

    /// Entfernt einen Listener. Idempotent: `false` wenn unbekannt.
    pub fn unsubscribe(&mut self, handle: SelectionSubscription) -> bool {
        self.listeners.shift_remove(&handle).is_some()
    }

    /// Anzahl registrierter Listener
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Hängt den Synchronizer an einen Store: jede Mutation löst den Prune-Pass aus.
    ///
    /// Hält nur eine `Weak`-Referenz; nach dem Drop des Synchronizers wird der
    /// Listener zum No-op.
    pub fn attach<R: Repository + ?Sized>(
        sync: &Rc<RefCell<SelectionSync>>,
        repository: &mut R,
    ) -> SubscriptionHandle {
        let weak = Rc::downgrade(sync);
        repository.subscribe(Box::new(move |diagram| {
            let Some(sync) = weak.upgrade() else {
                return;
            };
            let Ok(mut sync) = sync.try_borrow_mut() else {
                log::warn!("Selektion während Store-Benachrichtigung gesperrt");
                return;
            };
            sync.sync_with(diagram);
        }))
    }

    fn replace(&mut self, next: Selection) {
        self.current = Arc::new(next);
        for listener in self.listeners.values_mut() {
            listener(&self.current);
        }
    }
}

impl Default for SelectionSync {
    fn default() -> Self {
        Self::new()
    }
}
