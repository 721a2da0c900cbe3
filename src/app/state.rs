//! Editor-Session: zentrale Datenhaltung.

mod selection;

pub use selection::{Selection, SelectionListener, SelectionSubscription, SelectionSync};

use super::gesture::{
    BoundsDropResolver, ConnectionGestures, DropTargetResolver, GestureOutcome, GestureRejected,
};
use super::CommandLog;
use crate::core::{ElementId, RelationshipId};
use crate::repository::{DiagramRead, InMemoryRepository, Repository, RepositoryIntent};
use crate::shared::EditorOptions;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Rückmeldung der zuletzt beendeten oder abgewiesenen Geste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureFeedback {
    /// Druck wurde abgewiesen
    Rejected(GestureRejected),
    /// Geste wurde beendet
    Finished(GestureOutcome),
}

/// Hauptzustand einer Editor-Sitzung
///
/// `R` ist der Store, `D` der Resolver für Drop-Ziele. Die Selektion hängt
/// beim Erstellen am Store und wird nach jeder Mutation bereinigt.
pub struct EditorSession<R = InMemoryRepository, D = BoundsDropResolver> {
    /// Diagramm-Store (einzige mutierbare Datenquelle, nur über Intents)
    pub repository: R,
    /// Autoritative Selektion (geteilt mit der Store-Subscription)
    pub selection: Rc<RefCell<SelectionSync>>,
    /// Verbindungs-Gesten
    pub gestures: ConnectionGestures,
    /// Auflösung von Drop-Zielen
    pub resolver: D,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Command-Log
    pub command_log: CommandLog,
    /// Ergebnis der letzten Geste (für Statusanzeige)
    pub gesture_feedback: Option<GestureFeedback>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Erstellt eine leere Sitzung mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt eine leere Sitzung mit In-Memory-Store und Bounds-Resolver.
    pub fn with_options(options: EditorOptions) -> Self {
        let repository = InMemoryRepository::with_cascade(options.cascade_relationships_on_delete);
        let resolver = BoundsDropResolver::new(options.anchor_hit_radius);
        Self::from_parts(repository, resolver, options)
    }
}

impl<R: Repository, D: DropTargetResolver> EditorSession<R, D> {
    /// Baut eine Sitzung aus einem bestehenden Store und Resolver.
    pub fn from_parts(mut repository: R, resolver: D, options: EditorOptions) -> Self {
        let selection = Rc::new(RefCell::new(SelectionSync::new()));
        SelectionSync::attach(&selection, &mut repository);
        selection.borrow_mut().sync_with(&repository);

        Self {
            repository,
            selection,
            gestures: ConnectionGestures::new(),
            resolver,
            command_log: CommandLog::with_capacity(options.command_log_capacity),
            options,
            gesture_feedback: None,
        }
    }

    /// Aktueller Selektionswert
    pub fn current_selection(&self) -> Arc<Selection> {
        self.selection.borrow().current().clone()
    }

    /// Bereinigt die Selektion und spiegelt sie per `Select`-Intent in den Store.
    pub fn mirror_selection(&mut self) {
        self.selection.borrow_mut().sync_with(&self.repository);
        let selection = self.current_selection();
        self.repository.dispatch(RepositoryIntent::Select {
            element_ids: selection.element_ids.iter().copied().collect(),
            relationship_ids: selection.relationship_ids.iter().copied().collect(),
        });
    }

    /// Beziehung ist für Interaktion gesperrt (Drag aktiv oder verwaiste Endpunkte).
    pub fn is_relationship_disabled(&self, relationship_id: RelationshipId) -> bool {
        if self.gestures.is_disabled(relationship_id) {
            return true;
        }
        self.repository
            .get_relationship(relationship_id)
            .is_none_or(|r| {
                !self.repository.contains_element(r.source.element_id)
                    || !self.repository.contains_element(r.target.element_id)
            })
    }

    /// Beziehung wird gerade neu verbunden und ist ausgeblendet.
    pub fn is_relationship_hidden(&self, relationship_id: RelationshipId) -> bool {
        self.gestures.is_hidden(relationship_id)
    }

    /// Hover-Flag eines Elements aus dem Store
    pub fn is_element_hovered(&self, element_id: ElementId) -> bool {
        self.repository
            .get_element(element_id)
            .is_some_and(|e| e.hovered)
    }
}
