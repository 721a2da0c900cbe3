//! Handler für Selektions-Operationen.
//!
//! Jede Änderung wird anschließend per `Select`-Intent in den Store gespiegelt;
//! unbekannte IDs werden dabei vorher bereinigt.

use crate::app::gesture::DropTargetResolver;
use crate::app::EditorSession;
use crate::core::{ElementId, RelationshipId};
use crate::repository::Repository;

/// Selektiert genau ein Element.
pub fn select_element<R: Repository, D: DropTargetResolver>(
    session: &mut EditorSession<R, D>,
    element_id: ElementId,
) {
    session.selection.borrow_mut().select_one(element_id);
    session.mirror_selection();
}

/// Schaltet ein Element in der Selektion um.
pub fn toggle_element<R: Repository, D: DropTargetResolver>(
    session: &mut EditorSession<R, D>,
    element_id: ElementId,
) {
    session.selection.borrow_mut().toggle_element(element_id);
    session.mirror_selection();
}

/// Selektiert genau eine Beziehung.
pub fn select_relationship<R: Repository, D: DropTargetResolver>(
    session: &mut EditorSession<R, D>,
    relationship_id: RelationshipId,
) {
    session
        .selection
        .borrow_mut()
        .select_relationship(relationship_id);
    session.mirror_selection();
}

/// Schaltet eine Beziehung in der Selektion um.
pub fn toggle_relationship<R: Repository, D: DropTargetResolver>(
    session: &mut EditorSession<R, D>,
    relationship_id: RelationshipId,
) {
    session
        .selection
        .borrow_mut()
        .toggle_relationship(relationship_id);
    session.mirror_selection();
}

/// Ersetzt die Selektion.
pub fn select_many<R: Repository, D: DropTargetResolver>(
    session: &mut EditorSession<R, D>,
    element_ids: Vec<ElementId>,
    relationship_ids: Vec<RelationshipId>,
) {
    session
        .selection
        .borrow_mut()
        .select_many(element_ids, relationship_ids);
    session.mirror_selection();
}

/// Hebt die Selektion auf.
pub fn clear<R: Repository, D: DropTargetResolver>(session: &mut EditorSession<R, D>) {
    session.selection.borrow_mut().clear();
    session.mirror_selection();
}
