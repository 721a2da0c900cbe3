use super::{last_command, run, session_with_diagram};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use uml_diagram_editor::{EditorCommand, EditorController, EditorIntent, ElementId, RelationshipId};

#[test]
fn test_removed_element_is_pruned_from_selection() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    run(
        &mut controller,
        &mut session,
        vec![EditorIntent::SelectionReplaced {
            element_ids: vec![ElementId(1), ElementId(2)],
            relationship_ids: vec![],
        }],
    );
    assert_eq!(session.current_selection().element_ids.len(), 2);

    session.repository.remove_element(ElementId(2));

    let selection = session.current_selection();
    assert!(selection.contains_element(ElementId(1)));
    assert!(!selection.contains_element(ElementId(2)));
    assert_eq!(selection.element_ids.len(), 1);
}

#[test]
fn test_cascade_delete_prunes_selected_relationship() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    run(
        &mut controller,
        &mut session,
        vec![EditorIntent::RelationshipPickRequested {
            relationship_id: RelationshipId(1),
            additive: false,
        }],
    );
    session.repository.remove_element(ElementId(1));

    assert!(session.current_selection().is_empty());
}

#[test]
fn test_selection_changes_are_mirrored_into_store() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    run(
        &mut controller,
        &mut session,
        vec![
            EditorIntent::ElementPickRequested {
                element_id: ElementId(5),
                additive: false,
            },
            EditorIntent::RelationshipPickRequested {
                relationship_id: RelationshipId(1),
                additive: true,
            },
        ],
    );

    let (elements, relationships) = session.repository.mirrored_selection();
    assert_eq!(elements, &[ElementId(5)]);
    assert_eq!(relationships, &[RelationshipId(1)]);

    match last_command(&session) {
        EditorCommand::ToggleRelationship { relationship_id } => {
            assert_eq!(*relationship_id, RelationshipId(1))
        }
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_unknown_ids_never_reach_the_mirror() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    run(
        &mut controller,
        &mut session,
        vec![EditorIntent::SelectionReplaced {
            element_ids: vec![ElementId(1), ElementId(99)],
            relationship_ids: vec![RelationshipId(42)],
        }],
    );

    let (elements, relationships) = session.repository.mirrored_selection();
    assert_eq!(elements, &[ElementId(1)]);
    assert!(relationships.is_empty());
    assert!(!session.current_selection().contains_element(ElementId(99)));
}

#[test]
fn test_double_toggle_notifies_twice_and_restores_value() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();
    let seen: Rc<RefCell<Vec<Arc<uml_diagram_editor::Selection>>>> = Rc::default();
    let sink = seen.clone();
    session
        .selection
        .borrow_mut()
        .subscribe(Box::new(move |selection| sink.borrow_mut().push(selection.clone())));
    let before = session.current_selection();

    let toggle = || EditorIntent::ElementPickRequested {
        element_id: ElementId(2),
        additive: true,
    };
    run(&mut controller, &mut session, vec![toggle(), toggle()]);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(*seen[1], *before);
    assert!(!Arc::ptr_eq(&seen[1], &before));
}

#[test]
fn test_clear_selection_logs_command() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    run(
        &mut controller,
        &mut session,
        vec![
            EditorIntent::ElementPickRequested {
                element_id: ElementId(1),
                additive: false,
            },
            EditorIntent::ClearSelectionRequested,
        ],
    );

    assert!(session.current_selection().is_empty());
    assert!(matches!(last_command(&session), EditorCommand::ClearSelection));
}
