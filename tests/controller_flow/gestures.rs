use super::{last_command, run, session_with_diagram};
use uml_diagram_editor::app::CancelReason;
use uml_diagram_editor::{
    Anchor, DiagramRead, EditorCommand, EditorController, EditorIntent, ElementId, EndpointRef,
    EndpointSide, GestureFeedback, GestureOutcome, GesturePhase, GestureRejected,
    RelationshipId, RelationshipKind, RelationshipPath, Repository, RepositoryIntent,
};

const SOURCE_HANDLE: glam::Vec2 = glam::Vec2::new(385.0, 50.0);
const OVER_E5: glam::Vec2 = glam::Vec2::new(500.0, 350.0);

#[test]
fn test_source_handle_dropped_on_e5_updates_target() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    run(
        &mut controller,
        &mut session,
        vec![
            EditorIntent::HandlePressed {
                world_pos: SOURCE_HANDLE,
                button: 1,
            },
            EditorIntent::PointerMoved { world_pos: OVER_E5 },
            EditorIntent::PointerReleased { world_pos: OVER_E5 },
        ],
    );

    let rel = session
        .repository
        .get_relationship(RelationshipId(1))
        .expect("R1 sollte existieren");
    assert_eq!(rel.target, EndpointRef::element(ElementId(5)));
    assert_eq!(rel.source, EndpointRef::anchored(ElementId(1), Anchor::Right));
    assert_eq!(rel.path.target_point(), OVER_E5);

    assert_eq!(
        session.gesture_feedback,
        Some(GestureFeedback::Finished(GestureOutcome::Reconnected {
            relationship_id: RelationshipId(1),
            side: EndpointSide::Target,
            endpoint: EndpointRef::element(ElementId(5)),
        }))
    );
    assert_eq!(session.gestures.phase(), GesturePhase::Idle);
    assert_eq!(session.gestures.listeners().active_count(), 0);

    match last_command(&session) {
        EditorCommand::FinishGesture { world_pos } => assert_eq!(*world_pos, OVER_E5),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_second_press_while_dragging_is_rejected_as_busy() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    run(
        &mut controller,
        &mut session,
        vec![
            EditorIntent::HandlePressed {
                world_pos: SOURCE_HANDLE,
                button: 1,
            },
            EditorIntent::PointerMoved {
                world_pos: glam::Vec2::new(390.0, 120.0),
            },
            EditorIntent::AnchorPressed {
                element_id: ElementId(5),
                world_pos: glam::Vec2::new(500.0, 300.0),
                button: 1,
            },
        ],
    );

    assert_eq!(
        session.gesture_feedback,
        Some(GestureFeedback::Rejected(GestureRejected::Busy))
    );
    assert_eq!(session.gestures.phase(), GesturePhase::Dragging);
    assert!(session.is_relationship_disabled(RelationshipId(1)));
    assert!(session.is_relationship_hidden(RelationshipId(1)));
}

#[test]
fn test_press_and_release_without_move_changes_nothing() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();
    let revision = session.repository.revision();

    run(
        &mut controller,
        &mut session,
        vec![
            EditorIntent::HandlePressed {
                world_pos: SOURCE_HANDLE,
                button: 1,
            },
            EditorIntent::PointerReleased {
                world_pos: SOURCE_HANDLE,
            },
        ],
    );

    assert_eq!(session.repository.revision(), revision);
    assert_eq!(
        session.gesture_feedback,
        Some(GestureFeedback::Finished(GestureOutcome::Clicked))
    );
    assert_eq!(session.gestures.listeners().active_count(), 0);
}

#[test]
fn test_drop_on_empty_canvas_and_interrupt_cancel() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();
    let before = session
        .repository
        .get_relationship(RelationshipId(1))
        .cloned();

    run(
        &mut controller,
        &mut session,
        vec![
            EditorIntent::HandlePressed {
                world_pos: SOURCE_HANDLE,
                button: 1,
            },
            EditorIntent::PointerMoved {
                world_pos: glam::Vec2::new(900.0, 900.0),
            },
            EditorIntent::PointerReleased {
                world_pos: glam::Vec2::new(900.0, 900.0),
            },
        ],
    );
    assert_eq!(
        session.gesture_feedback,
        Some(GestureFeedback::Finished(GestureOutcome::Cancelled(
            CancelReason::NoTarget
        )))
    );

    run(
        &mut controller,
        &mut session,
        vec![
            EditorIntent::HandlePressed {
                world_pos: SOURCE_HANDLE,
                button: 1,
            },
            EditorIntent::PointerMoved { world_pos: OVER_E5 },
            EditorIntent::GestureInterrupted,
            // Loslassen nach dem Abbruch ist ohne Geste kein Command
            EditorIntent::PointerReleased { world_pos: OVER_E5 },
        ],
    );
    assert_eq!(
        session.gesture_feedback,
        Some(GestureFeedback::Finished(GestureOutcome::Cancelled(
            CancelReason::Interrupted
        )))
    );
    assert!(matches!(last_command(&session), EditorCommand::CancelGesture));

    assert_eq!(
        session
            .repository
            .get_relationship(RelationshipId(1))
            .cloned(),
        before
    );
    assert_eq!(session.gestures.listeners().active_count(), 0);
}

#[test]
fn test_secondary_button_does_not_arm() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    run(
        &mut controller,
        &mut session,
        vec![EditorIntent::HandlePressed {
            world_pos: SOURCE_HANDLE,
            button: 2,
        }],
    );

    assert_eq!(session.gestures.phase(), GesturePhase::Idle);
    assert_eq!(
        session.gesture_feedback,
        Some(GestureFeedback::Rejected(GestureRejected::NotPrimaryButton(2)))
    );
}

#[test]
fn test_drag_from_anchor_creates_relationship_with_default_kind() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();
    session.options.default_relationship_kind = RelationshipKind::Generalization;

    run(
        &mut controller,
        &mut session,
        vec![
            EditorIntent::AnchorPressed {
                element_id: ElementId(5),
                world_pos: glam::Vec2::new(500.0, 303.0),
                button: 1,
            },
            EditorIntent::PointerMoved {
                world_pos: glam::Vec2::new(300.0, 200.0),
            },
            EditorIntent::PointerReleased {
                world_pos: glam::Vec2::new(100.0, 50.0),
            },
        ],
    );

    let rel = session
        .repository
        .get_relationship(RelationshipId(2))
        .expect("R2 sollte angelegt sein");
    assert_eq!(rel.kind, RelationshipKind::Generalization);
    assert_eq!(rel.source, EndpointRef::anchored(ElementId(5), Anchor::Up));
    assert_eq!(rel.target, EndpointRef::element(ElementId(1)));
    assert_eq!(rel.path.source_point(), glam::Vec2::new(500.0, 300.0));
    assert_eq!(rel.path.target_point(), glam::Vec2::new(100.0, 50.0));
}

#[test]
fn test_relationship_replaced_mid_drag_is_left_alone() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    run(
        &mut controller,
        &mut session,
        vec![
            EditorIntent::HandlePressed {
                world_pos: SOURCE_HANDLE,
                button: 1,
            },
            EditorIntent::PointerMoved { world_pos: OVER_E5 },
        ],
    );
    session.repository.remove_relationship(RelationshipId(1));
    session.repository.dispatch(RepositoryIntent::AddRelationship {
        kind: RelationshipKind::Dependency,
        source: EndpointRef::element(ElementId(2)),
        target: EndpointRef::element(ElementId(1)),
        path: RelationshipPath::straight(
            glam::Vec2::new(500.0, 50.0),
            glam::Vec2::new(100.0, 50.0),
        )
        .expect("gültiger Pfad"),
    });
    run(
        &mut controller,
        &mut session,
        vec![EditorIntent::PointerReleased { world_pos: OVER_E5 }],
    );

    assert!(session.repository.get_relationship(RelationshipId(1)).is_none());
    let added = session
        .repository
        .get_relationship(RelationshipId(2))
        .expect("neue Beziehung bekommt eine frische ID");
    assert_eq!(added.target, EndpointRef::element(ElementId(1)));
    assert_eq!(
        session.gesture_feedback,
        Some(GestureFeedback::Finished(GestureOutcome::Cancelled(
            CancelReason::StaleSubject
        )))
    );
    assert_eq!(session.gestures.listeners().active_count(), 0);
}
