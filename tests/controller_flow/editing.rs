use super::{last_command, run, session_with_diagram};
use uml_diagram_editor::{
    Anchor, DiagramRead, EditorCommand, EditorController, EditorIntent, EditorOptions, ElementId,
    EndpointRef, GestureFeedback, GestureOutcome, RelationshipId,
};

#[test]
fn test_primary_click_on_hovered_element_makes_it_interactive() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    run(
        &mut controller,
        &mut session,
        vec![
            EditorIntent::ElementHoverChanged {
                element_id: ElementId(2),
                hovered: true,
            },
            EditorIntent::ElementClicked {
                element_id: ElementId(2),
                button: 1,
            },
        ],
    );

    let element = session
        .repository
        .get_element(ElementId(2))
        .expect("E2 sollte existieren");
    assert!(element.hovered);
    assert!(element.interactive);
    match last_command(&session) {
        EditorCommand::MakeInteractive { element_id } => assert_eq!(*element_id, ElementId(2)),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_click_without_hover_is_ignored() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    run(
        &mut controller,
        &mut session,
        vec![EditorIntent::ElementClicked {
            element_id: ElementId(2),
            button: 1,
        }],
    );

    assert!(session.command_log.is_empty());
    assert!(
        !session
            .repository
            .get_element(ElementId(2))
            .expect("E2 sollte existieren")
            .interactive
    );
}

#[test]
fn test_move_element_reroutes_relationship() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    run(
        &mut controller,
        &mut session,
        vec![EditorIntent::MoveElementRequested {
            element_id: ElementId(2),
            delta: glam::Vec2::new(0.0, 100.0),
        }],
    );

    let rel = session
        .repository
        .get_relationship(RelationshipId(1))
        .expect("R1 sollte existieren");
    assert_eq!(rel.path.source_point(), glam::Vec2::new(200.0, 50.0));
    assert_eq!(rel.path.target_point(), glam::Vec2::new(400.0, 150.0));
}

#[test]
fn test_invalid_options_are_rejected() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    let result = pollster::block_on(controller.handle_intent(
        &mut session,
        EditorIntent::OptionsChanged {
            options: EditorOptions {
                handle_length: 0.0,
                ..EditorOptions::default()
            },
        },
    ));

    assert!(result.is_err());
    assert_eq!(session.options, EditorOptions::default());
}

#[test]
fn test_changed_handle_length_affects_hit_testing() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    // Bei Standardlänge 40 reicht das Source-Handle bis x = 360
    run(
        &mut controller,
        &mut session,
        vec![
            EditorIntent::OptionsChanged {
                options: EditorOptions {
                    handle_length: 10.0,
                    ..EditorOptions::default()
                },
            },
            EditorIntent::HandlePressed {
                world_pos: glam::Vec2::new(370.0, 50.0),
                button: 1,
            },
        ],
    );

    assert_eq!(session.options.handle_length, 10.0);
    assert!(session.gestures.subject().is_none());
}

#[test]
fn test_changed_anchor_radius_reaches_drop_resolution() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    // 25 Einheiten neben E1/Right beim Druck, 25 über E5/Up beim Loslassen
    run(
        &mut controller,
        &mut session,
        vec![
            EditorIntent::OptionsChanged {
                options: EditorOptions {
                    anchor_hit_radius: 30.0,
                    ..EditorOptions::default()
                },
            },
            EditorIntent::AnchorPressed {
                element_id: ElementId(1),
                world_pos: glam::Vec2::new(225.0, 50.0),
                button: 1,
            },
            EditorIntent::PointerMoved {
                world_pos: glam::Vec2::new(400.0, 200.0),
            },
            EditorIntent::PointerReleased {
                world_pos: glam::Vec2::new(500.0, 275.0),
            },
        ],
    );

    assert_eq!(
        session.gesture_feedback,
        Some(GestureFeedback::Finished(GestureOutcome::Connected {
            source: EndpointRef::anchored(ElementId(1), Anchor::Right),
            target: EndpointRef::anchored(ElementId(5), Anchor::Up),
        }))
    );
    let rel = session
        .repository
        .get_relationship(RelationshipId(2))
        .expect("R2 sollte angelegt sein");
    assert_eq!(rel.path.target_point(), glam::Vec2::new(500.0, 300.0));
}

#[test]
fn test_disabling_cascade_keeps_orphaned_relationship() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    run(
        &mut controller,
        &mut session,
        vec![EditorIntent::OptionsChanged {
            options: EditorOptions {
                cascade_relationships_on_delete: false,
                ..EditorOptions::default()
            },
        }],
    );
    session.repository.remove_element(ElementId(2));

    assert_eq!(session.repository.relationship_count(), 1);
    assert_eq!(
        session.repository.invalid_relationships(),
        vec![RelationshipId(1)]
    );
    assert!(session.is_relationship_disabled(RelationshipId(1)));
}

#[test]
fn test_changed_log_capacity_bounds_command_log() {
    let mut controller = EditorController::new();
    let mut session = session_with_diagram();

    let mut intents = vec![EditorIntent::OptionsChanged {
        options: EditorOptions {
            command_log_capacity: 4,
            ..EditorOptions::default()
        },
    }];
    for id in [1, 2, 5, 1, 2, 5] {
        intents.push(EditorIntent::ElementPickRequested {
            element_id: ElementId(id),
            additive: false,
        });
    }
    run(&mut controller, &mut session, intents);

    assert_eq!(session.options.command_log_capacity, 4);
    assert!(session.command_log.len() <= 4);
    match last_command(&session) {
        EditorCommand::SelectElement { element_id } => assert_eq!(*element_id, ElementId(5)),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}
