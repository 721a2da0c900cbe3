use crate::app::{EditorCommand, EditorIntent, EditorSession};
use crate::core::{Element, ElementId, ElementKind, RelationshipId};

use super::map_intent_to_commands;

fn session_with_element(hovered: bool) -> EditorSession {
    let mut session = EditorSession::new();
    let mut element = Element::new(ElementId(1), ElementKind::Class, "A", glam::Vec2::ZERO);
    element.hovered = hovered;
    session.repository.insert_element(element);
    session
}

#[test]
fn pointer_events_without_gesture_map_to_nothing() {
    let session = EditorSession::new();

    let moved = map_intent_to_commands(
        &session,
        EditorIntent::PointerMoved {
            world_pos: glam::Vec2::ONE,
        },
    );
    let released = map_intent_to_commands(
        &session,
        EditorIntent::PointerReleased {
            world_pos: glam::Vec2::ONE,
        },
    );

    assert!(moved.is_empty());
    assert!(released.is_empty());
}

#[test]
fn primary_click_on_hovered_element_makes_it_interactive() {
    let session = session_with_element(true);

    let commands = map_intent_to_commands(
        &session,
        EditorIntent::ElementClicked {
            element_id: ElementId(1),
            button: 1,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        EditorCommand::MakeInteractive {
            element_id: ElementId(1)
        }
    ));
}

#[test]
fn click_with_other_button_or_without_hover_is_ignored() {
    let hovered = session_with_element(true);
    let not_hovered = session_with_element(false);

    let secondary = map_intent_to_commands(
        &hovered,
        EditorIntent::ElementClicked {
            element_id: ElementId(1),
            button: 2,
        },
    );
    let cold = map_intent_to_commands(
        &not_hovered,
        EditorIntent::ElementClicked {
            element_id: ElementId(1),
            button: 1,
        },
    );

    assert!(secondary.is_empty());
    assert!(cold.is_empty());
}

#[test]
fn additive_pick_maps_to_toggle() {
    let session = EditorSession::new();

    let element = map_intent_to_commands(
        &session,
        EditorIntent::ElementPickRequested {
            element_id: ElementId(3),
            additive: true,
        },
    );
    let relationship = map_intent_to_commands(
        &session,
        EditorIntent::RelationshipPickRequested {
            relationship_id: RelationshipId(4),
            additive: false,
        },
    );

    assert!(matches!(
        element[0],
        EditorCommand::ToggleElement {
            element_id: ElementId(3)
        }
    ));
    assert!(matches!(
        relationship[0],
        EditorCommand::SelectRelationship {
            relationship_id: RelationshipId(4)
        }
    ));
}
