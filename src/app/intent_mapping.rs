//! Mapping von Editor-Intents auf mutierende Editor-Commands.

use super::gesture::DropTargetResolver;
use super::{EditorCommand, EditorIntent, EditorSession};
use crate::repository::Repository;
use crate::shared::PRIMARY_BUTTON;

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer `EditorCommand`s.
pub fn map_intent_to_commands<R: Repository, D: DropTargetResolver>(
    session: &EditorSession<R, D>,
    intent: EditorIntent,
) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::HandlePressed { world_pos, button } => {
            vec![EditorCommand::BeginReconnect { world_pos, button }]
        }
        EditorIntent::AnchorPressed {
            element_id,
            world_pos,
            button,
        } => vec![EditorCommand::BeginConnect {
            element_id,
            world_pos,
            button,
        }],
        EditorIntent::PointerMoved { world_pos } => {
            // Ohne laufende Geste kein Command (hält das Log frei von Move-Rauschen)
            if session.gestures.subject().is_some() {
                vec![EditorCommand::UpdateGesture { world_pos }]
            } else {
                vec![]
            }
        }
        EditorIntent::PointerReleased { world_pos } => {
            if session.gestures.subject().is_some() {
                vec![EditorCommand::FinishGesture { world_pos }]
            } else {
                vec![]
            }
        }
        EditorIntent::GestureInterrupted => vec![EditorCommand::CancelGesture],
        EditorIntent::ElementClicked { element_id, button } => {
            if button == PRIMARY_BUTTON && session.is_element_hovered(element_id) {
                vec![EditorCommand::MakeInteractive { element_id }]
            } else {
                vec![]
            }
        }
        EditorIntent::ElementHoverChanged {
            element_id,
            hovered,
        } => vec![EditorCommand::SetHover {
            element_id,
            hovered,
        }],
        EditorIntent::ElementPickRequested {
            element_id,
            additive,
        } => {
            if additive {
                vec![EditorCommand::ToggleElement { element_id }]
            } else {
                vec![EditorCommand::SelectElement { element_id }]
            }
        }
        EditorIntent::RelationshipPickRequested {
            relationship_id,
            additive,
        } => {
            if additive {
                vec![EditorCommand::ToggleRelationship { relationship_id }]
            } else {
                vec![EditorCommand::SelectRelationship { relationship_id }]
            }
        }
        EditorIntent::SelectionReplaced {
            element_ids,
            relationship_ids,
        } => vec![EditorCommand::SelectMany {
            element_ids,
            relationship_ids,
        }],
        EditorIntent::ClearSelectionRequested => vec![EditorCommand::ClearSelection],
        EditorIntent::MoveElementRequested { element_id, delta } => {
            vec![EditorCommand::MoveElement { element_id, delta }]
        }
        EditorIntent::OptionsChanged { options } => {
            vec![EditorCommand::ApplyOptions { options }]
        }
    }
}

#[cfg(test)]
mod tests;
