//! Editor Controller für zentrale Event-Verarbeitung.

use super::gesture::DropTargetResolver;
use super::{EditorCommand, EditorIntent, EditorSession};
use crate::repository::Repository;

/// Orchestriert Host-Events und Handler auf der EditorSession.
///
/// `handle_intent` ist asynchron, weil das Loslassen einer Verbindungs-Geste
/// auf die Drop-Ziel-Auflösung wartet. Alle anderen Commands laufen synchron.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Die Session bleibt exklusiv geliehen, bis der Future fertig ist. Beim
    /// Loslassen schließt das die Drop-Ziel-Auflösung ein: Abfragen wie
    /// `is_relationship_disabled` sind erst danach wieder möglich.
    pub async fn handle_intent<R: Repository, D: DropTargetResolver>(
        &mut self,
        session: &mut EditorSession<R, D>,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(session, intent);
        for command in commands {
            self.handle_command(session, command).await?;
        }

        Ok(())
    }

    fn map_intent_to_commands<R: Repository, D: DropTargetResolver>(
        &self,
        session: &EditorSession<R, D>,
        intent: EditorIntent,
    ) -> Vec<EditorCommand> {
        super::intent_mapping::map_intent_to_commands(session, intent)
    }

    /// Führt mutierende Commands auf der EditorSession aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub async fn handle_command<R: Repository, D: DropTargetResolver>(
        &mut self,
        session: &mut EditorSession<R, D>,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        session.command_log.record(&command);
        use super::handlers;

        match command {
            // === Verbindungs-Geste ===
            EditorCommand::BeginReconnect { world_pos, button } => {
                handlers::gesture::begin_reconnect(session, world_pos, button)
            }
            EditorCommand::BeginConnect {
                element_id,
                world_pos,
                button,
            } => handlers::gesture::begin_connect(session, element_id, world_pos, button),
            EditorCommand::UpdateGesture { world_pos } => {
                handlers::gesture::update(session, world_pos)
            }
            EditorCommand::FinishGesture { world_pos } => {
                handlers::gesture::finish(session, world_pos).await
            }
            EditorCommand::CancelGesture => handlers::gesture::cancel(session),

            // === Selektion ===
            EditorCommand::SelectElement { element_id } => {
                handlers::selection::select_element(session, element_id)
            }
            EditorCommand::ToggleElement { element_id } => {
                handlers::selection::toggle_element(session, element_id)
            }
            EditorCommand::SelectRelationship { relationship_id } => {
                handlers::selection::select_relationship(session, relationship_id)
            }
            EditorCommand::ToggleRelationship { relationship_id } => {
                handlers::selection::toggle_relationship(session, relationship_id)
            }
            EditorCommand::SelectMany {
                element_ids,
                relationship_ids,
            } => handlers::selection::select_many(session, element_ids, relationship_ids),
            EditorCommand::ClearSelection => handlers::selection::clear(session),

            // === Editing ===
            EditorCommand::MoveElement { element_id, delta } => {
                handlers::editing::move_element(session, element_id, delta)
            }
            EditorCommand::SetHover {
                element_id,
                hovered,
            } => handlers::editing::set_hover(session, element_id, hovered),
            EditorCommand::MakeInteractive { element_id } => {
                handlers::editing::make_interactive(session, element_id)
            }

            // === Optionen ===
            EditorCommand::ApplyOptions { options } => {
                handlers::editing::apply_options(session, options)?
            }
        }

        Ok(())
    }
}
