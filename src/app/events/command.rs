use crate::core::{ElementId, RelationshipId};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum EditorCommand {
    // === Verbindungs-Geste ===
    /// Reconnect-Geste an einem Handle starten
    BeginReconnect { world_pos: glam::Vec2, button: u8 },
    /// Drag-to-Connect an einem Element-Anker starten
    BeginConnect {
        element_id: ElementId,
        world_pos: glam::Vec2,
        button: u8,
    },
    /// Pointer-Position der laufenden Geste aktualisieren
    UpdateGesture { world_pos: glam::Vec2 },
    /// Geste beim Loslassen abschließen (Drop-Ziel auflösen)
    FinishGesture { world_pos: glam::Vec2 },
    /// Laufende Geste abbrechen
    CancelGesture,

    // === Selektion ===
    /// Genau ein Element selektieren
    SelectElement { element_id: ElementId },
    /// Element in der Selektion umschalten
    ToggleElement { element_id: ElementId },
    /// Genau eine Beziehung selektieren
    SelectRelationship { relationship_id: RelationshipId },
    /// Beziehung in der Selektion umschalten
    ToggleRelationship { relationship_id: RelationshipId },
    /// Selektion ersetzen
    SelectMany {
        element_ids: Vec<ElementId>,
        relationship_ids: Vec<RelationshipId>,
    },
    /// Selektion aufheben
    ClearSelection,

    // === Editing ===
    /// Element verschieben
    MoveElement {
        element_id: ElementId,
        delta: glam::Vec2,
    },
    /// Hover-Flag eines Elements setzen
    SetHover { element_id: ElementId, hovered: bool },
    /// Element in den interaktiven Modus schalten
    MakeInteractive { element_id: ElementId },

    // === Optionen ===
    /// Optionen anwenden
    ApplyOptions { options: EditorOptions },
}
