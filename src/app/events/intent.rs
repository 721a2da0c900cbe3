use crate::core::{ElementId, RelationshipId};
use crate::shared::EditorOptions;

/// Editor-Intents sind Eingaben aus Host/UI ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Taste über einem Reconnect-Handle gedrückt
    HandlePressed { world_pos: glam::Vec2, button: u8 },
    /// Taste über einem Element-Anker gedrückt (Drag-to-Connect)
    AnchorPressed {
        element_id: ElementId,
        world_pos: glam::Vec2,
        button: u8,
    },
    /// Pointer bewegt
    PointerMoved { world_pos: glam::Vec2 },
    /// Taste losgelassen
    PointerReleased { world_pos: glam::Vec2 },
    /// Geste von außen unterbrochen (Escape, Fokusverlust)
    GestureInterrupted,
    /// Element angeklickt
    ElementClicked { element_id: ElementId, button: u8 },
    /// Pointer betritt/verlässt ein Element
    ElementHoverChanged { element_id: ElementId, hovered: bool },
    /// Element per Klick selektieren (additiv = umschalten)
    ElementPickRequested { element_id: ElementId, additive: bool },
    /// Beziehung per Klick selektieren (additiv = umschalten)
    RelationshipPickRequested {
        relationship_id: RelationshipId,
        additive: bool,
    },
    /// Selektion komplett ersetzen (z.B. Rechteck-Auswahl)
    SelectionReplaced {
        element_ids: Vec<ElementId>,
        relationship_ids: Vec<RelationshipId>,
    },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Element um Delta verschieben
    MoveElementRequested {
        element_id: ElementId,
        delta: glam::Vec2,
    },
    /// Optionen wurden geändert
    OptionsChanged { options: EditorOptions },
}
