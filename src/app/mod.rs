//! Application-Layer: Controller, Session, Events, Gesten und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod gesture;
pub mod handlers;
mod intent_mapping;
/// Editor-Session und Selektion
///
/// Dieses Modul verwaltet den Zustand einer Sitzung (Store, Selektion, Gesten).
pub mod state;

pub use command_log::CommandLog;
pub use controller::EditorController;
pub use events::{EditorCommand, EditorIntent};
pub use gesture::{
    BoundsDropResolver, CancelReason, ConnectionGestures, DropRequest, DropTargetResolver,
    GestureOutcome, GesturePhase, GestureRejected, GestureSubject,
};
pub use state::{EditorSession, GestureFeedback, Selection, SelectionSubscription, SelectionSync};
