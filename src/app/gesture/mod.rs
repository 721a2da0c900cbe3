//! Verbindungs-Geste: Enden bestehender Beziehungen neu verbinden und neue
//! Beziehungen von Element-Ankern ziehen.
//!
//! Ablauf: `Idle → Armed → Dragging → {Committed, Cancelled} → Idle`.
//!
//! Aufgeteilt in:
//! - `state`: Phasen, Subjekt, Ergebnis, Maschine und Abfragen
//! - `lifecycle`: press/move/release/interrupt inkl. Commit
//! - `handles`: Handle-Komposition und Hit-Tests
//! - `listeners`: Handle-basiertes Pointer-Listener-Register
//! - `resolve`: Drop-Ziel-Auflösung (async)

pub mod handles;
mod lifecycle;
pub mod listeners;
pub mod resolve;
mod state;

pub use handles::{hit_test_anchor, hit_test_handles, relationship_handles, ReconnectHandle};
pub use listeners::{ListenerHandle, PointerEventKind, PointerListeners};
pub use resolve::{BoundsDropResolver, DropRequest, DropTargetResolver};
pub use state::{
    CancelReason, ConnectionGestures, GestureOutcome, GesturePhase, GestureRejected,
    GestureSubject,
};
