//! UML-Diagramm-Editor-Kern.
//! Geometrie, Store-Vertrag, Verbindungs-Gesten und Selektion als Library für
//! Hosts, Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod repository;
pub mod shared;

pub use app::{
    EditorCommand, EditorController, EditorIntent, EditorSession, GestureFeedback,
    GestureOutcome, GesturePhase, GestureRejected, Selection, SelectionSync,
};
pub use core::{
    Anchor, Bounds, Element, ElementId, ElementKind, EndpointRef, EndpointSide, Relationship,
    RelationshipId, RelationshipKind, RelationshipPath,
};
pub use repository::{DiagramRead, InMemoryRepository, Repository, RepositoryIntent};
pub use shared::EditorOptions;
