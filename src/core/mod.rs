//! Core-Domänentypen: Elemente, Beziehungen, Pfade und Handle-Geometrie.

pub mod element;
/// Reine Geometrie-Funktionen (Normalisierung, Handles, Hit-Test-Abstände)
pub mod geometry;
pub mod relationship;

pub use element::{compose_component_preview, Anchor, Bounds, Element, ElementId, ElementKind};
pub use geometry::{compose_handle_segment, distance_to_segment, normalize, point_along};
pub use relationship::{
    is_structurally_valid, route_path, EndpointRef, EndpointSide, PathError, Relationship,
    RelationshipId, RelationshipKind, RelationshipPath,
};
