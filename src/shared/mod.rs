//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die sowohl der Application-Layer als auch
//! der Demo-Host lesen.

pub mod options;

pub use options::EditorOptions;
pub use options::{HANDLE_HIT_WIDTH, HANDLE_LENGTH, PRIMARY_BUTTON};
