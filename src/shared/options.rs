//! Zentrale Konfiguration für den Diagramm-Editor-Kern.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::RelationshipKind;
use serde::{Deserialize, Serialize};

// ── Handles ─────────────────────────────────────────────────────────

/// Länge der Reconnect-Handles entlang des ersten Pfadsegments (Welteinheiten).
pub const HANDLE_LENGTH: f32 = 40.0;
/// Breite des unsichtbaren Hit-Strichs entlang eines Handles.
pub const HANDLE_HIT_WIDTH: f32 = 15.0;
/// Pick-Radius um Anker-Punkte für Drag-to-Connect.
pub const ANCHOR_HIT_RADIUS: f32 = 10.0;

// ── Eingabe ─────────────────────────────────────────────────────────

/// Plattform-Code der primären Maustaste.
pub const PRIMARY_BUTTON: u8 = 1;

// ── Laufzeit ────────────────────────────────────────────────────────

/// Maximale Anzahl Einträge im Command-Log.
pub const COMMAND_LOG_CAPACITY: usize = 1000;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `uml_diagram_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Handles ─────────────────────────────────────────────────
    /// Handle-Länge in Welteinheiten
    pub handle_length: f32,
    /// Breite des Hit-Strichs (beidseitig je Hälfte)
    pub handle_hit_width: f32,
    /// Pick-Radius für Anker beim Verbinden
    #[serde(default = "default_anchor_hit_radius")]
    pub anchor_hit_radius: f32,

    // ── Store-Policy ────────────────────────────────────────────
    /// Beziehungen beim Löschen eines Elements mitentfernen
    #[serde(default = "default_true")]
    pub cascade_relationships_on_delete: bool,

    // ── Verbinden ───────────────────────────────────────────────
    /// Art neuer Beziehungen aus Drag-to-Connect
    #[serde(default)]
    pub default_relationship_kind: RelationshipKind,

    // ── Laufzeit ────────────────────────────────────────────────
    /// Maximale Anzahl Einträge im Command-Log
    #[serde(default = "default_command_log_capacity")]
    pub command_log_capacity: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            handle_length: HANDLE_LENGTH,
            handle_hit_width: HANDLE_HIT_WIDTH,
            anchor_hit_radius: ANCHOR_HIT_RADIUS,
            cascade_relationships_on_delete: true,
            default_relationship_kind: RelationshipKind::default(),
            command_log_capacity: COMMAND_LOG_CAPACITY,
        }
    }
}

/// Serde-Default für `anchor_hit_radius` (Abwärtskompatibilität).
fn default_anchor_hit_radius() -> f32 {
    ANCHOR_HIT_RADIUS
}

fn default_true() -> bool {
    true
}

fn default_command_log_capacity() -> usize {
    COMMAND_LOG_CAPACITY
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("uml_diagram_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("uml_diagram_editor.toml")
    }

    /// Maximaler Abstand vom Handle-Segment, der noch als Treffer zählt.
    pub fn handle_hit_tolerance(&self) -> f32 {
        self.handle_hit_width * 0.5
    }
}
