//! Begrenztes Command-Log für Nachvollziehbarkeit und Tests.

use super::EditorCommand;
use crate::shared::options::COMMAND_LOG_CAPACITY;

/// Speichert ausgeführte Commands in Reihenfolge.
pub struct CommandLog {
    entries: Vec<EditorCommand>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log mit Standard-Kapazität.
    pub fn new() -> Self {
        Self::with_capacity(COMMAND_LOG_CAPACITY)
    }

    /// Erstellt ein leeres Command-Log mit eigener Kapazität (mindestens 2).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(2),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Ist die Kapazität erreicht, wird die ältere Hälfte verworfen.
    pub fn record(&mut self, command: &EditorCommand) {
        if self.entries.len() >= self.capacity {
            self.entries.drain(..self.capacity / 2);
        }
        self.entries.push(command.clone());
    }

    /// Ändert die Kapazität (mindestens 2) und verwirft bei Bedarf die ältesten Einträge.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(2);
        if self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(..excess);
        }
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[EditorCommand] {
        &self.entries
    }
}
