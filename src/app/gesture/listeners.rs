//! Explizites Register für Pointer-Listener der laufenden Geste.
//!
//! Der Host fragt über [`PointerListeners::is_listening`] ab, ob er Pointer-Moves
//! weiterreichen muss. Jede Registrierung hat ein Handle und wird über dieses
//! wieder entfernt; doppeltes Entfernen ist ein No-op.

use indexmap::IndexMap;

/// Art des abonnierten Pointer-Ereignisses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer-Bewegung
    Move,
    /// Loslassen der Taste
    Release,
}

/// Handle einer Listener-Registrierung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerHandle(pub u64);

#[derive(Debug, Clone, Copy)]
struct Registration {
    kind: PointerEventKind,
    once: bool,
}

/// Register aller aktiven Pointer-Listener
#[derive(Debug, Default)]
pub struct PointerListeners {
    registrations: IndexMap<ListenerHandle, Registration>,
    next_handle: u64,
}

impl PointerListeners {
    /// Erstellt ein leeres Register.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Listener. `once`-Listener werden beim ersten Auslösen entfernt.
    pub fn register(&mut self, kind: PointerEventKind, once: bool) -> ListenerHandle {
        self.next_handle += 1;
        let handle = ListenerHandle(self.next_handle);
        self.registrations.insert(handle, Registration { kind, once });
        log::trace!("Pointer-Listener {:?} für {:?} registriert", handle, kind);
        handle
    }

    /// Entfernt einen Listener. Gibt `false` zurück wenn er nicht (mehr) existiert.
    pub fn remove(&mut self, handle: ListenerHandle) -> bool {
        self.registrations.shift_remove(&handle).is_some()
    }

    /// Löst `kind` aus: liefert die betroffenen Handles und entfernt `once`-Listener.
    pub fn fire(&mut self, kind: PointerEventKind) -> Vec<ListenerHandle> {
        let fired: Vec<ListenerHandle> = self
            .registrations
            .iter()
            .filter(|(_, r)| r.kind == kind)
            .map(|(h, _)| *h)
            .collect();
        self.registrations.retain(|_, r| !(r.kind == kind && r.once));
        fired
    }

    /// Prüft ob ein Listener noch registriert ist.
    pub fn is_registered(&self, handle: ListenerHandle) -> bool {
        self.registrations.contains_key(&handle)
    }

    /// Prüft ob mindestens ein Listener auf `kind` wartet.
    pub fn is_listening(&self, kind: PointerEventKind) -> bool {
        self.registrations.values().any(|r| r.kind == kind)
    }

    /// Anzahl aktiver Registrierungen
    pub fn active_count(&self) -> usize {
        self.registrations.len()
    }
}
