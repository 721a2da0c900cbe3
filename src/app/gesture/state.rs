//! Zustands-Definitionen der Verbindungs-Geste.

use super::listeners::{ListenerHandle, PointerListeners};
use crate::core::{ElementId, EndpointRef, EndpointSide, RelationshipId};

/// Phase der Verbindungs-Geste
///
/// `Committed` und `Cancelled` sind Durchgangszustände: nach dem Aufräumen
/// steht die Maschine immer wieder auf `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Keine Geste aktiv
    Idle,
    /// Taste gedrückt, noch keine Bewegung
    Armed,
    /// Pointer bewegt, Drop-Ziel ausstehend
    Dragging,
    /// Änderung an das Repository übergeben
    Committed,
    /// Ohne Änderung beendet
    Cancelled,
}

/// Wovon die Geste ausgeht
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSubject {
    /// Ende einer bestehenden Beziehung neu verbinden
    Reconnect {
        relationship_id: RelationshipId,
        /// Fester Endpunkt; ersetzt wird `label.opposite()`
        label: EndpointSide,
    },
    /// Neue Beziehung von einem Element-Anker ziehen
    Connect { origin: EndpointRef },
}

/// Warum ein Druck keine Geste gestartet hat
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GestureRejected {
    /// Es läuft bereits eine Geste
    #[error("Es läuft bereits eine Verbindungs-Geste")]
    Busy,
    /// Nicht die primäre Maustaste
    #[error("Taste {0} ist nicht die primäre Maustaste")]
    NotPrimaryButton(u8),
    /// Kein Handle an der Position
    #[error("Kein Reconnect-Handle an dieser Position")]
    NoHandle,
    /// Kein Anker des Elements an der Position
    #[error("Kein Anker von {0} an dieser Position")]
    NoAnchor(ElementId),
    /// Beziehung ist für Interaktion gesperrt (verwaiste Endpunkte)
    #[error("{0} ist für Interaktion gesperrt")]
    Disabled(RelationshipId),
    /// Element existiert nicht
    #[error("{0} existiert nicht")]
    UnknownElement(ElementId),
}

/// Grund für einen Abbruch nach dem Loslassen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Resolver hat kein Ziel gefunden
    NoTarget,
    /// Resolver ist mit einem Fehler abgebrochen
    ResolutionFailed,
    /// Von außen abgebrochen (Escape, Fokusverlust)
    Interrupted,
    /// Beziehung oder Ursprungs-Element existiert nicht mehr
    StaleSubject,
    /// Ziel-Element existiert nicht
    UnknownTarget,
    /// Kein gültiger Pfad zwischen den Endpunkten
    DegeneratePath,
}

/// Ergebnis eines Loslassens oder Abbruchs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Keine Geste aktiv
    NoGesture,
    /// Losgelassen ohne Bewegung (Klick, keine Änderung)
    Clicked,
    /// Ein Ende einer bestehenden Beziehung wurde neu gesetzt
    Reconnected {
        relationship_id: RelationshipId,
        side: EndpointSide,
        endpoint: EndpointRef,
    },
    /// Eine neue Beziehung wurde angelegt
    Connected { source: EndpointRef, target: EndpointRef },
    /// Ohne Änderung beendet
    Cancelled(CancelReason),
}

impl GestureOutcome {
    /// Terminale Phase, über die die Geste beendet wurde (`None` ohne Geste).
    pub fn terminal_phase(&self) -> Option<GesturePhase> {
        match self {
            Self::NoGesture => None,
            Self::Reconnected { .. } | Self::Connected { .. } => Some(GesturePhase::Committed),
            Self::Clicked | Self::Cancelled(_) => Some(GesturePhase::Cancelled),
        }
    }
}

/// Daten der laufenden Geste (nur in `Armed`/`Dragging` vorhanden)
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActiveGesture {
    pub(crate) subject: GestureSubject,
    pub(crate) phase: GesturePhase,
    /// Einmal-Listener für den ersten Move (Armed → Dragging)
    pub(crate) move_listener: ListenerHandle,
    /// Listener für das Loslassen, bleibt bis zum Ende der Geste
    pub(crate) release_listener: ListenerHandle,
    /// Fester Endpunkt zum Zeitpunkt des Drucks
    pub(crate) fixed: EndpointRef,
}

/// Zustandsmaschine für Reconnect- und Connect-Gesten
///
/// Es gibt genau einen Slot für die aktive Geste; ein zweiter Druck während
/// einer laufenden Geste wird mit [`GestureRejected::Busy`] abgewiesen.
#[derive(Debug, Default)]
pub struct ConnectionGestures {
    pub(crate) active: Option<ActiveGesture>,
    pub(crate) listeners: PointerListeners,
}

impl ConnectionGestures {
    /// Erstellt eine Maschine im Zustand `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Phase
    pub fn phase(&self) -> GesturePhase {
        self.active.map_or(GesturePhase::Idle, |g| g.phase)
    }

    /// Subjekt der laufenden Geste
    pub fn subject(&self) -> Option<GestureSubject> {
        self.active.map(|g| g.subject)
    }

    /// `true` solange ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        self.phase() == GesturePhase::Dragging
    }

    /// Während eines Drags sind alle Beziehungen für Interaktion deaktiviert.
    pub fn is_disabled(&self, _relationship_id: RelationshipId) -> bool {
        self.is_dragging()
    }

    /// Die gerade neu verbundene Beziehung wird während des Drags ausgeblendet.
    pub fn is_hidden(&self, relationship_id: RelationshipId) -> bool {
        matches!(
            self.active,
            Some(ActiveGesture {
                phase: GesturePhase::Dragging,
                subject: GestureSubject::Reconnect { relationship_id: id, .. },
                ..
            }) if id == relationship_id
        )
    }

    /// Read-only Sicht auf das Listener-Register
    pub fn listeners(&self) -> &PointerListeners {
        &self.listeners
    }
}
