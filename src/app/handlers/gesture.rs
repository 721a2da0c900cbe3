//! Handler für Reconnect- und Drag-to-Connect-Gesten.

use crate::app::gesture::{DropTargetResolver, GestureOutcome, GestureRejected};
use crate::app::state::GestureFeedback;
use crate::app::EditorSession;
use crate::core::ElementId;
use crate::repository::Repository;

fn report_rejection<R, D>(session: &mut EditorSession<R, D>, rejected: GestureRejected) {
    match rejected {
        GestureRejected::NoHandle
        | GestureRejected::NoAnchor(_)
        | GestureRejected::NotPrimaryButton(_) => {
            log::debug!("Geste nicht gestartet: {}", rejected)
        }
        _ => log::warn!("Geste abgewiesen: {}", rejected),
    }
    session.gesture_feedback = Some(GestureFeedback::Rejected(rejected));
}

/// Startet eine Reconnect-Geste am Handle unter `world_pos`.
pub fn begin_reconnect<R: Repository, D: DropTargetResolver>(
    session: &mut EditorSession<R, D>,
    world_pos: glam::Vec2,
    button: u8,
) {
    match session
        .gestures
        .press_handle(&session.repository, world_pos, button, &session.options)
    {
        Ok(handle) => {
            log::debug!(
                "Reconnect an {} gestartet ({:?} bleibt fest)",
                handle.relationship_id,
                handle.label
            );
            session.gesture_feedback = None;
        }
        Err(rejected) => report_rejection(session, rejected),
    }
}

/// Startet Drag-to-Connect am Anker von `element_id`.
pub fn begin_connect<R: Repository, D: DropTargetResolver>(
    session: &mut EditorSession<R, D>,
    element_id: ElementId,
    world_pos: glam::Vec2,
    button: u8,
) {
    match session.gestures.press_anchor(
        &session.repository,
        element_id,
        world_pos,
        button,
        &session.options,
    ) {
        Ok(origin) => {
            log::debug!("Verbinden von {:?} gestartet", origin);
            session.gesture_feedback = None;
        }
        Err(rejected) => report_rejection(session, rejected),
    }
}

/// Aktualisiert die Pointer-Position der laufenden Geste.
pub fn update<R, D>(session: &mut EditorSession<R, D>, world_pos: glam::Vec2) {
    session.gestures.pointer_moved(world_pos);
}

/// Schließt die laufende Geste ab; wartet auf die Drop-Ziel-Auflösung.
pub async fn finish<R: Repository, D: DropTargetResolver>(
    session: &mut EditorSession<R, D>,
    world_pos: glam::Vec2,
) {
    let outcome = session
        .gestures
        .release(
            world_pos,
            &mut session.repository,
            &session.resolver,
            &session.options,
        )
        .await;
    record_outcome(session, outcome);
}

/// Bricht die laufende Geste ab.
pub fn cancel<R, D>(session: &mut EditorSession<R, D>) {
    let outcome = session.gestures.interrupt();
    record_outcome(session, outcome);
}

fn record_outcome<R, D>(session: &mut EditorSession<R, D>, outcome: GestureOutcome) {
    if outcome != GestureOutcome::NoGesture {
        session.gesture_feedback = Some(GestureFeedback::Finished(outcome));
    }
}
