//! Übergänge der Verbindungs-Geste (press, move, release, interrupt).

use super::handles::{hit_test_anchor, hit_test_handles, ReconnectHandle};
use super::listeners::PointerEventKind;
use super::resolve::{DropRequest, DropTargetResolver};
use super::state::{
    ActiveGesture, CancelReason, ConnectionGestures, GestureOutcome, GesturePhase,
    GestureRejected, GestureSubject,
};
use crate::core::{route_path, ElementId, EndpointRef, EndpointSide};
use crate::repository::{DiagramRead, EndpointChange, Repository, RepositoryIntent};
use crate::shared::{EditorOptions, PRIMARY_BUTTON};
use glam::Vec2;

impl ConnectionGestures {
    /// Druck auf ein Reconnect-Handle: `Idle → Armed`.
    pub fn press_handle(
        &mut self,
        diagram: &dyn DiagramRead,
        pos: Vec2,
        button: u8,
        options: &EditorOptions,
    ) -> Result<ReconnectHandle, GestureRejected> {
        self.check_press(button)?;

        let handle = hit_test_handles(
            diagram,
            pos,
            options.handle_length,
            options.handle_hit_tolerance(),
        )
        .ok_or(GestureRejected::NoHandle)?;

        let fixed = diagram
            .get_relationship(handle.relationship_id)
            .filter(|r| {
                diagram.contains_element(r.source.element_id)
                    && diagram.contains_element(r.target.element_id)
            })
            .map(|r| r.endpoint(handle.label))
            .ok_or(GestureRejected::Disabled(handle.relationship_id))?;

        self.arm(
            GestureSubject::Reconnect {
                relationship_id: handle.relationship_id,
                label: handle.label,
            },
            fixed,
        );
        Ok(handle)
    }

    /// Druck auf einen Element-Anker: startet Drag-to-Connect.
    pub fn press_anchor(
        &mut self,
        diagram: &dyn DiagramRead,
        element_id: ElementId,
        pos: Vec2,
        button: u8,
        options: &EditorOptions,
    ) -> Result<EndpointRef, GestureRejected> {
        self.check_press(button)?;

        let element = diagram
            .get_element(element_id)
            .ok_or(GestureRejected::UnknownElement(element_id))?;
        let anchor = hit_test_anchor(element, pos, options.anchor_hit_radius)
            .ok_or(GestureRejected::NoAnchor(element_id))?;

        let origin = EndpointRef::anchored(element_id, anchor);
        self.arm(GestureSubject::Connect { origin }, origin);
        Ok(origin)
    }

    /// Pointer-Bewegung. Der erste Move nach dem Druck startet den Drag.
    pub fn pointer_moved(&mut self, pos: Vec2) -> GesturePhase {
        let Some(gesture) = self.active.as_mut() else {
            return GesturePhase::Idle;
        };

        if gesture.phase == GesturePhase::Armed
            && self.listeners.is_registered(gesture.move_listener)
        {
            self.listeners.fire(PointerEventKind::Move);
            gesture.phase = GesturePhase::Dragging;
            log::debug!("Geste {:?}: Armed → Dragging bei {:?}", gesture.subject, pos);
        }
        gesture.phase
    }

    /// Loslassen: löst das Drop-Ziel auf und übergibt höchstens einen Intent.
    ///
    /// Die Geste bleibt bis zum Ende der Auflösung im Zustand `Dragging`.
    pub async fn release<R, D>(
        &mut self,
        pos: Vec2,
        repository: &mut R,
        resolver: &D,
        options: &EditorOptions,
    ) -> GestureOutcome
    where
        R: Repository,
        D: DropTargetResolver,
    {
        let Some(gesture) = self.active else {
            return GestureOutcome::NoGesture;
        };
        self.listeners.fire(PointerEventKind::Release);

        if gesture.phase == GesturePhase::Armed {
            return self.finish(GestureOutcome::Clicked);
        }

        let Some(origin) = fixed_endpoint(&gesture, &*repository) else {
            return self.finish(GestureOutcome::Cancelled(CancelReason::StaleSubject));
        };

        let request = DropRequest {
            origin,
            position: pos,
        };
        let target = match resolver.resolve(request, &*repository).await {
            Ok(Some(target)) => target,
            Ok(None) => {
                log::debug!("Kein Drop-Ziel bei {:?}", pos);
                return self.finish(GestureOutcome::Cancelled(CancelReason::NoTarget));
            }
            Err(e) => {
                log::debug!("Drop-Ziel nicht auflösbar: {:#}", e);
                return self.finish(GestureOutcome::Cancelled(CancelReason::ResolutionFailed));
            }
        };

        let outcome = commit(gesture.subject, origin, target, repository, options)
            .unwrap_or_else(GestureOutcome::Cancelled);
        self.finish(outcome)
    }

    /// Abbruch von außen (Escape, Fokusverlust).
    pub fn interrupt(&mut self) -> GestureOutcome {
        if self.active.is_none() {
            return GestureOutcome::NoGesture;
        }
        self.finish(GestureOutcome::Cancelled(CancelReason::Interrupted))
    }

    fn check_press(&self, button: u8) -> Result<(), GestureRejected> {
        if self.active.is_some() {
            return Err(GestureRejected::Busy);
        }
        if button != PRIMARY_BUTTON {
            return Err(GestureRejected::NotPrimaryButton(button));
        }
        Ok(())
    }

    fn arm(&mut self, subject: GestureSubject, fixed: EndpointRef) {
        let move_listener = self.listeners.register(PointerEventKind::Move, true);
        let release_listener = self.listeners.register(PointerEventKind::Release, false);
        self.active = Some(ActiveGesture {
            subject,
            phase: GesturePhase::Armed,
            move_listener,
            release_listener,
            fixed,
        });
        log::debug!("Geste {:?}: Idle → Armed", subject);
    }

    /// Räumt die Listener ab und kehrt nach `Idle` zurück.
    fn finish(&mut self, outcome: GestureOutcome) -> GestureOutcome {
        if let Some(gesture) = self.active.take() {
            self.listeners.remove(gesture.move_listener);
            self.listeners.remove(gesture.release_listener);
            log::debug!(
                "Geste {:?}: {:?} → Idle ({:?})",
                gesture.subject,
                outcome.terminal_phase(),
                outcome
            );
        }
        outcome
    }
}

/// Fester Endpunkt der Geste, sofern er seit dem Druck unverändert existiert.
///
/// Eine Beziehung, deren festes Ende inzwischen auf etwas anderes zeigt, gilt
/// als veraltet, auch wenn ihre ID noch (oder wieder) vergeben ist.
fn fixed_endpoint(gesture: &ActiveGesture, diagram: &dyn DiagramRead) -> Option<EndpointRef> {
    let current = match gesture.subject {
        GestureSubject::Reconnect {
            relationship_id,
            label,
        } => diagram.get_relationship(relationship_id)?.endpoint(label),
        GestureSubject::Connect { origin } => origin,
    };
    (current == gesture.fixed && diagram.contains_element(current.element_id)).then_some(current)
}

fn commit<R: Repository>(
    subject: GestureSubject,
    origin: EndpointRef,
    target: EndpointRef,
    repository: &mut R,
    options: &EditorOptions,
) -> Result<GestureOutcome, CancelReason> {
    let origin_element = repository
        .get_element(origin.element_id)
        .ok_or(CancelReason::StaleSubject)?;
    let target_element = repository
        .get_element(target.element_id)
        .ok_or(CancelReason::UnknownTarget)?;

    match subject {
        GestureSubject::Reconnect {
            relationship_id,
            label,
        } => {
            let side = label.opposite();
            let path = match side {
                EndpointSide::Target => route_path(
                    origin_element,
                    origin.anchor,
                    target_element,
                    target.anchor,
                ),
                EndpointSide::Source => route_path(
                    target_element,
                    target.anchor,
                    origin_element,
                    origin.anchor,
                ),
            }
            .map_err(|e| {
                log::debug!("Reconnect von {} verworfen: {}", relationship_id, e);
                CancelReason::DegeneratePath
            })?;

            repository.dispatch(RepositoryIntent::Connect {
                relationship_id,
                change: EndpointChange {
                    side,
                    endpoint: target,
                    path,
                },
            });
            Ok(GestureOutcome::Reconnected {
                relationship_id,
                side,
                endpoint: target,
            })
        }
        GestureSubject::Connect { .. } => {
            let path = route_path(origin_element, origin.anchor, target_element, target.anchor)
                .map_err(|e| {
                    log::debug!("Neue Beziehung verworfen: {}", e);
                    CancelReason::DegeneratePath
                })?;

            repository.dispatch(RepositoryIntent::AddRelationship {
                kind: options.default_relationship_kind,
                source: origin,
                target,
                path,
            });
            Ok(GestureOutcome::Connected {
                source: origin,
                target,
            })
        }
    }
}
