//! Handler für Element-Editing und Optionen.

use crate::app::gesture::DropTargetResolver;
use crate::app::EditorSession;
use crate::core::ElementId;
use crate::repository::{Repository, RepositoryIntent};
use crate::shared::EditorOptions;

/// Verschiebt ein Element; gebundene Pfade berechnet der Store neu.
pub fn move_element<R: Repository, D: DropTargetResolver>(
    session: &mut EditorSession<R, D>,
    element_id: ElementId,
    delta: glam::Vec2,
) {
    session
        .repository
        .dispatch(RepositoryIntent::MoveElement { element_id, delta });
}

/// Setzt das Hover-Flag eines Elements.
pub fn set_hover<R: Repository, D: DropTargetResolver>(
    session: &mut EditorSession<R, D>,
    element_id: ElementId,
    hovered: bool,
) {
    session.repository.dispatch(RepositoryIntent::HoverElement {
        element_id,
        hovered,
    });
}

/// Schaltet ein Element in den interaktiven Modus.
pub fn make_interactive<R: Repository, D: DropTargetResolver>(
    session: &mut EditorSession<R, D>,
    element_id: ElementId,
) {
    log::info!("{} ist jetzt interaktiv", element_id);
    session
        .repository
        .dispatch(RepositoryIntent::MakeInteractive { element_id });
}

/// Übernimmt neue Optionen nach Plausibilitätsprüfung.
///
/// Store, Resolver und Command-Log erhalten die neuen Werte ebenfalls. Kann
/// der Store die Lösch-Policy nicht umstellen, bleibt alles unverändert.
pub fn apply_options<R: Repository, D: DropTargetResolver>(
    session: &mut EditorSession<R, D>,
    options: EditorOptions,
) -> anyhow::Result<()> {
    if !(options.handle_length.is_finite() && options.handle_length > 0.0) {
        anyhow::bail!("Handle-Länge muss positiv sein: {}", options.handle_length);
    }
    if options.handle_hit_width.is_nan()
        || options.anchor_hit_radius.is_nan()
        || options.handle_hit_width < 0.0
        || options.anchor_hit_radius < 0.0
    {
        anyhow::bail!(
            "Hit-Breite und Anker-Radius dürfen nicht negativ sein: {} / {}",
            options.handle_hit_width,
            options.anchor_hit_radius
        );
    }
    if options.cascade_relationships_on_delete != session.options.cascade_relationships_on_delete
        && !session
            .repository
            .set_cascade_on_delete(options.cascade_relationships_on_delete)
    {
        anyhow::bail!("Lösch-Policy des Stores ist nach dem Erstellen nicht änderbar");
    }

    session.resolver.apply_options(&options);
    session.command_log.set_capacity(options.command_log_capacity);
    session.options = options;
    log::info!("Optionen übernommen");
    Ok(())
}
