//! UML Diagram Editor (Headless-Demo).
//!
//! Spielt eine kurze Sitzung ohne Oberfläche ab: Komponentendiagramm aus der
//! Palette aufbauen, ein Beziehungsende neu verbinden, eine neue Beziehung
//! ziehen und die Selektion gegen den Store bereinigen.

use uml_diagram_editor::core::{compose_component_preview, route_path};
use uml_diagram_editor::{
    Anchor, DiagramRead, EditorController, EditorIntent, EditorOptions, EditorSession, Element,
    ElementId, ElementKind, EndpointRef, Relationship, RelationshipId, RelationshipKind,
};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "UML Diagram Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut session = EditorSession::with_options(options);
    let mut controller = EditorController::new();

    seed_diagram(&mut session)?;
    pollster::block_on(run_script(&mut controller, &mut session))?;
    report(&session);
    Ok(())
}

/// Platziert Komponente und Schnittstelle aus der Palette plus eine Klasse.
fn seed_diagram(session: &mut EditorSession) -> anyhow::Result<()> {
    let placements = [glam::Vec2::new(0.0, 0.0), glam::Vec2::new(400.0, 40.0)];
    for (mut element, position) in compose_component_preview(1.0).into_iter().zip(placements) {
        element.id = session.repository.next_element_id();
        element.bounds.position = position;
        session.repository.insert_element(element);
    }
    session.repository.insert_element(Element::new(
        ElementId(3),
        ElementKind::Class,
        "Client",
        glam::Vec2::new(400.0, 300.0),
    ));

    let (Some(component), Some(interface)) = (
        session.repository.get_element(ElementId(1)).cloned(),
        session.repository.get_element(ElementId(2)).cloned(),
    ) else {
        anyhow::bail!("Palette lieferte keine zwei Elemente");
    };
    let path = route_path(&component, Some(Anchor::Right), &interface, Some(Anchor::Left))?;
    session.repository.insert_relationship(Relationship {
        id: RelationshipId(1),
        kind: RelationshipKind::ComponentInterfaceProvided,
        source: EndpointRef::anchored(ElementId(1), Anchor::Right),
        target: EndpointRef::anchored(ElementId(2), Anchor::Left),
        path,
    });
    Ok(())
}

async fn run_script(
    controller: &mut EditorController,
    session: &mut EditorSession,
) -> anyhow::Result<()> {
    let handle_pos = session
        .repository
        .get_relationship(RelationshipId(1))
        .map(|r| r.path.target_point() - glam::Vec2::new(10.0, 0.0))
        .unwrap_or_default();

    let script = vec![
        EditorIntent::SelectionReplaced {
            element_ids: vec![ElementId(2), ElementId(3)],
            relationship_ids: vec![RelationshipId(1)],
        },
        // Schnittstellen-Ende von R1 greifen und auf die Klasse ziehen
        EditorIntent::HandlePressed {
            world_pos: handle_pos,
            button: 1,
        },
        EditorIntent::PointerMoved {
            world_pos: glam::Vec2::new(450.0, 320.0),
        },
        EditorIntent::PointerReleased {
            world_pos: glam::Vec2::new(500.0, 350.0),
        },
        // Neue Beziehung vom unteren Anker der Komponente zur Schnittstelle
        EditorIntent::AnchorPressed {
            element_id: ElementId(1),
            world_pos: glam::Vec2::new(100.0, 100.0),
            button: 1,
        },
        EditorIntent::PointerMoved {
            world_pos: glam::Vec2::new(300.0, 100.0),
        },
        EditorIntent::PointerReleased {
            world_pos: glam::Vec2::new(410.0, 50.0),
        },
        EditorIntent::ElementHoverChanged {
            element_id: ElementId(3),
            hovered: true,
        },
        EditorIntent::ElementClicked {
            element_id: ElementId(3),
            button: 1,
        },
    ];

    for intent in script {
        controller.handle_intent(session, intent).await?;
    }

    // Schnittstelle entfernen: Selektion wird vom Store-Listener bereinigt
    session.repository.remove_element(ElementId(2));
    Ok(())
}

fn report(session: &EditorSession) {
    let selection = session.current_selection();
    log::info!(
        "{} Elemente, {} Beziehungen, {} verwaist",
        session.repository.element_count(),
        session.repository.relationship_count(),
        session.repository.invalid_relationships().len()
    );
    log::info!(
        "Selektion: Elemente {:?}, Beziehungen {:?}",
        selection.element_ids,
        selection.relationship_ids
    );
    log::info!(
        "{} Commands ausgeführt, letzte Geste: {:?}",
        session.command_log.len(),
        session.gesture_feedback
    );
}
