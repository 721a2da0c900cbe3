mod editing;
mod gestures;
mod selection;

use uml_diagram_editor::{
    Anchor, EditorCommand, EditorController, EditorIntent, EditorSession, Element, ElementId,
    ElementKind, EndpointRef, Relationship, RelationshipId, RelationshipKind, RelationshipPath,
};

/// E1 (0,0) --R1--> E2 (400,0), E5 frei bei (400,300).
///
/// R1 läuft von (200,50) nach (400,50); das `Source`-Handle liegt am Pfadende.
pub fn session_with_diagram() -> EditorSession {
    let mut session = EditorSession::new();
    for (id, x, y) in [(1, 0.0, 0.0), (2, 400.0, 0.0), (5, 400.0, 300.0)] {
        session.repository.insert_element(Element::new(
            ElementId(id),
            ElementKind::Class,
            format!("C{id}"),
            glam::Vec2::new(x, y),
        ));
    }
    session.repository.insert_relationship(Relationship {
        id: RelationshipId(1),
        kind: RelationshipKind::Association,
        source: EndpointRef::anchored(ElementId(1), Anchor::Right),
        target: EndpointRef::anchored(ElementId(2), Anchor::Left),
        path: RelationshipPath::straight(
            glam::Vec2::new(200.0, 50.0),
            glam::Vec2::new(400.0, 50.0),
        )
        .expect("gültiger Pfad"),
    });
    session
}

/// Führt eine Intent-Sequenz synchron über den Controller aus.
pub fn run(
    controller: &mut EditorController,
    session: &mut EditorSession,
    intents: Vec<EditorIntent>,
) {
    for intent in intents {
        let label = format!("{intent:?}");
        pollster::block_on(controller.handle_intent(session, intent))
            .unwrap_or_else(|e| panic!("{label} sollte ohne Fehler durchlaufen: {e:#}"));
    }
}

/// Letzter geloggter Command
pub fn last_command(session: &EditorSession) -> &EditorCommand {
    session
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein")
}
