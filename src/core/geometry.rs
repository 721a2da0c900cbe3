//! Reine 2D-Geometrie für Relationship-Pfade und Reconnect-Handles.
//!
//! Alle Funktionen sind seiteneffektfrei. Degenerierte Eingaben (Nullvektor,
//! zusammenfallende Endpunkte) liefern `None` statt NaN-Koordinaten.

use glam::Vec2;

/// Normalisiert einen Vektor. `None` bei Länge 0.
pub fn normalize(v: Vec2) -> Option<Vec2> {
    let length = v.length();
    if length <= f32::EPSILON {
        return None;
    }
    Some(v / length)
}

/// Verschiebt `origin` um `distance` entlang der Einheitsrichtung `direction`.
#[inline]
pub fn point_along(origin: Vec2, direction: Vec2, distance: f32) -> Vec2 {
    origin + direction * distance
}

/// Baut das Greif-Handle an einem Pfadende.
///
/// `from_start = true` verankert das Handle an `path[0]` und verlängert es um
/// `handle_length` Richtung `path[1]`. Mit `from_start = false` wird der
/// umgekehrte Pfad verwendet. Nur die ersten beiden Punkte bestimmen die
/// Richtung; Knicke im Inneren haben keinen Einfluss.
pub fn compose_handle_segment(
    path: &[Vec2],
    from_start: bool,
    handle_length: f32,
) -> Option<[Vec2; 2]> {
    if path.len() < 2 {
        return None;
    }

    let (anchor, next) = if from_start {
        (path[0], path[1])
    } else {
        (path[path.len() - 1], path[path.len() - 2])
    };

    let direction = normalize(next - anchor)?;
    Some([anchor, point_along(anchor, direction, handle_length)])
}

/// Abstand eines Punkts zu einer geschlossenen Strecke `a`–`b`.
///
/// Eine degenerierte Strecke liefert den Abstand zu `a`.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }

    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}
