//! Geometrie-Hilfsfunktionen: Manhattan-Vorschau, projizierte Abstände, Längen.

use super::Projection;
use glam::{DVec2, DVec3};

/// Toleranz für Punktgleichheit in mm.
pub const DEFAULT_WAYPOINT_EPSILON: f64 = 0.1;

/// Orthogonale Vorschau vom letzten Wegpunkt `last` zum Cursor `cursor`.
///
/// Bewegt sich nur entlang der Ebenen-Achse mit dem größeren Abstand; bei
/// Gleichstand gewinnt die horizontale Achse. Die konstante Achse wird aus
/// `last` übernommen.
pub fn manhattan_preview(projection: &Projection, last: DVec3, cursor: DVec3) -> DVec3 {
    let (a, b) = projection.plane_axes();
    let da = (a.get(cursor) - a.get(last)).abs();
    let db = (b.get(cursor) - b.get(last)).abs();

    let mut preview = last;
    if da >= db {
        a.set(&mut preview, a.get(cursor));
    } else {
        b.set(&mut preview, b.get(cursor));
    }
    preview
}

/// Kürzester Abstand von `p` zur Strecke `a`–`b` in 2D.
///
/// Degenerierte Strecken (a == b) liefern den Punktabstand.
pub fn point_segment_distance_2d(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f64::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Abstand von `p` zur Strecke `a`–`b`, projiziert in die Ebene der Ansicht.
pub fn projected_segment_distance(projection: &Projection, p: DVec3, a: DVec3, b: DVec3) -> f64 {
    point_segment_distance_2d(
        projection.project(p),
        projection.project(a),
        projection.project(b),
    )
}

/// Komponentenweise Gleichheit innerhalb `epsilon`.
pub fn points_equal(a: DVec3, b: DVec3, epsilon: f64) -> bool {
    (a - b).abs().max_element() < epsilon
}

/// Summe der euklidischen Segmentlängen eines Polygonzugs.
pub fn polyline_length(points: &[DVec3]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
