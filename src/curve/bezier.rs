//! Bézier-Segment: Abflachung über rekursive De-Casteljau-Unterteilung.
//!
//! Die Unterteilung läuft über einen expliziten Stack statt echter
//! Rekursion, damit der Speicherbedarf unabhängig von der Kurvenform
//! beschränkt bleibt. Samples werden von links nach rechts ausgegeben.

use super::{clip_polyline, point_on_polyline};
use crate::shared::geometry::polyline_length;
use crate::shared::options::BEZIER_TOLERANCE;
use glam::Vec2;

/// Flach genug: für jeden inneren Punkt gilt |pp − 2p + np|² ≤ 4·tol².
fn is_flat_enough(points: &[Vec2]) -> bool {
    let limit = BEZIER_TOLERANCE * BEZIER_TOLERANCE * 4.0;
    points.windows(3).all(|w| {
        let second_diff = w[0] - 2.0 * w[1] + w[2];
        second_diff.length_squared() <= limit
    })
}

/// De-Casteljau-Halbierung bei t = 0.5.
///
/// `left` erhält die linke Spalte des Differenzenschemas, `right` die
/// rechte Anti-Diagonale; beide beschreiben die Kurve auf [0, 0.5] bzw.
/// [0.5, 1].
fn subdivide(points: &[Vec2], left: &mut [Vec2], right: &mut [Vec2]) {
    let count = points.len();
    let mut midpoints = points.to_vec();
    for i in 0..count {
        left[i] = midpoints[0];
        right[count - i - 1] = midpoints[count - i - 1];
        for j in 0..count - i - 1 {
            midpoints[j] = (midpoints[j] + midpoints[j + 1]) * 0.5;
        }
    }
}

/// Gibt die Samples eines ausreichend flachen Kontrollpolygons aus.
///
/// Die inneren Samples werden über beide Hälften der Halbierung geglättet
/// (gewichteter Mittelwert benachbarter Zwischenpunkte).
fn approximate(points: &[Vec2], output: &mut Vec<Vec2>) {
    let count = points.len();
    let mut left = vec![Vec2::ZERO; count];
    let mut right = vec![Vec2::ZERO; count];
    subdivide(points, &mut left, &mut right);
    left.extend_from_slice(&right[1..]);

    output.push(points[0]);
    for i in 1..count - 1 {
        let index = 2 * i;
        let p = left[index];
        let pp = left[index - 1];
        let np = left[index + 1];
        output.push(0.25 * (pp + 2.0 * p + np));
    }
}

/// Diskretisiert das Kontrollpolygon zu einer Polyline (Start → Ende).
pub fn flatten(points: &[Vec2]) -> Vec<Vec2> {
    let mut output = Vec::new();
    let mut to_flatten = vec![points.to_vec()];
    while let Some(parent) = to_flatten.pop() {
        if is_flat_enough(&parent) {
            approximate(&parent, &mut output);
            continue;
        }
        let count = parent.len();
        let mut left = vec![Vec2::ZERO; count];
        let mut right = vec![Vec2::ZERO; count];
        subdivide(&parent, &mut left, &mut right);
        // Linke Hälfte zuletzt pushen, damit sie zuerst abgearbeitet wird
        to_flatten.push(right);
        to_flatten.push(left);
    }
    output.push(points[points.len() - 1]);
    output
}

/// Länge = Polyline-Länge der abgeflachten Samples.
pub fn length(points: &[Vec2]) -> f32 {
    polyline_length(&flatten(points))
}

/// Punkt bei anteiliger Bogenlänge über die abgeflachten Samples.
pub fn point_at(points: &[Vec2], pct: f32) -> Vec2 {
    point_on_polyline(&flatten(points), pct)
}

/// Bis `pct` gekürzte Polyline.
pub fn flatten_clipped(points: &[Vec2], pct: f32) -> Vec<Vec2> {
    clip_polyline(&flatten(points), pct)
}

/// Bézier-Darstellung: das Kontrollpolygon unverändert.
pub fn bezier_form(points: &[Vec2]) -> Vec<Vec2> {
    points.to_vec()
}
