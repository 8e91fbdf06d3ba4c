//! Kurven-Interpolatoren: ein reiner Algorithmus pro Segment-Typ.
//!
//! Die Auswahl läuft über das geschlossene `SegmentKind`-Enum; jeder Arm
//! delegiert an reine Funktionen ohne eigenen Zustand. Degenerierte
//! Eingaben (< 2 Punkte) liefern definierte Trivial-Ergebnisse statt zu
//! panicen, damit jede Editier-Zwischenstufe abfragbar bleibt.

pub mod arc;
pub mod bezier;
pub mod linear;
pub mod spline;

use crate::shared::geometry::polyline_length;
use glam::Vec2;

/// Interpolations-Typ eines Segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentKind {
    /// Strecke aus genau zwei Punkten
    Linear,
    /// Kreisbogen durch genau drei Punkte ("perfect curve")
    Arc,
    /// Bézier-Kurve beliebigen Grades
    #[default]
    Bezier,
    /// Cardinal-Spline durch alle Kontrollpunkte
    Spline,
}

/// Geometrische Länge des Segments.
pub fn length(kind: SegmentKind, points: &[Vec2]) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }
    match kind {
        SegmentKind::Linear => linear::length(points),
        SegmentKind::Arc => arc::length(points),
        SegmentKind::Bezier => bezier::length(points),
        SegmentKind::Spline => spline::length(points),
    }
}

/// Punkt bei anteiliger Bogenlänge `pct` ∈ [0, 1].
pub fn point_at(kind: SegmentKind, points: &[Vec2], pct: f32) -> Vec2 {
    if points.len() < 2 {
        return points.first().copied().unwrap_or(Vec2::ZERO);
    }
    match kind {
        SegmentKind::Linear => linear::point_at(points, pct),
        SegmentKind::Arc => arc::point_at(points, pct),
        SegmentKind::Bezier => bezier::point_at(points, pct),
        SegmentKind::Spline => spline::point_at(points, pct),
    }
}

/// Diskretisiert das Segment zu einer Polyline.
pub fn flatten(kind: SegmentKind, points: &[Vec2]) -> Vec<Vec2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    match kind {
        SegmentKind::Linear => linear::flatten(points),
        SegmentKind::Arc => arc::flatten(points),
        SegmentKind::Bezier => bezier::flatten(points),
        SegmentKind::Spline => spline::flatten(points),
    }
}

/// Diskretisiert das Segment, gekürzt auf den Anteil `pct` der Bogenlänge.
pub fn flatten_clipped(kind: SegmentKind, points: &[Vec2], pct: f32) -> Vec<Vec2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    match kind {
        SegmentKind::Linear => linear::flatten_clipped(points, pct),
        SegmentKind::Arc => arc::flatten_clipped(points, pct),
        SegmentKind::Bezier => bezier::flatten_clipped(points, pct),
        SegmentKind::Spline => spline::flatten_clipped(points, pct),
    }
}

/// Drückt das Segment als kubische Bézier-Kontrollpunkte aus.
///
/// Zusammenfallende Punkte trennen benachbarte Kurvengruppen — dieselbe
/// Konvention, mit der das .osu-Format zusammengesetzte `B`-Slider kodiert.
pub fn bezier_form(kind: SegmentKind, points: &[Vec2]) -> Vec<Vec2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    match kind {
        SegmentKind::Linear => linear::bezier_form(points),
        SegmentKind::Arc => arc::bezier_form(points),
        SegmentKind::Bezier => bezier::bezier_form(points),
        SegmentKind::Spline => spline::bezier_form(points),
    }
}

/// Punkt bei anteiliger Bogenlänge entlang einer Polyline.
///
/// Läuft die Samples auf und interpoliert innerhalb des getroffenen
/// Teilstücks linear.
pub(crate) fn point_on_polyline(samples: &[Vec2], pct: f32) -> Vec2 {
    let Some(&first) = samples.first() else {
        return Vec2::ZERO;
    };
    let total = polyline_length(samples);
    if total <= f32::EPSILON {
        return first;
    }
    let target = total * pct.clamp(0.0, 1.0);
    let mut walked = 0.0;
    for w in samples.windows(2) {
        let step = w[0].distance(w[1]);
        if walked + step >= target {
            if step <= f32::EPSILON {
                return w[1];
            }
            let t = (target - walked) / step;
            return w[0].lerp(w[1], t);
        }
        walked += step;
    }
    samples[samples.len() - 1]
}

/// Kürzt eine Polyline auf den Anteil `pct` ihrer Bogenlänge.
///
/// Der Schnittpunkt wird als letztes Sample eingefügt.
pub(crate) fn clip_polyline(samples: &[Vec2], pct: f32) -> Vec<Vec2> {
    if pct >= 1.0 || samples.len() < 2 {
        return samples.to_vec();
    }
    let total = polyline_length(samples);
    let target = total * pct.max(0.0);
    let mut clipped = vec![samples[0]];
    let mut walked = 0.0;
    for w in samples.windows(2) {
        let step = w[0].distance(w[1]);
        if walked + step >= target {
            if step > f32::EPSILON {
                let t = (target - walked) / step;
                clipped.push(w[0].lerp(w[1], t));
            }
            break;
        }
        clipped.push(w[1]);
        walked += step;
    }
    clipped
}

/// Flacht eine Folge kubischer 4-Punkt-Gruppen zu einer Polyline ab.
///
/// Nahtpunkte zwischen den Gruppen werden nicht doppelt ausgegeben.
pub(crate) fn flatten_cubic_chain(control: &[Vec2]) -> Vec<Vec2> {
    let mut samples: Vec<Vec2> = Vec::new();
    for group in control.chunks_exact(4) {
        let part = bezier::flatten(group);
        if samples.is_empty() {
            samples.extend(part);
        } else {
            samples.extend(part.into_iter().skip(1));
        }
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degenerierte_eingaben_liefern_trivialergebnisse() {
        let single = [Vec2::new(3.0, 4.0)];
        assert_eq!(length(SegmentKind::Bezier, &single), 0.0);
        assert_eq!(point_at(SegmentKind::Bezier, &single, 0.5), single[0]);
        assert_eq!(flatten(SegmentKind::Bezier, &single), vec![single[0]]);
        assert_eq!(bezier_form(SegmentKind::Spline, &single), vec![single[0]]);
        assert_eq!(point_at(SegmentKind::Bezier, &[], 0.5), Vec2::ZERO);
    }

    #[test]
    fn test_point_on_polyline_laeuft_bogenlaenge() {
        let samples = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];
        let mid = point_on_polyline(&samples, 0.5);
        assert_relative_eq!(mid.x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(mid.y, 0.0, epsilon = 1e-5);
        assert_eq!(point_on_polyline(&samples, 1.0), samples[2]);
        assert_eq!(point_on_polyline(&samples, 0.0), samples[0]);
    }

    #[test]
    fn test_clip_polyline_schneidet_im_teilstueck() {
        let samples = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];
        let clipped = clip_polyline(&samples, 0.75);
        assert_eq!(clipped.len(), 3);
        assert_relative_eq!(clipped[2].x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(clipped[2].y, 5.0, epsilon = 1e-5);
        // pct = 1 gibt die Polyline unverändert zurück
        assert_eq!(clip_polyline(&samples, 1.0), samples.to_vec());
    }
}
