//! Cardinal-Spline-Segment (Catmull-Rom-artig) durch alle Kontrollpunkte.
//!
//! Innere Punkte erhalten zwei Steuerpunkte auf der normierten
//! Nachbar-Tangente, skaliert mit der Tension und dem Abstand zum
//! vorigen bzw. nächsten Punkt. Endpunkte bekommen einen einzelnen
//! Steuerpunkt auf halbem Weg zum nahen Steuerpunkt des Nachbarn.
//! Gerendert wird als Kette kubischer Bézier-Stücke durch alle Punkte.

use super::{clip_polyline, flatten_cubic_chain, point_on_polyline};
use crate::shared::geometry::polyline_length;
use crate::shared::options::SPLINE_TENSION;
use glam::Vec2;

/// Steuerpunkt-Paar eines Kurvenpunkts: (zum Vorgänger, zum Nachfolger).
///
/// Für Endpunkte ist nur die jeweils innere Hälfte belegt; die äußere
/// bleibt auf dem Punkt selbst.
fn control_points(points: &[Vec2], tension: f32) -> Vec<(Vec2, Vec2)> {
    let count = points.len();
    let mut cpoints: Vec<(Vec2, Vec2)> = points.iter().map(|&p| (p, p)).collect();

    for i in 1..count - 1 {
        let pi = points[i];
        let pp = points[i - 1];
        let pn = points[i + 1];

        // Normierte Tangente aus der Nachbar-Differenz; fallen Vorgänger
        // und Nachfolger zusammen, gibt es keine Richtung.
        let neighbor_delta = pn - pp;
        let neighbor_dist = neighbor_delta.length();
        let dir = if neighbor_dist > f32::EPSILON {
            neighbor_delta / neighbor_dist
        } else {
            Vec2::ZERO
        };

        let dist_prev = pi.distance(pp);
        let dist_next = pi.distance(pn);
        cpoints[i] = (
            pi - dir * dist_prev * tension,
            pi + dir * dist_next * tension,
        );
    }

    if count >= 3 {
        cpoints[0].1 = (points[0] + cpoints[1].0) * 0.5;
        cpoints[count - 1].0 = (points[count - 1] + cpoints[count - 2].1) * 0.5;
    }

    cpoints
}

/// Kettendarstellung als kubische 4-Punkt-Gruppen.
///
/// Jede Spanne i−1→i nutzt den "nächsten" Steuerpunkt des Vorgängers und
/// den "vorigen" Steuerpunkt des aktuellen Punkts. Gemeinsame Kurvenpunkte
/// tauchen an den Nahtstellen doppelt auf (Gruppen-Trenner im .osu-Format).
pub fn bezier_form(points: &[Vec2]) -> Vec<Vec2> {
    let cpoints = control_points(points, SPLINE_TENSION);
    let mut control = Vec::with_capacity((points.len() - 1) * 4);
    for i in 1..points.len() {
        control.push(points[i - 1]);
        control.push(cpoints[i - 1].1);
        control.push(cpoints[i].0);
        control.push(points[i]);
    }
    control
}

/// Diskretisierung über die kubischen Spannen.
pub fn flatten(points: &[Vec2]) -> Vec<Vec2> {
    flatten_cubic_chain(&bezier_form(points))
}

/// Länge = Polyline-Länge der abgeflachten Spannen.
pub fn length(points: &[Vec2]) -> f32 {
    polyline_length(&flatten(points))
}

/// Punkt bei anteiliger Bogenlänge über die Diskretisierung.
pub fn point_at(points: &[Vec2], pct: f32) -> Vec2 {
    point_on_polyline(&flatten(points), pct)
}

/// Bis `pct` gekürzte Diskretisierung.
pub fn flatten_clipped(points: &[Vec2], pct: f32) -> Vec<Vec2> {
    clip_polyline(&flatten(points), pct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bezier_form_laeuft_durch_alle_punkte() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 40.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(150.0, 40.0),
        ];
        let control = bezier_form(&points);
        // Drei Spannen à 4 Kontrollpunkte
        assert_eq!(control.len(), 12);
        // Spannen-Enden sind die Kurvenpunkte selbst
        assert_eq!(control[0], points[0]);
        assert_eq!(control[3], points[1]);
        assert_eq!(control[4], points[1]);
        assert_eq!(control[7], points[2]);
        assert_eq!(control[11], points[3]);
    }

    #[test]
    fn test_innere_steuerpunkte_liegen_auf_der_tangente() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 40.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(150.0, 40.0),
        ];
        let cpoints = control_points(&points, SPLINE_TENSION);
        // Tangente am Punkt 1: Richtung (points[2] − points[0]) normiert
        let dir = (points[2] - points[0]).normalize();
        let (cp, cn) = cpoints[1];
        let to_prev = (points[1] - cp).normalize();
        let to_next = (cn - points[1]).normalize();
        assert_relative_eq!(to_prev.x, dir.x, epsilon = 1e-5);
        assert_relative_eq!(to_prev.y, dir.y, epsilon = 1e-5);
        assert_relative_eq!(to_next.x, dir.x, epsilon = 1e-5);
        assert_relative_eq!(to_next.y, dir.y, epsilon = 1e-5);
    }

    #[test]
    fn test_flatten_beginnt_und_endet_auf_kurvenpunkten() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(40.0, 60.0),
            Vec2::new(90.0, 20.0),
            Vec2::new(140.0, 70.0),
        ];
        let samples = flatten(&points);
        assert_eq!(samples[0], points[0]);
        assert_eq!(samples[samples.len() - 1], points[3]);
    }

    #[test]
    fn test_length_mindestens_sehnenzug() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(40.0, 60.0),
            Vec2::new(90.0, 20.0),
            Vec2::new(140.0, 70.0),
        ];
        let chord = polyline_length(&points);
        let len = length(&points);
        assert!(len >= chord - 1e-3, "Spline kürzer als Sehnenzug: {}", len);
    }

    #[test]
    fn test_zwei_punkte_degenerieren_zur_strecke() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)];
        assert_relative_eq!(length(&points), 100.0, epsilon = 1e-3);
        let control = bezier_form(&points);
        assert_eq!(control, vec![points[0], points[0], points[1], points[1]]);
    }

    #[test]
    fn test_identische_nachbarn_erzeugen_keine_nan() {
        // Vorgänger und Nachfolger am selben Ort: keine Tangentenrichtung
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(0.0, 0.0),
        ];
        let len = length(&points);
        assert!(len.is_finite());
    }
}
