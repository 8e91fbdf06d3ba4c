//! Reine Geometrie-Funktionen für Punkte, Winkel und Polylines.
//!
//! Layer-neutral: kann von `core`, `curve` und `app` importiert werden,
//! ohne Zirkel-Abhängigkeiten zu erzeugen. Quadrierte Abstände kommen
//! direkt aus `glam` (`Vec2::distance_squared`).

use glam::Vec2;

/// Vorzeichenbehaftete Differenz der Strahl-Winkel p2→p1 und p2→p3 am
/// Scheitel `p2`.
///
/// Ergebnis in (−2π, 2π). Das Vorzeichen trägt die Drehrichtung und wird
/// von der Bogen-Mathematik auf die Sweep-Richtung normiert.
pub fn signed_angle(p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
    let a = (p1.y - p2.y).atan2(p1.x - p2.x);
    let b = (p3.y - p2.y).atan2(p3.x - p2.x);
    a - b
}

/// Absoluter Winkel zwischen den Strahlen p2→p1 und p2→p3 am Scheitel `p2`.
///
/// Ergebnis in [0, 2π). Wird vom Kanten-Hit-Test genutzt, um zu prüfen,
/// ob die Lot-Projektion eines Punkts innerhalb der Kante liegt.
pub fn angle_between(p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
    signed_angle(p1, p2, p3).abs()
}

/// Prüft, ob p1→p2→p3 im Uhrzeigersinn liegen (Bildschirm-Konvention,
/// y-Achse nach unten).
///
/// Vorzeichen des 2D-Kreuzprodukts von (p3−p1) und (p2−p1). Diese
/// Konvention muss in der gesamten Bogen-Mathematik identisch verwendet
/// werden, sonst kippt die Sweep-Richtung.
pub fn is_clockwise(p1: Vec2, p2: Vec2, p3: Vec2) -> bool {
    (p3 - p1).perp_dot(p2 - p1) > 0.0
}

/// Rotiert einen Punkt um den Ursprung.
pub fn rotate_point(pt: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(pt.x * c - pt.y * s, pt.x * s + pt.y * c)
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_angle_between_rechter_winkel() {
        let vertex = Vec2::new(0.0, 0.0);
        let a = Vec2::new(10.0, 0.0);
        let b = Vec2::new(0.0, 10.0);
        assert_relative_eq!(angle_between(a, vertex, b), FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn test_angle_between_gestreckter_winkel() {
        let vertex = Vec2::new(5.0, 5.0);
        let a = Vec2::new(0.0, 5.0);
        let b = Vec2::new(10.0, 5.0);
        assert_relative_eq!(angle_between(a, vertex, b), PI, epsilon = 1e-6);
    }

    #[test]
    fn test_signed_angle_traegt_drehrichtung() {
        let vertex = Vec2::ZERO;
        let a = Vec2::new(10.0, 0.0);
        let b = Vec2::new(0.0, 10.0);
        // a liegt winkelmaessig unter b → negative Differenz
        assert_relative_eq!(signed_angle(a, vertex, b), -FRAC_PI_2, epsilon = 1e-6);
        assert_relative_eq!(signed_angle(b, vertex, a), FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn test_is_clockwise_bildschirmkonvention() {
        // Rechts-Kurve nach oben (y-down): Uhrzeigersinn
        assert!(is_clockwise(
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(100.0, 0.0)
        ));
        // Umgekehrte Reihenfolge: Gegen-Uhrzeigersinn
        assert!(!is_clockwise(
            Vec2::new(100.0, 0.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(0.0, 0.0)
        ));
    }

    #[test]
    fn test_is_clockwise_kollinear_ist_falsch() {
        assert!(!is_clockwise(
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(10.0, 0.0)
        ));
    }

    #[test]
    fn test_rotate_point_vierteldrehung() {
        let rotated = rotate_point(Vec2::new(1.0, 0.0), FRAC_PI_2);
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_polyline_length() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 4.0),
            Vec2::new(3.0, 14.0),
        ];
        assert_relative_eq!(polyline_length(&points), 15.0, epsilon = 1e-6);
        assert_eq!(polyline_length(&points[..1]), 0.0);
        assert_eq!(polyline_length(&[]), 0.0);
    }
}
