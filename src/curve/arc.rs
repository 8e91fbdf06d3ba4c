//! Kreisbogen-Segment: genau drei Punkte (Start, Durchgangspunkt, Ende).
//!
//! Der Kreis wird über den Mittelsenkrechten-Schnitt bestimmt; kollineare
//! Punkte fallen auf einen degenerierten Bogen mit Mittelpunkt auf der
//! Strecke Start→Durchgangspunkt zurück. Die Sweep-Richtung kommt aus
//! `is_clockwise` und muss überall dieselbe bleiben.

use super::{clip_polyline, flatten_cubic_chain, point_on_polyline};
use crate::shared::geometry::{is_clockwise, rotate_point, signed_angle};
use crate::shared::options::ARC_MAX_PART_ANGLE;
use glam::Vec2;
use std::f32::consts::TAU;

/// Kreismittelpunkt durch drei Punkte (Mittelsenkrechten-Schnitt).
///
/// Bei kollinearen Punkten (Determinante ≈ 0) Mittelpunkt der Strecke
/// p1→p2, damit nie NaN/Infinity entsteht.
fn circle_center(p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    let a = p2.x - p1.x;
    let b = p2.y - p1.y;
    let c = p3.x - p1.x;
    let d = p3.y - p1.y;
    let e = a * (p1.x + p2.x) + b * (p1.y + p2.y);
    let f = c * (p1.x + p3.x) + d * (p1.y + p3.y);
    let g = 2.0 * (a * (p3.y - p2.y) - b * (p3.x - p2.x));
    if g.abs() < f32::EPSILON {
        (p1 + p2) * 0.5
    } else {
        Vec2::new((d * e - b * f) / g, (a * f - c * e) / g)
    }
}

/// Gesamt-Sweep des Bogens (Radiant, ≥ 0) plus Drehrichtung.
///
/// Die beiden Teilwinkel werden auf die Drehrichtung normiert: im
/// Uhrzeigersinn nicht-negativ, gegen den Uhrzeigersinn nicht-positiv.
/// Erst diese Normierung macht aus den beiden Strahl-Differenzen einen
/// korrekt vorzeichenbehafteten Gesamt-Sweep.
fn sweep(points: &[Vec2], center: Vec2) -> (f32, bool) {
    let cw = is_clockwise(points[0], points[1], points[2]);
    let mut a1 = signed_angle(points[0], center, points[1]);
    let mut a2 = signed_angle(points[1], center, points[2]);
    if cw {
        if a1 < 0.0 {
            a1 += TAU;
        }
        if a2 < 0.0 {
            a2 += TAU;
        }
    } else {
        if a1 > 0.0 {
            a1 -= TAU;
        }
        if a2 > 0.0 {
            a2 -= TAU;
        }
    }
    ((a1 + a2).abs(), cw)
}

/// Bogenlänge = Radius × Sweep.
pub fn length(points: &[Vec2]) -> f32 {
    let center = circle_center(points[0], points[1], points[2]);
    let radius = points[0].distance(center);
    let (arc_angle, _) = sweep(points, center);
    radius * arc_angle
}

/// Kubische Approximation eines Einheitskreis-Bogens.
///
/// Start bei (0, 1), Sweep `angle`; Kontrollpunkt-Offset nach der
/// Standard-Formel 4/3·tan(θ/4).
fn approximate_unit_arc(angle: f32) -> [Vec2; 4] {
    let f = 4.0 * (angle / 4.0).tan() / 3.0;
    [
        Vec2::new(0.0, 1.0),
        Vec2::new(f, 1.0),
        Vec2::new(
            angle.sin() - f * angle.cos(),
            angle.cos() + f * angle.sin(),
        ),
        rotate_point(Vec2::new(0.0, 1.0), -angle),
    ]
}

/// Zerlegt den Sweep in Teilstücke ≤ 90° und gibt die verketteten
/// kubischen Kontrollpunkte zurück (läuft immer Start → Ende).
///
/// Jedes Teilstück ist die platzierte Einheitsbogen-Approximation:
/// skaliert auf den Radius, an den Startwinkel gedreht, ins Zentrum
/// verschoben. Gegen den Uhrzeigersinn wird die Ausgabe gespiegelt.
pub fn bezier_form(points: &[Vec2]) -> Vec<Vec2> {
    let center = circle_center(points[0], points[1], points[2]);
    let radius = points[0].distance(center);
    let (arc_angle, cw) = sweep(points, center);

    let mut parts = 1u32;
    while arc_angle / parts as f32 > ARC_MAX_PART_ANGLE {
        parts += 1;
    }
    let part_angle = arc_angle / parts as f32;
    let unit_arc = approximate_unit_arc(part_angle);

    // Referenz: Winkel vom Einheitsbogen-Start (0, 1) zum Sweep-Start.
    // Gegen den Uhrzeigersinn wird vom Endpunkt aus generiert.
    let reference = center + Vec2::new(0.0, 1.0);
    let sweep_start = if cw { points[0] } else { points[2] };
    let initial_angle = signed_angle(reference, center, sweep_start);

    let mut bpoints = Vec::with_capacity(parts as usize * 4);
    for i in 0..parts {
        let rotation = -initial_angle - i as f32 * part_angle;
        for pt in unit_arc {
            bpoints.push(rotate_point(pt * radius, rotation) + center);
        }
    }
    if !cw {
        bpoints.reverse();
    }
    bpoints
}

/// Diskretisierung über die kubischen Teilstücke.
pub fn flatten(points: &[Vec2]) -> Vec<Vec2> {
    flatten_cubic_chain(&bezier_form(points))
}

/// Punkt bei anteiliger Bogenlänge über die Diskretisierung.
pub fn point_at(points: &[Vec2], pct: f32) -> Vec2 {
    point_on_polyline(&flatten(points), pct)
}

/// Bis `pct` gekürzte Diskretisierung.
pub fn flatten_clipped(points: &[Vec2], pct: f32) -> Vec<Vec2> {
    clip_polyline(&flatten(points), pct)
}
