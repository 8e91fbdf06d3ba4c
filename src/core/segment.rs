//! Ein Segment: zusammenhängende Kontrollpunktfolge unter einem
//! Interpolations-Typ.
//!
//! Der Typ ist kein freies Feld: `recompute_kind` leitet ihn nach jeder
//! Strukturänderung neu ab, damit die Invarianten (2 Punkte = Linear,
//! Arc = exakt 3 Punkte) nie verletzt werden.

use crate::curve::{self, SegmentKind};
use crate::shared::geometry::angle_between;
use crate::shared::options::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

/// Treffer der Punkt-Suche innerhalb eines Segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPointHit {
    /// Quadrierter Abstand zum getroffenen Punkt
    pub dist_sq: f32,
    /// Index des getroffenen Punkts
    pub index: usize,
}

/// Treffer der Kanten-Suche innerhalb eines Segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentEdgeHit {
    /// Lot-Abstand zur getroffenen Kante
    pub dist: f32,
    /// Index des hinteren Kantenpunkts (Einfüge-Position für neue Punkte)
    pub index: usize,
}

/// Achsenparalleles Begrenzungsrechteck in Map-Einheiten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Invers mit dem Spielfeld initialisiert: `min` auf der Feldgröße,
    /// `max` auf 0. Eine leere Punktmenge ergibt so das Spielfeld selbst
    /// (Mittelpunkt = Feldmitte) statt degenerierter Unendlichkeiten.
    pub fn playfield_seed() -> Self {
        Self {
            min: Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
            max: Vec2::ZERO,
        }
    }

    /// Erweitert das Rechteck um einen Punkt.
    pub fn include(&mut self, point: Vec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Vereinigt zwei Rechtecke.
    pub fn merge(&mut self, other: Bounds) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Gerundeter Mittelpunkt des Rechtecks.
    pub fn midpoint(&self) -> Vec2 {
        ((self.max + self.min) * 0.5).round()
    }
}

/// Ein Segment des Slider-Pfads.
#[derive(Debug, Clone, Default)]
pub struct Segment {
    /// Kontrollpunkte in geometrischer Reihenfolge (0 = Start)
    points: Vec<Vec2>,
    /// Aktueller Interpolations-Typ
    kind: SegmentKind,
}

impl Segment {
    /// Erstellt ein leeres Segment (degenerierter Bézier-Platzhalter).
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt ein Segment aus Punkten; der Typ wird sofort abgeleitet.
    pub fn from_points(points: Vec<Vec2>, kind: SegmentKind) -> Self {
        let mut segment = Self { points, kind };
        segment.recompute_kind();
        segment
    }

    /// Kontrollpunkte in geometrischer Reihenfolge.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Prüft ob das Segment keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Aktueller Interpolations-Typ.
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Setzt den Typ direkt.
    ///
    /// Nur für den Through-Umschalter des Pfads gedacht, der die
    /// Punktzahl-Regeln selbst prüft; die nächste Strukturänderung
    /// erzwingt die Invarianten ohnehin wieder.
    pub(crate) fn set_kind(&mut self, kind: SegmentKind) {
        self.kind = kind;
    }

    /// Letzter Kontrollpunkt.
    pub fn last_point(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    /// Prüft ob `point` koordinatengleich mit dem vorletzten Punkt ist.
    ///
    /// Grundlage der "Klick auf den vorletzten Punkt setzt einen Anker"-
    /// Geste beim Zeichnen.
    pub fn is_second_last_point(&self, point: Vec2) -> bool {
        self.points.len() >= 2 && self.points[self.points.len() - 2] == point
    }

    // ── Punkt-Operationen ───────────────────────────────────────

    /// Hängt einen Punkt an.
    pub fn push_point(&mut self, point: Vec2) {
        self.points.push(point);
        self.recompute_kind();
    }

    /// Entfernt den letzten Punkt.
    pub fn pop_point(&mut self) -> Option<Vec2> {
        let popped = self.points.pop();
        self.recompute_kind();
        popped
    }

    /// Fügt einen Punkt vor `index` ein. Ungültige Indizes sind No-ops.
    pub fn insert_point(&mut self, point: Vec2, index: usize) {
        if index > self.points.len() {
            return;
        }
        self.points.insert(index, point);
        self.recompute_kind();
    }

    /// Löscht den Punkt an `index`. Ungültige Indizes sind No-ops.
    pub fn delete_point(&mut self, index: usize) {
        if index >= self.points.len() {
            return;
        }
        self.points.remove(index);
        self.recompute_kind();
    }

    /// Verschiebt den Punkt an `index` (keine Typ-Ableitung nötig).
    pub fn move_point(&mut self, index: usize, point: Vec2) {
        if let Some(slot) = self.points.get_mut(index) {
            *slot = point;
        }
    }

    /// Leitet den Typ nach jeder Strukturänderung neu ab.
    ///
    /// Regeln:
    /// - < 2 Punkte: degenerierter Platzhalter → `Bezier`
    /// - genau 2 Punkte: nur eine Strecke möglich → `Linear`
    /// - `Linear` wächst über 2 Punkte → `Bezier`
    /// - `Arc` verlässt exakt 3 Punkte → `Bezier`
    fn recompute_kind(&mut self) {
        let len = self.points.len();
        if len < 2 {
            self.kind = SegmentKind::Bezier;
        } else if len == 2 {
            self.kind = SegmentKind::Linear;
        } else if self.kind == SegmentKind::Linear {
            self.kind = SegmentKind::Bezier;
        } else if self.kind == SegmentKind::Arc && len > 3 {
            self.kind = SegmentKind::Bezier;
        }
    }

    // ── Hit-Tests ───────────────────────────────────────────────

    /// Nächster Kontrollpunkt unter der Schwelle (strikt kleiner).
    pub fn near_point(&self, query: Vec2, max_dist_sq: f32) -> Option<SegmentPointHit> {
        let mut best: Option<SegmentPointHit> = None;
        for (index, &point) in self.points.iter().enumerate() {
            let dist_sq = point.distance_squared(query);
            let limit = best.map_or(max_dist_sq, |hit| hit.dist_sq);
            if dist_sq < limit {
                best = Some(SegmentPointHit { dist_sq, index });
            }
        }
        best
    }

    /// Nächste Kante unter der Schwelle (strikt kleiner).
    ///
    /// Eine Kante wird verworfen, wenn an beiden Endpunkten der Winkel
    /// zwischen Abfragepunkt und gegenüberliegendem Endpunkt über 90°
    /// liegt (Winkel unnormiert in [0, 2π)); der Abstand ist der
    /// Lot-Abstand zur Trägergeraden.
    pub fn near_edge(&self, query: Vec2, max_dist: f32) -> Option<SegmentEdgeHit> {
        let mut best: Option<SegmentEdgeHit> = None;
        for index in 1..self.points.len() {
            let p1 = self.points[index];
            let p2 = self.points[index - 1];

            let t1 = angle_between(query, p1, p2);
            let t2 = angle_between(query, p2, p1);
            if t1.min(t2) > FRAC_PI_2 {
                continue;
            }

            let edge_len = p2.distance(p1);
            if edge_len <= f32::EPSILON {
                continue;
            }
            // Lot-Abstand über das Kreuzprodukt (Punkt-Gerade-Formel)
            let area = (p2.y - p1.y) * query.x - (p2.x - p1.x) * query.y + p2.x * p1.y
                - p2.y * p1.x;
            let dist = area.abs() / edge_len;

            let limit = best.map_or(max_dist, |hit| hit.dist);
            if dist < limit {
                best = Some(SegmentEdgeHit { dist, index });
            }
        }
        best
    }

    // ── Geometrie ───────────────────────────────────────────────

    /// Geometrische Länge des Segments (0 für degenerierte Segmente).
    pub fn length(&self) -> f32 {
        curve::length(self.kind, &self.points)
    }

    /// Punkt bei anteiliger Bogenlänge.
    pub fn point_at(&self, pct: f32) -> Vec2 {
        curve::point_at(self.kind, &self.points, pct)
    }

    /// Diskretisierte Polyline des Segments.
    pub fn flatten(&self) -> Vec<Vec2> {
        curve::flatten(self.kind, &self.points)
    }

    /// Auf den Anteil `pct` gekürzte Polyline.
    pub fn flatten_clipped(&self, pct: f32) -> Vec<Vec2> {
        curve::flatten_clipped(self.kind, &self.points, pct)
    }

    /// Kubische Bézier-Darstellung für den Export.
    pub fn bezier_form(&self) -> Vec<Vec2> {
        curve::bezier_form(self.kind, &self.points)
    }

    /// Begrenzungsrechteck der Kontrollpunkte (Spielfeld-initialisiert).
    pub fn boundaries(&self) -> Bounds {
        let mut bounds = Bounds::playfield_seed();
        for &point in &self.points {
            bounds.include(point);
        }
        bounds
    }

    // ── Split & Join ────────────────────────────────────────────

    /// Teilt ein Segment an `index` in zwei Segmente.
    ///
    /// Beide behalten den Trennpunkt — genau diese Duplizierung erzeugt
    /// den geteilten Anker zwischen den neuen Nachbarn. Beide leiten
    /// ihren Typ aus dem Original-Typ und der neuen Länge ab.
    pub fn split(segment: &Segment, index: usize) -> (Segment, Segment) {
        let first = Segment::from_points(segment.points[..=index].to_vec(), segment.kind);
        let second = Segment::from_points(segment.points[index..].to_vec(), segment.kind);
        (first, second)
    }

    /// Verbindet zwei Segmente zu einem.
    ///
    /// Der erste Punkt von `second` ist die Anker-Kopie des letzten Punkts
    /// von `first` und wird beim Verketten weggelassen.
    pub fn join(first: &Segment, second: &Segment) -> Segment {
        let mut points = first.points.clone();
        if second.points.len() > 1 {
            points.extend_from_slice(&second.points[1..]);
        }
        Segment::from_points(points, SegmentKind::Bezier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment_with(points: &[(f32, f32)]) -> Segment {
        let mut segment = Segment::new();
        for &(x, y) in points {
            segment.push_point(Vec2::new(x, y));
        }
        segment
    }

    // ── Typ-Ableitung ──────────────────────────────────────────

    #[test]
    fn test_kind_folgt_der_punktzahl() {
        let mut segment = Segment::new();
        assert_eq!(segment.kind(), SegmentKind::Bezier);

        segment.push_point(Vec2::new(0.0, 0.0));
        assert_eq!(segment.kind(), SegmentKind::Bezier);

        segment.push_point(Vec2::new(10.0, 0.0));
        assert_eq!(segment.kind(), SegmentKind::Linear);

        // Linear kann keine 3 Punkte darstellen
        segment.push_point(Vec2::new(20.0, 10.0));
        assert_eq!(segment.kind(), SegmentKind::Bezier);

        // Zurück auf 2 → wieder Linear
        segment.pop_point();
        assert_eq!(segment.kind(), SegmentKind::Linear);

        segment.pop_point();
        assert_eq!(segment.kind(), SegmentKind::Bezier);
    }

    #[test]
    fn test_arc_verlaesst_drei_punkte() {
        let mut segment = segment_with(&[(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)]);
        segment.set_kind(SegmentKind::Arc);

        segment.push_point(Vec2::new(150.0, 0.0));
        assert_eq!(segment.kind(), SegmentKind::Bezier);
    }

    #[test]
    fn test_arc_bleibt_bei_move_erhalten() {
        let mut segment = segment_with(&[(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)]);
        segment.set_kind(SegmentKind::Arc);

        // movePoint ist keine Strukturänderung
        segment.move_point(1, Vec2::new(50.0, 80.0));
        assert_eq!(segment.kind(), SegmentKind::Arc);
    }

    #[test]
    fn test_delete_und_insert_leiten_typ_ab() {
        let mut segment = segment_with(&[(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)]);
        assert_eq!(segment.kind(), SegmentKind::Bezier);

        segment.delete_point(1);
        assert_eq!(segment.kind(), SegmentKind::Linear);

        segment.insert_point(Vec2::new(50.0, 50.0), 1);
        assert_eq!(segment.kind(), SegmentKind::Bezier);
    }

    #[test]
    fn test_ungueltige_indizes_sind_noops() {
        let mut segment = segment_with(&[(0.0, 0.0), (10.0, 0.0)]);
        segment.delete_point(5);
        segment.insert_point(Vec2::new(1.0, 1.0), 7);
        segment.move_point(9, Vec2::new(2.0, 2.0));
        assert_eq!(segment.len(), 2);
        assert_eq!(segment.points()[0], Vec2::new(0.0, 0.0));
    }

    // ── Hit-Tests ──────────────────────────────────────────────

    #[test]
    fn test_near_point_strikt_unter_schwelle() {
        let segment = segment_with(&[(0.0, 0.0), (100.0, 0.0)]);

        // Abstand² = 49 < 64 → Treffer
        let hit = segment.near_point(Vec2::new(7.0, 0.0), 64.0);
        assert_eq!(hit.map(|h| h.index), Some(0));

        // Abstand² = 64 ist NICHT strikt kleiner → kein Treffer
        assert!(segment.near_point(Vec2::new(8.0, 0.0), 64.0).is_none());
    }

    #[test]
    fn test_near_point_waehlt_minimum() {
        let segment = segment_with(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
        let hit = segment
            .near_point(Vec2::new(11.0, 0.0), 64.0)
            .expect("Treffer erwartet");
        assert_eq!(hit.index, 1);
        assert_eq!(hit.dist_sq, 1.0);
    }

    #[test]
    fn test_near_edge_misst_lot_abstand() {
        let segment = segment_with(&[(0.0, 0.0), (100.0, 0.0)]);

        // Mitte über der Kante: Treffer mit Lot-Abstand 5
        let hit = segment
            .near_edge(Vec2::new(50.0, 5.0), 64.0)
            .expect("Treffer erwartet");
        assert_eq!(hit.index, 1);
        assert!((hit.dist - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_near_edge_winkel_gate() {
        let segment = segment_with(&[(0.0, 0.0), (100.0, 0.0)]);

        // Unterhalb der Geraden jenseits des Kanten-Anfangs: beide
        // Winkelwerte über 90° → Kante wird verworfen
        assert!(segment.near_edge(Vec2::new(-10.0, -5.0), 64.0).is_none());

        // Jenseits des Kanten-Endes oberhalb der Geraden bleibt der
        // kleinere Winkelwert unter 90°: die Kante zählt weiter und der
        // Lot-Abstand geht zur Trägergeraden
        let hit = segment
            .near_edge(Vec2::new(110.0, 5.0), 64.0)
            .expect("Treffer erwartet");
        assert!((hit.dist - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_near_edge_schwelle_ist_strikt() {
        let segment = segment_with(&[(0.0, 0.0), (100.0, 0.0)]);
        assert!(segment.near_edge(Vec2::new(50.0, 64.0), 64.0).is_none());
        assert!(segment.near_edge(Vec2::new(50.0, 63.9), 64.0).is_some());
    }

    #[test]
    fn test_near_edge_nullkante_wird_uebersprungen() {
        let segment = segment_with(&[(10.0, 10.0), (10.0, 10.0)]);
        assert!(segment.near_edge(Vec2::new(10.0, 12.0), 64.0).is_none());
    }

    // ── Split & Join ───────────────────────────────────────────

    #[test]
    fn test_split_behaelt_trennpunkt_beidseitig() {
        let segment = segment_with(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0)]);
        let (first, second) = Segment::split(&segment, 2);

        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 2);
        assert_eq!(first.points()[2], Vec2::new(20.0, 0.0));
        assert_eq!(second.points()[0], Vec2::new(20.0, 0.0));
        assert_eq!(second.kind(), SegmentKind::Linear);
    }

    #[test]
    fn test_split_erhaelt_typ_wenn_zulaessig() {
        let mut segment = segment_with(&[(0.0, 0.0), (50.0, 50.0), (100.0, 0.0), (150.0, 0.0)]);
        segment.set_kind(SegmentKind::Spline);
        let (first, _) = Segment::split(&segment, 3);
        // Spline mit 4 Punkten bleibt beim Original-Typ
        assert_eq!(first.kind(), SegmentKind::Spline);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn test_join_split_roundtrip() {
        let segment = segment_with(&[(0.0, 0.0), (10.0, 5.0), (20.0, 0.0), (30.0, 5.0)]);
        for index in 1..3 {
            let (first, second) = Segment::split(&segment, index);
            let joined = Segment::join(&first, &second);
            assert_eq!(
                joined.points(),
                segment.points(),
                "Roundtrip bei Index {} verliert Punkte",
                index
            );
        }
    }

    #[test]
    fn test_join_leitet_typ_neu_ab() {
        let first = segment_with(&[(0.0, 0.0), (10.0, 0.0)]);
        let second = segment_with(&[(10.0, 0.0), (20.0, 0.0)]);
        let joined = Segment::join(&first, &second);
        assert_eq!(joined.len(), 3);
        assert_eq!(joined.kind(), SegmentKind::Bezier);
    }

    // ── Boundaries ─────────────────────────────────────────────

    #[test]
    fn test_boundaries_leeres_segment_ergibt_spielfeld() {
        let segment = Segment::new();
        let bounds = segment.boundaries();
        assert_eq!(bounds.min, Vec2::new(512.0, 384.0));
        assert_eq!(bounds.max, Vec2::ZERO);
        assert_eq!(bounds.midpoint(), Vec2::new(256.0, 192.0));
    }

    #[test]
    fn test_boundaries_umfasst_punkte() {
        let segment = segment_with(&[(10.0, 20.0), (110.0, 70.0)]);
        let bounds = segment.boundaries();
        assert_eq!(bounds.min, Vec2::new(10.0, 20.0));
        assert_eq!(bounds.max, Vec2::new(110.0, 70.0));
        assert_eq!(bounds.midpoint(), Vec2::new(60.0, 45.0));
    }
}
