//! Der Slider-Pfad: Kette von Segmenten mit geteilten Anker-Punkten.
//!
//! Benachbarte Segmente teilen sich ihren Randpunkt als zwei wertgleiche
//! Kopien (`segments[i].points[0] == segments[i-1].points[last]`). Der
//! Anker ist eine abgeleitete Rolle, kein gespeichertes Flag; `move_point`
//! ist der einzige Schreibpfad und hält beide Kopien synchron.

use super::segment::{Bounds, Segment};
use crate::curve::SegmentKind;
use glam::Vec2;

/// Adresse eines Kontrollpunkts in der Kette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointAddress {
    /// Index des Segments in der Kette
    pub seg_index: usize,
    /// Index des Punkts innerhalb des Segments
    pub point_index: usize,
}

/// Ketten-weiter Treffer der Punkt-Suche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearPointHit {
    /// Quadrierter Abstand zum Treffer
    pub dist_sq: f32,
    /// Segment des Treffers
    pub seg_index: usize,
    /// Punkt-Index innerhalb des Segments
    pub point_index: usize,
}

/// Ketten-weiter Treffer der Kanten-Suche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearEdgeHit {
    /// Lot-Abstand zur Kante
    pub dist: f32,
    /// Segment des Treffers
    pub seg_index: usize,
    /// Index des hinteren Kantenpunkts (Einfüge-Position)
    pub edge_index: usize,
}

/// Der editierbare Slider-Pfad.
#[derive(Debug, Clone)]
pub struct SliderPath {
    segments: Vec<Segment>,
}

impl Default for SliderPath {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderPath {
    /// Erstellt einen leeren Pfad mit genau einem leeren Segment.
    pub fn new() -> Self {
        Self {
            segments: vec![Segment::new()],
        }
    }

    /// Prüft ob noch kein Punkt platziert wurde.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() || self.segments[0].is_empty()
    }

    /// Anzahl der Segmente.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Alle Segmente in Kettenreihenfolge.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segment an `index`.
    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Adresse des letzten Punkts der Kette (der "schwebende" Punkt
    /// während des Zeichnens).
    pub fn last_point_address(&self) -> Option<PointAddress> {
        let seg_index = self.segments.len().checked_sub(1)?;
        let point_index = self.segments[seg_index].len().checked_sub(1)?;
        Some(PointAddress {
            seg_index,
            point_index,
        })
    }

    // ── Live-Zeichnen ───────────────────────────────────────────

    /// Hängt einen Punkt an das letzte Segment an.
    pub fn push_point(&mut self, point: Vec2) {
        let Some(segment) = self.segments.last_mut() else {
            return;
        };
        segment.push_point(point);
    }

    /// Entfernt den letzten Punkt des letzten Segments.
    pub fn pop_point(&mut self) {
        let Some(segment) = self.segments.last_mut() else {
            return;
        };
        segment.pop_point();
    }

    /// Schaltet den Typ des noch gezeichneten letzten Segments zwischen
    /// Bézier und einer Durchgangspunkt-Interpretation um.
    ///
    /// Unter 3 Punkten ist die Geste mehrdeutig und ein No-op; genau
    /// 3 Punkte ergeben einen Kreisbogen, mehr eine Spline. Ausschalten
    /// fällt immer auf Bézier zurück.
    pub fn set_last_segment_through(&mut self, through: bool) {
        let Some(segment) = self.segments.last_mut() else {
            return;
        };
        let len = segment.len();
        if len < 3 {
            return;
        }
        if !through {
            segment.set_kind(SegmentKind::Bezier);
        } else if len == 3 {
            segment.set_kind(SegmentKind::Arc);
        } else {
            segment.set_kind(SegmentKind::Spline);
        }
    }

    // ── Gezielte Edits ──────────────────────────────────────────

    /// Fügt einen Punkt vor `point_index` in das adressierte Segment ein.
    pub fn insert_point(&mut self, point: Vec2, seg_index: usize, point_index: usize) {
        let Some(segment) = self.segments.get_mut(seg_index) else {
            return;
        };
        segment.insert_point(point, point_index);
    }

    /// Löscht den adressierten Punkt.
    pub fn delete_point(&mut self, seg_index: usize, point_index: usize) {
        let Some(segment) = self.segments.get_mut(seg_index) else {
            return;
        };
        segment.delete_point(point_index);
    }

    /// Verschiebt den adressierten Punkt.
    ///
    /// Anker werden über das Adress-Paar in beiden angrenzenden Segmenten
    /// geschrieben — die einzige Stelle, die Randpunkte mutiert.
    pub fn move_point(&mut self, seg_index: usize, point_index: usize, point: Vec2) {
        if self.is_anchor(seg_index, point_index) {
            for address in self.anchor_pair(seg_index, point_index) {
                if let Some(segment) = self.segments.get_mut(address.seg_index) {
                    segment.move_point(address.point_index, point);
                }
            }
        } else if let Some(segment) = self.segments.get_mut(seg_index) {
            segment.move_point(point_index, point);
        }
    }

    // ── Anker ───────────────────────────────────────────────────

    /// Prüft ob die Adresse ein Anker ist: ein Randpunkt mit einem
    /// Nachbarsegment auf der betreffenden Seite.
    pub fn is_anchor(&self, seg_index: usize, point_index: usize) -> bool {
        let Some(segment) = self.segments.get(seg_index) else {
            return false;
        };
        (point_index == 0 && seg_index != 0)
            || (point_index + 1 == segment.len() && seg_index + 1 != self.segments.len())
    }

    /// Alle Adressen, die denselben Anker bezeichnen, aufsteigend nach
    /// Segment: eine bei gewöhnlichen Punkten, zwei bei Ankern.
    pub fn anchor_pair(&self, seg_index: usize, point_index: usize) -> Vec<PointAddress> {
        let mut pair = vec![PointAddress {
            seg_index,
            point_index,
        }];
        let Some(segment) = self.segments.get(seg_index) else {
            return pair;
        };
        if point_index == 0 && seg_index != 0 {
            pair.insert(
                0,
                PointAddress {
                    seg_index: seg_index - 1,
                    point_index: self.segments[seg_index - 1].len().saturating_sub(1),
                },
            );
        } else if point_index + 1 == segment.len() && seg_index + 1 != self.segments.len() {
            pair.push(PointAddress {
                seg_index: seg_index + 1,
                point_index: 0,
            });
        }
        pair
    }

    /// Wandelt einen inneren Punkt in einen Anker um (Segment-Split).
    ///
    /// No-op an bestehenden Segmentgrenzen. Beim noch gezeichneten letzten
    /// Segment ist nur der Start eines 2-Punkte-Segments tabu; dessen
    /// Endpunkt darf geteilt werden (so bleibt ein bestätigter Bogen beim
    /// Weiterzeichnen bei exakt 3 Punkten).
    pub fn set_anchor(&mut self, seg_index: usize, point_index: usize) {
        let Some(segment) = self.segments.get(seg_index) else {
            return;
        };
        if point_index >= segment.len() {
            return;
        }
        if seg_index + 1 == self.segments.len() {
            if point_index == 0 && segment.len() == 2 {
                return;
            }
        } else if point_index == 0 || point_index + 1 == segment.len() {
            return;
        }

        let (first, second) = Segment::split(segment, point_index);
        self.segments[seg_index] = first;
        self.segments.insert(seg_index + 1, second);
    }

    /// Hebt einen Anker auf: verbindet die beiden angrenzenden Segmente
    /// wieder zu einem. No-op, wenn die Adresse kein Anker ist.
    pub fn reset_anchor(&mut self, seg_index: usize, point_index: usize) {
        let pair = self.anchor_pair(seg_index, point_index);
        if pair.len() != 2 {
            return;
        }
        let first_index = pair[0].seg_index;
        let joined = Segment::join(&self.segments[first_index], &self.segments[first_index + 1]);
        self.segments[first_index] = joined;
        self.segments.remove(first_index + 1);
    }

    // ── Ketten-weite Abfragen ───────────────────────────────────

    /// Nächster Kontrollpunkt über alle Segmente (strikt unter der
    /// Schwelle); frühere Segmente gewinnen bei Gleichstand.
    pub fn near_point(&self, query: Vec2, max_dist_sq: f32) -> Option<NearPointHit> {
        let mut best: Option<NearPointHit> = None;
        for (seg_index, segment) in self.segments.iter().enumerate() {
            let limit = best.map_or(max_dist_sq, |hit| hit.dist_sq);
            if let Some(hit) = segment.near_point(query, limit) {
                best = Some(NearPointHit {
                    dist_sq: hit.dist_sq,
                    seg_index,
                    point_index: hit.index,
                });
            }
        }
        best
    }

    /// Nächste Kante über alle Segmente (strikt unter der Schwelle).
    pub fn near_edge(&self, query: Vec2, max_dist: f32) -> Option<NearEdgeHit> {
        let mut best: Option<NearEdgeHit> = None;
        for (seg_index, segment) in self.segments.iter().enumerate() {
            let limit = best.map_or(max_dist, |hit| hit.dist);
            if let Some(hit) = segment.near_edge(query, limit) {
                best = Some(NearEdgeHit {
                    dist: hit.dist,
                    seg_index,
                    edge_index: hit.index,
                });
            }
        }
        best
    }

    // ── Geometrie ───────────────────────────────────────────────

    /// Gesamtlänge über alle Segmente.
    pub fn full_length(&self) -> f32 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Begrenzungsrechteck aller Kontrollpunkte (Spielfeld-initialisiert,
    /// siehe `Bounds::playfield_seed`).
    pub fn bounding_box(&self) -> Bounds {
        let mut bounds = Bounds::playfield_seed();
        for segment in &self.segments {
            bounds.merge(segment.boundaries());
        }
        bounds
    }

    /// Gerundeter Mittelpunkt des Begrenzungsrechtecks.
    pub fn midpoint(&self) -> Vec2 {
        self.bounding_box().midpoint()
    }
}
