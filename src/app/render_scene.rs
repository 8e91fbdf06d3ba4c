//! Render-Szene als expliziter Übergabevertrag zwischen App und Darstellung.
//!
//! Enthält ausschließlich Geometrie (Polylines in Map-Einheiten); wie
//! gezeichnet wird, entscheidet die konsumierende Schale.

use super::state::EditorState;
use glam::Vec2;

/// Polyline-Daten eines Segments für einen Frame.
#[derive(Debug, Clone)]
pub struct SegmentPolyline {
    /// Abgeflachte Kurve, ggf. auf die spielbare Länge gekürzt
    pub samples: Vec<Vec2>,
    /// Kontrollpunkt-Polygon des Segments
    pub control_points: Vec<Vec2>,
}

/// Read-only Geometrie für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Ein Eintrag pro Segment, in Kettenreihenfolge
    pub segments: Vec<SegmentPolyline>,
    /// Kopf des Sliders (erster Kontrollpunkt)
    pub head: Option<Vec2>,
    /// Endpunkt der spielbaren Länge
    pub tail: Option<Vec2>,
    /// Volle geometrische Länge
    pub full_length: f32,
    /// Auf das Tick-Vielfache gekürzte spielbare Länge
    pub playable_length: f32,
}

/// Baut die Render-Szene aus dem aktuellen Editor-Zustand.
///
/// Die spielbare Länge ist die volle Länge, abgerundet auf ein Vielfaches
/// des Tick-Abstands; der Rest wird nur visuell vom letzten Segment
/// abgeschnitten.
pub fn build(state: &EditorState) -> RenderScene {
    let tick_dist = state.options.tick_distance();
    let full_length = state.path.full_length();
    let playable_length = if tick_dist > 0.0 {
        (full_length / tick_dist).floor() * tick_dist
    } else {
        full_length
    };
    let trimmed = full_length - playable_length;

    let segment_count = state.path.segment_count();
    let mut segments = Vec::with_capacity(segment_count);
    for (index, segment) in state.path.segments().iter().enumerate() {
        let is_last = index + 1 == segment_count;
        let samples = if is_last && trimmed > 0.0 {
            let segment_length = segment.length();
            let pct = if segment_length > 0.0 {
                (1.0 - trimmed / segment_length).max(0.0)
            } else {
                1.0
            };
            segment.flatten_clipped(pct)
        } else {
            segment.flatten()
        };
        segments.push(SegmentPolyline {
            samples,
            control_points: segment.points().to_vec(),
        });
    }

    let head = state
        .path
        .segments()
        .first()
        .and_then(|segment| segment.points().first().copied());
    let tail = segments
        .last()
        .and_then(|polyline| polyline.samples.last().copied());

    RenderScene {
        segments,
        head,
        tail,
        full_length,
        playable_length,
    }
}
