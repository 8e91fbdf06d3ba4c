//! Use-Cases: Pointer-/Tasten-Gesten auf Pfad-Operationen abbilden.
//!
//! Alle Funktionen lassen den Pfad in einem konsistenten Zustand zurück;
//! nicht anwendbare Gesten sind stille No-ops (Live-UI, kein Fehlerpfad).

use crate::app::state::EditorState;
use crate::core::{PointAddress, SliderPath};
use crate::curve::SegmentKind;
use glam::Vec2;

/// Zeigerbewegung: im Zeichenmodus folgt der schwebende letzte Punkt dem
/// Zeiger, im Editier-Modus wird der gegriffene Punkt verschoben.
pub fn track_pointer(state: &mut EditorState, pos: Vec2) {
    if state.drawing {
        if state.path.is_empty() {
            state.path.push_point(pos);
        } else if let Some(address) = state.path.last_point_address() {
            state.path.move_point(address.seg_index, address.point_index, pos);
        }
    } else if let Some(address) = state.focus_point {
        state.path.move_point(address.seg_index, address.point_index, pos);
    }
}

/// Primärtaste gedrückt: nächstgelegenen Punkt greifen (nur Editier-Modus).
pub fn grab_point(state: &mut EditorState, pos: Vec2) {
    if state.drawing {
        return;
    }
    state.focus_point = state
        .path
        .near_point(pos, state.options.pick_point_dist_sq)
        .map(|hit| PointAddress {
            seg_index: hit.seg_index,
            point_index: hit.point_index,
        });
}

/// Zeichenmodus: schwebenden Punkt bestätigen.
///
/// Klick auf den vorletzten Punkt setzt dort einen Anker statt einen
/// neuen Punkt zu platzieren. Ein bestätigter Bogen wird vor dem vierten
/// Punkt am schwebenden Punkt geteilt, damit er bei exakt 3 Punkten
/// bleibt und das nächste Segment frisch beginnt.
pub fn commit_point(state: &mut EditorState, pos: Vec2) {
    let Some(last) = state.path.segments().last() else {
        return;
    };
    let anchoring_prev = last.len() > 1 && last.is_second_last_point(pos);
    let closing_arc = last.kind() == SegmentKind::Arc;

    if anchoring_prev {
        let seg_index = state.path.segment_count() - 1;
        let point_index = last.len() - 2;
        state.path.set_anchor(seg_index, point_index);
        log::debug!(
            "Anker am vorletzten Punkt gesetzt (Segment {}, Punkt {})",
            seg_index,
            point_index
        );
        return;
    }

    if closing_arc {
        if let Some(address) = state.path.last_point_address() {
            state.path.set_anchor(address.seg_index, address.point_index);
            log::debug!("Bogen abgeschlossen, neues Segment beginnt");
        }
    }
    state.path.push_point(pos);
}

/// Zeichnen regulär beenden (Sekundärtaste).
pub fn finish_drawing(state: &mut EditorState) {
    state.drawing = false;
    log::info!(
        "Zeichnen beendet: {} Segment(e), Länge {:.1}",
        state.path.segment_count(),
        state.path.full_length()
    );
}

/// Zeichnen abbrechen (Escape): schwebenden Punkt verwerfen.
pub fn cancel_drawing(state: &mut EditorState) {
    if !state.drawing {
        return;
    }
    state.path.pop_point();
    state.drawing = false;
}

/// Editier-Modus mit Modifier: Punkt → Anker, Kante → Punkt einfügen.
pub fn upgrade_at(state: &mut EditorState, pos: Vec2) {
    if let Some(hit) = state.path.near_point(pos, state.options.pick_point_dist_sq) {
        state.path.set_anchor(hit.seg_index, hit.point_index);
        log::debug!(
            "Anker gesetzt: Segment {}, Punkt {}",
            hit.seg_index,
            hit.point_index
        );
    } else if let Some(hit) = state.path.near_edge(pos, state.options.pick_edge_dist) {
        state.path.insert_point(pos, hit.seg_index, hit.edge_index);
        log::debug!(
            "Punkt auf Kante {} in Segment {} eingefügt",
            hit.edge_index,
            hit.seg_index
        );
    }
}

/// Editier-Modus Sekundärtaste: Anker auflösen bzw. Punkt löschen.
///
/// Leert sich der Pfad dabei vollständig, beginnt der Zeichenmodus neu.
pub fn remove_at(state: &mut EditorState, pos: Vec2) {
    let Some(hit) = state.path.near_point(pos, state.options.pick_point_dist_sq) else {
        return;
    };
    if state.path.is_anchor(hit.seg_index, hit.point_index) {
        state.path.reset_anchor(hit.seg_index, hit.point_index);
    } else {
        state.path.delete_point(hit.seg_index, hit.point_index);
    }
    if state.path.is_empty() {
        state.drawing = true;
        log::info!("Pfad leer — zurück in den Zeichenmodus");
    }
}

/// Through-Modifier: letztes Segment zwischen Bézier und Arc/Spline
/// umschalten (nur während des Zeichnens).
pub fn set_through(state: &mut EditorState, through: bool) {
    if !state.drawing {
        return;
    }
    state.path.set_last_segment_through(through);
}

/// Verwirft den Pfad und startet eine frische Sitzung.
pub fn clear(state: &mut EditorState) {
    state.path = SliderPath::new();
    state.drawing = true;
    state.focus_point = None;
    log::info!("Pfad verworfen, neue Zeichnung gestartet");
}
