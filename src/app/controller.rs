//! Controller: bildet Editor-Events auf Use-Cases ab.

use super::events::EditorEvent;
use super::state::EditorState;
use super::use_cases::editing;
use glam::Vec2;

/// Zustandsloser Vermittler zwischen Event-Strom und Use-Cases.
///
/// Jedes Event wird vollständig verarbeitet, bevor die Kontrolle an den
/// Aufrufer zurückkehrt; die Struktur ist danach immer konsistent.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet ein einzelnes Editor-Event.
    pub fn handle_event(&self, state: &mut EditorState, event: EditorEvent) {
        match event {
            EditorEvent::PointerMoved(pos) => editing::track_pointer(state, pos),
            EditorEvent::PrimaryPressed(pos) => editing::grab_point(state, pos),
            EditorEvent::PrimaryReleased { pos, with_modifier } => {
                if state.drawing {
                    editing::commit_point(state, pos);
                } else if with_modifier {
                    editing::upgrade_at(state, pos);
                }
                state.focus_point = None;
            }
            EditorEvent::SecondaryReleased(pos) => {
                if state.drawing {
                    editing::finish_drawing(state);
                } else {
                    editing::remove_at(state, pos);
                }
                state.focus_point = None;
            }
            EditorEvent::ThroughPressed => editing::set_through(state, true),
            EditorEvent::ThroughReleased => editing::set_through(state, false),
            EditorEvent::CancelDrawing => editing::cancel_drawing(state),
            EditorEvent::ClearRequested => editing::clear(state),
        }
    }

    /// Rastert eine Rohposition auf das konfigurierte Grid.
    ///
    /// Gehört zur Eingabe-Auflösung der Schale: der Kern selbst erwartet
    /// bereits gerasterte Koordinaten. `grid_size ≤ 0` lässt die Position
    /// unverändert.
    pub fn snap_to_grid(pos: Vec2, grid_size: f32) -> Vec2 {
        if grid_size <= 0.0 {
            return pos;
        }
        (pos / grid_size).round() * grid_size
    }
}
