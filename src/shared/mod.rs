//! Geteilte Typen und reine Geometrie für layer-übergreifende Verträge.
//!
//! Enthält Funktionen und Konfiguration, die von `core`, `curve` und `app`
//! gemeinsam genutzt werden, ohne Zirkel-Abhängigkeiten zu erzeugen.

pub mod geometry;
pub mod options;

pub use options::EditorOptions;
pub use options::{PICK_EDGE_DIST, PICK_POINT_DIST_SQ, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
