//! Core-Domänentypen: Segment, SliderPath und Query-Ergebnisse.
//!
//! Dieses Modul definiert die Haupt-Datenstrukturen:
//! - Segment: Kontrollpunktfolge unter einem Interpolations-Typ
//! - SliderPath: Kette von Segmenten mit geteilten Anker-Punkten

pub mod segment;
pub mod slider_path;

pub use segment::{Bounds, Segment, SegmentEdgeHit, SegmentPointHit};
pub use slider_path::{NearEdgeHit, NearPointHit, PointAddress, SliderPath};
