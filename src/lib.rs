//! osu! Slider-Editor Library.
//! Kern-Funktionalität als Library exportiert für Tests und Einbettung.

pub mod app;
pub mod core;
pub mod curve;
pub mod osu;
pub mod shared;

pub use app::{
    build_render_scene, EditorController, EditorEvent, EditorState, RenderScene, SegmentPolyline,
};
pub use core::{
    Bounds, NearEdgeHit, NearPointHit, PointAddress, Segment, SegmentEdgeHit, SegmentPointHit,
    SliderPath,
};
pub use curve::SegmentKind;
pub use osu::write_slider_code;
pub use shared::EditorOptions;
