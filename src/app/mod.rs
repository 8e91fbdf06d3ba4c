//! Application-Layer: Zustand, Events, Controller und Use-Cases.

pub mod controller;
pub mod events;
pub mod render_scene;
pub mod state;
pub mod use_cases;

pub use controller::EditorController;
pub use events::EditorEvent;
pub use render_scene::{build as build_render_scene, RenderScene, SegmentPolyline};
pub use state::EditorState;
