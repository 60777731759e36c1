//! # Galaxy Renderer
//!
//! Scene data for the galaxy canvas. Nothing here draws: the crate turns a
//! catalog and a layout engine into JSON-serializable frames the WebGPU or
//! WebGL frontend consumes, plus the top-down minimap projection.

pub mod backend;
pub mod render_data;
pub mod minimap;

pub use backend::{GpuCapabilities, RendererConfig, RendererKind};
pub use minimap::Minimap;
pub use render_data::RenderFrame;
