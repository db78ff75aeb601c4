//! Lumen Render - draws the playground with wgpu.
//!
//! [`DrawList`] collects flat-colored lines and triangles on the CPU in
//! scene coordinates; [`Renderer`] uploads them and presents a frame.

mod draw_list;
mod renderer;

pub use draw_list::{DrawList, Vertex};
pub use renderer::{RenderError, Renderer};
