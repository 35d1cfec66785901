//! Trajectory rendering
//!
//! Consumes the parser's per-body histories and produces either a static
//! multi-body trajectory plot or a time-indexed animation, on screen or
//! serialized to PNG/GIF. All rendering is CPU-side into raster buffers;
//! a single cooperative frame loop drives playback.

pub mod animate;
pub mod canvas;
pub mod error;
pub mod palette;
pub mod render;
pub mod window;

#[cfg(test)]
mod animate_test;
#[cfg(test)]
mod render_test;

pub use animate::{frame_count, render_frame, save_gif, ANIMATION_SIZE, GIF_FPS};
pub use canvas::{Canvas, Viewport};
pub use error::{RenderError, RenderResult};
pub use palette::{color_for, PALETTE};
pub use render::{render_static, save_png, STATIC_SIZE};
pub use window::{display_animation, display_static, WINDOW_SIZE};
