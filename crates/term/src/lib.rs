//! Terminal preview for rasters.
//!
//! Renders a `RasterBuffer` into a simple framebuffer of colored block
//! characters, then encodes that framebuffer with crossterm so it can be
//! printed to a terminal.
//!
//! Goals:
//! - Keep `core` free of terminal concerns
//! - Keep the raster-to-cells mapping pure and testable
//! - Allow control over aspect ratio (e.g. 2 chars wide per pixel)

pub mod fb;
pub mod raster_view;
pub mod renderer;

pub use raster_buffer_core as core;
pub use raster_buffer_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use raster_view::RasterView;
pub use renderer::{encode_full_into, TerminalRenderer};
