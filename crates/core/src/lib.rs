//! Raster core - a named, resizable grid of RGB pixels
//!
//! This crate owns the pixel storage and every rule about it. It has
//! **zero dependencies** on terminals or I/O, which keeps it:
//!
//! - **Deterministic**: every operation is synchronous and infallible for in-range input
//! - **Testable**: unit tests sit next to the code, scenario tests live in the facade crate
//! - **Portable**: usable from the terminal preview, benches, or any host program
//!
//! # Module Structure
//!
//! - [`raster`]: [`RasterBuffer`] storage, resize, bounds-checked access, text rendering
//! - [`error`]: [`RasterError`] for unrepresentable dimensions
//!
//! # Bounds Rules
//!
//! Out-of-range coordinates are never fatal:
//!
//! - **Writes** (`set_pixel`, `increment`, `increment_channel`) return `false` and change nothing
//! - **Reads** (`get_pixel`) return the default `(0,0,0)` pixel
//!
//! # Example
//!
//! ```
//! use raster_buffer_core::RasterBuffer;
//! use raster_buffer_types::Pixel;
//!
//! let mut img = RasterBuffer::new("img", 2, 2);
//! assert!(img.set_pixel(0, 0, Pixel::new(10, 20, 30)));
//! img.increment_channel(0, 0, 5, 'r');
//!
//! img.resize(3, 3);
//! assert_eq!(img.get_pixel(0, 0), Pixel::new(15, 20, 30));
//! assert_eq!(img.get_pixel(2, 2), Pixel::default());
//!
//! // Out of bounds: reported, not fatal
//! assert!(!img.set_pixel(3, 0, Pixel::new(1, 1, 1)));
//! assert_eq!(img.get_pixel(3, 0), Pixel::default());
//! ```

pub mod error;
pub mod raster;

pub use raster_buffer_types as types;

pub use error::RasterError;
pub use raster::RasterBuffer;
