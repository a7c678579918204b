//! Raster buffer (workspace facade crate).
//!
//! This package exposes `raster_buffer::{core,term,types}` as one public API
//! while the implementation lives in dedicated crates under `crates/`.

pub mod config;

pub use raster_buffer_core as core;
pub use raster_buffer_term as term;
pub use raster_buffer_types as types;
