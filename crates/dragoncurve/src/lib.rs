//! Core library for generating and rasterizing the Heighway dragon curve.
//!
//! The pipeline is deterministic and strictly two-pass: a turn sequence is
//! generated once per render, walked a first time to find the curve's extent,
//! and walked a second time to paint a pixel buffer. The buffer is handed to
//! the caller (the `dragon` CLI encodes it as a PNG); this crate performs no
//! file I/O.
//!
//! ```
//! use dragoncurve::{RenderConfig, render};
//!
//! let config = RenderConfig {
//!     iterations: 8,
//!     ..RenderConfig::default()
//! };
//! let buffer = render(&config)?;
//! assert!(buffer.width() >= 3 && buffer.height() >= 3);
//! # Ok::<(), dragoncurve::error::Error>(())
//! ```

/// Packed RGBA colors and progress blending.
pub mod color;
/// Error types used across the crate.
pub mod error;
/// Bounding-box computation over a path walk.
pub mod extent;
/// Pixel buffer, render configuration, and the two-pass rasterizer.
pub mod raster;
/// Dragon curve turn sequences.
pub mod turns;
/// Headings, positions, and the shared path walker.
pub mod walk;

pub use crate::{
    color::Color,
    extent::Bounds,
    raster::{PixelBuffer, RenderConfig, render},
    turns::{Turn, TurnSequence},
    walk::{Direction, PathStep, PathWalker, Pos, StepSize},
};
