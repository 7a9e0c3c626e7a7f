//! Error types for the dragoncurve crate.

use thiserror::Error;

/// Largest accepted iteration count.
///
/// A render stores `2^N - 1` turns, so the cap rejects requests before the
/// turn buffer allocation becomes pathological and keeps every step counter
/// comfortably inside fixed-width integers. Memory for the pixel buffer is
/// the practical limit well below this cap.
pub const MAX_ITERATIONS: u32 = 28;

/// Errors produced by curve generation and rendering.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The requested iteration count exceeds [`MAX_ITERATIONS`].
    #[error("iteration count {0} exceeds the supported maximum of {MAX_ITERATIONS}")]
    IterationsTooLarge(u32),
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
