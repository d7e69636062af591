// File: crates/stripchart-core/src/error.rs
// Summary: Typed errors for invalid layout inputs.

use thiserror::Error;

/// Inputs the engine cannot place anything for. Raised immediately; the
/// engine never recovers from these internally.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum LayoutError {
    /// The series has no samples, so there is no initial min/max.
    #[error("series is empty")]
    EmptySeries,
    /// The container has a non-positive width or height; every position
    /// would collapse or go non-finite.
    #[error("view window {width}x{height} is not drawable")]
    InvalidWindow { width: f32, height: f32 },
}
