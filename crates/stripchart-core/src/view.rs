// File: crates/stripchart-core/src/view.rs
// Summary: View window: container size and trailing sample budget.

use crate::error::LayoutError;

/// Pixel size of the drawing surface and how many trailing samples to show.
/// `max_visible <= 0` means show the whole series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewWindow {
    pub width: f32,
    pub height: f32,
    pub max_visible: i32,
}

impl ViewWindow {
    pub const fn new(width: f32, height: f32, max_visible: i32) -> Self {
        Self { width, height, max_visible }
    }

    /// Window that shows every sample of the series.
    pub const fn unbounded(width: f32, height: f32) -> Self {
        Self::new(width, height, -1)
    }

    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(LayoutError::InvalidWindow { width: self.width, height: self.height });
        }
        Ok(())
    }
}
