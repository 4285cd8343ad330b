//! Density-independent units
//!
//! Geometry is configured in dp and drawn in pixels. The host supplies the
//! scale factor (usually the window scale factor).

/// Converts density-independent pixels to physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    scale: f32,
}

impl Density {
    /// One dp equals one pixel
    pub const IDENTITY: Density = Density { scale: 1.0 };

    /// Non-positive or non-finite scales fall back to 1.0
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() && scale > 0.0 {
            Self { scale }
        } else {
            tracing::warn!("Invalid density scale {}, using 1.0", scale);
            Self::IDENTITY
        }
    }

    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.scale
    }

    pub fn px_to_dp(&self, px: f32) -> f32 {
        px / self.scale
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::IDENTITY
    }
}
