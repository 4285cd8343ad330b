//! Geometry model for the seek bar
//!
//! Maps the semantic progress value onto the pixel span the thumb can travel
//! and back. The span excludes a margin of `radius + padding` on both sides so
//! the thumb and its bump never clip the control edges.
//!
//! Progress is the authoritative value. The thumb position is always derived
//! from it, except while a pointer is driving the thumb directly.

use iced::Size;

use crate::units::Density;

/// Default thumb radius in dp
pub const DEFAULT_THUMB_RADIUS_DP: f32 = 20.0;
/// Default bump height in dp
pub const DEFAULT_CURVE_HEIGHT_DP: f32 = 19.0;
/// Default downward shift of the thumb in dp
pub const DEFAULT_THUMB_OFFSET_DP: f32 = 8.0;
/// Default horizontal room between thumb and line in dp
pub const DEFAULT_THUMB_PADDING_DP: f32 = 24.0;

/// Default progress bounds
pub const DEFAULT_MIN_PROGRESS: f32 = 0.0;
pub const DEFAULT_MAX_PROGRESS: f32 = 100.0;

/// Thumb-related geometry, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbMetrics {
    /// Radius of the thumb disc
    pub radius: f32,
    /// Height of the bump above the midline
    pub curve_height: f32,
    /// How far the thumb sits below the midline
    pub offset: f32,
    /// Horizontal distance between the thumb edge and where the line resumes
    pub padding: f32,
}

impl ThumbMetrics {
    pub const CURVE_HEIGHT_RATIO: f32 = 0.95;
    pub const OFFSET_RATIO: f32 = 0.4;
    pub const PADDING_RATIO: f32 = 1.2;

    /// Derive every dependent dimension from the radius using the fixed ratios
    pub fn from_radius(radius: f32) -> Self {
        Self {
            radius,
            curve_height: radius * Self::CURVE_HEIGHT_RATIO,
            offset: radius * Self::OFFSET_RATIO,
            padding: radius * Self::PADDING_RATIO,
        }
    }

    /// The stock geometry. Note these are not the fixed ratios of a 20dp radius.
    pub fn defaults(density: Density) -> Self {
        Self {
            radius: density.dp_to_px(DEFAULT_THUMB_RADIUS_DP),
            curve_height: density.dp_to_px(DEFAULT_CURVE_HEIGHT_DP),
            offset: density.dp_to_px(DEFAULT_THUMB_OFFSET_DP),
            padding: density.dp_to_px(DEFAULT_THUMB_PADDING_DP),
        }
    }

    /// Space reserved at each end of the track
    pub fn margin(&self) -> f32 {
        self.radius + self.padding
    }

    /// Pixel width available for thumb travel, may be zero or negative
    pub fn usable_span(&self, width: f32) -> f32 {
        width - 2.0 * self.margin()
    }
}

/// True when the bounds cannot describe a value range
fn is_degenerate_range(min: f32, max: f32) -> bool {
    let range = max - min;
    range.is_nan() || range <= 0.0
}

/// True when there is no room for the thumb to travel
fn is_degenerate_span(span: f32) -> bool {
    span.is_nan() || span <= 0.0
}

/// Map a progress value to the thumb center x-coordinate.
///
/// With no usable span or an empty range the thumb rests where `min` would be.
pub fn progress_to_thumb_x(
    progress: f32,
    width: f32,
    min: f32,
    max: f32,
    radius: f32,
    padding: f32,
) -> f32 {
    let margin = radius + padding;
    let span = width - 2.0 * margin;

    if is_degenerate_span(span) || is_degenerate_range(min, max) {
        return margin;
    }

    (progress - min) / (max - min) * span + margin
}

/// Map a thumb x-coordinate back to progress.
///
/// `x` is clamped to the travel span first, so the result always lies in
/// `[min, max]`. Degenerate geometry pins the result to `min`.
pub fn thumb_x_to_progress(
    x: f32,
    width: f32,
    min: f32,
    max: f32,
    radius: f32,
    padding: f32,
) -> f32 {
    let margin = radius + padding;
    let span = width - 2.0 * margin;

    if is_degenerate_span(span) || is_degenerate_range(min, max) || x.is_nan() {
        return min;
    }

    let x = x.clamp(margin, width - margin);
    let progress = (x - margin) / span * (max - min) + min;
    // rounding can overshoot by an ulp
    progress.clamp(min, max)
}

/// Mutable geometry owned by one seek bar instance
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    progress: f32,
    min_progress: f32,
    max_progress: f32,
    thumb_center_x: f32,
    metrics: ThumbMetrics,
    size: Size,
}

impl SliderState {
    pub fn new(metrics: ThumbMetrics) -> Self {
        Self {
            progress: DEFAULT_MIN_PROGRESS,
            min_progress: DEFAULT_MIN_PROGRESS,
            max_progress: DEFAULT_MAX_PROGRESS,
            // nothing is measured yet, park the thumb against the left edge
            thumb_center_x: metrics.radius,
            metrics,
            size: Size::ZERO,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn min_progress(&self) -> f32 {
        self.min_progress
    }

    pub fn max_progress(&self) -> f32 {
        self.max_progress
    }

    pub fn thumb_center_x(&self) -> f32 {
        self.thumb_center_x
    }

    pub fn metrics(&self) -> ThumbMetrics {
        self.metrics
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Vertical center line of the control
    pub fn mid_y(&self) -> f32 {
        self.size.height / 2.0
    }

    /// Clamp a value into the current bounds
    ///
    /// Misconfigured bounds (`min >= max`) and NaN both resolve to `min`.
    pub fn clamp_progress(&self, value: f32) -> f32 {
        if is_degenerate_range(self.min_progress, self.max_progress) || value.is_nan() {
            return self.min_progress;
        }
        value.clamp(self.min_progress, self.max_progress)
    }

    /// Set progress programmatically and move the thumb to match
    pub fn set_progress(&mut self, value: f32) {
        self.progress = self.clamp_progress(value);
        self.sync_thumb();
    }

    /// Replace the bounds. Current progress is neither re-clamped nor re-mapped.
    pub fn set_bounds(&mut self, min: f32, max: f32) {
        if is_degenerate_range(min, max) {
            tracing::warn!(
                "Seek bar bounds [{}, {}] leave no range, progress will pin to the minimum",
                min,
                max
            );
        }
        self.min_progress = min;
        self.max_progress = max;
    }

    /// Swap in new thumb metrics. The thumb keeps its pixel position until the
    /// next resize or progress update.
    pub fn set_metrics(&mut self, metrics: ThumbMetrics) {
        self.metrics = metrics;
    }

    /// Record a new measured size and re-derive the thumb from progress
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.sync_thumb();
    }

    /// Drive the thumb from a pointer x-coordinate in local space
    pub fn update_from_pointer(&mut self, x: f32) {
        let ThumbMetrics {
            radius, padding, ..
        } = self.metrics;

        self.progress = thumb_x_to_progress(
            x,
            self.size.width,
            self.min_progress,
            self.max_progress,
            radius,
            padding,
        );
        self.sync_thumb();
    }

    fn sync_thumb(&mut self) {
        self.thumb_center_x = progress_to_thumb_x(
            self.progress,
            self.size.width,
            self.min_progress,
            self.max_progress,
            self.metrics.radius,
            self.metrics.padding,
        );
    }
}
