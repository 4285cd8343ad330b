//! Floating value label ("bubble")
//!
//! The label follows the thumb and sits above the bump peak. Placement is
//! clamped so the label stays inside the control whenever it fits.

use iced::{Color, Point, Size};

/// Default lift of the label towards the peak, in dp
pub const DEFAULT_LABEL_GAP_DP: f32 = 10.0;

/// A text element the seek bar positions and updates on every draw
pub trait Label {
    /// Current measured size of the label
    fn size(&self) -> Size;

    /// Move the label's top-left corner, in the control's local coordinates
    fn set_position(&mut self, position: Point);

    fn set_text(&mut self, text: String);

    fn set_text_color(&mut self, color: Color);
}

/// Plain label record, painted by the host
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub size: Size,
    pub position: Point,
    pub text: String,
    pub text_color: Color,
}

impl Bubble {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            position: Point::ORIGIN,
            text: String::new(),
            text_color: crate::ui::theme::DEFAULT_TEXT_COLOR,
        }
    }
}

impl Label for Bubble {
    fn size(&self) -> Size {
        self.size
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }
}

/// Everything needed to show the label for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFrame {
    pub position: Point,
    pub size: Size,
    pub text: String,
    pub text_color: Color,
}

impl LabelFrame {
    /// Push this frame into a label element
    pub fn apply<L: Label>(&self, label: &mut L) {
        label.set_position(self.position);
        label.set_text(self.text.clone());
        label.set_text_color(self.text_color);
    }
}

/// Clamp that tolerates `hi < lo`, yielding `hi`
fn clamp_lenient(value: f32, lo: f32, hi: f32) -> f32 {
    value.max(lo).min(hi)
}

/// Compute the label's top-left corner.
///
/// Horizontally centered on the thumb, vertically just above the bump peak.
/// A label larger than the control ends up with a negative origin.
pub fn place_label(
    thumb_center_x: f32,
    mid_y: f32,
    curve_height: f32,
    gap: f32,
    label: Size,
    control: Size,
) -> Point {
    let x = clamp_lenient(
        thumb_center_x - label.width / 2.0,
        0.0,
        control.width - label.width,
    );
    let y = clamp_lenient(
        mid_y - curve_height - label.height + gap,
        0.0,
        control.height - label.height,
    );

    Point::new(x, y)
}

/// Integer part of the progress followed by the suffix
pub fn label_text(progress: f32, suffix: &str) -> String {
    // `as` truncates toward zero and saturates, NaN becomes 0
    let whole = progress as i64;
    format!("{} {}", whole, suffix).trim().to_string()
}
