//! Application messages

use bubble_seekbar::SeekBarEvent;

#[derive(Debug, Clone)]
pub enum Message {
    /// Input forwarded from the seek bar canvas
    SeekBar(SeekBarEvent),
    /// Enable or disable dragging
    TouchEnabled(bool),
    /// Thumb radius in dp
    ThumbRadius(f32),
    /// Reset progress to the minimum without notifying
    Reset,
    DarkMode(bool),
}
