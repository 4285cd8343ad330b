//! Bubble seek bar control
//!
//! A horizontal slider that draws a bump under a draggable thumb and shows
//! the current value in a floating label while it moves.
//!
//! # Architecture
//!
//! - [`geometry`]: progress <-> pixel mapping and thumb metrics
//! - [`render`]: pure draw command generation
//! - [`interaction`]: pointer state machine
//! - [`label`]: label placement and text
//!
//! [`BubbleSeekBar`] owns the mutable state and ties the four together. It is
//! host agnostic: pointer events, resizes and draw calls come from outside.

pub mod geometry;
pub mod interaction;
pub mod label;
pub mod render;

use iced::{Color, Size};

use crate::config::SeekBarConfig;
use crate::units::Density;
use geometry::{SliderState, ThumbMetrics};
use interaction::{DragPhase, PointerEvent, Transition};
use label::{Bubble, Label, LabelFrame};
use render::{DrawCommand, Palette, Surface};

/// Callback fired once per drag that changed the value
pub type ProgressListener = Box<dyn FnMut(f32)>;

/// One rendered frame: bar geometry plus optional label
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
    pub label: Option<LabelFrame>,
}

/// The seek bar control
pub struct BubbleSeekBar<L: Label = Bubble> {
    state: SliderState,
    palette: Palette,
    suffix: String,
    phase: DragPhase,
    touch_enabled: bool,
    density: Density,
    label_gap: f32,
    label: Option<L>,
    on_progress_change: Option<ProgressListener>,
    redraw_requested: bool,
}

impl<L: Label> BubbleSeekBar<L> {
    pub fn new(density: Density) -> Self {
        let palette = Palette {
            stroke_width: density.dp_to_px(crate::ui::theme::DEFAULT_STROKE_WIDTH),
            ..Palette::default()
        };

        Self {
            state: SliderState::new(ThumbMetrics::defaults(density)),
            palette,
            suffix: String::new(),
            phase: DragPhase::Idle,
            touch_enabled: true,
            density,
            label_gap: density.dp_to_px(label::DEFAULT_LABEL_GAP_DP),
            label: None,
            on_progress_change: None,
            redraw_requested: true,
        }
    }

    /// Build a seek bar from loaded configuration
    pub fn from_config(config: &SeekBarConfig, density: Density) -> Self {
        let mut seekbar = Self::new(density);

        seekbar.set_min_max_progress(config.min_progress, config.max_progress);
        if let Some(radius_dp) = config.thumb_radius_dp {
            seekbar.set_thumb_radius(radius_dp);
        }
        seekbar.set_line_color(config.line_color.into());
        seekbar.set_thumb_color(config.thumb_color.into());
        seekbar.set_text_color(config.text_color.into());
        seekbar.set_suffix(config.suffix.clone());
        seekbar.set_touch_enabled(config.touch_enabled);
        seekbar.set_progress(config.progress);

        seekbar
    }

    // ============ Progress ============

    pub fn progress(&self) -> f32 {
        self.state.progress()
    }

    /// Set the value without notifying the listener. Out of range values are clamped.
    pub fn set_progress(&mut self, value: f32) {
        self.state.set_progress(value);
        self.request_redraw();
    }

    /// Change the bounds. Takes effect on the next geometry update.
    pub fn set_min_max_progress(&mut self, min: f32, max: f32) {
        self.state.set_bounds(min, max);
    }

    pub fn min_progress(&self) -> f32 {
        self.state.min_progress()
    }

    pub fn max_progress(&self) -> f32 {
        self.state.max_progress()
    }

    // ============ Presentation ============

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn set_suffix(&mut self, suffix: impl Into<String>) {
        self.suffix = suffix.into();
    }

    pub fn line_color(&self) -> Color {
        self.palette.line_color
    }

    pub fn set_line_color(&mut self, color: Color) {
        self.palette.line_color = color;
        self.request_redraw();
    }

    pub fn thumb_color(&self) -> Color {
        self.palette.thumb_color
    }

    pub fn set_thumb_color(&mut self, color: Color) {
        self.palette.thumb_color = color;
        self.request_redraw();
    }

    pub fn text_color(&self) -> Color {
        self.palette.text_color
    }

    /// Also pushed to the attached label right away
    pub fn set_text_color(&mut self, color: Color) {
        self.palette.text_color = color;
        if let Some(label) = self.label.as_mut() {
            label.set_text_color(color);
        }
        self.request_redraw();
    }

    /// Set the thumb radius in dp, rescaling the bump, offset and padding
    pub fn set_thumb_radius(&mut self, radius_dp: f32) {
        let radius = self.density.dp_to_px(radius_dp);
        self.state.set_metrics(ThumbMetrics::from_radius(radius));
        self.request_redraw();
    }

    pub fn thumb_metrics(&self) -> ThumbMetrics {
        self.state.metrics()
    }

    pub fn thumb_center_x(&self) -> f32 {
        self.state.thumb_center_x()
    }

    pub fn density(&self) -> Density {
        self.density
    }

    // ============ Touch ============

    pub fn set_touch_enabled(&mut self, enabled: bool) {
        self.touch_enabled = enabled;
    }

    pub fn is_touch_enabled(&self) -> bool {
        self.touch_enabled
    }

    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    // ============ Label ============

    /// Attach the label the seek bar positions on every draw
    pub fn attach_label(&mut self, label: L) {
        self.label = Some(label);
        self.request_redraw();
    }

    pub fn detach_label(&mut self) -> Option<L> {
        self.request_redraw();
        self.label.take()
    }

    pub fn label(&self) -> Option<&L> {
        self.label.as_ref()
    }

    pub fn label_mut(&mut self) -> Option<&mut L> {
        self.label.as_mut()
    }

    // ============ Listener ============

    pub fn set_on_progress_change_listener(&mut self, listener: impl FnMut(f32) + 'static) {
        self.on_progress_change = Some(Box::new(listener));
    }

    pub fn clear_on_progress_change_listener(&mut self) {
        self.on_progress_change = None;
    }

    // ============ Host notifications ============

    /// The host measured a new size for the control
    pub fn resize(&mut self, size: Size) {
        self.state.resize(size);
        self.request_redraw();
    }

    pub fn size(&self) -> Size {
        self.state.size()
    }

    /// Feed a pointer event. Returns the committed value when a drag that
    /// changed the value finishes; the listener receives the same value.
    ///
    /// With touch disabled every event is left for the host to handle.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<f32> {
        if !self.touch_enabled {
            return None;
        }

        let transition = self.phase.handle(event, &mut self.state);
        if transition.needs_redraw() {
            self.request_redraw();
        }

        if let Some(value) = transition.committed() {
            tracing::debug!("Seek bar drag committed at {}", value);
            if let Some(listener) = self.on_progress_change.as_mut() {
                listener(value);
            }
            return Some(value);
        }

        if let Transition::Finished { .. } = transition {
            tracing::debug!("Seek bar drag ended without a change");
        }
        None
    }

    /// Whether the host should draw again. Clears the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    // ============ Drawing ============

    /// Compute the frame for the current state without touching any label
    pub fn render(&self) -> Scene {
        let commands = render::commands(&self.state, &self.palette);

        let label = self.label.as_ref().map(|bubble| {
            let metrics = self.state.metrics();
            let size = bubble.size();
            LabelFrame {
                position: label::place_label(
                    self.state.thumb_center_x(),
                    self.state.mid_y(),
                    metrics.curve_height,
                    self.label_gap,
                    size,
                    self.state.size(),
                ),
                size,
                text: label::label_text(self.state.progress(), &self.suffix),
                text_color: self.palette.text_color,
            }
        });

        Scene { commands, label }
    }

    /// Draw onto a host surface and update the attached label
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let scene = self.render();
        render::replay(&scene.commands, surface);

        if let (Some(frame), Some(label)) = (scene.label, self.label.as_mut()) {
            frame.apply(label);
        }
    }
}

impl<L: Label> Default for BubbleSeekBar<L> {
    fn default() -> Self {
        Self::new(Density::IDENTITY)
    }
}

impl<L: Label + std::fmt::Debug> std::fmt::Debug for BubbleSeekBar<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BubbleSeekBar")
            .field("state", &self.state)
            .field("palette", &self.palette)
            .field("suffix", &self.suffix)
            .field("phase", &self.phase)
            .field("touch_enabled", &self.touch_enabled)
            .field("label", &self.label)
            .field("has_listener", &self.on_progress_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;
    use render::Recorder;
    use std::cell::RefCell;
    use std::rc::Rc;

    const EPSILON: f32 = 1e-3;

    /// Width 300 with radius + padding == 40, usable span 220
    fn scenario_bar() -> BubbleSeekBar {
        let mut seekbar: BubbleSeekBar = BubbleSeekBar::default();
        seekbar.state.set_metrics(ThumbMetrics {
            radius: 20.0,
            curve_height: 19.0,
            offset: 8.0,
            padding: 20.0,
        });
        seekbar.resize(Size::new(300.0, 120.0));
        seekbar
    }

    fn recording_listener(seekbar: &mut BubbleSeekBar) -> Rc<RefCell<Vec<f32>>> {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        seekbar.set_on_progress_change_listener(move |value| sink.borrow_mut().push(value));
        calls
    }

    #[test]
    fn test_drag_scenario() {
        let mut seekbar = scenario_bar();
        let calls = recording_listener(&mut seekbar);

        assert_eq!(seekbar.handle_pointer(PointerEvent::Down(150.0)), None);
        assert!((seekbar.progress() - 50.0).abs() < EPSILON);

        assert_eq!(seekbar.handle_pointer(PointerEvent::Move(260.0)), None);
        let expected = (260.0 - 40.0) / 220.0 * 100.0;
        assert!((seekbar.progress() - 100.0_f32.min(expected)).abs() < EPSILON);

        seekbar.handle_pointer(PointerEvent::Move(220.0));
        let committed = seekbar.handle_pointer(PointerEvent::Up(220.0));

        let expected = (220.0 - 40.0) / 220.0 * 100.0;
        assert!((committed.unwrap() - expected).abs() < EPSILON);
        assert!((expected - 81.818).abs() < EPSILON);
        assert_eq!(calls.borrow().len(), 1);
        assert!((calls.borrow()[0] - expected).abs() < EPSILON);
    }

    #[test]
    fn test_single_notification_per_drag() {
        let mut seekbar = scenario_bar();
        let calls = recording_listener(&mut seekbar);

        seekbar.handle_pointer(PointerEvent::Down(60.0));
        for x in [70.0, 90.0, 250.0, 10.0, 300.0, 130.0] {
            seekbar.handle_pointer(PointerEvent::Move(x));
        }
        assert!(calls.borrow().is_empty());

        seekbar.handle_pointer(PointerEvent::Up(130.0));
        assert_eq!(calls.borrow().len(), 1);
        assert!((calls.borrow()[0] - 90.0 / 220.0 * 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_tap_at_current_value_is_silent() {
        let mut seekbar = scenario_bar();
        seekbar.set_progress(50.0);
        let calls = recording_listener(&mut seekbar);

        seekbar.handle_pointer(PointerEvent::Down(150.0));
        assert_eq!(seekbar.handle_pointer(PointerEvent::Up(150.0)), None);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_touch_disabled_ignores_everything() {
        let mut seekbar = scenario_bar();
        seekbar.set_progress(10.0);
        let calls = recording_listener(&mut seekbar);
        seekbar.set_touch_enabled(false);
        assert!(!seekbar.is_touch_enabled());

        for event in [
            PointerEvent::Down(200.0),
            PointerEvent::Move(250.0),
            PointerEvent::Up(250.0),
            PointerEvent::Cancel(40.0),
        ] {
            assert_eq!(seekbar.handle_pointer(event), None);
        }

        assert_eq!(seekbar.progress(), 10.0);
        assert!(!seekbar.is_dragging());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_cancel_commits_dragged_value() {
        let mut seekbar = scenario_bar();
        let calls = recording_listener(&mut seekbar);

        seekbar.handle_pointer(PointerEvent::Down(150.0));
        let committed = seekbar.handle_pointer(PointerEvent::Cancel(150.0));

        assert!((committed.unwrap() - 50.0).abs() < EPSILON);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_set_progress_is_silent_and_clamped() {
        let mut seekbar = scenario_bar();
        let calls = recording_listener(&mut seekbar);

        seekbar.set_progress(500.0);
        assert_eq!(seekbar.progress(), 100.0);
        seekbar.set_progress(-500.0);
        assert_eq!(seekbar.progress(), 0.0);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_resize_keeps_progress() {
        let mut seekbar = scenario_bar();
        seekbar.set_progress(30.0);
        let before = seekbar.thumb_center_x();

        seekbar.resize(Size::new(800.0, 120.0));
        assert_eq!(seekbar.progress(), 30.0);
        assert!(seekbar.thumb_center_x() > before);
    }

    #[test]
    fn test_set_thumb_radius_rescales() {
        let mut seekbar: BubbleSeekBar = BubbleSeekBar::new(Density::new(2.0));
        seekbar.set_thumb_radius(30.0);

        let metrics = seekbar.thumb_metrics();
        let density = seekbar.density();
        assert!((density.px_to_dp(metrics.radius) - 30.0).abs() < EPSILON);
        assert!((density.px_to_dp(metrics.curve_height) - 28.5).abs() < EPSILON);
        assert!((density.px_to_dp(metrics.offset) - 12.0).abs() < EPSILON);
        assert!((density.px_to_dp(metrics.padding) - 36.0).abs() < EPSILON);
    }

    #[test]
    fn test_set_thumb_radius_keeps_progress() {
        let mut seekbar = scenario_bar();
        seekbar.set_progress(40.0);
        seekbar.set_thumb_radius(10.0);
        assert_eq!(seekbar.progress(), 40.0);
    }

    #[test]
    fn test_min_max_applies_on_next_update() {
        let mut seekbar = scenario_bar();
        seekbar.set_progress(80.0);
        seekbar.set_min_max_progress(0.0, 50.0);
        assert_eq!(seekbar.progress(), 80.0);

        seekbar.handle_pointer(PointerEvent::Down(260.0));
        assert_eq!(seekbar.progress(), 50.0);
    }

    #[test]
    fn test_degenerate_bounds_pin_to_min() {
        let mut seekbar = scenario_bar();
        seekbar.set_min_max_progress(7.0, 7.0);
        seekbar.handle_pointer(PointerEvent::Down(200.0));
        assert_eq!(seekbar.progress(), 7.0);

        seekbar.set_min_max_progress(0.0, 100.0);
        seekbar.resize(Size::new(60.0, 120.0));
        seekbar.handle_pointer(PointerEvent::Move(50.0));
        assert_eq!(seekbar.progress(), 0.0);
        assert!(seekbar.thumb_center_x().is_finite());
    }

    #[test]
    fn test_draw_updates_label() {
        let mut seekbar = scenario_bar();
        seekbar.set_suffix("%");
        seekbar.attach_label(Bubble::new(Size::new(40.0, 20.0)));
        seekbar.set_progress(50.0);

        let mut recorder = Recorder::default();
        seekbar.draw(&mut recorder);

        assert_eq!(recorder.commands.len(), 4);
        let bubble = seekbar.label().unwrap();
        assert_eq!(bubble.text, "50 %");
        // mid 60, peak at 41, label top = 41 - 20 + 10
        assert_eq!(bubble.position, Point::new(130.0, 31.0));
        assert_eq!(bubble.text_color, seekbar.text_color());
    }

    #[test]
    fn test_draw_without_label() {
        let mut seekbar = scenario_bar();
        let mut recorder = Recorder::default();
        seekbar.draw(&mut recorder);

        assert_eq!(recorder.commands.len(), 4);
        assert!(seekbar.render().label.is_none());
    }

    #[test]
    fn test_empty_suffix_shows_number_only() {
        let mut seekbar = scenario_bar();
        seekbar.attach_label(Bubble::new(Size::new(40.0, 20.0)));
        seekbar.set_progress(81.9);
        assert_eq!(seekbar.render().label.unwrap().text, "81");
    }

    #[test]
    fn test_set_text_color_reaches_label() {
        let mut seekbar = scenario_bar();
        seekbar.attach_label(Bubble::new(Size::new(40.0, 20.0)));
        seekbar.set_text_color(Color::from_rgb(1.0, 0.0, 0.0));
        assert_eq!(seekbar.label().unwrap().text_color, Color::from_rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_redraw_requests() {
        let mut seekbar = scenario_bar();
        assert!(seekbar.take_redraw_request());
        assert!(!seekbar.take_redraw_request());

        seekbar.set_line_color(Color::WHITE);
        assert!(seekbar.take_redraw_request());

        seekbar.handle_pointer(PointerEvent::Move(100.0));
        assert!(!seekbar.take_redraw_request(), "idle move changes nothing");

        seekbar.handle_pointer(PointerEvent::Down(100.0));
        assert!(seekbar.take_redraw_request());
    }

    #[test]
    fn test_from_config() {
        let config = SeekBarConfig {
            min_progress: 10.0,
            max_progress: 20.0,
            progress: 25.0,
            suffix: "kg".to_string(),
            touch_enabled: false,
            ..SeekBarConfig::default()
        };

        let seekbar: BubbleSeekBar = BubbleSeekBar::from_config(&config, Density::IDENTITY);
        assert_eq!(seekbar.progress(), 20.0);
        assert_eq!(seekbar.suffix(), "kg");
        assert!(!seekbar.is_touch_enabled());
        assert_eq!(seekbar.thumb_metrics(), ThumbMetrics::defaults(Density::IDENTITY));
    }
}
