//! Canvas host for the bubble seek bar
//!
//! Implements `canvas::Program` on top of a borrowed [`BubbleSeekBar`]. The
//! program never mutates the seek bar itself. Mouse and touch input and size
//! changes are published as [`SeekBarEvent`] messages, and the application
//! feeds them back through [`apply`].
//!
//! # Design
//!
//! This is a primitive component. It uses generic Message types and does not
//! depend on application-specific types.

use iced::alignment;
use iced::widget::canvas::{self, Canvas, Event, Frame, Geometry, Path, Stroke, Text};
use iced::{
    Color, Element, Length, Pixels, Point, Rectangle, Renderer, Size, Theme, mouse, touch, window,
};

use crate::seekbar::BubbleSeekBar;
use crate::seekbar::interaction::PointerEvent;
use crate::seekbar::label::{Label, LabelFrame};
use crate::seekbar::render::{self, BumpCurve, Paint, PaintStyle, Surface};
use crate::ui::theme;

/// Input the canvas forwards to the seek bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekBarEvent {
    Pointer(PointerEvent),
    Resized(Size),
}

/// Deliver an event to the seek bar. Returns the committed value, if any.
pub fn apply<L: Label>(seekbar: &mut BubbleSeekBar<L>, event: SeekBarEvent) -> Option<f32> {
    match event {
        SeekBarEvent::Pointer(pointer) => seekbar.handle_pointer(pointer),
        SeekBarEvent::Resized(size) => {
            seekbar.resize(size);
            None
        }
    }
}

impl Surface for Frame {
    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        let line = Path::line(from, to);
        self.stroke(
            &line,
            Stroke::default()
                .with_color(paint.color)
                .with_width(paint.stroke_width),
        );
    }

    fn draw_curve(&mut self, curve: &BumpCurve, paint: &Paint) {
        let path = Path::new(|builder| {
            builder.move_to(curve.start);
            for segment in [&curve.rise, &curve.fall] {
                builder.bezier_curve_to(segment.control_a, segment.control_b, segment.to);
            }
        });
        self.stroke(
            &path,
            Stroke::default()
                .with_color(paint.color)
                .with_width(paint.stroke_width),
        );
    }

    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        let circle = Path::circle(center, radius);
        match paint.style {
            PaintStyle::Fill => self.fill(&circle, paint.color),
            PaintStyle::Stroke => self.stroke(
                &circle,
                Stroke::default()
                    .with_color(paint.color)
                    .with_width(paint.stroke_width),
            ),
        }
    }
}

/// Paint the bubble as a pill behind centered text
fn draw_bubble(frame: &mut Frame, bubble: &LabelFrame, background: Color) {
    let pill = Path::rounded_rectangle(
        bubble.position,
        bubble.size,
        (bubble.size.height / 2.0).into(),
    );
    frame.fill(&pill, background);

    frame.fill_text(Text {
        content: bubble.text.clone(),
        position: Point::new(
            bubble.position.x + bubble.size.width / 2.0,
            bubble.position.y + bubble.size.height / 2.0,
        ),
        color: bubble.text_color,
        size: Pixels(bubble.size.height * theme::BUBBLE_TEXT_RATIO),
        align_x: alignment::Horizontal::Center.into(),
        align_y: alignment::Vertical::Center,
        ..Text::default()
    });
}

/// Translate an iced event into a pointer event in local coordinates
fn pointer_event(
    event: &Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    dragging: bool,
    fallback_x: f32,
) -> Option<PointerEvent> {
    let local_x = |position: Point| position.x - bounds.x;

    let pointer = match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) if !dragging => {
            cursor.position_over(bounds).map(|p| PointerEvent::Down(local_x(p)))
        }
        Event::Touch(touch::Event::FingerPressed { position, .. })
            if !dragging && bounds.contains(*position) =>
        {
            Some(PointerEvent::Down(local_x(*position)))
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) if dragging => {
            Some(PointerEvent::Move(local_x(*position)))
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) if dragging => {
            Some(PointerEvent::Move(local_x(*position)))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if dragging => {
            // cursor may have left the window, keep the thumb where it is
            let x = cursor.land().position().map_or(fallback_x, local_x);
            Some(PointerEvent::Up(x))
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) if dragging => {
            Some(PointerEvent::Up(local_x(*position)))
        }
        Event::Touch(touch::Event::FingerLost { position, .. }) if dragging => {
            Some(PointerEvent::Cancel(local_x(*position)))
        }
        _ => None,
    };

    pointer.filter(|p| p.x().is_finite())
}

/// Per-widget input state
///
/// Tracks the press synchronously. The borrowed seek bar only sees a press
/// once the published message has been applied, which can be after the
/// matching release when both arrive in one event batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    pressed: bool,
}

impl State {
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

/// Canvas program drawing a borrowed seek bar
pub struct SeekBarCanvas<'a, Message, L: Label> {
    seekbar: &'a BubbleSeekBar<L>,
    cache: &'a canvas::Cache,
    on_event: Box<dyn Fn(SeekBarEvent) -> Message + 'a>,
}

impl<'a, Message, L: Label> SeekBarCanvas<'a, Message, L> {
    pub fn new(
        seekbar: &'a BubbleSeekBar<L>,
        cache: &'a canvas::Cache,
        on_event: impl Fn(SeekBarEvent) -> Message + 'a,
    ) -> Self {
        Self {
            seekbar,
            cache,
            on_event: Box::new(on_event),
        }
    }
}

impl<Message, L: Label> canvas::Program<Message> for SeekBarCanvas<'_, Message, L> {
    type State = State;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if let Event::Window(window::Event::RedrawRequested(_)) = event {
            if bounds.size() != self.seekbar.size() {
                return Some(canvas::Action::publish((self.on_event)(
                    SeekBarEvent::Resized(bounds.size()),
                )));
            }
            return None;
        }

        if !self.seekbar.is_touch_enabled() {
            state.pressed = false;
            return None;
        }

        let pointer = pointer_event(
            event,
            bounds,
            cursor,
            state.pressed,
            self.seekbar.thumb_center_x(),
        )?;

        match pointer {
            PointerEvent::Down(_) => state.pressed = true,
            PointerEvent::Up(_) | PointerEvent::Cancel(_) => state.pressed = false,
            PointerEvent::Move(_) => {}
        }

        let message = (self.on_event)(SeekBarEvent::Pointer(pointer));
        Some(canvas::Action::publish(message).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let scene = self.seekbar.render();
            render::replay(&scene.commands, frame);

            if let Some(bubble) = &scene.label {
                draw_bubble(frame, bubble, self.seekbar.thumb_color());
            }
        });

        vec![geometry]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if !self.seekbar.is_touch_enabled() {
            mouse::Interaction::default()
        } else if state.pressed {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Create a seek bar canvas element
pub fn view<'a, Message: 'a, L: Label + 'a>(
    seekbar: &'a BubbleSeekBar<L>,
    cache: &'a canvas::Cache,
    height: f32,
    on_event: impl Fn(SeekBarEvent) -> Message + 'a,
) -> Element<'a, Message> {
    Canvas::new(SeekBarCanvas::new(seekbar, cache, on_event))
        .width(Length::Fill)
        .height(height)
        .into()
}
