//! Seek bar renderer
//!
//! A pure function of the geometry snapshot. It produces a list of draw
//! commands which a [`Surface`] then replays, so nothing (paint style, path
//! buffers) carries over from one frame to the next.

use iced::{Color, Point};

use super::geometry::SliderState;

/// Whether a shape is outlined or filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Stroke,
    Fill,
}

/// Per-command paint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub style: PaintStyle,
    pub color: Color,
    pub stroke_width: f32,
}

impl Paint {
    pub fn stroke(color: Color, stroke_width: f32) -> Self {
        Self {
            style: PaintStyle::Stroke,
            color,
            stroke_width,
        }
    }

    pub fn fill(color: Color) -> Self {
        Self {
            style: PaintStyle::Fill,
            color,
            stroke_width: 0.0,
        }
    }
}

/// One cubic Bézier segment, starting wherever the previous one ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub control_a: Point,
    pub control_b: Point,
    pub to: Point,
}

/// The bump under the thumb: rises to the peak, then falls back to the line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BumpCurve {
    pub start: Point,
    pub rise: CubicSegment,
    pub fall: CubicSegment,
}

impl BumpCurve {
    pub fn new(
        thumb_center_x: f32,
        mid_y: f32,
        radius: f32,
        padding: f32,
        curve_height: f32,
    ) -> Self {
        let peak_y = mid_y - curve_height;
        let left = thumb_center_x - padding;
        let right = thumb_center_x + padding;

        Self {
            start: Point::new(thumb_center_x - radius - padding, mid_y),
            rise: CubicSegment {
                control_a: Point::new(left, mid_y),
                control_b: Point::new(left, peak_y),
                to: Point::new(thumb_center_x, peak_y),
            },
            fall: CubicSegment {
                control_a: Point::new(right, peak_y),
                control_b: Point::new(right, mid_y),
                to: Point::new(thumb_center_x + radius + padding, mid_y),
            },
        }
    }

    pub fn peak(&self) -> Point {
        self.rise.to
    }

    pub fn end(&self) -> Point {
        self.fall.to
    }
}

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line { from: Point, to: Point, paint: Paint },
    Curve { curve: BumpCurve, paint: Paint },
    Circle { center: Point, radius: f32, paint: Paint },
}

/// Host drawing surface
pub trait Surface {
    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint);

    fn draw_curve(&mut self, curve: &BumpCurve, paint: &Paint);

    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint);
}

/// Colors and stroke used to paint the bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub line_color: Color,
    pub thumb_color: Color,
    pub text_color: Color,
    pub stroke_width: f32,
}

impl Default for Palette {
    fn default() -> Self {
        use crate::ui::theme;

        Self {
            line_color: theme::DEFAULT_LINE_COLOR,
            thumb_color: theme::DEFAULT_THUMB_COLOR,
            text_color: theme::DEFAULT_TEXT_COLOR,
            stroke_width: theme::DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Build the draw sequence: left line, bump, right line, thumb
pub fn commands(state: &SliderState, palette: &Palette) -> Vec<DrawCommand> {
    let metrics = state.metrics();
    let thumb_x = state.thumb_center_x();
    let mid_y = state.mid_y();
    let width = state.size().width;
    let line = Paint::stroke(palette.line_color, palette.stroke_width);

    let curve = BumpCurve::new(
        thumb_x,
        mid_y,
        metrics.radius,
        metrics.padding,
        metrics.curve_height,
    );

    vec![
        DrawCommand::Line {
            from: Point::new(0.0, mid_y),
            to: curve.start,
            paint: line,
        },
        DrawCommand::Curve { curve, paint: line },
        DrawCommand::Line {
            from: curve.end(),
            to: Point::new(width, mid_y),
            paint: line,
        },
        DrawCommand::Circle {
            center: Point::new(thumb_x, mid_y + metrics.offset),
            radius: metrics.radius,
            paint: Paint::fill(palette.thumb_color),
        },
    ]
}

/// Replay commands onto a surface in order
pub fn replay<S: Surface + ?Sized>(commands: &[DrawCommand], surface: &mut S) {
    for command in commands {
        match command {
            DrawCommand::Line { from, to, paint } => surface.draw_line(*from, *to, paint),
            DrawCommand::Curve { curve, paint } => surface.draw_curve(curve, paint),
            DrawCommand::Circle {
                center,
                radius,
                paint,
            } => surface.draw_circle(*center, *radius, paint),
        }
    }
}

/// Surface that records what it was asked to draw
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Surface for Recorder {
    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            paint: *paint,
        });
    }

    fn draw_curve(&mut self, curve: &BumpCurve, paint: &Paint) {
        self.commands.push(DrawCommand::Curve {
            curve: *curve,
            paint: *paint,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            paint: *paint,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seekbar::geometry::ThumbMetrics;
    use iced::Size;

    fn snapshot() -> SliderState {
        let mut state = SliderState::new(ThumbMetrics {
            radius: 20.0,
            curve_height: 19.0,
            offset: 8.0,
            padding: 24.0,
        });
        state.resize(Size::new(400.0, 100.0));
        state.set_progress(50.0);
        state
    }

    #[test]
    fn test_draw_sequence() {
        let state = snapshot();
        let palette = Palette::default();
        let commands = commands(&state, &palette);

        // span = 400 - 88 = 312, thumb at 44 + 156
        let thumb_x = 200.0;
        assert_eq!(state.thumb_center_x(), thumb_x);
        assert_eq!(commands.len(), 4);

        match &commands[0] {
            DrawCommand::Line { from, to, paint } => {
                assert_eq!(*from, Point::new(0.0, 50.0));
                assert_eq!(*to, Point::new(156.0, 50.0));
                assert_eq!(paint.style, PaintStyle::Stroke);
                assert_eq!(paint.color, palette.line_color);
            }
            other => panic!("expected left line, got {:?}", other),
        }

        match &commands[1] {
            DrawCommand::Curve { curve, paint } => {
                assert_eq!(curve.start, Point::new(156.0, 50.0));
                assert_eq!(curve.peak(), Point::new(thumb_x, 31.0));
                assert_eq!(curve.end(), Point::new(244.0, 50.0));
                assert_eq!(paint.style, PaintStyle::Stroke);
            }
            other => panic!("expected bump, got {:?}", other),
        }

        match &commands[2] {
            DrawCommand::Line { from, to, .. } => {
                assert_eq!(*from, Point::new(244.0, 50.0));
                assert_eq!(*to, Point::new(400.0, 50.0));
            }
            other => panic!("expected right line, got {:?}", other),
        }

        match &commands[3] {
            DrawCommand::Circle {
                center,
                radius,
                paint,
            } => {
                assert_eq!(*center, Point::new(thumb_x, 58.0));
                assert_eq!(*radius, 20.0);
                assert_eq!(paint.style, PaintStyle::Fill);
                assert_eq!(paint.color, palette.thumb_color);
            }
            other => panic!("expected thumb, got {:?}", other),
        }
    }

    #[test]
    fn test_bump_control_points() {
        let curve = BumpCurve::new(100.0, 50.0, 10.0, 12.0, 9.5);

        assert_eq!(curve.rise.control_a, Point::new(88.0, 50.0));
        assert_eq!(curve.rise.control_b, Point::new(88.0, 40.5));
        assert_eq!(curve.fall.control_a, Point::new(112.0, 40.5));
        assert_eq!(curve.fall.control_b, Point::new(112.0, 50.0));
    }

    #[test]
    fn test_repeated_draws_are_identical() {
        let state = snapshot();
        let palette = Palette::default();

        let mut first = Recorder::default();
        let mut second = Recorder::default();
        replay(&commands(&state, &palette), &mut first);
        replay(&commands(&state, &palette), &mut second);

        assert_eq!(first, second);
        // the line after the thumb is still stroked
        let next_frame = commands(&state, &palette);
        assert!(matches!(
            next_frame[0],
            DrawCommand::Line { paint: Paint { style: PaintStyle::Stroke, .. }, .. }
        ));
    }

    #[test]
    fn test_replay_preserves_order() {
        let state = snapshot();
        let commands = commands(&state, &Palette::default());
        let mut recorder = Recorder::default();
        replay(&commands, &mut recorder);
        assert_eq!(recorder.commands, commands);
    }
}
