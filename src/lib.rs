//! Bubble seek bar
//!
//! A horizontal slider that renders a curved bump under a draggable thumb and
//! shows the value in a floating bubble while dragging. The control logic in
//! [`seekbar`] is host agnostic; [`ui`] hosts it in an iced `Canvas`.

pub mod config;
pub mod seekbar;
pub mod ui;
pub mod units;

pub use config::{ConfigError, SeekBarConfig};
pub use seekbar::BubbleSeekBar;
pub use seekbar::interaction::PointerEvent;
pub use seekbar::label::{Bubble, Label};
pub use ui::primitives::SeekBarEvent;
pub use units::Density;
