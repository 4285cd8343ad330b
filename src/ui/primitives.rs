//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from the demo app
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering
//!
//! # Contents
//!
//! - [`SeekBarCanvas`] - Hosts a [`crate::seekbar::BubbleSeekBar`] in a Canvas

pub mod seekbar_canvas;

pub use seekbar_canvas::{SeekBarCanvas, SeekBarEvent, view as seekbar_canvas};
