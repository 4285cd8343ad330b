//! Theme and default colors for the seek bar
//! Supports both dark and light modes for the demo window

use iced::color;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

// ============================================================================
// Seek bar defaults
// ============================================================================

/// Line and bump stroke
pub const DEFAULT_LINE_COLOR: Color = Color::BLACK;
/// Thumb fill, also used behind the bubble text
pub const DEFAULT_THUMB_COLOR: Color = Color::BLACK;
/// Bubble text
pub const DEFAULT_TEXT_COLOR: Color = Color::WHITE;
/// Line stroke width in dp
pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;

/// Bubble size in dp
pub const DEFAULT_BUBBLE_WIDTH: f32 = 56.0;
pub const DEFAULT_BUBBLE_HEIGHT: f32 = 28.0;

/// Bubble text size relative to bubble height
pub const BUBBLE_TEXT_RATIO: f32 = 0.5;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
pub fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const BORDER: Color = color!(0x282828);
    pub const TEXT_MUTED: Color = color!(0x888888);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf5f5f5);
    pub const SURFACE: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xdddddd);
    pub const TEXT_MUTED: Color = color!(0x777777);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Window background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Card holding the seek bar
///
/// Stays light in every theme so the default black line and thumb remain
/// visible. Only the border follows the theme.
pub fn card(theme: &Theme) -> container::Style {
    let border = if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    };
    container::Style {
        background: Some(Background::Color(light::SURFACE)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border,
        },
        ..Default::default()
    }
}
