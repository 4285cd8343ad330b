//! Seek bar configuration
//!
//! Loads presentation and geometry attributes from a JSON file. Every field is
//! optional; anything missing takes the stock value.

use std::path::{Path, PathBuf};

use iced::{Color, Size};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::seekbar::geometry::{DEFAULT_MAX_PROGRESS, DEFAULT_MIN_PROGRESS};
use crate::ui::theme;
use crate::units::Density;

/// A color written as `#rrggbb` or `#rrggbbaa`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexColor(pub Color);

impl HexColor {
    pub fn parse(input: &str) -> Option<Self> {
        let hex = input.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }

        let channel = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();

        match hex.len() {
            6 => Some(Self(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?))),
            8 => Some(Self(Color::from_rgba8(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                f32::from(channel(6)?) / 255.0,
            ))),
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.0.into_rgba8();
        if a == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

impl From<HexColor> for Color {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        HexColor::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color '{}'", raw)))
    }
}

/// Size of the floating label, in dp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub width_dp: f32,
    pub height_dp: f32,
}

impl LabelConfig {
    pub fn size(&self, density: Density) -> Size {
        Size::new(density.dp_to_px(self.width_dp), density.dp_to_px(self.height_dp))
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            width_dp: theme::DEFAULT_BUBBLE_WIDTH,
            height_dp: theme::DEFAULT_BUBBLE_HEIGHT,
        }
    }
}

/// Seek bar attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekBarConfig {
    pub min_progress: f32,
    pub max_progress: f32,
    /// Initial value, clamped into the bounds
    pub progress: f32,
    /// Text shown after the number in the label
    pub suffix: String,
    /// Thumb radius in dp. When unset the stock thumb geometry is used.
    pub thumb_radius_dp: Option<f32>,
    pub line_color: HexColor,
    pub thumb_color: HexColor,
    pub text_color: HexColor,
    pub touch_enabled: bool,
    /// Floating label, `null` to hide it
    pub label: Option<LabelConfig>,
}

impl Default for SeekBarConfig {
    fn default() -> Self {
        Self {
            min_progress: DEFAULT_MIN_PROGRESS,
            max_progress: DEFAULT_MAX_PROGRESS,
            progress: DEFAULT_MIN_PROGRESS,
            suffix: String::new(),
            thumb_radius_dp: None,
            line_color: HexColor(theme::DEFAULT_LINE_COLOR),
            thumb_color: HexColor(theme::DEFAULT_THUMB_COLOR),
            text_color: HexColor(theme::DEFAULT_TEXT_COLOR),
            touch_enabled: true,
            label: Some(LabelConfig::default()),
        }
    }
}

impl SeekBarConfig {
    /// Default config file location
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "bubble-seekbar", "BubbleSeekBar")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load from the default location, or return defaults if absent or invalid
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) => {
                tracing::debug!("No seek bar config at {:?}: {}", path, e);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring seek bar config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
