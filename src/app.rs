//! Demo application hosting one seek bar

mod message;
mod update;
mod view;

use iced::widget::canvas;
use iced::{Task, Theme};

use bubble_seekbar::config::SeekBarConfig;
use bubble_seekbar::{Bubble, BubbleSeekBar, Density};

pub use message::Message;

/// Demo window state
pub struct App {
    seekbar: BubbleSeekBar,
    cache: canvas::Cache,
    /// Last value committed by a drag
    last_committed: Option<f32>,
    dark_mode: bool,
}

impl App {
    /// Create new application instance
    pub fn new(config: &SeekBarConfig) -> (Self, Task<Message>) {
        let density = Density::IDENTITY;
        let mut seekbar: BubbleSeekBar = BubbleSeekBar::from_config(config, density);

        if let Some(label) = config.label {
            seekbar.attach_label(Bubble::new(label.size(density)));
        }

        seekbar.set_on_progress_change_listener(|value| {
            tracing::info!("Progress committed: {:.2}", value);
        });

        let app = Self {
            seekbar,
            cache: canvas::Cache::new(),
            last_committed: None,
            dark_mode: false,
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        format!("Bubble Seek Bar - {}", self.seekbar.progress() as i64)
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
