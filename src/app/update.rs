//! Message handling

use iced::Task;

use super::App;
use super::message::Message;
use bubble_seekbar::ui::primitives::seekbar_canvas;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SeekBar(event) => {
                if let Some(value) = seekbar_canvas::apply(&mut self.seekbar, event) {
                    self.last_committed = Some(value);
                }
            }
            Message::TouchEnabled(enabled) => {
                tracing::debug!("Touch enabled: {}", enabled);
                self.seekbar.set_touch_enabled(enabled);
            }
            Message::ThumbRadius(radius) => {
                self.seekbar.set_thumb_radius(radius);
                // re-derive the thumb from progress with the new margins
                let progress = self.seekbar.progress();
                self.seekbar.set_progress(progress);
            }
            Message::Reset => {
                let min = self.seekbar.min_progress();
                self.seekbar.set_progress(min);
            }
            Message::DarkMode(enabled) => {
                self.dark_mode = enabled;
            }
        }

        if self.seekbar.take_redraw_request() {
            self.cache.clear();
        }

        Task::none()
    }
}
