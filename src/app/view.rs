//! Application view rendering

use iced::widget::{Space, button, column, container, row, slider, text, toggler};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use bubble_seekbar::ui::{primitives, theme};

/// Height of the seek bar canvas
const SEEKBAR_HEIGHT: f32 = 120.0;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let seekbar = container(primitives::seekbar_canvas(
            &self.seekbar,
            &self.cache,
            SEEKBAR_HEIGHT,
            Message::SeekBar,
        ))
        .padding(16)
        .width(Fill)
        .style(theme::card);

        let committed = match self.last_committed {
            Some(value) => format!("Last committed: {:.2}", value),
            None => "Drag the thumb to commit a value".to_string(),
        };

        let radius_dp = self
            .seekbar
            .density()
            .px_to_dp(self.seekbar.thumb_metrics().radius);

        let controls = column![
            row![
                text("Thumb radius").width(120),
                slider(8.0..=40.0, radius_dp, Message::ThumbRadius)
                    .step(1.0)
                    .width(240),
                text(format!("{:.0} dp", radius_dp)),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
            toggler(self.seekbar.is_touch_enabled())
                .label("Touch enabled")
                .on_toggle(Message::TouchEnabled),
            toggler(self.dark_mode)
                .label("Dark mode")
                .on_toggle(Message::DarkMode),
            button(text("Reset")).on_press(Message::Reset),
        ]
        .spacing(12);

        let content = column![
            seekbar,
            text(committed).style(|theme: &iced::Theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
            Space::new().height(8),
            controls,
        ]
        .spacing(16)
        .padding(24)
        .max_width(720);

        container(content)
            .width(Fill)
            .height(Fill)
            .center_x(Fill)
            .style(theme::main_content)
            .into()
    }
}
