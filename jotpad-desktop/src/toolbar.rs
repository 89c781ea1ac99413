use iced::widget::{button, row, text};
use iced::{Alignment, Element};

#[derive(Debug, Clone)]
pub enum ToolbarMessage {
    NewNote,
}

/// The strip above both panes: a `New note` button and the status line.
pub fn toolbar(status: &str) -> Element<'_, ToolbarMessage> {
    row![
        button(text("New note")).on_press(ToolbarMessage::NewNote),
        text(status).size(12),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}
