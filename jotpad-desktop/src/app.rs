use crate::settings::{AppSettings, ThemeChoice};
use crate::toolbar::{toolbar, ToolbarMessage};
use iced::widget::{
    button, column, container, horizontal_rule, row, scrollable, text, text_editor, text_input,
    Column,
};
use iced::{font, Element, Font, Length, Size, Task, Theme};
use jotpad_core::{JotpadError, Note, NoteId, NotePatch, SaveOutcome, Session};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

pub struct JotpadApp {
    session: Session,
    /// Mirrors the editor draft's content; rebuilt whenever the draft changes
    /// by anything other than typing.
    content: text_editor::Content,
    settings: AppSettings,
    status_message: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(ToolbarMessage),
    PickNote(NoteId),
    DeleteNote(NoteId),
    TitleChanged(String),
    ContentEdited(text_editor::Action),
    Undo,
    Redo,
    Save,
}

impl JotpadApp {
    fn new(settings: AppSettings) -> (Self, Task<Message>) {
        log::info!(
            "Starting Jotpad (history limit {}, theme {:?})",
            settings.history_limit,
            settings.theme
        );
        (
            Self {
                session: Session::new(settings.history_limit),
                content: text_editor::Content::new(),
                settings,
                status_message: "Welcome to Jotpad".to_string(),
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toolbar(ToolbarMessage::NewNote) => {
                self.session.clear_selection();
                self.sync_content();
                self.status_message = "New note".to_string();
            }
            Message::PickNote(id) => match self.session.select(id) {
                Ok(()) => {
                    self.sync_content();
                    self.status_message = "Editing note".to_string();
                }
                Err(e) => self.report(e),
            },
            Message::DeleteNote(id) => match self.session.delete(id) {
                Ok(note) => {
                    self.sync_content();
                    self.status_message = format!("Deleted \"{}\"", note.title);
                }
                Err(e) => self.report(e),
            },
            Message::TitleChanged(title) => {
                self.session.edit(NotePatch::title(title));
            }
            Message::ContentEdited(action) => {
                let is_edit = action.is_edit();
                self.content.perform(action);
                if is_edit {
                    self.session.edit(NotePatch::content(self.typed_content()));
                }
            }
            Message::Undo => {
                if self.session.undo() {
                    self.sync_content();
                }
            }
            Message::Redo => {
                if self.session.redo() {
                    self.sync_content();
                }
            }
            Message::Save => match self.session.save() {
                Ok(outcome) => {
                    self.sync_content();
                    self.status_message = match outcome {
                        SaveOutcome::Created(note) => format!("Created \"{}\"", note.title),
                        SaveOutcome::Updated(note) => format!("Saved \"{}\"", note.title),
                    };
                }
                Err(e) => self.report(e),
            },
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let menu = toolbar(&self.status_message).map(Message::Toolbar);

        let list = container(scrollable(self.note_list()))
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .padding(16);

        let editor = container(self.editor_pane())
            .width(Length::FillPortion(2))
            .padding(16);

        column![menu, row![list, editor].spacing(16)]
            .padding(8)
            .spacing(8)
            .into()
    }

    fn theme(&self) -> Theme {
        match self.settings.theme {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }

    fn note_list(&self) -> Element<'_, Message> {
        self.session
            .store()
            .notes()
            .iter()
            .fold(Column::new().spacing(8), |list, note| {
                list.push(self.note_row(note))
            })
            .into()
    }

    fn note_row<'a>(&self, note: &'a Note) -> Element<'a, Message> {
        column![
            text(note.title.as_str()).size(14).font(BOLD),
            text(note.preview(self.settings.preview_chars)).size(12),
            row![
                button(text("Edit")).on_press(Message::PickNote(note.id)),
                button(text("Delete")).on_press(Message::DeleteNote(note.id)),
            ]
            .spacing(4),
            horizontal_rule(1),
        ]
        .spacing(4)
        .into()
    }

    fn editor_pane(&self) -> Element<'_, Message> {
        let editor = self.session.editor();
        let draft = editor.draft();

        column![
            text("Note Edit").size(20),
            text("Title"),
            text_input("Title", &draft.title).on_input(Message::TitleChanged),
            text("Content"),
            text_editor(&self.content)
                .placeholder("Write something…")
                .on_action(Message::ContentEdited)
                .height(Length::Fixed(160.0)),
            row![
                button(text("Undo")).on_press_maybe(editor.can_undo().then_some(Message::Undo)),
                button(text("Redo")).on_press_maybe(editor.can_redo().then_some(Message::Redo)),
                button(text("Save"))
                    .width(Length::Fixed(80.0))
                    .on_press_maybe(editor.can_save().then_some(Message::Save)),
            ]
            .spacing(8),
        ]
        .spacing(8)
        .into()
    }

    /// The editor's text without the trailing newline `Content::text` always adds.
    fn typed_content(&self) -> String {
        let mut text = self.content.text();
        if text.ends_with('\n') {
            text.pop();
        }
        text
    }

    fn sync_content(&mut self) {
        self.content = text_editor::Content::with_text(&self.session.editor().draft().content);
    }

    fn report(&mut self, error: JotpadError) {
        log::warn!("{error}");
        self.status_message = error.user_message();
    }
}

pub fn run(settings: AppSettings) -> iced::Result {
    iced::application("Jotpad", JotpadApp::update, JotpadApp::view)
        .theme(JotpadApp::theme)
        .window_size(Size::new(720.0, 480.0))
        .run_with(move || JotpadApp::new(settings))
}
