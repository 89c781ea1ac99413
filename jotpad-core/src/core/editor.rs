//! The note editor: a draft under time-travel state plus the note it belongs to.

use crate::{Note, NoteDraft, NotePatch, TimeTravel};

/// Editing state for the draft shown in the editor pane.
#[derive(Debug, Clone)]
pub struct NoteEditor {
    state: TimeTravel<NoteDraft>,
}

impl NoteEditor {
    /// Creates an editor holding an empty draft. `history_limit` of 0 is unbounded.
    pub fn new(history_limit: usize) -> Self {
        Self {
            state: TimeTravel::with_limit(NoteDraft::default(), history_limit),
        }
    }

    /// Starts over with `note`'s draft, or with an empty one for `None`.
    pub fn load(&mut self, note: Option<&Note>) {
        self.state.reset(note.map(Note::draft).unwrap_or_default());
    }

    pub fn draft(&self) -> &NoteDraft {
        self.state.present()
    }

    pub fn time_travel(&self) -> &TimeTravel<NoteDraft> {
        &self.state
    }

    /// Merges `patch` into the draft. Returns whether the draft changed.
    pub fn update(&mut self, patch: NotePatch) -> bool {
        let next = self.state.present().merged(&patch);
        self.state.update(next)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        self.update(NotePatch::title(title))
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        self.update(NotePatch::content(content))
    }

    pub fn undo(&mut self) -> bool {
        self.state.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.state.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    pub fn can_save(&self) -> bool {
        self.draft().is_saveable()
    }
}

impl Default for NoteEditor {
    fn default() -> Self {
        Self::new(0)
    }
}
