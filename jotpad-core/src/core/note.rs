use serde::{Deserialize, Serialize};

use crate::NoteDraft;

/// Identifier of a note: its creation time in Unix milliseconds.
pub type NoteId = i64;

/// Number of content characters shown beneath a title in the note list.
pub const DEFAULT_PREVIEW_CHARS: usize = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

impl Note {
    /// Returns an editable copy of this note's title and content.
    #[must_use]
    pub fn draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }

    /// Replaces title and content with the draft's, keeping the id.
    pub fn apply(&mut self, draft: &NoteDraft) {
        self.title.clone_from(&draft.title);
        self.content.clone_from(&draft.content);
    }

    /// Returns at most `max_chars` leading characters of the content.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        self.content.chars().take(max_chars).collect()
    }
}
