//! Editable note drafts and partial updates to them.

use serde::{Deserialize, Serialize};

/// The in-progress title and content of a note being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

/// A partial update to a [`NoteDraft`]. Fields left as `None` are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    /// A patch that only replaces the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    /// A patch that only replaces the content.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }
}

impl NoteDraft {
    /// Returns a copy of this draft with the patch's fields merged in.
    #[must_use]
    pub fn merged(&self, patch: &NotePatch) -> Self {
        Self {
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            content: patch.content.clone().unwrap_or_else(|| self.content.clone()),
        }
    }

    /// A draft can be saved once it has a non-empty title.
    #[must_use]
    pub fn is_saveable(&self) -> bool {
        !self.title.is_empty()
    }
}
