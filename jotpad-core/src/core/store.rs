//! In-memory, ordered note collection.

use crate::{JotpadError, Note, NoteDraft, NoteId, Result};

/// Owns every note, newest first.
///
/// Ids are creation times in Unix milliseconds. When two notes are created
/// within the same millisecond the later one is bumped past the last issued
/// id, so ids stay unique for the lifetime of the store.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    last_id: NoteId,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notes, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Creates a note from `draft` and places it at the head of the list.
    ///
    /// # Errors
    ///
    /// Returns [`JotpadError::ValidationFailed`] if the draft has no title.
    pub fn add(&mut self, draft: NoteDraft) -> Result<Note> {
        validate(&draft)?;
        let note = Note {
            id: self.next_id(),
            title: draft.title,
            content: draft.content,
        };
        self.notes.insert(0, note.clone());
        log::info!("Created note {} ({:?})", note.id, note.title);
        Ok(note)
    }

    /// Merges `draft` into the note with `id`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`JotpadError::ValidationFailed`] if the draft has no title, or
    /// [`JotpadError::NoteNotFound`] if no note has `id`.
    pub fn update(&mut self, id: NoteId, draft: &NoteDraft) -> Result<Note> {
        validate(draft)?;
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(JotpadError::NoteNotFound(id))?;
        note.apply(draft);
        log::info!("Updated note {id}");
        Ok(note.clone())
    }

    /// Removes exactly the note with `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`JotpadError::NoteNotFound`] if no note has `id`.
    pub fn remove(&mut self, id: NoteId) -> Result<Note> {
        let index = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(JotpadError::NoteNotFound(id))?;
        let note = self.notes.remove(index);
        log::info!("Deleted note {id}");
        Ok(note)
    }

    fn next_id(&mut self) -> NoteId {
        let now = chrono::Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}

fn validate(draft: &NoteDraft) -> Result<()> {
    if draft.is_saveable() {
        Ok(())
    } else {
        Err(JotpadError::ValidationFailed(
            "A note needs a title before it can be saved".to_string(),
        ))
    }
}
