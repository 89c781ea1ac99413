//! Top-level note-taking state: the store, the selection and the editor.

use crate::{JotpadError, Note, NoteEditor, NoteId, NotePatch, NoteStore, Result};

/// What a successful [`Session::save`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// No note was selected; a new one was added.
    Created(Note),
    /// The selected note was updated and the selection cleared.
    Updated(Note),
}

impl SaveOutcome {
    pub fn note(&self) -> &Note {
        match self {
            Self::Created(note) | Self::Updated(note) => note,
        }
    }
}

/// Composes the note collection with the editor.
///
/// The editor's undo/redo state is reset whenever a save succeeds, a note is
/// selected, or the selection is cleared.
#[derive(Debug, Clone)]
pub struct Session {
    store: NoteStore,
    selected: Option<NoteId>,
    editor: NoteEditor,
}

impl Session {
    /// Creates an empty session whose editor keeps at most `history_limit`
    /// undo steps (0 = unbounded).
    pub fn new(history_limit: usize) -> Self {
        Self {
            store: NoteStore::new(),
            selected: None,
            editor: NoteEditor::new(history_limit),
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn editor(&self) -> &NoteEditor {
        &self.editor
    }

    pub fn selected(&self) -> Option<NoteId> {
        self.selected
    }

    /// Selects the note with `id` and loads it into the editor.
    ///
    /// # Errors
    ///
    /// Returns [`JotpadError::NoteNotFound`] if no note has `id`.
    pub fn select(&mut self, id: NoteId) -> Result<()> {
        let note = self.store.get(id).ok_or(JotpadError::NoteNotFound(id))?;
        self.editor.load(Some(note));
        self.selected = Some(id);
        log::debug!("Selected note {id}");
        Ok(())
    }

    /// Drops the selection so the next save creates a new note.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.editor.load(None);
    }

    pub fn edit(&mut self, patch: NotePatch) -> bool {
        self.editor.update(patch)
    }

    pub fn undo(&mut self) -> bool {
        self.editor.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.editor.redo()
    }

    /// Saves the editor's draft: updates the selected note, or adds a new one.
    ///
    /// # Errors
    ///
    /// Returns [`JotpadError::ValidationFailed`] if the draft has no title, or
    /// [`JotpadError::NoteNotFound`] if the selected note disappeared. Nothing
    /// changes on error.
    pub fn save(&mut self) -> Result<SaveOutcome> {
        let draft = self.editor.draft().clone();
        let outcome = match self.selected {
            Some(id) => self.store.update(id, &draft).map(SaveOutcome::Updated),
            None => self.store.add(draft).map(SaveOutcome::Created),
        }
        .inspect_err(|e| log::warn!("Save rejected: {e}"))?;
        self.selected = None;
        self.editor.load(None);
        Ok(outcome)
    }

    /// Removes the note with `id`, then clears the selection and the editor.
    ///
    /// # Errors
    ///
    /// Returns [`JotpadError::NoteNotFound`] if no note has `id`.
    pub fn delete(&mut self, id: NoteId) -> Result<Note> {
        let note = self.store.remove(id)?;
        self.clear_selection();
        Ok(note)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoteDraft;

    fn write(session: &mut Session, title: &str, content: &str) {
        session.edit(NotePatch::title(title));
        session.edit(NotePatch::content(content));
    }

    #[test]
    fn test_save_without_selection_creates_note() {
        let mut session = Session::default();
        write(&mut session, "Ideas", "Write more tests");

        let outcome = session.save().unwrap();
        let SaveOutcome::Created(note) = outcome else {
            panic!("expected a new note");
        };
        assert_eq!(note.title, "Ideas");
        assert_eq!(session.store().len(), 1);
        assert_eq!(session.store().notes()[0].id, note.id);
        assert_eq!(*session.editor().draft(), NoteDraft::default());
        assert!(!session.editor().can_undo());
    }

    #[test]
    fn test_save_with_selection_updates_and_clears_selection() {
        let mut session = Session::default();
        write(&mut session, "Draft", "v1");
        let id = session.save().unwrap().note().id;

        session.select(id).unwrap();
        assert_eq!(session.editor().draft().content, "v1");
        session.edit(NotePatch::content("v2"));

        let outcome = session.save().unwrap();
        assert!(matches!(outcome, SaveOutcome::Updated(ref n) if n.id == id));
        assert_eq!(session.selected(), None);
        assert_eq!(session.store().len(), 1);
        assert_eq!(session.store().get(id).unwrap().content, "v2");
    }

    #[test]
    fn test_save_with_empty_title_changes_nothing() {
        let mut session = Session::default();
        session.edit(NotePatch::content("orphan"));

        let err = session.save().unwrap_err();
        assert!(matches!(err, JotpadError::ValidationFailed(_)));
        assert!(session.store().is_empty());
        assert_eq!(session.editor().draft().content, "orphan");
        assert!(session.editor().can_undo());
    }

    #[test]
    fn test_delete_removes_note_and_clears_selection() {
        let mut session = Session::default();
        write(&mut session, "keep", "");
        let keep = session.save().unwrap().note().id;
        write(&mut session, "drop", "");
        let gone = session.save().unwrap().note().id;

        session.select(gone).unwrap();
        session.edit(NotePatch::title("dropping"));
        let removed = session.delete(gone).unwrap();

        assert_eq!(removed.id, gone);
        assert_eq!(session.selected(), None);
        assert_eq!(*session.editor().draft(), NoteDraft::default());
        assert_eq!(session.store().len(), 1);
        assert!(session.store().get(keep).is_some());
    }

    #[test]
    fn test_selecting_another_note_resets_editor_history() {
        let mut session = Session::default();
        write(&mut session, "a", "");
        let a = session.save().unwrap().note().id;
        write(&mut session, "b", "");
        let b = session.save().unwrap().note().id;

        session.select(a).unwrap();
        session.edit(NotePatch::title("a!"));
        session.select(b).unwrap();

        assert_eq!(session.editor().draft().title, "b");
        assert!(!session.undo());
        assert_eq!(session.store().get(a).unwrap().title, "a");
    }

    #[test]
    fn test_select_unknown_note() {
        let mut session = Session::default();
        assert_eq!(session.select(5), Err(JotpadError::NoteNotFound(5)));
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_undo_redo_through_session() {
        let mut session = Session::default();
        session.edit(NotePatch::title("T"));
        session.edit(NotePatch::title("Ti"));
        assert!(session.undo());
        assert_eq!(session.editor().draft().title, "T");
        assert!(session.redo());
        assert_eq!(session.editor().draft().title, "Ti");
        assert!(!session.redo());
    }
}
