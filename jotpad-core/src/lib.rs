//! Core library for Jotpad: a small in-memory note list with an undo/redo editor.
//!
//! The primary entry point is [`Session`], which owns the [`NoteStore`], the
//! current selection and the [`NoteEditor`]. All note mutations go through
//! `Session` methods.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    draft::{NoteDraft, NotePatch},
    editor::NoteEditor,
    error::{JotpadError, Result},
    note::{Note, NoteId, DEFAULT_PREVIEW_CHARS},
    session::{SaveOutcome, Session},
    store::NoteStore,
    time_travel::TimeTravel,
};
