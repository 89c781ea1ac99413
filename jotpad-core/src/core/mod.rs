//! Internal domain modules for the Jotpad core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod draft;
pub mod editor;
pub mod error;
pub mod note;
pub mod session;
pub mod store;
pub mod time_travel;

#[doc(inline)]
pub use draft::{NoteDraft, NotePatch};
#[doc(inline)]
pub use editor::NoteEditor;
#[doc(inline)]
pub use error::{JotpadError, Result};
#[doc(inline)]
pub use note::{Note, NoteId};
#[doc(inline)]
pub use session::{SaveOutcome, Session};
#[doc(inline)]
pub use store::NoteStore;
#[doc(inline)]
pub use time_travel::TimeTravel;
