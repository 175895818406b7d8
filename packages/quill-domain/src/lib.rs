pub mod filter;
pub mod note;
pub mod time_serde;
pub mod vocabulary;

pub use filter::{CategoryFilter, NoteFilter};
pub use note::{CategoryLabels, Note, NoteDraft};
