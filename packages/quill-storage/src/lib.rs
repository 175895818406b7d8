pub mod note_store;
pub mod preferences;

mod error;

pub use error::Error;
pub use note_store::NoteStore;
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceStore};

pub type Result<T, E = Error> = std::result::Result<T, E>;
