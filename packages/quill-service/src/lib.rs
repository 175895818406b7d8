pub mod controller;
pub mod state;

mod error;
mod worker;

pub use controller::NoteController;
pub use error::{Error, Result};
pub use state::NoteState;
