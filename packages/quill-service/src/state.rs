use quill_config::Notes;
use quill_domain::{CategoryFilter, Note, NoteFilter, vocabulary};

/// Snapshot published to subscribers after every change to notes or filter state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteState {
	/// Authoritative collection, newest first.
	pub notes: Vec<Note>,
	pub search_query: String,
	pub selected_category: String,
	/// Set once the initial load has finished, whether or not it succeeded.
	pub loaded: bool,
	/// Most recent load or save failure; cleared by the next successful save.
	pub last_error: Option<String>,
}
impl NoteState {
	pub fn new(all_category: &str) -> Self {
		Self { selected_category: all_category.to_string(), ..Default::default() }
	}

	pub fn filter(&self, settings: &Notes) -> NoteFilter {
		NoteFilter::new(
			&self.search_query,
			CategoryFilter::from_label(&self.selected_category, &settings.all_category),
		)
	}

	pub fn visible_notes(&self, settings: &Notes) -> Vec<Note> {
		self.filter(settings).apply(&self.notes)
	}

	pub fn categories(&self, settings: &Notes) -> Vec<String> {
		vocabulary::category_vocabulary(
			&settings.all_category,
			&settings.seed_categories,
			&self.notes,
		)
	}

	pub fn find(&self, id: &str) -> Option<&Note> {
		self.notes.iter().find(|note| note.id == id)
	}
}
