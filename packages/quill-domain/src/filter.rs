use crate::note::Note;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
	All,
	Only(String),
}
impl CategoryFilter {
	/// Maps a selector label to a filter; `all_label` is the "no filter" sentinel.
	pub fn from_label(label: &str, all_label: &str) -> Self {
		if label == all_label { Self::All } else { Self::Only(label.to_string()) }
	}

	pub fn matches(&self, note: &Note) -> bool {
		match self {
			Self::All => true,
			Self::Only(category) => note.category == *category,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteFilter {
	query: String,
	category: CategoryFilter,
}
impl NoteFilter {
	pub fn new(query: &str, category: CategoryFilter) -> Self {
		Self { query: query.to_lowercase(), category }
	}

	pub fn matches(&self, note: &Note) -> bool {
		self.matches_query(note) && self.category.matches(note)
	}

	/// Returns the matching notes in their original relative order.
	pub fn apply(&self, notes: &[Note]) -> Vec<Note> {
		notes.iter().filter(|note| self.matches(note)).cloned().collect()
	}

	fn matches_query(&self, note: &Note) -> bool {
		if self.query.trim().is_empty() {
			return true;
		}

		[&note.title, &note.content, &note.category]
			.into_iter()
			.any(|field| field.to_lowercase().contains(&self.query))
	}
}

#[cfg(test)]
mod tests {
	use time::macros::datetime;

	use crate::{
		filter::{CategoryFilter, NoteFilter},
		note::Note,
	};

	fn note(id: &str, title: &str, content: &str, category: &str) -> Note {
		Note {
			id: id.to_string(),
			title: title.to_string(),
			content: content.to_string(),
			category: category.to_string(),
			timestamp: datetime!(2024-01-01 00:00:00 UTC),
		}
	}

	fn sample() -> Vec<Note> {
		vec![
			note("1", "ABCdef", "", "Work"),
			note("2", "Groceries", "buy milk", "Personal"),
			note("3", "Exam", "chapter 4", "Study"),
			note("4", "Standup", "notes", "Work"),
		]
	}

	fn ids(notes: &[Note]) -> Vec<&str> {
		notes.iter().map(|note| note.id.as_str()).collect()
	}

	#[test]
	fn empty_query_and_all_returns_everything() {
		let notes = sample();
		let filter = NoteFilter::new("", CategoryFilter::All);

		assert_eq!(filter.apply(&notes), notes);
	}

	#[test]
	fn query_is_case_insensitive() {
		let filter = NoteFilter::new("abc", CategoryFilter::All);

		assert_eq!(ids(&filter.apply(&sample())), vec!["1"]);
	}

	#[test]
	fn query_searches_content_and_category() {
		assert_eq!(ids(&NoteFilter::new("MILK", CategoryFilter::All).apply(&sample())), vec!["2"]);
		assert_eq!(
			ids(&NoteFilter::new("study", CategoryFilter::All).apply(&sample())),
			vec!["3"]
		);
	}

	#[test]
	fn whitespace_query_means_no_filter() {
		let filter = NoteFilter::new("   ", CategoryFilter::All);

		assert_eq!(filter.apply(&sample()).len(), 4);
	}

	#[test]
	fn surrounding_spaces_are_matched_literally() {
		let notes =
			vec![note("5", "buymilk", "", "Personal"), note("6", "buy milk", "", "Personal")];

		assert_eq!(ids(&NoteFilter::new("buy ", CategoryFilter::All).apply(&notes)), vec!["6"]);
		assert_eq!(ids(&NoteFilter::new(" milk", CategoryFilter::All).apply(&notes)), vec!["6"]);
	}

	#[test]
	fn category_filter_is_exact_and_keeps_order() {
		let filter = NoteFilter::new("", CategoryFilter::Only("Work".to_string()));

		assert_eq!(ids(&filter.apply(&sample())), vec!["1", "4"]);

		let filter = NoteFilter::new("", CategoryFilter::Only("work".to_string()));

		assert!(filter.apply(&sample()).is_empty());
	}

	#[test]
	fn query_and_category_combine() {
		let filter = NoteFilter::new("notes", CategoryFilter::Only("Work".to_string()));

		assert_eq!(ids(&filter.apply(&sample())), vec!["4"]);
	}

	#[test]
	fn applying_twice_is_idempotent() {
		let filter = NoteFilter::new("e", CategoryFilter::Only("Work".to_string()));
		let once = filter.apply(&sample());
		let twice = filter.apply(&once);

		assert_eq!(once, twice);
	}

	#[test]
	fn sentinel_label_maps_to_all() {
		assert_eq!(CategoryFilter::from_label("All", "All"), CategoryFilter::All);
		assert_eq!(
			CategoryFilter::from_label("Work", "All"),
			CategoryFilter::Only("Work".to_string())
		);
	}
}
