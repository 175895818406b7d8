use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A user-authored note. `id` and `timestamp` are fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub category: String,
	#[serde(with = "crate::time_serde")]
	pub timestamp: OffsetDateTime,
}
impl Note {
	/// Builds a new note with a fresh id, resolving the category through `labels`.
	pub fn create(draft: NoteDraft, labels: &CategoryLabels<'_>, now: OffsetDateTime) -> Self {
		let category = labels.resolve(&draft.category);

		Self {
			id: Uuid::new_v4().to_string(),
			title: draft.title,
			content: draft.content,
			category,
			timestamp: crate::time_serde::truncate_to_millis(now),
		}
	}

	/// Returns a copy carrying the draft's text fields, keeping `id` and `timestamp`.
	pub fn edited(&self, draft: NoteDraft, labels: &CategoryLabels<'_>) -> Self {
		let category = labels.resolve(&draft.category);

		Self {
			id: self.id.clone(),
			title: draft.title,
			content: draft.content,
			category,
			timestamp: self.timestamp,
		}
	}

	pub fn draft(&self) -> NoteDraft {
		NoteDraft {
			title: self.title.clone(),
			content: self.content.clone(),
			category: self.category.clone(),
		}
	}
}

/// The three editable fields, as collected from an add or edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
	pub title: String,
	pub content: String,
	pub category: String,
}
impl NoteDraft {
	pub fn new(
		title: impl Into<String>,
		content: impl Into<String>,
		category: impl Into<String>,
	) -> Self {
		Self { title: title.into(), content: content.into(), category: category.into() }
	}
}

/// The two reserved category labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryLabels<'a> {
	/// Assigned when a category is blank.
	pub default: &'a str,
	/// Filter sentinel; never stored on a note.
	pub all: &'a str,
}
impl CategoryLabels<'_> {
	/// Trims `category`, replacing a blank value or the sentinel with the default label.
	pub fn resolve(&self, category: &str) -> String {
		let category = category.trim();

		if category.is_empty() || category == self.all {
			self.default.to_string()
		} else {
			category.to_string()
		}
	}
}
