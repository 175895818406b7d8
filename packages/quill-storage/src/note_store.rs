use std::sync::Arc;

use quill_domain::Note;

use crate::{Error, FilePreferences, PreferenceStore, Result};

/// Reads and writes the whole note collection as one JSON array under a fixed key.
#[derive(Clone)]
pub struct NoteStore {
	prefs: Arc<dyn PreferenceStore>,
	group: String,
	key: String,
}
impl NoteStore {
	pub fn new(
		prefs: Arc<dyn PreferenceStore>,
		group: impl Into<String>,
		key: impl Into<String>,
	) -> Self {
		Self { prefs, group: group.into(), key: key.into() }
	}

	pub fn open(cfg: &quill_config::Storage) -> Result<Self> {
		let prefs = FilePreferences::open(&cfg.dir)?;

		Ok(Self::new(Arc::new(prefs), cfg.group.as_str(), cfg.key.as_str()))
	}

	pub fn group(&self) -> &str {
		&self.group
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	/// Returns the stored collection, or an empty one when nothing has been saved yet.
	pub fn load(&self) -> Result<Vec<Note>> {
		let Some(raw) = self.prefs.get(&self.group, &self.key)? else {
			return Ok(Vec::new());
		};

		serde_json::from_str(&raw).map_err(|source| Error::CorruptData {
			group: self.group.clone(),
			key: self.key.clone(),
			source,
		})
	}

	/// Overwrites the stored collection with `notes`.
	pub fn save(&self, notes: &[Note]) -> Result<()> {
		let raw = serde_json::to_string(notes)?;

		self.prefs.put(&self.group, &self.key, &raw)
	}

	pub fn clear(&self) -> Result<()> {
		self.prefs.remove(&self.group, &self.key)
	}
}
impl std::fmt::Debug for NoteStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NoteStore").field("group", &self.group).field("key", &self.key).finish()
	}
}
