//! String-keyed preference groups, the backing store for persisted note lists.

use std::{
	collections::{BTreeMap, HashMap},
	fs, io,
	path::PathBuf,
	sync::Mutex,
};

use crate::{Error, Result};

/// Default upper bound on a single group file; anything larger is treated as corruption.
pub const MAX_GROUP_FILE_BYTES: u64 = 16 * 1024 * 1024;

/// An opaque string store addressed by `(group, key)`.
///
/// Writes are last-write-wins. Implementations must make a completed `put` visible to every
/// later `get`.
pub trait PreferenceStore
where
	Self: Send + Sync,
{
	fn get(&self, group: &str, key: &str) -> Result<Option<String>>;

	fn put(&self, group: &str, key: &str, value: &str) -> Result<()>;

	fn remove(&self, group: &str, key: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryPreferences {
	entries: Mutex<HashMap<(String, String), String>>,
}
impl MemoryPreferences {
	pub fn new() -> Self {
		Self::default()
	}
}
impl PreferenceStore for MemoryPreferences {
	fn get(&self, group: &str, key: &str) -> Result<Option<String>> {
		let entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());

		Ok(entries.get(&(group.to_string(), key.to_string())).cloned())
	}

	fn put(&self, group: &str, key: &str, value: &str) -> Result<()> {
		let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());

		entries.insert((group.to_string(), key.to_string()), value.to_string());

		Ok(())
	}

	fn remove(&self, group: &str, key: &str) -> Result<()> {
		let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());

		entries.remove(&(group.to_string(), key.to_string()));

		Ok(())
	}
}

/// Stores each group as a JSON object in `<dir>/<group>.json`.
///
/// A write replaces the whole group file through a temporary sibling and a rename, so
/// readers never observe a half-written file. A write over an unreadable group file moves
/// that file to `<group>.json.corrupt` and starts the group afresh.
#[derive(Debug)]
pub struct FilePreferences {
	dir: PathBuf,
	max_bytes: u64,
	// Serializes read-modify-write cycles on group files within this process.
	write_lock: Mutex<()>,
}
impl FilePreferences {
	pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
		Self::with_limit(dir, MAX_GROUP_FILE_BYTES)
	}

	pub fn with_limit(dir: impl Into<PathBuf>, max_bytes: u64) -> Result<Self> {
		let dir = dir.into();

		fs::create_dir_all(&dir).map_err(|source| Error::Io { path: dir.clone(), source })?;

		Ok(Self { dir, max_bytes, write_lock: Mutex::new(()) })
	}

	pub fn group_path(&self, group: &str) -> PathBuf {
		self.dir.join(format!("{group}.json"))
	}

	pub fn quarantine_path(&self, group: &str) -> PathBuf {
		self.dir.join(format!("{group}.json.corrupt"))
	}

	/// Like `read_group`, but an unreadable group is set aside and treated as empty.
	fn read_group_for_write(&self, group: &str) -> Result<BTreeMap<String, String>> {
		match self.read_group(group) {
			Err(err @ (Error::CorruptGroup { .. } | Error::TooLarge { .. })) => {
				let path = self.group_path(group);
				let quarantine = self.quarantine_path(group);

				tracing::warn!(
					error = %err,
					quarantine = %quarantine.display(),
					"Replacing unreadable preference group."
				);

				fs::rename(&path, &quarantine)
					.map_err(|source| Error::Io { path, source })?;

				Ok(BTreeMap::new())
			},
			other => other,
		}
	}

	fn read_group(&self, group: &str) -> Result<BTreeMap<String, String>> {
		let path = self.group_path(group);
		let metadata = match fs::metadata(&path) {
			Ok(metadata) => metadata,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
			Err(source) => return Err(Error::Io { path, source }),
		};

		if metadata.len() > self.max_bytes {
			return Err(Error::TooLarge { path, len: metadata.len(), limit: self.max_bytes });
		}

		let raw = fs::read_to_string(&path)
			.map_err(|source| Error::Io { path: path.clone(), source })?;

		serde_json::from_str(&raw).map_err(|source| Error::CorruptGroup { path, source })
	}

	fn write_group(&self, group: &str, entries: &BTreeMap<String, String>) -> Result<()> {
		let path = self.group_path(group);
		let serialized = serde_json::to_vec_pretty(entries)?;

		if serialized.len() as u64 > self.max_bytes {
			return Err(Error::TooLarge {
				path,
				len: serialized.len() as u64,
				limit: self.max_bytes,
			});
		}

		let temp_path = path.with_extension("json.tmp");

		fs::write(&temp_path, serialized)
			.map_err(|source| Error::Io { path: temp_path.clone(), source })?;
		fs::rename(&temp_path, &path).map_err(|source| Error::Io { path, source })?;

		Ok(())
	}
}
impl PreferenceStore for FilePreferences {
	fn get(&self, group: &str, key: &str) -> Result<Option<String>> {
		Ok(self.read_group(group)?.remove(key))
	}

	fn put(&self, group: &str, key: &str, value: &str) -> Result<()> {
		let _guard = self.write_lock.lock().unwrap_or_else(|err| err.into_inner());
		let mut entries = self.read_group_for_write(group)?;

		entries.insert(key.to_string(), value.to_string());

		self.write_group(group, &entries)
	}

	fn remove(&self, group: &str, key: &str) -> Result<()> {
		let _guard = self.write_lock.lock().unwrap_or_else(|err| err.into_inner());
		let mut entries = self.read_group_for_write(group)?;

		if entries.remove(key).is_none() {
			return Ok(());
		}

		self.write_group(group, &entries)
	}
}

#[cfg(test)]
mod tests {
	use crate::preferences::{MemoryPreferences, PreferenceStore};

	#[test]
	fn memory_store_is_last_write_wins() {
		let prefs = MemoryPreferences::new();

		assert_eq!(prefs.get("g", "k").expect("get"), None);

		prefs.put("g", "k", "one").expect("put");
		prefs.put("g", "k", "two").expect("put");

		assert_eq!(prefs.get("g", "k").expect("get").as_deref(), Some("two"));
		assert_eq!(prefs.get("other", "k").expect("get"), None);

		prefs.remove("g", "k").expect("remove");

		assert_eq!(prefs.get("g", "k").expect("get"), None);
	}
}
