mod error;

pub use error::{Error, Result};

use std::{
	env, fs,
	path::{Path, PathBuf},
};

use uuid::Uuid;

use quill_config::{Config, Notes, Service, Storage};

pub const TEST_GROUP: &str = "quill_test_prefs";
pub const TEST_KEY: &str = "notes_list";

/// A uniquely named scratch directory for file-backed preference tests.
///
/// The directory is removed by [`TempPreferences::cleanup`] or, best effort, on drop.
pub struct TempPreferences {
	name: String,
	dir: PathBuf,
	cleaned: bool,
}
impl TempPreferences {
	pub fn new() -> Result<Self> {
		let name = format!("quill_test_{}", Uuid::new_v4().simple());
		let dir = env::temp_dir().join(&name);

		fs::create_dir_all(&dir).map_err(|err| {
			Error::Message(format!("Failed to create test directory {dir:?}: {err}."))
		})?;

		Ok(Self { name, dir, cleaned: false })
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	pub fn group_file(&self, group: &str) -> PathBuf {
		self.dir.join(format!("{group}.json"))
	}

	pub fn storage(&self) -> Storage {
		Storage { dir: self.dir.clone(), group: TEST_GROUP.to_string(), key: TEST_KEY.to_string() }
	}

	pub fn config(&self) -> Config {
		Config {
			service: Service { log_level: "debug".to_string() },
			storage: self.storage(),
			notes: Notes::default(),
		}
	}

	pub fn cleanup(mut self) -> Result<()> {
		self.cleanup_inner()
	}

	fn cleanup_inner(&mut self) -> Result<()> {
		if self.cleaned {
			return Ok(());
		}

		self.cleaned = true;

		match fs::remove_dir_all(&self.dir) {
			Ok(()) => Ok(()),
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
			Err(err) => Err(err.into()),
		}
	}
}
impl Drop for TempPreferences {
	fn drop(&mut self) {
		if let Err(err) = self.cleanup_inner() {
			eprintln!("Failed to clean up test directory {}: {err}.", self.name);
		}
	}
}
