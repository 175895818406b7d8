mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Notes, Service, Storage};

use std::{collections::HashSet, fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	if cfg.storage.dir.is_relative()
		&& let Some(parent) = path.parent()
	{
		cfg.storage.dir = parent.join(&cfg.storage.dir);
	}

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn from_toml_str(raw: &str) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw).map_err(|err| Error::ParseInline { source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.storage.dir.as_os_str().is_empty() {
		return Err(Error::Validation { message: "storage.dir must be non-empty.".to_string() });
	}

	for (label, value) in [
		("storage.group", &cfg.storage.group),
		("storage.key", &cfg.storage.key),
		("notes.default_category", &cfg.notes.default_category),
		("notes.all_category", &cfg.notes.all_category),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if cfg.notes.seed_categories.iter().any(|seed| seed == &cfg.notes.all_category) {
		return Err(Error::Validation {
			message: "notes.seed_categories must not contain notes.all_category.".to_string(),
		});
	}
	if cfg.notes.default_category == cfg.notes.all_category {
		return Err(Error::Validation {
			message: "notes.default_category must differ from notes.all_category.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.storage.group = cfg.storage.group.trim().to_string();
	cfg.storage.key = cfg.storage.key.trim().to_string();
	cfg.notes.default_category = cfg.notes.default_category.trim().to_string();
	cfg.notes.all_category = cfg.notes.all_category.trim().to_string();

	let mut seen = HashSet::new();

	cfg.notes.seed_categories = cfg
		.notes
		.seed_categories
		.iter()
		.map(|seed| seed.trim().to_string())
		.filter(|seed| !seed.is_empty() && seen.insert(seed.clone()))
		.collect();
}
