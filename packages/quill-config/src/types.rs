use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub notes: Notes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	#[serde(default = "default_log_level")]
	pub log_level: String,
}
impl Default for Service {
	fn default() -> Self {
		Self { log_level: default_log_level() }
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
	/// Directory holding one JSON file per preference group. Relative paths resolve against
	/// the directory of the config file.
	pub dir: PathBuf,
	#[serde(default = "default_group")]
	pub group: String,
	#[serde(default = "default_key")]
	pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Notes {
	/// Category assigned to drafts whose category is blank.
	#[serde(default = "default_category")]
	pub default_category: String,
	/// Sentinel label meaning "no category filter".
	#[serde(default = "default_all_category")]
	pub all_category: String,
	#[serde(default = "default_seed_categories")]
	pub seed_categories: Vec<String>,
}
impl Default for Notes {
	fn default() -> Self {
		Self {
			default_category: default_category(),
			all_category: default_all_category(),
			seed_categories: default_seed_categories(),
		}
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_group() -> String {
	"quill_prefs".to_string()
}

fn default_key() -> String {
	"notes_list".to_string()
}

fn default_category() -> String {
	"General".to_string()
}

fn default_all_category() -> String {
	"All".to_string()
}

fn default_seed_categories() -> Vec<String> {
	vec!["Personal".to_string(), "Work".to_string(), "Study".to_string()]
}
