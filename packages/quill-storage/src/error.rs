use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("I/O failure at {path:?}: {source}")]
	Io { path: PathBuf, source: std::io::Error },
	#[error("Stored value {group}/{key} is not a valid note list: {source}")]
	CorruptData { group: String, key: String, source: serde_json::Error },
	#[error("Preference group file {path:?} is not a valid JSON object: {source}")]
	CorruptGroup { path: PathBuf, source: serde_json::Error },
	#[error("Preference group file {path:?} is {len} bytes, above the {limit} byte limit.")]
	TooLarge { path: PathBuf, len: u64, limit: u64 },
	#[error(transparent)]
	Serialize(#[from] serde_json::Error),
}
