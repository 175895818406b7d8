pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Storage error: {0}")]
	Storage(#[from] quill_storage::Error),
	#[error("Persistence worker has stopped.")]
	WorkerStopped,
	#[error("Persistence worker failed: {message}")]
	Worker { message: String },
}
