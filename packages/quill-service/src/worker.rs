use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};

use quill_config::Notes;
use quill_domain::{CategoryLabels, Note, NoteDraft};
use quill_storage::NoteStore;

use crate::{Error, NoteState, Result};

pub(crate) enum Command {
	Load,
	Add(Note),
	Update(Note),
	Edit { id: String, draft: NoteDraft, reply: oneshot::Sender<Option<Note>> },
	Delete { id: String },
	Flush(oneshot::Sender<()>),
}

/// Owns the authoritative collection. Commands are applied one at a time in the order they
/// were sent, and each mutation is followed by a full save before the next command runs.
pub(crate) struct PersistWorker {
	store: NoteStore,
	settings: Notes,
	state: Arc<watch::Sender<NoteState>>,
	notes: Vec<Note>,
}
impl PersistWorker {
	pub(crate) fn new(
		store: NoteStore,
		settings: Notes,
		state: Arc<watch::Sender<NoteState>>,
	) -> Self {
		Self { store, settings, state, notes: Vec::new() }
	}

	pub(crate) async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
		while let Some(command) = commands.recv().await {
			match command {
				Command::Load => self.load().await,
				Command::Add(note) => {
					self.notes.insert(0, note);
					self.commit().await;
				},
				Command::Update(mut note) => match self.position(&note.id) {
					Some(index) => {
						note.category = labels(&self.settings).resolve(&note.category);
						self.notes[index] = note;
						self.commit().await;
					},
					None => tracing::debug!(note_id = %note.id, "Update ignored; note not found."),
				},
				Command::Edit { id, draft, reply } => match self.position(&id) {
					Some(index) => {
						let edited = self.notes[index].edited(draft, &labels(&self.settings));

						self.notes[index] = edited.clone();
						self.publish();

						let _ = reply.send(Some(edited));

						self.save().await;
					},
					None => {
						tracing::debug!(note_id = %id, "Edit ignored; note not found.");

						let _ = reply.send(None);
					},
				},
				Command::Delete { id } => match self.position(&id) {
					Some(index) => {
						self.notes.remove(index);
						self.commit().await;
					},
					None => tracing::debug!(note_id = %id, "Delete ignored; note not found."),
				},
				Command::Flush(done) => {
					let _ = done.send(());
				},
			}
		}

		tracing::debug!(note_count = self.notes.len(), "Persistence worker stopped.");
	}

	fn position(&self, id: &str) -> Option<usize> {
		self.notes.iter().position(|note| note.id == id)
	}

	async fn load(&mut self) {
		let store = self.store.clone();
		let result = run_blocking(move || store.load().map_err(Error::from)).await;
		let last_error = match result {
			Ok(notes) => {
				tracing::info!(note_count = notes.len(), "Loaded notes.");

				self.notes = notes;

				None
			},
			Err(err) => {
				tracing::warn!(error = %err, "Failed to load notes; starting with an empty collection.");

				self.notes.clear();

				Some(err.to_string())
			},
		};
		let notes = self.notes.clone();

		self.state.send_modify(|state| {
			state.notes = notes;
			state.loaded = true;
			state.last_error = last_error;
		});
	}

	/// Publishes the current collection, then writes it out.
	async fn commit(&self) {
		self.publish();
		self.save().await;
	}

	fn publish(&self) {
		let snapshot = self.notes.clone();

		self.state.send_modify(|state| state.notes = snapshot);
	}

	async fn save(&self) {
		let snapshot = self.notes.clone();
		let store = self.store.clone();
		let note_count = snapshot.len();
		let result = run_blocking(move || store.save(&snapshot).map_err(Error::from)).await;

		match result {
			Ok(()) => {
				tracing::debug!(note_count, "Saved notes.");

				self.state.send_if_modified(|state| state.last_error.take().is_some());
			},
			Err(err) => {
				tracing::warn!(error = %err, note_count, "Failed to save notes; will retry on next change.");

				let message = err.to_string();

				self.state.send_modify(|state| state.last_error = Some(message));
			},
		}
	}
}

pub(crate) fn labels(settings: &Notes) -> CategoryLabels<'_> {
	CategoryLabels { default: &settings.default_category, all: &settings.all_category }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
	F: FnOnce() -> Result<T> + Send + 'static,
	T: Send + 'static,
{
	tokio::task::spawn_blocking(f)
		.await
		.map_err(|err| Error::Worker { message: err.to_string() })?
}
