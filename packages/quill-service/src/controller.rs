use std::sync::Arc;

use time::OffsetDateTime;
use tokio::{
	sync::{mpsc, oneshot, watch},
	task::JoinHandle,
};

use quill_config::{Config, Notes};
use quill_domain::{Note, NoteDraft};
use quill_storage::NoteStore;

use crate::{
	Error, NoteState, Result,
	worker::{self, Command, PersistWorker},
};

/// Owns note state for one session and routes every mutation through a single persistence
/// worker.
///
/// Mutations return as soon as they are queued; their effect becomes visible to readers and
/// subscribers once the worker applies them. Call [`NoteController::flush`] to wait for that.
pub struct NoteController {
	settings: Notes,
	state: Arc<watch::Sender<NoteState>>,
	commands: mpsc::UnboundedSender<Command>,
	worker: JoinHandle<()>,
}
impl NoteController {
	/// Starts the worker and queues the initial load. Must be called within a Tokio runtime.
	pub fn spawn(store: NoteStore, settings: Notes) -> Self {
		let (state, _) = watch::channel(NoteState::new(&settings.all_category));
		let state = Arc::new(state);
		let (commands, receiver) = mpsc::unbounded_channel();
		let worker =
			tokio::spawn(PersistWorker::new(store, settings.clone(), state.clone()).run(receiver));

		// The receiver is held by the worker, so this only fails if the worker already panicked.
		let _ = commands.send(Command::Load);

		Self { settings, state, commands, worker }
	}

	pub fn from_config(cfg: &Config) -> Result<Self> {
		let store = NoteStore::open(&cfg.storage)?;

		tracing::debug!(group = store.group(), key = store.key(), "Opened note store.");

		Ok(Self::spawn(store, cfg.notes.clone()))
	}

	pub fn settings(&self) -> &Notes {
		&self.settings
	}

	/// Creates a note from `draft` and queues it for insertion at the head of the collection.
	pub fn add(&self, draft: NoteDraft) -> Result<Note> {
		let note = Note::create(draft, &worker::labels(&self.settings), OffsetDateTime::now_utc());

		self.send(Command::Add(note.clone()))?;

		Ok(note)
	}

	/// Replaces the note with the same id, keeping its position. Unknown ids are ignored.
	pub fn update(&self, note: Note) -> Result<()> {
		self.send(Command::Update(note))
	}

	/// Applies `draft` to note `id` after every previously queued command. The note keeps its
	/// id and position. Returns `None` if no such note exists at that point.
	pub async fn edit(&self, id: &str, draft: NoteDraft) -> Result<Option<Note>> {
		let (reply, wait) = oneshot::channel();

		self.send(Command::Edit { id: id.to_owned(), draft, reply })?;

		wait.await.map_err(|_| Error::WorkerStopped)
	}

	/// Removes the note with the same id. Unknown ids are ignored.
	pub fn delete(&self, note: &Note) -> Result<()> {
		self.send(Command::Delete { id: note.id.clone() })
	}

	pub fn set_search_query(&self, text: impl Into<String>) {
		let text = text.into();

		self.state.send_if_modified(|state| {
			if state.search_query == text {
				return false;
			}

			state.search_query = text;

			true
		});
	}

	pub fn clear_search(&self) {
		self.set_search_query(String::new());
	}

	pub fn set_selected_category(&self, label: impl Into<String>) {
		let label = label.into();

		self.state.send_if_modified(|state| {
			if state.selected_category == label {
				return false;
			}

			state.selected_category = label;

			true
		});
	}

	pub fn search_query(&self) -> String {
		self.state.borrow().search_query.clone()
	}

	pub fn selected_category(&self) -> String {
		self.state.borrow().selected_category.clone()
	}

	pub fn snapshot(&self) -> NoteState {
		self.state.borrow().clone()
	}

	pub fn notes(&self) -> Vec<Note> {
		self.state.borrow().notes.clone()
	}

	pub fn visible_notes(&self) -> Vec<Note> {
		self.state.borrow().visible_notes(&self.settings)
	}

	pub fn categories(&self) -> Vec<String> {
		self.state.borrow().categories(&self.settings)
	}

	pub fn find(&self, id: &str) -> Option<Note> {
		self.state.borrow().find(id).cloned()
	}

	pub fn subscribe(&self) -> watch::Receiver<NoteState> {
		self.state.subscribe()
	}

	/// Waits until every previously queued command has been applied and saved.
	pub async fn flush(&self) -> Result<()> {
		let (done, wait) = oneshot::channel();

		self.send(Command::Flush(done))?;

		wait.await.map_err(|_| Error::WorkerStopped)
	}

	/// Drains the queue and stops the worker.
	pub async fn shutdown(self) -> Result<()> {
		let Self { commands, worker, .. } = self;

		drop(commands);

		worker.await.map_err(|err| Error::Worker { message: err.to_string() })
	}

	fn send(&self, command: Command) -> Result<()> {
		self.commands.send(command).map_err(|_| Error::WorkerStopped)
	}
}
