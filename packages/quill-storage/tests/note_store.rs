use std::{fs, sync::Arc};

use time::macros::datetime;

use quill_domain::{CategoryLabels, Note, NoteDraft};
use quill_storage::{Error, FilePreferences, MemoryPreferences, NoteStore, PreferenceStore};
use quill_testkit::{TEST_GROUP, TEST_KEY, TempPreferences};

const LABELS: CategoryLabels<'static> = CategoryLabels { default: "General", all: "All" };

fn sample_notes() -> Vec<Note> {
	let now = datetime!(2024-03-10 12:00:00.250 UTC);

	vec![
		Note::create(NoteDraft::new("Buy milk", "2%", "Personal"), &LABELS, now),
		Note::create(NoteDraft::new("", "", ""), &LABELS, now),
		Note::create(
			NoteDraft::new("Quarterly plan", "Draft \"OKRs\"\nline two", "Work"),
			&LABELS,
			now,
		),
	]
}

#[test]
fn load_without_saved_data_is_empty() {
	let store = NoteStore::new(Arc::new(MemoryPreferences::new()), TEST_GROUP, TEST_KEY);

	assert!(store.load().expect("Load must succeed.").is_empty());
}

#[test]
fn save_then_load_round_trips_in_memory() {
	let store = NoteStore::new(Arc::new(MemoryPreferences::new()), TEST_GROUP, TEST_KEY);
	let notes = sample_notes();

	store.save(&notes).expect("Save must succeed.");

	assert_eq!(store.load().expect("Load must succeed."), notes);
}

#[test]
fn save_then_load_round_trips_on_disk() {
	let temp = TempPreferences::new().expect("Failed to create temp preferences.");
	let notes = sample_notes();

	NoteStore::open(&temp.storage())
		.expect("Failed to open store.")
		.save(&notes)
		.expect("Save must succeed.");

	let reopened = NoteStore::open(&temp.storage()).expect("Failed to reopen store.");

	assert_eq!(reopened.load().expect("Load must succeed."), notes);
	assert!(temp.group_file(TEST_GROUP).exists());
	assert!(!temp.group_file(TEST_GROUP).with_extension("json.tmp").exists());

	temp.cleanup().expect("Failed to clean up.");
}

#[test]
fn stored_blob_uses_flat_note_records() {
	let prefs = Arc::new(MemoryPreferences::new());
	let store = NoteStore::new(prefs.clone(), TEST_GROUP, TEST_KEY);
	let notes = sample_notes();

	store.save(&notes[..1]).expect("Save must succeed.");

	let raw = prefs.get(TEST_GROUP, TEST_KEY).expect("get").expect("Blob must exist.");
	let value: serde_json::Value = serde_json::from_str(&raw).expect("Blob must be JSON.");
	let record = &value[0];

	assert!(value.is_array());
	assert_eq!(record["title"], "Buy milk");
	assert_eq!(record["content"], "2%");
	assert_eq!(record["category"], "Personal");
	assert_eq!(record["timestamp"], serde_json::json!(1_710_072_000_250_i64));
	assert_eq!(record["id"], notes[0].id.as_str());
}

#[test]
fn malformed_blob_is_corrupt_data() {
	let prefs = Arc::new(MemoryPreferences::new());

	prefs.put(TEST_GROUP, TEST_KEY, "{\"not\":\"a list\"}").expect("put");

	let store = NoteStore::new(prefs, TEST_GROUP, TEST_KEY);
	let err = store.load().expect_err("Expected corrupt data.");

	assert!(matches!(err, Error::CorruptData { .. }), "Unexpected error: {err}");
}

#[test]
fn malformed_group_file_is_reported() {
	let temp = TempPreferences::new().expect("Failed to create temp preferences.");

	fs::write(temp.group_file(TEST_GROUP), "not json").expect("Failed to write group file.");

	let store = NoteStore::open(&temp.storage()).expect("Failed to open store.");
	let err = store.load().expect_err("Expected corrupt group.");

	assert!(matches!(err, Error::CorruptGroup { .. }), "Unexpected error: {err}");
}

#[test]
fn file_groups_keep_unrelated_keys() {
	let temp = TempPreferences::new().expect("Failed to create temp preferences.");
	let prefs = FilePreferences::open(temp.dir()).expect("Failed to open preferences.");

	prefs.put(TEST_GROUP, "theme", "dark").expect("put");

	let store = NoteStore::new(Arc::new(prefs), TEST_GROUP, TEST_KEY);

	store.save(&sample_notes()).expect("Save must succeed.");
	store.clear().expect("Clear must succeed.");

	let prefs = FilePreferences::open(temp.dir()).expect("Failed to reopen preferences.");

	assert_eq!(prefs.get(TEST_GROUP, "theme").expect("get").as_deref(), Some("dark"));
	assert_eq!(prefs.get(TEST_GROUP, TEST_KEY).expect("get"), None);
}
