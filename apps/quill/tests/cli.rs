use clap::Parser;

use quill::{Args, Command};
use quill_service::NoteController;
use quill_testkit::TempPreferences;

fn parse(argv: &[&str]) -> Command {
	let mut full = vec!["quill", "-c", "quill.toml"];

	full.extend_from_slice(argv);

	Args::try_parse_from(full).expect("Arguments must parse.").command
}

async fn session(temp: &TempPreferences) -> NoteController {
	let controller = NoteController::from_config(&temp.config()).expect("controller");

	controller.flush().await.expect("flush");

	controller
}

#[test]
fn parses_list_filters() {
	match parse(&["list", "--search", "milk", "-k", "Work"]) {
		Command::List { search, category } => {
			assert_eq!(search.as_deref(), Some("milk"));
			assert_eq!(category.as_deref(), Some("Work"));
		},
		other => panic!("Unexpected command: {other:?}"),
	}
}

#[tokio::test]
async fn add_list_edit_delete_across_sessions() {
	let temp = TempPreferences::new().expect("Failed to create temp preferences.");
	let controller = session(&temp).await;
	let added = quill::execute(
		&controller,
		parse(&["add", "--title", "Buy milk", "--content", "2%", "--category", "Personal"]),
	)
	.await
	.expect("add");

	assert!(added.contains("[Personal]"));

	let id = controller.notes()[0].id.clone();

	controller.shutdown().await.expect("shutdown");

	let controller = session(&temp).await;
	let listed =
		quill::execute(&controller, parse(&["list", "-s", "MILK"])).await.expect("list");

	assert!(listed.contains(&id));

	let filtered =
		quill::execute(&controller, parse(&["list", "-k", "Work"])).await.expect("list");

	assert_eq!(filtered, "No notes.\n");

	let edited = quill::execute(&controller, parse(&["edit", id.as_str(), "--title", "Buy oat milk"]))
		.await
		.expect("edit");

	assert!(edited.contains("Buy oat milk"));
	assert!(edited.contains("2%"));

	let deleted = quill::execute(&controller, parse(&["delete", id.as_str()])).await.expect("delete");

	assert_eq!(deleted, format!("Deleted {id}.\n"));

	controller.shutdown().await.expect("shutdown");

	let controller = session(&temp).await;

	assert!(controller.notes().is_empty());

	let missing = quill::execute(&controller, parse(&["delete", id.as_str()])).await.expect("delete");

	assert_eq!(missing, format!("No note with id {id}.\n"));
}

#[tokio::test]
async fn categories_start_with_sentinel() {
	let temp = TempPreferences::new().expect("Failed to create temp preferences.");
	let controller = session(&temp).await;

	quill::execute(&controller, parse(&["add", "--title", "trip", "-k", "Travel"]))
		.await
		.expect("add");

	let out = quill::execute(&controller, parse(&["categories"])).await.expect("categories");

	assert_eq!(out, "All\nPersonal\nWork\nStudy\nTravel\n");
}
