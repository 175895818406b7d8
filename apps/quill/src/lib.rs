pub mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use quill_domain::NoteDraft;
use quill_service::NoteController;

#[derive(Debug, Parser)]
#[command(
	version = quill_cli::VERSION,
	rename_all = "kebab",
	styles = quill_cli::styles(),
)]
pub struct Args {
	#[command(flatten)]
	pub config: quill_cli::ConfigArgs,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Create a note at the top of the list.
	Add {
		#[arg(long, short = 't', default_value = "")]
		title: String,
		#[arg(long, default_value = "")]
		content: String,
		/// Defaults to the configured default category.
		#[arg(long, short = 'k')]
		category: Option<String>,
	},
	/// Change fields of an existing note; omitted fields keep their values.
	Edit {
		id: String,
		#[arg(long, short = 't')]
		title: Option<String>,
		#[arg(long)]
		content: Option<String>,
		#[arg(long, short = 'k')]
		category: Option<String>,
	},
	Delete {
		id: String,
	},
	/// Print notes matching the search text and category.
	List {
		#[arg(long, short = 's')]
		search: Option<String>,
		#[arg(long, short = 'k')]
		category: Option<String>,
	},
	/// Print the category selector list.
	Categories,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = args.config.load()?;

	init_tracing(&config)?;

	let controller = NoteController::from_config(&config)?;

	controller.flush().await?;

	let output = execute(&controller, args.command).await?;

	controller.shutdown().await?;

	print!("{output}");

	Ok(())
}

/// Forwards one command to the controller and returns the text to print.
pub async fn execute(controller: &NoteController, command: Command) -> color_eyre::Result<String> {
	let output = match command {
		Command::Add { title, content, category } => {
			let draft = NoteDraft::new(title, content, category.unwrap_or_default());
			let note = controller.add(draft)?;

			render::note(&note)
		},
		Command::Edit { id, title, content, category } => {
			let Some(current) = controller.find(&id) else {
				return Ok(format!("No note with id {id}.\n"));
			};
			let mut draft = current.draft();

			if let Some(title) = title {
				draft.title = title;
			}
			if let Some(content) = content {
				draft.content = content;
			}
			if let Some(category) = category {
				draft.category = category;
			}

			match controller.edit(&id, draft).await? {
				Some(note) => render::note(&note),
				None => format!("No note with id {id}.\n"),
			}
		},
		Command::Delete { id } => match controller.find(&id) {
			Some(note) => {
				controller.delete(&note)?;

				format!("Deleted {id}.\n")
			},
			None => format!("No note with id {id}.\n"),
		},
		Command::List { search, category } => {
			if let Some(search) = search {
				controller.set_search_query(search);
			}
			if let Some(category) = category {
				controller.set_selected_category(category);
			}

			render::list(&controller.visible_notes())
		},
		Command::Categories => render::categories(&controller.categories()),
	};

	controller.flush().await?;

	Ok(output)
}

fn init_tracing(config: &quill_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

	Ok(())
}
