use std::path::PathBuf;

use clap::{
	Args,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};

use quill_config::Config;

pub const VERSION: &str = concat!(
	env!("CARGO_PKG_VERSION"),
	"-",
	env!("VERGEN_GIT_SHA"),
	"-",
	env!("VERGEN_CARGO_TARGET_TRIPLE"),
);

/// Location of the TOML file every quill command starts from.
#[derive(Clone, Debug, Args)]
pub struct ConfigArgs {
	/// Path to the quill configuration file.
	#[arg(long = "config", short = 'c', value_name = "FILE")]
	pub path: PathBuf,
}
impl ConfigArgs {
	/// Loads and validates the configuration at [`ConfigArgs::path`].
	pub fn load(&self) -> quill_config::Result<Config> {
		quill_config::load(&self.path)
	}
}

/// Help colours shared by quill binaries.
pub fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Cyan.on_default() | Effects::BOLD)
		.usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
		.literal(AnsiColor::Yellow.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Green.on_default())
}
