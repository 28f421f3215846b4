//! `asst-reconcile <config_file>`
//!
//! Creates or updates the OpenAI assistant described by a YAML config file,
//! then prints it and its id on stdout.

// region:    --- Modules

mod error;
mod utils;

pub use self::error::{Error, Result};
use crate::utils::cli::{api_key_from_env, ico_err, init_logging, print_events};
use asst_admin::ais::new_ais_client;
use asst_admin::event::EventBus;
use asst_admin::{reconcile, AsstConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

// endregion: --- Modules

/// Create or update an OpenAI assistant.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
	/// Path to the YAML configuration file.
	config_file: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
	init_logging();
	let args = Args::parse();

	match start(args).await {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{} Error: {}", ico_err(), e);
			ExitCode::FAILURE
		}
	}
}

async fn start(args: Args) -> Result<()> {
	info!("Loading config {}", args.config_file.display());
	let config = AsstConfig::load(&args.config_file)?;
	let api_key = api_key_from_env()?;

	let event_bus = EventBus::new();
	let mut rx = event_bus.subscribe()?;
	let ais = new_ais_client(api_key, event_bus)?;

	let res = reconcile(&ais, &config).await;
	print_events(&mut rx)?;
	let reconciled = res?;

	println!("{}", serde_json::to_string_pretty(&reconciled.asst.raw)?);
	println!("Assistant id: {}", reconciled.asst.id);

	Ok(())
}
