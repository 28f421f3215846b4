//! `check-sarcasm [text]`
//!
//! Prints "Sarcastic", "Not Sarcastic", or "An error occurred: ...".
//! Always exits with 0.

// region:    --- Modules

mod error;
mod utils;

pub use self::error::{Error, Result};
use crate::utils::cli::{api_key_from_env, init_logging, prompt};
use asst_admin::ais::new_ais_client;
use asst_admin::event::EventBus;
use asst_admin::sarcasm::DEFAULT_MODEL;
use asst_admin::{classify_with_model, Classification};
use clap::Parser;
use tracing::debug;

// endregion: --- Modules

/// Detect sarcasm in a paragraph of text using OpenAI.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
	/// The text to analyze for sarcasm. Prompted for when missing.
	text: Option<String>,

	/// Completion model to use.
	#[arg(long, default_value = DEFAULT_MODEL)]
	model: String,
}

#[tokio::main]
async fn main() {
	init_logging();
	let args = Args::parse();

	let res = match start(args).await {
		Ok(res) => res,
		Err(e) => Classification::Error(e.to_string()),
	};

	println!("{res}");
}

async fn start(args: Args) -> Result<Classification> {
	let text = match args.text {
		Some(text) => text,
		None => prompt("Text to analyze")?,
	};

	debug!("Classifying {} chars with {}", text.chars().count(), args.model);

	let api_key = api_key_from_env()?;
	let ais = new_ais_client(api_key, EventBus::new())?;

	Ok(classify_with_model(&ais, &args.model, &text).await)
}
