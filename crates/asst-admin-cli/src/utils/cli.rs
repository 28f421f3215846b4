use crate::{Error, Result};
use asst_admin::event::{AisEvent, Event};
use console::{style, Style, StyledObject, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use tokio::sync::broadcast::Receiver;
use tracing_subscriber::EnvFilter;

const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

// region:    --- Env & Logging

pub fn api_key_from_env() -> Result<String> {
	match std::env::var(ENV_OPENAI_API_KEY) {
		Ok(key) if !key.trim().is_empty() => Ok(key),
		_ => Err(Error::NoOpenAIApiKeyInEnv),
	}
}

/// Logs go to stderr, stdout is kept for the results.
/// Filtered by `RUST_LOG`, defaults to "info".
pub fn init_logging() {
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_target(false)
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();
}

// endregion: --- Env & Logging

// region:    --- Prompts

pub fn prompt(text: &str) -> Result<String> {
	let theme = ColorfulTheme {
		prompt_style: Style::new().for_stderr().color256(45),
		prompt_prefix: style("?".to_string()).color256(45).for_stderr(),
		..ColorfulTheme::default()
	};

	let input = Input::with_theme(&theme);
	let res = input.with_prompt(text).interact_text()?;

	Ok(res)
}

// endregion: --- Prompts

// region:    --- Events

/// Prints the events received so far on stderr.
pub fn print_events(rx: &mut Receiver<Event>) -> Result<()> {
	let term = Term::stderr();

	while let Ok(evt) = rx.try_recv() {
		match evt {
			Event::Ais(AisEvent::AsstsListed { count, ids }) => {
				term.write_line(&format!(
					"{} Found {count} assistant(s): {}",
					ico_check(),
					ids.join(", ")
				))?;
			}
			Event::Ais(AisEvent::AsstCreated(asst_ref)) => {
				term.write_line(&format!(
					"{} Assistant {} created",
					ico_created(),
					asst_ref.name
				))?;
			}
			Event::Ais(AisEvent::AsstUpdated(asst_ref)) => {
				term.write_line(&format!(
					"{} Assistant {} updated",
					ico_updated(),
					asst_ref.name
				))?;
			}
		}
	}

	Ok(())
}

// endregion: --- Events

// region:    --- Icons

pub fn ico_check() -> StyledObject<&'static str> {
	style("✔").green()
}

pub fn ico_created() -> StyledObject<&'static str> {
	style("✚").green()
}

pub fn ico_updated() -> StyledObject<&'static str> {
	style("↻").green()
}

pub fn ico_err() -> StyledObject<&'static str> {
	style("✗").red()
}

// endregion: --- Icons
