//! Sarcasm check of a piece of text with a single completion call.
//!
//! Unlike the reconciler, this never fails. Any error ends up in
//! `Classification::Error` so that callers (typically test harnesses)
//! always get something to compare against.

use crate::ais::{CompletionParams, CompletionService};
use tracing::{debug, warn};

// region:    --- Constants

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";

const LABEL_SARCASTIC: &str = "Sarcastic";
const LABEL_NOT_SARCASTIC: &str = "Not Sarcastic";

const MAX_TOKENS: u16 = 100;
const TEMPERATURE: f32 = 0.5;

// endregion: --- Constants

// region:    --- Types

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
	Sarcastic,
	NotSarcastic,
	/// The model answered something else than one of the two labels.
	Unrecognized(String),
	Error(String),
}

impl Classification {
	/// `text` is matched exactly, after trimming.
	pub fn from_completion(text: &str) -> Self {
		match text.trim() {
			LABEL_SARCASTIC => Classification::Sarcastic,
			LABEL_NOT_SARCASTIC => Classification::NotSarcastic,
			other => Classification::Unrecognized(other.to_string()),
		}
	}
}

impl core::fmt::Display for Classification {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Classification::Sarcastic => f.write_str(LABEL_SARCASTIC),
			Classification::NotSarcastic => f.write_str(LABEL_NOT_SARCASTIC),
			Classification::Unrecognized(text) => f.write_str(text),
			Classification::Error(msg) => write!(f, "An error occurred: {msg}"),
		}
	}
}

// endregion: --- Types

// region:    --- Classify

pub fn sarcasm_prompt(text: &str) -> String {
	format!(
		"Analyze the following paragraph and determine if it contains sarcasm:\n\n\"{text}\"\n\nAnswer with '{LABEL_SARCASTIC}' or '{LABEL_NOT_SARCASTIC}'."
	)
}

pub async fn classify(svc: &impl CompletionService, text: &str) -> Classification {
	classify_with_model(svc, DEFAULT_MODEL, text).await
}

pub async fn classify_with_model(
	svc: &impl CompletionService,
	model: &str,
	text: &str,
) -> Classification {
	let params = CompletionParams {
		model: model.to_string(),
		prompt: sarcasm_prompt(text),
		max_tokens: MAX_TOKENS,
		n: 1,
		temperature: TEMPERATURE,
	};

	match svc.complete(params).await {
		Ok(completion) => {
			debug!("sarcasm completion: {completion:?}");
			Classification::from_completion(&completion)
		}
		Err(err) => {
			warn!("sarcasm completion failed: {err}");
			Classification::Error(err.to_string())
		}
	}
}

// endregion: --- Classify

// region:    --- Tests


// endregion: --- Tests
