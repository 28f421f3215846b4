//! The `ais` module is the interface with the remote AI service (OpenAI).
//!
//! Everything that goes over the wire is delegated to `async-openai`.
//! This module only defines the two seams the rest of the crate talks to,
//! `AsstService` and `CompletionService`, and implements them on `AisClient`.
//!
//! No retries, no backoff, no streaming. Whatever the client does by default is what we get.

// region:    --- Modules

pub mod asst;
mod event;
mod types;

pub use event::AisEvent;
pub use types::*;

use crate::event::EventBus;
use crate::{Error, Result};
use async_openai::config::OpenAIConfig;
use async_openai::types::CreateCompletionRequestArgs;
use async_openai::Client;
use async_trait::async_trait;

// endregion: --- Modules

// region:    --- Services

/// Assistant CRUD as needed by the reconciler.
#[async_trait]
pub trait AsstService: Send + Sync {
	fn event_bus(&self) -> &EventBus;

	async fn list_assts(&self, query: &AsstListQuery) -> Result<AsstPage>;

	async fn create_asst(&self, args: &AsstArgs) -> Result<RemoteAsst>;

	async fn update_asst(
		&self,
		asst_id: &AsstId,
		args: &AsstArgs,
	) -> Result<RemoteAsst>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
	pub model: String,
	pub prompt: String,
	pub max_tokens: u16,
	pub n: u8,
	pub temperature: f32,
}

/// Single-shot text completion.
#[async_trait]
pub trait CompletionService: Send + Sync {
	/// Returns the text of the first choice, untouched.
	async fn complete(&self, params: CompletionParams) -> Result<String>;
}

// endregion: --- Services

// region:    --- Client

pub type OaClient = Client<OpenAIConfig>;

/// Wraps the async-openai client and provides additional functionalities
/// such as an event bus.
#[derive(Debug)]
pub struct AisClient {
	oa_client: OaClient,
	event_bus: EventBus,
}

/// The api key is given by the caller (the binaries read it from the env).
pub fn new_ais_client(
	api_key: impl Into<String>,
	event_bus: EventBus,
) -> Result<AisClient> {
	let api_key = api_key.into();
	if api_key.trim().is_empty() {
		return Err(Error::OpenAIApiKeyEmpty);
	}

	let config = OpenAIConfig::new().with_api_key(api_key);

	Ok(AisClient {
		oa_client: Client::with_config(config),
		event_bus,
	})
}

#[async_trait]
impl AsstService for AisClient {
	fn event_bus(&self) -> &EventBus {
		&self.event_bus
	}

	async fn list_assts(&self, query: &AsstListQuery) -> Result<AsstPage> {
		let oa_assts = self.oa_client.assistants();

		let res = oa_assts.list(query).await?;

		let data = res
			.data
			.into_iter()
			.map(RemoteAsst::try_from)
			.collect::<Result<Vec<_>>>()?;

		Ok(AsstPage {
			data,
			last_id: res.last_id,
			has_more: res.has_more,
		})
	}

	async fn create_asst(&self, args: &AsstArgs) -> Result<RemoteAsst> {
		let req = args.to_create_request()?;

		let asst_obj = self.oa_client.assistants().create(req).await?;

		asst_obj.try_into()
	}

	async fn update_asst(
		&self,
		asst_id: &AsstId,
		args: &AsstArgs,
	) -> Result<RemoteAsst> {
		let req = args.to_modify_request()?;

		let asst_obj = self.oa_client.assistants().update(asst_id, req).await?;

		asst_obj.try_into()
	}
}

#[async_trait]
impl CompletionService for AisClient {
	async fn complete(&self, params: CompletionParams) -> Result<String> {
		let req = CreateCompletionRequestArgs::default()
			.model(params.model)
			.prompt(params.prompt)
			.max_tokens(params.max_tokens)
			.n(params.n)
			.temperature(params.temperature)
			.build()?;

		let res = self.oa_client.completions().create(req).await?;

		let choice = res
			.choices
			.into_iter()
			.next()
			.ok_or(Error::NoChoiceInCompletion)?;

		Ok(choice.text)
	}
}

// endregion: --- Client

// region:    --- Tests


// endregion: --- Tests
