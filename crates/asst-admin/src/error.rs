use crate::event;
use async_openai::error::OpenAIError;
use derive_more::From;
use tokio::sync::broadcast;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
	// -- config
	ConfigMissingShortname,
	ConfigMissingAsstArgs,
	ConfigEmptyAsstArgs,
	ConfigInvalid {
		file: String,
		cause: String,
	},

	// -- ais
	OpenAIApiKeyEmpty,
	AsstArgsInvalid(String),
	NoChoiceInCompletion,

	// -- Event
	#[from]
	BoadcastSend(broadcast::error::SendError<event::Event>),

	// -- Externals
	#[from]
	SimpleFs(simple_fs::Error),
	#[from]
	SerdeYaml(serde_yaml::Error),
	#[from]
	SerdeJson(serde_json::Error),
	#[from]
	OpenAI(OpenAIError),
}

impl Error {
	/// True for the errors raised while validating an `AsstConfig`.
	pub fn is_config(&self) -> bool {
		matches!(
			self,
			Error::ConfigMissingShortname
				| Error::ConfigMissingAsstArgs
				| Error::ConfigEmptyAsstArgs
				| Error::ConfigInvalid { .. }
		)
	}
}

// region:    --- Error Boilerplate
impl core::fmt::Display for Error {
	fn fmt(
		&self,
		fmt: &mut core::fmt::Formatter,
	) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}
// endregion: --- Error Boilerplate
