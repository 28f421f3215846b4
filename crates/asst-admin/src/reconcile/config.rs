use crate::ais::{AsstArgs, AsstId};
use crate::{Error, Result};
use serde::Deserialize;
use simple_fs::read_to_string;
use std::path::Path;

/// As found in the YAML file, before validation.
#[derive(Debug, Deserialize)]
struct RawConfig {
	shortname: Option<String>,
	assistant_args: Option<AsstArgs>,
	assistant_id: Option<String>,
}

/// What the reconciler needs to know about the assistant.
#[derive(Debug, Clone, PartialEq)]
pub struct AsstConfig {
	pub shortname: String,
	pub asst_args: AsstArgs,
	pub asst_id: Option<AsstId>,
}

impl AsstConfig {
	pub fn load(file: impl AsRef<Path>) -> Result<Self> {
		let file = file.as_ref();
		let content = read_to_string(file)?;

		Self::from_yaml_str(&content).map_err(|err| match err {
			Error::SerdeYaml(cause) => Error::ConfigInvalid {
				file: file.to_string_lossy().to_string(),
				cause: cause.to_string(),
			},
			other => other,
		})
	}

	pub fn from_yaml_str(content: &str) -> Result<Self> {
		let raw: RawConfig = serde_yaml::from_str(content)?;
		raw.try_into()
	}

	pub fn validate(&self) -> Result<()> {
		if self.shortname.trim().is_empty() {
			return Err(Error::ConfigMissingShortname);
		}
		if self.asst_args.is_empty() {
			return Err(Error::ConfigEmptyAsstArgs);
		}
		Ok(())
	}
}

impl TryFrom<RawConfig> for AsstConfig {
	type Error = Error;

	fn try_from(raw: RawConfig) -> Result<Self> {
		let shortname = raw.shortname.ok_or(Error::ConfigMissingShortname)?;
		let asst_args = raw.assistant_args.ok_or(Error::ConfigMissingAsstArgs)?;
		// An empty id means "not created yet".
		let asst_id = raw
			.assistant_id
			.filter(|id| !id.trim().is_empty())
			.map(AsstId::from);

		let config = AsstConfig {
			shortname,
			asst_args,
			asst_id,
		};
		config.validate()?;

		Ok(config)
	}
}

// region:    --- Tests


// endregion: --- Tests
