use crate::{Error, Result};
use async_openai::types::{
	AssistantObject, CreateAssistantRequest, ModifyAssistantRequest,
};
use derive_more::{Deref, Display, From};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// region:    --- Asst

#[derive(Debug, Clone, PartialEq, Eq, From, Deref, Display, Serialize, Deserialize)]
pub struct AsstId(String);

impl From<&AsstId> for AsstId {
	fn from(val: &AsstId) -> Self {
		val.clone()
	}
}

impl From<&str> for AsstId {
	fn from(val: &str) -> Self {
		AsstId(val.to_string())
	}
}

#[derive(Debug, Clone)]
pub struct AsstRef {
	pub name: String,
	pub id: AsstId,
}

impl AsstRef {
	pub fn new(name: impl Into<String>, id: AsstId) -> Self {
		Self {
			name: name.into(),
			id,
		}
	}
}

/// Read-only view of an assistant owned by the remote service.
/// `raw` carries all the provider fields, as returned.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteAsst {
	pub id: AsstId,
	pub raw: Value,
}

impl RemoteAsst {
	pub fn new(id: impl Into<AsstId>, raw: Value) -> Self {
		Self { id: id.into(), raw }
	}
}

impl TryFrom<AssistantObject> for RemoteAsst {
	type Error = Error;

	fn try_from(obj: AssistantObject) -> Result<Self> {
		let id = AsstId::from(obj.id.clone());
		let raw = serde_json::to_value(obj)?;
		Ok(RemoteAsst { id, raw })
	}
}

// endregion: --- Asst

// region:    --- List

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
	Asc,
	Desc,
}

/// Query string of the assistants list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsstListQuery {
	pub order: ListOrder,
	pub limit: u8,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub after: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AsstPage {
	pub data: Vec<RemoteAsst>,
	pub last_id: Option<String>,
	pub has_more: bool,
}

// endregion: --- List

// region:    --- AsstArgs

/// One value of a provider-defined assistant field.
///
/// Only these kinds are accepted from the config, anything else
/// (e.g., a YAML `null`) fails at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
	Bool(bool),
	Number(serde_json::Number),
	String(String),
	Seq(Vec<ArgValue>),
	Map(BTreeMap<String, ArgValue>),
}

impl From<&str> for ArgValue {
	fn from(val: &str) -> Self {
		ArgValue::String(val.to_string())
	}
}

/// Fields forwarded as-is to the create and update calls.
#[derive(Debug, Clone, Default, PartialEq, From, Deref, Serialize, Deserialize)]
pub struct AsstArgs(BTreeMap<String, ArgValue>);

impl AsstArgs {
	pub fn to_json(&self) -> Result<Value> {
		Ok(serde_json::to_value(self)?)
	}

	pub fn to_create_request(&self) -> Result<CreateAssistantRequest> {
		self.to_request()
	}

	pub fn to_modify_request(&self) -> Result<ModifyAssistantRequest> {
		self.to_request()
	}

	/// Fails on any arg key the typed request does not carry,
	/// since serde would silently drop it.
	fn to_request<T>(&self) -> Result<T>
	where
		T: DeserializeOwned + Serialize,
	{
		let req: T = serde_json::from_value(self.to_json()?)
			.map_err(|err| Error::AsstArgsInvalid(err.to_string()))?;

		let kept = serde_json::to_value(&req)?;
		let dropped: Vec<&str> = self
			.keys()
			.map(String::as_str)
			.filter(|key| kept.get(key).is_none())
			.collect();

		if !dropped.is_empty() {
			return Err(Error::AsstArgsInvalid(format!(
				"unsupported field(s): {}",
				dropped.join(", ")
			)));
		}

		Ok(req)
	}
}

impl<K, V> FromIterator<(K, V)> for AsstArgs
where
	K: Into<String>,
	V: Into<ArgValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		AsstArgs(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

// endregion: --- AsstArgs

// region:    --- Tests


// endregion: --- Tests
