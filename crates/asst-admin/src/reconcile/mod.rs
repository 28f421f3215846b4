//! The `reconcile` module makes a remote assistant match a local `AsstConfig`.
//!
//! - With an `assistant_id` found among the account assistants, the assistant is updated.
//! - Otherwise (no id, or an id nobody has), a new assistant is created.
//!
//! Fail-fast: config errors are raised before any remote call, and remote errors
//! are returned as-is, without retries.

// region:    --- Modules

mod config;

pub use config::AsstConfig;

use crate::ais::asst;
use crate::ais::{AsstService, RemoteAsst};
use crate::Result;
use derive_more::Display;
use tracing::info;

// endregion: --- Modules

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ReconcileAction {
	Created,
	Updated,
}

#[derive(Debug, Clone)]
pub struct Reconciled {
	pub action: ReconcileAction,
	pub asst: RemoteAsst,
}

pub async fn reconcile(
	svc: &impl AsstService,
	config: &AsstConfig,
) -> Result<Reconciled> {
	config.validate()?;

	let name = config.shortname.as_str();
	let args = &config.asst_args;

	let existing = match config.asst_id.as_ref() {
		Some(asst_id) => asst::find_by_id(svc, asst_id).await?,
		None => None,
	};

	let reconciled = match existing {
		Some(existing) => Reconciled {
			action: ReconcileAction::Updated,
			asst: asst::update(svc, name, &existing.id, args).await?,
		},
		None => Reconciled {
			action: ReconcileAction::Created,
			asst: asst::create(svc, name, args).await?,
		},
	};

	info!(
		"Assistant {name} {} (id: {})",
		reconciled.action, reconciled.asst.id
	);

	Ok(reconciled)
}

// region:    --- Tests


// endregion: --- Tests
