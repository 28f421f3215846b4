// region:    --- Modules

pub mod ais;
mod error;
pub mod event;
pub mod reconcile;
pub mod sarcasm;

pub use self::error::{Error, Result};

pub use crate::reconcile::{reconcile, AsstConfig, Reconciled, ReconcileAction};
pub use crate::sarcasm::{classify, classify_with_model, Classification};

// endregion: --- Modules
