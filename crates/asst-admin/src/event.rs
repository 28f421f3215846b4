pub use crate::ais::AisEvent;

use crate::Result;
use derive_more::From;
use std::sync::Arc;
use tokio::sync::broadcast::{self, Receiver, Sender};

#[derive(Debug, Clone, From)]
pub enum Event {
	Ais(AisEvent),
}

/// EventBus lets the reconciler and the ais layer report what they did
/// so that a CLI (or a test) can subscribe and render it.
///
/// Notes:
/// - Clone-efficient, ok to be cloned and owned.
/// - Backed by a Tokio broadcast channel, hidden behind the API.
/// - `_rx` is kept in an Arc so the channel never closes while the bus lives,
///   which keeps `send` from failing when nobody is subscribed.
#[derive(Debug, Clone)]
pub struct EventBus {
	tx: Sender<Event>,
	_rx: Arc<Receiver<Event>>,
}

impl EventBus {
	#[allow(clippy::new_without_default)]
	pub fn new() -> EventBus {
		let (tx, rx) = broadcast::channel::<Event>(16);
		EventBus {
			tx,
			_rx: Arc::new(rx),
		}
	}

	pub(crate) fn send(&self, evt: impl Into<Event>) -> Result<()> {
		let evt = evt.into();
		self.tx.send(evt)?;
		Ok(())
	}

	pub fn subscribe(&self) -> Result<Receiver<Event>> {
		Ok(self.tx.subscribe())
	}
}

// region:    --- Tests


// endregion: --- Tests
