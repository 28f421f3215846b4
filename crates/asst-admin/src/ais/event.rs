//! Ais Event

use crate::ais::AsstRef;

#[derive(Debug, Clone)]
pub enum AisEvent {
	// -- Asst Events
	AsstsListed { count: usize, ids: Vec<String> },
	AsstCreated(AsstRef),
	AsstUpdated(AsstRef),
}
