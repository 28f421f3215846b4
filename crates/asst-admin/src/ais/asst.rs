use crate::ais::{
	AisEvent, AsstArgs, AsstId, AsstListQuery, AsstPage, AsstRef, AsstService,
	ListOrder, RemoteAsst,
};
use crate::Result;
use tracing::{debug, info};

// region:    --- Constants

const PAGE_LIMIT: u8 = 20;

// endregion: --- Constants

// region:    --- Asst Lookup

/// One page of assistants, newest first.
pub async fn list_page(
	svc: &impl AsstService,
	after: Option<String>,
) -> Result<AsstPage> {
	let query = AsstListQuery {
		order: ListOrder::Desc,
		limit: PAGE_LIMIT,
		after,
	};

	svc.list_assts(&query).await
}

/// Scans all the account assistants, page by page, until `asst_id` is found.
pub async fn find_by_id(
	svc: &impl AsstService,
	asst_id: &AsstId,
) -> Result<Option<RemoteAsst>> {
	let mut seen_ids: Vec<String> = Vec::new();
	let mut after: Option<String> = None;
	let mut found: Option<RemoteAsst> = None;

	loop {
		let cursor = after.take();
		let page = list_page(svc, cursor.clone()).await?;
		let page_len = page.data.len();
		debug!(
			"assistants page: {page_len} items, has_more: {}",
			page.has_more
		);

		for asst in page.data {
			seen_ids.push(asst.id.to_string());
			if found.is_none() && &asst.id == asst_id {
				found = Some(asst);
			}
		}

		// NOTE: Only follow `has_more` when the page moves the cursor forward
		//       (some data, and a `last_id` different from the current cursor).
		match (found.is_some(), page.has_more, page.last_id) {
			(false, true, Some(last_id))
				if page_len > 0 && cursor.as_ref() != Some(&last_id) =>
			{
				after = Some(last_id)
			}
			_ => break,
		}
	}

	info!("Found {}: {}", seen_ids.len(), seen_ids.join(", "));
	svc.event_bus().send(AisEvent::AsstsListed {
		count: seen_ids.len(),
		ids: seen_ids,
	})?;

	Ok(found)
}

// endregion: --- Asst Lookup

// region:    --- Asst CRUD

pub async fn create(
	svc: &impl AsstService,
	name: &str,
	args: &AsstArgs,
) -> Result<RemoteAsst> {
	info!("Creating assistant with args: {}", args.to_json()?);

	let asst = svc.create_asst(args).await?;

	svc.event_bus()
		.send(AisEvent::AsstCreated(AsstRef::new(name, asst.id.clone())))?;

	Ok(asst)
}

pub async fn update(
	svc: &impl AsstService,
	name: &str,
	asst_id: &AsstId,
	args: &AsstArgs,
) -> Result<RemoteAsst> {
	info!("Updating assistant with args: {}", args.to_json()?);

	let asst = svc.update_asst(asst_id, args).await?;

	svc.event_bus()
		.send(AisEvent::AsstUpdated(AsstRef::new(name, asst.id.clone())))?;

	Ok(asst)
}

// endregion: --- Asst CRUD

// region:    --- Tests

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::event::EventBus;
	use crate::Error;
	use async_trait::async_trait;
	use serde_json::json;
	use std::sync::Mutex;

	#[derive(Debug, Clone, PartialEq)]
	pub enum Call {
		List(AsstListQuery),
		Create(AsstArgs),
		Update(AsstId, AsstArgs),
	}

	/// In-memory assistants store, newest first, paged like the remote list.
	pub struct FakeAssts {
		assts: Vec<RemoteAsst>,
		calls: Mutex<Vec<Call>>,
		fail_writes: bool,
		event_bus: EventBus,
	}

	impl FakeAssts {
		pub fn with_ids(ids: &[&str]) -> Self {
			let assts = ids
				.iter()
				.map(|id| RemoteAsst::new(*id, json!({"id": id, "object": "assistant"})))
				.collect();
			FakeAssts {
				assts,
				calls: Mutex::new(Vec::new()),
				fail_writes: false,
				event_bus: EventBus::new(),
			}
		}

		pub fn failing_writes(mut self) -> Self {
			self.fail_writes = true;
			self
		}

		pub fn calls(&self) -> Vec<Call> {
			self.calls.lock().unwrap().clone()
		}

		fn record(&self, call: Call) {
			self.calls.lock().unwrap().push(call);
		}
	}

	#[async_trait]
	impl AsstService for FakeAssts {
		fn event_bus(&self) -> &EventBus {
			&self.event_bus
		}

		async fn list_assts(&self, query: &AsstListQuery) -> Result<AsstPage> {
			self.record(Call::List(query.clone()));

			let start = match &query.after {
				Some(after) => self
					.assts
					.iter()
					.position(|a| a.id.as_str() == after.as_str())
					.map(|i| i + 1)
					.unwrap_or(self.assts.len()),
				None => 0,
			};
			let end = (start + query.limit as usize).min(self.assts.len());
			let data = self.assts[start..end].to_vec();

			Ok(AsstPage {
				last_id: data.last().map(|a| a.id.to_string()),
				has_more: end < self.assts.len(),
				data,
			})
		}

		async fn create_asst(&self, args: &AsstArgs) -> Result<RemoteAsst> {
			self.record(Call::Create(args.clone()));
			if self.fail_writes {
				return Err(Error::AsstArgsInvalid("rejected by fake".to_string()));
			}
			Ok(RemoteAsst::new("asst_new", args.to_json()?))
		}

		async fn update_asst(
			&self,
			asst_id: &AsstId,
			args: &AsstArgs,
		) -> Result<RemoteAsst> {
			self.record(Call::Update(asst_id.clone(), args.clone()));
			if self.fail_writes {
				return Err(Error::AsstArgsInvalid("rejected by fake".to_string()));
			}
			Ok(RemoteAsst::new(asst_id.clone(), args.to_json()?))
		}
	}

	/// Always answers the same page, whatever the cursor.
	struct StuckAssts {
		page: AsstPage,
		list_count: Mutex<usize>,
		event_bus: EventBus,
	}

	impl StuckAssts {
		fn new(ids: &[&str], last_id: &str) -> Self {
			let data = ids
				.iter()
				.map(|id| RemoteAsst::new(*id, json!({"id": id})))
				.collect();
			StuckAssts {
				page: AsstPage {
					data,
					last_id: Some(last_id.to_string()),
					has_more: true,
				},
				list_count: Mutex::new(0),
				event_bus: EventBus::new(),
			}
		}

		fn list_count(&self) -> usize {
			*self.list_count.lock().unwrap()
		}
	}

	#[async_trait]
	impl AsstService for StuckAssts {
		fn event_bus(&self) -> &EventBus {
			&self.event_bus
		}

		async fn list_assts(&self, _query: &AsstListQuery) -> Result<AsstPage> {
			let mut count = self.list_count.lock().unwrap();
			*count += 1;
			if *count > 10 {
				return Err(Error::AsstArgsInvalid("listed too many times".to_string()));
			}
			Ok(self.page.clone())
		}

		async fn create_asst(&self, _args: &AsstArgs) -> Result<RemoteAsst> {
			unreachable!("lookup only")
		}

		async fn update_asst(
			&self,
			_asst_id: &AsstId,
			_args: &AsstArgs,
		) -> Result<RemoteAsst> {
			unreachable!("lookup only")
		}
	}

	pub fn ids(prefix: &str, count: usize) -> Vec<String> {
		(0..count).map(|i| format!("{prefix}_{i:02}")).collect()
	}

	#[tokio::test]
	async fn test_list_page_query_desc_20() -> Result<()> {
		let fake = FakeAssts::with_ids(&["asst_a"]);

		list_page(&fake, None).await?;

		assert_eq!(
			fake.calls(),
			vec![Call::List(AsstListQuery {
				order: ListOrder::Desc,
				limit: 20,
				after: None,
			})]
		);

		Ok(())
	}

	#[tokio::test]
	async fn test_find_by_id_first_page() -> Result<()> {
		let fake = FakeAssts::with_ids(&["asst_a", "asst_b", "asst_c"]);

		let found = find_by_id(&fake, &AsstId::from("asst_b")).await?;

		assert_eq!(found.map(|a| a.id), Some(AsstId::from("asst_b")));
		assert_eq!(fake.calls().len(), 1);

		Ok(())
	}

	#[tokio::test]
	async fn test_find_by_id_follows_cursor() -> Result<()> {
		let all_ids = ids("asst", 45);
		let id_refs: Vec<&str> = all_ids.iter().map(String::as_str).collect();
		let fake = FakeAssts::with_ids(&id_refs);

		let found = find_by_id(&fake, &AsstId::from("asst_42")).await?;

		assert_eq!(found.map(|a| a.id), Some(AsstId::from("asst_42")));
		let calls = fake.calls();
		assert_eq!(calls.len(), 3);
		assert!(matches!(
			&calls[1],
			Call::List(AsstListQuery { after: Some(after), .. }) if after == "asst_19"
		));

		Ok(())
	}

	#[tokio::test]
	async fn test_find_by_id_stops_on_match() -> Result<()> {
		let all_ids = ids("asst", 45);
		let id_refs: Vec<&str> = all_ids.iter().map(String::as_str).collect();
		let fake = FakeAssts::with_ids(&id_refs);

		find_by_id(&fake, &AsstId::from("asst_05")).await?;

		assert_eq!(fake.calls().len(), 1);

		Ok(())
	}

	#[tokio::test]
	async fn test_find_by_id_empty_page_with_more_stops() -> Result<()> {
		let stuck = StuckAssts::new(&[], "asst_x");

		let found = find_by_id(&stuck, &AsstId::from("asst_missing")).await?;

		assert!(found.is_none());
		assert_eq!(stuck.list_count(), 1);

		Ok(())
	}

	#[tokio::test]
	async fn test_find_by_id_repeated_cursor_stops() -> Result<()> {
		let stuck = StuckAssts::new(&["asst_w", "asst_x"], "asst_x");

		let found = find_by_id(&stuck, &AsstId::from("asst_missing")).await?;

		assert!(found.is_none());
		// first page sets the cursor to asst_x, second page gives it back
		assert_eq!(stuck.list_count(), 2);

		Ok(())
	}

	#[tokio::test]
	async fn test_find_by_id_none_scans_all() -> Result<()> {
		let all_ids = ids("asst", 41);
		let id_refs: Vec<&str> = all_ids.iter().map(String::as_str).collect();
		let fake = FakeAssts::with_ids(&id_refs);
		let mut rx = fake.event_bus().subscribe()?;

		let found = find_by_id(&fake, &AsstId::from("asst_missing")).await?;

		assert!(found.is_none());
		assert_eq!(fake.calls().len(), 3);
		let evt = rx.try_recv().expect("listed event");
		assert!(matches!(
			evt,
			crate::event::Event::Ais(AisEvent::AsstsListed { count: 41, .. })
		));

		Ok(())
	}
}

// endregion: --- Tests
