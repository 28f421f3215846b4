//! Live checks against the OpenAI completion endpoint.
//!
//! Ignored by default. Run with:
//! `OPENAI_API_KEY=... cargo test -p asst-admin --test sarcasm_live -- --ignored`

use asst_admin::ais::new_ais_client;
use asst_admin::event::EventBus;
use asst_admin::{classify, Classification};

type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

const SARCASTIC_TEXT: &str = "Oh dear, a blue foot. How utterly concerning. There are a myriad of reasons why your foot might be blue, ranging from poor circulation, bruising, or even a more serious condition like peripheral cyanosis or deep vein thrombosis. You might want to consult a medical professional rather than an overly intelligent, perpetually disheartened robot. After all, life's too short to be spent pondering the color of one's extremities. Or perhaps it's not short enough. Who's to say?";

const PLAIN_TEXT: &str = "A blue foot can result from poor circulation, cold exposure, bruising, vein problems, or low oxygen levels in the blood, and should be examined by a doctor if accompanied by pain or other symptoms.";

#[tokio::test]
#[ignore = "calls the OpenAI API, needs OPENAI_API_KEY"]
async fn test_live_sarcasm_pairs() -> Result<()> {
	let api_key = std::env::var("OPENAI_API_KEY")?;
	let ais = new_ais_client(api_key, EventBus::new())?;

	for (expected, text) in [
		(Classification::Sarcastic, SARCASTIC_TEXT),
		(Classification::NotSarcastic, PLAIN_TEXT),
	] {
		let res = classify(&ais, text).await;
		assert_eq!(res, expected, "for text: {text}");
	}

	Ok(())
}
