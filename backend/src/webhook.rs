use std::time::Duration;

use reqwest::{Client, StatusCode};
use shared_data::RsvpPayload;

// apps script can be slow to spin up, but a visitor shouldn't be left staring at a spinner
const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(thiserror::Error, Debug)]
pub enum WebhookError {
	#[error("couldn't build http client: {0}")]
	Client(reqwest::Error),
	#[error("couldn't reach webhook: {0}")]
	Transport(reqwest::Error),
	#[error("webhook answered with {0}")]
	Status(StatusCode),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Delivery {
	/// The webhook accepted it (which is all we can know; whether the row actually got appended
	/// is up to the script on the other side)
	Forwarded,
	/// No webhook is configured, so it was only logged
	LoggedOnly,
}

/// Forwards rsvp rows to the spreadsheet's apps script.
#[derive(Clone, Debug)]
pub struct WebhookClient {
	client: Client,
	url: Option<String>,
}

impl WebhookClient {
	pub fn new(url: Option<String>) -> Result<Self, WebhookError> {
		let client = Client::builder()
			.timeout(WEBHOOK_TIMEOUT)
			.user_agent(concat!("wedding-rsvp/", env!("CARGO_PKG_VERSION")))
			.build()
			.map_err(WebhookError::Client)?;

		Ok(Self { client, url })
	}

	#[must_use]
	pub fn is_configured(&self) -> bool {
		self.url.is_some()
	}

	/// One POST, no retries. If it fails, the visitor gets to try again themselves, which may
	/// produce a duplicate row if the first attempt actually made it.
	pub async fn deliver(&self, payload: &RsvpPayload) -> Result<Delivery, WebhookError> {
		let Some(ref url) = self.url else {
			tracing::info!(?payload, "No webhook configured; logging rsvp instead");
			return Ok(Delivery::LoggedOnly);
		};

		let response = self.client.post(url)
			.json(payload)
			.send()
			.await
			.map_err(WebhookError::Transport)?;

		let status = response.status();
		if !status.is_success() {
			return Err(WebhookError::Status(status));
		}

		Ok(Delivery::Forwarded)
	}
}
