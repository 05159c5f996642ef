use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};
use shared_data::{RsvpPayload, RsvpReply};

use crate::{webhook::Delivery, AppState};

// Whatever went wrong, the visitor only ever sees the one generic failure; the details go to the
// log.
macro_rules! error_and_ret{
	($($arg:tt)+) => {{
		tracing::error!($($arg)+);
		return (StatusCode::INTERNAL_SERVER_ERROR, Json(RsvpReply::failed()));
	}};
}

/// `POST /api/rsvp`. Takes the raw body instead of `Json<_>` so a body that doesn't parse gets
/// the same 500 + generic message as every other failure instead of axum's 4xx rejection.
///
/// Only the normalized row is accepted: every cell has to be a string (or absent). Numbers
/// and nulls are failures, not passed through to the sheet.
pub async fn submit_rsvp(
	State(state): State<AppState>,
	body: Bytes,
) -> (StatusCode, Json<RsvpReply>) {
	let payload = match serde_json::from_slice::<RsvpPayload>(&body) {
		Ok(payload) => payload,
		Err(e) => error_and_ret!("Couldn't parse rsvp body: {e}"),
	};

	let payload = payload.stamped(server_timestamp());

	match state.webhook.deliver(&payload).await {
		Ok(Delivery::Forwarded) => {
			tracing::info!(name = %payload.name, guests = %payload.guests, "Forwarded rsvp to webhook");
		},
		Ok(Delivery::LoggedOnly) => (),
		Err(e) => error_and_ret!(name = %payload.name, "RSVP submission failed: {e}"),
	}

	(StatusCode::OK, Json(RsvpReply::submitted()))
}

/// Same shape as javascript's `Date.toISOString()`, which is what the sheet was set up with
fn server_timestamp() -> String {
	Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn timestamp_looks_like_iso_string() {
		let stamp = server_timestamp();
		assert!(stamp.ends_with('Z'), "{stamp}");
		assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
		// millisecond precision: 2025-07-26T15:00:00.000Z
		assert_eq!(stamp.len(), 24);
	}
}
