use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

/// Israel summer time, which every event date is expressed in
pub const WEDDING_OFFSET_SECS: i32 = 3 * 60 * 60;

/// The four celebrations guests are asked about. Attendance for each one is answered
/// separately.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
	Mairie,
	Oriental,
	Kiddush,
	Huppa,
}

impl EventKind {
	/// In calendar order, which is also the order they're shown in
	pub const ALL: [Self; 4] = [Self::Mairie, Self::Oriental, Self::Kiddush, Self::Huppa];

	/// The name used both in the rsvp payload and as the message bundle namespace
	#[must_use]
	pub fn key(self) -> &'static str {
		match self {
			Self::Mairie => "mairie",
			Self::Oriental => "oriental",
			Self::Kiddush => "kiddush",
			Self::Huppa => "huppa",
		}
	}

	#[must_use]
	pub fn date(self) -> Option<NaiveDate> {
		let day = match self {
			Self::Mairie => 6,
			Self::Oriental => 24,
			Self::Kiddush => 25,
			Self::Huppa => 26,
		};
		NaiveDate::from_ymd_opt(2025, 7, day)
	}

	/// Bundle key for one of this event's strings, e.g. `message_key("title")` ->
	/// `events.huppa.title`
	#[must_use]
	pub fn message_key(self, field: &str) -> String {
		format!("events.{}.{field}", self.key())
	}
}

/// When the huppa starts, which is what the countdown counts down to
#[must_use]
pub fn huppa_start() -> Option<DateTime<FixedOffset>> {
	let offset = FixedOffset::east_opt(WEDDING_OFFSET_SECS)?;
	let start = EventKind::Huppa.date()?.and_hms_opt(18, 0, 0)?;
	offset.from_local_datetime(&start).single()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn events_are_in_calendar_order() {
		let dates = EventKind::ALL.map(|e| e.date().unwrap());
		assert!(dates.windows(2).all(|w| w[0] < w[1]));
	}

	#[test]
	fn huppa_starts_at_six_in_jaffa() {
		let start = huppa_start().unwrap();
		assert_eq!(start.to_rfc3339(), "2025-07-26T18:00:00+03:00");
	}

	#[test]
	fn message_keys_are_namespaced() {
		assert_eq!(EventKind::Kiddush.message_key("location"), "events.kiddush.location");
	}
}
