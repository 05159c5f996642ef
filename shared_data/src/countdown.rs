use chrono::{DateTime, TimeZone};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
	pub days: i64,
	pub hours: i64,
	pub minutes: i64,
	pub seconds: i64,
}

impl TimeLeft {
	#[must_use]
	pub fn is_over(&self) -> bool {
		*self == Self::default()
	}

	/// `[days, hours, minutes, seconds]`, each padded to two digits, in the order the countdown
	/// shows them
	#[must_use]
	pub fn padded(&self) -> [String; 4] {
		[self.days, self.hours, self.minutes, self.seconds].map(|n| format!("{n:02}"))
	}
}

/// How long from `now` until `target`. Once the target has passed it just stays at zero.
#[must_use]
pub fn time_left<A: TimeZone, B: TimeZone>(target: &DateTime<A>, now: &DateTime<B>) -> TimeLeft {
	let secs = target.clone().signed_duration_since(now.clone()).num_seconds();
	if secs <= 0 {
		return TimeLeft::default();
	}

	TimeLeft {
		days: secs / 86_400,
		hours: (secs / 3_600) % 24,
		minutes: (secs / 60) % 60,
		seconds: secs % 60,
	}
}
