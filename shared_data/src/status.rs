/// How long a success or error message stays up before the form goes back to idle
pub const STATUS_DISPLAY_MS: u32 = 5_000;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
	#[default]
	Idle,
	Success,
	Error,
}

/// Handed out by [`SubmissionTracker::begin`]; the only way to finish a submission, so there
/// can't be a `finish` without a matching `begin`.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct SubmitTicket(());

/// Identifies one terminal status. The timer that reverts the status to idle carries this, so a
/// timer started by an older submission can't clear the result of a newer one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatusToken(u32);

/// Tracks where a form is in `idle -> in-flight -> success|error -> idle`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionTracker {
	status: SubmissionStatus,
	in_flight: bool,
	generation: u32,
}

impl SubmissionTracker {
	#[must_use]
	pub fn status(&self) -> SubmissionStatus {
		self.status
	}

	#[must_use]
	pub fn in_flight(&self) -> bool {
		self.in_flight
	}

	/// The submit button is inert while a request is outstanding
	#[must_use]
	pub fn is_submit_disabled(&self) -> bool {
		self.in_flight
	}

	/// Starts a submission, or returns `None` if one is already in flight.
	pub fn begin(&mut self) -> Option<SubmitTicket> {
		if self.in_flight {
			return None;
		}

		self.in_flight = true;
		Some(SubmitTicket(()))
	}

	/// Records how the request went and returns the token to hand to the
	/// [`STATUS_DISPLAY_MS`] timer.
	pub fn finish(&mut self, ticket: SubmitTicket, ok: bool) -> StatusToken {
		let SubmitTicket(()) = ticket;

		self.in_flight = false;
		self.status = if ok { SubmissionStatus::Success } else { SubmissionStatus::Error };
		self.generation = self.generation.wrapping_add(1);

		StatusToken(self.generation)
	}

	/// Called when the display timer fires. Returns whether the status actually went back to idle.
	pub fn expire(&mut self, token: StatusToken) -> bool {
		if token.0 != self.generation || self.in_flight {
			return false;
		}

		self.status = SubmissionStatus::Idle;
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn success_then_back_to_idle() {
		let mut tracker = SubmissionTracker::default();
		assert_eq!(tracker.status(), SubmissionStatus::Idle);
		assert!(!tracker.is_submit_disabled());

		let ticket = tracker.begin().unwrap();
		assert!(tracker.is_submit_disabled());
		assert_eq!(tracker.status(), SubmissionStatus::Idle);

		let token = tracker.finish(ticket, true);
		assert_eq!(tracker.status(), SubmissionStatus::Success);
		assert!(!tracker.is_submit_disabled());

		assert!(tracker.expire(token));
		assert_eq!(tracker.status(), SubmissionStatus::Idle);
	}

	#[test]
	fn error_also_reverts() {
		let mut tracker = SubmissionTracker::default();
		let ticket = tracker.begin().unwrap();
		let token = tracker.finish(ticket, false);
		assert_eq!(tracker.status(), SubmissionStatus::Error);

		assert!(tracker.expire(token));
		assert_eq!(tracker.status(), SubmissionStatus::Idle);
	}

	#[test]
	fn no_second_submission_while_in_flight() {
		let mut tracker = SubmissionTracker::default();
		let ticket = tracker.begin().unwrap();
		assert_eq!(tracker.begin(), None);

		let _ = tracker.finish(ticket, true);
		assert!(tracker.begin().is_some());
	}

	#[test]
	fn stale_timer_does_not_clear_newer_result() {
		let mut tracker = SubmissionTracker::default();

		let first = tracker.begin().unwrap();
		let old_token = tracker.finish(first, false);

		// the visitor retries before the first error message timed out
		let second = tracker.begin().unwrap();
		assert!(!tracker.expire(old_token), "in-flight status must not be touched");
		let new_token = tracker.finish(second, true);

		assert!(!tracker.expire(old_token));
		assert_eq!(tracker.status(), SubmissionStatus::Success);

		assert!(tracker.expire(new_token));
		assert_eq!(tracker.status(), SubmissionStatus::Idle);
	}

	#[test]
	fn display_timeout_is_five_seconds() {
		assert_eq!(STATUS_DISPLAY_MS, 5000);
	}
}
