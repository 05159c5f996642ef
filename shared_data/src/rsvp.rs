use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
	events::EventKind,
	status::{StatusToken, SubmissionTracker, SubmitTicket},
};

pub const SUCCESS_MESSAGE: &str = "RSVP submitted successfully";
pub const FAILURE_MESSAGE: &str = "Failed to submit RSVP";

/// A guest's answer for one event. `Unanswered` is its own state so "didn't say" never gets
/// confused with "said no".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Attendance {
	Attending,
	NotAttending,
	#[default]
	Unanswered,
}

impl Attendance {
	/// What ends up in the spreadsheet cell
	#[must_use]
	pub fn sheet_value(self) -> &'static str {
		match self {
			Self::Attending => "Yes",
			Self::NotAttending => "No",
			Self::Unanswered => "Not answered",
		}
	}
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("party size must be a number from 1 to 6, not '{0}'")]
pub struct GuestCountError(pub String);

/// How many people the response is for, including the guest filling it out
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct GuestCount(u8);

impl GuestCount {
	pub const MIN: u8 = 1;
	pub const MAX: u8 = 6;

	#[must_use]
	pub fn get(self) -> u8 {
		self.0
	}

	/// Every selectable party size, for the dropdown
	pub fn all() -> impl Iterator<Item = Self> {
		(Self::MIN..=Self::MAX).map(Self)
	}
}

impl Default for GuestCount {
	fn default() -> Self {
		Self(Self::MIN)
	}
}

impl TryFrom<u8> for GuestCount {
	type Error = GuestCountError;
	fn try_from(value: u8) -> Result<Self, Self::Error> {
		if (Self::MIN..=Self::MAX).contains(&value) {
			Ok(Self(value))
		} else {
			Err(GuestCountError(value.to_string()))
		}
	}
}

impl From<GuestCount> for u8 {
	fn from(value: GuestCount) -> Self {
		value.0
	}
}

impl FromStr for GuestCount {
	type Err = GuestCountError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.trim()
			.parse::<u8>()
			.map_err(|_| GuestCountError(s.to_string()))
			.and_then(Self::try_from)
	}
}

impl fmt::Display for GuestCount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValidationError {
	#[error("a name is required")]
	EmptyName,
	#[error("the email address doesn't look valid")]
	InvalidEmail,
}

impl ValidationError {
	/// The translated message to show next to the form
	#[must_use]
	pub fn message_key(self) -> &'static str {
		match self {
			Self::EmptyName => "rsvp.validation.name",
			Self::InvalidEmail => "rsvp.validation.email",
		}
	}
}

/// One edit to the draft, as the form's inputs produce them
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RsvpMsg {
	Name(String),
	Email(String),
	Phone(String),
	Guests(GuestCount),
	Dietary(String),
	Message(String),
	Attendance(EventKind, Attendance),
	Reset,
}

/// Everything the visitor has typed into the rsvp form so far
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RsvpDraft {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub guests: GuestCount,
	pub dietary: String,
	pub message: String,
	pub mairie: Attendance,
	pub oriental: Attendance,
	pub kiddush: Attendance,
	pub huppa: Attendance,
}

impl RsvpDraft {
	#[must_use]
	pub fn attendance(&self, event: EventKind) -> Attendance {
		match event {
			EventKind::Mairie => self.mairie,
			EventKind::Oriental => self.oriental,
			EventKind::Kiddush => self.kiddush,
			EventKind::Huppa => self.huppa,
		}
	}

	fn attendance_mut(&mut self, event: EventKind) -> &mut Attendance {
		match event {
			EventKind::Mairie => &mut self.mairie,
			EventKind::Oriental => &mut self.oriental,
			EventKind::Kiddush => &mut self.kiddush,
			EventKind::Huppa => &mut self.huppa,
		}
	}

	pub fn apply(&mut self, msg: RsvpMsg) {
		match msg {
			RsvpMsg::Name(name) => self.name = name,
			RsvpMsg::Email(email) => self.email = email,
			RsvpMsg::Phone(phone) => self.phone = phone,
			RsvpMsg::Guests(guests) => self.guests = guests,
			RsvpMsg::Dietary(dietary) => self.dietary = dietary,
			RsvpMsg::Message(message) => self.message = message,
			RsvpMsg::Attendance(event, answer) => *self.attendance_mut(event) = answer,
			RsvpMsg::Reset => *self = Self::default(),
		}
	}

	/// The checks the form runs before it lets anything go over the network
	pub fn validate(&self) -> Result<(), ValidationError> {
		if self.name.trim().is_empty() {
			return Err(ValidationError::EmptyName);
		}

		if !looks_like_email(&self.email) {
			return Err(ValidationError::InvalidEmail);
		}

		Ok(())
	}

	/// Flattens the draft into the row the spreadsheet expects. The timestamp is left for the
	/// server to fill in.
	#[must_use]
	pub fn normalize(&self) -> RsvpPayload {
		RsvpPayload {
			timestamp: String::new(),
			name: self.name.clone(),
			email: self.email.clone(),
			phone: self.phone.clone(),
			guests: self.guests.to_string(),
			dietary: self.dietary.clone(),
			message: self.message.clone(),
			mairie: self.mairie.sheet_value().to_string(),
			oriental: self.oriental.sheet_value().to_string(),
			kiddush: self.kiddush.sheet_value().to_string(),
			huppa: self.huppa.sheet_value().to_string(),
		}
	}
}

// Not trying to be RFC 5322 here, the browser's `type="email"` does the heavy lifting. This just
// catches obviously broken input.
fn looks_like_email(email: &str) -> bool {
	let email = email.trim();
	if email.chars().any(char::is_whitespace) {
		return false;
	}

	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};

	!local.is_empty() &&
		!domain.contains('@') &&
		domain.contains('.') &&
		!domain.starts_with('.') &&
		!domain.ends_with('.')
}

/// One spreadsheet row, in column order. Every cell is a string since that's all the sheet
/// cares about. Fields the client leaves out deserialize as empty.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RsvpPayload {
	pub timestamp: String,
	pub name: String,
	pub email: String,
	pub phone: String,
	pub guests: String,
	pub dietary: String,
	pub message: String,
	pub mairie: String,
	pub oriental: String,
	pub kiddush: String,
	pub huppa: String,
}

impl RsvpPayload {
	#[must_use]
	pub fn stamped(self, timestamp: String) -> Self {
		Self { timestamp, ..self }
	}
}

/// What `/api/rsvp` answers with
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RsvpReply {
	pub success: bool,
	pub message: String,
}

impl RsvpReply {
	#[must_use]
	pub fn submitted() -> Self {
		Self { success: true, message: SUCCESS_MESSAGE.into() }
	}

	#[must_use]
	pub fn failed() -> Self {
		Self { success: false, message: FAILURE_MESSAGE.into() }
	}
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitStart {
	/// Didn't pass validation; nothing was sent
	Invalid(ValidationError),
	/// A request is already outstanding
	Busy,
	/// Send this payload, then hand the ticket back to [`RsvpForm::finish`]
	Ready(SubmitTicket, RsvpPayload),
}

/// The draft together with its submission state; applies the side effects of a finished
/// submission to both.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RsvpForm {
	pub draft: RsvpDraft,
	pub tracker: SubmissionTracker,
}

impl RsvpForm {
	pub fn start_submit(&mut self) -> SubmitStart {
		if let Err(e) = self.draft.validate() {
			return SubmitStart::Invalid(e);
		}

		match self.tracker.begin() {
			Some(ticket) => SubmitStart::Ready(ticket, self.draft.normalize()),
			None => SubmitStart::Busy,
		}
	}

	/// On success the draft goes back to empty; on failure it's kept so the visitor can just try
	/// again.
	pub fn finish(&mut self, ticket: SubmitTicket, ok: bool) -> StatusToken {
		if ok {
			self.draft.apply(RsvpMsg::Reset);
		}
		self.tracker.finish(ticket, ok)
	}

	pub fn expire(&mut self, token: StatusToken) -> bool {
		self.tracker.expire(token)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::status::SubmissionStatus;

	fn filled_draft() -> RsvpDraft {
		let mut draft = RsvpDraft::default();
		draft.apply(RsvpMsg::Name("Ela".into()));
		draft.apply(RsvpMsg::Email("ela@example.com".into()));
		draft.apply(RsvpMsg::Guests(GuestCount::try_from(2).unwrap()));
		for event in EventKind::ALL {
			draft.apply(RsvpMsg::Attendance(event, Attendance::Attending));
		}
		draft
	}

	#[test]
	fn everyone_attending_normalizes_to_yes() {
		let payload = filled_draft().normalize();

		assert_eq!(payload.name, "Ela");
		assert_eq!(payload.email, "ela@example.com");
		assert_eq!(payload.guests, "2");
		assert_eq!(payload.mairie, "Yes");
		assert_eq!(payload.oriental, "Yes");
		assert_eq!(payload.kiddush, "Yes");
		assert_eq!(payload.huppa, "Yes");
		assert!(payload.timestamp.is_empty());
	}

	#[test]
	fn untouched_attendance_is_not_answered() {
		let payload = RsvpDraft::default().normalize();
		for value in [&payload.mairie, &payload.oriental, &payload.kiddush, &payload.huppa] {
			assert_eq!(value, "Not answered");
		}
		assert_eq!(payload.guests, "1");
	}

	#[test]
	fn attendance_fields_are_independent() {
		let mut draft = RsvpDraft::default();
		draft.apply(RsvpMsg::Attendance(EventKind::Kiddush, Attendance::NotAttending));
		draft.apply(RsvpMsg::Attendance(EventKind::Huppa, Attendance::Attending));

		let payload = draft.normalize();
		assert_eq!(payload.mairie, "Not answered");
		assert_eq!(payload.oriental, "Not answered");
		assert_eq!(payload.kiddush, "No");
		assert_eq!(payload.huppa, "Yes");
	}

	#[test]
	fn payload_uses_sheet_column_names() {
		let json = serde_json::to_value(filled_draft().normalize()).unwrap();
		assert_eq!(json["guests"], "2");
		assert_eq!(json["huppa"], "Yes");
		assert_eq!(json["dietary"], "");
		assert_eq!(json.as_object().unwrap().len(), 11);
	}

	#[test]
	fn partial_payload_fills_in_defaults() {
		let payload: RsvpPayload = serde_json::from_str(r#"{"name": "Gabriel"}"#).unwrap();
		assert_eq!(payload.name, "Gabriel");
		assert_eq!(payload.mairie, "");
	}

	#[test]
	fn guest_count_is_bounded() {
		assert_eq!(GuestCount::default().get(), 1);
		assert!(GuestCount::try_from(0).is_err());
		assert!(GuestCount::try_from(7).is_err());
		assert_eq!("6".parse::<GuestCount>().map(u8::from), Ok(6));
		assert!("two".parse::<GuestCount>().is_err());
		assert_eq!(GuestCount::all().count(), 6);
	}

	#[test]
	fn validation_catches_missing_fields() {
		let mut draft = filled_draft();
		assert_eq!(draft.validate(), Ok(()));

		draft.apply(RsvpMsg::Name("   ".into()));
		assert_eq!(draft.validate(), Err(ValidationError::EmptyName));

		draft.apply(RsvpMsg::Name("Ela".into()));
		for bad in ["", "ela", "ela@", "@example.com", "ela@example", "ela@.com", "ela@example.", "e la@example.com", "a@b@c.com"] {
			draft.apply(RsvpMsg::Email(bad.into()));
			assert_eq!(draft.validate(), Err(ValidationError::InvalidEmail), "{bad:?}");
		}
	}

	#[test]
	fn success_resets_the_form() {
		let mut form = RsvpForm { draft: filled_draft(), ..RsvpForm::default() };

		let SubmitStart::Ready(ticket, payload) = form.start_submit() else {
			panic!("form should be submittable");
		};
		assert_eq!(payload.huppa, "Yes");
		assert!(form.tracker.is_submit_disabled());

		let token = form.finish(ticket, true);
		assert_eq!(form.tracker.status(), SubmissionStatus::Success);
		assert_eq!(form.draft, RsvpDraft::default());
		assert_eq!(form.draft.name, "");
		assert_eq!(form.draft.guests.to_string(), "1");
		assert!(EventKind::ALL.iter().all(|e| form.draft.attendance(*e) == Attendance::Unanswered));

		assert!(form.expire(token));
		assert_eq!(form.tracker.status(), SubmissionStatus::Idle);
	}

	#[test]
	fn failure_keeps_what_was_typed() {
		let mut form = RsvpForm { draft: filled_draft(), ..RsvpForm::default() };

		let SubmitStart::Ready(ticket, _) = form.start_submit() else {
			panic!("form should be submittable");
		};
		let _ = form.finish(ticket, false);

		assert_eq!(form.tracker.status(), SubmissionStatus::Error);
		assert_eq!(form.draft, filled_draft());
	}

	#[test]
	fn invalid_or_busy_forms_do_not_start() {
		let mut form = RsvpForm::default();
		assert_eq!(form.start_submit(), SubmitStart::Invalid(ValidationError::EmptyName));
		assert!(!form.tracker.in_flight());

		form.draft = filled_draft();
		let SubmitStart::Ready(..) = form.start_submit() else {
			panic!("form should be submittable");
		};
		assert_eq!(form.start_submit(), SubmitStart::Busy);
	}

	#[test]
	fn reply_shapes() {
		let ok = serde_json::to_value(RsvpReply::submitted()).unwrap();
		assert_eq!(ok, serde_json::json!({ "success": true, "message": "RSVP submitted successfully" }));
		assert!(!RsvpReply::failed().success);
	}
}
