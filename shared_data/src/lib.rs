mod countdown;
mod events;
mod locale;
mod messages;
mod rsvp;
mod status;

pub use countdown::{time_left, TimeLeft};
pub use events::{huppa_start, EventKind, WEDDING_OFFSET_SECS};
pub use locale::{resolve, resolve_accept_language, Direction, Locale, UnknownLocale};
pub use messages::{load_bundle, Bundle, BundleError};
pub use rsvp::{
	Attendance,
	GuestCount,
	GuestCountError,
	RsvpDraft,
	RsvpForm,
	RsvpMsg,
	RsvpPayload,
	RsvpReply,
	SubmitStart,
	ValidationError,
	FAILURE_MESSAGE,
	SUCCESS_MESSAGE,
};
pub use status::{StatusToken, SubmissionStatus, SubmissionTracker, SubmitTicket, STATUS_DISPLAY_MS};

/// The path the rsvp form posts to
pub const RSVP_ENDPOINT: &str = "/api/rsvp";

// Element ids the server renders and the wasm islands mount into
pub const COUNTDOWN_ISLAND_ID: &str = "countdown-island";
pub const RSVP_ISLAND_ID: &str = "rsvp-island";

pub static BASE_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Cormorant+Garamond:wght@400;600&family=Heebo:wght@300;500&display=swap');
* {
	--cream: #fdf8f5;
	--blush: #fcf0ea;
	--peach: #e8a87c;
	--rose: #f4c4b5;
	--terracotta: #c17767;
	--navy: #2a4052;
	--slate: #476f8f;
	--sky: #7ba3c4;
	color: var(--navy);
	font-family: "Heebo", Arial, sans-serif;
	box-sizing: border-box;
}
body {
	background-color: var(--cream);
	margin: 0;
}
h1, h2, h3 {
	font-family: "Cormorant Garamond", serif;
	font-weight: 600;
}
section {
	max-width: 900px;
	margin: 0 auto;
	padding: 60px 24px;
	text-align: center;
}
nav {
	display: flex;
	justify-content: space-between;
	padding: 12px 24px;
	background-color: var(--blush);
}
nav a {
	margin: 0 8px;
	text-decoration: none;
	color: var(--slate);
}
input, textarea, select {
	background-color: white;
	border: 1px solid var(--rose);
	border-radius: 12px;
	padding: 8px 12px;
	margin: 6px 0;
	width: 100%;
	font-size: 16px;
}
button {
	border-radius: 999px;
	border: 1px solid var(--peach);
	background-color: white;
	padding: 6px 16px;
	cursor: pointer;
}
button.selected {
	background-color: var(--peach);
	color: white;
}
button[disabled] {
	opacity: 0.5;
	cursor: default;
}
"#;
