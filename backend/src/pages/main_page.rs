use axum::extract::Path;
use chrono::Utc;
use const_format::concatcp;
use horrorshow::{html, RenderOnce, TemplateBuffer};
use shared_data::{
	huppa_start,
	time_left,
	Bundle,
	EventKind,
	Locale,
	TimeLeft,
	COUNTDOWN_ISLAND_ID,
	RSVP_ISLAND_ID,
};

use super::{page_locale, Layout, PageKind, PageResponse};

pub const STYLE: &str = concatcp!(r#"
#hero {
	min-height: 80vh;
	display: flex;
	flex-direction: column;
	justify-content: center;
	background: linear-gradient(to bottom, var(--blush), var(--cream));
	max-width: none;
}
#hero h1 {
	font-size: 72px;
	margin: 0;
}
.cta {
	display: inline-block;
	margin: 20px auto 0 auto;
	padding: 10px 28px;
	border-radius: 999px;
	color: white;
	text-decoration: none;
	background: linear-gradient(135deg, var(--peach) 0%, var(--terracotta) 100%);
}
#"#, COUNTDOWN_ISLAND_ID, r#" {
	display: grid;
	grid-template-columns: repeat(4, 1fr);
	gap: 16px;
}
.time-block {
	background-color: white;
	border-radius: 16px;
	padding: 20px 0;
}
.time-value {
	display: block;
	font-size: 48px;
	font-variant-numeric: tabular-nums;
}
.time-done {
	grid-column: 1 / -1;
	font-size: 32px;
}
.time-label {
	color: var(--peach);
	text-transform: uppercase;
	font-size: 12px;
	letter-spacing: 0.2em;
}
#events-grid {
	display: grid;
	grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
	gap: 20px;
	text-align: start;
}
.event {
	background-color: white;
	border: 2px solid var(--blush);
	border-radius: 16px;
	padding: 20px;
}
.event-date {
	color: var(--sky);
	text-transform: uppercase;
	font-size: 13px;
}
#"#, RSVP_ISLAND_ID, r#" {
	text-align: start;
}
.attendance-row {
	display: flex;
	justify-content: space-between;
	align-items: center;
	padding: 12px;
	margin: 8px 0;
	border-radius: 12px;
	background-color: white;
}
.status.success {
	color: green;
}
.status.error, .validation {
	color: var(--terracotta);
}
footer {
	text-align: center;
	padding: 30px;
	color: var(--slate);
}
footer .credits {
	font-size: 12px;
	color: var(--sky);
}
"#);

/// `GET /:locale`
pub async fn get_main_page(Path(locale): Path<String>) -> PageResponse {
	let (locale, bundle) = match page_locale(&locale) {
		Ok(found) => found,
		Err(resp) => return resp,
	};

	let left = huppa_start()
		.map(|start| time_left(&start, &Utc::now()))
		.unwrap_or_default();

	Layout {
		locale,
		bundle,
		kind: PageKind::Main,
		content: MainPage { locale, bundle, left },
	}.render()
}

struct MainPage {
	locale: Locale,
	bundle: &'static Bundle,
	left: TimeLeft,
}

impl RenderOnce for MainPage {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self { locale, bundle, left } = self;

		// the island takes over ticking once the wasm loads, this is just so there's something
		// there before it does
		let blocks = left.padded()
			.into_iter()
			.zip(["countdown.days", "countdown.hours", "countdown.minutes", "countdown.seconds"]);

		tmpl << html! {
			section(id = "hero") {
				h1 : bundle.get("hero.names");
				p : bundle.get("hero.subtitle");
				p : format_args!("{} · {}", bundle.get("hero.date"), bundle.get("hero.place"));
				a(href = "#rsvp", class = "cta") : bundle.get("hero.cta");
			}
			section(id = "countdown") {
				h2 : bundle.get("countdown.title");
				p : bundle.get("countdown.subtitle");
				div(id = COUNTDOWN_ISLAND_ID) {
					@ if left.is_over() {
						p(class = "time-done") : bundle.get("countdown.done");
					} else {
						@ for (value, label) in blocks {
							div(class = "time-block") {
								span(class = "time-value") : value;
								span(class = "time-label") : bundle.get(label);
							}
						}
					}
				}
			}
			section(id = "story") {
				h2 : bundle.get("story.title");
				p : bundle.get("story.teaser");
				a(href = format_args!("/{locale}/our-story")) : bundle.get("story.readMore");
			}
			section(id = "events") {
				h2 : bundle.get("events.title");
				p : bundle.get("events.subtitle");
				div(id = "events-grid") {
					@ for event in EventKind::ALL {
						article(class = "event", id = event.key()) {
							span(class = "event-date") : bundle.get(&event.message_key("date"));
							h3 : bundle.get(&event.message_key("title"));
							p {
								strong : bundle.get(&event.message_key("time"));
							}
							p {
								: bundle.get("events.location");
								: ": ";
								: bundle.get(&event.message_key("location"));
							}
							p : bundle.get(&event.message_key("description"));
						}
					}
				}
			}
			section(id = "rsvp") {
				h2 : bundle.get("rsvp.title");
				p : bundle.get("rsvp.subtitle");
				div(id = RSVP_ISLAND_ID) {}
			}
		};
	}
}
