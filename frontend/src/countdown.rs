use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use shared_data::{huppa_start, time_left};
use yew::prelude::*;

use super::IslandProps;

const LABELS: [&str; 4] = ["countdown.days", "countdown.hours", "countdown.minutes", "countdown.seconds"];

fn browser_now() -> DateTime<Utc> {
	DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

#[function_component(Countdown)]
pub fn countdown(props: &IslandProps) -> Html {
	let now = use_state(browser_now);

	{
		let now = now.clone();
		use_effect_with((), move |_| {
			let ticker = Interval::new(1_000, move || now.set(browser_now()));
			move || drop(ticker)
		});
	}

	let bundle = props.bundle;
	let left = huppa_start()
		.map(|start| time_left(&start, &*now))
		.unwrap_or_default();

	if left.is_over() {
		return html! {
			<p class="time-done">{ bundle.get("countdown.done") }</p>
		};
	}

	html! {
		<>
			{ for left.padded().into_iter().zip(LABELS).map(|(value, label)| html! {
				<div class="time-block">
					<span class="time-value">{ value }</span>
					<span class="time-label">{ bundle.get(label) }</span>
				</div>
			}) }
		</>
	}
}
