use gloo_console::{error, log};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use shared_data::{
	Attendance,
	Bundle,
	EventKind,
	GuestCount,
	RsvpForm,
	RsvpMsg,
	RsvpPayload,
	RsvpReply,
	SubmissionStatus,
	SubmitStart,
	ValidationError,
	RSVP_ENDPOINT,
	STATUS_DISPLAY_MS,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::IslandProps;

/// Sends the row off. Anything short of a 2xx with `success: true` counts as a failure.
async fn post_rsvp(payload: &RsvpPayload) -> bool {
	let req = match Request::post(RSVP_ENDPOINT).json(payload) {
		Ok(req) => req,
		Err(e) => {
			error!(format!("Couldn't serialize rsvp: {e:?}"));
			return false;
		}
	};

	let res = match req.send().await {
		Ok(res) => res,
		Err(e) => {
			error!(format!("Couldn't send rsvp: {e:?}"));
			return false;
		}
	};

	if !res.ok() {
		error!(format!("rsvp was rejected with status {}", res.status()));
		return false;
	}

	match res.json::<RsvpReply>().await {
		Ok(reply) => reply.success,
		Err(e) => {
			error!(format!("Couldn't read rsvp response: {e:?}"));
			false
		}
	}
}

#[function_component(RsvpIsland)]
pub fn rsvp_island(props: &IslandProps) -> Html {
	// the in-flight request and the status timer both have to get back to the same form after
	// this render is long gone, so it lives in a RefCell and we just ask for redraws
	let form = use_mut_ref(RsvpForm::default);
	let redraw = use_force_update();
	let invalid = use_state(|| Option::<ValidationError>::None);

	let bundle = props.bundle;

	macro_rules! edit_callback{
		($elem:ident, $ev:ty, $msg:ident) => {{
			let form = form.clone();
			let redraw = redraw.clone();
			Callback::from(move |e: $ev| if let Some(value) = e.target()
				.and_then(|t| t.dyn_into::<$elem>().ok())
				.map(|input| input.value()) {
					form.borrow_mut().draft.apply(RsvpMsg::$msg(value));
					redraw.force_update();
				}
			)
		}}
	}

	let on_name = edit_callback!(HtmlInputElement, InputEvent, Name);
	let on_email = edit_callback!(HtmlInputElement, InputEvent, Email);
	let on_phone = edit_callback!(HtmlInputElement, InputEvent, Phone);
	let on_dietary = edit_callback!(HtmlTextAreaElement, InputEvent, Dietary);
	let on_message = edit_callback!(HtmlTextAreaElement, InputEvent, Message);

	let on_guests = {
		let form = form.clone();
		let redraw = redraw.clone();
		Callback::from(move |e: Event| {
			let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) else {
				return;
			};

			match select.value().parse::<GuestCount>() {
				Ok(guests) => {
					form.borrow_mut().draft.apply(RsvpMsg::Guests(guests));
					redraw.force_update();
				},
				Err(e) => log!(format!("Ignoring guest count: {e}")),
			}
		})
	};

	let answer = |event: EventKind, attendance: Attendance| {
		let form = form.clone();
		let redraw = redraw.clone();
		Callback::from(move |_: MouseEvent| {
			form.borrow_mut().draft.apply(RsvpMsg::Attendance(event, attendance));
			redraw.force_update();
		})
	};

	let on_submit = {
		let form = form.clone();
		let redraw = redraw.clone();
		let invalid = invalid.clone();

		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();

			// bind it first so the borrow is gone before anything else touches the form
			let start = form.borrow_mut().start_submit();
			let (ticket, payload) = match start {
				SubmitStart::Invalid(err) => {
					invalid.set(Some(err));
					return;
				},
				// the button is disabled while in flight, but an enter keypress could still get here
				SubmitStart::Busy => return,
				SubmitStart::Ready(ticket, payload) => (ticket, payload),
			};

			invalid.set(None);
			redraw.force_update();

			let form = form.clone();
			let redraw = redraw.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let ok = post_rsvp(&payload).await;

				let token = form.borrow_mut().finish(ticket, ok);
				redraw.force_update();

				TimeoutFuture::new(STATUS_DISPLAY_MS).await;

				// if another submission finished in the meantime, this timer is stale and does nothing
				let expired = form.borrow_mut().expire(token);
				if expired {
					redraw.force_update();
				}
			});
		})
	};

	let current = form.borrow();
	let draft = &current.draft;
	let tracker = &current.tracker;

	let submit_label = if tracker.in_flight() {
		bundle.get("rsvp.form.sending")
	} else {
		bundle.get("rsvp.form.submit")
	};

	html! {
		<form onsubmit={ on_submit } novalidate={ true }>
			<input
				type="text"
				placeholder={ bundle.get("rsvp.form.name") }
				value={ draft.name.clone() }
				oninput={ on_name }
			/>
			<input
				type="email"
				placeholder={ bundle.get("rsvp.form.email") }
				value={ draft.email.clone() }
				oninput={ on_email }
			/>
			<input
				type="tel"
				placeholder={ bundle.get("rsvp.form.phone") }
				value={ draft.phone.clone() }
				oninput={ on_phone }
			/>
			<select onchange={ on_guests }>
				{ for GuestCount::all().map(|count| html! {
					<option value={ count.to_string() } selected={ count == draft.guests }>
						{ guest_label(bundle, count) }
					</option>
				}) }
			</select>

			<h3>{ bundle.get("rsvp.events.selectAll") }</h3>
			{ for EventKind::ALL.into_iter().map(|event| {
				let current = draft.attendance(event);
				html! {
					<div class="attendance-row">
						<span>{ bundle.get(&event.message_key("title")).to_string() }</span>
						<span>
							<button
								type="button"
								class={ classes!((current == Attendance::Attending).then_some("selected")) }
								onclick={ answer(event, Attendance::Attending) }
							>{ bundle.get("rsvp.form.attending") }</button>
							<button
								type="button"
								class={ classes!((current == Attendance::NotAttending).then_some("selected")) }
								onclick={ answer(event, Attendance::NotAttending) }
							>{ bundle.get("rsvp.form.notAttending") }</button>
						</span>
					</div>
				}
			}) }

			<textarea
				placeholder={ bundle.get("rsvp.form.dietaryPlaceholder") }
				value={ draft.dietary.clone() }
				oninput={ on_dietary }
			/>
			<textarea
				placeholder={ bundle.get("rsvp.form.messagePlaceholder") }
				value={ draft.message.clone() }
				oninput={ on_message }
			/>

			if let Some(err) = *invalid {
				<p class="validation">{ bundle.get(err.message_key()) }</p>
			}

			<button type="submit" disabled={ tracker.is_submit_disabled() }>{ submit_label }</button>

			{ match tracker.status() {
				SubmissionStatus::Idle => html! {},
				SubmissionStatus::Success => html! {
					<p class="status success">{ bundle.get("rsvp.form.success") }</p>
				},
				SubmissionStatus::Error => html! {
					<p class="status error">{ bundle.get("rsvp.form.error") }</p>
				},
			} }
		</form>
	}
}

fn guest_label(bundle: &Bundle, count: GuestCount) -> String {
	if count.get() == 1 {
		bundle.get("rsvp.form.guest").to_string()
	} else {
		let count = count.to_string();
		bundle.get_fmt("rsvp.form.guests", &[("count", count.as_str())])
	}
}
