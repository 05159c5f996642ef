use std::path::Path;

use axum::{
	routing::{get, post},
	Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use shared_data::RSVP_ENDPOINT;

pub mod config;
pub mod pages;
pub mod rsvp;
pub mod webhook;

use pages::{main_page::get_main_page, not_found, our_story::get_our_story, root_redirect};
use rsvp::submit_rsvp;
use webhook::WebhookClient;

#[derive(Clone)]
pub struct AppState {
	pub webhook: WebhookClient,
}

/// Everything the site serves. `pkg_dir` is where the wasm-bindgen output for the islands lives.
pub fn router(state: AppState, pkg_dir: impl AsRef<Path>) -> Router {
	Router::new()
		.route("/", get(root_redirect))
		.route(RSVP_ENDPOINT, post(submit_rsvp))
		.route("/:locale", get(get_main_page))
		.route("/:locale/our-story", get(get_our_story))
		.nest_service("/pkg", ServeDir::new(pkg_dir))
		.fallback(not_found)
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}
