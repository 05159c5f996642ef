use axum::{
	http::{header, HeaderMap, StatusCode, Uri},
	response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Datelike;
use horrorshow::{helper::doctype, html, Raw, RenderOnce, Template, TemplateBuffer};
use shared_data::{load_bundle, resolve_accept_language, Bundle, EventKind, Locale};

pub mod main_page;
pub mod our_story;

build_info::build_info!(fn build);

// no-modules output from wasm-bindgen, so the loader is a plain global
const ISLAND_LOADER: &str = "wasm_bindgen('/pkg/frontend_bg.wasm');";

pub enum PageResponse {
	Html(String),
	Redirect(Locale),
	/// Same page without the trailing slash
	Moved(String),
	NotFound,
	Broken,
}

impl IntoResponse for PageResponse {
	fn into_response(self) -> Response {
		match self {
			Self::Html(s) => Html(s).into_response(),
			Self::Redirect(locale) => Redirect::temporary(&format!("/{locale}")).into_response(),
			Self::Moved(to) => Redirect::permanent(&to).into_response(),
			Self::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
			Self::Broken => (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong :(").into_response(),
		}
	}
}

/// The locale segment of a page path has to be exactly one of the supported codes. Anything else
/// is a 404, not a fallback to the default language.
pub fn page_locale(segment: &str) -> Result<(Locale, &'static Bundle), PageResponse> {
	let locale = segment.parse::<Locale>().map_err(|e| {
		tracing::debug!("Refusing page: {e}");
		PageResponse::NotFound
	})?;

	let bundle = load_bundle(locale).map_err(|e| {
		tracing::error!("{e}");
		PageResponse::Broken
	})?;

	Ok((locale, bundle))
}

/// `GET /`: send them to whichever language their browser asks for first
pub async fn root_redirect(headers: HeaderMap) -> PageResponse {
	let accept = headers.get(header::ACCEPT_LANGUAGE)
		.and_then(|v| v.to_str().ok());

	PageResponse::Redirect(resolve_accept_language(accept))
}

/// Anything no route matched. `/fr/` and friends get sent to the slashless path (which may
/// still 404 there); everything else is just not found.
pub async fn not_found(uri: Uri) -> PageResponse {
	let path = uri.path();
	let trimmed = path.trim_end_matches('/');

	if trimmed.len() == path.len() || trimmed.is_empty() {
		return PageResponse::NotFound;
	}

	match uri.query() {
		Some(query) => PageResponse::Moved(format!("{trimmed}?{query}")),
		None => PageResponse::Moved(trimmed.to_string()),
	}
}

/// Which page is being shown, so the language switcher can link to the same page in the other
/// locales
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum PageKind {
	Main,
	OurStory,
}

impl PageKind {
	fn path(self, locale: Locale) -> String {
		match self {
			Self::Main => format!("/{locale}"),
			Self::OurStory => format!("/{locale}/our-story"),
		}
	}
}

/// The document around every page: `<html lang dir>`, nav, footer, and the island loader
pub struct Layout<C: RenderOnce + 'static> {
	pub locale: Locale,
	pub bundle: &'static Bundle,
	pub kind: PageKind,
	pub content: C,
}

impl<C: RenderOnce + 'static> Layout<C> {
	pub fn render(self) -> PageResponse {
		match self.into_string() {
			Ok(s) => PageResponse::Html(s),
			Err(e) => {
				tracing::error!("Couldn't render page: {e}");
				PageResponse::Broken
			}
		}
	}
}

impl<C: RenderOnce + 'static> RenderOnce for Layout<C> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self { locale, bundle, kind, content } = self;
		let home = PageKind::Main.path(locale);
		let year = EventKind::Huppa.date().map_or(2025, |d| d.year()).to_string();

		let info = build();
		let credits = format!("built {} with rustc {}", info.timestamp.date_naive(), info.compiler.version);

		tmpl << html! {
			: doctype::HTML;
			html(lang = locale.code(), dir = locale.direction().as_attr()) {
				head {
					meta(charset = "utf-8");
					meta(name = "viewport", content = "width=device-width, initial-scale=1");
					title : format!("{} · {}", bundle.get("hero.names"), bundle.get("hero.date"));
					style : Raw(shared_data::BASE_STYLE);
					style : Raw(main_page::STYLE);
				}
				body {
					nav {
						span {
							a(href = &home) : bundle.get("nav.home");
							a(href = PageKind::OurStory.path(locale)) : bundle.get("nav.story");
							a(href = format_args!("{home}#events")) : bundle.get("nav.events");
							a(href = format_args!("{home}#rsvp")) : bundle.get("nav.rsvp");
						}
						span(id = "languages", title = bundle.get("nav.language")) {
							@ for other in Locale::ALL.into_iter().filter(|l| *l != locale) {
								a(href = kind.path(other), lang = other.code()) : other.native_name();
							}
						}
					}
					main : content;
					footer {
						p : bundle.get("footer.thanks");
						p : bundle.get_fmt("footer.copyright", &[("year", year.as_str())]);
						p(class = "credits") : credits;
					}
					script(src = "/pkg/frontend.js") {}
					script : Raw(ISLAND_LOADER);
				}
			}
		};
	}
}
