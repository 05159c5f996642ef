use axum::extract::Path;
use horrorshow::{html, RenderOnce, TemplateBuffer};
use shared_data::{Bundle, Locale};

use super::{page_locale, Layout, PageKind, PageResponse};

/// `GET /:locale/our-story`
pub async fn get_our_story(Path(locale): Path<String>) -> PageResponse {
	let (locale, bundle) = match page_locale(&locale) {
		Ok(found) => found,
		Err(resp) => return resp,
	};

	Layout {
		locale,
		bundle,
		kind: PageKind::OurStory,
		content: OurStory { locale, bundle },
	}.render()
}

struct OurStory {
	locale: Locale,
	bundle: &'static Bundle,
}

impl RenderOnce for OurStory {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self { locale, bundle } = self;

		tmpl << html! {
			section(id = "our-story") {
				h1 : bundle.get("story.title");
				p(class = "subtitle") : bundle.get("story.subtitle");
				@ for key in ["story.p1", "story.p2", "story.p3"] {
					p : bundle.get(key);
				}
				a(href = format_args!("/{locale}"), class = "cta") : bundle.get("story.back");
			}
		};
	}
}
