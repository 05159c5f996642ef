use gloo_console::{error, log};
use shared_data::{load_bundle, resolve, Bundle, Locale, COUNTDOWN_ISLAND_ID, RSVP_ISLAND_ID};
use yew::prelude::*;

use countdown::Countdown;
use rsvp_form::RsvpIsland;

mod countdown;
mod rsvp_form;

/// What every island gets handed: the same bundle the server rendered the page with
#[derive(Properties, Clone, Copy)]
pub struct IslandProps {
	pub locale: Locale,
	pub bundle: &'static Bundle,
}

// bundles are statics, so the only way two of them are the same is if they're the same one
impl PartialEq for IslandProps {
	fn eq(&self, other: &Self) -> bool {
		self.locale == other.locale && std::ptr::eq(self.bundle, other.bundle)
	}
}

/// The server already put the page's language on `<html lang>`, so just trust that
fn page_locale() -> Locale {
	let lang = web_sys::window()
		.and_then(|win| win.document())
		.and_then(|doc| doc.document_element())
		.and_then(|html| html.get_attribute("lang"));

	resolve(lang.as_deref())
}

fn mount<C>(id: &str, props: IslandProps)
where
	C: BaseComponent<Properties = IslandProps>,
{
	let Some(root) = web_sys::window()
		.and_then(|win| win.document())
		.and_then(|doc| doc.get_element_by_id(id)) else {
		log!(format!("No #{id} on this page, not mounting it"));
		return;
	};

	// drop whatever the server rendered as a placeholder so it doesn't show up twice
	root.set_inner_html("");
	yew::Renderer::<C>::with_root_and_props(root, props).render();
}

fn main() {
	let locale = page_locale();

	let bundle = match load_bundle(locale) {
		Ok(bundle) => bundle,
		Err(e) => {
			error!(format!("Couldn't load messages for {locale}: {e}"));
			return;
		}
	};

	let props = IslandProps { locale, bundle };
	mount::<Countdown>(COUNTDOWN_ISLAND_ID, props);
	mount::<RsvpIsland>(RSVP_ISLAND_ID, props);
}
