use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::Locale;

static EN: &str = include_str!("../messages/en.json");
static FR: &str = include_str!("../messages/fr.json");
static HE: &str = include_str!("../messages/he.json");

// parsed once, indexed the same way as `Locale::ALL`
static BUNDLES: Lazy<[Result<Bundle, BundleError>; 3]> =
	Lazy::new(|| Locale::ALL.map(|locale| Bundle::parse(locale, raw_bundle(locale))));

fn raw_bundle(locale: Locale) -> &'static str {
	match locale {
		Locale::En => EN,
		Locale::Fr => FR,
		Locale::He => HE,
	}
}

fn bundle_index(locale: Locale) -> usize {
	match locale {
		Locale::En => 0,
		Locale::Fr => 1,
		Locale::He => 2,
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BundleError {
	#[error("message bundle for '{locale}' is malformed: {reason}")]
	Malformed { locale: Locale, reason: String },
}

/// Every translated string for one locale, flattened from the nested json into dotted keys
/// (`{"rsvp": {"form": {"name": ..}}}` becomes `rsvp.form.name`).
#[derive(Debug)]
pub struct Bundle {
	locale: Locale,
	messages: HashMap<String, String>,
}

/// Returns the compiled-in bundle for `locale`. Every `Locale` has a bundle, so the only way
/// this can fail is if one of the json files doesn't parse.
pub fn load_bundle(locale: Locale) -> Result<&'static Bundle, BundleError> {
	BUNDLES[bundle_index(locale)]
		.as_ref()
		.map_err(Clone::clone)
}

impl Bundle {
	pub fn parse(locale: Locale, raw: &str) -> Result<Self, BundleError> {
		let malformed = |reason: String| BundleError::Malformed { locale, reason };

		let root: Value = serde_json::from_str(raw)
			.map_err(|e| malformed(e.to_string()))?;

		let mut messages = HashMap::new();
		flatten(String::new(), root, &mut messages).map_err(malformed)?;

		Ok(Self { locale, messages })
	}

	#[must_use]
	pub fn locale(&self) -> Locale {
		self.locale
	}

	#[must_use]
	pub fn contains(&self, key: &str) -> bool {
		self.messages.contains_key(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.messages.keys().map(String::as_str)
	}

	/// Looks up a message. A missing key is a bug in the templates, so it panics in debug builds;
	/// release builds log it and render the key itself.
	#[must_use]
	pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
		match self.messages.get(key) {
			Some(msg) => msg.as_str(),
			None => {
				if cfg!(debug_assertions) {
					panic!("missing message '{key}' in the '{}' bundle", self.locale);
				}

				tracing::warn!(key, locale = %self.locale, "missing message");
				key
			}
		}
	}

	/// Like [`Bundle::get`], but replaces each `{name}` in the message with its value
	#[must_use]
	pub fn get_fmt(&self, key: &str, args: &[(&str, &str)]) -> String {
		args.iter()
			.fold(self.get(key).to_string(), |msg, (name, value)| {
				msg.replace(&format!("{{{name}}}"), value)
			})
	}
}

fn flatten(prefix: String, value: Value, out: &mut HashMap<String, String>) -> Result<(), String> {
	match value {
		Value::String(s) if !prefix.is_empty() => {
			out.insert(prefix, s);
			Ok(())
		},
		Value::Object(map) => {
			for (key, child) in map {
				let full = if prefix.is_empty() { key } else { format!("{prefix}.{key}") };
				flatten(full, child, out)?;
			}
			Ok(())
		},
		other => Err(format!("expected a string or an object at '{prefix}', found {other}"))
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeSet;

	use super::*;

	#[test]
	fn every_locale_has_a_bundle() {
		for locale in Locale::ALL {
			let bundle = load_bundle(locale).unwrap();
			assert_eq!(bundle.locale(), locale);
			assert!(bundle.contains("rsvp.form.name"));
		}
	}

	#[test]
	fn bundles_share_one_key_set() {
		let key_set = |locale| load_bundle(locale).unwrap()
			.keys()
			.map(str::to_string)
			.collect::<BTreeSet<_>>();

		let en = key_set(Locale::En);
		assert_eq!(en, key_set(Locale::Fr));
		assert_eq!(en, key_set(Locale::He));
	}

	#[test]
	fn nested_keys_are_dotted() {
		let bundle = load_bundle(Locale::Fr).unwrap();
		assert_eq!(bundle.get("countdown.days"), "Jours");
		assert_eq!(bundle.get("events.huppa.title"), "Houppa");
		assert_eq!(bundle.get("rsvp.events.selectAll"), "À quels événements participerez-vous ?");
	}

	#[test]
	fn placeholders_are_substituted() {
		let bundle = load_bundle(Locale::En).unwrap();
		assert_eq!(bundle.get_fmt("rsvp.form.guests", &[("count", "4")]), "4 guests");
		assert_eq!(bundle.get_fmt("footer.copyright", &[("year", "2025")]), "© 2025 Ela & Gabriel");
		// unknown placeholders are left alone
		assert_eq!(bundle.get_fmt("rsvp.form.guests", &[("other", "4")]), "{count} guests");
	}

	#[test]
	#[cfg(debug_assertions)]
	#[should_panic(expected = "missing message")]
	fn missing_key_is_loud_in_debug() {
		let _ = load_bundle(Locale::He).unwrap().get("hero.nope");
	}

	#[test]
	fn malformed_bundles_are_rejected() {
		assert!(matches!(
			Bundle::parse(Locale::En, "{ not json"),
			Err(BundleError::Malformed { locale: Locale::En, .. })
		));
		assert!(Bundle::parse(Locale::Fr, r#"{"hero": {"count": 3}}"#).is_err());
		assert!(Bundle::parse(Locale::He, r#""just a string""#).is_err());

		let ok = Bundle::parse(Locale::En, r#"{"a": {"b": "c"}}"#).unwrap();
		assert_eq!(ok.get("a.b"), "c");
	}
}
