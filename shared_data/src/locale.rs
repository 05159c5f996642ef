use std::{fmt, str::FromStr};

/// Every language the site is translated into. The default is one of the variants, so it is
/// always part of the supported set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Locale {
	En,
	Fr,
	He,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
	Ltr,
	Rtl,
}

impl Direction {
	#[must_use]
	pub fn as_attr(self) -> &'static str {
		match self {
			Self::Ltr => "ltr",
			Self::Rtl => "rtl",
		}
	}
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("'{0}' is not a supported locale")]
pub struct UnknownLocale(pub String);

impl Locale {
	pub const ALL: [Self; 3] = [Self::En, Self::Fr, Self::He];
	pub const DEFAULT: Self = Self::En;

	#[must_use]
	pub fn code(self) -> &'static str {
		match self {
			Self::En => "en",
			Self::Fr => "fr",
			Self::He => "he",
		}
	}

	#[must_use]
	pub fn direction(self) -> Direction {
		match self {
			Self::He => Direction::Rtl,
			Self::En | Self::Fr => Direction::Ltr,
		}
	}

	/// The name of the language in that language, for the switcher in the nav bar
	#[must_use]
	pub fn native_name(self) -> &'static str {
		match self {
			Self::En => "English",
			Self::Fr => "Français",
			Self::He => "עברית",
		}
	}
}

impl FromStr for Locale {
	type Err = UnknownLocale;

	// strict on purpose: this is what the router uses, and it must not accept 'EN' or ' en'
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter()
			.find(|l| l.code() == s)
			.ok_or_else(|| UnknownLocale(s.to_string()))
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

/// Soft resolution used for content negotiation. Never fails: anything that isn't exactly a
/// supported code gets the default.
#[must_use]
pub fn resolve(requested: Option<&str>) -> Locale {
	requested
		.and_then(|r| r.parse().ok())
		.unwrap_or(Locale::DEFAULT)
}

/// Picks the primary language tag out of an `Accept-Language` header value (`fr-FR,fr;q=0.9`
/// -> `fr`) and resolves it. Only the first entry is considered.
#[must_use]
pub fn resolve_accept_language(header: Option<&str>) -> Locale {
	let primary = header
		.and_then(|h| h.split(',').next())
		.and_then(|tag| tag.split(';').next())
		.and_then(|tag| tag.trim().split('-').next())
		.map(str::to_ascii_lowercase);

	resolve(primary.as_deref())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn supported_tokens_resolve_to_themselves() {
		for locale in Locale::ALL {
			assert_eq!(resolve(Some(locale.code())), locale);
			// and resolving twice changes nothing
			assert_eq!(resolve(Some(resolve(Some(locale.code())).code())), locale);
		}
	}

	#[test]
	fn everything_else_resolves_to_default() {
		for token in [None, Some(""), Some("de"), Some("EN"), Some(" en"), Some("en-US"), Some("hebrew")] {
			assert_eq!(resolve(token), Locale::DEFAULT, "token {token:?}");
		}
	}

	#[test]
	fn default_is_supported() {
		assert!(Locale::ALL.contains(&Locale::DEFAULT));
	}

	#[test]
	fn parsing_is_strict() {
		assert_eq!("fr".parse::<Locale>(), Ok(Locale::Fr));
		assert_eq!("Fr".parse::<Locale>(), Err(UnknownLocale("Fr".into())));
		assert!("es".parse::<Locale>().is_err());
	}

	#[test]
	fn only_hebrew_is_rtl() {
		assert_eq!(Locale::He.direction(), Direction::Rtl);
		assert_eq!(Locale::En.direction(), Direction::Ltr);
		assert_eq!(Locale::Fr.direction().as_attr(), "ltr");
	}

	#[test]
	fn accept_language_takes_primary_tag() {
		assert_eq!(resolve_accept_language(Some("fr-FR,fr;q=0.9,en;q=0.8")), Locale::Fr);
		assert_eq!(resolve_accept_language(Some("HE")), Locale::He);
		assert_eq!(resolve_accept_language(Some("de-DE,fr;q=0.5")), Locale::En);
		assert_eq!(resolve_accept_language(None), Locale::En);
	}
}
