use std::{net::SocketAddr, path::PathBuf};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PKG_DIR: &str = "frontend/pkg";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
	#[error("BACKEND_PORT must be a port number, got '{0}'")]
	BadPort(String),
	#[error("GOOGLE_SHEETS_WEBHOOK_URL is not a valid url: {0}")]
	BadWebhookUrl(String),
}

#[derive(Clone, Debug)]
pub struct Config {
	pub port: u16,
	/// Where rsvps get forwarded to. `None` means they're only logged, which is what you want when
	/// running locally.
	pub webhook_url: Option<String>,
	/// Directory containing the wasm-bindgen output for the frontend islands
	pub pkg_dir: PathBuf,
}

impl Config {
	/// Reads `.env` (if there is one) and the environment
	pub fn from_env() -> Result<Self, ConfigError> {
		// no .env is fine, everything has a default or is optional
		if let Err(e) = dotenv::dotenv() {
			tracing::debug!("Not loading .env: {e}");
		}

		Self::from_lookup(|key| dotenv::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let port = match lookup("BACKEND_PORT") {
			Some(port) => port.parse().map_err(|_| ConfigError::BadPort(port))?,
			None => DEFAULT_PORT,
		};

		// an empty url is treated the same as an unset one
		let webhook_url = lookup("GOOGLE_SHEETS_WEBHOOK_URL")
			.map(|url| url.trim().to_string())
			.filter(|url| !url.is_empty());

		if let Some(ref url) = webhook_url {
			if !(url.starts_with("https://") || url.starts_with("http://")) {
				return Err(ConfigError::BadWebhookUrl(url.clone()));
			}
		}

		let pkg_dir = lookup("PKG_DIR")
			.filter(|dir| !dir.is_empty())
			.unwrap_or_else(|| DEFAULT_PKG_DIR.into())
			.into();

		Ok(Self { port, webhook_url, pkg_dir })
	}

	#[must_use]
	pub fn addr(&self) -> SocketAddr {
		SocketAddr::from(([0, 0, 0, 0], self.port))
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn config_with(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
		let vars = vars.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect::<HashMap<_, _>>();
		Config::from_lookup(|key| vars.get(key).cloned())
	}

	#[test]
	fn defaults() {
		let config = config_with(&[]).unwrap();
		assert_eq!(config.port, DEFAULT_PORT);
		assert_eq!(config.webhook_url, None);
		assert_eq!(config.pkg_dir, PathBuf::from(DEFAULT_PKG_DIR));
	}

	#[test]
	fn empty_webhook_is_unset() {
		let config = config_with(&[("GOOGLE_SHEETS_WEBHOOK_URL", "  ")]).unwrap();
		assert_eq!(config.webhook_url, None);
	}

	#[test]
	fn reads_everything() {
		let config = config_with(&[
			("BACKEND_PORT", "3000"),
			("GOOGLE_SHEETS_WEBHOOK_URL", "https://script.google.com/macros/s/abc/exec"),
			("PKG_DIR", "/srv/pkg"),
		]).unwrap();

		assert_eq!(config.port, 3000);
		assert_eq!(config.webhook_url.as_deref(), Some("https://script.google.com/macros/s/abc/exec"));
		assert_eq!(config.pkg_dir, PathBuf::from("/srv/pkg"));
	}

	#[test]
	fn rejects_garbage() {
		assert!(matches!(config_with(&[("BACKEND_PORT", "eighty")]), Err(ConfigError::BadPort(_))));
		assert!(matches!(
			config_with(&[("GOOGLE_SHEETS_WEBHOOK_URL", "script.google.com")]),
			Err(ConfigError::BadWebhookUrl(_))
		));
	}
}
