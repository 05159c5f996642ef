use backend::{config::Config, router, webhook::WebhookClient, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let config = Config::from_env()?;

	let webhook = WebhookClient::new(config.webhook_url.clone())?;
	if webhook.is_configured() {
		tracing::info!("Forwarding rsvps to the configured webhook");
	} else {
		tracing::warn!("GOOGLE_SHEETS_WEBHOOK_URL is not set; rsvps will only be logged");
	}

	if !config.pkg_dir.is_dir() {
		tracing::warn!(
			"{} doesn't exist, so the countdown and rsvp form won't come alive. Build the frontend first",
			config.pkg_dir.display()
		);
	}

	let app = router(AppState { webhook }, &config.pkg_dir);

	let addr = config.addr();
	let listener = TcpListener::bind(addr).await?;

	tracing::info!("Serving axum on {addr}...");

	axum::serve(listener, app).await?;

	Ok(())
}
