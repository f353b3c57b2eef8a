// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application state and router construction.

use std::sync::Arc;

use axum::{
	routing::{get, post},
	Router,
};
use mindra_server_config::{MediaConfig, ServerConfig, TlsMode};
use mindra_server_contact::ContactService;
use mindra_server_smtp::{Mailer, SmtpClient, TransportSecurity, UnconfiguredMailer};
use tower_http::services::ServeDir;

use crate::routes;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
	pub contact: ContactService,
	/// Present only when a relay is configured; used for health checks.
	pub smtp_client: Option<Arc<SmtpClient>>,
	pub media: MediaConfig,
	pub default_locale: String,
}

/// Build state from configuration, connecting the SMTP relay if one is configured.
///
/// A missing or unusable relay is logged and replaced by a mailer that fails
/// every send, so the site still serves pages.
pub fn create_app_state(config: &ServerConfig) -> AppState {
	let smtp_client = config.smtp.as_ref().and_then(|smtp| {
		let client_config = mindra_server_smtp::SmtpConfig {
			host: smtp.host.clone(),
			port: smtp.port,
			username: smtp.username.clone(),
			password: smtp.password.clone(),
			from_address: smtp.from_address.clone(),
			security: transport_security(smtp.tls_mode),
		};
		match SmtpClient::new(client_config) {
			Ok(client) => {
				tracing::info!(host = %smtp.host, port = smtp.port, "SMTP relay configured");
				Some(Arc::new(client))
			}
			Err(e) => {
				tracing::error!(error = %e, "failed to initialize SMTP client");
				None
			}
		}
	});

	let mailer: Arc<dyn Mailer> = match &smtp_client {
		Some(client) => client.clone(),
		None => {
			tracing::warn!("SMTP relay not configured, contact submissions will fail");
			Arc::new(UnconfiguredMailer)
		}
	};

	let mut state = create_app_state_with_mailer(config, mailer);
	state.smtp_client = smtp_client;
	state
}

/// Build state around an explicit mailer.
pub fn create_app_state_with_mailer(config: &ServerConfig, mailer: Arc<dyn Mailer>) -> AppState {
	AppState {
		contact: ContactService::new(mailer, config.contact.recipient.clone()),
		smtp_client: None,
		media: config.media.clone(),
		default_locale: config.logging.locale.clone(),
	}
}

fn transport_security(mode: TlsMode) -> TransportSecurity {
	match mode {
		TlsMode::None => TransportSecurity::Plain,
		TlsMode::StartTls => TransportSecurity::StartTls,
		TlsMode::Tls => TransportSecurity::ImplicitTls,
	}
}

/// Create the application router.
///
/// Tracing and CORS layers are added by the binary.
pub fn create_router(state: AppState) -> Router {
	let media = ServeDir::new(&state.media.dir);

	Router::new()
		// Pages
		.route(
			"/",
			get(routes::pages::home).post(routes::pages::home_submit),
		)
		.route(
			"/contact",
			get(routes::pages::contact).post(routes::pages::contact_submit),
		)
		.route("/business", get(routes::pages::business))
		.route("/business/portfolio", get(routes::pages::portfolio))
		.route(
			"/business/contact",
			get(routes::pages::business_contact).post(routes::pages::business_contact_submit),
		)
		// JSON API
		.route("/api/contact", post(routes::contact::send_contact))
		.route("/api/portfolio", get(routes::portfolio::list_portfolio))
		.route("/api/i18n/{locale}", get(routes::i18n::get_translations))
		.route("/health", get(routes::health::health_check))
		.nest_service("/media", media)
		.with_state(state)
}
