// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tokio::time::Instant;

use crate::{
	api::AppState,
	health::{self, HealthComponents, HealthResponse, HealthStatus},
	version::VERSION,
};

/// GET /health - Component health report.
///
/// Degraded components (no relay, no recipient, empty media) still answer 200.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	let overall_start = Instant::now();

	let smtp = health::check_smtp(state.smtp_client.as_ref()).await;
	let contact = health::check_contact(state.contact.recipient());
	let media = health::check_media(&state.media.dir);

	let components = HealthComponents {
		smtp,
		contact,
		media,
	};
	let status = health::aggregate_status(&components);

	let response = HealthResponse {
		status,
		timestamp: chrono::Utc::now().to_rfc3339(),
		duration_ms: overall_start.elapsed().as_millis() as u64,
		version: VERSION,
		components,
	};

	let http_status = match status {
		HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
		HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
	};

	(http_status, Json(response))
}
