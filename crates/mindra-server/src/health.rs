// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Health check types and component checking logic.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use mindra_server_smtp::SmtpClient;
use serde::Serialize;
use tokio::time::{timeout, Instant};

/// Health status for components and overall system.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
	Healthy,
	Degraded,
	Unhealthy,
}

/// SMTP relay health.
#[derive(Debug, Serialize)]
pub struct SmtpHealth {
	pub status: HealthStatus,
	pub latency_ms: u64,
	pub configured: bool,
	pub healthy: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

/// Contact recipient configuration.
#[derive(Debug, Serialize)]
pub struct ContactHealth {
	pub status: HealthStatus,
	pub recipient_configured: bool,
}

/// Media directory health.
#[derive(Debug, Serialize)]
pub struct MediaHealth {
	pub status: HealthStatus,
	pub path: String,
	pub exists: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub file_count: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthComponents {
	pub smtp: SmtpHealth,
	pub contact: ContactHealth,
	pub media: MediaHealth,
}

/// Complete health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: HealthStatus,
	pub timestamp: String,
	pub duration_ms: u64,
	pub version: &'static str,
	pub components: HealthComponents,
}

const SMTP_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Check the SMTP relay by opening a connection.
pub async fn check_smtp(client: Option<&Arc<SmtpClient>>) -> SmtpHealth {
	let start = Instant::now();

	let (configured, healthy, status, error) = match client {
		None => (
			false,
			false,
			HealthStatus::Degraded,
			Some("SMTP not configured".to_string()),
		),
		Some(client) => match timeout(SMTP_CHECK_TIMEOUT, client.check_health()).await {
			Ok(Ok(())) => (true, true, HealthStatus::Healthy, None),
			Ok(Err(e)) => (true, false, HealthStatus::Unhealthy, Some(e.to_string())),
			Err(_) => (
				true,
				false,
				HealthStatus::Unhealthy,
				Some("SMTP health check timed out".to_string()),
			),
		},
	};

	SmtpHealth {
		status,
		latency_ms: start.elapsed().as_millis() as u64,
		configured,
		healthy,
		error,
	}
}

pub fn check_contact(recipient: Option<&str>) -> ContactHealth {
	let recipient_configured = recipient.is_some();
	ContactHealth {
		status: if recipient_configured {
			HealthStatus::Healthy
		} else {
			HealthStatus::Degraded
		},
		recipient_configured,
	}
}

/// Check that the media directory exists and has content.
pub fn check_media(dir: &Path) -> MediaHealth {
	let path = dir.display().to_string();

	if !dir.is_dir() {
		return MediaHealth {
			status: HealthStatus::Degraded,
			path,
			exists: dir.exists(),
			file_count: None,
			error: Some("media directory does not exist".to_string()),
		};
	}

	match std::fs::read_dir(dir) {
		Ok(entries) => {
			let count = entries
				.filter_map(Result::ok)
				.filter(|e| !e.file_name().to_string_lossy().starts_with('.'))
				.count();
			MediaHealth {
				status: if count == 0 {
					HealthStatus::Degraded
				} else {
					HealthStatus::Healthy
				},
				path,
				exists: true,
				file_count: Some(count),
				error: (count == 0).then(|| "media directory is empty".to_string()),
			}
		}
		Err(e) => MediaHealth {
			status: HealthStatus::Unhealthy,
			path,
			exists: true,
			file_count: None,
			error: Some(e.to_string()),
		},
	}
}

/// Worst component status wins.
pub fn aggregate_status(components: &HealthComponents) -> HealthStatus {
	let statuses = [
		components.smtp.status,
		components.contact.status,
		components.media.status,
	];
	if statuses.contains(&HealthStatus::Unhealthy) {
		HealthStatus::Unhealthy
	} else if statuses.contains(&HealthStatus::Degraded) {
		HealthStatus::Degraded
	} else {
		HealthStatus::Healthy
	}
}
