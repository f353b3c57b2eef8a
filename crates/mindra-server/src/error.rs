// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use mindra_server_contact::ContactError;
use serde::Serialize;

/// Message returned to the client for every relay failure.
pub const SEND_FAILED: &str = "Failed to send email";

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// Invalid request payload.
	#[error("{0}")]
	BadRequest(String),

	/// Unknown resource.
	#[error("{0}")]
	NotFound(String),

	/// Internal failure. The message is safe to show to the client.
	#[error("{0}")]
	Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
}

impl From<ContactError> for ServerError {
	fn from(e: ContactError) -> Self {
		match e {
			ContactError::Validation => ServerError::BadRequest(e.to_string()),
			ContactError::Malformed(reason) => {
				tracing::warn!(%reason, "unreadable contact request");
				ServerError::Internal(SEND_FAILED.to_string())
			}
			ContactError::Relay(relay) => {
				tracing::error!(error = %relay, "contact relay failed");
				ServerError::Internal(SEND_FAILED.to_string())
			}
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let status = match &self {
			ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
			ServerError::NotFound(_) => StatusCode::NOT_FOUND,
			ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		};
		let body = ErrorResponse {
			error: self.to_string(),
		};
		(status, Json(body)).into_response()
	}
}
