// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! JSON contact endpoint.

use axum::{body::Bytes, extract::State, Json};
use mindra_server_contact::ContactSubmission;
use serde::Serialize;

use crate::{api::AppState, error::ServerError};

#[derive(Debug, Serialize)]
pub struct ContactResponse {
	pub message: &'static str,
}

/// POST /api/contact - Relay a contact submission by email.
///
/// A body that is not JSON answers 500 like any other failure. Missing or
/// empty `name` or `contact` answers 400.
pub async fn send_contact(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<Json<ContactResponse>, ServerError> {
	let submission = ContactSubmission::from_json(&body)?;
	state.contact.submit(&submission).await?;
	Ok(Json(ContactResponse {
		message: "Email sent successfully",
	}))
}
