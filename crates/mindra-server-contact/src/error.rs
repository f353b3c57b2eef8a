// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use mindra_server_smtp::SmtpError;

use crate::form::Field;

/// Server-side failure of a contact submission.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
	/// `name` or `contact` is missing or empty.
	#[error("Name and contact are required")]
	Validation,

	/// The request body could not be read as a submission.
	#[error("malformed contact request: {0}")]
	Malformed(String),

	/// The relay is unconfigured or refused the message.
	#[error("failed to relay contact email: {0}")]
	Relay(#[from] SmtpError),
}

/// Client-side failure of a form submission.
///
/// The form shows the same banner for every variant; the distinction only
/// matters for logs and tests.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
	#[error("required fields are empty: {0:?}")]
	Invalid(Vec<Field>),

	#[error("a submission is already in flight")]
	InFlight,

	#[error("server answered {0}")]
	Rejected(u16),

	#[error("request failed: {0}")]
	Transport(String),

	#[error(transparent)]
	Contact(#[from] ContactError),
}
