// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use mindra_server_smtp::{Mailer, SmtpError};

use crate::error::ContactError;
use crate::render::render_email;
use crate::submission::ContactSubmission;

/// Validates submissions and relays exactly one email per valid call.
///
/// There is no retry and no deduplication: submitting twice sends twice.
#[derive(Clone)]
pub struct ContactService {
	mailer: Arc<dyn Mailer>,
	recipient: Option<String>,
}

impl ContactService {
	pub fn new(mailer: Arc<dyn Mailer>, recipient: Option<String>) -> Self {
		Self { mailer, recipient }
	}

	pub fn recipient(&self) -> Option<&str> {
		self.recipient.as_deref()
	}

	#[tracing::instrument(
		name = "contact_submit",
		skip(self, submission),
		fields(
			has_event_type = submission.event_type().is_some(),
			has_date = submission.date().is_some(),
			has_message = submission.message().is_some()
		)
	)]
	pub async fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
		if let Err(e) = submission.validate() {
			tracing::debug!("rejecting incomplete contact submission");
			return Err(e);
		}

		let Some(recipient) = self.recipient.as_deref() else {
			tracing::error!("contact recipient is not configured");
			return Err(ContactError::Relay(SmtpError::Config(
				"contact recipient is not configured".to_string(),
			)));
		};

		let email = render_email(submission, recipient);
		self.mailer.send(&email).await.map_err(|e| {
			tracing::error!(error = %e, "failed to send contact email");
			ContactError::Relay(e)
		})?;

		tracing::info!("contact email relayed");
		Ok(())
	}
}

impl std::fmt::Debug for ContactService {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ContactService")
			.field("recipient", &self.recipient)
			.finish_non_exhaustive()
	}
}
