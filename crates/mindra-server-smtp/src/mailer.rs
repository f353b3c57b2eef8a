// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;

use crate::SmtpError;

/// A fully rendered message ready for the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
	pub to: String,
	pub subject: String,
	pub html: String,
	pub text: String,
}

/// Something that can deliver an [`OutgoingEmail`].
#[async_trait]
pub trait Mailer: Send + Sync {
	async fn send(&self, email: &OutgoingEmail) -> Result<(), SmtpError>;
}

/// Stand-in used when no relay host is configured. Every send fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredMailer;

#[async_trait]
impl Mailer for UnconfiguredMailer {
	async fn send(&self, email: &OutgoingEmail) -> Result<(), SmtpError> {
		tracing::warn!(to = %email.to, "dropping email, SMTP relay is not configured");
		Err(SmtpError::Config("SMTP relay is not configured".to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unconfigured_mailer_always_fails() {
		let email = OutgoingEmail {
			to: "igor@mindra.com".to_string(),
			subject: "s".to_string(),
			html: String::new(),
			text: String::new(),
		};
		let result = tokio_test::block_on(UnconfiguredMailer.send(&email));
		assert!(matches!(result, Err(SmtpError::Config(_))));
	}
}
