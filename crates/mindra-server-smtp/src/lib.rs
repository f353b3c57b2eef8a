// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! SMTP relay client for Mindra contact notifications.
//!
//! The contact service talks to a [`Mailer`]. In production that is an
//! [`SmtpClient`] built from the relay settings; when no relay is configured the
//! server installs an [`UnconfiguredMailer`] so every send fails cleanly.
//!
//! # Example
//!
//! ```no_run
//! use mindra_server_smtp::{Mailer, OutgoingEmail, SmtpClient, SmtpConfig, TransportSecurity};
//! use mindra_common_secret::SecretString;
//!
//! # async fn example() -> Result<(), mindra_server_smtp::SmtpError> {
//! let config = SmtpConfig {
//!     host: "smtp.gmail.com".to_string(),
//!     port: 587,
//!     username: Some("bookings@mindra.com".to_string()),
//!     password: Some(SecretString::new("app-password")),
//!     from_address: "bookings@mindra.com".to_string(),
//!     security: TransportSecurity::StartTls,
//! };
//!
//! let client = SmtpClient::new(config)?;
//! client
//!     .send(&OutgoingEmail {
//!         to: "igor@mindra.com".to_string(),
//!         subject: "Hello".to_string(),
//!         html: "<p>Hello</p>".to_string(),
//!         text: "Hello".to_string(),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod mailer;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use mailer::{Mailer, OutgoingEmail, UnconfiguredMailer};

use async_trait::async_trait;
use lettre::{
	message::{header::ContentType, Mailbox, MultiPart, SinglePart},
	transport::smtp::authentication::Credentials,
	AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use mindra_common_secret::SecretString;
use serde::{Deserialize, Serialize};

/// Errors that can occur during SMTP operations.
#[derive(Debug, thiserror::Error)]
pub enum SmtpError {
	/// Failed to connect to the SMTP server.
	#[error("connection failed: {0}")]
	Connection(String),

	/// Failed to send an email message.
	#[error("send failed: {0}")]
	Send(String),

	/// Invalid or missing configuration.
	#[error("invalid configuration: {0}")]
	Config(String),

	/// Invalid email address format.
	#[error("invalid email address: {0}")]
	Address(String),
}

/// How the connection to the relay is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportSecurity {
	/// Plain text, no TLS at all.
	Plain,
	/// Connect in plain text and upgrade with STARTTLS.
	#[default]
	StartTls,
	/// TLS from the first byte (usually port 465).
	ImplicitTls,
}

/// Relay connection settings.
///
/// The password is a [`SecretString`] so it never shows up in logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
	pub host: String,
	pub port: u16,
	pub username: Option<String>,
	pub password: Option<SecretString>,
	/// Envelope and header sender.
	pub from_address: String,
	#[serde(default)]
	pub security: TransportSecurity,
}

/// Async SMTP client.
///
/// The connection is made lazily on the first send; lettre keeps a small pool.
pub struct SmtpClient {
	transport: AsyncSmtpTransport<Tokio1Executor>,
	from_mailbox: Mailbox,
}

impl SmtpClient {
	/// Build the transport from `config`.
	///
	/// Returns [`SmtpError::Address`] if the from address does not parse and
	/// [`SmtpError::Connection`] if the TLS parameters cannot be built.
	#[tracing::instrument(
		name = "smtp_client_new",
		skip(config),
		fields(host = %config.host, port = %config.port, security = ?config.security)
	)]
	pub fn new(config: SmtpConfig) -> Result<Self, SmtpError> {
		let from_mailbox: Mailbox = config
			.from_address
			.parse()
			.map_err(|e| SmtpError::Address(format!("{e}")))?;

		let builder = match config.security {
			TransportSecurity::StartTls => {
				AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
					.map_err(|e| SmtpError::Connection(format!("{e}")))?
			}
			TransportSecurity::ImplicitTls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
				.map_err(|e| SmtpError::Connection(format!("{e}")))?,
			TransportSecurity::Plain => {
				AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
			}
		};

		let mut builder = builder.port(config.port);

		if let (Some(username), Some(password)) = (config.username, config.password) {
			builder = builder.credentials(Credentials::new(username, password.into_inner()));
		}

		tracing::debug!("SMTP client initialized");

		Ok(Self {
			transport: builder.build(),
			from_mailbox,
		})
	}

	/// Open a connection to the relay and issue a NOOP.
	#[tracing::instrument(name = "smtp_check_health", skip(self))]
	pub async fn check_health(&self) -> Result<(), SmtpError> {
		let ok = self
			.transport
			.test_connection()
			.await
			.map_err(|e| SmtpError::Connection(format!("{e}")))?;
		if ok {
			Ok(())
		} else {
			Err(SmtpError::Connection("relay did not answer NOOP".to_string()))
		}
	}

	fn build_message(&self, email: &OutgoingEmail) -> Result<Message, SmtpError> {
		let to_mailbox: Mailbox = email
			.to
			.parse()
			.map_err(|e| SmtpError::Address(format!("{e}")))?;

		Message::builder()
			.from(self.from_mailbox.clone())
			.to(to_mailbox)
			.subject(email.subject.as_str())
			.multipart(
				MultiPart::alternative()
					.singlepart(
						SinglePart::builder()
							.header(ContentType::TEXT_PLAIN)
							.body(email.text.clone()),
					)
					.singlepart(
						SinglePart::builder()
							.header(ContentType::TEXT_HTML)
							.body(email.html.clone()),
					),
			)
			.map_err(|e| SmtpError::Send(format!("failed to build message: {e}")))
	}
}

#[async_trait]
impl Mailer for SmtpClient {
	#[tracing::instrument(
		name = "smtp_send_email",
		skip(self, email),
		fields(to = %email.to, subject = %email.subject)
	)]
	async fn send(&self, email: &OutgoingEmail) -> Result<(), SmtpError> {
		let message = self.build_message(email)?;

		tracing::debug!("sending email");
		self
			.transport
			.send(message)
			.await
			.map_err(|e| SmtpError::Send(format!("{e}")))?;
		tracing::info!("email sent successfully");

		Ok(())
	}
}

/// Validate an email address format.
///
/// ```
/// use mindra_server_smtp::is_valid_email;
///
/// assert!(is_valid_email("igor@mindra.com"));
/// assert!(!is_valid_email("not-an-email"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
	email.parse::<Mailbox>().is_ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(security: TransportSecurity) -> SmtpConfig {
		SmtpConfig {
			host: "smtp.example.com".to_string(),
			port: 587,
			username: Some("user".to_string()),
			password: Some(SecretString::new("super-secret-password")),
			from_address: "site@mindra.com".to_string(),
			security,
		}
	}

	mod email_validation {
		use super::*;

		#[test]
		fn valid_simple_email() {
			assert!(is_valid_email("user@example.com"));
		}

		#[test]
		fn valid_email_with_plus() {
			assert!(is_valid_email("user+tag@example.com"));
		}

		#[test]
		fn invalid_empty_string() {
			assert!(!is_valid_email(""));
		}

		#[test]
		fn invalid_no_domain() {
			assert!(!is_valid_email("user@"));
		}

		#[test]
		fn phone_number_is_not_an_address() {
			assert!(!is_valid_email("+380 67 123 4567"));
		}
	}

	mod client {
		use super::*;

		#[test]
		fn config_debug_does_not_leak_password() {
			let debug = format!("{:?}", config(TransportSecurity::StartTls));
			assert!(!debug.contains("super-secret-password"));
			assert!(debug.contains("[REDACTED]"));
		}

		#[test]
		fn builds_for_every_security_mode() {
			for security in [
				TransportSecurity::Plain,
				TransportSecurity::StartTls,
				TransportSecurity::ImplicitTls,
			] {
				assert!(SmtpClient::new(config(security)).is_ok(), "{security:?}");
			}
		}

		#[test]
		fn rejects_bad_from_address() {
			let mut bad = config(TransportSecurity::Plain);
			bad.from_address = "nobody".to_string();
			assert!(matches!(SmtpClient::new(bad), Err(SmtpError::Address(_))));
		}

		#[test]
		fn message_rejects_bad_recipient() {
			let client = SmtpClient::new(config(TransportSecurity::Plain)).unwrap();
			let email = OutgoingEmail {
				to: "not an address".to_string(),
				subject: "s".to_string(),
				html: "<p>x</p>".to_string(),
				text: "x".to_string(),
			};
			assert!(matches!(
				client.build_message(&email),
				Err(SmtpError::Address(_))
			));
		}

		#[test]
		fn message_carries_both_parts() {
			let client = SmtpClient::new(config(TransportSecurity::Plain)).unwrap();
			let email = OutgoingEmail {
				to: "igor@mindra.com".to_string(),
				subject: "New Contact Form Submission from Ana".to_string(),
				html: "<p>html body</p>".to_string(),
				text: "text body".to_string(),
			};
			let raw = String::from_utf8(client.build_message(&email).unwrap().formatted()).unwrap();
			assert!(raw.contains("Subject: New Contact Form Submission from Ana"));
			assert!(raw.contains("To: igor@mindra.com"));
			assert!(raw.contains("text/plain"));
			assert!(raw.contains("text/html"));
			assert!(raw.contains("text body"));
		}
	}

	mod property_tests {
		use super::*;
		use proptest::prelude::*;

		proptest! {
			#[test]
			fn valid_emails_are_accepted(
				local in "[a-zA-Z][a-zA-Z0-9]{0,30}",
				domain in "[a-zA-Z][a-zA-Z0-9]{0,20}",
				tld in "(com|org|net|ua)"
			) {
				let email = format!("{local}@{domain}.{tld}");
				prop_assert!(is_valid_email(&email), "Expected valid: {}", email);
			}

			#[test]
			fn no_at_symbol_is_invalid(s in "[a-zA-Z0-9._%+-]{1,50}") {
				prop_assume!(!s.contains('@'));
				prop_assert!(!is_valid_email(&s));
			}

			#[test]
			fn password_never_in_config_debug(password in "[a-zA-Z0-9!@#$%^&*]{8,32}") {
				prop_assume!(!password.contains("REDACTED"));
				let mut cfg = config(TransportSecurity::StartTls);
				cfg.password = Some(SecretString::new(password.clone()));
				let rendered = format!("{:?}", cfg);
				prop_assert!(!rendered.contains(&password));
			}
		}
	}
}
