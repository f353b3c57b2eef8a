// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! SMTP relay configuration for contact form delivery.

use mindra_common_secret::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 587;
const IMPLICIT_TLS_PORT: u16 = 465;

/// TLS mode for SMTP connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
	/// No TLS (plain text connection).
	None,
	/// STARTTLS upgrade after connecting.
	#[default]
	StartTls,
	/// Direct TLS connection.
	Tls,
}

impl TlsMode {
	/// Parse TLS mode from string value.
	pub fn from_str_value(value: &str) -> Result<Self, ConfigError> {
		match value.to_lowercase().as_str() {
			"tls" => Ok(TlsMode::Tls),
			"starttls" => Ok(TlsMode::StartTls),
			"none" | "false" => Ok(TlsMode::None),
			_ => Err(ConfigError::InvalidValue {
				key: "tls_mode".to_string(),
				message: format!("Invalid value: '{value}'. Expected: tls, starttls, none"),
			}),
		}
	}
}

/// Configuration layer for SMTP settings (all fields optional for layering).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmtpConfigLayer {
	pub host: Option<String>,
	pub port: Option<u16>,
	pub username: Option<String>,
	#[serde(skip_serializing)]
	pub password: Option<SecretString>,
	/// Sender address. Falls back to `username`.
	pub from_address: Option<String>,
	/// Whether to upgrade with STARTTLS. Ignored when `tls_mode` is set.
	pub starttls: Option<bool>,
	pub tls_mode: Option<TlsMode>,
}

impl SmtpConfigLayer {
	/// Merge with another layer, preferring values from `other`.
	pub fn merge(&mut self, other: SmtpConfigLayer) {
		if other.host.is_some() {
			self.host = other.host;
		}
		if other.port.is_some() {
			self.port = other.port;
		}
		if other.username.is_some() {
			self.username = other.username;
		}
		if other.password.is_some() {
			self.password = other.password;
		}
		if other.from_address.is_some() {
			self.from_address = other.from_address;
		}
		if other.starttls.is_some() {
			self.starttls = other.starttls;
		}
		if other.tls_mode.is_some() {
			self.tls_mode = other.tls_mode;
		}
	}

	pub fn is_configured(&self) -> bool {
		self.host.as_ref().is_some_and(|h| !h.is_empty())
	}

	/// Finalize the layer into a runtime configuration.
	///
	/// An incomplete relay is logged and treated as unconfigured.
	pub fn finalize(self) -> Option<SmtpConfig> {
		match self.build() {
			Ok(config) => config,
			Err(e) => {
				tracing::warn!(error = %e, "SMTP relay incomplete, contact delivery disabled");
				None
			}
		}
	}

	/// Build the final config, returning None if SMTP is not configured.
	pub fn build(self) -> Result<Option<SmtpConfig>, ConfigError> {
		let Some(host) = self.host.filter(|h| !h.is_empty()) else {
			return Ok(None);
		};

		let from_address = self
			.from_address
			.or_else(|| self.username.clone())
			.filter(|f| !f.is_empty())
			.ok_or_else(|| {
				ConfigError::Validation(
					"SMTP from_address or username is required when host is configured".to_string(),
				)
			})?;

		let port = self.port.unwrap_or(DEFAULT_PORT);
		let tls_mode = self.tls_mode.unwrap_or(match self.starttls {
			Some(false) => TlsMode::None,
			_ if port == IMPLICIT_TLS_PORT => TlsMode::Tls,
			_ => TlsMode::StartTls,
		});

		Ok(Some(SmtpConfig {
			host,
			port,
			username: self.username,
			password: self.password,
			from_address,
			tls_mode,
		}))
	}
}

/// Validated SMTP configuration.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
	pub host: String,
	pub port: u16,
	pub username: Option<String>,
	pub password: Option<SecretString>,
	pub from_address: String,
	pub tls_mode: TlsMode,
}

impl SmtpConfig {
	pub fn has_auth(&self) -> bool {
		self.username.is_some() && self.password.is_some()
	}
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn password_never_in_debug(password in "[a-zA-Z0-9]{10,40}") {
			prop_assume!(!password.contains("REDACTED"));
			let layer = SmtpConfigLayer {
				password: Some(SecretString::new(password.clone())),
				..Default::default()
			};
			let rendered = format!("{:?}", layer);
			prop_assert!(!rendered.contains(&password));
		}

		#[test]
		fn port_defaults_to_587(
			host in "[a-z]{3,10}\\.[a-z]{2,5}",
			username in "[a-z]{3,10}@[a-z]{3,10}\\.[a-z]{2,3}",
		) {
			let layer = SmtpConfigLayer {
				host: Some(host),
				username: Some(username),
				..Default::default()
			};
			let config = layer.build().unwrap().unwrap();
			prop_assert_eq!(config.port, 587);
			prop_assert_eq!(config.tls_mode, TlsMode::StartTls);
		}
	}
}
