// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Log filter and fallback locale.
//!
//! The fallback locale is served to visitors with no `lang` query and no
//! locale cookie. Only the site's two languages are accepted; `ua` is kept
//! as an alias for Ukrainian because older links still carry it.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_LEVEL: &str = "info,tower_http=debug";
const DEFAULT_LOCALE: &str = "uk";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfigLayer {
	pub level: Option<String>,
	pub locale: Option<String>,
}

impl LoggingConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.level.is_some() {
			self.level = other.level;
		}
		if other.locale.is_some() {
			self.locale = other.locale;
		}
	}

	/// Resolve the layer, normalising the locale to `en` or `uk`.
	pub fn finalize(self) -> Result<LoggingConfig, ConfigError> {
		let locale = match self.locale {
			Some(raw) => normalize_locale(&raw)?,
			None => DEFAULT_LOCALE.to_string(),
		};
		Ok(LoggingConfig {
			level: self
				.level
				.filter(|level| !level.trim().is_empty())
				.unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
			locale,
		})
	}
}

fn normalize_locale(raw: &str) -> Result<String, ConfigError> {
	match raw.trim().to_ascii_lowercase().as_str() {
		"en" => Ok("en".to_string()),
		"uk" | "ua" => Ok("uk".to_string()),
		other => Err(ConfigError::InvalidValue {
			key: "MINDRA_SERVER_DEFAULT_LOCALE".to_string(),
			message: format!("unsupported locale '{other}', expected en or uk"),
		}),
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
	/// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
	pub level: String,
	/// Always `en` or `uk`.
	pub locale: String,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: DEFAULT_LEVEL.to_string(),
			locale: DEFAULT_LOCALE.to_string(),
		}
	}
}
