// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	En,
	#[default]
	Uk,
}

/// Locale used when nothing else is configured or requested.
pub const DEFAULT_LOCALE: Locale = Locale::Uk;

/// Metadata shown by the language switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	pub locale: Locale,
	/// Switcher label. Ukrainian is shown as "UA", matching the site's branding.
	pub label: &'static str,
	pub native_name: &'static str,
}

/// Locales in switcher order.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		locale: Locale::Uk,
		label: "UA",
		native_name: "Українська",
	},
	LocaleInfo {
		locale: Locale::En,
		label: "EN",
		native_name: "English",
	},
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0:?}")]
pub struct ParseLocaleError(pub String);

impl Locale {
	/// ISO 639-1 code, also used for the HTML `lang` attribute.
	pub fn code(self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Uk => "uk",
		}
	}

	pub fn info(self) -> &'static LocaleInfo {
		match self {
			Locale::Uk => &LOCALES[0],
			Locale::En => &LOCALES[1],
		}
	}

	/// Parse a locale code. Accepts `en`, `uk` and the `ua` alias, ignoring case
	/// and surrounding whitespace.
	pub fn parse(value: &str) -> Option<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"en" => Some(Locale::En),
			"uk" | "ua" => Some(Locale::Uk),
			_ => None,
		}
	}
}

impl FromStr for Locale {
	type Err = ParseLocaleError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Locale::parse(s).ok_or_else(|| ParseLocaleError(s.to_string()))
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}
