// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Redacting wrapper for credentials.
//!
//! The SMTP relay password is the only secret the site handles. It travels from
//! the environment (or `server.toml`) into the relay transport and must never
//! show up in logs, `Debug` dumps of the configuration, or serialized config.
//!
//! ```
//! use mindra_common_secret::SecretString;
//!
//! let password = SecretString::new("hunter2");
//! assert_eq!(format!("{password}"), "[REDACTED]");
//! assert_eq!(password.expose(), "hunter2");
//! ```

use std::fmt;

use zeroize::Zeroize;

/// Placeholder printed in place of any secret value.
pub const REDACTED: &str = "[REDACTED]";

/// A string that redacts itself in every output format and is zeroed on drop.
///
/// There is no `Deref`; callers go through [`SecretString::expose`] so that
/// every read of the raw value is visible at the call site.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Borrow the raw value.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Hand an owned copy to an API that needs one (e.g. transport credentials).
	///
	/// The copy is taken so that the wrapper's own buffer is still zeroed when it
	/// is dropped.
	pub fn into_inner(self) -> String {
		self.0.clone()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Drop for SecretString {
	fn drop(&mut self) {
		self.0.zeroize();
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("SecretString").field(&REDACTED).finish()
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

#[cfg(feature = "serde")]
mod serde_impl {
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use super::{SecretString, REDACTED};

	impl Serialize for SecretString {
		fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
			serializer.serialize_str(REDACTED)
		}
	}

	impl<'de> Deserialize<'de> for SecretString {
		fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
			String::deserialize(deserializer).map(SecretString)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn debug_and_display_are_redacted() {
		let secret = SecretString::new("relay-password");
		assert_eq!(format!("{secret:?}"), "SecretString(\"[REDACTED]\")");
		assert_eq!(format!("{secret}"), REDACTED);
	}

	#[test]
	fn option_debug_is_redacted() {
		let secret = Some(SecretString::new("relay-password"));
		let debug = format!("{secret:?}");
		assert!(!debug.contains("relay-password"));
		assert!(debug.contains(REDACTED));
	}

	#[test]
	fn expose_and_into_inner_return_value() {
		let secret = SecretString::new("relay-password");
		assert_eq!(secret.expose(), "relay-password");
		assert_eq!(secret.into_inner(), "relay-password");
	}

	#[test]
	fn empty_secret_reports_empty() {
		assert!(SecretString::new("").is_empty());
		assert!(!SecretString::new("x").is_empty());
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serialize_redacts_and_deserialize_reads_raw() {
		let json = serde_json::to_string(&SecretString::new("relay-password")).unwrap();
		assert_eq!(json, "\"[REDACTED]\"");

		let parsed: SecretString = serde_json::from_str("\"relay-password\"").unwrap();
		assert_eq!(parsed.expose(), "relay-password");
	}

	proptest! {
		#[test]
		fn formatted_output_never_contains_value(inner in "[a-zA-Z0-9!@#$%^&*_+=;:,.?/-]{3,40}") {
			prop_assume!(!inner.contains("REDACTED"));
			prop_assume!(!inner.contains("SecretString"));

			let secret = SecretString::new(inner.clone());
			let rendered = format!("{:?}", secret);
			prop_assert!(!rendered.contains(&inner));
			let rendered = format!("{}", secret);
			prop_assert!(!rendered.contains(&inner));
		}
	}
}
