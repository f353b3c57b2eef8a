// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact form delivery settings.

use serde::Deserialize;

/// Where contact form notifications are delivered.
///
/// A missing recipient is not a startup error. Submissions fail with a relay
/// error until one is configured.
#[derive(Debug, Clone, Default)]
pub struct ContactConfig {
	pub recipient: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactConfigLayer {
	#[serde(default)]
	pub recipient: Option<String>,
}

impl ContactConfigLayer {
	pub fn merge(&mut self, other: ContactConfigLayer) {
		if other.recipient.is_some() {
			self.recipient = other.recipient;
		}
	}

	pub fn finalize(self) -> ContactConfig {
		ContactConfig {
			recipient: self
				.recipient
				.map(|r| r.trim().to_string())
				.filter(|r| !r.is_empty()),
		}
	}
}
