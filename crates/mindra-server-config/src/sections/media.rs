// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Media asset location.

use std::path::PathBuf;

use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "/media";
const DEFAULT_DIR: &str = "./media";

/// Media configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct MediaConfig {
	/// Prefix joined onto every media reference, e.g. `/media` or a CDN origin.
	pub base_url: String,
	/// Directory served under `/media` by the server itself.
	pub dir: PathBuf,
}

impl Default for MediaConfig {
	fn default() -> Self {
		MediaConfigLayer::default().finalize()
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaConfigLayer {
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(default)]
	pub dir: Option<PathBuf>,
}

impl MediaConfigLayer {
	pub fn merge(&mut self, other: MediaConfigLayer) {
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.dir.is_some() {
			self.dir = other.dir;
		}
	}

	pub fn finalize(self) -> MediaConfig {
		MediaConfig {
			base_url: self
				.base_url
				.filter(|b| !b.trim().is_empty())
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			dir: self.dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DIR)),
		}
	}
}
