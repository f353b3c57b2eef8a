// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory mailer for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{Mailer, OutgoingEmail, SmtpError};

/// Records every message it is asked to send.
///
/// With `failing()` it records the attempt and then returns a send error.
#[derive(Debug, Default)]
pub struct RecordingMailer {
	sent: Mutex<Vec<OutgoingEmail>>,
	fail: bool,
}

impl RecordingMailer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn failing() -> Self {
		Self {
			sent: Mutex::new(Vec::new()),
			fail: true,
		}
	}

	pub fn sent(&self) -> Vec<OutgoingEmail> {
		self.sent.lock().map(|s| s.clone()).unwrap_or_default()
	}

	pub fn count(&self) -> usize {
		self.sent.lock().map(|s| s.len()).unwrap_or_default()
	}
}

#[async_trait]
impl Mailer for RecordingMailer {
	async fn send(&self, email: &OutgoingEmail) -> Result<(), SmtpError> {
		if let Ok(mut sent) = self.sent.lock() {
			sent.push(email.clone());
		}
		if self.fail {
			return Err(SmtpError::Send("connection reset by relay".to_string()));
		}
		Ok(())
	}
}
