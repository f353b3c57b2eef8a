// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Ways a form can deliver its submission.

use async_trait::async_trait;

use crate::error::SubmitError;
use crate::service::ContactService;
use crate::submission::ContactSubmission;

/// Delivers one submission. Implementations issue exactly one request per call.
#[async_trait]
pub trait Submitter: Send + Sync {
	async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}

/// In-process delivery, used by the server's own form POST handlers.
#[async_trait]
impl Submitter for ContactService {
	async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
		ContactService::submit(self, submission)
			.await
			.map_err(SubmitError::from)
	}
}

/// Posts JSON to `{base_url}/api/contact`.
///
/// Any non-2xx answer is a failure; there is no retry and no timeout beyond
/// reqwest's defaults.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
	client: reqwest::Client,
	endpoint: String,
}

impl HttpSubmitter {
	pub fn new(base_url: &str) -> Result<Self, SubmitError> {
		let client = reqwest::Client::builder()
			.user_agent(concat!("mindra-site/", env!("CARGO_PKG_VERSION")))
			.build()
			.map_err(|e| SubmitError::Transport(e.to_string()))?;
		Ok(Self::with_client(client, base_url))
	}

	pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
		Self {
			client,
			endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
		}
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

#[async_trait]
impl Submitter for HttpSubmitter {
	#[tracing::instrument(name = "http_submit_contact", skip(self, submission), fields(endpoint = %self.endpoint))]
	async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
		let response = self
			.client
			.post(&self.endpoint)
			.json(submission)
			.send()
			.await
			.map_err(|e| SubmitError::Transport(e.to_string()))?;

		let status = response.status();
		if status.is_success() {
			Ok(())
		} else {
			tracing::debug!(status = status.as_u16(), "contact endpoint rejected submission");
			Err(SubmitError::Rejected(status.as_u16()))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ContactError;
	use mindra_server_smtp::testing::RecordingMailer;
	use std::sync::Arc;

	#[test]
	fn endpoint_joins_without_double_slash() {
		let submitter = HttpSubmitter::new("http://localhost:3000/").unwrap();
		assert_eq!(submitter.endpoint(), "http://localhost:3000/api/contact");
	}

	#[tokio::test]
	async fn unreachable_server_is_transport_error() {
		let submitter = HttpSubmitter::new("http://127.0.0.1:1").unwrap();
		let result = submitter
			.submit(&ContactSubmission::new("Ana", "ana@x.com"))
			.await;
		assert!(matches!(result, Err(SubmitError::Transport(_))));
	}

	#[tokio::test]
	async fn service_submitter_wraps_contact_errors() {
		let service = ContactService::new(
			Arc::new(RecordingMailer::new()),
			Some("igor@mindra.com".to_string()),
		);
		let submitter: &dyn Submitter = &service;
		let result = submitter.submit(&ContactSubmission::new("", "x")).await;
		assert!(matches!(
			result,
			Err(SubmitError::Contact(ContactError::Validation))
		));
	}
}
