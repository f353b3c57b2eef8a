// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact form handling for the Mindra site.
//!
//! Server side, [`ContactService`] validates a [`ContactSubmission`], renders
//! the notification email and hands it to a [`Mailer`](mindra_server_smtp::Mailer).
//!
//! Client side, [`ContactForm`] holds one of the three form variants and walks
//! it through `Idle -> Submitting -> Success | Error`, sending through any
//! [`Submitter`]: the service itself, or [`HttpSubmitter`] against
//! `POST /api/contact`.

mod client;
mod error;
mod form;
pub mod render;
mod service;
mod submission;

pub use client::{HttpSubmitter, Submitter};
pub use error::{ContactError, SubmitError};
pub use form::{ContactForm, Field, FormFields, FormKind, FormStatus, MODAL_CLOSE_DELAY};
pub use service::ContactService;
pub use submission::ContactSubmission;
