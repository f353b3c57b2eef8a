// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections for mindra-server.

pub mod contact;
pub mod http;
pub mod logging;
pub mod media;
pub mod smtp;

pub use contact::{ContactConfig, ContactConfigLayer};
pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use media::{MediaConfig, MediaConfigLayer};
pub use smtp::{SmtpConfig, SmtpConfigLayer, TlsMode};
