// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Mindra site server.
//!
//! Serves the localized pages, handles the three contact forms, relays
//! contact submissions by email and exposes a small JSON API for the
//! portfolio catalog and translations.

pub mod api;
pub mod error;
pub mod health;
pub mod i18n;
pub mod pages;
pub mod routes;
pub mod version;

pub use api::{create_app_state, create_app_state_with_mailer, create_router, AppState};
pub use error::ServerError;
pub use mindra_server_config::ServerConfig;
