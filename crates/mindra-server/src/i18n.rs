// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-request locale resolution.
//!
//! A `lang` query parameter wins and is remembered in a `lang` cookie; without
//! one the cookie is used; without either the server default applies.

use axum::http::{
	header::{COOKIE, SET_COOKIE},
	HeaderMap, HeaderValue,
};
use mindra_common_i18n::{resolve_locale, Locale, LocaleContext};
use serde::Deserialize;

/// Name of the query parameter and cookie carrying the locale.
pub const LANG_COOKIE: &str = "lang";

const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Query string accepted by every page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LangQuery {
	pub lang: Option<String>,
}

/// Locale chosen for one request.
#[derive(Debug, Clone, Copy)]
pub struct RequestLocale {
	pub context: LocaleContext,
	/// Set when the request explicitly switched language.
	pub remember: bool,
}

impl RequestLocale {
	pub fn locale(&self) -> Locale {
		self.context.language()
	}

	/// Headers to attach to the response.
	pub fn response_headers(&self) -> HeaderMap {
		let mut headers = HeaderMap::new();
		if self.remember {
			if let Ok(value) = HeaderValue::from_str(&lang_cookie(self.locale())) {
				headers.insert(SET_COOKIE, value);
			}
		}
		headers
	}
}

/// Resolve the locale from the query string, then the cookie, then the default.
pub fn resolve_request_locale(
	query: Option<&str>,
	headers: &HeaderMap,
	default_locale: &str,
) -> RequestLocale {
	if let Some(locale) = query.and_then(Locale::parse) {
		return RequestLocale {
			context: LocaleContext::new(locale),
			remember: true,
		};
	}

	let cookie = extract_cookie(headers, LANG_COOKIE);
	RequestLocale {
		context: LocaleContext::new(resolve_locale(cookie.as_deref(), default_locale)),
		remember: false,
	}
}

/// Extract a cookie value by name.
pub fn extract_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
	headers
		.get(COOKIE)?
		.to_str()
		.ok()?
		.split(';')
		.find_map(|cookie| {
			let (name, value) = cookie.trim().split_once('=')?;
			if name == cookie_name {
				Some(value.to_string())
			} else {
				None
			}
		})
}

fn lang_cookie(locale: Locale) -> String {
	format!("{LANG_COOKIE}={locale}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax")
}
