// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::locale::{Locale, DEFAULT_LOCALE};

/// Resolve the effective locale for a request.
///
/// Resolution order (highest to lowest priority):
/// 1. The locale the visitor asked for (query parameter or cookie), if valid
/// 2. The server's configured default, if valid
/// 3. Ukrainian
///
/// ```
/// use mindra_common_i18n::{resolve_locale, Locale};
///
/// assert_eq!(resolve_locale(Some("en"), "uk"), Locale::En);
/// assert_eq!(resolve_locale(None, "en"), Locale::En);
/// assert_eq!(resolve_locale(Some("fr"), "de"), Locale::Uk);
/// ```
pub fn resolve_locale(requested: Option<&str>, server_default: &str) -> Locale {
	requested
		.and_then(Locale::parse)
		.or_else(|| Locale::parse(server_default))
		.unwrap_or(DEFAULT_LOCALE)
}
