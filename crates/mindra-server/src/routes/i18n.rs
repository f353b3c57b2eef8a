// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::BTreeMap;

use axum::{extract::Path, Json};
use mindra_common_i18n::{entries, Locale};

use crate::error::ServerError;

/// GET /api/i18n/{locale} - Flat `key -> string` map for one locale.
pub async fn get_translations(
	Path(locale): Path<String>,
) -> Result<Json<BTreeMap<String, &'static str>>, ServerError> {
	let locale = Locale::parse(&locale)
		.ok_or_else(|| ServerError::NotFound(format!("unsupported locale: {locale}")))?;
	Ok(Json(entries(locale).into_iter().collect()))
}
