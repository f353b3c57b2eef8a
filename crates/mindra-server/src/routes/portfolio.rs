// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::{extract::State, Json};
use mindra_portfolio::{portfolio, ResolvedPortfolioItem};

use crate::api::AppState;

/// GET /api/portfolio - Catalog with media URLs resolved against the media base.
pub async fn list_portfolio(State(state): State<AppState>) -> Json<Vec<ResolvedPortfolioItem>> {
	let items = portfolio()
		.iter()
		.map(|item| item.resolve(&state.media.base_url))
		.collect();
	Json(items)
}
