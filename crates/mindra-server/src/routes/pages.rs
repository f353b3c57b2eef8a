// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTML page handlers.
//!
//! Every page resolves its locale per request. Form pages accept a
//! URL-encoded POST of the same fields, submit in-process through the
//! contact service and re-render with the outcome banner.

use axum::{
	extract::{Query, State},
	http::HeaderMap,
	response::{Html, IntoResponse, Response},
	Form,
};
use mindra_server_contact::{ContactForm, FormFields, FormKind};
use serde::Deserialize;

use crate::{
	api::AppState,
	i18n::{resolve_request_locale, LangQuery, RequestLocale},
	pages::{business as business_page, contact as contact_page, home as home_page, portfolio as portfolio_page},
};

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
	pub lang: Option<String>,
	/// Opens the booking modal when present.
	pub book: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PortfolioQuery {
	pub lang: Option<String>,
	/// Original index of the item to centre.
	pub item: Option<usize>,
}

fn locale_for(state: &AppState, lang: Option<&str>, headers: &HeaderMap) -> RequestLocale {
	resolve_request_locale(lang, headers, &state.default_locale)
}

fn page(locale: &RequestLocale, body: String) -> Response {
	(locale.response_headers(), Html(body)).into_response()
}

async fn submit_form(state: &AppState, kind: FormKind, fields: FormFields) -> ContactForm {
	let mut form = ContactForm::with_fields(kind, fields);
	// The outcome is recorded on the form and rendered as its banner.
	let _ = form.submit(&state.contact).await;
	form
}

/// GET / - Landing page, with the booking modal when `book` is set.
pub async fn home(
	State(state): State<AppState>,
	Query(query): Query<HomeQuery>,
	headers: HeaderMap,
) -> Response {
	let locale = locale_for(&state, query.lang.as_deref(), &headers);
	let modal = query.book.map(|_| ContactForm::new(FormKind::HomeModal));
	let body = home_page::render_home(&locale.context, &state.media.base_url, modal.as_ref());
	page(&locale, body)
}

/// POST / - Booking modal submission.
pub async fn home_submit(
	State(state): State<AppState>,
	Query(query): Query<LangQuery>,
	headers: HeaderMap,
	Form(fields): Form<FormFields>,
) -> Response {
	let locale = locale_for(&state, query.lang.as_deref(), &headers);
	let form = submit_form(&state, FormKind::HomeModal, fields).await;
	let body = home_page::render_home(&locale.context, &state.media.base_url, Some(&form));
	page(&locale, body)
}

/// GET /contact
pub async fn contact(
	State(state): State<AppState>,
	Query(query): Query<LangQuery>,
	headers: HeaderMap,
) -> Response {
	let locale = locale_for(&state, query.lang.as_deref(), &headers);
	let form = ContactForm::new(FormKind::ContactPage);
	page(&locale, contact_page::render_contact(&locale.context, &form))
}

/// POST /contact
pub async fn contact_submit(
	State(state): State<AppState>,
	Query(query): Query<LangQuery>,
	headers: HeaderMap,
	Form(fields): Form<FormFields>,
) -> Response {
	let locale = locale_for(&state, query.lang.as_deref(), &headers);
	let form = submit_form(&state, FormKind::ContactPage, fields).await;
	page(&locale, contact_page::render_contact(&locale.context, &form))
}

/// GET /business
pub async fn business(
	State(state): State<AppState>,
	Query(query): Query<LangQuery>,
	headers: HeaderMap,
) -> Response {
	let locale = locale_for(&state, query.lang.as_deref(), &headers);
	page(
		&locale,
		business_page::render_business_home(&locale.context, &state.media.base_url),
	)
}

/// GET /business/portfolio - Carousel page, centred on `item` when given.
pub async fn portfolio(
	State(state): State<AppState>,
	Query(query): Query<PortfolioQuery>,
	headers: HeaderMap,
) -> Response {
	let locale = locale_for(&state, query.lang.as_deref(), &headers);
	page(
		&locale,
		portfolio_page::render_portfolio(&locale.context, &state.media.base_url, query.item),
	)
}

/// GET /business/contact
pub async fn business_contact(
	State(state): State<AppState>,
	Query(query): Query<LangQuery>,
	headers: HeaderMap,
) -> Response {
	let locale = locale_for(&state, query.lang.as_deref(), &headers);
	let form = ContactForm::new(FormKind::BusinessContact);
	page(&locale, business_page::render_business_contact(&locale.context, &form))
}

/// POST /business/contact
pub async fn business_contact_submit(
	State(state): State<AppState>,
	Query(query): Query<LangQuery>,
	headers: HeaderMap,
	Form(fields): Form<FormFields>,
) -> Response {
	let locale = locale_for(&state, query.lang.as_deref(), &headers);
	let form = submit_form(&state, FormKind::BusinessContact, fields).await;
	page(&locale, business_page::render_business_contact(&locale.context, &form))
}
