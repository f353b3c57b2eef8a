// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Integration tests for the HTML pages and the read-only JSON API.

use std::sync::Arc;

use axum::{
	body::{to_bytes, Body},
	http::{
		header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
		Request, StatusCode,
	},
	response::Response,
	Router,
};
use mindra_server::{create_app_state_with_mailer, create_router, ServerConfig};
use mindra_server_smtp::testing::RecordingMailer;
use serde_json::Value;
use tower::ServiceExt;

fn app(mailer: Arc<RecordingMailer>) -> Router {
	let mut config = ServerConfig::default();
	config.contact.recipient = Some("bookings@mindra.com".to_string());
	create_router(create_app_state_with_mailer(&config, mailer))
}

async fn get(app: Router, uri: &str, cookie: Option<&str>) -> Response {
	let mut request = Request::builder().uri(uri);
	if let Some(cookie) = cookie {
		request = request.header(COOKIE, cookie);
	}
	app.oneshot(request.body(Body::empty()).unwrap()).await.unwrap()
}

async fn post_form(app: Router, uri: &str, body: &'static str) -> Response {
	app.oneshot(
		Request::builder()
			.method("POST")
			.uri(uri)
			.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
			.body(Body::from(body))
			.unwrap(),
	)
	.await
	.unwrap()
}

async fn text(response: Response) -> String {
	let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
	String::from_utf8(bytes.to_vec()).unwrap()
}

mod locale {
	use super::*;

	#[tokio::test]
	async fn default_locale_is_ukrainian() {
		let response = get(app(Arc::new(RecordingMailer::new())), "/", None).await;
		assert_eq!(response.status(), StatusCode::OK);
		assert!(response.headers().get(SET_COOKIE).is_none());
		let html = text(response).await;
		assert!(html.contains(r#"<html lang="uk">"#));
		assert!(html.contains("ЗАБРОНЮВАТИ"));
	}

	#[tokio::test]
	async fn query_switches_and_remembers_language() {
		let response = get(app(Arc::new(RecordingMailer::new())), "/?lang=en", None).await;
		let cookie = response
			.headers()
			.get(SET_COOKIE)
			.and_then(|v| v.to_str().ok())
			.unwrap()
			.to_string();
		assert!(cookie.starts_with("lang=en;"));
		assert!(text(response).await.contains("BOOK NOW"));
	}

	#[tokio::test]
	async fn cookie_is_respected_without_query() {
		let response = get(
			app(Arc::new(RecordingMailer::new())),
			"/contact",
			Some("theme=dark; lang=en"),
		)
		.await;
		assert!(response.headers().get(SET_COOKIE).is_none());
		assert!(text(response).await.contains("Get in Touch"));
	}

	#[tokio::test]
	async fn unknown_query_value_falls_back() {
		let response = get(app(Arc::new(RecordingMailer::new())), "/business?lang=de", None).await;
		assert!(response.headers().get(SET_COOKIE).is_none());
		assert!(text(response).await.contains(r#"<html lang="uk">"#));
	}
}

mod forms {
	use super::*;

	#[tokio::test]
	async fn booking_modal_opens_from_query() {
		let html = text(get(app(Arc::new(RecordingMailer::new())), "/?lang=en&book=1", None).await).await;
		assert!(html.contains(r#"role="dialog""#));
	}

	#[tokio::test]
	async fn modal_success_closes_after_delay() {
		let mailer = Arc::new(RecordingMailer::new());
		let response = post_form(app(mailer.clone()), "/?lang=en", "name=Ana&contact=%2B380670000000").await;
		assert_eq!(response.status(), StatusCode::OK);
		let html = text(response).await;
		assert!(html.contains("Message sent successfully!"));
		assert!(html.contains(r#"<meta http-equiv="refresh" content="2;url=/?lang=en">"#));
		assert_eq!(mailer.count(), 1);
		assert_eq!(mailer.sent()[0].subject, "New Contact Form Submission from Ana");
	}

	#[tokio::test]
	async fn missing_fields_send_nothing() {
		let mailer = Arc::new(RecordingMailer::new());
		let html = text(post_form(app(mailer.clone()), "/contact?lang=en", "name=Ana&date=").await).await;
		assert!(html.contains("Please fill in the required fields."));
		assert!(html.contains(r#"value="Ana""#));
		assert_eq!(mailer.count(), 0);
	}

	#[tokio::test]
	async fn contact_page_sends_date_as_contact() {
		let mailer = Arc::new(RecordingMailer::new());
		let html = text(
			post_form(
				app(mailer.clone()),
				"/contact?lang=en",
				"name=Ana&date=2025-06-14&eventType=Wedding&message=Hi",
			)
			.await,
		)
		.await;
		assert!(html.contains("form-status--success"));
		let sent = mailer.sent();
		assert_eq!(sent.len(), 1);
		assert!(sent[0].text.contains("Contact: 2025-06-14"));
	}

	#[tokio::test]
	async fn business_form_requires_message() {
		let mailer = Arc::new(RecordingMailer::new());
		let html = text(
			post_form(
				app(mailer.clone()),
				"/business/contact?lang=en",
				"name=Ana&date=2025-06-14&eventType=Business",
			)
			.await,
		)
		.await;
		assert!(html.contains("form-status--required"));
		assert_eq!(mailer.count(), 0);
	}

	#[tokio::test]
	async fn relay_failure_keeps_input() {
		let mailer = Arc::new(RecordingMailer::failing());
		let html = text(
			post_form(
				app(mailer),
				"/business/contact?lang=en",
				"name=Ana&date=2025-06-14&eventType=Business&message=Hello",
			)
			.await,
		)
		.await;
		assert!(html.contains("Failed to send message. Please try again."));
		assert!(html.contains(r#"value="Ana""#));
		assert!(html.contains(">Hello</textarea>"));
	}
}

mod portfolio {
	use super::*;

	#[tokio::test]
	async fn item_query_centres_project() {
		let html = text(
			get(
				app(Arc::new(RecordingMailer::new())),
				"/business/portfolio?lang=en&item=2",
				None,
			)
			.await,
		)
		.await;
		assert!(html.contains(r#"data-item="3""#));
		assert!(html.contains("Charity Gala Dinner"));
	}

	#[tokio::test]
	async fn catalog_json_resolves_media() {
		let response = get(app(Arc::new(RecordingMailer::new())), "/api/portfolio", None).await;
		assert_eq!(response.status(), StatusCode::OK);
		let json: Value = serde_json::from_str(&text(response).await).unwrap();
		let items = json.as_array().unwrap();
		assert_eq!(items.len(), 5);
		assert_eq!(items[0]["media_url"], "/media/videos/mate-academy.mp4");
	}
}

mod translations {
	use super::*;

	#[tokio::test]
	async fn english_bundle_is_served() {
		let response = get(app(Arc::new(RecordingMailer::new())), "/api/i18n/en", None).await;
		assert_eq!(response.status(), StatusCode::OK);
		let json: Value = serde_json::from_str(&text(response).await).unwrap();
		assert_eq!(json["home.book_now"], "BOOK NOW");
	}

	#[tokio::test]
	async fn unknown_locale_is_not_found() {
		let response = get(app(Arc::new(RecordingMailer::new())), "/api/i18n/de", None).await;
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
	}
}
