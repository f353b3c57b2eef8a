// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Notification email rendering.

use std::fmt::Write;

use mindra_server_smtp::OutgoingEmail;

use crate::submission::ContactSubmission;

const HEADING: &str = "New Contact Form Submission";
const FOOTER: &str = "Sent from Mindra Website Contact Form";

pub fn subject(submission: &ContactSubmission) -> String {
	format!("{HEADING} from {}", submission.name)
}

/// HTML body. Optional fields only appear when they have content.
pub fn html_body(submission: &ContactSubmission) -> String {
	let mut html = String::with_capacity(512);
	let _ = writeln!(html, "<h2>{HEADING}</h2>");
	let _ = writeln!(
		html,
		"<p><strong>Name:</strong> {}</p>",
		escape_html(&submission.name)
	);
	let _ = writeln!(
		html,
		"<p><strong>Contact:</strong> {}</p>",
		escape_html(&submission.contact)
	);
	if let Some(event_type) = submission.event_type() {
		let _ = writeln!(
			html,
			"<p><strong>Event Type:</strong> {}</p>",
			escape_html(event_type)
		);
	}
	if let Some(date) = submission.date() {
		let _ = writeln!(html, "<p><strong>Date:</strong> {}</p>", escape_html(date));
	}
	if let Some(message) = submission.message() {
		let body = escape_html(message).replace("\r\n", "\n").replace('\n', "<br>");
		let _ = writeln!(html, "<p><strong>Message:</strong></p><p>{body}</p>");
	}
	let _ = writeln!(html, "<hr>");
	let _ = writeln!(html, "<p><small>{FOOTER}</small></p>");
	html
}

/// Plain-text alternative carrying the same fields.
pub fn text_body(submission: &ContactSubmission) -> String {
	let mut text = String::with_capacity(256);
	let _ = writeln!(text, "{HEADING}\n");
	let _ = writeln!(text, "Name: {}", submission.name);
	let _ = writeln!(text, "Contact: {}", submission.contact);
	if let Some(event_type) = submission.event_type() {
		let _ = writeln!(text, "Event Type: {event_type}");
	}
	if let Some(date) = submission.date() {
		let _ = writeln!(text, "Date: {date}");
	}
	if let Some(message) = submission.message() {
		let _ = writeln!(text, "Message:\n{message}");
	}
	let _ = writeln!(text, "\n--\n{FOOTER}");
	text
}

pub fn render_email(submission: &ContactSubmission, to: &str) -> OutgoingEmail {
	OutgoingEmail {
		to: to.to_string(),
		subject: subject(submission),
		html: html_body(submission),
		text: text_body(submission),
	}
}

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	out
}
