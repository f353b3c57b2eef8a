// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact form markup for all three variants.

use mindra_common_i18n::{Bundle, LocaleContext};
use mindra_server_contact::{ContactForm, Field, FormKind, FormStatus};

use super::escape;

/// Values the business form submits for each event type.
const BUSINESS_EVENT_TYPES: [&str; 4] = ["Party", "Business", "Wedding", "Other"];

/// Render `form`, posting back to `action`.
pub fn render_form(ctx: &LocaleContext, form: &ContactForm, action: &str) -> String {
	let t = ctx.translations();
	let fields = match form.kind() {
		FormKind::HomeModal => modal_fields(t, form),
		FormKind::ContactPage => contact_page_fields(t, form),
		FormKind::BusinessContact => business_fields(t, form),
	};
	let button = match form.kind() {
		FormKind::HomeModal => t.modal.send_button,
		FormKind::ContactPage => t.contact.form.send_button,
		FormKind::BusinessContact => t.business.contact.send_button,
	};
	let button = if form.status() == FormStatus::Submitting {
		t.status.sending
	} else {
		button
	};
	let disabled = disabled_attr(form);

	format!(
		r#"<form class="contact-form" method="post" action="{action}">
{fields}{banner}    <button type="submit"{disabled}>{button}</button>
</form>"#,
		action = escape(action),
		banner = status_banner(t, form),
		button = escape(button),
	)
}

fn status_banner(t: &'static Bundle, form: &ContactForm) -> String {
	let Some(text) = form.banner(t) else {
		return String::new();
	};
	let modifier = match form.status() {
		FormStatus::Success => "success",
		FormStatus::Error => "error",
		_ => "required",
	};
	format!(
		"    <p class=\"form-status form-status--{modifier}\" role=\"status\">{}</p>\n",
		escape(text)
	)
}

fn disabled_attr(form: &ContactForm) -> &'static str {
	if form.inputs_disabled() {
		" disabled"
	} else {
		""
	}
}

fn invalid_attr(form: &ContactForm, field: Field) -> &'static str {
	if form.missing().contains(&field) {
		r#" aria-invalid="true""#
	} else {
		""
	}
}

fn required_attr(form: &ContactForm, field: Field) -> &'static str {
	if form.kind().required().contains(&field) {
		" required"
	} else {
		""
	}
}

fn text_input(form: &ContactForm, field: Field, label: Option<&str>, placeholder: &str) -> String {
	let key = field.key();
	let label = label
		.map(|l| format!("        <label for=\"{key}\">{}</label>\n", escape(l)))
		.unwrap_or_default();
	format!(
		r#"    <div class="field">
{label}        <input type="text" id="{key}" name="{key}" value="{value}" placeholder="{placeholder}"{required}{invalid}{disabled}>
    </div>
"#,
		value = escape(form.fields().get(field)),
		placeholder = escape(placeholder),
		required = required_attr(form, field),
		invalid = invalid_attr(form, field),
		disabled = disabled_attr(form),
	)
}

fn textarea(form: &ContactForm, label: Option<&str>, placeholder: &str) -> String {
	let field = Field::Message;
	let key = field.key();
	let label = label
		.map(|l| format!("        <label for=\"{key}\">{}</label>\n", escape(l)))
		.unwrap_or_default();
	format!(
		r#"    <div class="field">
{label}        <textarea id="{key}" name="{key}" rows="4" placeholder="{placeholder}"{required}{invalid}{disabled}>{value}</textarea>
    </div>
"#,
		value = escape(form.fields().get(field)),
		placeholder = escape(placeholder),
		required = required_attr(form, field),
		invalid = invalid_attr(form, field),
		disabled = disabled_attr(form),
	)
}

/// `options` are `(value, label)` pairs; the first entry is the disabled prompt.
fn select(form: &ContactForm, label: Option<&str>, prompt: &str, options: &[(&str, &str)]) -> String {
	let field = Field::EventType;
	let key = field.key();
	let current = form.fields().get(field);
	let label = label
		.map(|l| format!("        <label for=\"{key}\">{}</label>\n", escape(l)))
		.unwrap_or_default();

	let mut rendered = format!(
		"            <option value=\"\"{}>{}</option>\n",
		if current.is_empty() { " selected" } else { "" },
		escape(prompt)
	);
	for (value, text) in options {
		rendered.push_str(&format!(
			"            <option value=\"{}\"{}>{}</option>\n",
			escape(value),
			if current == *value { " selected" } else { "" },
			escape(text)
		));
	}

	format!(
		r#"    <div class="field">
{label}        <select id="{key}" name="{key}"{disabled}>
{rendered}        </select>
    </div>
"#,
		disabled = disabled_attr(form),
	)
}

fn modal_fields(t: &'static Bundle, form: &ContactForm) -> String {
	let m = &t.modal;
	let mut out = text_input(form, Field::Name, Some(m.name_label), m.name_placeholder);
	out.push_str(&text_input(
		form,
		Field::Contact,
		Some(m.contact_label),
		m.contact_placeholder,
	));
	out
}

fn contact_page_fields(t: &'static Bundle, form: &ContactForm) -> String {
	let f = &t.contact.form;
	let types = [
		(f.types.party, f.types.party),
		(f.types.business, f.types.business),
		(f.types.wedding, f.types.wedding),
		(f.types.other, f.types.other),
	];
	let mut out = text_input(form, Field::Name, None, f.name_placeholder);
	out.push_str(&text_input(form, Field::Date, None, f.date_placeholder));
	out.push_str(&select(form, None, f.types.default, &types));
	out.push_str(&textarea(form, None, f.details_placeholder));
	out
}

fn business_fields(t: &'static Bundle, form: &ContactForm) -> String {
	let c = &t.business.contact;
	let labels = &t.contact.form.types;
	let types: Vec<(&str, &str)> = BUSINESS_EVENT_TYPES
		.into_iter()
		.zip([labels.party, labels.business, labels.wedding, labels.other])
		.collect();
	let mut out = text_input(form, Field::Name, Some(c.name_label), c.name_placeholder);
	out.push_str(&text_input(form, Field::Date, Some(c.date_label), c.date_placeholder));
	out.push_str(&select(form, Some(c.type_label), c.type_placeholder, &types));
	out.push_str(&textarea(form, Some(c.message_label), c.message_placeholder));
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use mindra_common_i18n::Locale;
	use mindra_server_contact::FormFields;

	fn en() -> LocaleContext {
		LocaleContext::new(Locale::En)
	}

	#[test]
	fn modal_has_name_and_contact() {
		let html = render_form(&en(), &ContactForm::new(FormKind::HomeModal), "/");
		assert!(html.contains(r#"name="name""#));
		assert!(html.contains(r#"name="contact""#));
		assert!(!html.contains(r#"name="date""#));
		assert!(html.contains("SEND REQUEST"));
	}

	#[test]
	fn business_form_posts_english_event_types() {
		let html = render_form(&en(), &ContactForm::new(FormKind::BusinessContact), "/business/contact");
		assert!(html.contains(r#"<option value="Wedding">Wedding</option>"#));
		assert!(html.contains(r#"name="eventType""#));
		assert!(html.contains("<textarea"));
	}

	#[test]
	fn ukrainian_business_form_shows_localized_labels() {
		let ctx = LocaleContext::new(Locale::Uk);
		let html = render_form(&ctx, &ContactForm::new(FormKind::BusinessContact), "/business/contact");
		assert!(html.contains(r#"<option value="Wedding">Весілля</option>"#));
		assert!(html.contains("Відправити"));
	}

	#[test]
	fn values_are_escaped_and_kept() {
		let fields = FormFields {
			name: "<b>Ana</b>".to_string(),
			..FormFields::default()
		};
		let form = ContactForm::with_fields(FormKind::ContactPage, fields);
		let html = render_form(&en(), &form, "/contact");
		assert!(html.contains(r#"value="&lt;b&gt;Ana&lt;/b&gt;""#));
		assert!(!html.contains("<b>Ana"));
	}

	#[test]
	fn missing_fields_show_required_banner() {
		let mut form = ContactForm::new(FormKind::HomeModal);
		form.set(Field::Name, "Ana");
		assert!(form.begin_submit().is_err());
		let html = render_form(&en(), &form, "/");
		assert!(html.contains("Please fill in the required fields."));
		assert!(html.contains("form-status--required"));
		let contact_input = html
			.lines()
			.find(|l| l.contains(r#"name="contact""#))
			.unwrap();
		assert!(contact_input.contains(r#"aria-invalid="true""#));
	}

	#[test]
	fn selected_event_type_is_preserved() {
		let fields = FormFields {
			event_type: "Business".to_string(),
			..FormFields::default()
		};
		let form = ContactForm::with_fields(FormKind::BusinessContact, fields);
		let html = render_form(&en(), &form, "/business/contact");
		assert!(html.contains(r#"<option value="Business" selected>"#));
		assert!(!html.contains(r#"<option value="" selected>"#));
	}
}
