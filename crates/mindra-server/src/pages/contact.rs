// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use mindra_common_i18n::LocaleContext;
use mindra_server_contact::ContactForm;

use super::{escape, form::render_form, href, language_switcher, layout, social_links, CONTACT_EMAIL};

/// General contact page.
pub fn render_contact(ctx: &LocaleContext, form: &ContactForm) -> String {
	let c = &ctx.translations().contact;
	let title: String = c
		.title
		.iter()
		.map(|line| format!(r#"<span class="line">{}</span>"#, escape(line)))
		.collect();

	let body = format!(
		r#"<main class="contact">
    <header>
        <a class="back" href="{back_href}">{back}</a>
        {switcher}
    </header>
    <section class="contact-info">
        <h1>{title}</h1>
        <div class="email">
            <span class="label">{email_label}</span>
            <a href="mailto:{CONTACT_EMAIL}">{CONTACT_EMAIL}</a>
        </div>
        {social}
    </section>
    <section class="contact-form-section">
{form}
    </section>
</main>"#,
		back_href = href(ctx, "/"),
		back = escape(c.back),
		switcher = language_switcher(ctx, "/contact"),
		email_label = escape(c.email_label),
		social = social_links(),
		form = render_form(ctx, form, &href(ctx, "/contact")),
	);

	layout(ctx, &c.title.join(" "), "", &body)
}

#[cfg(test)]
mod tests {
	use super::*;
	use mindra_common_i18n::Locale;
	use mindra_server_contact::FormKind;

	#[test]
	fn renders_full_page_form() {
		let html = render_contact(&LocaleContext::new(Locale::En), &ContactForm::new(FormKind::ContactPage));
		assert!(html.contains("<title>Get in Touch</title>"));
		assert!(html.contains(r#"placeholder="Details...""#));
		assert!(html.contains(r#"<option value="Party">Party</option>"#));
		assert!(html.contains("mailto:hello@mindra.com"));
		assert!(html.contains(r#"action="/contact?lang=en""#));
	}

	#[test]
	fn ukrainian_title_is_escaped() {
		let html = render_contact(&LocaleContext::new(Locale::Uk), &ContactForm::new(FormKind::ContactPage));
		assert!(html.contains("Зв&#39;яжіться з нами"));
		assert!(html.contains("НАДІСЛАТИ ЗАПИТ"));
	}
}
