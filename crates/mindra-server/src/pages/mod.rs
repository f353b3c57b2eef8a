// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server-rendered pages.
//!
//! Every view takes the request's [`LocaleContext`] explicitly and reads its
//! strings from the context's bundle. Anything that did not come from a
//! bundle or the static catalog is escaped.

pub mod business;
pub mod contact;
pub mod form;
pub mod home;
pub mod portfolio;

use mindra_common_i18n::{LocaleContext, LOCALES};
pub use mindra_server_contact::render::escape_html as escape;

pub const CONTACT_EMAIL: &str = "hello@mindra.com";
pub const INSTAGRAM_URL: &str = "https://ig.me/m/grubngodeliveryigormindra";
pub const TELEGRAM_URL: &str = "https://t.me/igormindra";

/// Link to `path` in the context's language.
pub fn href(ctx: &LocaleContext, path: &str) -> String {
	format!("{path}?lang={}", ctx.language())
}

/// `UA / EN` switcher. Each link points at the current path.
pub fn language_switcher(ctx: &LocaleContext, path: &str) -> String {
	let links: Vec<String> = LOCALES
		.iter()
		.map(|info| {
			let current = if info.locale == ctx.language() {
				r#" aria-current="true" class="lang lang--active""#
			} else {
				r#" class="lang""#
			};
			format!(
				r#"<a href="{path}?lang={code}" hreflang="{code}" title="{native}"{current}>{label}</a>"#,
				code = info.locale.code(),
				native = info.native_name,
				label = info.label,
			)
		})
		.collect();
	format!(
		r#"<nav class="language-switcher">{}</nav>"#,
		links.join(r#"<span class="lang-sep">/</span>"#)
	)
}

/// Instagram and Telegram buttons.
pub fn social_links() -> String {
	format!(
		r#"<div class="social">
    <a href="{INSTAGRAM_URL}" target="_blank" rel="noopener noreferrer" aria-label="Instagram">IG</a>
    <a href="{TELEGRAM_URL}" target="_blank" rel="noopener noreferrer" aria-label="Telegram">TG</a>
</div>"#
	)
}

/// Wrap `body` in the document shell.
pub fn layout(ctx: &LocaleContext, title: &str, extra_head: &str, body: &str) -> String {
	let lang = ctx.language().code();
	let title = escape(title);
	format!(
		r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
{extra_head}</head>
<body>
{body}
</body>
</html>"#
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use mindra_common_i18n::Locale;

	#[test]
	fn switcher_marks_active_locale() {
		let ctx = LocaleContext::new(Locale::En);
		let html = language_switcher(&ctx, "/contact");
		assert!(html.contains(r#"href="/contact?lang=uk""#));
		assert!(html.contains(r#"aria-current="true" class="lang lang--active">EN</a>"#));
		assert!(html.contains(">UA</a>"));
		assert!(html.find(">UA<").unwrap() < html.find(">EN<").unwrap());
	}

	#[test]
	fn layout_sets_lang_attribute() {
		let html = layout(&LocaleContext::new(Locale::Uk), "Mindra", "", "<main></main>");
		assert!(html.starts_with("<!DOCTYPE html>"));
		assert!(html.contains(r#"<html lang="uk">"#));
	}

	#[test]
	fn href_carries_locale() {
		assert_eq!(href(&LocaleContext::new(Locale::En), "/business"), "/business?lang=en");
	}
}
