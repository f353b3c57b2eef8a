// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Business sub-site: home, contact and the shared navigation bar.

use mindra_common_i18n::LocaleContext;
use mindra_portfolio::resolve_media_url;
use mindra_server_contact::ContactForm;

use super::{escape, form::render_form, href, language_switcher, layout};

const CORPORATE_IMAGE: &str = "images/corporate-host.jpg";

/// Navigation bar shared by every business page. `current` is the page's path.
pub fn business_nav(ctx: &LocaleContext, current: &str) -> String {
	let t = &ctx.translations().business;
	let links = [
		("/business", t.nav.home),
		("/business/portfolio", t.nav.portfolio),
		("/business/contact", t.nav.contact),
	];
	let items: String = links
		.iter()
		.map(|(path, label)| {
			let active = if *path == current {
				r#" aria-current="page""#
			} else {
				""
			};
			format!(
				r#"<a href="{}"{active}>{}</a>"#,
				href(ctx, path),
				escape(label)
			)
		})
		.collect();

	format!(
		r#"<header class="business-nav">
    <a class="brand" href="{home}">MINDRA <span>{suffix}</span></a>
    <nav>{items}</nav>
    {switcher}
</header>"#,
		home = href(ctx, "/business"),
		suffix = escape(t.brand_suffix),
		switcher = language_switcher(ctx, current),
	)
}

pub fn render_business_home(ctx: &LocaleContext, media_base: &str) -> String {
	let home = &ctx.translations().business.home;
	let title: String = home
		.title
		.iter()
		.map(|line| format!(r#"<span class="line">{}</span>"#, escape(line)))
		.collect();

	let body = format!(
		r#"{nav}
<main class="business-home">
    <section>
        <h1>{title}</h1>
        <p class="lead">{lead}</p>
        <div class="actions">
            <a class="primary" href="{contact_href}">{request}</a>
            <a class="secondary" href="{portfolio_href}">{view}</a>
        </div>
    </section>
    <figure>
        <img src="{image}" alt="Mindra">
    </figure>
</main>"#,
		nav = business_nav(ctx, "/business"),
		lead = escape(home.lead),
		contact_href = href(ctx, "/business/contact"),
		request = escape(home.request_proposal),
		portfolio_href = href(ctx, "/business/portfolio"),
		view = escape(home.view_portfolio),
		image = escape(&resolve_media_url(media_base, CORPORATE_IMAGE)),
	);

	layout(ctx, &home.title.join(" "), "", &body)
}

pub fn render_business_contact(ctx: &LocaleContext, form: &ContactForm) -> String {
	let c = &ctx.translations().business.contact;
	let benefits: String = c
		.benefits
		.iter()
		.map(|b| {
			format!(
				"            <li><h3>{}</h3><p>{}</p></li>\n",
				escape(b.title),
				escape(b.body)
			)
		})
		.collect();

	let body = format!(
		r#"{nav}
<main class="business-contact">
    <section>
        <h1>{title}</h1>
{form}
    </section>
    <aside>
        <h2>{why}</h2>
        <ul>
{benefits}        </ul>
    </aside>
</main>"#,
		nav = business_nav(ctx, "/business/contact"),
		title = escape(c.title),
		form = render_form(ctx, form, &href(ctx, "/business/contact")),
		why = escape(c.why_title),
	);

	layout(ctx, c.title, "", &body)
}

#[cfg(test)]
mod tests {
	use super::*;
	use mindra_common_i18n::Locale;
	use mindra_server_contact::FormKind;

	#[test]
	fn nav_marks_current_page() {
		let html = business_nav(&LocaleContext::new(Locale::En), "/business/portfolio");
		assert!(html.contains(r#"<a href="/business/portfolio?lang=en" aria-current="page">Portfolio</a>"#));
		assert!(html.contains(r#"<a href="/business?lang=en">Home</a>"#));
	}

	#[test]
	fn home_links_to_contact_and_portfolio() {
		let html = render_business_home(&LocaleContext::new(Locale::En), "/media");
		assert!(html.contains("Elevate Your"));
		assert!(html.contains(r#"href="/business/contact?lang=en">Request Proposal"#));
		assert!(html.contains("/media/images/corporate-host.jpg"));
	}

	#[test]
	fn contact_lists_every_benefit() {
		let ctx = LocaleContext::new(Locale::Uk);
		let html = render_business_contact(&ctx, &ContactForm::new(FormKind::BusinessContact));
		for benefit in ctx.translations().business.contact.benefits {
			assert!(html.contains(&escape(benefit.title)));
		}
		assert!(html.contains("Чому обрати нас?"));
	}
}
