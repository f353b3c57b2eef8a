// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Landing page: hero, reel, navigation and the booking modal.

use mindra_common_i18n::LocaleContext;
use mindra_portfolio::{resolve_media_url, Player, LANDING_REEL};
use mindra_server_contact::{ContactForm, FormStatus};

use super::{escape, form::render_form, href, language_switcher, layout, social_links};

const HERO_IMAGE: &str = "images/hero-bg.jpg";

/// Render the landing page. `modal` is `Some` when the booking modal is open.
pub fn render_home(ctx: &LocaleContext, media_base: &str, modal: Option<&ContactForm>) -> String {
	let t = ctx.translations();
	let home = &t.home;

	let title: String = home
		.title
		.iter()
		.map(|line| format!(r#"<span class="line">{}</span>"#, escape(line)))
		.collect();

	let modal_html = modal.map(|form| render_modal(ctx, form)).unwrap_or_default();

	// The modal closes itself after a successful send.
	let extra_head = modal
		.filter(|form| form.status() == FormStatus::Success)
		.and_then(|form| form.kind().close_delay())
		.map(|delay| {
			format!(
				"    <meta http-equiv=\"refresh\" content=\"{};url={}\">\n",
				delay.as_secs(),
				href(ctx, "/")
			)
		})
		.unwrap_or_default();

	let body = format!(
		r#"<main class="home">
    <section class="hero">
        <header>
            <span class="est">{est}</span>
            {switcher}
        </header>
        <h1>{title}</h1>
        {reel}
        <div class="actions">
            <a class="book-now" href="{book_href}#book">{book_now}</a>
            {social}
        </div>
    </section>
    <figure class="hero-visual">
        <img src="{hero}" alt="Mindra Host">
    </figure>
    <nav class="dock">
        <a href="{contact_href}">{contact}</a>
    </nav>
{modal_html}</main>"#,
		est = escape(home.est),
		switcher = language_switcher(ctx, "/"),
		reel = render_reel(ctx, media_base),
		book_href = escape(&format!("{}&book=1", href(ctx, "/"))),
		book_now = escape(home.book_now),
		social = social_links(),
		hero = escape(&resolve_media_url(media_base, HERO_IMAGE)),
		contact_href = href(ctx, "/contact"),
		contact = escape(home.nav.contact),
	);

	layout(ctx, "Mindra", &extra_head, &body)
}

/// Autoplaying muted reel with mute and restart controls.
fn render_reel(ctx: &LocaleContext, media_base: &str) -> String {
	let labels = &ctx.translations().business.portfolio;
	let player = Player::reel();
	let mute_label = if player.is_muted() {
		labels.unmute
	} else {
		labels.mute
	};
	let flags = format!(
		"{}{} loop playsinline",
		if player.is_playing() { " autoplay" } else { "" },
		if player.is_muted() { " muted" } else { "" },
	);
	format!(
		r#"<div class="reel" data-playing="{playing}">
            <video src="{src}"{flags} aria-label="{play_reel}"></video>
            <div class="reel-controls">
                <button type="button" data-action="mute" title="{mute}">{mute}</button>
                <button type="button" data-action="restart" title="{restart}">{restart}</button>
            </div>
        </div>"#,
		playing = player.is_playing(),
		src = escape(&resolve_media_url(media_base, LANDING_REEL)),
		play_reel = escape(ctx.translations().home.play_reel),
		mute = escape(mute_label),
		restart = escape(labels.restart),
	)
}

fn render_modal(ctx: &LocaleContext, form: &ContactForm) -> String {
	let m = &ctx.translations().modal;
	format!(
		r#"    <div class="modal" id="book" role="dialog" aria-modal="true">
        <a class="modal-close" href="{close_href}" aria-label="{close}">{close}</a>
        <h2>{title}</h2>
        <p>{subtitle}</p>
{form}
    </div>
"#,
		close_href = href(ctx, "/"),
		close = escape(m.close),
		title = escape(m.title),
		subtitle = escape(m.subtitle),
		form = render_form(ctx, form, &href(ctx, "/")),
	)
}
