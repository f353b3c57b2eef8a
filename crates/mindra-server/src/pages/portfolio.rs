// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Portfolio page: display panel plus carousel strip.
//!
//! The page is rendered from a carousel simulated at a reference viewport. A
//! selected item is snapped to the centre before projecting, so the strip the
//! visitor sees matches what the live widget would show after the click.

use mindra_common_i18n::LocaleContext;
use mindra_portfolio::{portfolio, Carousel, Layout, Player, PortfolioItem, RenderedItem};

use super::{business::business_nav, escape, href, layout};

/// Viewport width the server-side projection is computed for.
pub const REFERENCE_VIEWPORT: f64 = 1280.0;

/// Simulate the carousel and return it settled on `selected` (or on its
/// initial position when nothing is selected).
pub fn settle_carousel(selected: Option<usize>) -> Carousel {
	let items = portfolio();
	let mut carousel = Carousel::default();
	carousel.measure(Layout::for_items(
		REFERENCE_VIEWPORT,
		items.iter().map(|item| item.kind),
	));

	let frame = carousel.config().frame;
	carousel.tick(frame);
	if let Some(index) = selected {
		carousel.select_original(index);
		let snap = carousel.config().snap_duration;
		carousel.tick(snap);
	}
	carousel
}

pub fn render_portfolio(ctx: &LocaleContext, media_base: &str, selected: Option<usize>) -> String {
	let items = portfolio();
	let carousel = settle_carousel(selected);

	let mut player = Player::new();
	let active = carousel
		.active_index()
		.and_then(|index| items.get(index))
		.or_else(|| items.first());
	if let Some(item) = active {
		player.mirror(item);
	}

	let panel = active
		.map(|item| render_panel(ctx, media_base, item, &player))
		.unwrap_or_default();

	let strip: String = carousel
		.project()
		.iter()
		.filter(|rendered| rendered.is_visible(REFERENCE_VIEWPORT))
		.filter_map(|rendered| {
			items
				.get(rendered.original_index)
				.map(|item| render_strip_item(ctx, media_base, item, rendered))
		})
		.collect();

	let body = format!(
		r#"{nav}
<main class="portfolio">
{panel}
    <div class="carousel" data-offset="{offset:.2}" data-loop-width="{loop_width:.2}">
{strip}    </div>
</main>"#,
		nav = business_nav(ctx, "/business/portfolio"),
		offset = carousel.offset(),
		loop_width = carousel.loop_width(),
	);

	layout(ctx, ctx.translations().business.nav.portfolio, "", &body)
}

fn render_panel(ctx: &LocaleContext, media_base: &str, item: &PortfolioItem, player: &Player) -> String {
	let labels = &ctx.translations().business.portfolio;
	let media_url = escape(&item.resolve(media_base).media_url);

	let media = if item.is_video() {
		let play = if player.is_playing() {
			labels.pause
		} else {
			labels.play
		};
		let mute = if player.is_muted() {
			labels.unmute
		} else {
			labels.mute
		};
		format!(
			r#"<video src="{media_url}"{muted} playsinline preload="metadata"></video>
        <div class="player-controls">
            <button type="button" data-action="play">{play}</button>
            <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow="{progress:.0}"></div>
            <button type="button" data-action="mute">{mute}</button>
            <button type="button" data-action="fullscreen">{fullscreen}</button>
        </div>"#,
			muted = if player.is_muted() { " muted" } else { "" },
			play = escape(play),
			progress = player.progress_percent(),
			mute = escape(mute),
			fullscreen = escape(labels.fullscreen),
		)
	} else {
		format!(r#"<img src="{media_url}" alt="{}">"#, escape(item.title))
	};

	let duration = item
		.duration
		.map(|d| format!(r#"<span class="duration">{}</span>"#, escape(d)))
		.unwrap_or_default();

	format!(
		r#"    <section class="display-panel" data-item="{id}">
        {media}
        <div class="caption">
            <span class="client">{client}</span>
            <h2>{title}</h2>
            {duration}
            <a href="{link}">{view}</a>
        </div>
    </section>"#,
		id = escape(item.id),
		client = escape(item.client),
		title = escape(item.title),
		link = escape(item.link),
		view = escape(labels.view_project),
	)
}

fn render_strip_item(
	ctx: &LocaleContext,
	media_base: &str,
	item: &PortfolioItem,
	rendered: &RenderedItem,
) -> String {
	let link = escape(&format!(
		"{}&item={}",
		href(ctx, "/business/portfolio"),
		rendered.original_index
	));
	let thumb = if item.is_video() {
		format!(
			r#"<video src="{}" muted playsinline preload="metadata"></video>"#,
			escape(&item.resolve(media_base).media_url)
		)
	} else {
		format!(
			r#"<img src="{}" alt="{}">"#,
			escape(&item.resolve(media_base).media_url),
			escape(item.title)
		)
	};
	let active = if rendered.active {
		r#" aria-current="true""#
	} else {
		""
	};

	format!(
		"        <a class=\"carousel-item\" href=\"{link}\" style=\"left:{left:.2}px;width:{width:.2}px\" data-progress=\"{progress:.3}\"{active}>{thumb}</a>\n",
		left = rendered.left,
		width = rendered.width,
		progress = rendered.progress,
	)
}
