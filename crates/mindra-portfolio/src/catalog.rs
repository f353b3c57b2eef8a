// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static portfolio catalog.

use serde::Serialize;

use crate::media::resolve_media_url;

/// Reel shown on the landing page.
pub const LANDING_REEL: &str = "videos/IMG_3759.MOV";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
	Video,
	Photo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioItem {
	pub id: &'static str,
	pub kind: MediaKind,
	pub title: &'static str,
	pub client: &'static str,
	pub link: &'static str,
	/// Path relative to the media base URL.
	pub media: &'static str,
	/// Display duration (`mm:ss`), videos only.
	pub duration: Option<&'static str>,
}

/// A catalog entry with its media reference resolved to a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPortfolioItem {
	#[serde(flatten)]
	pub item: PortfolioItem,
	pub media_url: String,
}

impl PortfolioItem {
	pub fn is_video(&self) -> bool {
		self.kind == MediaKind::Video
	}

	pub fn resolve(&self, media_base: &str) -> ResolvedPortfolioItem {
		ResolvedPortfolioItem {
			item: self.clone(),
			media_url: resolve_media_url(media_base, self.media),
		}
	}
}

static PORTFOLIO: [PortfolioItem; 5] = [
	PortfolioItem {
		id: "1",
		kind: MediaKind::Video,
		title: "Конференція Mate Academy",
		client: "Mate Academy",
		link: "#",
		media: "videos/mate-academy.mp4",
		duration: Some("02:30"),
	},
	PortfolioItem {
		id: "2",
		kind: MediaKind::Photo,
		title: "Launch Party Diia.City",
		client: "Diia.City",
		link: "#",
		media: "images/diia-city.jpg",
		duration: None,
	},
	PortfolioItem {
		id: "3",
		kind: MediaKind::Video,
		title: "Charity Gala Dinner",
		client: "Tabletochki",
		link: "#",
		media: "videos/charity.mp4",
		duration: Some("01:45"),
	},
	PortfolioItem {
		id: "4",
		kind: MediaKind::Photo,
		title: "Product Presentation Ajax",
		client: "Ajax Systems",
		link: "#",
		media: "images/ajax.jpg",
		duration: None,
	},
	PortfolioItem {
		id: "5",
		kind: MediaKind::Video,
		title: "Kyiv International Economic Forum",
		client: "KIEF",
		link: "#",
		media: "videos/kief.mp4",
		duration: Some("03:15"),
	},
];

pub fn portfolio() -> &'static [PortfolioItem] {
	&PORTFOLIO
}
