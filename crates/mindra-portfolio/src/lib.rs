// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Portfolio content and the widgets that present it.
//!
//! - [`catalog`]: the static list of past events.
//! - [`media`]: media reference to URL resolution.
//! - [`carousel`]: an infinitely looping strip driven by explicit ticks.
//! - [`player`]: the display panel that mirrors the carousel's active item.

pub mod carousel;
pub mod catalog;
pub mod media;
pub mod player;

pub use carousel::{Carousel, CarouselConfig, Layout, Mode, RenderedItem, SelectOutcome, Surface};
pub use catalog::{portfolio, MediaKind, PortfolioItem, ResolvedPortfolioItem, LANDING_REEL};
pub use media::resolve_media_url;
pub use player::Player;
