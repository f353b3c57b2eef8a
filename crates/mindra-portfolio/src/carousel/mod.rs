// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Infinitely looping media carousel.
//!
//! The item list is rendered [`CarouselConfig::repetitions`] times side by
//! side. The track offset starts at the beginning of the middle repetition and
//! is shifted by whole repetition widths whenever it drifts into a
//! neighbouring one, so the strip appears endless while the offset stays in a
//! fixed window.
//!
//! [`Carousel`] is a plain state machine: input arrives through method calls,
//! time arrives through [`Carousel::tick`], and [`Carousel::project`] produces
//! a stateless view for rendering.

mod config;
mod layout;
mod projection;
mod state;

pub use config::{ease_in_out_cubic, CarouselConfig, Surface};
pub use layout::{ItemMetrics, Layout};
pub use projection::RenderedItem;
pub use state::{Carousel, Mode, SelectOutcome};
