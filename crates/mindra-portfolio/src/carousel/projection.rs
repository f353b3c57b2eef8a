// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::Serialize;

/// One rendered copy of an item as it should appear on screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedItem {
	/// Index into the rendered (repeated) list.
	pub rendered_index: usize,
	/// Index into the original item list.
	pub original_index: usize,
	/// Visual left edge relative to the viewport.
	pub left: f64,
	pub width: f64,
	pub active: bool,
	/// Passage through the centre zone, 0 when entering from the right and 1
	/// when leaving on the left.
	pub progress: f64,
}

impl RenderedItem {
	pub fn center(&self) -> f64 {
		self.left + self.width / 2.0
	}

	pub fn is_visible(&self, viewport_width: f64) -> bool {
		self.left + self.width > 0.0 && self.left < viewport_width
	}
}

/// Progress of an item whose visual centre is `visual_center`.
pub(crate) fn item_progress(visual_center: f64, viewport_center: f64, width: f64, gap: f64) -> f64 {
	let span = width + gap;
	if span <= 0.0 {
		return 0.0;
	}
	let start = viewport_center + span / 2.0;
	((start - visual_center) / span).clamp(0.0, 1.0)
}
