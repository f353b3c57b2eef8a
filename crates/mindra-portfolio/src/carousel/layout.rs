// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::catalog::MediaKind;

/// Item sizing for one responsive breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMetrics {
	pub video_width: f64,
	pub photo_width: f64,
	pub gap: f64,
	/// Leading padding of the track.
	pub padding: f64,
}

impl ItemMetrics {
	/// Sizes used by the site's stylesheet at the given viewport width.
	pub fn for_viewport(viewport_width: f64) -> Self {
		if viewport_width < 768.0 {
			Self {
				video_width: 144.0,
				photo_width: 96.0,
				gap: 12.0,
				padding: 16.0,
			}
		} else if viewport_width < 1024.0 {
			Self {
				video_width: 176.0,
				photo_width: 128.0,
				gap: 16.0,
				padding: 24.0,
			}
		} else {
			Self {
				video_width: 224.0,
				photo_width: 160.0,
				gap: 16.0,
				padding: 32.0,
			}
		}
	}

	pub fn width_of(&self, kind: MediaKind) -> f64 {
		match kind {
			MediaKind::Video => self.video_width,
			MediaKind::Photo => self.photo_width,
		}
	}
}

/// Measured geometry of one repetition of the item list.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
	pub viewport_width: f64,
	/// Width of each original item, in list order.
	pub widths: Vec<f64>,
	pub gap: f64,
	pub padding: f64,
}

impl Layout {
	pub fn new(viewport_width: f64, widths: Vec<f64>, gap: f64, padding: f64) -> Self {
		Self {
			viewport_width,
			widths,
			gap,
			padding,
		}
	}

	/// Layout for a list of items at a viewport width, using the site's breakpoints.
	pub fn for_items(viewport_width: f64, kinds: impl IntoIterator<Item = MediaKind>) -> Self {
		let metrics = ItemMetrics::for_viewport(viewport_width);
		Self {
			viewport_width,
			widths: kinds.into_iter().map(|k| metrics.width_of(k)).collect(),
			gap: metrics.gap,
			padding: metrics.padding,
		}
	}

	pub fn item_count(&self) -> usize {
		self.widths.len()
	}

	/// Width of one repetition: every item plus the gap after it.
	pub fn loop_width(&self) -> f64 {
		self.widths.iter().map(|w| w + self.gap).sum()
	}

	pub fn viewport_center(&self) -> f64 {
		self.viewport_width / 2.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn desktop_metrics() {
		let layout = Layout::for_items(1280.0, [MediaKind::Video, MediaKind::Photo]);
		assert_eq!(layout.widths, vec![224.0, 160.0]);
		assert_eq!(layout.gap, 16.0);
		assert_eq!(layout.padding, 32.0);
		assert_eq!(layout.loop_width(), 224.0 + 16.0 + 160.0 + 16.0);
	}

	#[test]
	fn phone_metrics() {
		let metrics = ItemMetrics::for_viewport(390.0);
		assert_eq!(metrics.width_of(MediaKind::Video), 144.0);
		assert_eq!(metrics.gap, 12.0);
	}

	#[test]
	fn tablet_metrics() {
		let metrics = ItemMetrics::for_viewport(800.0);
		assert_eq!(metrics.width_of(MediaKind::Photo), 128.0);
		assert_eq!(metrics.padding, 24.0);
	}
}
