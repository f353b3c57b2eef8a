// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::time::Duration;

/// Tuning constants for the carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
	/// Autoscroll speed in px per second.
	pub speed_px_per_sec: f64,
	/// How many copies of the item list are rendered.
	pub repetitions: usize,
	/// Which copy the offset is kept inside.
	pub middle_set: usize,
	/// Autoscroll stays suspended this long after the last wheel event.
	pub wheel_cooldown: Duration,
	/// Reference frame length that momentum velocity is expressed in.
	pub frame: Duration,
	/// Velocity multiplier applied once per tick.
	pub friction: f64,
	/// Momentum stops below this velocity (px per frame).
	pub momentum_stop: f64,
	pub snap_duration: Duration,
	/// Pointer travel above which a tap counts as a swipe.
	pub tap_threshold: f64,
	/// Viewports narrower than this are treated as touch surfaces.
	pub touch_breakpoint: f64,
	pub default_gap: f64,
}

impl Default for CarouselConfig {
	fn default() -> Self {
		Self {
			speed_px_per_sec: 15.0,
			repetitions: 5,
			middle_set: 2,
			wheel_cooldown: Duration::from_millis(1000),
			frame: Duration::from_millis(16),
			friction: 0.95,
			momentum_stop: 0.1,
			snap_duration: Duration::from_millis(1200),
			tap_threshold: 10.0,
			touch_breakpoint: 1024.0,
			default_gap: 16.0,
		}
	}
}

/// Input surface, which decides how pausing works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surface {
	/// Mouse or trackpad: hovering pauses autoscroll.
	#[default]
	Pointer,
	/// Touch screen: tapping an item pauses, tapping it again resumes.
	Touch,
}

impl Surface {
	pub fn for_viewport(viewport_width: f64, config: &CarouselConfig) -> Self {
		if viewport_width < config.touch_breakpoint {
			Surface::Touch
		} else {
			Surface::Pointer
		}
	}
}

/// Cubic ease-in-out over `t` in `[0, 1]`.
pub fn ease_in_out_cubic(t: f64) -> f64 {
	let t = t.clamp(0.0, 1.0);
	if t < 0.5 {
		4.0 * t * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
	}
}
