// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::time::Duration;

use super::config::{ease_in_out_cubic, CarouselConfig, Surface};
use super::layout::Layout;
use super::projection::{item_progress, RenderedItem};

/// What the carousel is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// No layout yet, or no items.
	Unmeasured,
	Autoscroll,
	/// Pointer is over the strip.
	Hovered,
	/// Touch surface paused by a tap.
	Paused,
	/// Inside the wheel cooldown.
	Scrolling,
	Dragging,
	Momentum,
	Snapping,
}

/// Result of tapping or clicking an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
	/// The gesture was a swipe, or the index does not exist.
	Ignored,
	/// Tapped the active item while paused; autoscroll resumes in place.
	Resumed,
	/// Animating towards the chosen item.
	Snapping,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
	original_index: usize,
	left: f64,
	width: f64,
}

#[derive(Debug, Clone, Copy)]
struct Snap {
	from: f64,
	to: f64,
	started: Duration,
}

/// Carousel simulation state.
#[derive(Debug, Clone)]
pub struct Carousel {
	config: CarouselConfig,
	surface: Surface,
	layout: Option<Layout>,
	slots: Vec<Slot>,
	loop_width: f64,
	offset: f64,
	velocity: f64,
	hovered: bool,
	paused: bool,
	dragging: bool,
	touch_start_x: f64,
	touch_last_x: f64,
	wheel_until: Option<Duration>,
	snap: Option<Snap>,
	clock: Duration,
	active_rendered: Option<usize>,
	active_original: Option<usize>,
}

impl Default for Carousel {
	fn default() -> Self {
		Self::new(CarouselConfig::default())
	}
}

impl Carousel {
	pub fn new(config: CarouselConfig) -> Self {
		Self {
			config,
			surface: Surface::Pointer,
			layout: None,
			slots: Vec::new(),
			loop_width: 0.0,
			offset: 0.0,
			velocity: 0.0,
			hovered: false,
			paused: false,
			dragging: false,
			touch_start_x: 0.0,
			touch_last_x: 0.0,
			wheel_until: None,
			snap: None,
			clock: Duration::ZERO,
			active_rendered: None,
			active_original: None,
		}
	}

	/// Apply a (re)measured layout.
	///
	/// The first measurement puts the offset at the start of the middle
	/// repetition. Later measurements keep the offset and only re-apply loop
	/// correction.
	pub fn measure(&mut self, layout: Layout) {
		self.surface = Surface::for_viewport(layout.viewport_width, &self.config);

		let mut slots = Vec::with_capacity(layout.item_count() * self.config.repetitions);
		let mut left = layout.padding;
		for _ in 0..self.config.repetitions {
			for (original_index, width) in layout.widths.iter().copied().enumerate() {
				slots.push(Slot {
					original_index,
					left,
					width,
				});
				left += width + layout.gap;
			}
		}

		let first = self.loop_width <= 0.0;
		self.loop_width = layout.loop_width();
		self.slots = slots;
		self.layout = Some(layout);

		if first && self.loop_width > 0.0 {
			self.offset = -(self.loop_width * self.config.middle_set as f64);
		}
		self.correct();

		tracing::debug!(
			items = self.slots.len(),
			loop_width = self.loop_width,
			surface = ?self.surface,
			"carousel measured"
		);
	}

	/// Advance the simulation by `dt`.
	///
	/// Returns the original index of the newly active item when it changed
	/// during this tick, and `None` otherwise.
	pub fn tick(&mut self, dt: Duration) -> Option<usize> {
		self.clock += dt;
		if self.slots.is_empty() || self.loop_width <= 0.0 {
			return None;
		}

		if self.wheel_until.is_some_and(|until| self.clock >= until) {
			self.wheel_until = None;
		}

		if let Some(snap) = self.snap {
			let elapsed = self.clock.saturating_sub(snap.started);
			if elapsed >= self.config.snap_duration {
				self.offset = snap.to;
				self.snap = None;
			} else {
				let t = elapsed.as_secs_f64() / self.config.snap_duration.as_secs_f64();
				self.offset = snap.from + (snap.to - snap.from) * ease_in_out_cubic(t);
			}
		} else if self.mode() == Mode::Autoscroll {
			self.offset -= self.config.speed_px_per_sec * dt.as_secs_f64();
		}

		if !self.dragging && self.velocity.abs() >= self.config.momentum_stop {
			let frames = dt.as_secs_f64() / self.config.frame.as_secs_f64();
			self.offset += self.velocity * frames;
			self.velocity *= self.config.friction;
			if self.velocity.abs() < self.config.momentum_stop {
				self.velocity = 0.0;
			}
		}

		self.correct();
		self.detect_center()
	}

	/// Wheel or trackpad scroll. The dominant axis moves the strip.
	pub fn wheel(&mut self, delta_x: f64, delta_y: f64) {
		if self.slots.is_empty() {
			return;
		}
		let delta = if delta_y.abs() > delta_x.abs() {
			delta_y
		} else {
			delta_x
		};
		if !delta.is_finite() {
			return;
		}

		self.offset -= delta;
		self.snap = None;
		self.wheel_until = Some(self.clock + self.config.wheel_cooldown);
		self.correct();
	}

	pub fn pointer_enter(&mut self) {
		self.hovered = true;
	}

	pub fn pointer_leave(&mut self) {
		self.hovered = false;
	}

	pub fn touch_start(&mut self, x: f64) {
		self.touch_start_x = x;
		self.touch_last_x = x;
		self.velocity = 0.0;
		self.dragging = true;
		self.paused = true;
		self.snap = None;
	}

	/// Drag follows the finger 1:1; the last move delta becomes the release velocity.
	pub fn touch_move(&mut self, x: f64) {
		if !self.dragging || !x.is_finite() {
			return;
		}
		let delta = x - self.touch_last_x;
		self.offset += delta;
		self.velocity = delta;
		self.touch_last_x = x;
		self.correct();
	}

	pub fn touch_end(&mut self) {
		self.dragging = false;
	}

	/// Tap or click on the rendered item at `rendered_index`.
	pub fn select(&mut self, rendered_index: usize) -> SelectOutcome {
		if (self.touch_start_x - self.touch_last_x).abs() > self.config.tap_threshold {
			return SelectOutcome::Ignored;
		}
		let Some(slot) = self.slots.get(rendered_index).copied() else {
			return SelectOutcome::Ignored;
		};

		if self.surface == Surface::Touch {
			if self.active_rendered == Some(rendered_index) && self.paused {
				self.paused = false;
				return SelectOutcome::Resumed;
			}
			self.paused = true;
		}

		self.snap_to_slot(slot);
		SelectOutcome::Snapping
	}

	/// Snap to the copy of an original item in the middle repetition.
	pub fn select_original(&mut self, original_index: usize) -> SelectOutcome {
		let count = self.item_count();
		if original_index >= count {
			return SelectOutcome::Ignored;
		}
		let rendered = self.config.middle_set * count + original_index;
		match self.slots.get(rendered).copied() {
			Some(slot) => {
				self.snap_to_slot(slot);
				SelectOutcome::Snapping
			}
			None => SelectOutcome::Ignored,
		}
	}

	/// Stateless view of every rendered item.
	pub fn project(&self) -> Vec<RenderedItem> {
		let Some(layout) = &self.layout else {
			return Vec::new();
		};
		let center = layout.viewport_center();
		self
			.slots
			.iter()
			.enumerate()
			.map(|(rendered_index, slot)| {
				let left = slot.left + self.offset;
				RenderedItem {
					rendered_index,
					original_index: slot.original_index,
					left,
					width: slot.width,
					active: self.active_rendered == Some(rendered_index),
					progress: item_progress(left + slot.width / 2.0, center, slot.width, layout.gap),
				}
			})
			.collect()
	}

	pub fn mode(&self) -> Mode {
		if self.slots.is_empty() || self.loop_width <= 0.0 {
			Mode::Unmeasured
		} else if self.dragging {
			Mode::Dragging
		} else if self.snap.is_some() {
			Mode::Snapping
		} else if self.velocity.abs() >= self.config.momentum_stop {
			Mode::Momentum
		} else if self.wheel_until.is_some() {
			Mode::Scrolling
		} else if self.surface == Surface::Pointer && self.hovered {
			Mode::Hovered
		} else if self.surface == Surface::Touch && self.paused {
			Mode::Paused
		} else {
			Mode::Autoscroll
		}
	}

	pub fn offset(&self) -> f64 {
		self.offset
	}

	pub fn velocity(&self) -> f64 {
		self.velocity
	}

	pub fn surface(&self) -> Surface {
		self.surface
	}

	pub fn config(&self) -> &CarouselConfig {
		&self.config
	}

	pub fn layout(&self) -> Option<&Layout> {
		self.layout.as_ref()
	}

	pub fn loop_width(&self) -> f64 {
		self.loop_width
	}

	/// Open interval the offset is kept inside.
	pub fn loop_bounds(&self) -> (f64, f64) {
		let middle = self.config.middle_set as f64;
		(
			-(self.loop_width * (middle + 1.0)),
			-(self.loop_width * (middle - 1.0)),
		)
	}

	pub fn item_count(&self) -> usize {
		self.layout.as_ref().map_or(0, Layout::item_count)
	}

	/// Original index of the item nearest the viewport centre.
	pub fn active_index(&self) -> Option<usize> {
		self.active_original
	}

	pub fn active_rendered_index(&self) -> Option<usize> {
		self.active_rendered
	}

	pub fn is_paused(&self) -> bool {
		self.paused
	}

	pub fn clock(&self) -> Duration {
		self.clock
	}

	fn snap_to_slot(&mut self, slot: Slot) {
		let Some(layout) = &self.layout else {
			return;
		};
		let target = layout.viewport_center() - (slot.left + slot.width / 2.0);
		let w = self.loop_width;
		let to = if w > 0.0 {
			target + ((self.offset - target) / w).round() * w
		} else {
			target
		};

		self.velocity = 0.0;
		self.wheel_until = None;
		self.snap = Some(Snap {
			from: self.offset,
			to,
			started: self.clock,
		});
	}

	/// Shift the offset by whole repetitions until it is back inside the loop bounds.
	fn correct(&mut self) {
		let w = self.loop_width;
		if w <= 0.0 {
			return;
		}
		if !self.offset.is_finite() {
			self.offset = -(w * self.config.middle_set as f64);
			self.snap = None;
			return;
		}

		let (left, right) = self.loop_bounds();
		let mut offset = self.offset;
		if offset <= left {
			offset += ((left - offset) / w).floor() * w;
		} else if offset >= right {
			offset -= ((offset - right) / w).floor() * w;
		}
		while offset <= left {
			offset += w;
		}
		while offset >= right {
			offset -= w;
		}

		let shift = offset - self.offset;
		if shift == 0.0 {
			return;
		}
		self.offset = offset;
		if let Some(snap) = &mut self.snap {
			snap.from += shift;
			snap.to += shift;
		}
	}

	fn detect_center(&mut self) -> Option<usize> {
		let center = self.layout.as_ref()?.viewport_center();

		let mut best: Option<(usize, f64)> = None;
		for (index, slot) in self.slots.iter().enumerate() {
			let distance = (slot.left + slot.width / 2.0 + self.offset - center).abs();
			if best.map_or(true, |(_, d)| distance < d) {
				best = Some((index, distance));
			}
		}

		let (rendered, _) = best?;
		self.active_rendered = Some(rendered);
		let original = self.slots[rendered].original_index;
		if self.active_original == Some(original) {
			return None;
		}
		self.active_original = Some(original);
		tracing::trace!(original, rendered, "carousel active item changed");
		Some(original)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::MediaKind;

	const FRAME: Duration = Duration::from_millis(16);

	fn kinds() -> Vec<MediaKind> {
		vec![
			MediaKind::Video,
			MediaKind::Photo,
			MediaKind::Video,
			MediaKind::Photo,
			MediaKind::Video,
		]
	}

	fn desktop() -> Carousel {
		let mut carousel = Carousel::default();
		carousel.measure(Layout::for_items(1280.0, kinds()));
		carousel
	}

	fn phone() -> Carousel {
		let mut carousel = Carousel::default();
		carousel.measure(Layout::for_items(390.0, kinds()));
		carousel
	}

	fn assert_in_bounds(carousel: &Carousel) {
		let (left, right) = carousel.loop_bounds();
		let offset = carousel.offset();
		assert!(
			offset > left && offset < right,
			"offset {offset} outside ({left}, {right})"
		);
	}

	fn run(carousel: &mut Carousel, duration: Duration) {
		let mut elapsed = Duration::ZERO;
		while elapsed < duration {
			carousel.tick(FRAME);
			elapsed += FRAME;
		}
	}

	mod measurement {
		use super::*;

		#[test]
		fn starts_at_middle_repetition() {
			let carousel = desktop();
			let w = 3.0 * (224.0 + 16.0) + 2.0 * (160.0 + 16.0);
			assert_eq!(carousel.loop_width(), w);
			assert_eq!(carousel.offset(), -2.0 * w);
			assert_eq!(carousel.project().len(), 25);
		}

		#[test]
		fn remeasure_keeps_offset() {
			let mut carousel = desktop();
			carousel.tick(Duration::from_secs(1));
			let before = carousel.offset();
			carousel.measure(Layout::for_items(1440.0, kinds()));
			assert_eq!(carousel.offset(), before);
		}

		#[test]
		fn narrow_viewport_is_touch() {
			assert_eq!(phone().surface(), Surface::Touch);
			assert_eq!(desktop().surface(), Surface::Pointer);
		}

		#[test]
		fn empty_carousel_ticks_are_noops() {
			let mut carousel = Carousel::default();
			assert_eq!(carousel.tick(FRAME), None);
			assert_eq!(carousel.mode(), Mode::Unmeasured);
			carousel.measure(Layout::for_items(1280.0, Vec::<MediaKind>::new()));
			assert_eq!(carousel.tick(FRAME), None);
			assert!(carousel.project().is_empty());
		}
	}

	mod autoscroll {
		use super::*;

		#[test]
		fn moves_fifteen_px_per_second() {
			let mut carousel = desktop();
			let start = carousel.offset();
			carousel.tick(Duration::from_secs(1));
			assert!((carousel.offset() - (start - 15.0)).abs() < 1e-9);
		}

		#[test]
		fn speed_is_independent_of_frame_rate() {
			let mut a = desktop();
			let mut b = desktop();
			for _ in 0..60 {
				a.tick(Duration::from_micros(16_667));
			}
			for _ in 0..30 {
				b.tick(Duration::from_micros(33_334));
			}
			assert!((a.offset() - b.offset()).abs() < 1e-6);
		}

		#[test]
		fn hover_pauses_on_pointer_surfaces() {
			let mut carousel = desktop();
			carousel.pointer_enter();
			let start = carousel.offset();
			run(&mut carousel, Duration::from_secs(2));
			assert_eq!(carousel.offset(), start);
			assert_eq!(carousel.mode(), Mode::Hovered);

			carousel.pointer_leave();
			carousel.tick(FRAME);
			assert!(carousel.offset() < start);
		}

		#[test]
		fn hover_is_ignored_on_touch_surfaces() {
			let mut carousel = phone();
			carousel.pointer_enter();
			let start = carousel.offset();
			carousel.tick(FRAME);
			assert!(carousel.offset() < start);
		}
	}

	mod wheel {
		use super::*;

		#[test]
		fn dominant_axis_moves_strip() {
			let mut carousel = desktop();
			let start = carousel.offset();
			carousel.wheel(5.0, 40.0);
			assert_eq!(carousel.offset(), start - 40.0);
			carousel.wheel(-30.0, 10.0);
			assert_eq!(carousel.offset(), start - 40.0 + 30.0);
		}

		#[test]
		fn cooldown_suspends_autoscroll() {
			let mut carousel = desktop();
			carousel.wheel(0.0, 10.0);
			let after_wheel = carousel.offset();

			run(&mut carousel, Duration::from_millis(992));
			assert_eq!(carousel.offset(), after_wheel);
			assert_eq!(carousel.mode(), Mode::Scrolling);

			run(&mut carousel, Duration::from_millis(48));
			assert!(carousel.offset() < after_wheel);
			assert_eq!(carousel.mode(), Mode::Autoscroll);
		}

		#[test]
		fn each_event_restarts_cooldown() {
			let mut carousel = desktop();
			carousel.wheel(0.0, 10.0);
			run(&mut carousel, Duration::from_millis(800));
			carousel.wheel(0.0, 10.0);
			run(&mut carousel, Duration::from_millis(800));
			assert_eq!(carousel.mode(), Mode::Scrolling);
		}

		#[test]
		fn large_wheel_jumps_stay_in_bounds() {
			let mut carousel = desktop();
			carousel.wheel(0.0, 1.0e7);
			assert_in_bounds(&carousel);
			carousel.wheel(0.0, -3.3e6);
			assert_in_bounds(&carousel);
		}
	}

	mod drag {
		use super::*;

		#[test]
		fn offset_tracks_finger() {
			let mut carousel = phone();
			let start = carousel.offset();
			carousel.touch_start(200.0);
			carousel.touch_move(180.0);
			carousel.touch_move(150.0);
			assert_eq!(carousel.offset(), start - 50.0);
			assert_eq!(carousel.velocity(), -30.0);
			assert_eq!(carousel.mode(), Mode::Dragging);
		}

		#[test]
		fn release_coasts_then_stops() {
			let mut carousel = phone();
			carousel.touch_start(200.0);
			carousel.touch_move(180.0);
			carousel.touch_end();
			assert_eq!(carousel.mode(), Mode::Momentum);

			let before = carousel.offset();
			carousel.tick(FRAME);
			assert!((carousel.offset() - (before - 20.0)).abs() < 1e-9);
			assert!((carousel.velocity() - (-19.0)).abs() < 1e-9);

			run(&mut carousel, Duration::from_secs(3));
			assert_eq!(carousel.velocity(), 0.0);
			assert_eq!(carousel.mode(), Mode::Paused);
		}

		#[test]
		fn momentum_scales_with_frame_time() {
			let mut carousel = phone();
			carousel.touch_start(0.0);
			carousel.touch_move(10.0);
			carousel.touch_end();
			let before = carousel.offset();
			carousel.tick(Duration::from_millis(32));
			assert!((carousel.offset() - (before + 20.0)).abs() < 1e-9);
		}

		#[test]
		fn moves_without_touch_start_are_ignored() {
			let mut carousel = phone();
			let start = carousel.offset();
			carousel.touch_move(50.0);
			assert_eq!(carousel.offset(), start);
		}
	}

	mod selection {
		use super::*;

		fn centered(carousel: &Carousel, rendered_index: usize) -> bool {
			let item = &carousel.project()[rendered_index];
			(item.center() - 640.0).abs() < 1e-6
		}

		#[test]
		fn click_snaps_item_to_center() {
			let mut carousel = desktop();
			carousel.tick(FRAME);
			let outcome = carousel.select(13);
			assert_eq!(outcome, SelectOutcome::Snapping);
			assert_eq!(carousel.mode(), Mode::Snapping);

			run(&mut carousel, Duration::from_millis(1216));
			assert_eq!(carousel.active_index(), Some(13 % 5));
			let active = carousel
				.project()
				.into_iter()
				.find(|i| i.active)
				.unwrap();
			assert!((active.center() - 640.0).abs() < 1.0);
		}

		#[test]
		fn snap_follows_easing_curve() {
			let mut carousel = desktop();
			let from = carousel.offset();
			carousel.select(12);
			let item = &carousel.project()[12];
			let to_guess = from + (640.0 - item.center());

			carousel.tick(Duration::from_millis(600));
			let halfway = carousel.offset();
			assert!((halfway - (from + (to_guess - from) * 0.5)).abs() < 1e-6);
		}

		#[test]
		fn snap_lands_exactly() {
			let mut carousel = desktop();
			carousel.select(12);
			carousel.tick(Duration::from_millis(1200));
			assert!(centered(&carousel, 12));
		}

		#[test]
		fn swipe_is_not_a_tap() {
			let mut carousel = phone();
			carousel.touch_start(200.0);
			carousel.touch_move(170.0);
			carousel.touch_end();
			assert_eq!(carousel.select(11), SelectOutcome::Ignored);
		}

		#[test]
		fn small_jitter_still_taps() {
			let mut carousel = phone();
			carousel.touch_start(200.0);
			carousel.touch_move(195.0);
			carousel.touch_end();
			assert_eq!(carousel.select(11), SelectOutcome::Snapping);
		}

		#[test]
		fn unknown_index_is_ignored() {
			let mut carousel = desktop();
			assert_eq!(carousel.select(999), SelectOutcome::Ignored);
			assert_eq!(carousel.select_original(5), SelectOutcome::Ignored);
		}

		#[test]
		fn touch_tap_pauses_and_second_tap_resumes() {
			let mut carousel = phone();
			carousel.tick(FRAME);

			carousel.touch_start(100.0);
			carousel.touch_end();
			assert_eq!(carousel.select(12), SelectOutcome::Snapping);
			carousel.tick(Duration::from_millis(1200));
			carousel.tick(FRAME);
			assert!(carousel.is_paused());
			assert_eq!(carousel.mode(), Mode::Paused);

			let active = carousel.active_rendered_index().unwrap();
			let parked = carousel.offset();
			run(&mut carousel, Duration::from_secs(1));
			assert_eq!(carousel.offset(), parked);

			carousel.touch_start(100.0);
			carousel.touch_end();
			assert_eq!(carousel.select(active), SelectOutcome::Resumed);
			assert!(!carousel.is_paused());
			carousel.tick(FRAME);
			assert!(carousel.offset() < parked);
		}

		#[test]
		fn pointer_click_does_not_pause() {
			let mut carousel = desktop();
			carousel.select(12);
			carousel.tick(Duration::from_millis(1200));
			let parked = carousel.offset();
			carousel.tick(FRAME);
			assert!(carousel.offset() < parked);
		}

		#[test]
		fn wheel_cancels_snap() {
			let mut carousel = desktop();
			carousel.select(14);
			carousel.tick(Duration::from_millis(100));
			carousel.wheel(0.0, 5.0);
			assert_eq!(carousel.mode(), Mode::Scrolling);
		}

		#[test]
		fn select_original_centers_that_item() {
			let mut carousel = desktop();
			carousel.select_original(3);
			let changed = {
				let mut seen = None;
				for _ in 0..80 {
					if let Some(i) = carousel.tick(FRAME) {
						seen = Some(i);
					}
				}
				seen
			};
			assert_eq!(changed, Some(3));
			assert_eq!(carousel.active_index(), Some(3));
		}

		#[test]
		fn snap_takes_the_short_way_round() {
			let mut carousel = desktop();
			let w = carousel.loop_width();
			carousel.select(24);
			carousel.tick(Duration::from_millis(1200));
			let travelled = (carousel.offset() + 2.0 * w).abs();
			assert!(travelled <= w, "travelled {travelled} > {w}");
		}
	}

	mod invariants {
		use super::*;
		use proptest::prelude::*;

		#[test]
		fn offset_stays_bounded_without_input() {
			let mut carousel = desktop();
			for _ in 0..200_000 {
				carousel.tick(FRAME);
				assert_in_bounds(&carousel);
			}
		}

		#[test]
		fn active_change_fires_once_per_change() {
			let mut carousel = phone();
			let mut last = None;
			let mut changes = 0;
			for _ in 0..5_000 {
				let event = carousel.tick(FRAME);
				let now = carousel.active_index();
				if now != last {
					assert_eq!(event, now);
					changes += 1;
				} else {
					assert_eq!(event, None);
				}
				last = now;
			}
			assert!(changes > 5, "expected several changes, saw {changes}");
		}

		#[test]
		fn first_tick_reports_initial_item() {
			let mut carousel = desktop();
			assert!(carousel.tick(FRAME).is_some());
			assert!(carousel.tick(FRAME).is_none());
		}

		#[test]
		fn loop_correction_is_invisible() {
			let mut carousel = desktop();
			let w = carousel.loop_width();
			let visible = |c: &Carousel| -> Vec<(usize, i64)> {
				c.project()
					.into_iter()
					.filter(|i| i.is_visible(1280.0))
					.map(|i| (i.original_index, (i.left * 1000.0).round() as i64))
					.collect()
			};
			// Park just inside the right bound, then step over it.
			carousel.wheel(0.0, -(w - 1.0));
			let before = visible(&carousel);
			carousel.wheel(0.0, -2.0);
			carousel.wheel(0.0, 2.0);
			assert_eq!(visible(&carousel), before);
		}

		#[derive(Debug, Clone)]
		enum Input {
			Tick(u64),
			Wheel(f64, f64),
			Enter,
			Leave,
			TouchStart(f64),
			TouchMove(f64),
			TouchEnd,
			Select(usize),
		}

		fn input() -> impl Strategy<Value = Input> {
			prop_oneof![
				4 => (1u64..100).prop_map(Input::Tick),
				1 => (-3000.0f64..3000.0, -3000.0f64..3000.0).prop_map(|(x, y)| Input::Wheel(x, y)),
				1 => Just(Input::Enter),
				1 => Just(Input::Leave),
				1 => (0.0f64..1280.0).prop_map(Input::TouchStart),
				2 => (-2000.0f64..3000.0).prop_map(Input::TouchMove),
				1 => Just(Input::TouchEnd),
				1 => (0usize..30).prop_map(Input::Select),
			]
		}

		proptest! {
			#[test]
			fn offset_stays_bounded_under_any_input(
				viewport in prop_oneof![Just(390.0), Just(800.0), Just(1280.0)],
				inputs in proptest::collection::vec(input(), 1..300),
			) {
				let mut carousel = Carousel::default();
				carousel.measure(Layout::for_items(viewport, kinds()));
				for input in inputs {
					match input {
						Input::Tick(ms) => { carousel.tick(Duration::from_millis(ms)); }
						Input::Wheel(x, y) => carousel.wheel(x, y),
						Input::Enter => carousel.pointer_enter(),
						Input::Leave => carousel.pointer_leave(),
						Input::TouchStart(x) => carousel.touch_start(x),
						Input::TouchMove(x) => carousel.touch_move(x),
						Input::TouchEnd => carousel.touch_end(),
						Input::Select(i) => { carousel.select(i); }
					}
					let (left, right) = carousel.loop_bounds();
					prop_assert!(carousel.offset() > left && carousel.offset() < right);
				}
			}

			#[test]
			fn progress_is_always_in_unit_range(frames in 1usize..500) {
				let mut carousel = desktop();
				for _ in 0..frames {
					carousel.tick(FRAME);
				}
				for item in carousel.project() {
					prop_assert!((0.0..=1.0).contains(&item.progress));
				}
			}
		}
	}
}
