// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Display panel player state.
//!
//! The panel shows whichever item the carousel reports as active. Videos can
//! be played, muted, seeked and made fullscreen; photos ignore all playback
//! operations.

use serde::Serialize;

use crate::catalog::{MediaKind, PortfolioItem};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
	item_id: Option<&'static str>,
	kind: Option<MediaKind>,
	playing: bool,
	muted: bool,
	position: f64,
	duration: f64,
	progress: f64,
	fullscreen: bool,
}

impl Default for Player {
	fn default() -> Self {
		Self::new()
	}
}

impl Player {
	/// Paused and muted, with nothing mirrored yet.
	pub fn new() -> Self {
		Self {
			item_id: None,
			kind: None,
			playing: false,
			muted: true,
			position: 0.0,
			duration: 0.0,
			progress: 0.0,
			fullscreen: false,
		}
	}

	/// The landing page reel: autoplaying, muted video.
	pub fn reel() -> Self {
		Self {
			kind: Some(MediaKind::Video),
			playing: true,
			..Self::new()
		}
	}

	/// Mirror `item`. Returns `true` when the item changed, in which case
	/// playback is paused and rewound. Mute and fullscreen carry over.
	pub fn mirror(&mut self, item: &PortfolioItem) -> bool {
		if self.item_id == Some(item.id) {
			return false;
		}
		self.item_id = Some(item.id);
		self.kind = Some(item.kind);
		self.playing = false;
		self.position = 0.0;
		self.duration = 0.0;
		self.progress = 0.0;
		tracing::debug!(item = item.id, kind = ?item.kind, "player mirrored new item");
		true
	}

	pub fn toggle_play(&mut self) {
		if self.accepts_playback() {
			self.playing = !self.playing;
		}
	}

	pub fn toggle_mute(&mut self) {
		if self.accepts_playback() {
			self.muted = !self.muted;
		}
	}

	pub fn toggle_fullscreen(&mut self) {
		if self.accepts_playback() {
			self.fullscreen = !self.fullscreen;
		}
	}

	/// Rewind to the start and play.
	pub fn restart(&mut self) {
		if self.accepts_playback() {
			self.position = 0.0;
			self.progress = 0.0;
			self.playing = true;
		}
	}

	/// Click on the progress track at `click_x` within a track `track_width` wide.
	///
	/// Returns the new playback position in seconds.
	pub fn seek_to_fraction(&mut self, click_x: f64, track_width: f64) -> Option<f64> {
		if !self.accepts_playback() || track_width <= 0.0 || !click_x.is_finite() {
			return None;
		}
		let fraction = (click_x / track_width).clamp(0.0, 1.0);
		self.position = fraction * self.duration;
		self.progress = fraction * 100.0;
		Some(self.position)
	}

	/// Media element reported its current playback time.
	pub fn on_time_update(&mut self, current: f64) {
		if !current.is_finite() {
			return;
		}
		self.position = current.max(0.0);
		let duration = if self.duration > 0.0 { self.duration } else { 1.0 };
		self.progress = (self.position / duration * 100.0).clamp(0.0, 100.0);
	}

	/// Media element learned the clip duration.
	pub fn on_loaded_metadata(&mut self, duration: f64) {
		if duration.is_finite() && duration > 0.0 {
			self.duration = duration;
		}
	}

	pub fn progress_percent(&self) -> f64 {
		self.progress
	}

	pub fn item_id(&self) -> Option<&'static str> {
		self.item_id
	}

	pub fn is_playing(&self) -> bool {
		self.playing
	}

	pub fn is_muted(&self) -> bool {
		self.muted
	}

	pub fn is_fullscreen(&self) -> bool {
		self.fullscreen
	}

	pub fn position(&self) -> f64 {
		self.position
	}

	pub fn duration(&self) -> f64 {
		self.duration
	}

	fn accepts_playback(&self) -> bool {
		self.kind == Some(MediaKind::Video)
	}
}
