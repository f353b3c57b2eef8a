// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Explicit locale context handed to every text-rendering view.

use crate::bundle::Bundle;
use crate::catalog::bundle;
use crate::locale::Locale;

/// The active language and its bundle.
///
/// Switching replaces the bundle reference in one assignment, so a view can
/// never observe strings from two locales at once.
#[derive(Debug, Clone, Copy)]
pub struct LocaleContext {
	language: Locale,
	translations: &'static Bundle,
}

impl LocaleContext {
	pub fn new(language: Locale) -> Self {
		Self {
			language,
			translations: bundle(language),
		}
	}

	pub fn language(&self) -> Locale {
		self.language
	}

	pub fn set_language(&mut self, language: Locale) {
		*self = Self::new(language);
	}

	pub fn translations(&self) -> &'static Bundle {
		self.translations
	}
}

impl Default for LocaleContext {
	fn default() -> Self {
		Self::new(Locale::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::t;

	#[test]
	fn starts_in_ukrainian() {
		let ctx = LocaleContext::default();
		assert_eq!(ctx.language(), Locale::Uk);
		assert_eq!(ctx.translations().home.book_now, "ЗАБРОНЮВАТИ");
	}

	#[test]
	fn switch_replaces_the_whole_bundle() {
		let mut ctx = LocaleContext::default();

		ctx.set_language(Locale::En);
		assert!(std::ptr::eq(ctx.translations(), bundle(Locale::En)));
		for (key, value) in ctx.translations().flatten() {
			assert_eq!(t(Locale::En, &key), value, "key {key}");
		}

		ctx.set_language(Locale::Uk);
		assert!(std::ptr::eq(ctx.translations(), bundle(Locale::Uk)));
		for (key, value) in ctx.translations().flatten() {
			assert_eq!(t(Locale::Uk, &key), value, "key {key}");
		}
	}

	#[test]
	fn switching_back_and_forth_is_idempotent() {
		let mut ctx = LocaleContext::new(Locale::En);
		ctx.set_language(Locale::En);
		assert_eq!(ctx.translations().modal.title, "GET IN TOUCH");
		ctx.set_language(Locale::Uk);
		ctx.set_language(Locale::Uk);
		assert_eq!(ctx.translations().modal.title, "ЗВ'ЯЖІТЬСЯ З НАМИ");
	}
}
