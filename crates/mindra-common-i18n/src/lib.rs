// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization support for the Mindra site.
//!
//! The site ships two locales, Ukrainian (the default) and English. Each locale
//! has one [`Bundle`]: a plain struct of `&'static str` fields, so a bundle that
//! is missing a string does not compile. There is no fallback merging between
//! locales.
//!
//! Views never read a global "current language". They receive a
//! [`LocaleContext`] and render against [`LocaleContext::translations`].
//!
//! # Key Naming Convention
//!
//! The flat lookup used by [`t`] mirrors the bundle structure in dot notation,
//! e.g. `contact.form.send_button` or `business.nav.portfolio`.
//!
//! # Example
//!
//! ```
//! use mindra_common_i18n::{t, Locale, LocaleContext};
//!
//! let mut ctx = LocaleContext::default();
//! assert_eq!(ctx.language(), Locale::Uk);
//!
//! ctx.set_language(Locale::En);
//! assert_eq!(ctx.translations().modal.send_button, "SEND REQUEST");
//! assert_eq!(t(Locale::En, "home.book_now"), "BOOK NOW");
//! ```

mod bundle;
mod catalog;
mod context;
mod locale;
mod resolve;

pub use bundle::{
	Benefit, Bundle, BusinessContactText, BusinessHomeText, BusinessNavText, BusinessText,
	ContactFormText, ContactText, EventTypeText, HomeNavText, HomeText, ModalText, PortfolioText,
	StatusText,
};
pub use catalog::{bundle, entries, t};
pub use context::LocaleContext;
pub use locale::{Locale, LocaleInfo, ParseLocaleError, DEFAULT_LOCALE, LOCALES};
pub use resolve::resolve_locale;
