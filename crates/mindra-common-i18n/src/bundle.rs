// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation bundle structure.
//!
//! Every user-visible string on the site is a field here. Adding a string means
//! adding a field, which forces both locale catalogs to provide it.

/// All UI strings for one locale.
#[derive(Debug)]
pub struct Bundle {
	pub home: HomeText,
	pub modal: ModalText,
	pub contact: ContactText,
	pub business: BusinessText,
	pub status: StatusText,
}

/// Landing page.
#[derive(Debug)]
pub struct HomeText {
	pub est: &'static str,
	/// Hero title, one entry per rendered line.
	pub title: &'static [&'static str],
	pub play_reel: &'static str,
	pub book_now: &'static str,
	pub nav: HomeNavText,
}

#[derive(Debug)]
pub struct HomeNavText {
	pub home: &'static str,
	pub party: &'static str,
	pub business: &'static str,
	pub wedding: &'static str,
	pub contact: &'static str,
}

/// "Book now" modal on the landing page.
#[derive(Debug)]
pub struct ModalText {
	pub title: &'static str,
	pub subtitle: &'static str,
	pub name_label: &'static str,
	pub name_placeholder: &'static str,
	pub contact_label: &'static str,
	pub contact_placeholder: &'static str,
	pub send_button: &'static str,
	pub close: &'static str,
}

/// General contact page.
#[derive(Debug)]
pub struct ContactText {
	pub back: &'static str,
	pub title: &'static [&'static str],
	pub email_label: &'static str,
	pub phone_label: &'static str,
	pub form: ContactFormText,
}

#[derive(Debug)]
pub struct ContactFormText {
	pub name_placeholder: &'static str,
	pub date_placeholder: &'static str,
	pub type_placeholder: &'static str,
	pub details_placeholder: &'static str,
	pub send_button: &'static str,
	pub types: EventTypeText,
}

/// Labels for the event type selector.
#[derive(Debug)]
pub struct EventTypeText {
	pub default: &'static str,
	pub party: &'static str,
	pub business: &'static str,
	pub wedding: &'static str,
	pub other: &'static str,
}

/// Business sub-site.
#[derive(Debug)]
pub struct BusinessText {
	pub brand_suffix: &'static str,
	pub nav: BusinessNavText,
	pub home: BusinessHomeText,
	pub portfolio: PortfolioText,
	pub contact: BusinessContactText,
}

#[derive(Debug)]
pub struct BusinessNavText {
	pub home: &'static str,
	pub about: &'static str,
	pub portfolio: &'static str,
	pub contact: &'static str,
}

#[derive(Debug)]
pub struct BusinessHomeText {
	pub title: &'static [&'static str],
	pub lead: &'static str,
	pub request_proposal: &'static str,
	pub view_portfolio: &'static str,
}

#[derive(Debug)]
pub struct PortfolioText {
	pub view_project: &'static str,
	pub play: &'static str,
	pub pause: &'static str,
	pub mute: &'static str,
	pub unmute: &'static str,
	pub fullscreen: &'static str,
	pub restart: &'static str,
}

#[derive(Debug)]
pub struct BusinessContactText {
	pub title: &'static str,
	pub name_label: &'static str,
	pub name_placeholder: &'static str,
	pub date_label: &'static str,
	pub date_placeholder: &'static str,
	pub type_label: &'static str,
	pub type_placeholder: &'static str,
	pub message_label: &'static str,
	pub message_placeholder: &'static str,
	pub send_button: &'static str,
	pub why_title: &'static str,
	pub benefits: &'static [Benefit],
}

/// One entry of the "why hire us" list.
#[derive(Debug)]
pub struct Benefit {
	pub title: &'static str,
	pub body: &'static str,
}

/// Form status banners shared by all three contact forms.
#[derive(Debug)]
pub struct StatusText {
	pub sending: &'static str,
	pub success: &'static str,
	pub error: &'static str,
	pub required: &'static str,
}

impl Bundle {
	/// Flatten the bundle into `(dotted.key, value)` pairs.
	///
	/// List fields produce one entry per element with the index as the last key
	/// segment (`home.title.0`, `home.title.1`, ...).
	pub fn flatten(&'static self) -> Vec<(String, &'static str)> {
		let mut out = Vec::with_capacity(96);
		let mut put = |key: &str, value: &'static str| out.push((key.to_string(), value));

		put("home.est", self.home.est);
		put("home.play_reel", self.home.play_reel);
		put("home.book_now", self.home.book_now);
		put("home.nav.home", self.home.nav.home);
		put("home.nav.party", self.home.nav.party);
		put("home.nav.business", self.home.nav.business);
		put("home.nav.wedding", self.home.nav.wedding);
		put("home.nav.contact", self.home.nav.contact);

		put("modal.title", self.modal.title);
		put("modal.subtitle", self.modal.subtitle);
		put("modal.name_label", self.modal.name_label);
		put("modal.name_placeholder", self.modal.name_placeholder);
		put("modal.contact_label", self.modal.contact_label);
		put("modal.contact_placeholder", self.modal.contact_placeholder);
		put("modal.send_button", self.modal.send_button);
		put("modal.close", self.modal.close);

		put("contact.back", self.contact.back);
		put("contact.email_label", self.contact.email_label);
		put("contact.phone_label", self.contact.phone_label);
		let form = &self.contact.form;
		put("contact.form.name_placeholder", form.name_placeholder);
		put("contact.form.date_placeholder", form.date_placeholder);
		put("contact.form.type_placeholder", form.type_placeholder);
		put("contact.form.details_placeholder", form.details_placeholder);
		put("contact.form.send_button", form.send_button);
		put("contact.form.types.default", form.types.default);
		put("contact.form.types.party", form.types.party);
		put("contact.form.types.business", form.types.business);
		put("contact.form.types.wedding", form.types.wedding);
		put("contact.form.types.other", form.types.other);

		let business = &self.business;
		put("business.brand_suffix", business.brand_suffix);
		put("business.nav.home", business.nav.home);
		put("business.nav.about", business.nav.about);
		put("business.nav.portfolio", business.nav.portfolio);
		put("business.nav.contact", business.nav.contact);
		put("business.home.lead", business.home.lead);
		put("business.home.request_proposal", business.home.request_proposal);
		put("business.home.view_portfolio", business.home.view_portfolio);
		put("business.portfolio.view_project", business.portfolio.view_project);
		put("business.portfolio.play", business.portfolio.play);
		put("business.portfolio.pause", business.portfolio.pause);
		put("business.portfolio.mute", business.portfolio.mute);
		put("business.portfolio.unmute", business.portfolio.unmute);
		put("business.portfolio.fullscreen", business.portfolio.fullscreen);
		put("business.portfolio.restart", business.portfolio.restart);
		let bc = &business.contact;
		put("business.contact.title", bc.title);
		put("business.contact.name_label", bc.name_label);
		put("business.contact.name_placeholder", bc.name_placeholder);
		put("business.contact.date_label", bc.date_label);
		put("business.contact.date_placeholder", bc.date_placeholder);
		put("business.contact.type_label", bc.type_label);
		put("business.contact.type_placeholder", bc.type_placeholder);
		put("business.contact.message_label", bc.message_label);
		put("business.contact.message_placeholder", bc.message_placeholder);
		put("business.contact.send_button", bc.send_button);
		put("business.contact.why_title", bc.why_title);

		put("status.sending", self.status.sending);
		put("status.success", self.status.success);
		put("status.error", self.status.error);
		put("status.required", self.status.required);

		for (i, line) in self.home.title.iter().enumerate() {
			out.push((format!("home.title.{i}"), *line));
		}
		for (i, line) in self.contact.title.iter().enumerate() {
			out.push((format!("contact.title.{i}"), *line));
		}
		for (i, line) in self.business.home.title.iter().enumerate() {
			out.push((format!("business.home.title.{i}"), *line));
		}
		for (i, benefit) in self.business.contact.benefits.iter().enumerate() {
			out.push((format!("business.contact.benefits.{i}.title"), benefit.title));
			out.push((format!("business.contact.benefits.{i}.body"), benefit.body));
		}

		out
	}
}
