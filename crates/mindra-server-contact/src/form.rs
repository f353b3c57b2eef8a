// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact form state machine shared by the three form variants.

use std::time::Duration;

use mindra_common_i18n::Bundle;
use serde::{Deserialize, Serialize};

use crate::client::Submitter;
use crate::error::SubmitError;
use crate::submission::ContactSubmission;

/// How long the home modal keeps its success banner before closing.
pub const MODAL_CLOSE_DELAY: Duration = Duration::from_secs(2);

/// Which page the form lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
	/// "Book now" modal on the landing page: name and contact.
	HomeModal,
	/// Full contact page: name, date, event type, details.
	ContactPage,
	/// Business contact page: name, date, event type, message.
	BusinessContact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
	Name,
	Contact,
	Date,
	EventType,
	Message,
}

impl Field {
	/// Input name used in HTML forms and JSON bodies.
	pub fn key(self) -> &'static str {
		match self {
			Field::Name => "name",
			Field::Contact => "contact",
			Field::Date => "date",
			Field::EventType => "eventType",
			Field::Message => "message",
		}
	}
}

impl FormKind {
	pub fn fields(self) -> &'static [Field] {
		match self {
			FormKind::HomeModal => &[Field::Name, Field::Contact],
			FormKind::ContactPage | FormKind::BusinessContact => {
				&[Field::Name, Field::Date, Field::EventType, Field::Message]
			}
		}
	}

	/// The field whose value is sent as `contact`.
	///
	/// The full-page forms have no contact input and send the event date in
	/// its place.
	pub fn contact_field(self) -> Field {
		match self {
			FormKind::HomeModal => Field::Contact,
			FormKind::ContactPage | FormKind::BusinessContact => Field::Date,
		}
	}

	pub fn required(self) -> &'static [Field] {
		match self {
			FormKind::HomeModal => &[Field::Name, Field::Contact],
			FormKind::ContactPage => &[Field::Name, Field::Date],
			FormKind::BusinessContact => &[Field::Name, Field::Date, Field::Message],
		}
	}

	/// Delay after which a successful form closes itself, if it does.
	pub fn close_delay(self) -> Option<Duration> {
		match self {
			FormKind::HomeModal => Some(MODAL_CLOSE_DELAY),
			_ => None,
		}
	}
}

/// Raw input values, keyed by [`Field`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub contact: String,
	#[serde(default)]
	pub date: String,
	#[serde(default)]
	pub event_type: String,
	#[serde(default)]
	pub message: String,
}

impl FormFields {
	pub fn get(&self, field: Field) -> &str {
		match field {
			Field::Name => &self.name,
			Field::Contact => &self.contact,
			Field::Date => &self.date,
			Field::EventType => &self.event_type,
			Field::Message => &self.message,
		}
	}

	pub fn set(&mut self, field: Field, value: impl Into<String>) {
		let slot = match field {
			Field::Name => &mut self.name,
			Field::Contact => &mut self.contact,
			Field::Date => &mut self.date,
			Field::EventType => &mut self.event_type,
			Field::Message => &mut self.message,
		};
		*slot = value.into();
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
	#[default]
	Idle,
	Submitting,
	Success,
	Error,
}

/// One contact form instance.
#[derive(Debug, Clone)]
pub struct ContactForm {
	kind: FormKind,
	fields: FormFields,
	status: FormStatus,
	missing: Vec<Field>,
}

impl ContactForm {
	pub fn new(kind: FormKind) -> Self {
		Self::with_fields(kind, FormFields::default())
	}

	pub fn with_fields(kind: FormKind, fields: FormFields) -> Self {
		Self {
			kind,
			fields,
			status: FormStatus::Idle,
			missing: Vec::new(),
		}
	}

	pub fn kind(&self) -> FormKind {
		self.kind
	}

	pub fn fields(&self) -> &FormFields {
		&self.fields
	}

	pub fn status(&self) -> FormStatus {
		self.status
	}

	/// Fields that blocked the last submit attempt.
	pub fn missing(&self) -> &[Field] {
		&self.missing
	}

	pub fn inputs_disabled(&self) -> bool {
		self.status == FormStatus::Submitting
	}

	/// Edit a field. Ignored while a request is in flight.
	pub fn set(&mut self, field: Field, value: impl Into<String>) {
		if self.inputs_disabled() {
			return;
		}
		self.fields.set(field, value);
		self.missing.retain(|f| *f != field);
	}

	/// Presence check only.
	pub fn validate(&self) -> Result<(), Vec<Field>> {
		let missing: Vec<Field> = self
			.kind
			.required()
			.iter()
			.copied()
			.filter(|f| self.fields.get(*f).is_empty())
			.collect();
		if missing.is_empty() {
			Ok(())
		} else {
			Err(missing)
		}
	}

	/// The JSON body this form sends.
	pub fn to_submission(&self) -> ContactSubmission {
		let optional = |field: Field| -> Option<String> {
			if self.kind.fields().contains(&field) {
				Some(self.fields.get(field).to_string())
			} else {
				None
			}
		};
		ContactSubmission {
			name: self.fields.name.clone(),
			contact: self.fields.get(self.kind.contact_field()).to_string(),
			event_type: optional(Field::EventType),
			date: optional(Field::Date),
			message: optional(Field::Message),
		}
	}

	/// Validate and enter `Submitting`, returning the body to send.
	pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitError> {
		if self.status == FormStatus::Submitting {
			return Err(SubmitError::InFlight);
		}
		if let Err(missing) = self.validate() {
			self.missing = missing.clone();
			return Err(SubmitError::Invalid(missing));
		}
		self.missing.clear();
		self.status = FormStatus::Submitting;
		Ok(self.to_submission())
	}

	/// Record the outcome of the request started by [`begin_submit`](Self::begin_submit).
	///
	/// Success clears the inputs; failure keeps them. Returns the close delay
	/// when the form should close itself.
	pub fn finish(&mut self, outcome: &Result<(), SubmitError>) -> Option<Duration> {
		match outcome {
			Ok(()) => {
				self.status = FormStatus::Success;
				self.fields = FormFields::default();
				self.kind.close_delay()
			}
			Err(e) => {
				tracing::debug!(error = %e, kind = ?self.kind, "contact form submission failed");
				self.status = FormStatus::Error;
				None
			}
		}
	}

	/// Run one full submission through `submitter`.
	///
	/// Exactly one request is issued when validation passes; none otherwise.
	pub async fn submit<S>(&mut self, submitter: &S) -> Result<Option<Duration>, SubmitError>
	where
		S: Submitter + ?Sized,
	{
		let submission = self.begin_submit()?;
		let outcome = submitter.submit(&submission).await;
		let close_after = self.finish(&outcome);
		outcome.map(|()| close_after)
	}

	/// The modal was closed after its success delay.
	pub fn close(&mut self) {
		self.status = FormStatus::Idle;
		self.missing.clear();
	}

	/// Localized banner for the current status, if any.
	pub fn banner(&self, bundle: &'static Bundle) -> Option<&'static str> {
		match self.status {
			FormStatus::Success => Some(bundle.status.success),
			FormStatus::Error => Some(bundle.status.error),
			FormStatus::Idle if !self.missing.is_empty() => Some(bundle.status.required),
			_ => None,
		}
	}
}
