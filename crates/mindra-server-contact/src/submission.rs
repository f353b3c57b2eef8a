// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ContactError;

/// One contact request as sent to `POST /api/contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub contact: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub event_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub date: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

impl ContactSubmission {
	pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			contact: contact.into(),
			..Default::default()
		}
	}

	/// Parse a `POST /api/contact` body.
	///
	/// A body that is not JSON, or is JSON `null`, is [`ContactError::Malformed`].
	/// Any other non-object body carries no fields. Scalar field values are
	/// read as text; `null`, `false`, `0` and `""` count as absent.
	pub fn from_json(body: &[u8]) -> Result<Self, ContactError> {
		let value: Value =
			serde_json::from_slice(body).map_err(|e| ContactError::Malformed(e.to_string()))?;
		let map = match value {
			Value::Object(map) => map,
			Value::Null => {
				return Err(ContactError::Malformed("body is null".to_string()));
			}
			_ => return Ok(Self::default()),
		};
		let field = |key: &str| map.get(key).and_then(field_text);
		Ok(Self {
			name: field("name").unwrap_or_default(),
			contact: field("contact").unwrap_or_default(),
			event_type: field("eventType"),
			date: field("date"),
			message: field("message"),
		})
	}

	/// Both `name` and `contact` must be non-empty.
	pub fn validate(&self) -> Result<(), ContactError> {
		if self.name.is_empty() || self.contact.is_empty() {
			return Err(ContactError::Validation);
		}
		Ok(())
	}

	pub fn event_type(&self) -> Option<&str> {
		present(&self.event_type)
	}

	pub fn date(&self) -> Option<&str> {
		present(&self.date)
	}

	pub fn message(&self) -> Option<&str> {
		present(&self.message)
	}
}

fn present(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|v| !v.is_empty())
}

/// Text of a JSON field value, or `None` when the value is falsy.
fn field_text(value: &Value) -> Option<String> {
	match value {
		Value::Null | Value::Bool(false) => None,
		Value::String(s) if s.is_empty() => None,
		Value::String(s) => Some(s.clone()),
		Value::Number(n) if n.as_f64() == Some(0.0) => None,
		Value::Number(n) => Some(n.to_string()),
		Value::Bool(true) => Some("true".to_string()),
		Value::Array(_) | Value::Object(_) => Some(value.to_string()),
	}
}
