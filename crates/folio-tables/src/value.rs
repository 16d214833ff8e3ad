//! Cell values extracted from row views

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A lightweight handle on a related object
///
/// Row views keep references to related entities (a manager, an org unit,
/// a cost center) as id + display label, plus the URL of the object's page
/// when the caller resolved one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
	/// Identifier of the related object
	pub id: i64,
	/// Display label
	pub label: String,
	/// Link to the related object's page
	pub url: Option<String>,
}

impl Reference {
	/// Create a reference without a link
	pub fn new(id: i64, label: impl Into<String>) -> Self {
		Self {
			id,
			label: label.into(),
			url: None,
		}
	}

	/// Attach a link to the reference
	pub fn with_url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());
		self
	}
}

/// A raw cell value, handed to formatters
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
	/// Absent value (missing relation, unset field)
	#[default]
	Null,
	/// Text
	Text(String),
	/// Boolean flag
	Bool(bool),
	/// Integer
	Integer(i64),
	/// Exact decimal (amounts)
	Decimal(Decimal),
	/// Calendar date
	Date(NaiveDate),
	/// Date and time
	DateTime(NaiveDateTime),
	/// Related object
	Ref(Reference),
	/// List of values
	List(Vec<Value>),
}

impl Value {
	/// Returns true for values that render as the empty placeholder
	pub fn is_empty(&self) -> bool {
		match self {
			Value::Null => true,
			Value::Text(s) => s.is_empty(),
			Value::List(items) => items.is_empty(),
			_ => false,
		}
	}

	/// Returns the id of the value when it identifies a row
	pub fn as_id(&self) -> Option<i64> {
		match self {
			Value::Integer(id) => Some(*id),
			Value::Ref(reference) => Some(reference.id),
			_ => None,
		}
	}

	/// Returns the boolean content, if any
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Plain text representation, without markup
	///
	/// Used for sorting, filtering and list joins.
	pub fn to_plain_string(&self) -> String {
		match self {
			Value::Null => String::new(),
			Value::Text(s) => s.clone(),
			Value::Bool(b) => b.to_string(),
			Value::Integer(i) => i.to_string(),
			Value::Decimal(d) => d.normalize().to_string(),
			Value::Date(d) => d.to_string(),
			Value::DateTime(dt) => dt.to_string(),
			Value::Ref(r) => r.label.clone(),
			Value::List(items) => items
				.iter()
				.map(Value::to_plain_string)
				.collect::<Vec<_>>()
				.join(", "),
		}
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Text(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Text(value.to_string())
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Integer(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Integer(i64::from(value))
	}
}

impl From<Decimal> for Value {
	fn from(value: Decimal) -> Self {
		Value::Decimal(value)
	}
}

impl From<NaiveDate> for Value {
	fn from(value: NaiveDate) -> Self {
		Value::Date(value)
	}
}

impl From<NaiveDateTime> for Value {
	fn from(value: NaiveDateTime) -> Self {
		Value::DateTime(value)
	}
}

impl From<Reference> for Value {
	fn from(value: Reference) -> Self {
		Value::Ref(value)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(values: Vec<T>) -> Self {
		Value::List(values.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Value::Null)
	}
}
