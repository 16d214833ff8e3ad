//! Column providers
//!
//! Some tables grow a variable set of columns discovered at runtime, one per
//! custom attribute defined for the row's domain type. A provider is asked
//! for those columns while the table or filter config is being built.

use std::sync::Arc;

use crate::column::ColumnDescriptor;
use crate::filter::{FilterDescriptor, FilterWidget, SortStatus};
use crate::formatter::Formatter;
use crate::row::RowView;
use crate::value::Value;

/// Supplies extra table columns for a domain type
pub trait ColumnProvider<R>: Send + Sync {
	/// Columns to append to a table of `domain_type` rows
	fn columns_for(&self, domain_type: &str) -> Vec<ColumnDescriptor<R>>;
}

/// Supplies extra filter columns for a domain type
pub trait FilterColumnProvider: Send + Sync {
	/// Filter descriptors to append for `domain_type`
	fn filter_columns_for(&self, domain_type: &str) -> Vec<FilterDescriptor>;
}

/// Provider without extra columns
#[derive(Debug, Clone, Copy, Default)]
pub struct NoColumns;

impl<R> ColumnProvider<R> for NoColumns {
	fn columns_for(&self, _domain_type: &str) -> Vec<ColumnDescriptor<R>> {
		Vec::new()
	}
}

impl FilterColumnProvider for NoColumns {
	fn filter_columns_for(&self, _domain_type: &str) -> Vec<FilterDescriptor> {
		Vec::new()
	}
}

/// Value kind of a custom attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
	/// Free text
	Text,
	/// Yes/no
	Boolean,
	/// Whole or decimal number
	Number,
	/// Calendar date
	Date,
	/// Reference to another object
	Reference,
}

/// Definition of one custom attribute
#[derive(Debug, Clone, PartialEq)]
pub struct CustomAttributeDefinition {
	/// Attribute key, an identifier unique within the domain type
	pub key: String,
	/// Label message key
	pub label_key: String,
	/// Value kind
	pub kind: AttributeKind,
	/// Whether a filter column is offered
	pub filterable: bool,
}

/// Read access to custom attribute definitions and values
pub trait CustomAttributeStore: Send + Sync {
	/// Attributes defined for `domain_type`, in display order
	fn definitions(&self, domain_type: &str) -> Vec<CustomAttributeDefinition>;

	/// Value of `attribute` for the object `object_id`
	fn value(&self, domain_type: &str, object_id: i64, attribute: &str) -> Value;
}

/// Provides one column per custom attribute
///
/// Rows are matched to their attribute values through their `id` field.
pub struct CustomAttributeColumns<S> {
	store: Arc<S>,
}

impl<S: CustomAttributeStore + 'static> CustomAttributeColumns<S> {
	/// Creates a provider backed by `store`
	pub fn new(store: Arc<S>) -> Self {
		Self { store }
	}

	/// Column key of an attribute
	pub fn column_name(key: &str) -> String {
		format!("custom_attribute_{key}")
	}

	fn formatter<R: RowView>(kind: AttributeKind) -> Formatter<R> {
		match kind {
			AttributeKind::Text => Formatter::plain(),
			AttributeKind::Boolean => Formatter::boolean(),
			AttributeKind::Number => Formatter::number(),
			AttributeKind::Date => Formatter::date(),
			AttributeKind::Reference => Formatter::reference(),
		}
	}
}

impl<R, S> ColumnProvider<R> for CustomAttributeColumns<S>
where
	R: RowView,
	S: CustomAttributeStore + 'static,
{
	fn columns_for(&self, domain_type: &str) -> Vec<ColumnDescriptor<R>> {
		self.store
			.definitions(domain_type)
			.into_iter()
			.map(|definition| {
				let store = Arc::clone(&self.store);
				let domain = domain_type.to_string();
				let key = definition.key.clone();
				ColumnDescriptor::computed(
					Self::column_name(&definition.key),
					definition.label_key,
					move |row: &R| match row.value("id").as_id() {
						Some(id) => store.value(&domain, id, &key),
						None => Value::Null,
					},
				)
				.formatter(Self::formatter(definition.kind))
			})
			.collect()
	}
}

impl<S: CustomAttributeStore + 'static> FilterColumnProvider for CustomAttributeColumns<S> {
	fn filter_columns_for(&self, domain_type: &str) -> Vec<FilterDescriptor> {
		self.store
			.definitions(domain_type)
			.into_iter()
			.map(|definition| {
				let widget = if !definition.filterable {
					FilterWidget::None
				} else {
					match definition.kind {
						AttributeKind::Boolean => FilterWidget::Checkbox { default: true },
						AttributeKind::Date => FilterWidget::DateRange { from: None, to: None },
						AttributeKind::Text | AttributeKind::Number => FilterWidget::TextField {
							default: "*".to_string(),
						},
						AttributeKind::Reference => FilterWidget::None,
					}
				};
				FilterDescriptor::new(
					Self::column_name(&definition.key),
					format!("custom_attributes.{}", definition.key),
					definition.label_key,
					widget,
				)
				.sort(SortStatus::None)
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	use crate::formatter::FormatContext;
	use crate::i18n::KeyEcho;
	use crate::settings::FormatSettings;

	struct Row {
		id: i64,
	}

	impl RowView for Row {
		const FIELDS: &'static [&'static str] = &["id"];

		fn value(&self, field: &str) -> Value {
			match field {
				"id" => self.id.into(),
				_ => Value::Null,
			}
		}
	}

	struct Store {
		values: HashMap<(i64, &'static str), Value>,
	}

	impl CustomAttributeStore for Store {
		fn definitions(&self, domain_type: &str) -> Vec<CustomAttributeDefinition> {
			if domain_type != "Actor" {
				return Vec::new();
			}
			vec![
				CustomAttributeDefinition {
					key: "badge".into(),
					label_key: "custom.badge".into(),
					kind: AttributeKind::Text,
					filterable: true,
				},
				CustomAttributeDefinition {
					key: "remote".into(),
					label_key: "custom.remote".into(),
					kind: AttributeKind::Boolean,
					filterable: false,
				},
			]
		}

		fn value(&self, _domain_type: &str, object_id: i64, attribute: &str) -> Value {
			self.values
				.iter()
				.find(|((id, key), _)| *id == object_id && *key == attribute)
				.map(|(_, v)| v.clone())
				.unwrap_or(Value::Null)
		}
	}

	fn provider() -> CustomAttributeColumns<Store> {
		let mut values = HashMap::new();
		values.insert((1, "badge"), Value::from("B-17"));
		CustomAttributeColumns::new(Arc::new(Store { values }))
	}

	#[test]
	fn test_columns_for_domain_type() {
		let columns: Vec<ColumnDescriptor<Row>> = provider().columns_for("Actor");
		let names: Vec<_> = columns.iter().map(|c| c.name()).collect();
		assert_eq!(names, vec!["custom_attribute_badge", "custom_attribute_remote"]);
		assert!(ColumnProvider::<Row>::columns_for(&provider(), "OrgUnit").is_empty());
	}

	#[test]
	fn test_column_reads_store_by_row_id() {
		let settings = FormatSettings::default();
		let ctx = FormatContext::new(&settings, &KeyEcho);
		let columns: Vec<ColumnDescriptor<Row>> = provider().columns_for("Actor");
		assert_eq!(columns[0].render(&Row { id: 1 }, &ctx), "B-17");
		assert_eq!(columns[0].render(&Row { id: 2 }, &ctx), settings.empty_placeholder);
	}

	#[test]
	fn test_filter_columns() {
		let filters = provider().filter_columns_for("Actor");
		assert_eq!(filters[0].field_path, "custom_attributes.badge");
		assert!(matches!(filters[0].widget, FilterWidget::TextField { .. }));
		assert_eq!(filters[1].widget, FilterWidget::None);
		assert_eq!(filters[1].sort, SortStatus::None);
	}
}
