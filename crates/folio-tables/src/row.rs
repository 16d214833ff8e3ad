//! Row view trait

use crate::value::Value;

/// A flat, display-oriented snapshot of one entity's row-relevant fields
///
/// Implementations are plain structs built from a domain entity. `FIELDS`
/// lists every field name [`RowView::value`] answers for; table builders
/// check column accessors against it, so a typo in a column definition is
/// rejected when the table is built rather than rendering an empty column.
///
/// # Example
///
/// ```
/// use folio_tables::{RowView, Value};
///
/// struct CurrencyListView {
///     id: i64,
///     code: String,
///     is_active: bool,
/// }
///
/// impl RowView for CurrencyListView {
///     const FIELDS: &'static [&'static str] = &["id", "code", "is_active"];
///
///     fn value(&self, field: &str) -> Value {
///         match field {
///             "id" => self.id.into(),
///             "code" => self.code.as_str().into(),
///             "is_active" => self.is_active.into(),
///             _ => Value::Null,
///         }
///     }
/// }
///
/// let row = CurrencyListView { id: 1, code: "CHF".into(), is_active: true };
/// assert_eq!(row.value("code"), Value::Text("CHF".into()));
/// assert!(CurrencyListView::has_field("is_active"));
/// ```
pub trait RowView: Send + Sync + 'static {
	/// Names of the fields this row view exposes
	const FIELDS: &'static [&'static str];

	/// Returns the value of a field, `Value::Null` for unknown fields
	fn value(&self, field: &str) -> Value;

	/// Whether the row view declares the field
	fn has_field(field: &str) -> bool {
		Self::FIELDS.contains(&field)
	}
}
