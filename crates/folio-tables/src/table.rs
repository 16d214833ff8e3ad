//! Table definitions
//!
//! A [`TableDefinition`] is the registered, immutable configuration of one
//! grid type: ordered columns, identity field, empty-state message and an
//! optional row action. It is assembled by a [`TableBuilder`] which rejects
//! duplicate column names and accessors the row view does not declare.
//!
//! Definitions are `Send + Sync`. Tables that depend on nothing request
//! scoped are built once and kept in a `LazyLock`; tables parameterized by
//! request services are rebuilt per request.

use std::collections::HashSet;
use std::fmt::{self, Debug};
use std::sync::Arc;

use serde::Serialize;

use crate::column::{ColumnDescriptor, SorterType};
use crate::error::{Result, TableError};
use crate::formatter::FormatContext;
use crate::i18n::MessageResolver;
use crate::provider::ColumnProvider;
use crate::row::RowView;
use crate::settings::FormatSettings;

type RowActionFn<R> = dyn Fn(&R) -> String + Send + Sync;

/// Builder for [`TableDefinition`]
///
/// # Example
///
/// ```rust
/// use folio_tables::column::ColumnDescriptor;
/// use folio_tables::formatter::Formatter;
/// use folio_tables::{RowView, TableBuilder, Value};
///
/// struct PortfolioTypeListView {
///     id: i64,
///     name: String,
///     selectable: bool,
/// }
///
/// impl RowView for PortfolioTypeListView {
///     const FIELDS: &'static [&'static str] = &["id", "name", "selectable"];
///
///     fn value(&self, field: &str) -> Value {
///         match field {
///             "id" => self.id.into(),
///             "name" => self.name.as_str().into(),
///             "selectable" => self.selectable.into(),
///             _ => Value::Null,
///         }
///     }
/// }
///
/// let table = TableBuilder::<PortfolioTypeListView>::new()
///     .column(ColumnDescriptor::new("name", "name", "object.portfolio_type.name.label"))
///     .column(
///         ColumnDescriptor::new("selectable", "selectable", "object.portfolio_type.selectable.label")
///             .formatter(Formatter::boolean()),
///     )
///     .empty_message_key("object.portfolio_type.table.empty")
///     .build()
///     .unwrap();
///
/// assert_eq!(table.columns().len(), 2);
///
/// let typo = TableBuilder::<PortfolioTypeListView>::new()
///     .column(ColumnDescriptor::new("name", "nmae", "object.portfolio_type.name.label"))
///     .build();
/// assert!(typo.is_err());
/// ```
pub struct TableBuilder<R> {
	id_field: String,
	columns: Vec<ColumnDescriptor<R>>,
	empty_message_key: Option<String>,
	row_action: Option<Arc<RowActionFn<R>>>,
	settings: FormatSettings,
}

impl<R: RowView> Default for TableBuilder<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: RowView> TableBuilder<R> {
	/// Creates a builder with `id` as identity field
	pub fn new() -> Self {
		Self {
			id_field: "id".to_string(),
			columns: Vec::new(),
			empty_message_key: None,
			row_action: None,
			settings: FormatSettings::default(),
		}
	}

	/// Sets the identity field
	pub fn id_field(mut self, field: impl Into<String>) -> Self {
		self.id_field = field.into();
		self
	}

	/// Appends a column
	pub fn column(mut self, column: ColumnDescriptor<R>) -> Self {
		self.columns.push(column);
		self
	}

	/// Appends a column when `condition` holds
	pub fn column_if(self, condition: bool, column: ColumnDescriptor<R>) -> Self {
		if condition { self.column(column) } else { self }
	}

	/// Appends the columns a provider supplies for `domain_type`
	pub fn columns_from(mut self, provider: &dyn ColumnProvider<R>, domain_type: &str) -> Self {
		let extra = provider.columns_for(domain_type);
		tracing::trace!(domain_type, count = extra.len(), "provider columns");
		self.columns.extend(extra);
		self
	}

	/// Sets the message key shown when the table has no rows
	pub fn empty_message_key(mut self, key: impl Into<String>) -> Self {
		self.empty_message_key = Some(key.into());
		self
	}

	/// Makes whole rows link to the URL computed by `action`
	pub fn row_action<F>(mut self, action: F) -> Self
	where
		F: Fn(&R) -> String + Send + Sync + 'static,
	{
		self.row_action = Some(Arc::new(action));
		self
	}

	/// Sets the formatting settings used when filling the table
	pub fn settings(mut self, settings: FormatSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Validates and freezes the definition
	pub fn build(self) -> Result<TableDefinition<R>> {
		let table = std::any::type_name::<R>();

		if !R::has_field(&self.id_field) {
			return Err(TableError::UnknownIdField {
				table,
				field: self.id_field,
			});
		}

		let mut seen = HashSet::with_capacity(self.columns.len());
		for column in &self.columns {
			if !seen.insert(column.name()) {
				return Err(TableError::DuplicateColumn {
					table,
					column: column.name().to_string(),
				});
			}
			if let Some(field) = column.accessor().field()
				&& !R::has_field(field)
			{
				return Err(TableError::UnknownField {
					table,
					column: column.name().to_string(),
					field: field.to_string(),
				});
			}
		}

		tracing::debug!(table, columns = self.columns.len(), "built table definition");

		Ok(TableDefinition {
			id_field: self.id_field,
			columns: self.columns,
			empty_message_key: self.empty_message_key,
			row_action: self.row_action,
			settings: Arc::new(self.settings),
		})
	}
}

/// The registered configuration of one grid type
pub struct TableDefinition<R> {
	id_field: String,
	columns: Vec<ColumnDescriptor<R>>,
	empty_message_key: Option<String>,
	row_action: Option<Arc<RowActionFn<R>>>,
	settings: Arc<FormatSettings>,
}

impl<R> Clone for TableDefinition<R> {
	fn clone(&self) -> Self {
		Self {
			id_field: self.id_field.clone(),
			columns: self.columns.clone(),
			empty_message_key: self.empty_message_key.clone(),
			row_action: self.row_action.clone(),
			settings: Arc::clone(&self.settings),
		}
	}
}

impl<R> Debug for TableDefinition<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TableDefinition")
			.field("id_field", &self.id_field)
			.field("columns", &self.columns)
			.field("empty_message_key", &self.empty_message_key)
			.field("row_action", &self.row_action.is_some())
			.finish_non_exhaustive()
	}
}

impl<R: RowView> TableDefinition<R> {
	/// Identity field name
	pub fn id_field(&self) -> &str {
		&self.id_field
	}

	/// All columns, in order
	pub fn columns(&self) -> &[ColumnDescriptor<R>] {
		&self.columns
	}

	/// Columns that are not hidden, in order
	pub fn visible_columns(&self) -> impl Iterator<Item = &ColumnDescriptor<R>> {
		self.columns.iter().filter(|c| !c.is_hidden())
	}

	/// Looks up a column by name
	pub fn column(&self, name: &str) -> Option<&ColumnDescriptor<R>> {
		self.columns.iter().find(|c| c.name() == name)
	}

	/// Empty-state message key
	pub fn empty_message_key(&self) -> Option<&str> {
		self.empty_message_key.as_deref()
	}

	/// Whether rows are clickable
	pub fn has_row_action(&self) -> bool {
		self.row_action.is_some()
	}

	/// Formatting settings
	pub fn settings(&self) -> &FormatSettings {
		&self.settings
	}

	/// URL the row links to
	pub fn row_url(&self, row: &R) -> Option<String> {
		self.row_action.as_ref().map(|action| action(row))
	}

	/// Returns a copy with the named columns hidden and all others shown
	///
	/// Unknown names are rejected.
	pub fn with_hidden_columns(&self, names: &[&str]) -> Result<Self> {
		if let Some(unknown) = names.iter().find(|n| self.column(n).is_none()) {
			return Err(TableError::UnknownColumn(unknown.to_string()));
		}
		let mut table = self.clone();
		for column in &mut table.columns {
			let hide = names.contains(&column.name());
			column.set_hidden(hide);
		}
		Ok(table)
	}

	/// Returns a copy rendering with `settings`
	pub fn with_settings(&self, settings: FormatSettings) -> Self {
		let mut table = self.clone();
		table.settings = Arc::new(settings);
		table
	}

	/// Produces the render-ready model for `rows`
	pub fn fill(&self, rows: &[R], messages: &dyn MessageResolver) -> FilledTable {
		let ctx = FormatContext::new(&self.settings, messages);
		tracing::trace!(
			table = std::any::type_name::<R>(),
			rows = rows.len(),
			"filling table"
		);

		let headers = self
			.visible_columns()
			.map(|column| HeaderCell {
				name: column.name().to_string(),
				label: if column.label_key().is_empty() {
					String::new()
				} else {
					messages.message(column.label_key(), &[])
				},
				css: column.header_css().to_string(),
				sorter: column.sorter_type(),
			})
			.collect();

		let rows = rows
			.iter()
			.map(|row| {
				let url = self.row_url(row);
				let cells = self
					.visible_columns()
					.map(|column| FilledCell {
						column: column.name().to_string(),
						html: column.render(row, &ctx),
						css: column.value_css(),
						row_action: if column.skips_row_action() {
							None
						} else {
							url.clone()
						},
					})
					.collect();
				FilledRow {
					id: row.value(&self.id_field).as_id(),
					url,
					cells,
				}
			})
			.collect::<Vec<_>>();

		let empty_message = match (&self.empty_message_key, rows.is_empty()) {
			(Some(key), true) => Some(messages.message(key, &[])),
			_ => None,
		};

		FilledTable {
			headers,
			rows,
			empty_message,
		}
	}
}

/// A rendered header cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderCell {
	/// Column key
	pub name: String,
	/// Resolved label
	pub label: String,
	/// Header CSS classes
	pub css: String,
	/// Sort strategy
	pub sorter: SorterType,
}

/// A rendered value cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilledCell {
	/// Column key
	pub column: String,
	/// Cell markup
	pub html: String,
	/// Cell CSS classes
	pub css: String,
	/// Row URL triggered by clicking this cell, `None` for cells that skip
	/// row navigation
	pub row_action: Option<String>,
}

/// A rendered row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilledRow {
	/// Row identifier
	pub id: Option<i64>,
	/// Row action URL
	pub url: Option<String>,
	/// Cells, in column order
	pub cells: Vec<FilledCell>,
}

impl FilledRow {
	/// Looks up a cell by column key
	pub fn cell(&self, column: &str) -> Option<&FilledCell> {
		self.cells.iter().find(|c| c.column == column)
	}
}

/// Render-ready table handed to the grid component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilledTable {
	/// Header cells of visible columns
	pub headers: Vec<HeaderCell>,
	/// Rows
	pub rows: Vec<FilledRow>,
	/// Resolved empty-state message, set only when there are no rows
	pub empty_message: Option<String>,
}

impl FilledTable {
	/// Number of rows
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Whether the table has no rows
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::formatter::Formatter;
	use crate::i18n::KeyEcho;
	use crate::value::Value;

	struct Row {
		id: i64,
		name: &'static str,
	}

	impl RowView for Row {
		const FIELDS: &'static [&'static str] = &["id", "name"];

		fn value(&self, field: &str) -> Value {
			match field {
				"id" => self.id.into(),
				"name" => self.name.into(),
				_ => Value::Null,
			}
		}
	}

	fn assert_send_sync<T: Send + Sync>() {}

	#[test]
	fn test_definition_is_shareable() {
		assert_send_sync::<TableDefinition<Row>>();
	}

	#[test]
	fn test_duplicate_column_rejected() {
		let result = TableBuilder::<Row>::new()
			.column(ColumnDescriptor::new("name", "name", ""))
			.column(ColumnDescriptor::new("name", "id", ""))
			.build();
		assert!(matches!(
			result,
			Err(TableError::DuplicateColumn { ref column, .. }) if column == "name"
		));
	}

	#[test]
	fn test_unknown_id_field_rejected() {
		let result = TableBuilder::<Row>::new().id_field("uid").build();
		assert!(matches!(result, Err(TableError::UnknownIdField { .. })));
	}

	#[test]
	fn test_computed_columns_skip_field_check() {
		let table = TableBuilder::<Row>::new()
			.column(ColumnDescriptor::computed("upper", "", |r: &Row| {
				r.name.to_uppercase().into()
			}))
			.build()
			.unwrap();
		let filled = table.fill(&[Row { id: 1, name: "ops" }], &KeyEcho);
		assert_eq!(filled.rows[0].cells[0].html, "OPS");
	}

	#[test]
	fn test_column_if() {
		let table = TableBuilder::<Row>::new()
			.column_if(false, ColumnDescriptor::new("name", "name", ""))
			.column_if(true, ColumnDescriptor::new("id", "id", ""))
			.build()
			.unwrap();
		assert_eq!(table.columns().len(), 1);
		assert_eq!(table.columns()[0].name(), "id");
	}

	#[test]
	fn test_with_hidden_columns() {
		let table = TableBuilder::<Row>::new()
			.column(ColumnDescriptor::new("id", "id", ""))
			.column(ColumnDescriptor::new("name", "name", ""))
			.build()
			.unwrap();

		let hidden = table.with_hidden_columns(&["id"]).unwrap();
		let names: Vec<_> = hidden.visible_columns().map(|c| c.name()).collect();
		assert_eq!(names, vec!["name"]);
		// the shared definition is untouched
		assert_eq!(table.visible_columns().count(), 2);

		assert!(matches!(
			table.with_hidden_columns(&["nope"]),
			Err(TableError::UnknownColumn(_))
		));
	}

	#[test]
	fn test_fill_empty_table_resolves_empty_message() {
		let table = TableBuilder::<Row>::new()
			.column(ColumnDescriptor::new("name", "name", "label.name"))
			.empty_message_key("table.empty")
			.build()
			.unwrap();
		let filled = table.fill(&[], &KeyEcho);
		assert!(filled.is_empty());
		assert_eq!(filled.empty_message.as_deref(), Some("table.empty"));
		assert_eq!(filled.headers[0].label, "label.name");
	}

	#[test]
	fn test_fill_sets_row_id_and_formatters() {
		let table = TableBuilder::<Row>::new()
			.column(
				ColumnDescriptor::new("name", "name", "")
					.formatter(Formatter::custom(|_, v, _| format!("[{}]", v.to_plain_string()))),
			)
			.build()
			.unwrap();
		let filled = table.fill(&[Row { id: 9, name: "x" }], &KeyEcho);
		assert_eq!(filled.len(), 1);
		assert_eq!(filled.rows[0].id, Some(9));
		assert_eq!(filled.rows[0].url, None);
		assert_eq!(filled.rows[0].cell("name").unwrap().html, "[x]");
		assert_eq!(filled.empty_message, None);
	}
}
