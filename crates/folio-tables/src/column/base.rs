//! Column descriptor definition

use std::fmt::Debug;
use std::sync::Arc;

use super::{Accessor, SorterType};
use crate::formatter::{markup, FormatContext, Formatter};
use crate::row::RowView;
use crate::value::Value;

type VisibleFn<R> = dyn Fn(&R) -> bool + Send + Sync;

/// Declarative description of one table column
///
/// Builder methods consume and return the descriptor.
///
/// # Example
///
/// ```rust
/// use folio_tables::column::{ColumnDescriptor, SorterType};
/// use folio_tables::formatter::{markup, Formatter};
/// # use folio_tables::{RowView, Value};
/// # struct ActorListView { id: i64 }
/// # impl RowView for ActorListView {
/// #     const FIELDS: &'static [&'static str] = &["id", "manager"];
/// #     fn value(&self, _field: &str) -> Value { Value::Null }
/// # }
///
/// let manager = ColumnDescriptor::<ActorListView>::new("manager", "manager", "object.actor.manager.label")
///     .formatter(Formatter::reference())
///     .skip_row_action();
///
/// assert_eq!(manager.sorter_type(), SorterType::None);
/// assert_eq!(manager.value_css(), markup::ROWLINK_SKIP);
/// ```
pub struct ColumnDescriptor<R> {
	name: String,
	accessor: Accessor<R>,
	label_key: String,
	sorter: SorterType,
	formatter: Option<Formatter<R>>,
	header_css: String,
	value_css: String,
	skip_row_action: bool,
	hidden: bool,
	visible_if: Option<Arc<VisibleFn<R>>>,
}

impl<R: 'static> ColumnDescriptor<R> {
	/// Creates a column reading the row view field `field`
	pub fn new(name: impl Into<String>, field: impl Into<String>, label_key: impl Into<String>) -> Self {
		Self::with_accessor(name, Accessor::Field(field.into()), label_key)
	}

	/// Creates a column whose value is computed from the row
	pub fn computed<F>(name: impl Into<String>, label_key: impl Into<String>, compute: F) -> Self
	where
		F: Fn(&R) -> Value + Send + Sync + 'static,
	{
		Self::with_accessor(name, Accessor::Computed(Arc::new(compute)), label_key)
	}

	fn with_accessor(name: impl Into<String>, accessor: Accessor<R>, label_key: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			accessor,
			label_key: label_key.into(),
			sorter: SorterType::None,
			formatter: None,
			header_css: String::new(),
			value_css: String::new(),
			skip_row_action: false,
			hidden: false,
			visible_if: None,
		}
	}

	/// Sets the sort strategy
	pub fn sorter(mut self, sorter: SorterType) -> Self {
		self.sorter = sorter;
		self
	}

	/// Sets the formatter, the plain formatter is used otherwise
	pub fn formatter(mut self, formatter: Formatter<R>) -> Self {
		self.formatter = Some(formatter);
		self
	}

	/// Sets CSS classes for the header cell
	pub fn header_css_class(mut self, css: impl Into<String>) -> Self {
		self.header_css = css.into();
		self
	}

	/// Sets CSS classes for value cells
	///
	/// A `rowlink-skip` class marks the column as skipping row navigation.
	pub fn value_css_class(mut self, css: impl Into<String>) -> Self {
		self.value_css = css.into();
		if self.value_css.split_whitespace().any(|c| c == markup::ROWLINK_SKIP) {
			self.skip_row_action = true;
		}
		self
	}

	/// Excludes the column's cells from row-level navigation
	pub fn skip_row_action(mut self) -> Self {
		self.skip_row_action = true;
		self
	}

	/// Hides the column
	pub fn hidden(mut self, hidden: bool) -> Self {
		self.hidden = hidden;
		self
	}

	/// Renders the placeholder for rows failing the predicate
	pub fn visible_if<F>(mut self, predicate: F) -> Self
	where
		F: Fn(&R) -> bool + Send + Sync + 'static,
	{
		self.visible_if = Some(Arc::new(predicate));
		self
	}
}

impl<R> ColumnDescriptor<R> {
	/// Column key, unique within a table
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Value source
	pub fn accessor(&self) -> &Accessor<R> {
		&self.accessor
	}

	/// Message key of the header label
	pub fn label_key(&self) -> &str {
		&self.label_key
	}

	/// Sort strategy
	pub fn sorter_type(&self) -> SorterType {
		self.sorter
	}

	/// Configured formatter
	pub fn formatter_ref(&self) -> Option<&Formatter<R>> {
		self.formatter.as_ref()
	}

	/// Header CSS classes
	pub fn header_css(&self) -> &str {
		&self.header_css
	}

	/// Value CSS classes, including `rowlink-skip` when the column skips
	/// row navigation
	pub fn value_css(&self) -> String {
		let has_skip = self
			.value_css
			.split_whitespace()
			.any(|c| c == markup::ROWLINK_SKIP);
		match (self.skip_row_action && !has_skip, self.value_css.is_empty()) {
			(true, true) => markup::ROWLINK_SKIP.to_string(),
			(true, false) => format!("{} {}", self.value_css, markup::ROWLINK_SKIP),
			(false, _) => self.value_css.clone(),
		}
	}

	/// Whether cells of this column are excluded from row navigation
	pub fn skips_row_action(&self) -> bool {
		self.skip_row_action
	}

	/// Whether the column is hidden
	pub fn is_hidden(&self) -> bool {
		self.hidden
	}

	pub(crate) fn set_hidden(&mut self, hidden: bool) {
		self.hidden = hidden;
	}
}

impl<R: RowView> ColumnDescriptor<R> {
	/// Extracts the raw value from a row
	pub fn extract(&self, row: &R) -> Value {
		match &self.accessor {
			Accessor::Field(field) => row.value(field),
			Accessor::Computed(compute) => compute(row),
		}
	}

	/// Whether the cell of `row` is shown
	pub fn is_visible_for(&self, row: &R) -> bool {
		self.visible_if.as_ref().is_none_or(|visible| visible(row))
	}

	/// Renders the cell markup for a row
	pub fn render(&self, row: &R, ctx: &FormatContext<'_>) -> String {
		if !self.is_visible_for(row) {
			return ctx.empty();
		}
		let value = self.extract(row);
		match &self.formatter {
			Some(formatter) => formatter.apply(row, &value, ctx),
			None => Formatter::<R>::plain().apply(row, &value, ctx),
		}
	}
}

impl<R> Clone for ColumnDescriptor<R> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			accessor: self.accessor.clone(),
			label_key: self.label_key.clone(),
			sorter: self.sorter,
			formatter: self.formatter.clone(),
			header_css: self.header_css.clone(),
			value_css: self.value_css.clone(),
			skip_row_action: self.skip_row_action,
			hidden: self.hidden,
			visible_if: self.visible_if.clone(),
		}
	}
}

impl<R> Debug for ColumnDescriptor<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ColumnDescriptor")
			.field("name", &self.name)
			.field("accessor", &self.accessor)
			.field("label_key", &self.label_key)
			.field("sorter", &self.sorter)
			.field("formatter", &self.formatter)
			.field("header_css", &self.header_css)
			.field("value_css", &self.value_css)
			.field("skip_row_action", &self.skip_row_action)
			.field("hidden", &self.hidden)
			.finish_non_exhaustive()
	}
}
