//! Portfolio type list

use std::sync::LazyLock;

use folio_tables::column::ColumnDescriptor;
use folio_tables::formatter::{Formatter, markup};
use folio_tables::{RowView, TableBuilder, TableDefinition, Value};

use crate::models::PortfolioType;
use crate::routes::{DefaultRoutes, Routes};

static PORTFOLIO_TYPE_TABLE: LazyLock<TableDefinition<PortfolioTypeListView>> = LazyLock::new(|| {
	TableBuilder::new()
		.column(ColumnDescriptor::new("name", "name", "object.portfolio_type.name.label"))
		.column(ColumnDescriptor::new(
			"description",
			"description",
			"object.portfolio_type.description.label",
		))
		.column(
			ColumnDescriptor::new("selectable", "selectable", "object.portfolio_type.selectable.label")
				.formatter(Formatter::boolean()),
		)
		.column(
			ColumnDescriptor::new("editActionLink", "id", "")
				.formatter(Formatter::edit_link(|row: &PortfolioTypeListView| {
					DefaultRoutes.manage_portfolio_type(row.id)
				}))
				.header_css_class(markup::BOOTSTRAP_COLUMN_1)
				.value_css_class(format!("{} {}", markup::TEXT_ALIGN_RIGHT, markup::ROWLINK_SKIP)),
		)
		.column(
			ColumnDescriptor::new("deleteActionLink", "id", "")
				.formatter(Formatter::delete_link(|row: &PortfolioTypeListView| {
					DefaultRoutes.delete_portfolio_type(row.id)
				}))
				.header_css_class(markup::BOOTSTRAP_COLUMN_1)
				.value_css_class(markup::TEXT_ALIGN_RIGHT),
		)
		.empty_message_key("object.portfolio_type.table.empty")
		.build()
		.expect("PORTFOLIO_TYPE_TABLE: invalid table definition")
});

/// A portfolio type row
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioTypeListView {
	pub id: i64,
	pub name: String,
	pub description: Option<String>,
	pub selectable: bool,
}

impl PortfolioTypeListView {
	/// Snapshot of a portfolio type
	pub fn new(portfolio_type: &PortfolioType) -> Self {
		Self {
			id: portfolio_type.id,
			name: portfolio_type.name.clone(),
			description: portfolio_type.description.clone(),
			selectable: portfolio_type.selectable,
		}
	}

	/// The shared portfolio type table
	pub fn table() -> &'static TableDefinition<Self> {
		&PORTFOLIO_TYPE_TABLE
	}
}

impl RowView for PortfolioTypeListView {
	const FIELDS: &'static [&'static str] = &["id", "name", "description", "selectable"];

	fn value(&self, field: &str) -> Value {
		match field {
			"id" => self.id.into(),
			"name" => self.name.as_str().into(),
			"description" => self.description.clone().into(),
			"selectable" => self.selectable.into(),
			_ => Value::Null,
		}
	}
}
