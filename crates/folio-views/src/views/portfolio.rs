//! Portfolio list

use std::sync::Arc;

use folio_tables::column::ColumnDescriptor;
use folio_tables::formatter::{Formatter, markup};
use folio_tables::provider::ColumnProvider;
use folio_tables::{Reference, Result, RowView, TableBuilder, TableDefinition, Value};

use super::actor_ref;
use crate::models::{Portfolio, Stakeholder};
use crate::routes::Routes;

/// A portfolio row
///
/// `stakeholder_types` is only filled when the list is shown in the context
/// of an actor, see [`PortfolioListView::with_stakeholders`].
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioListView {
	pub id: i64,
	pub ref_id: Option<String>,
	pub name: String,
	pub portfolio_type: Option<Reference>,
	pub is_active: bool,
	pub manager: Option<Reference>,
	pub stakeholder_types: Vec<String>,
}

impl PortfolioListView {
	/// Domain type custom attributes are defined for
	pub const DOMAIN_TYPE: &'static str = "Portfolio";

	/// Columns hidden outside of an actor context
	pub const HIDE_STAKEHOLDER_TYPE_COLUMN: &'static [&'static str] = &["stakeholderTypes"];

	/// Snapshot of a portfolio
	pub fn new(portfolio: &Portfolio, routes: &dyn Routes) -> Self {
		Self {
			id: portfolio.id,
			ref_id: portfolio.ref_id.clone(),
			name: portfolio.name.clone(),
			portfolio_type: portfolio
				.portfolio_type
				.as_ref()
				.map(|t| Reference::new(t.id, t.name.clone())),
			is_active: portfolio.is_active,
			manager: portfolio.manager.as_ref().map(|m| actor_ref(m, routes)),
			stakeholder_types: Vec::new(),
		}
	}

	/// Snapshot of a portfolio listing the roles the given stakeholder
	/// records hold on it
	pub fn with_stakeholders(portfolio: &Portfolio, stakeholders: &[Stakeholder], routes: &dyn Routes) -> Self {
		let mut view = Self::new(portfolio, routes);
		view.stakeholder_types = stakeholders
			.iter()
			.map(|s| s.stakeholder_type.name.clone())
			.collect();
		view
	}

	/// The portfolio table, with one column per custom attribute
	pub fn table(routes: Arc<dyn Routes>, attributes: &dyn ColumnProvider<Self>) -> Result<TableDefinition<Self>> {
		TableBuilder::new()
			.column(ColumnDescriptor::new("refId", "ref_id", "object.portfolio.ref_id.label"))
			.column(ColumnDescriptor::new("name", "name", "object.portfolio.name.label"))
			.column(
				ColumnDescriptor::new("type", "portfolio_type", "object.portfolio.type.label")
					.formatter(Formatter::reference()),
			)
			.column(
				ColumnDescriptor::new("isActive", "is_active", "object.portfolio.is_active.label")
					.formatter(Formatter::boolean()),
			)
			.column(
				ColumnDescriptor::new("manager", "manager", "object.portfolio.manager.label")
					.formatter(Formatter::reference())
					.value_css_class(markup::ROWLINK_SKIP),
			)
			.column(
				ColumnDescriptor::new(
					"stakeholderTypes",
					"stakeholder_types",
					"object.portfolio.stakeholder_types.label",
				)
				.formatter(Formatter::list()),
			)
			.columns_from(attributes, Self::DOMAIN_TYPE)
			.row_action(move |row: &Self| routes.portfolio_overview(row.id))
			.empty_message_key("object.portfolio.table.empty")
			.build()
	}
}

impl RowView for PortfolioListView {
	const FIELDS: &'static [&'static str] = &[
		"id",
		"ref_id",
		"name",
		"portfolio_type",
		"is_active",
		"manager",
		"stakeholder_types",
	];

	fn value(&self, field: &str) -> Value {
		match field {
			"id" => self.id.into(),
			"ref_id" => self.ref_id.clone().into(),
			"name" => self.name.as_str().into(),
			"portfolio_type" => self.portfolio_type.clone().into(),
			"is_active" => self.is_active.into(),
			"manager" => self.manager.clone().into(),
			"stakeholder_types" => self.stakeholder_types.clone().into(),
			_ => Value::Null,
		}
	}
}
