//! Portfolio stakeholder list

use std::sync::Arc;

use folio_tables::column::ColumnDescriptor;
use folio_tables::formatter::{Formatter, markup};
use folio_tables::{Reference, Result, RowView, TableBuilder, TableDefinition, Value};
use tracing::debug;

use super::{actor_ref, portfolio_ref};
use crate::lookup::Lookup;
use crate::models::Stakeholder;
use crate::routes::Routes;

/// A stakeholder row
#[derive(Debug, Clone, PartialEq)]
pub struct StakeholderListView {
	pub id: i64,
	pub portfolio_id: Option<i64>,
	pub actor: Reference,
	pub stakeholder_type: Reference,
	/// Resolved through the lookup, empty when the portfolio is gone
	pub portfolio: Option<Reference>,
}

impl StakeholderListView {
	/// Snapshot of a stakeholder, resolving its portfolio
	pub fn new(stakeholder: &Stakeholder, lookup: &dyn Lookup, routes: &dyn Routes) -> Self {
		let portfolio = stakeholder.portfolio_id.and_then(|id| {
			let portfolio = lookup.portfolio(id);
			if portfolio.is_none() {
				debug!(portfolio_id = id, stakeholder = stakeholder.id, "stakeholder portfolio not found");
			}
			portfolio.map(|p| portfolio_ref(&p, routes))
		});
		Self {
			id: stakeholder.id,
			portfolio_id: stakeholder.portfolio_id,
			actor: actor_ref(&stakeholder.actor, routes),
			stakeholder_type: Reference::new(stakeholder.stakeholder_type.id, stakeholder.stakeholder_type.name.clone()),
			portfolio,
		}
	}

	/// The stakeholder table
	pub fn table(routes: Arc<dyn Routes>) -> Result<TableDefinition<Self>> {
		let edit_routes = Arc::clone(&routes);
		let delete_routes = routes;
		TableBuilder::new()
			.column(
				ColumnDescriptor::new("name", "actor", "object.stakeholder.actor.label")
					.formatter(Formatter::reference()),
			)
			.column(
				ColumnDescriptor::new("role", "stakeholder_type", "object.stakeholder.role.label")
					.formatter(Formatter::reference()),
			)
			.column(
				ColumnDescriptor::new("portfolio", "portfolio", "object.stakeholder.portfolio.label")
					.formatter(Formatter::reference()),
			)
			.column(
				ColumnDescriptor::new("editActionLink", "id", "")
					.formatter(Formatter::edit_link(move |row: &Self| {
						row.portfolio_id
							.map(|portfolio_id| edit_routes.manage_portfolio_stakeholder(portfolio_id, row.id))
							.unwrap_or_default()
					}))
					.visible_if(|row: &Self| row.portfolio_id.is_some())
					.header_css_class(markup::BOOTSTRAP_COLUMN_1)
					.value_css_class(markup::TEXT_ALIGN_RIGHT),
			)
			.column(
				ColumnDescriptor::new("removeActionLink", "id", "")
					.formatter(Formatter::delete_link(move |row: &Self| {
						row.portfolio_id
							.map(|portfolio_id| delete_routes.delete_portfolio_stakeholder(portfolio_id, row.id))
							.unwrap_or_default()
					}))
					.visible_if(|row: &Self| row.portfolio_id.is_some())
					.header_css_class(markup::BOOTSTRAP_COLUMN_1)
					.value_css_class(markup::TEXT_ALIGN_RIGHT),
			)
			.empty_message_key("object.stakeholder.table.empty")
			.build()
	}
}

impl RowView for StakeholderListView {
	const FIELDS: &'static [&'static str] = &["id", "actor", "stakeholder_type", "portfolio"];

	fn value(&self, field: &str) -> Value {
		match field {
			"id" => self.id.into(),
			"actor" => self.actor.clone().into(),
			"stakeholder_type" => self.stakeholder_type.clone().into(),
			"portfolio" => self.portfolio.clone().into(),
			_ => Value::Null,
		}
	}
}
