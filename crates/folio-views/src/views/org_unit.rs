//! Org unit list

use std::sync::Arc;

use folio_tables::column::ColumnDescriptor;
use folio_tables::formatter::{Formatter, markup};
use folio_tables::provider::ColumnProvider;
use folio_tables::{Reference, Result, RowView, TableBuilder, TableDefinition, Value};

use super::actor_ref;
use crate::models::OrgUnit;
use crate::routes::Routes;

/// An org unit row
#[derive(Debug, Clone, PartialEq)]
pub struct OrgUnitListView {
	pub id: i64,
	pub ref_id: Option<String>,
	pub name: String,
	pub org_unit_type: Option<Reference>,
	pub is_active: bool,
	pub manager: Option<Reference>,
}

impl OrgUnitListView {
	/// Domain type custom attributes are defined for
	pub const DOMAIN_TYPE: &'static str = "OrgUnit";

	/// Snapshot of an org unit, a missing manager stays empty
	pub fn new(org_unit: &OrgUnit, routes: &dyn Routes) -> Self {
		Self {
			id: org_unit.id,
			ref_id: org_unit.ref_id.clone(),
			name: org_unit.name.clone(),
			org_unit_type: org_unit
				.org_unit_type
				.as_ref()
				.map(|t| Reference::new(t.id, t.name.clone())),
			is_active: org_unit.is_active,
			manager: org_unit.manager.as_deref().map(|m| actor_ref(m, routes)),
		}
	}

	/// The org unit table, with one column per custom attribute
	pub fn table(routes: Arc<dyn Routes>, attributes: &dyn ColumnProvider<Self>) -> Result<TableDefinition<Self>> {
		TableBuilder::new()
			.column(ColumnDescriptor::new("refId", "ref_id", "object.org_unit.ref_id.label"))
			.column(ColumnDescriptor::new("name", "name", "object.org_unit.name.label"))
			.column(
				ColumnDescriptor::new("type", "org_unit_type", "object.org_unit.type.label")
					.formatter(Formatter::reference()),
			)
			.column(
				ColumnDescriptor::new("isActive", "is_active", "object.org_unit.is_active.label")
					.formatter(Formatter::boolean()),
			)
			.column(
				ColumnDescriptor::new("manager", "manager", "object.org_unit.manager.label")
					.formatter(Formatter::reference())
					.value_css_class(markup::ROWLINK_SKIP),
			)
			.columns_from(attributes, Self::DOMAIN_TYPE)
			.row_action(move |row: &Self| routes.org_unit_view(row.id))
			.empty_message_key("object.org_unit.table.empty")
			.build()
	}
}

impl RowView for OrgUnitListView {
	const FIELDS: &'static [&'static str] = &["id", "ref_id", "name", "org_unit_type", "is_active", "manager"];

	fn value(&self, field: &str) -> Value {
		match field {
			"id" => self.id.into(),
			"ref_id" => self.ref_id.clone().into(),
			"name" => self.name.as_str().into(),
			"org_unit_type" => self.org_unit_type.clone().into(),
			"is_active" => self.is_active.into(),
			"manager" => self.manager.clone().into(),
			_ => Value::Null,
		}
	}
}
