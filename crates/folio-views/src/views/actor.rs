//! Actor list

use std::sync::Arc;

use folio_tables::column::ColumnDescriptor;
use folio_tables::formatter::{Formatter, markup};
use folio_tables::provider::ColumnProvider;
use folio_tables::{Reference, Result, RowView, TableBuilder, TableDefinition, Value};

use super::{actor_ref, org_unit_ref};
use crate::models::Actor;
use crate::routes::Routes;

/// An actor row
#[derive(Debug, Clone, PartialEq)]
pub struct ActorListView {
	pub id: i64,
	pub employee_id: Option<String>,
	pub name: String,
	pub title: Option<String>,
	pub is_active: bool,
	pub org_unit: Option<Reference>,
	pub manager: Option<Reference>,
}

impl ActorListView {
	/// Domain type custom attributes are defined for
	pub const DOMAIN_TYPE: &'static str = "Actor";

	/// Snapshot of an actor
	pub fn new(actor: &Actor, routes: &dyn Routes) -> Self {
		Self {
			id: actor.id,
			employee_id: actor.employee_id.clone(),
			name: actor.name(),
			title: actor.title.clone(),
			is_active: actor.is_active,
			org_unit: actor.org_unit.as_ref().map(|o| org_unit_ref(o, routes)),
			manager: actor.manager.as_deref().map(|m| actor_ref(m, routes)),
		}
	}

	/// The actor table, with one column per custom attribute
	pub fn table(routes: Arc<dyn Routes>, attributes: &dyn ColumnProvider<Self>) -> Result<TableDefinition<Self>> {
		TableBuilder::new()
			.column(ColumnDescriptor::new("employeeId", "employee_id", "object.actor.employee_id.label"))
			.column(ColumnDescriptor::new("name", "name", "object.actor.name.label"))
			.column(ColumnDescriptor::new("title", "title", "object.actor.title.label"))
			.column(
				ColumnDescriptor::new("isActive", "is_active", "object.actor.is_active.label")
					.formatter(Formatter::boolean()),
			)
			.column(
				ColumnDescriptor::new("orgUnit", "org_unit", "object.actor.org_unit.label")
					.formatter(Formatter::reference())
					.value_css_class(markup::ROWLINK_SKIP),
			)
			.column(
				ColumnDescriptor::new("manager", "manager", "object.actor.manager.label")
					.formatter(Formatter::reference())
					.value_css_class(markup::ROWLINK_SKIP),
			)
			.columns_from(attributes, Self::DOMAIN_TYPE)
			.row_action(move |row: &Self| routes.actor_view(row.id))
			.empty_message_key("object.actor.table.empty")
			.build()
	}
}

impl RowView for ActorListView {
	const FIELDS: &'static [&'static str] =
		&["id", "employee_id", "name", "title", "is_active", "org_unit", "manager"];

	fn value(&self, field: &str) -> Value {
		match field {
			"id" => self.id.into(),
			"employee_id" => self.employee_id.clone().into(),
			"name" => self.name.as_str().into(),
			"title" => self.title.clone().into(),
			"is_active" => self.is_active.into(),
			"org_unit" => self.org_unit.clone().into(),
			"manager" => self.manager.clone().into(),
			_ => Value::Null,
		}
	}
}
