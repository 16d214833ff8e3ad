//! Purchase order list

use std::sync::Arc;

use folio_tables::column::ColumnDescriptor;
use folio_tables::formatter::{Formatter, markup};
use folio_tables::{Reference, Result, RowView, TableBuilder, TableDefinition, Value};
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::PurchaseOrder;
use crate::routes::Routes;

/// A purchase order row
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOrderListView {
	pub id: i64,
	pub ref_id: String,
	pub is_cancelled: bool,
	/// Sum of the line item amounts, `None` when it does not fit a `Decimal`
	pub amount: Option<Decimal>,
	pub line_items: Vec<Reference>,
}

impl PurchaseOrderListView {
	/// Snapshot of a purchase order, totalling its line items
	///
	/// Line items without an amount count as zero.
	pub fn new(purchase_order: &PurchaseOrder, routes: &dyn Routes) -> Self {
		let amount = total_amount(purchase_order.line_items.iter().filter_map(|item| item.amount));
		if amount.is_none() {
			warn!(purchase_order = purchase_order.id, "line item total overflows");
		}
		Self {
			id: purchase_order.id,
			ref_id: purchase_order.ref_id.clone(),
			is_cancelled: purchase_order.is_cancelled,
			amount,
			line_items: purchase_order
				.line_items
				.iter()
				.map(|item| {
					Reference::new(item.id, item.ref_id.clone())
						.with_url(routes.purchase_order_line_item_view(item.id))
				})
				.collect(),
		}
	}

	/// The purchase order table
	pub fn table(routes: Arc<dyn Routes>) -> Result<TableDefinition<Self>> {
		TableBuilder::new()
			.column(ColumnDescriptor::new("refId", "ref_id", "object.purchase_order.ref_id.label"))
			.column(
				ColumnDescriptor::new("amount", "amount", "object.purchase_order.amount.label")
					.formatter(Formatter::number()),
			)
			.column(
				ColumnDescriptor::new("lineItems", "line_items", "object.purchase_order.line_items.label")
					.formatter(Formatter::list())
					.value_css_class(markup::ROWLINK_SKIP),
			)
			.column(
				ColumnDescriptor::new("isCancelled", "is_cancelled", "object.purchase_order.is_cancelled.label")
					.formatter(Formatter::boolean())
					.header_css_class(markup::BOOTSTRAP_COLUMN_2),
			)
			.row_action(move |row: &Self| routes.purchase_order_view(row.id))
			.empty_message_key("object.purchase_order.table.empty")
			.build()
	}
}

/// Exact sum of `amounts`, `None` on overflow
fn total_amount(amounts: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
	amounts
		.into_iter()
		.try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
}

impl RowView for PurchaseOrderListView {
	const FIELDS: &'static [&'static str] = &["id", "ref_id", "is_cancelled", "amount", "line_items"];

	fn value(&self, field: &str) -> Value {
		match field {
			"id" => self.id.into(),
			"ref_id" => self.ref_id.as_str().into(),
			"is_cancelled" => self.is_cancelled.into(),
			"amount" => self.amount.into(),
			"line_items" => self.line_items.clone().into(),
			_ => Value::Null,
		}
	}
}
