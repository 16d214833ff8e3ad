//! Purchase order line item list

use std::sync::LazyLock;

use folio_tables::column::ColumnDescriptor;
use folio_tables::formatter::{Formatter, markup};
use folio_tables::{Reference, RowView, TableBuilder, TableDefinition, Value};
use rust_decimal::Decimal;

use crate::models::PurchaseOrderLineItem;
use crate::routes::{DefaultRoutes, Routes};

const SELECT_URL_FORMAT: &str = "<a href=\"{url}\"><span class=\"fa fa-lock\"></span></a>";

const OPEX_KEY: &str = "object.expenditure_type.opex.label";
const CAPEX_KEY: &str = "object.expenditure_type.capex.label";

static LINE_ITEM_TABLE: LazyLock<TableDefinition<PurchaseOrderLineItemListView>> = LazyLock::new(|| {
	TableBuilder::new()
		.column(ColumnDescriptor::new("refId", "ref_id", "object.purchase_order_line_item.ref_id.label"))
		.column(ColumnDescriptor::new(
			"purchaseOrderRefId",
			"purchase_order_ref_id",
			"object.purchase_order_line_item.purchase_order.label",
		))
		.column(
			ColumnDescriptor::new("isAssociated", "is_associated", "object.purchase_order_line_item.is_associated.label")
				.formatter(Formatter::boolean()),
		)
		.column(
			ColumnDescriptor::new("shared", "shared", "object.purchase_order_line_item.shared.label")
				.formatter(Formatter::boolean()),
		)
		.column(
			ColumnDescriptor::new("isOpex", "is_opex", "object.purchase_order_line_item.expenditure_type.label")
				.formatter(Formatter::custom(|_, value, ctx| match value.as_bool() {
					Some(true) => ctx.messages.message(OPEX_KEY, &[]),
					Some(false) => ctx.messages.message(CAPEX_KEY, &[]),
					None => ctx.empty(),
				})),
		)
		.column(ColumnDescriptor::new("currency", "currency", "object.purchase_order_line_item.currency.label"))
		.column(
			ColumnDescriptor::new("amount", "amount", "object.purchase_order_line_item.amount.label")
				.formatter(Formatter::number()),
		)
		.column(
			ColumnDescriptor::new(
				"remainingAmount",
				"remaining_amount",
				"object.purchase_order_line_item.remaining_amount.label",
			)
			.formatter(Formatter::number()),
		)
		.column(
			ColumnDescriptor::new(
				"amountReceived",
				"amount_received",
				"object.purchase_order_line_item.amount_received.label",
			)
			.formatter(Formatter::number()),
		)
		.column(
			ColumnDescriptor::new("amountOpen", "amount_open", "object.purchase_order_line_item.amount_open.label")
				.formatter(Formatter::number()),
		)
		.column(
			ColumnDescriptor::new("costCenter", "cost_center", "object.purchase_order_line_item.cost_center.label")
				.formatter(Formatter::reference())
				.value_css_class(markup::ROWLINK_SKIP),
		)
		.column(
			ColumnDescriptor::new("isCancelled", "is_cancelled", "object.purchase_order_line_item.is_cancelled.label")
				.formatter(Formatter::boolean()),
		)
		.column(
			ColumnDescriptor::new("selectActionLink", "id", "")
				.formatter(Formatter::string_format(
					SELECT_URL_FORMAT,
					|row: &PurchaseOrderLineItemListView| row.select_url().unwrap_or_default(),
				))
				.visible_if(|row: &PurchaseOrderLineItemListView| row.select_url().is_some())
				.header_css_class(markup::BOOTSTRAP_COLUMN_1)
				.value_css_class(format!("{} {}", markup::TEXT_ALIGN_RIGHT, markup::ROWLINK_SKIP)),
		)
		.row_action(|row: &PurchaseOrderLineItemListView| DefaultRoutes.purchase_order_line_item_view(row.id))
		.empty_message_key("object.purchase_order_line_item.table.empty")
		.build()
		.expect("LINE_ITEM_TABLE: invalid table definition")
});

/// A purchase order line item row
///
/// The portfolio entry and work order are set when the list offers to
/// assign line items to a work order.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOrderLineItemListView {
	pub id: i64,
	pub portfolio_entry_id: Option<i64>,
	pub work_order_id: Option<i64>,
	pub is_associated: bool,
	pub shared: bool,
	pub ref_id: String,
	pub purchase_order_ref_id: String,
	pub currency: Option<String>,
	pub amount: Option<Decimal>,
	pub remaining_amount: Option<Decimal>,
	pub amount_received: Option<Decimal>,
	pub amount_open: Option<Decimal>,
	pub is_opex: bool,
	pub is_cancelled: bool,
	pub cost_center: Option<Reference>,
}

impl PurchaseOrderLineItemListView {
	/// Snapshot of a line item
	pub fn new(line_item: &PurchaseOrderLineItem, routes: &dyn Routes) -> Self {
		Self::for_work_order(line_item, None, None, routes)
	}

	/// Snapshot of a line item offered for assignment to a work order
	pub fn for_work_order(
		line_item: &PurchaseOrderLineItem,
		portfolio_entry_id: Option<i64>,
		work_order_id: Option<i64>,
		routes: &dyn Routes,
	) -> Self {
		let amount_open = match (line_item.amount, line_item.amount_received) {
			(Some(amount), Some(received)) => Some(amount - received),
			_ => None,
		};
		Self {
			id: line_item.id,
			portfolio_entry_id,
			work_order_id,
			is_associated: line_item.associated,
			shared: line_item.shared,
			ref_id: line_item.ref_id.clone(),
			purchase_order_ref_id: line_item.purchase_order_ref_id.clone(),
			currency: line_item.currency.as_ref().map(|c| c.code.clone()),
			amount: line_item.amount,
			remaining_amount: line_item.remaining_amount,
			amount_received: line_item.amount_received,
			amount_open,
			is_opex: line_item.is_opex,
			is_cancelled: line_item.is_cancelled,
			cost_center: line_item.cost_center.as_ref().map(|c| {
				Reference::new(c.id, c.name.clone()).with_url(routes.cost_center_view(c.id))
			}),
		}
	}

	/// The shared line item table
	pub fn table() -> &'static TableDefinition<Self> {
		&LINE_ITEM_TABLE
	}

	fn select_url(&self) -> Option<String> {
		let (portfolio_entry_id, work_order_id) = self.portfolio_entry_id.zip(self.work_order_id)?;
		Some(DefaultRoutes.select_work_order_line_item(portfolio_entry_id, work_order_id, self.id))
	}
}

impl RowView for PurchaseOrderLineItemListView {
	const FIELDS: &'static [&'static str] = &[
		"id",
		"is_associated",
		"shared",
		"ref_id",
		"purchase_order_ref_id",
		"currency",
		"amount",
		"remaining_amount",
		"amount_received",
		"amount_open",
		"is_opex",
		"is_cancelled",
		"cost_center",
	];

	fn value(&self, field: &str) -> Value {
		match field {
			"id" => self.id.into(),
			"is_associated" => self.is_associated.into(),
			"shared" => self.shared.into(),
			"ref_id" => self.ref_id.as_str().into(),
			"purchase_order_ref_id" => self.purchase_order_ref_id.as_str().into(),
			"currency" => self.currency.clone().into(),
			"amount" => self.amount.into(),
			"remaining_amount" => self.remaining_amount.into(),
			"amount_received" => self.amount_received.into(),
			"amount_open" => self.amount_open.into(),
			"is_opex" => self.is_opex.into(),
			"is_cancelled" => self.is_cancelled.into(),
			"cost_center" => self.cost_center.clone().into(),
			_ => Value::Null,
		}
	}
}
