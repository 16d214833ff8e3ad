//! Portfolio management list views
//!
//! Row views and table definitions for the application's entity lists,
//! built on [`folio_tables`]. Each view snapshots one domain entity into
//! display-ready fields and declares its table, and where the list is
//! searchable, its filter configuration.
//!
//! Tables linking to request-dependent pages take a [`Routes`]
//! implementation, tables with custom attribute columns take a column
//! provider. Tables depending on neither are built once and shared.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use folio_tables::i18n::KeyEcho;
//! use folio_views::models::{PurchaseOrder, PurchaseOrderLineItem};
//! use folio_views::routes::{DefaultRoutes, Routes};
//! use folio_views::views::PurchaseOrderListView;
//! use rust_decimal::Decimal;
//!
//! let item = |id: i64, cents: i64| PurchaseOrderLineItem {
//!     id,
//!     ref_id: format!("L{id}"),
//!     purchase_order_ref_id: "PO-1".into(),
//!     currency: None,
//!     amount: Some(Decimal::new(cents, 2)),
//!     amount_received: None,
//!     remaining_amount: None,
//!     is_opex: true,
//!     is_cancelled: false,
//!     shared: false,
//!     associated: false,
//!     cost_center: None,
//! };
//! let order = PurchaseOrder {
//!     id: 7,
//!     ref_id: "PO-1".into(),
//!     is_cancelled: false,
//!     line_items: vec![item(1, 1050), item(2, 525)],
//! };
//!
//! let routes: Arc<dyn Routes> = Arc::new(DefaultRoutes);
//! let table = PurchaseOrderListView::table(Arc::clone(&routes)).unwrap();
//! let rows = vec![PurchaseOrderListView::new(&order, routes.as_ref())];
//! let filled = table.fill(&rows, &KeyEcho);
//!
//! assert_eq!(filled.rows[0].cell("amount").unwrap().html, "15.75");
//! ```

pub mod lookup;
pub mod models;
pub mod routes;
pub mod views;

pub use lookup::{InMemoryLookup, Lookup, OptionSet};
pub use routes::{DefaultRoutes, Routes};
pub use views::{
	ActorListView, OrgUnitListView, PortfolioEntryListView, PortfolioListView, PortfolioTypeListView,
	PurchaseOrderListView, PurchaseOrderLineItemListView, StakeholderListView,
};
