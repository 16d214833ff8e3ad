use std::io::Write;
use std::sync::Arc;

use folio::prelude::*;
use folio::tables::filter::FilterWidget;
use folio::tables::i18n::KeyEcho;
use folio::tables::provider::NoColumns;
use folio::views::lookup::{InMemoryLookup, OptionSet};
use folio::views::models::{PurchaseOrder, PurchaseOrderLineItem, ValueHolder};
use folio::views::{PortfolioEntryListView, PurchaseOrderListView};
use rstest::*;
use rust_decimal::Decimal;

const SETTINGS: &str = r#"
[format]
empty_placeholder = "n/a"
decimal_separator = ","
grouping_separator = "."

[filter]
min_select_options = 2
"#;

#[fixture]
fn settings() -> TableSettings {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(SETTINGS.as_bytes()).unwrap();
	TableSettings::from_path(file.path()).unwrap()
}

fn line_item(id: i64, amount: Decimal) -> PurchaseOrderLineItem {
	PurchaseOrderLineItem {
		id,
		ref_id: format!("L{id}"),
		purchase_order_ref_id: "PO-1".into(),
		currency: None,
		amount: Some(amount),
		amount_received: None,
		remaining_amount: None,
		is_opex: true,
		is_cancelled: false,
		shared: false,
		associated: false,
		cost_center: None,
	}
}

#[rstest]
fn test_loaded_format_settings_apply_to_view_table(settings: TableSettings) {
	let routes: Arc<dyn Routes> = Arc::new(DefaultRoutes);
	let order = PurchaseOrder {
		id: 1,
		ref_id: "PO-1".into(),
		is_cancelled: false,
		line_items: vec![line_item(1, Decimal::new(1_000_050, 2)), line_item(2, Decimal::new(2000, 2))],
	};

	let table = PurchaseOrderListView::table(Arc::clone(&routes))
		.unwrap()
		.with_settings(settings.format);
	let filled = table.fill(&[PurchaseOrderListView::new(&order, routes.as_ref())], &KeyEcho);

	assert_eq!(filled.rows[0].cell("amount").unwrap().html, "10.020,5");
}

#[rstest]
fn test_loaded_filter_settings_disable_small_selects(settings: TableSettings) {
	let holder = |value: i64, name: &str| ValueHolder {
		value,
		name: name.to_string(),
	};
	let lookup = InMemoryLookup::new()
		.with_options(OptionSet::PortfolioEntryTypes, vec![holder(1, "Project")])
		.with_options(OptionSet::OrgUnits, vec![holder(20, "Finance"), holder(21, "Sales")]);

	let config =
		PortfolioEntryListView::filter_config(&lookup, &DefaultRoutes, &NoColumns, &settings.filter).unwrap();

	assert_eq!(config.descriptor("portfolioEntryType").unwrap().widget, FilterWidget::None);
	assert!(matches!(
		config.descriptor("sponsoringUnit").unwrap().widget,
		FilterWidget::Select { .. }
	));
}
