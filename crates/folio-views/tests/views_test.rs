
use std::sync::Arc;

use fixtures::*;
use folio_tables::filter::{FilterWidget, SortStatus};
use folio_tables::i18n::{KeyEcho, MessageCatalog};
use folio_tables::provider::NoColumns;
use folio_tables::{FilterSettings, FilterState, FormatSettings, Reference, TableError};
use folio_views::lookup::InMemoryLookup;
use folio_views::models::{PortfolioEntry, PortfolioType, PurchaseOrder};
use folio_views::routes::Routes;
use folio_views::views::{
	ActorListView, OrgUnitListView, PortfolioEntryListView, PortfolioListView, PortfolioTypeListView,
	PurchaseOrderLineItemListView, PurchaseOrderListView, StakeholderListView,
};
use rstest::*;
use rust_decimal::Decimal;

fn placeholder() -> String {
	FormatSettings::default().empty_placeholder
}

fn labels(refs: &[Reference]) -> Vec<String> {
	refs.iter().map(|r| r.label.clone()).collect()
}

#[rstest]
fn test_purchase_order_amount_is_exact_sum(routes: Arc<dyn Routes>) {
	let order = PurchaseOrder {
		id: 7,
		ref_id: "PO-100".to_string(),
		is_cancelled: false,
		line_items: vec![
			line_item(1, Some(Decimal::new(1050, 2))),
			line_item(2, Some(Decimal::new(525, 2))),
			line_item(3, Some(Decimal::new(0, 2))),
			line_item(4, None),
		],
	};

	let view = PurchaseOrderListView::new(&order, routes.as_ref());
	assert_eq!(view.amount, Some(Decimal::new(1575, 2)));
	assert_eq!(view.line_items.len(), 4);
	assert_eq!(view.line_items[0].url.as_deref(), Some("/purchase-order/line-item/1/view"));

	let table = PurchaseOrderListView::table(routes).unwrap();
	let filled = table.fill(&[view], &KeyEcho);
	let row = &filled.rows[0];
	assert_eq!(row.cell("amount").unwrap().html, "15.75");
	assert_eq!(row.url.as_deref(), Some("/purchase-order/7/view"));
	let line_items = row.cell("lineItems").unwrap();
	assert!(line_items.html.starts_with("<a href=\"/purchase-order/line-item/1/view\">L1</a>"));
	assert_eq!(line_items.row_action, None);
	assert_eq!(line_items.css, "rowlink-skip");
	assert_eq!(row.cell("refId").unwrap().row_action.as_deref(), Some("/purchase-order/7/view"));
	assert_eq!(filled.headers[3].css, "col-md-2");
}

#[rstest]
fn test_actor_without_manager_renders_placeholder(routes: Arc<dyn Routes>) {
	let mut with_manager = actor(1, "Ada", "Lovelace");
	with_manager.manager = Some(Box::new(actor(2, "Bea", "Arthur")));
	with_manager.org_unit = Some(org_unit(20, "Finance"));
	let without_manager = actor(3, "Carl", "Zeiss");

	let rows = vec![
		ActorListView::new(&with_manager, routes.as_ref()),
		ActorListView::new(&without_manager, routes.as_ref()),
	];
	let table = ActorListView::table(Arc::clone(&routes), &NoColumns).unwrap();
	let filled = table.fill(&rows, &KeyEcho);

	assert_eq!(
		filled.rows[0].cell("manager").unwrap().html,
		"<a href=\"/actor/2/view\">Bea Arthur</a>"
	);
	assert_eq!(filled.rows[1].cell("manager").unwrap().html, placeholder());
	assert_eq!(filled.rows[1].cell("orgUnit").unwrap().html, placeholder());
	assert_eq!(filled.rows[0].url.as_deref(), Some("/actor/1/view"));
}

#[rstest]
fn test_org_unit_without_manager_renders_placeholder(routes: Arc<dyn Routes>) {
	let unit = org_unit(20, "Finance");
	let table = OrgUnitListView::table(Arc::clone(&routes), &NoColumns).unwrap();
	let filled = table.fill(&[OrgUnitListView::new(&unit, routes.as_ref())], &KeyEcho);

	let row = &filled.rows[0];
	assert_eq!(row.cell("manager").unwrap().html, placeholder());
	assert_eq!(row.cell("type").unwrap().html, "Department");
	assert_eq!(row.url.as_deref(), Some("/org-unit/20/view?page=0"));
}

#[rstest]
fn test_row_action_skips_flagged_columns(routes: Arc<dyn Routes>, crm_entry: PortfolioEntry) {
	let table = PortfolioEntryListView::table(Arc::clone(&routes), &NoColumns).unwrap();
	let filled = table.fill(&[PortfolioEntryListView::new(&crm_entry, routes.as_ref())], &KeyEcho);

	let row = &filled.rows[0];
	for skipped in ["manager", "managerOrgUnit", "sponsoringUnit", "deliveryUnits", "portfolios", "stakeholders"] {
		assert_eq!(row.cell(skipped).unwrap().row_action, None, "{skipped}");
	}
	assert_eq!(
		row.cell("name").unwrap().row_action.as_deref(),
		Some("/portfolio-entry/1/overview")
	);
}

#[test]
fn test_portfolio_type_table_is_shared() {
	let table = PortfolioTypeListView::table();
	assert!(std::ptr::eq(table, PortfolioTypeListView::table()));
	assert!(!table.has_row_action());

	let portfolio_type = PortfolioType {
		id: 3,
		name: "Strategic".to_string(),
		description: None,
		selectable: true,
	};
	let mut catalog = MessageCatalog::new("en");
	catalog.add("default.delete.confirmation.message", "Delete 'this' type?");
	let filled = table.fill(&[PortfolioTypeListView::new(&portfolio_type)], &catalog);

	let row = &filled.rows[0];
	assert!(row.cell("editActionLink").unwrap().html.contains("/admin/config/portfolio/type/3/manage"));
	let delete = &row.cell("deleteActionLink").unwrap().html;
	assert!(delete.contains("/admin/config/portfolio/type/3/delete"));
	assert!(delete.contains("Delete \\&#x27;this\\&#x27; type?"));
	assert_eq!(row.cell("description").unwrap().html, placeholder());
	assert_eq!(row.url, None);
}

#[rstest]
#[case::work_order(Some(4), Some(9), true)]
#[case::no_work_order(Some(4), None, false)]
#[case::no_entry(None, None, false)]
fn test_line_item_select_link(
	routes: Arc<dyn Routes>,
	#[case] portfolio_entry_id: Option<i64>,
	#[case] work_order_id: Option<i64>,
	#[case] linked: bool,
) {
	let item = line_item(12, Some(Decimal::new(100, 0)));
	let view = PurchaseOrderLineItemListView::for_work_order(&item, portfolio_entry_id, work_order_id, routes.as_ref());
	let filled = PurchaseOrderLineItemListView::table().fill(&[view], &KeyEcho);

	let html = &filled.rows[0].cell("selectActionLink").unwrap().html;
	if linked {
		assert!(html.contains("/portfolio-entry/4/financial/work-order/9/line-item/12/select"));
	} else {
		assert_eq!(html, &placeholder());
	}
}

#[rstest]
fn test_line_item_amounts_and_expenditure(routes: Arc<dyn Routes>) {
	let mut item = line_item(12, Some(Decimal::new(10000, 2)));
	item.amount_received = Some(Decimal::new(2550, 2));
	let mut capex = line_item(13, None);
	capex.is_opex = false;

	let rows = vec![
		PurchaseOrderLineItemListView::new(&item, routes.as_ref()),
		PurchaseOrderLineItemListView::new(&capex, routes.as_ref()),
	];
	assert_eq!(rows[0].amount_open, Some(Decimal::new(7450, 2)));
	assert_eq!(rows[1].amount_open, None);

	let mut catalog = MessageCatalog::new("en");
	catalog.add("object.expenditure_type.opex.label", "OPEX");
	catalog.add("object.expenditure_type.capex.label", "CAPEX");
	let filled = PurchaseOrderLineItemListView::table().fill(&rows, &catalog);

	assert_eq!(filled.rows[0].cell("isOpex").unwrap().html, "OPEX");
	assert_eq!(filled.rows[1].cell("isOpex").unwrap().html, "CAPEX");
	assert_eq!(filled.rows[0].cell("amountOpen").unwrap().html, "74.5");
	assert_eq!(
		filled.rows[0].cell("costCenter").unwrap().html,
		"<a href=\"/cost-center/5/view\">IT</a>"
	);
	assert_eq!(filled.rows[0].url.as_deref(), Some("/purchase-order/line-item/12/view"));
}

#[rstest]
fn test_stakeholder_resolves_portfolio(routes: Arc<dyn Routes>, lookup: InMemoryLookup) {
	let known = stakeholder(1, actor(1, "Ada", "Lovelace"), "Sponsor", Some(30));
	let unknown = stakeholder(2, actor(2, "Bea", "Arthur"), "Reviewer", Some(99));
	let entry_level = stakeholder(3, actor(3, "Carl", "Zeiss"), "Reviewer", None);

	let rows: Vec<_> = [&known, &unknown, &entry_level]
		.into_iter()
		.map(|s| StakeholderListView::new(s, &lookup, routes.as_ref()))
		.collect();
	assert_eq!(rows[0].portfolio.as_ref().map(|p| p.label.as_str()), Some("Customer"));
	assert_eq!(rows[1].portfolio, None);

	let filled = StakeholderListView::table(Arc::clone(&routes)).unwrap().fill(&rows, &KeyEcho);
	assert_eq!(
		filled.rows[0].cell("portfolio").unwrap().html,
		"<a href=\"/portfolio/30/overview\">Customer</a>"
	);
	assert!(filled.rows[0].cell("editActionLink").unwrap().html.contains("/portfolio/30/stakeholder/1/manage"));
	assert!(filled.rows[1].cell("removeActionLink").unwrap().html.contains("/portfolio/99/stakeholder/2/delete"));
	assert_eq!(filled.rows[2].cell("editActionLink").unwrap().html, placeholder());
	assert_eq!(filled.rows[2].cell("removeActionLink").unwrap().html, placeholder());
	assert_eq!(filled.rows[0].url, None);
}

#[rstest]
fn test_portfolio_stakeholder_types(routes: Arc<dyn Routes>) {
	let strategic = portfolio(31, "Strategic");
	let roles = vec![
		stakeholder(1, actor(1, "Ada", "Lovelace"), "Sponsor", Some(31)),
		stakeholder(2, actor(1, "Ada", "Lovelace"), "Reviewer", Some(31)),
	];
	let view = PortfolioListView::with_stakeholders(&strategic, &roles, routes.as_ref());

	let table = PortfolioListView::table(Arc::clone(&routes), &NoColumns)
		.unwrap()
		.with_hidden_columns(PortfolioListView::HIDE_STAKEHOLDER_TYPE_COLUMN)
		.unwrap();
	assert!(table.column("stakeholderTypes").unwrap().is_hidden());

	let shown = PortfolioListView::table(routes, &NoColumns).unwrap().fill(&[view], &KeyEcho);
	assert_eq!(shown.rows[0].cell("stakeholderTypes").unwrap().html, "Sponsor, Reviewer");
}

#[rstest]
fn test_portfolio_entry_snapshot(routes: Arc<dyn Routes>, crm_entry: PortfolioEntry) {
	let view = PortfolioEntryListView::new(&crm_entry, routes.as_ref());

	assert_eq!(labels(&view.delivery_units), vec!["Engineering", "Operations"]);
	assert_eq!(labels(&view.portfolios), vec!["Customer", "Strategic"]);
	assert_eq!(labels(&view.stakeholders), vec!["Bea Arthur", "Carl Zeiss"]);
	assert_eq!(view.manager_org_unit.as_ref().map(|o| o.label.as_str()), Some("Finance"));
	assert_eq!(view.last_milestone.as_deref(), Some("G1"));
	assert_eq!(view.last_milestone_date, Some(date(2024, 3, 1)));
	assert_eq!(view.next_milestone.as_deref(), Some("G2"));
	assert_eq!(view.next_milestone_date, Some(date(2024, 6, 1)));
	assert_eq!(view.life_cycle_process.as_deref(), Some("Standard"));
	assert!(!view.is_concept);

	let bare = PortfolioEntryListView::new(&entry(2, "Intranet"), routes.as_ref());
	assert!(bare.is_concept);
	assert_eq!(bare.manager, None);
	assert_eq!(bare.next_milestone, None);
}

#[rstest]
fn test_portfolio_entry_report_columns(routes: Arc<dyn Routes>, crm_entry: PortfolioEntry) {
	let table = PortfolioEntryListView::table(Arc::clone(&routes), &NoColumns).unwrap();
	let rows = vec![
		PortfolioEntryListView::new(&crm_entry, routes.as_ref()),
		PortfolioEntryListView::new(&entry(2, "Intranet"), routes.as_ref()),
	];
	let filled = table.fill(&rows, &KeyEcho);

	assert_eq!(
		filled.rows[0].cell("portfolioEntryStatus").unwrap().html,
		"<span class=\"label label-success\">On &lt;track&gt;</span>"
	);
	assert_eq!(filled.rows[0].cell("lastPEReportDate").unwrap().html, "02/04/2024");
	assert_eq!(filled.rows[0].cell("lifeCycleProcess").unwrap().html, "Standard");
	assert_eq!(filled.rows[1].cell("portfolioEntryStatus").unwrap().html, placeholder());
	assert_eq!(filled.rows[1].cell("lastPEReportDate").unwrap().html, placeholder());
	assert!(PortfolioEntryListView::hide_non_default_columns(false, false).contains(&"lastPEReportDate"));
}

#[rstest]
#[case::both(true, true, Some(0), Some(1))]
#[case::stakeholder_types_only(true, false, Some(0), None)]
#[case::manager_only(false, true, None, Some(0))]
#[case::neither(false, false, None, None)]
fn test_hide_non_default_columns(
	#[case] hide_stakeholder_types: bool,
	#[case] hide_manager: bool,
	#[case] stakeholder_types_at: Option<usize>,
	#[case] manager_at: Option<usize>,
) {
	let hidden = PortfolioEntryListView::hide_non_default_columns(hide_stakeholder_types, hide_manager);
	assert_eq!(hidden.iter().position(|c| *c == "stakeholderTypes"), stakeholder_types_at);
	assert_eq!(hidden.iter().position(|c| *c == "manager"), manager_at);
	assert!(hidden.contains(&"nextMilestoneDate"));
	assert!(!hidden.contains(&"name"));
}

#[rstest]
fn test_portfolio_entry_hidden_columns_apply(routes: Arc<dyn Routes>) {
	let hidden = PortfolioEntryListView::hide_non_default_columns(true, false);
	let table = PortfolioEntryListView::table(routes, &NoColumns)
		.unwrap()
		.with_hidden_columns(&hidden)
		.unwrap();
	let visible: Vec<_> = table.visible_columns().map(|c| c.name()).collect();
	assert!(visible.contains(&"name"));
	assert!(visible.contains(&"manager"));
	assert!(!visible.contains(&"stakeholders"));
}

#[rstest]
fn test_filter_config_with_options(routes: Arc<dyn Routes>, lookup: InMemoryLookup) {
	let config =
		PortfolioEntryListView::filter_config(&lookup, routes.as_ref(), &NoColumns, &FilterSettings::default())
			.unwrap();

	assert_eq!(config.initial_sort(), Some(("name", SortStatus::Asc)));
	assert_eq!(config.descriptor("managerOrgUnit").unwrap().field_path, "manager.orgUnit.id");
	assert!(matches!(
		config.descriptor("manager").unwrap().widget,
		FilterWidget::Autocomplete { ref endpoint, .. } if endpoint == "/json/manager"
	));
	assert!(config.descriptor("archived").unwrap().mandatory);
	assert!(config.has_post_query("nextMilestone"));
	assert!(config.has_post_query("nextMilestoneDate"));
	assert!(!config.has_post_query("lastMilestone"));
	assert_eq!(
		config.descriptor("lifeCycleProcess").unwrap().field_path,
		"activeLifeCycleInstance.lifeCycleProcess.id"
	);
	assert!(matches!(
		config.descriptor("lifeCycleProcess").unwrap().widget,
		FilterWidget::Select { default: Some(ref d), .. } if d == "7"
	));
	assert!(matches!(
		config.descriptor("portfolioEntryStatus").unwrap().widget,
		FilterWidget::Select { ref options, .. } if options.len() == 2
	));
	assert!(matches!(
		config.descriptor("lastPEReportDate").unwrap().widget,
		FilterWidget::DateRange { .. }
	));

	let json = config.to_json().unwrap();
	assert!(json.contains("\"widget\":\"select\""));
	assert!(json.contains("\"widget\":\"date_range\""));
}

#[rstest]
fn test_filter_config_falls_back_without_options(routes: Arc<dyn Routes>) {
	let config = PortfolioEntryListView::filter_config(
		&InMemoryLookup::new(),
		routes.as_ref(),
		&NoColumns,
		&FilterSettings::default(),
	)
	.unwrap();

	for name in [
		"portfolioEntryType",
		"managerOrgUnit",
		"portfolios",
		"lifeCycleProcess",
		"portfolioEntryStatus",
		"lastMilestone",
		"nextMilestone",
	] {
		let descriptor = config.descriptor(name).unwrap();
		assert_eq!(descriptor.widget, FilterWidget::None, "{name}");
		assert_eq!(descriptor.sort, SortStatus::None, "{name}");
	}
	assert!(!config.has_post_query("nextMilestone"));
	assert!(matches!(
		config.descriptor("governanceId").unwrap().widget,
		FilterWidget::TextField { .. }
	));
}

fn planned_entry(id: i64, next: Option<(i64, &str, Option<(i32, u32, u32)>)>) -> PortfolioEntry {
	let mut e = entry(id, &format!("Entry {id}"));
	if let Some((milestone_id, name, planned)) = next {
		e.planned_milestones = vec![milestone(milestone_id, name, planned.map(|(y, m, d)| date(y, m, d)), false)];
	}
	e
}

#[fixture]
fn planned_entries() -> Vec<PortfolioEntry> {
	vec![
		planned_entry(1, Some((101, "G2", Some((2024, 6, 1))))),
		planned_entry(2, Some((102, "G3", Some((2024, 9, 1))))),
		planned_entry(3, None),
		planned_entry(4, Some((101, "G2", None))),
		planned_entry(5, Some((101, "G2", Some((2024, 2, 1))))),
	]
}

#[rstest]
fn test_post_query_filters_next_milestone(
	routes: Arc<dyn Routes>,
	lookup: InMemoryLookup,
	planned_entries: Vec<PortfolioEntry>,
) {
	let config =
		PortfolioEntryListView::filter_config(&lookup, routes.as_ref(), &NoColumns, &FilterSettings::default())
			.unwrap();
	let mut state = config.default_state();
	let column = state.columns.get_mut("nextMilestone").unwrap();
	column.filtered = true;
	column.value = serde_json::json!(["101"]);

	let kept = config.apply_post_query(planned_entries, &state);
	let ids: Vec<_> = kept.iter().map(|e| e.id).collect();
	assert_eq!(ids, vec![1, 4, 5]);
}

#[rstest]
#[case::inside("2024-05-01", "2024-09-01", vec![1, 2])]
#[case::single_day("2024-06-01", "2024-06-01", vec![1])]
#[case::empty("2025-01-01", "2025-12-31", vec![])]
fn test_post_query_filters_next_milestone_date(
	routes: Arc<dyn Routes>,
	lookup: InMemoryLookup,
	planned_entries: Vec<PortfolioEntry>,
	#[case] from: &str,
	#[case] to: &str,
	#[case] expected: Vec<i64>,
) {
	let config =
		PortfolioEntryListView::filter_config(&lookup, routes.as_ref(), &NoColumns, &FilterSettings::default())
			.unwrap();
	let mut state = config.default_state();
	let column = state.columns.get_mut("nextMilestoneDate").unwrap();
	column.filtered = true;
	column.value = serde_json::json!({ "from": from, "to": to });

	let kept = config.apply_post_query(planned_entries, &state);
	let ids: Vec<_> = kept.iter().map(|e| e.id).collect();
	assert_eq!(ids, expected);
}

#[rstest]
#[case::ascending(SortStatus::Asc, vec![5, 1, 2, 3, 4])]
#[case::descending(SortStatus::Desc, vec![3, 4, 2, 1, 5])]
fn test_post_query_sorts_missing_dates_last(
	routes: Arc<dyn Routes>,
	lookup: InMemoryLookup,
	planned_entries: Vec<PortfolioEntry>,
	#[case] sort: SortStatus,
	#[case] expected: Vec<i64>,
) {
	let config =
		PortfolioEntryListView::filter_config(&lookup, routes.as_ref(), &NoColumns, &FilterSettings::default())
			.unwrap();
	let mut state = config.default_state();
	state.columns.get_mut("name").unwrap().sort = SortStatus::Unsorted;
	state.columns.get_mut("nextMilestoneDate").unwrap().sort = sort;

	let kept = config.apply_post_query(planned_entries, &state);
	let ids: Vec<_> = kept.iter().map(|e| e.id).collect();
	assert_eq!(ids, expected);
}

#[rstest]
fn test_filter_state_rejects_unknown_column(routes: Arc<dyn Routes>, lookup: InMemoryLookup) {
	let config =
		PortfolioEntryListView::filter_config(&lookup, routes.as_ref(), &NoColumns, &FilterSettings::default())
			.unwrap();
	let result = FilterState::from_json(r#"{"columns":{"budget":{"displayed":true}}}"#, &config);
	assert!(matches!(result, Err(TableError::UnknownFilterColumn(ref name)) if name == "budget"));
}
