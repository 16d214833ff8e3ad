//! Portfolio entry list and its filter configuration

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use folio_tables::column::ColumnDescriptor;
use folio_tables::filter::{
	FilterConfig, FilterConfigBuilder, FilterDescriptor, FilterWidget, PostQuery, SelectOption, SortStatus,
};
use folio_tables::escape::html_escape;
use folio_tables::formatter::{FormatContext, Formatter, markup};
use folio_tables::provider::{ColumnProvider, FilterColumnProvider};
use folio_tables::{FilterSettings, Reference, Result, RowView, TableBuilder, TableDefinition, Value};
use tracing::debug;

use super::{actor_ref, org_unit_ref, portfolio_ref};
use crate::lookup::{Lookup, OptionSet};
use crate::models::{PlannedMilestone, PortfolioEntry, ReportStatusType, Stakeholder};
use crate::routes::Routes;

/// A portfolio entry row
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioEntryListView {
	pub id: i64,
	pub governance_id: Option<String>,
	pub creation_date: Option<NaiveDate>,
	pub name: String,
	pub is_public: bool,
	pub portfolio_entry_type: Option<Reference>,
	pub manager: Option<Reference>,
	pub manager_org_unit: Option<Reference>,
	pub sponsoring_unit: Option<Reference>,
	/// Sorted by name
	pub delivery_units: Vec<Reference>,
	/// Sorted by name
	pub portfolios: Vec<Reference>,
	/// Distinct, not deleted, sorted by name
	pub stakeholders: Vec<Reference>,
	pub life_cycle_process: Option<String>,
	/// Status of the latest report
	pub portfolio_entry_status: Option<ReportStatusType>,
	pub last_pe_report_date: Option<NaiveDate>,
	pub last_milestone: Option<String>,
	pub last_milestone_date: Option<NaiveDate>,
	pub next_milestone: Option<String>,
	pub next_milestone_date: Option<NaiveDate>,
	pub is_concept: bool,
	pub archived: bool,
	pub start_date: Option<NaiveDate>,
	pub end_date: Option<NaiveDate>,
	/// Roles of the contextual actor, see [`PortfolioEntryListView::with_stakeholders`]
	pub stakeholder_types: Vec<String>,
}

fn by_label(a: &Reference, b: &Reference) -> Ordering {
	a.label.cmp(&b.label)
}

impl PortfolioEntryListView {
	/// Domain type custom attributes are defined for
	pub const DOMAIN_TYPE: &'static str = "PortfolioEntry";

	/// Snapshot of a portfolio entry
	pub fn new(entry: &PortfolioEntry, routes: &dyn Routes) -> Self {
		let mut delivery_units: Vec<_> = entry.delivery_units.iter().map(|o| org_unit_ref(o, routes)).collect();
		delivery_units.sort_by(by_label);

		let mut portfolios: Vec<_> = entry.portfolios.iter().map(|p| portfolio_ref(p, routes)).collect();
		portfolios.sort_by(by_label);

		let mut seen = HashSet::new();
		let mut stakeholders: Vec<_> = entry
			.stakeholders
			.iter()
			.filter(|s| !s.actor.deleted && seen.insert(s.actor.id))
			.map(|s| actor_ref(&s.actor, routes))
			.collect();
		stakeholders.sort_by(by_label);

		let last_milestone = entry.last_milestone.as_ref();
		let next_milestone = entry.next_milestone();

		Self {
			id: entry.id,
			governance_id: entry.governance_id.clone(),
			creation_date: entry.creation_date,
			name: entry.name.clone(),
			is_public: entry.is_public,
			portfolio_entry_type: entry
				.portfolio_entry_type
				.as_ref()
				.map(|t| Reference::new(t.id, t.name.clone())),
			manager: entry.manager.as_ref().map(|m| actor_ref(m, routes)),
			manager_org_unit: entry
				.manager
				.as_ref()
				.and_then(|m| m.org_unit.as_ref())
				.map(|o| org_unit_ref(o, routes)),
			sponsoring_unit: entry.sponsoring_unit.as_ref().map(|o| org_unit_ref(o, routes)),
			delivery_units,
			portfolios,
			stakeholders,
			life_cycle_process: entry.life_cycle.as_ref().map(|l| l.process_name.clone()),
			portfolio_entry_status: entry.last_report.as_ref().and_then(|r| r.status.clone()),
			last_pe_report_date: entry.last_report.as_ref().and_then(|r| r.publication_date),
			last_milestone: last_milestone.map(|m| m.milestone.short_name.clone()),
			last_milestone_date: last_milestone.and_then(|m| m.passed_date),
			next_milestone: next_milestone.map(|m| m.milestone.short_name.clone()),
			next_milestone_date: next_milestone.and_then(|m| m.planned_date),
			is_concept: entry.life_cycle.as_ref().is_none_or(|l| l.is_concept),
			archived: entry.archived,
			start_date: entry.start_date,
			end_date: entry.end_date,
			stakeholder_types: Vec::new(),
		}
	}

	/// Snapshot listing the roles the given stakeholder records hold on the
	/// entry
	pub fn with_stakeholders(entry: &PortfolioEntry, stakeholders: &[Stakeholder], routes: &dyn Routes) -> Self {
		let mut view = Self::new(entry, routes);
		view.stakeholder_types = stakeholders
			.iter()
			.map(|s| s.stakeholder_type.name.clone())
			.collect();
		view
	}

	/// Columns hidden until the user shows them
	pub fn hide_non_default_columns(hide_stakeholder_types: bool, hide_manager: bool) -> Vec<&'static str> {
		let mut columns = Vec::with_capacity(20);
		if hide_stakeholder_types {
			columns.push("stakeholderTypes");
		}
		if hide_manager {
			columns.push("manager");
		}
		columns.extend([
			"creationDate",
			"isPublic",
			"sponsoringUnit",
			"deliveryUnits",
			"portfolios",
			"stakeholders",
			"lastPEReportDate",
			"lifeCycleProcess",
			"archived",
			"lastMilestoneDate",
			"nextMilestone",
			"nextMilestoneDate",
			"startDate",
			"endDate",
		]);
		columns
	}

	/// The portfolio entry table, with one column per custom attribute
	pub fn table(routes: Arc<dyn Routes>, attributes: &dyn ColumnProvider<Self>) -> Result<TableDefinition<Self>> {
		let linked = |name: &str, field: &str, label: &str, formatter: Formatter<Self>| {
			ColumnDescriptor::new(name, field, label)
				.formatter(formatter)
				.value_css_class(markup::ROWLINK_SKIP)
		};

		TableBuilder::new()
			.column(ColumnDescriptor::new(
				"governanceId",
				"governance_id",
				"object.portfolio_entry.governance_id.label",
			))
			.column(
				ColumnDescriptor::new("creationDate", "creation_date", "object.portfolio_entry.creation_date.label")
					.formatter(Formatter::date()),
			)
			.column(ColumnDescriptor::new("name", "name", "object.portfolio_entry.name.label"))
			.column(
				ColumnDescriptor::new("portfolioEntryType", "portfolio_entry_type", "object.portfolio_entry.type.label")
					.formatter(Formatter::reference()),
			)
			.column(linked(
				"manager",
				"manager",
				"object.portfolio_entry.manager.label",
				Formatter::reference(),
			))
			.column(linked(
				"managerOrgUnit",
				"manager_org_unit",
				"object.portfolio_entry.manager_org_unit.label",
				Formatter::reference(),
			))
			.column(linked(
				"sponsoringUnit",
				"sponsoring_unit",
				"object.portfolio_entry.sponsoring_unit.label",
				Formatter::reference(),
			))
			.column(linked(
				"deliveryUnits",
				"delivery_units",
				"object.portfolio_entry.delivery_units.label",
				Formatter::list(),
			))
			.column(linked(
				"portfolios",
				"portfolios",
				"object.portfolio_entry.portfolios.label",
				Formatter::list(),
			))
			.column(linked(
				"stakeholders",
				"stakeholders",
				"object.portfolio_entry.stakeholders.label",
				Formatter::list(),
			))
			.column(ColumnDescriptor::new(
				"lifeCycleProcess",
				"life_cycle_process",
				"object.portfolio_entry.life_cycle_process.label",
			))
			.column(
				ColumnDescriptor::new(
					"portfolioEntryStatus",
					"portfolio_entry_status",
					"object.portfolio_entry.status.label",
				)
				.formatter(Formatter::custom(status_label)),
			)
			.column(
				ColumnDescriptor::new(
					"lastPEReportDate",
					"last_pe_report_date",
					"object.portfolio_entry_report.report_date.label",
				)
				.formatter(Formatter::date()),
			)
			.column(
				ColumnDescriptor::new("archived", "archived", "object.portfolio_entry.archived.label")
					.formatter(Formatter::boolean()),
			)
			.column(
				ColumnDescriptor::new("isConcept", "is_concept", "object.portfolio_entry.is_concept.label")
					.formatter(Formatter::boolean()),
			)
			.column(ColumnDescriptor::new(
				"lastMilestone",
				"last_milestone",
				"object.portfolio_entry.last_milestone.label",
			))
			.column(
				ColumnDescriptor::new(
					"lastMilestoneDate",
					"last_milestone_date",
					"object.portfolio_entry.last_milestone_date.label",
				)
				.formatter(Formatter::date()),
			)
			.column(ColumnDescriptor::new(
				"nextMilestone",
				"next_milestone",
				"object.portfolio_entry.next_milestone.label",
			))
			.column(
				ColumnDescriptor::new(
					"nextMilestoneDate",
					"next_milestone_date",
					"object.portfolio_entry.next_milestone_date.label",
				)
				.formatter(Formatter::date()),
			)
			.column(
				ColumnDescriptor::new(
					"stakeholderTypes",
					"stakeholder_types",
					"object.portfolio_entry.stakeholder_types.label",
				)
				.formatter(Formatter::list()),
			)
			.column(
				ColumnDescriptor::new("isPublic", "is_public", "object.portfolio_entry.is_public.label")
					.formatter(Formatter::boolean()),
			)
			.column(
				ColumnDescriptor::new("startDate", "start_date", "object.portfolio_entry.start_date.label")
					.formatter(Formatter::date()),
			)
			.column(
				ColumnDescriptor::new("endDate", "end_date", "object.portfolio_entry.end_date.label")
					.formatter(Formatter::date()),
			)
			.columns_from(attributes, Self::DOMAIN_TYPE)
			.row_action(move |row: &Self| routes.portfolio_entry_overview(row.id))
			.empty_message_key("object.portfolio_entry.table.empty")
			.build()
	}

	/// Filters of the portfolio entry grid
	///
	/// Select filters whose option set is too small are disabled. The next
	/// milestone columns are derived after loading and are filtered in
	/// memory.
	pub fn filter_config(
		lookup: &dyn Lookup,
		routes: &dyn Routes,
		attributes: &dyn FilterColumnProvider,
		settings: &FilterSettings,
	) -> Result<FilterConfig<PortfolioEntry>> {
		let select = |set: OptionSet, display: &str| {
			let options = lookup.options(set).iter().map(SelectOption::from).collect();
			FilterWidget::select_or_none(options, &[display], settings)
		};
		let text = || FilterWidget::TextField { default: "*".to_string() };
		let date_range = || FilterWidget::DateRange { from: None, to: None };

		let milestones = select(OptionSet::LifeCycleMilestones, "lifeCycleMilestone.shortName");
		let has_milestones = !milestones.is_none();

		let mut builder = FilterConfigBuilder::<PortfolioEntry>::new()
			.column(
				FilterDescriptor::new("governanceId", "governanceId", "object.portfolio_entry.governance_id.label", text())
					.displayed(true),
			)
			.column(FilterDescriptor::new(
				"creationDate",
				"creationDate",
				"object.portfolio_entry.creation_date.label",
				date_range(),
			))
			.column(FilterDescriptor::new(
				"isPublic",
				"isPublic",
				"object.portfolio_entry.is_public.label",
				FilterWidget::Checkbox { default: true },
			))
			.column(
				FilterDescriptor::new("name", "name", "object.portfolio_entry.name.label", text())
					.displayed(true)
					.sort(SortStatus::Asc),
			)
			.column(
				FilterDescriptor::new(
					"portfolioEntryType",
					"portfolioEntryType.id",
					"object.portfolio_entry.type.label",
					select(OptionSet::PortfolioEntryTypes, "portfolioEntryType.name"),
				)
				.displayed(true),
			)
			.column(FilterDescriptor::new(
				"manager",
				"manager.id",
				"object.portfolio_entry.manager.label",
				FilterWidget::Autocomplete {
					endpoint: routes.manager_search(),
					display_fields: vec!["manager.firstName".to_string(), "manager.lastName".to_string()],
				},
			))
			.column(FilterDescriptor::new(
				"managerOrgUnit",
				"manager.orgUnit.id",
				"object.portfolio_entry.manager_org_unit.label",
				select(OptionSet::OrgUnits, "manager.orgUnit.name"),
			))
			.column(FilterDescriptor::new(
				"sponsoringUnit",
				"sponsoringUnit.id",
				"object.portfolio_entry.sponsoring_unit.label",
				select(OptionSet::OrgUnits, "sponsoringUnit.name"),
			))
			.column(FilterDescriptor::new(
				"deliveryUnits",
				"deliveryUnits.id",
				"object.portfolio_entry.delivery_units.label",
				select(OptionSet::OrgUnits, "deliveryUnits.name"),
			))
			.column(FilterDescriptor::new(
				"portfolios",
				"portfolios.id",
				"object.portfolio_entry.portfolios.label",
				select(OptionSet::Portfolios, "portfolios.name"),
			))
			.column(
				FilterDescriptor::new(
					"stakeholders",
					"stakeholders.actor.id",
					"object.portfolio_entry.stakeholders.label",
					FilterWidget::Autocomplete {
						endpoint: routes.manager_search(),
						display_fields: vec![
							"stakeholders.actor.firstName".to_string(),
							"stakeholders.actor.lastName".to_string(),
						],
					},
				)
				.sort(SortStatus::None),
			)
			.column(FilterDescriptor::new(
				"lifeCycleProcess",
				"activeLifeCycleInstance.lifeCycleProcess.id",
				"object.portfolio_entry.life_cycle_process.label",
				select(OptionSet::LifeCycleProcesses, "activeLifeCycleInstance.lifeCycleProcess.name"),
			))
			.column(FilterDescriptor::new(
				"portfolioEntryStatus",
				"lastPortfolioEntryReport.portfolioEntryReportStatusType.id",
				"object.portfolio_entry.status.label",
				select(
					OptionSet::ReportStatusTypes,
					"lastPortfolioEntryReport.portfolioEntryReportStatusType.name",
				),
			))
			.column(FilterDescriptor::new(
				"lastPEReportDate",
				"lastPortfolioEntryReport.publicationDate",
				"object.portfolio_entry_report.report_date.label",
				date_range(),
			))
			.column(
				FilterDescriptor::new(
					"lastMilestone",
					"lastApprovedLifeCycleMilestoneInstance.lifeCycleMilestone.id",
					"object.portfolio_entry.last_milestone.label",
					milestones.clone(),
				)
				.displayed(true),
			)
			.column(FilterDescriptor::new(
				"lastMilestoneDate",
				"lastApprovedLifeCycleMilestoneInstance.passedDate",
				"object.portfolio_entry.last_milestone_date.label",
				if has_milestones { date_range() } else { FilterWidget::None },
			));

		builder = if has_milestones {
			builder
				.post_query_column(
					FilterDescriptor::new(
						"nextMilestone",
						"activeLifeCycleInstance.lifeCycleInstancePlannings.plannedLifeCycleMilestoneInstance.lifeCycleMilestone.id",
						"object.portfolio_entry.next_milestone.label",
						milestones,
					),
					PostQuery::new(next_milestone_in, |a: &PortfolioEntry, b: &PortfolioEntry| {
						compare_missing_last(a.next_milestone(), b.next_milestone(), |x, y| {
							x.milestone.name.cmp(&y.milestone.name)
						})
					}),
				)
				.post_query_column(
					FilterDescriptor::new(
						"nextMilestoneDate",
						"activeLifeCycleInstance.lifeCycleInstancePlannings.plannedLifeCycleMilestoneInstance.plannedDate",
						"object.portfolio_entry.next_milestone_date.label",
						date_range(),
					),
					PostQuery::new(next_milestone_date_in, |a: &PortfolioEntry, b: &PortfolioEntry| {
						compare_missing_last(
							a.next_milestone().and_then(|m| m.planned_date),
							b.next_milestone().and_then(|m| m.planned_date),
							Ord::cmp,
						)
					}),
				)
		} else {
			debug!("no life cycle milestones, next milestone filters disabled");
			builder
				.column(FilterDescriptor::new(
					"nextMilestone",
					"lifeCycleMilestone.id",
					"object.portfolio_entry.next_milestone.label",
					FilterWidget::None,
				))
				.column(FilterDescriptor::new(
					"nextMilestoneDate",
					"plannedDate",
					"object.portfolio_entry.next_milestone_date.label",
					FilterWidget::None,
				))
		};

		builder
			.column(
				FilterDescriptor::new(
					"archived",
					"archived",
					"object.portfolio_entry.archived.label",
					FilterWidget::Checkbox { default: false },
				)
				.mandatory(),
			)
			.column(FilterDescriptor::new(
				"isConcept",
				"activeLifeCycleInstance.isConcept",
				"object.portfolio_entry.is_concept.label",
				FilterWidget::Checkbox { default: false },
			))
			.columns_from(attributes, Self::DOMAIN_TYPE)
			.column(FilterDescriptor::new(
				"startDate",
				"startDate",
				"object.portfolio_entry.start_date.label",
				date_range(),
			))
			.column(FilterDescriptor::new(
				"endDate",
				"endDate",
				"object.portfolio_entry.end_date.label",
				date_range(),
			))
			.build()
	}
}

/// Report status as a colored label
fn status_label(row: &PortfolioEntryListView, _: &Value, ctx: &FormatContext<'_>) -> String {
	match &row.portfolio_entry_status {
		Some(status) => format!(
			"<span class=\"label label-{}\">{}</span>",
			html_escape(&status.css_class),
			html_escape(&status.name)
		),
		None => ctx.empty(),
	}
}

/// Selected ids contain the entry's next milestone
fn next_milestone_in(entry: &PortfolioEntry, value: &serde_json::Value) -> bool {
	let Some(selected) = value.as_array() else {
		return false;
	};
	let Some(next) = entry.next_milestone() else {
		return false;
	};
	let id = next.milestone.id.to_string();
	selected.iter().any(|v| v.as_str() == Some(id.as_str()))
}

/// The entry's next milestone date lies within the selected range, bounds
/// included
fn next_milestone_date_in(entry: &PortfolioEntry, value: &serde_json::Value) -> bool {
	let bound = |key: &str| {
		value
			.get(key)
			.and_then(serde_json::Value::as_str)
			.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
	};
	let Some(date) = entry.next_milestone().and_then(|m: &PlannedMilestone| m.planned_date) else {
		return false;
	};
	bound("from").is_none_or(|from| date >= from) && bound("to").is_none_or(|to| date <= to)
}

/// Orders present values with `cmp`, missing values last
fn compare_missing_last<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
	match (a, b) {
		(Some(a), Some(b)) => cmp(&a, &b),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}

impl RowView for PortfolioEntryListView {
	const FIELDS: &'static [&'static str] = &[
		"id",
		"governance_id",
		"creation_date",
		"name",
		"is_public",
		"portfolio_entry_type",
		"manager",
		"manager_org_unit",
		"sponsoring_unit",
		"delivery_units",
		"portfolios",
		"stakeholders",
		"life_cycle_process",
		"portfolio_entry_status",
		"last_pe_report_date",
		"last_milestone",
		"last_milestone_date",
		"next_milestone",
		"next_milestone_date",
		"is_concept",
		"archived",
		"start_date",
		"end_date",
		"stakeholder_types",
	];

	fn value(&self, field: &str) -> Value {
		match field {
			"id" => self.id.into(),
			"governance_id" => self.governance_id.clone().into(),
			"creation_date" => self.creation_date.into(),
			"name" => self.name.as_str().into(),
			"is_public" => self.is_public.into(),
			"portfolio_entry_type" => self.portfolio_entry_type.clone().into(),
			"manager" => self.manager.clone().into(),
			"manager_org_unit" => self.manager_org_unit.clone().into(),
			"sponsoring_unit" => self.sponsoring_unit.clone().into(),
			"delivery_units" => self.delivery_units.clone().into(),
			"portfolios" => self.portfolios.clone().into(),
			"stakeholders" => self.stakeholders.clone().into(),
			"life_cycle_process" => self.life_cycle_process.clone().into(),
			"portfolio_entry_status" => self
				.portfolio_entry_status
				.as_ref()
				.map(|s| s.name.as_str())
				.into(),
			"last_pe_report_date" => self.last_pe_report_date.into(),
			"last_milestone" => self.last_milestone.clone().into(),
			"last_milestone_date" => self.last_milestone_date.into(),
			"next_milestone" => self.next_milestone.clone().into(),
			"next_milestone_date" => self.next_milestone_date.into(),
			"is_concept" => self.is_concept.into(),
			"archived" => self.archived.into(),
			"start_date" => self.start_date.into(),
			"end_date" => self.end_date.into(),
			"stakeholder_types" => self.stakeholder_types.clone().into(),
			_ => Value::Null,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Some(1), Some(2), Ordering::Less)]
	#[case(Some(2), None, Ordering::Less)]
	#[case(None, Some(1), Ordering::Greater)]
	#[case(None, None, Ordering::Equal)]
	fn test_missing_values_sort_last(#[case] a: Option<i32>, #[case] b: Option<i32>, #[case] expected: Ordering) {
		assert_eq!(compare_missing_last(a, b, Ord::cmp), expected);
	}

	#[rstest]
	#[case(serde_json::json!({ "from": "2024-06-01", "to": null }), true)]
	#[case(serde_json::json!({ "from": null, "to": "2024-05-31" }), false)]
	#[case(serde_json::json!({ "from": "not a date", "to": null }), true)]
	#[case(serde_json::json!(null), true)]
	fn test_date_range_bounds(#[case] range: serde_json::Value, #[case] expected: bool) {
		let entry = PortfolioEntry {
			id: 1,
			governance_id: None,
			creation_date: None,
			name: "ERP".into(),
			is_public: false,
			archived: false,
			portfolio_entry_type: None,
			manager: None,
			sponsoring_unit: None,
			delivery_units: Vec::new(),
			portfolios: Vec::new(),
			stakeholders: Vec::new(),
			life_cycle: None,
			last_milestone: None,
			planned_milestones: vec![PlannedMilestone {
				milestone: crate::models::LifeCycleMilestone {
					id: 5,
					short_name: "G1".into(),
					name: "Gate 1".into(),
				},
				planned_date: NaiveDate::from_ymd_opt(2024, 6, 1),
				passed: false,
			}],
			last_report: None,
			start_date: None,
			end_date: None,
		};
		assert_eq!(next_milestone_date_in(&entry, &range), expected);
	}
}
