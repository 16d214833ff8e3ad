//! Lightweight domain entities
//!
//! These are the already-loaded entities list views are built from. They
//! carry only the fields the views read.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Organizational unit type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgUnitType {
	pub id: i64,
	pub name: String,
}

/// Organizational unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgUnit {
	pub id: i64,
	pub ref_id: Option<String>,
	pub name: String,
	pub org_unit_type: Option<OrgUnitType>,
	pub is_active: bool,
	pub manager: Option<Box<Actor>>,
}

/// A person known to the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
	pub id: i64,
	pub uid: String,
	pub employee_id: Option<String>,
	pub first_name: String,
	pub last_name: String,
	pub title: Option<String>,
	pub is_active: bool,
	pub deleted: bool,
	pub org_unit: Option<OrgUnit>,
	pub manager: Option<Box<Actor>>,
}

impl Actor {
	/// Display name, first name then last name
	pub fn name(&self) -> String {
		match (self.first_name.is_empty(), self.last_name.is_empty()) {
			(false, false) => format!("{} {}", self.first_name, self.last_name),
			(true, _) => self.last_name.clone(),
			(false, true) => self.first_name.clone(),
		}
	}
}

/// Portfolio type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioType {
	pub id: i64,
	pub name: String,
	pub description: Option<String>,
	pub selectable: bool,
}

/// Portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
	pub id: i64,
	pub ref_id: Option<String>,
	pub name: String,
	pub portfolio_type: Option<PortfolioType>,
	pub is_active: bool,
	pub manager: Option<Actor>,
}

/// Portfolio entry type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioEntryType {
	pub id: i64,
	pub name: String,
}

/// Stakeholder role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeholderType {
	pub id: i64,
	pub name: String,
}

/// An actor holding a role on a portfolio or portfolio entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stakeholder {
	pub id: i64,
	pub actor: Actor,
	pub stakeholder_type: StakeholderType,
	pub portfolio_id: Option<i64>,
}

/// Milestone of a life cycle process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeCycleMilestone {
	pub id: i64,
	pub short_name: String,
	pub name: String,
}

/// A milestone that has been passed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneInstance {
	pub milestone: LifeCycleMilestone,
	pub passed_date: Option<NaiveDate>,
}

/// A milestone planned for a portfolio entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMilestone {
	pub milestone: LifeCycleMilestone,
	pub planned_date: Option<NaiveDate>,
	pub passed: bool,
}

/// Active life cycle of a portfolio entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeCycleInstance {
	pub process_name: String,
	pub is_concept: bool,
}

/// Status a portfolio entry report can declare
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStatusType {
	pub id: i64,
	pub name: String,
	/// Bootstrap label variant, e.g. `success` or `danger`
	pub css_class: String,
}

/// Status report published for a portfolio entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntryReport {
	pub id: i64,
	pub status: Option<ReportStatusType>,
	pub publication_date: Option<NaiveDate>,
}

/// Project, initiative or application managed in portfolios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry {
	pub id: i64,
	pub governance_id: Option<String>,
	pub creation_date: Option<NaiveDate>,
	pub name: String,
	pub is_public: bool,
	pub archived: bool,
	pub portfolio_entry_type: Option<PortfolioEntryType>,
	pub manager: Option<Actor>,
	pub sponsoring_unit: Option<OrgUnit>,
	pub delivery_units: Vec<OrgUnit>,
	pub portfolios: Vec<Portfolio>,
	pub stakeholders: Vec<Stakeholder>,
	pub life_cycle: Option<LifeCycleInstance>,
	pub last_milestone: Option<MilestoneInstance>,
	pub planned_milestones: Vec<PlannedMilestone>,
	pub last_report: Option<PortfolioEntryReport>,
	pub start_date: Option<NaiveDate>,
	pub end_date: Option<NaiveDate>,
}

impl PortfolioEntry {
	/// Earliest planned milestone not passed yet
	///
	/// Milestones without a planned date come last.
	pub fn next_milestone(&self) -> Option<&PlannedMilestone> {
		self.planned_milestones
			.iter()
			.filter(|m| !m.passed)
			.min_by_key(|m| (m.planned_date.is_none(), m.planned_date))
	}
}

/// Currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
	pub code: String,
}

/// Cost center
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCenter {
	pub id: i64,
	pub ref_id: Option<String>,
	pub name: String,
}

/// Line of a purchase order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderLineItem {
	pub id: i64,
	pub ref_id: String,
	pub purchase_order_ref_id: String,
	pub currency: Option<Currency>,
	pub amount: Option<Decimal>,
	pub amount_received: Option<Decimal>,
	pub remaining_amount: Option<Decimal>,
	pub is_opex: bool,
	pub is_cancelled: bool,
	pub shared: bool,
	pub associated: bool,
	pub cost_center: Option<CostCenter>,
}

/// Purchase order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
	pub id: i64,
	pub ref_id: String,
	pub is_cancelled: bool,
	pub line_items: Vec<PurchaseOrderLineItem>,
}

/// An option of a select filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueHolder {
	pub value: i64,
	pub name: String,
}

impl From<&ValueHolder> for folio_tables::filter::SelectOption {
	fn from(holder: &ValueHolder) -> Self {
		Self::new(holder.value.to_string(), holder.name.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn milestone(id: i64, date: Option<(i32, u32, u32)>, passed: bool) -> PlannedMilestone {
		PlannedMilestone {
			milestone: LifeCycleMilestone {
				id,
				short_name: format!("M{id}"),
				name: format!("Milestone {id}"),
			},
			planned_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
			passed,
		}
	}

	#[test]
	fn test_next_milestone_skips_passed_and_undated() {
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
			delivery_units: vec![],
			portfolios: vec![],
			stakeholders: vec![],
			life_cycle: None,
			last_milestone: None,
			planned_milestones: vec![
				milestone(1, Some((2015, 1, 1)), true),
				milestone(2, None, false),
				milestone(3, Some((2015, 6, 1)), false),
				milestone(4, Some((2015, 3, 1)), false),
			],
			last_report: None,
			start_date: None,
			end_date: None,
		};
		assert_eq!(entry.next_milestone().map(|m| m.milestone.id), Some(4));
	}

	#[test]
	fn test_actor_name() {
		let mut actor = Actor {
			id: 1,
			uid: "jdoe".into(),
			employee_id: None,
			first_name: "Jane".into(),
			last_name: "Doe".into(),
			title: None,
			is_active: true,
			deleted: false,
			org_unit: None,
			manager: None,
		};
		assert_eq!(actor.name(), "Jane Doe");
		actor.first_name.clear();
		assert_eq!(actor.name(), "Doe");
	}
}
