//! Read-only lookups against the persistence layer
//!
//! Some row views need related data the entity does not carry, and some
//! filters need the active option sets. Failures of the underlying store
//! are the implementor's concern; a missing object is simply `None`.

use std::collections::HashMap;

use crate::models::{Portfolio, ValueHolder};

/// Option sets offered by select filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionSet {
	/// Active portfolio entry types
	PortfolioEntryTypes,
	/// Active org units
	OrgUnits,
	/// Active portfolios
	Portfolios,
	/// Milestones of active life cycle processes
	LifeCycleMilestones,
	/// Active life cycle processes
	LifeCycleProcesses,
	/// Active portfolio entry report statuses
	ReportStatusTypes,
}

/// Read-only persistence collaborator
pub trait Lookup: Send + Sync {
	/// Portfolio by id
	fn portfolio(&self, id: i64) -> Option<Portfolio>;

	/// Options of a select filter
	fn options(&self, set: OptionSet) -> Vec<ValueHolder>;
}

/// Lookup over in-memory data
#[derive(Debug, Clone, Default)]
pub struct InMemoryLookup {
	portfolios: HashMap<i64, Portfolio>,
	options: HashMap<OptionSet, Vec<ValueHolder>>,
}

impl InMemoryLookup {
	/// Creates an empty lookup
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a portfolio
	pub fn with_portfolio(mut self, portfolio: Portfolio) -> Self {
		self.portfolios.insert(portfolio.id, portfolio);
		self
	}

	/// Sets the options of a set
	pub fn with_options(mut self, set: OptionSet, options: Vec<ValueHolder>) -> Self {
		self.options.insert(set, options);
		self
	}
}

impl Lookup for InMemoryLookup {
	fn portfolio(&self, id: i64) -> Option<Portfolio> {
		self.portfolios.get(&id).cloned()
	}

	fn options(&self, set: OptionSet) -> Vec<ValueHolder> {
		self.options.get(&set).cloned().unwrap_or_default()
	}
}
