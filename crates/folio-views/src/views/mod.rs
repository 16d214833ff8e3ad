//! List views, one module per entity type

pub mod actor;
pub mod org_unit;
pub mod portfolio;
pub mod portfolio_entry;
pub mod portfolio_type;
pub mod purchase_order;
pub mod purchase_order_line_item;
pub mod stakeholder;

pub use actor::ActorListView;
pub use org_unit::OrgUnitListView;
pub use portfolio::PortfolioListView;
pub use portfolio_entry::PortfolioEntryListView;
pub use portfolio_type::PortfolioTypeListView;
pub use purchase_order::PurchaseOrderListView;
pub use purchase_order_line_item::PurchaseOrderLineItemListView;
pub use stakeholder::StakeholderListView;

use folio_tables::Reference;

use crate::models::{Actor, OrgUnit, Portfolio};
use crate::routes::Routes;

/// Link to an actor
pub(crate) fn actor_ref(actor: &Actor, routes: &dyn Routes) -> Reference {
	Reference::new(actor.id, actor.name()).with_url(routes.actor_view(actor.id))
}

/// Link to an org unit
pub(crate) fn org_unit_ref(org_unit: &OrgUnit, routes: &dyn Routes) -> Reference {
	Reference::new(org_unit.id, org_unit.name.clone()).with_url(routes.org_unit_view(org_unit.id))
}

/// Link to a portfolio
pub(crate) fn portfolio_ref(portfolio: &Portfolio, routes: &dyn Routes) -> Reference {
	Reference::new(portfolio.id, portfolio.name.clone()).with_url(routes.portfolio_overview(portfolio.id))
}
