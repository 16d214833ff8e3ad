//! URLs of the pages list views link to

/// Reverse routing for the pages list views link to
pub trait Routes: Send + Sync {
	/// Actor details
	fn actor_view(&self, id: i64) -> String;
	/// Org unit details
	fn org_unit_view(&self, id: i64) -> String;
	/// Portfolio overview
	fn portfolio_overview(&self, id: i64) -> String;
	/// Portfolio entry overview
	fn portfolio_entry_overview(&self, id: i64) -> String;
	/// Purchase order details
	fn purchase_order_view(&self, id: i64) -> String;
	/// Purchase order line item details
	fn purchase_order_line_item_view(&self, id: i64) -> String;
	/// Cost center details
	fn cost_center_view(&self, id: i64) -> String;
	/// Assigns a line item to a work order of a portfolio entry
	fn select_work_order_line_item(&self, portfolio_entry_id: i64, work_order_id: i64, line_item_id: i64) -> String;
	/// Portfolio type edit form
	fn manage_portfolio_type(&self, id: i64) -> String;
	/// Portfolio type deletion
	fn delete_portfolio_type(&self, id: i64) -> String;
	/// Portfolio stakeholder edit form
	fn manage_portfolio_stakeholder(&self, portfolio_id: i64, id: i64) -> String;
	/// Portfolio stakeholder removal
	fn delete_portfolio_stakeholder(&self, portfolio_id: i64, id: i64) -> String;
	/// JSON endpoint searching actors, used by autocomplete filters
	fn manager_search(&self) -> String;
}

/// Conventional application paths
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRoutes;

impl Routes for DefaultRoutes {
	fn actor_view(&self, id: i64) -> String {
		format!("/actor/{id}/view")
	}

	fn org_unit_view(&self, id: i64) -> String {
		format!("/org-unit/{id}/view?page=0")
	}

	fn portfolio_overview(&self, id: i64) -> String {
		format!("/portfolio/{id}/overview")
	}

	fn portfolio_entry_overview(&self, id: i64) -> String {
		format!("/portfolio-entry/{id}/overview")
	}

	fn purchase_order_view(&self, id: i64) -> String {
		format!("/purchase-order/{id}/view")
	}

	fn purchase_order_line_item_view(&self, id: i64) -> String {
		format!("/purchase-order/line-item/{id}/view")
	}

	fn cost_center_view(&self, id: i64) -> String {
		format!("/cost-center/{id}/view")
	}

	fn select_work_order_line_item(&self, portfolio_entry_id: i64, work_order_id: i64, line_item_id: i64) -> String {
		format!("/portfolio-entry/{portfolio_entry_id}/financial/work-order/{work_order_id}/line-item/{line_item_id}/select")
	}

	fn manage_portfolio_type(&self, id: i64) -> String {
		format!("/admin/config/portfolio/type/{id}/manage")
	}

	fn delete_portfolio_type(&self, id: i64) -> String {
		format!("/admin/config/portfolio/type/{id}/delete")
	}

	fn manage_portfolio_stakeholder(&self, portfolio_id: i64, id: i64) -> String {
		format!("/portfolio/{portfolio_id}/stakeholder/{id}/manage")
	}

	fn delete_portfolio_stakeholder(&self, portfolio_id: i64, id: i64) -> String {
		format!("/portfolio/{portfolio_id}/stakeholder/{id}/delete")
	}

	fn manager_search(&self) -> String {
		"/json/manager".to_string()
	}
}
