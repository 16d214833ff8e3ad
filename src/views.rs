//! Views module.
//!
//! This module provides the portfolio management list views.
//!
//! # Examples
//!
//! ```rust
//! use folio::views::models::PortfolioType;
//! use folio::views::PortfolioTypeListView;
//!
//! let portfolio_type = PortfolioType {
//!     id: 3,
//!     name: "Strategic".into(),
//!     description: None,
//!     selectable: true,
//! };
//! let row = PortfolioTypeListView::new(&portfolio_type);
//! assert_eq!(PortfolioTypeListView::table().columns().len(), 5);
//! # let _ = row;
//! ```

pub use folio_views::*;
