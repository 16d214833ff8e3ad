//! # Folio
//!
//! Declarative list views for portfolio management web applications.
//!
//! Folio describes the application's tabular lists once, as data: which
//! columns a list has, how each cell is formatted, where a click on a row
//! leads, and how the list can be filtered. Filling a table with row views
//! yields a serializable model the grid component renders as-is.
//!
//! ## Feature Flags
//!
//! - `views` (default) - Entity list views built on the table mechanism
//!
//! ## Quick Example
//!
//! ```rust
//! use folio::prelude::*;
//! use folio::tables::i18n::KeyEcho;
//!
//! struct CurrencyListView {
//!     id: i64,
//!     code: String,
//! }
//!
//! impl RowView for CurrencyListView {
//!     const FIELDS: &'static [&'static str] = &["id", "code"];
//!
//!     fn value(&self, field: &str) -> Value {
//!         match field {
//!             "id" => self.id.into(),
//!             "code" => self.code.as_str().into(),
//!             _ => Value::Null,
//!         }
//!     }
//! }
//!
//! let table = TableBuilder::<CurrencyListView>::new()
//!     .column(ColumnDescriptor::new("code", "code", "object.currency.code.label"))
//!     .build()
//!     .unwrap();
//! let filled = table.fill(&[CurrencyListView { id: 1, code: "EUR".into() }], &KeyEcho);
//! assert_eq!(filled.rows[0].cells[0].html, "EUR");
//! ```

pub mod tables;
#[cfg(feature = "views")]
pub mod views;

// Re-export the most used table types at the crate root
pub use folio_tables::{
	ColumnDescriptor, FilledTable, FilterConfig, FilterState, Formatter, Result, RowView, TableBuilder,
	TableDefinition, TableError, TableSettings, Value,
};

/// Prelude module for convenient imports
///
/// Import everything commonly needed with:
/// ```rust
/// use folio::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{
		ColumnDescriptor, FilledTable, FilterConfig, FilterState, Formatter, Result, RowView, TableBuilder,
		TableDefinition, TableError, TableSettings, Value,
	};
	pub use folio_tables::{FilterSettings, FormatSettings, MessageResolver, Reference};

	// External
	pub use serde::{Deserialize, Serialize};

	#[cfg(feature = "views")]
	pub use crate::views::{DefaultRoutes, Lookup, Routes};
}
