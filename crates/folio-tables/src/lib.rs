//! Declarative list-view tables
//!
//! This crate provides the generic mechanism behind the application's list
//! views: a row view exposes display-ready fields, a table definition wires
//! column keys to label keys and formatters, an optional filter config
//! describes the searchable columns, and filling a table produces the
//! render-ready model consumed by the grid component.
//!
//! # Features
//!
//! - **Row views**: flat snapshots of domain entities implementing [`RowView`]
//! - **Columns**: label keys, sort strategy, formatter, CSS classes, visibility
//! - **Formatters**: plain, boolean, date, number, list, link, image
//! - **Row actions**: whole-row navigation, skipped by flagged columns
//! - **Filters**: text, select, autocomplete, checkbox and date range widgets
//! - **Custom attributes**: runtime-discovered columns through providers
//! - **Settings**: formatting and filter behavior loaded from TOML
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[TableBuilder] --> B[TableDefinition]
//!     B --> C[ColumnDescriptor]
//!     C --> D[Formatter]
//!     P[ColumnProvider] --> A
//!     B -- fill --> F[FilledTable]
//!     G[FilterConfigBuilder] --> H[FilterConfig]
//!     H --> I[FilterDescriptor]
//!     H -- post query --> J[Entities]
//! ```
//!
//! # Example
//!
//! ```rust
//! use folio_tables::column::ColumnDescriptor;
//! use folio_tables::formatter::Formatter;
//! use folio_tables::i18n::KeyEcho;
//! use folio_tables::{RowView, TableBuilder, Value};
//!
//! struct CurrencyListView {
//!     id: i64,
//!     code: String,
//!     is_active: bool,
//! }
//!
//! impl RowView for CurrencyListView {
//!     const FIELDS: &'static [&'static str] = &["id", "code", "is_active"];
//!
//!     fn value(&self, field: &str) -> Value {
//!         match field {
//!             "id" => self.id.into(),
//!             "code" => self.code.as_str().into(),
//!             "is_active" => self.is_active.into(),
//!             _ => Value::Null,
//!         }
//!     }
//! }
//!
//! let table = TableBuilder::<CurrencyListView>::new()
//!     .column(ColumnDescriptor::new("code", "code", "object.currency.code.label"))
//!     .column(
//!         ColumnDescriptor::new("isActive", "is_active", "object.currency.is_active.label")
//!             .formatter(Formatter::boolean()),
//!     )
//!     .row_action(|c: &CurrencyListView| format!("/admin/currency/{}", c.id))
//!     .empty_message_key("object.currency.table.empty")
//!     .build()
//!     .unwrap();
//!
//! let rows = vec![CurrencyListView { id: 1, code: "CHF".into(), is_active: true }];
//! let filled = table.fill(&rows, &KeyEcho);
//!
//! assert_eq!(filled.rows[0].cells[0].html, "CHF");
//! assert_eq!(filled.rows[0].url.as_deref(), Some("/admin/currency/1"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod error;
pub mod escape;
pub mod filter;
pub mod formatter;
pub mod i18n;
pub mod provider;
pub mod row;
pub mod settings;
pub mod table;
pub mod value;

// Re-exports for convenience
pub use column::{ColumnDescriptor, SorterType};
pub use error::{Result, TableError};
pub use filter::{FilterConfig, FilterConfigBuilder, FilterDescriptor, FilterState, FilterWidget, SortStatus};
pub use formatter::Formatter;
pub use i18n::MessageResolver;
pub use row::RowView;
pub use settings::{FilterSettings, FormatSettings, TableSettings};
pub use table::{FilledTable, TableBuilder, TableDefinition};
pub use value::{Reference, Value};
