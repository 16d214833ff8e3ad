//! Error types for table and filter configuration

use thiserror::Error;

/// Errors raised while building or using table definitions
///
/// Everything but [`TableError::InvalidFilterState`] signals a programming
/// error in a table definition and is raised at build time.
#[derive(Debug, Error)]
pub enum TableError {
	/// Two columns share the same name
	#[error("Duplicate column '{column}' in table '{table}'")]
	DuplicateColumn {
		/// Table type name
		table: &'static str,
		/// Offending column name
		column: String,
	},

	/// A column accessor refers to a field the row view does not declare
	#[error("Unknown field '{field}' for column '{column}' in table '{table}'")]
	UnknownField {
		/// Table type name
		table: &'static str,
		/// Column declaring the accessor
		column: String,
		/// Missing field
		field: String,
	},

	/// The identity field is not declared by the row view
	#[error("Unknown id field '{field}' in table '{table}'")]
	UnknownIdField {
		/// Table type name
		table: &'static str,
		/// Missing field
		field: String,
	},

	/// A column to hide does not exist
	#[error("Unknown column '{0}'")]
	UnknownColumn(String),

	/// Two filter descriptors share the same name
	#[error("Duplicate filter column '{0}'")]
	DuplicateFilter(String),

	/// A filter field path is empty or has an empty segment
	#[error("Invalid field path '{path}' for filter column '{column}'")]
	InvalidFieldPath {
		/// Filter column name
		column: String,
		/// Offending path
		path: String,
	},

	/// A filter state refers to a column the filter config does not have
	#[error("Unknown filter column '{0}'")]
	UnknownFilterColumn(String),

	/// A filter state could not be parsed
	#[error("Invalid filter state: {0}")]
	InvalidFilterState(#[from] serde_json::Error),

	/// Settings file could not be parsed
	#[error("Invalid settings: {0}")]
	Settings(#[from] toml::de::Error),

	/// Settings file could not be read
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
