//! Table settings
//!
//! Settings control how formatters render values and when select filters
//! fall back to a disabled component. They are plain serde structs with
//! defaults, loadable from a TOML file:
//!
//! ```toml
//! [format]
//! empty_placeholder = "-"
//! date_pattern = "%d.%m.%Y"
//!
//! [filter]
//! min_select_options = 1
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Root settings object
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Formatter settings
	pub format: FormatSettings,
	/// Filter settings
	pub filter: FilterSettings,
}

impl TableSettings {
	/// Parse settings from a TOML string, missing keys take their defaults
	///
	/// # Examples
	///
	/// ```
	/// use folio_tables::TableSettings;
	///
	/// let settings = TableSettings::from_toml_str("[filter]\nmin_select_options = 2\n").unwrap();
	/// assert_eq!(settings.filter.min_select_options, 2);
	/// assert_eq!(settings.format.date_pattern, "%d/%m/%Y");
	/// ```
	pub fn from_toml_str(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}

	/// Read settings from a TOML file
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
		let content = std::fs::read_to_string(path.as_ref())?;
		let settings = Self::from_toml_str(&content)?;
		tracing::debug!(path = %path.as_ref().display(), "loaded table settings");
		Ok(settings)
	}
}

/// Formatter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
	/// Markup rendered for absent values
	pub empty_placeholder: String,
	/// Markup rendered for `true`
	pub boolean_true: String,
	/// Markup rendered for `false`
	pub boolean_false: String,
	/// chrono pattern for dates
	pub date_pattern: String,
	/// chrono pattern for date-times
	pub datetime_pattern: String,
	/// Decimal separator for numbers
	pub decimal_separator: String,
	/// Thousands separator for numbers, empty to disable grouping
	pub grouping_separator: String,
	/// Maximum number of fraction digits shown for decimals
	pub max_fraction_digits: u32,
	/// Separator between list items
	pub list_separator: String,
	/// Markup rendered when an image URL is missing
	pub image_placeholder: String,
}

impl Default for FormatSettings {
	fn default() -> Self {
		Self {
			empty_placeholder: "<i class=\"text-muted\">-</i>".to_string(),
			boolean_true: "<span class=\"fa fa-check-square-o\"></span>".to_string(),
			boolean_false: "<span class=\"fa fa-square-o\"></span>".to_string(),
			date_pattern: "%d/%m/%Y".to_string(),
			datetime_pattern: "%d/%m/%Y %H:%M".to_string(),
			decimal_separator: ".".to_string(),
			grouping_separator: "'".to_string(),
			max_fraction_digits: 2,
			list_separator: ", ".to_string(),
			image_placeholder: "<span class=\"fa fa-picture-o text-muted\"></span>".to_string(),
		}
	}
}

/// Filter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
	/// Fewer options than this turns a select filter into a disabled one
	pub min_select_options: usize,
}

impl Default for FilterSettings {
	fn default() -> Self {
		Self {
			min_select_options: 1,
		}
	}
}
