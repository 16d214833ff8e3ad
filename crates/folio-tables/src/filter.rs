//! Filter configuration for searchable grids
//!
//! A [`FilterConfig`] lists, in order, the columns a user may filter and
//! sort on. Each [`FilterDescriptor`] binds a dotted field path (which may
//! traverse relations, e.g. `manager.orgUnit.id`) to a UI widget and a
//! default sort status. The config is serialized to JSON for the grid
//! component, and user selections come back as a [`FilterState`].
//!
//! Most filtering happens in the persistence layer, which owns the query.
//! Columns whose value is derived after loading carry a [`PostQuery`] that
//! filters and orders already loaded entities in memory.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::{self, Debug};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::provider::FilterColumnProvider;
use crate::settings::FilterSettings;

/// One choice of a select filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
	/// Submitted value, usually an object id
	pub value: String,
	/// Display label
	pub label: String,
}

impl SelectOption {
	/// Creates an option
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}
}

/// Input widget bound to a filter column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum FilterWidget {
	/// Free text, `*` matches anything
	TextField {
		/// Initial text
		default: String,
	},
	/// Choice among a fixed set of options
	Select {
		/// Available options
		options: Vec<SelectOption>,
		/// Initially selected value
		default: Option<String>,
		/// Field paths displayed for the selected object
		display_fields: Vec<String>,
	},
	/// Choice among values served by a JSON endpoint
	Autocomplete {
		/// Endpoint URL
		endpoint: String,
		/// Field paths displayed for the selected object
		display_fields: Vec<String>,
	},
	/// Boolean toggle
	Checkbox {
		/// Initial state
		default: bool,
	},
	/// Inclusive date interval
	DateRange {
		/// Initial lower bound
		from: Option<NaiveDate>,
		/// Initial upper bound
		to: Option<NaiveDate>,
	},
	/// Disabled placeholder, the column cannot be filtered
	None,
}

impl FilterWidget {
	/// A select widget defaulting to its first option, or the disabled
	/// widget when fewer than `settings.min_select_options` options exist
	///
	/// # Examples
	///
	/// ```
	/// use folio_tables::filter::{FilterWidget, SelectOption};
	/// use folio_tables::FilterSettings;
	///
	/// let settings = FilterSettings::default();
	/// let widget = FilterWidget::select_or_none(Vec::new(), &["orgUnit.name"], &settings);
	/// assert_eq!(widget, FilterWidget::None);
	///
	/// let widget = FilterWidget::select_or_none(
	///     vec![SelectOption::new("4", "Finance")],
	///     &["orgUnit.name"],
	///     &settings,
	/// );
	/// assert!(matches!(widget, FilterWidget::Select { default: Some(ref d), .. } if d == "4"));
	/// ```
	pub fn select_or_none(
		options: Vec<SelectOption>,
		display_fields: &[&str],
		settings: &FilterSettings,
	) -> Self {
		if options.len() < settings.min_select_options {
			tracing::warn!(
				options = options.len(),
				min = settings.min_select_options,
				"not enough options, select filter disabled"
			);
			return FilterWidget::None;
		}
		let default = options.first().map(|o| o.value.clone());
		FilterWidget::Select {
			options,
			default,
			display_fields: display_fields.iter().map(|f| f.to_string()).collect(),
		}
	}

	/// Whether this is the disabled placeholder
	pub fn is_none(&self) -> bool {
		matches!(self, FilterWidget::None)
	}

	/// Initial filter value submitted by the widget
	pub fn default_value(&self) -> serde_json::Value {
		use serde_json::json;
		match self {
			FilterWidget::TextField { default } => json!(default),
			FilterWidget::Select { default, .. } => match default {
				Some(value) => json!([value]),
				None => json!([]),
			},
			FilterWidget::Checkbox { default } => json!(default),
			FilterWidget::DateRange { from, to } => json!({ "from": from, "to": to }),
			FilterWidget::Autocomplete { .. } | FilterWidget::None => serde_json::Value::Null,
		}
	}
}

/// Sort status of a filter column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortStatus {
	/// Not sortable
	#[default]
	None,
	/// Sortable, not sorted
	Unsorted,
	/// Sorted ascending
	Asc,
	/// Sorted descending
	Desc,
}

impl SortStatus {
	/// Whether the column is actively sorted
	pub fn is_sorted(self) -> bool {
		matches!(self, SortStatus::Asc | SortStatus::Desc)
	}
}

/// One filterable column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDescriptor {
	/// Column key, unique within a config
	pub name: String,
	/// Dotted property path, possibly through relations
	pub field_path: String,
	/// Label message key
	pub label_key: String,
	/// Input widget
	#[serde(flatten)]
	pub widget: FilterWidget,
	/// Shown by default
	pub displayed: bool,
	/// Always shown, cannot be hidden by the user
	pub mandatory: bool,
	/// Default sort status
	pub sort: SortStatus,
}

impl FilterDescriptor {
	/// Creates a hidden, unsorted descriptor
	///
	/// Disabled widgets are never sortable.
	pub fn new(
		name: impl Into<String>,
		field_path: impl Into<String>,
		label_key: impl Into<String>,
		widget: FilterWidget,
	) -> Self {
		let sort = if widget.is_none() {
			SortStatus::None
		} else {
			SortStatus::Unsorted
		};
		Self {
			name: name.into(),
			field_path: field_path.into(),
			label_key: label_key.into(),
			widget,
			displayed: false,
			mandatory: false,
			sort,
		}
	}

	/// Shows the column by default
	pub fn displayed(mut self, displayed: bool) -> Self {
		self.displayed = displayed;
		self
	}

	/// Makes the column always shown
	pub fn mandatory(mut self) -> Self {
		self.mandatory = true;
		self.displayed = true;
		self
	}

	/// Sets the default sort status, ignored for disabled widgets
	pub fn sort(mut self, sort: SortStatus) -> Self {
		if !self.widget.is_none() {
			self.sort = sort;
		}
		self
	}
}

type PredicateFn<E> = dyn Fn(&E, &serde_json::Value) -> bool + Send + Sync;
type ComparatorFn<E> = dyn Fn(&E, &E) -> Ordering + Send + Sync;

/// In-memory filter and order for a column computed after loading
pub struct PostQuery<E> {
	predicate: Arc<PredicateFn<E>>,
	comparator: Arc<ComparatorFn<E>>,
}

impl<E: 'static> PostQuery<E> {
	/// Creates a post query from a predicate over the entity and the
	/// submitted filter value, and an ascending comparator
	pub fn new<P, C>(predicate: P, comparator: C) -> Self
	where
		P: Fn(&E, &serde_json::Value) -> bool + Send + Sync + 'static,
		C: Fn(&E, &E) -> Ordering + Send + Sync + 'static,
	{
		Self {
			predicate: Arc::new(predicate),
			comparator: Arc::new(comparator),
		}
	}
}

impl<E> PostQuery<E> {
	/// Whether `entity` matches `value`
	pub fn test(&self, entity: &E, value: &serde_json::Value) -> bool {
		(self.predicate)(entity, value)
	}

	/// Ascending order of two entities
	pub fn compare(&self, a: &E, b: &E) -> Ordering {
		(self.comparator)(a, b)
	}
}

impl<E> Clone for PostQuery<E> {
	fn clone(&self) -> Self {
		Self {
			predicate: Arc::clone(&self.predicate),
			comparator: Arc::clone(&self.comparator),
		}
	}
}

impl<E> Debug for PostQuery<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("PostQuery(..)")
	}
}

/// User selection for one filter column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnState {
	/// Column shown in the grid
	#[serde(default)]
	pub displayed: bool,
	/// Filter value applied
	#[serde(default)]
	pub filtered: bool,
	/// Submitted value
	#[serde(default)]
	pub value: serde_json::Value,
	/// Sort status
	#[serde(default)]
	pub sort: SortStatus,
}

/// User selection for a whole filter config
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
	/// Per-column selection
	pub columns: BTreeMap<String, ColumnState>,
}

impl FilterState {
	/// Parses a selection submitted by the grid, rejecting unknown columns
	pub fn from_json<E>(json: &str, config: &FilterConfig<E>) -> Result<Self> {
		let state: FilterState = serde_json::from_str(json)?;
		if let Some(unknown) = state.columns.keys().find(|name| config.descriptor(name).is_none()) {
			return Err(TableError::UnknownFilterColumn(unknown.clone()));
		}
		Ok(state)
	}

	/// Serializes the selection
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Selection of one column
	pub fn column(&self, name: &str) -> Option<&ColumnState> {
		self.columns.get(name)
	}

	/// Names of columns the grid hides
	pub fn hidden_columns(&self) -> Vec<&str> {
		self.columns
			.iter()
			.filter(|(_, c)| !c.displayed)
			.map(|(name, _)| name.as_str())
			.collect()
	}
}

/// Builder for [`FilterConfig`]
pub struct FilterConfigBuilder<E = ()> {
	descriptors: Vec<FilterDescriptor>,
	post_queries: Vec<(String, PostQuery<E>)>,
}

impl<E> Default for FilterConfigBuilder<E> {
	fn default() -> Self {
		Self::new()
	}
}

impl<E> FilterConfigBuilder<E> {
	/// Creates an empty builder
	pub fn new() -> Self {
		Self {
			descriptors: Vec::new(),
			post_queries: Vec::new(),
		}
	}

	/// Appends a descriptor
	pub fn column(mut self, descriptor: FilterDescriptor) -> Self {
		self.descriptors.push(descriptor);
		self
	}

	/// Appends a descriptor filtered and ordered in memory
	pub fn post_query_column(mut self, descriptor: FilterDescriptor, post_query: PostQuery<E>) -> Self {
		self.post_queries.push((descriptor.name.clone(), post_query));
		self.descriptors.push(descriptor);
		self
	}

	/// Appends the descriptors a provider supplies for `domain_type`
	pub fn columns_from(mut self, provider: &dyn FilterColumnProvider, domain_type: &str) -> Self {
		self.descriptors.extend(provider.filter_columns_for(domain_type));
		self
	}

	/// Validates and freezes the config
	pub fn build(self) -> Result<FilterConfig<E>> {
		let mut seen = HashSet::with_capacity(self.descriptors.len());
		for descriptor in &self.descriptors {
			if !seen.insert(descriptor.name.as_str()) {
				return Err(TableError::DuplicateFilter(descriptor.name.clone()));
			}
			if !is_valid_path(&descriptor.field_path) {
				return Err(TableError::InvalidFieldPath {
					column: descriptor.name.clone(),
					path: descriptor.field_path.clone(),
				});
			}
		}

		tracing::debug!(columns = self.descriptors.len(), "built filter config");

		Ok(FilterConfig {
			descriptors: self.descriptors,
			post_queries: self.post_queries.into_iter().collect(),
		})
	}
}

fn is_valid_path(path: &str) -> bool {
	!path.is_empty()
		&& path.split('.').all(|segment| {
			!segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
		})
}

/// Ordered filter columns of one grid type
pub struct FilterConfig<E = ()> {
	descriptors: Vec<FilterDescriptor>,
	post_queries: HashMap<String, PostQuery<E>>,
}

impl<E> Clone for FilterConfig<E> {
	fn clone(&self) -> Self {
		Self {
			descriptors: self.descriptors.clone(),
			post_queries: self.post_queries.clone(),
		}
	}
}

impl<E> Debug for FilterConfig<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FilterConfig")
			.field("descriptors", &self.descriptors)
			.field("post_queries", &self.post_queries.keys().collect::<Vec<_>>())
			.finish()
	}
}

#[derive(Serialize)]
struct FilterConfigJson<'a> {
	columns: &'a [FilterDescriptor],
}

impl<E> FilterConfig<E> {
	/// Descriptors, in order
	pub fn descriptors(&self) -> &[FilterDescriptor] {
		&self.descriptors
	}

	/// Looks up a descriptor by name
	pub fn descriptor(&self, name: &str) -> Option<&FilterDescriptor> {
		self.descriptors.iter().find(|d| d.name == name)
	}

	/// Whether a column is filtered in memory
	pub fn has_post_query(&self, name: &str) -> bool {
		self.post_queries.contains_key(name)
	}

	/// UI descriptor handed to the grid component
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(&FilterConfigJson {
			columns: &self.descriptors,
		})?)
	}

	/// Selection before the user changed anything
	pub fn default_state(&self) -> FilterState {
		let columns = self
			.descriptors
			.iter()
			.map(|d| {
				(
					d.name.clone(),
					ColumnState {
						displayed: d.displayed || d.mandatory,
						filtered: false,
						value: d.widget.default_value(),
						sort: d.sort,
					},
				)
			})
			.collect();
		FilterState { columns }
	}

	/// First column sorted by default
	pub fn initial_sort(&self) -> Option<(&str, SortStatus)> {
		self.descriptors
			.iter()
			.find(|d| d.sort.is_sorted())
			.map(|d| (d.name.as_str(), d.sort))
	}

	/// Filters and orders loaded entities by the post-query columns of
	/// `state`
	///
	/// Entities are kept when every filtered post-query column accepts
	/// them. The first sorted column, in config order, orders the result
	/// when it has a post query.
	pub fn apply_post_query(&self, entities: Vec<E>, state: &FilterState) -> Vec<E> {
		let active: Vec<(&PostQuery<E>, &serde_json::Value)> = self
			.descriptors
			.iter()
			.filter_map(|d| {
				let selection = state.column(&d.name).filter(|c| c.filtered)?;
				let post_query = self.post_queries.get(&d.name)?;
				Some((post_query, &selection.value))
			})
			.collect();

		let mut kept: Vec<E> = entities
			.into_iter()
			.filter(|entity| active.iter().all(|(pq, value)| pq.test(entity, value)))
			.collect();

		let sorted = self.descriptors.iter().find_map(|d| {
			let sort = state.column(&d.name)?.sort;
			if !sort.is_sorted() {
				return None;
			}
			Some((self.post_queries.get(&d.name), sort))
		});
		if let Some((Some(post_query), sort)) = sorted {
			kept.sort_by(|a, b| {
				let ordering = post_query.compare(a, b);
				if sort == SortStatus::Desc {
					ordering.reverse()
				} else {
					ordering
				}
			});
		}

		tracing::trace!(filters = active.len(), kept = kept.len(), "applied post query");
		kept
	}
}
