//! Column descriptors

mod base;

use std::fmt::{self, Debug};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::value::Value;

pub use base::ColumnDescriptor;

/// How the grid may sort a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SorterType {
	/// Not sortable
	#[default]
	None,
	/// Sortable and currently sorted
	Sorted,
	/// Sortable, not currently sorted
	Unsorted,
}

type ComputeFn<R> = dyn Fn(&R) -> Value + Send + Sync;

/// Where a column reads its value from
pub enum Accessor<R> {
	/// A field declared by the row view, checked when the table is built
	Field(String),
	/// A value computed from the row, used by provider-supplied columns
	Computed(Arc<ComputeFn<R>>),
}

impl<R> Accessor<R> {
	/// Field name, for field accessors
	pub fn field(&self) -> Option<&str> {
		match self {
			Accessor::Field(name) => Some(name),
			Accessor::Computed(_) => None,
		}
	}
}

impl<R> Clone for Accessor<R> {
	fn clone(&self) -> Self {
		match self {
			Accessor::Field(name) => Accessor::Field(name.clone()),
			Accessor::Computed(f) => Accessor::Computed(Arc::clone(f)),
		}
	}
}

impl<R> Debug for Accessor<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Accessor::Field(name) => f.debug_tuple("Field").field(name).finish(),
			Accessor::Computed(_) => f.write_str("Computed(..)"),
		}
	}
}
