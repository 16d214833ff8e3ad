//! Tables module.
//!
//! This module provides row views, column descriptors, formatters and
//! filter configurations.

pub use folio_tables::*;
