#![forbid(unsafe_code)]

//! Core: rows, values, column configuration, and errors for rowtree.
//!
//! This crate holds the data model shared by the transformation engine
//! (`rowtree-engine`) and the facade (`rowtree`). It performs no tree
//! transformations itself beyond ingesting raw JSON rows.

pub mod config;
pub mod error;
pub mod json;
pub mod logging;
pub mod row;
pub mod value;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};

pub use config::{ColumnConfig, DEFAULT_CHILDREN_FIELD};
pub use error::{TreeError, TreeResult};
pub use json::raw_rows_from_json;
pub use row::{
    DepthFirst, Fields, RawRow, Row, RowMetadata, STRUCTURAL_FIELDS, find_in_forest,
    is_structural_field, iter_forest,
};
pub use value::Value;
