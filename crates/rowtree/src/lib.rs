#![forbid(unsafe_code)]

//! rowtree public facade crate.
//!
//! Re-exports the data model from `rowtree-core` and the transformations
//! and reducer from `rowtree-engine`, plus a prelude for day-to-day usage.
//!
//! ```
//! use rowtree::prelude::*;
//!
//! let reducer = Reducer::new();
//! let raw = vec![RawRow::new("a").field("name", "Zed")];
//! let state = reducer.reduce(GridState::new(), Action::LoadData(raw)).unwrap();
//! assert_eq!(state.visible_data[0].get("name"), Some(&Value::from("Zed")));
//! ```

// --- Core re-exports -------------------------------------------------------

pub use rowtree_core::{
    ColumnConfig, RawRow, Row, RowMetadata, TreeError, TreeResult, Value, find_in_forest,
    iter_forest, raw_rows_from_json,
};

// --- Engine re-exports -----------------------------------------------------

pub use rowtree_engine::{
    Action, ColumnResolver, ColumnSorter, ColumnVisibility, DataColumns, FilterScope, GridState,
    Reducer, RowSorter, SortDirection, SortProperties, VisibilityAnnotator, filter, is_expanded,
    normalize, sort_subtrees, toggle,
};

#[cfg(feature = "state-persistence")]
pub use rowtree_engine::{load_state, save_state};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Action, ColumnConfig, FilterScope, GridState, RawRow, Reducer, Row, SortProperties,
        TreeError, TreeResult, Value,
    };

    pub use crate::{core, engine};
}

pub use rowtree_core as core;
pub use rowtree_engine as engine;
