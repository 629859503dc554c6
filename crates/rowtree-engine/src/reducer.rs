//! State transitions.
//!
//! A [`Reducer`] owns the three injected collaborators (column resolver,
//! visibility annotator, row sorter) and turns `(GridState, Action)` into a
//! new `GridState`. Every transition, whatever its kind, ends by rebuilding
//! the visible projection:
//!
//! ```text
//! data ─▶ filter ─▶ annotate ─▶ sort roots ─▶ sort expanded subtrees ─▶ visible_data
//! ```
//!
//! # Example
//!
//! ```
//! use rowtree_core::RawRow;
//! use rowtree_engine::reducer::{Action, Reducer};
//! use rowtree_engine::state::GridState;
//!
//! let reducer = Reducer::new();
//! let raw = vec![
//!     RawRow::new("a").field("name", "Zed"),
//!     RawRow::new("b").field("name", "Amy").child(RawRow::new("c").field("name", "Bob")),
//! ];
//! let state = reducer.reduce(GridState::new(), Action::LoadData(raw)).unwrap();
//! let state = reducer.reduce(state, Action::ToggleRow { id: "b".into() }).unwrap();
//! let state = reducer.reduce(state, Action::SetFilter("bo".into())).unwrap();
//!
//! assert_eq!(state.visible_data.len(), 1);
//! assert_eq!(state.visible_data[0].id, "b");
//! assert_eq!(state.visible_data[0].children[0].id, "b.1");
//! ```

use std::fmt;

use rowtree_core::{RawRow, TreeResult, raw_rows_from_json};

use crate::columns::{ColumnResolver, DataColumns};
use crate::expand::toggle;
use crate::filter::filter;
use crate::normalize::normalize;
use crate::sort::{ColumnSorter, RowSorter, SortProperties, sort_subtrees};
use crate::state::GridState;
use crate::visibility::{ColumnVisibility, VisibilityAnnotator};

/// An inbound state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the canonical tree with freshly loaded raw rows.
    LoadData(Vec<RawRow>),
    /// Invert the expansion flag of one row.
    ToggleRow {
        /// Identifier of the row to toggle.
        id: String,
    },
    /// Change the filter query.
    SetFilter(String),
    /// Change the sort settings.
    SetSort(SortProperties),
    /// Only rebuild the visible projection.
    Refresh,
}

impl Action {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::LoadData(_) => "load_data",
            Action::ToggleRow { .. } => "toggle_row",
            Action::SetFilter(_) => "set_filter",
            Action::SetSort(_) => "set_sort",
            Action::Refresh => "refresh",
        }
    }
}

/// Applies [`Action`]s to [`GridState`]s.
pub struct Reducer {
    resolver: Box<dyn ColumnResolver>,
    annotator: Box<dyn VisibilityAnnotator>,
    sorter: Box<dyn RowSorter>,
}

impl Default for Reducer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reducer").finish_non_exhaustive()
    }
}

impl Reducer {
    /// Create a reducer with the default collaborators
    /// ([`DataColumns`], [`ColumnVisibility`], [`ColumnSorter`]).
    #[must_use]
    pub fn new() -> Self {
        Self {
            resolver: Box::new(DataColumns),
            annotator: Box::new(ColumnVisibility),
            sorter: Box::new(ColumnSorter),
        }
    }

    /// Replace the column resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl ColumnResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Replace the visibility annotator.
    #[must_use]
    pub fn with_annotator(mut self, annotator: impl VisibilityAnnotator + 'static) -> Self {
        self.annotator = Box::new(annotator);
        self
    }

    /// Replace the row sorter.
    #[must_use]
    pub fn with_sorter(mut self, sorter: impl RowSorter + 'static) -> Self {
        self.sorter = Box::new(sorter);
        self
    }

    /// Apply one action, then rebuild the visible projection.
    ///
    /// # Errors
    ///
    /// Only [`Action::LoadData`] can fail, with the errors of
    /// [`normalize`](crate::normalize::normalize). The input state is
    /// consumed either way.
    pub fn reduce(&self, state: GridState, action: Action) -> TreeResult<GridState> {
        let span = rowtree_core::logging::reduce_span(action.name());
        let _guard = span.enter();

        let state = match action {
            Action::LoadData(raw) => self.load_data(state, &raw)?,
            Action::ToggleRow { id } => self.toggle_row(state, &id),
            Action::SetFilter(query) => GridState {
                filter: query,
                ..state
            },
            Action::SetSort(sort) => GridState {
                sort_properties: sort,
                ..state
            },
            Action::Refresh => state,
        };
        Ok(self.recompute_visible(state))
    }

    /// Parse JSON rows per the state's column configuration and load them.
    ///
    /// # Errors
    ///
    /// Malformed rows, then the errors of [`Reducer::reduce`] for
    /// [`Action::LoadData`].
    pub fn load_json(&self, state: GridState, json: &serde_json::Value) -> TreeResult<GridState> {
        let raw = raw_rows_from_json(json, &state.column_config)?;
        self.reduce(state, Action::LoadData(raw))
    }

    /// Normalize raw rows into the canonical tree. Does not touch `visible_data`.
    ///
    /// # Errors
    ///
    /// See [`normalize`](crate::normalize::normalize).
    pub fn load_data(&self, state: GridState, raw: &[RawRow]) -> TreeResult<GridState> {
        let data = normalize(raw, &state.column_config)?;
        Ok(GridState { data, ..state })
    }

    /// Toggle one row in the canonical tree. Does not touch `visible_data`.
    #[must_use]
    pub fn toggle_row(&self, state: GridState, id: &str) -> GridState {
        let data = toggle(&state.data, id);
        GridState { data, ..state }
    }

    /// Rebuild `visible_data` from `data`.
    #[must_use]
    pub fn recompute_visible(&self, state: GridState) -> GridState {
        let columns = self.resolver.resolve(&state, &state.data);
        let filtered = filter(&state.data, &state.filter, state.filter_scope);
        let annotated = self.annotator.annotate(filtered, &columns);
        let roots = self.sorter.sort_rows(annotated, &state.sort_properties);
        let visible_data = sort_subtrees(roots, false, self.sorter.as_ref(), &state.sort_properties);

        rowtree_core::trace!(
            columns = columns.len(),
            roots = visible_data.len(),
            "recomputed visible data"
        );
        GridState {
            visible_data,
            ..state
        }
    }
}
