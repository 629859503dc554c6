//! Grid state.
//!
//! [`GridState`] is the single value a [`Reducer`](crate::reducer::Reducer)
//! consumes and produces. `data` is the canonical tree; `visible_data` is a
//! derived projection that is thrown away and rebuilt on every transition.

use rowtree_core::{ColumnConfig, Row};

use crate::filter::FilterScope;
use crate::sort::SortProperties;

/// Canonical tree, visible projection, and the settings that derive one from the other.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GridState {
    /// Canonical tree.
    pub data: Vec<Row>,
    /// Filtered and sorted projection of `data`.
    pub visible_data: Vec<Row>,
    /// Current filter query; empty means no filtering.
    pub filter: String,
    /// Current sort settings.
    pub sort_properties: SortProperties,
    /// Column configuration used for loading and column resolution.
    #[cfg_attr(feature = "state-persistence", serde(default))]
    pub column_config: ColumnConfig,
    /// What the filter scans.
    #[cfg_attr(feature = "state-persistence", serde(default))]
    pub filter_scope: FilterScope,
}

impl GridState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column configuration.
    #[must_use]
    pub fn with_column_config(mut self, config: ColumnConfig) -> Self {
        self.column_config = config;
        self
    }

    /// Set the filter query.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Set the sort properties.
    #[must_use]
    pub fn with_sort(mut self, sort: SortProperties) -> Self {
        self.sort_properties = sort;
        self
    }

    /// Set the filter scope.
    #[must_use]
    pub fn with_filter_scope(mut self, scope: FilterScope) -> Self {
        self.filter_scope = scope;
        self
    }
}
