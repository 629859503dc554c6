//! Column resolution.

use rowtree_core::Row;

use crate::state::GridState;

/// Decides which columns are displayed for the current state.
pub trait ColumnResolver {
    /// Ordered list of displayed column names.
    fn resolve(&self, state: &GridState, data: &[Row]) -> Vec<String>;
}

impl<F> ColumnResolver for F
where
    F: Fn(&GridState, &[Row]) -> Vec<String>,
{
    fn resolve(&self, state: &GridState, data: &[Row]) -> Vec<String> {
        self(state, data)
    }
}

/// Default resolver: the configured column order, or else the first row's columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataColumns;

impl ColumnResolver for DataColumns {
    fn resolve(&self, state: &GridState, data: &[Row]) -> Vec<String> {
        if !state.column_config.column_order.is_empty() {
            return state.column_config.column_order.clone();
        }
        data.first()
            .map(|row| row.columns().map(str::to_owned).collect())
            .unwrap_or_default()
    }
}
