//! Column configuration.

/// Default name of the field that holds a raw row's children.
pub const DEFAULT_CHILDREN_FIELD: &str = "children";

/// How raw rows are read and how their columns are ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct ColumnConfig {
    /// Field under which raw rows keep their children.
    pub children_field: String,
    /// Canonical column order. Fields not listed keep their relative order
    /// and are placed ahead of the listed ones.
    pub column_order: Vec<String>,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            children_field: DEFAULT_CHILDREN_FIELD.to_owned(),
            column_order: Vec::new(),
        }
    }
}

impl ColumnConfig {
    /// Create a configuration with the default children field and no column order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field that holds children.
    #[must_use]
    pub fn with_children_field(mut self, field: impl Into<String>) -> Self {
        self.children_field = field.into();
        self
    }

    /// Set the canonical column order.
    #[must_use]
    pub fn with_column_order<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_order = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Position of `column` in the configured order.
    ///
    /// Unlisted columns yield `None`, which orders before every `Some`.
    #[must_use]
    pub fn column_rank(&self, column: &str) -> Option<usize> {
        self.column_order.iter().position(|c| c == column)
    }
}
