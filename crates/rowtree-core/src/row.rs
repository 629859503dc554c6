//! Raw and normalized rows.
//!
//! A [`RawRow`] is what a data source hands over: column values, an
//! optional identifier, and nested raw children. Normalization turns a
//! forest of raw rows into [`Row`]s that carry their structural fields
//! (identifier, depth, parent linkage, expansion and child flags).
//!
//! Each row owns its `children` vector outright. The only link back up the
//! tree is `parent_id`, which is a lookup key rather than a reference.

use indexmap::IndexMap;

use crate::value::Value;

/// Ordered column name to value mapping.
pub type Fields = IndexMap<String, Value>;

/// Keys a persisted [`Row`] uses for its structural fields. A column with
/// one of these names would collide with them.
pub const STRUCTURAL_FIELDS: [&str; 7] = [
    "id",
    "children",
    "depth",
    "parentId",
    "expanded",
    "hasChildren",
    "__metadata",
];

/// Whether `column` is one of the [`STRUCTURAL_FIELDS`].
#[must_use]
pub fn is_structural_field(column: &str) -> bool {
    STRUCTURAL_FIELDS.contains(&column)
}

/// A row as delivered by a data source, before normalization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    /// Source identifier. Required on roots, ignored below them.
    pub id: Option<String>,
    /// Column values in source order.
    pub fields: Fields,
    /// Nested rows. Empty means leaf.
    pub children: Vec<RawRow>,
}

impl RawRow {
    /// Create a raw row with the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Create a raw row without an identifier (only valid below the root).
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Add or replace a column value.
    #[must_use]
    pub fn field(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(column.into(), value.into());
        self
    }

    /// Append a child row.
    #[must_use]
    pub fn child(mut self, row: RawRow) -> Self {
        self.children.push(row);
        self
    }

    /// Replace the children.
    #[must_use]
    pub fn with_children(mut self, rows: Vec<RawRow>) -> Self {
        self.children = rows;
        self
    }
}

/// Annotations attached to a row by a visibility annotator.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RowMetadata {
    /// Position of the row among its siblings when it was annotated.
    pub index: usize,
    /// Fields that are not displayed as columns.
    pub hidden: Fields,
}

/// A normalized row.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Row {
    /// Identifier, unique across the whole tree.
    pub id: String,
    /// Column values.
    #[cfg_attr(feature = "state-persistence", serde(flatten))]
    pub fields: Fields,
    /// Child rows in display order.
    #[cfg_attr(feature = "state-persistence", serde(default))]
    pub children: Vec<Row>,
    /// Distance from the root level (roots are 0).
    pub depth: usize,
    /// Identifier of the parent row, `None` for roots.
    pub parent_id: Option<String>,
    /// Whether descendants are shown (and kept sorted).
    pub expanded: bool,
    /// Always `!children.is_empty()` on a normalized row.
    pub has_children: bool,
    /// Annotator output, absent until a visibility pass ran.
    #[cfg_attr(
        feature = "state-persistence",
        serde(default, rename = "__metadata", skip_serializing_if = "Option::is_none")
    )]
    pub metadata: Option<RowMetadata>,
}

impl Row {
    /// Value stored under `column`.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    /// Value stored under `column`, falling back to the fields an annotator
    /// moved into [`RowMetadata::hidden`].
    #[must_use]
    pub fn value(&self, column: &str) -> Option<&Value> {
        self.fields
            .get(column)
            .or_else(|| self.metadata.as_ref()?.hidden.get(column))
    }

    /// Column names in their current order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate over this row and all its descendants, depth-first, left to right.
    pub fn iter_depth_first(&self) -> DepthFirst<'_> {
        DepthFirst { stack: vec![self] }
    }

    /// Find a row by identifier in this subtree.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Row> {
        self.iter_depth_first().find(|row| row.id == id)
    }
}

/// Depth-first iterator over a subtree.
#[derive(Debug, Clone)]
pub struct DepthFirst<'a> {
    stack: Vec<&'a Row>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a Row;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.stack.pop()?;
        self.stack.extend(row.children.iter().rev());
        Some(row)
    }
}

/// Iterate over every row of a forest, depth-first, left to right.
pub fn iter_forest(rows: &[Row]) -> impl Iterator<Item = &Row> {
    rows.iter().flat_map(Row::iter_depth_first)
}

/// Find a row anywhere in a forest.
#[must_use]
pub fn find_in_forest<'a>(rows: &'a [Row], id: &str) -> Option<&'a Row> {
    iter_forest(rows).find(|row| row.id == id)
}
