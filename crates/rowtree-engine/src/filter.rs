//! Text filtering.
//!
//! Filtering is bottom-up: a row's children are filtered first, and the
//! row survives when at least one child survived or one of its own values
//! contains the query, compared case-insensitively. A surviving row keeps
//! only its surviving children, which may be none even though the row
//! itself matched.
//!
//! The empty query is a no-op. What counts as "one of its own values" is
//! chosen by [`FilterScope`].

use rowtree_core::{Row, Value};

/// Which parts of a row the filter looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum FilterScope {
    /// Column values and the row identifier.
    #[default]
    Columns,
    /// Column values, the identifier, and the structural fields
    /// (depth, parent id, expanded, has-children). Unset values are skipped.
    AllFields,
}

/// Keep the rows that match `query` directly or through a descendant.
#[must_use]
pub fn filter(tree: &[Row], query: &str, scope: FilterScope) -> Vec<Row> {
    if query.is_empty() {
        return tree.to_vec();
    }
    let needle = query.to_lowercase();
    filter_level(tree, &needle, scope)
}

fn filter_level(rows: &[Row], needle: &str, scope: FilterScope) -> Vec<Row> {
    rows.iter()
        .filter_map(|row| {
            let children = if row.children.is_empty() {
                Vec::new()
            } else {
                filter_level(&row.children, needle, scope)
            };

            if children.is_empty() && !row_matches(row, needle, scope) {
                return None;
            }

            Some(Row {
                id: row.id.clone(),
                fields: row.fields.clone(),
                children,
                depth: row.depth,
                parent_id: row.parent_id.clone(),
                expanded: row.expanded,
                has_children: row.has_children,
                metadata: row.metadata.clone(),
            })
        })
        .collect()
}

/// Whether `row`'s own values contain `needle`, which must already be lowercase.
///
/// [`FilterScope::Columns`] only skips null values, so a `0` column still
/// matches `"0"`. [`FilterScope::AllFields`] skips every value that is not
/// [truthy](Value::is_truthy), structural fields included, so a root's depth
/// of 0 never matches.
#[must_use]
pub fn row_matches(row: &Row, needle: &str, scope: FilterScope) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);
    let scanned = |value: &Value| match scope {
        FilterScope::Columns => !value.is_null(),
        FilterScope::AllFields => value.is_truthy(),
    };

    if contains(&row.id) {
        return true;
    }
    if row
        .fields
        .values()
        .any(|value| scanned(value) && contains(&value.to_string()))
    {
        return true;
    }

    match scope {
        FilterScope::Columns => false,
        FilterScope::AllFields => {
            (row.depth > 0 && contains(&row.depth.to_string()))
                || row.parent_id.as_deref().is_some_and(|p| contains(p))
                || (row.expanded && contains("true"))
                || (row.has_children && contains("true"))
        }
    }
}
