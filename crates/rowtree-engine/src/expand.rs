//! Expansion toggling.
//!
//! [`toggle`] rebuilds the whole tree and inverts `expanded` on the one row
//! whose identifier matches. Every row is visited, even after the target was
//! found, so the output is always a complete rebuild. An unknown identifier
//! produces a tree value-equal to the input.

use rowtree_core::Row;

/// Invert the expansion flag of the row identified by `target_id`.
#[must_use]
pub fn toggle(tree: &[Row], target_id: &str) -> Vec<Row> {
    let mut found = false;
    let rows = toggle_level(tree, target_id, &mut found);
    if !found {
        rowtree_core::debug!(id = target_id, "toggle target not found");
    }
    rows
}

fn toggle_level(rows: &[Row], target_id: &str, found: &mut bool) -> Vec<Row> {
    rows.iter()
        .map(|row| {
            let children = if row.children.is_empty() {
                Vec::new()
            } else {
                toggle_level(&row.children, target_id, found)
            };

            let is_target = row.id == target_id;
            *found |= is_target;

            Row {
                id: row.id.clone(),
                fields: row.fields.clone(),
                children,
                depth: row.depth,
                parent_id: row.parent_id.clone(),
                expanded: row.expanded != is_target,
                has_children: row.has_children,
                metadata: row.metadata.clone(),
            }
        })
        .collect()
}

/// Expansion flag of the row identified by `id`, if present.
#[must_use]
pub fn is_expanded(tree: &[Row], id: &str) -> Option<bool> {
    rowtree_core::find_in_forest(tree, id).map(|row| row.expanded)
}
