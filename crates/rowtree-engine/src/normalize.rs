//! Tree normalization.
//!
//! Rewrites a freshly loaded raw forest into the canonical tree:
//!
//! - Roots keep the identifier they were loaded with.
//! - Every other row gets `"<parent id>.<n>"`, where `n` counts from 1
//!   among the children of that one parent.
//! - Fields are reordered to follow [`ColumnConfig::column_order`].
//! - `depth`, `parent_id`, `has_children` are derived; `expanded` starts
//!   out `false`.
//!
//! The result is a pure function of the raw forest and the configuration.
//! Identifier uniqueness is checked after the rewrite, since a loaded root
//! identifier such as `"b.1"` can collide with a generated one.

use std::collections::HashSet;

use rowtree_core::{
    ColumnConfig, Fields, RawRow, Row, TreeError, TreeResult, is_structural_field, iter_forest,
};

/// Normalize a raw forest into the canonical tree.
///
/// # Errors
///
/// - [`TreeError::MissingIdentifier`] if a root has no identifier.
/// - [`TreeError::InvalidRow`] if a column is named after a structural
///   field (`id`, `children`, `depth`, ...).
/// - [`TreeError::DuplicateIdentifier`] if two rows end up sharing one.
pub fn normalize(raw: &[RawRow], config: &ColumnConfig) -> TreeResult<Vec<Row>> {
    let mut roots = Vec::with_capacity(raw.len());
    let mut path = Vec::new();
    for (index, row) in raw.iter().enumerate() {
        let Some(id) = row.id.clone() else {
            return Err(TreeError::MissingIdentifier { path: vec![index] });
        };
        path.push(index);
        roots.push(normalize_row(row, id, None, config, &mut path)?);
        path.pop();
    }

    ensure_unique_ids(&roots)?;
    rowtree_core::debug!(roots = roots.len(), "normalized tree");
    Ok(roots)
}

fn normalize_row(
    raw: &RawRow,
    id: String,
    parent_id: Option<String>,
    config: &ColumnConfig,
    path: &mut Vec<usize>,
) -> TreeResult<Row> {
    if let Some(column) = raw.fields.keys().find(|k| is_structural_field(k)) {
        return Err(TreeError::InvalidRow {
            path: path.clone(),
            reason: format!("column {column:?} clashes with a structural field"),
        });
    }

    let mut children = Vec::with_capacity(raw.children.len());
    for (i, child) in raw.children.iter().enumerate() {
        let child_id = format!("{id}.{}", i + 1);
        path.push(i);
        children.push(normalize_row(child, child_id, Some(id.clone()), config, path)?);
        path.pop();
    }

    Ok(Row {
        id,
        fields: reorder_fields(&raw.fields, config),
        has_children: !children.is_empty(),
        children,
        depth: path.len() - 1,
        parent_id,
        expanded: false,
        metadata: None,
    })
}

/// Stable reorder by configured column rank; unlisted columns go first.
fn reorder_fields(fields: &Fields, config: &ColumnConfig) -> Fields {
    let mut fields = fields.clone();
    if !config.column_order.is_empty() {
        fields.sort_by(|a, _, b, _| config.column_rank(a).cmp(&config.column_rank(b)));
    }
    fields
}

/// Reject a tree in which any identifier appears twice.
pub fn ensure_unique_ids(rows: &[Row]) -> TreeResult<()> {
    let mut seen = HashSet::new();
    for row in iter_forest(rows) {
        if !seen.insert(row.id.as_str()) {
            rowtree_core::warn!(id = %row.id, "duplicate row identifier");
            return Err(TreeError::DuplicateIdentifier { id: row.id.clone() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rowtree_core::Value;

    fn sample() -> Vec<RawRow> {
        vec![
            RawRow::new("a").field("name", "Zed"),
            RawRow::new("b")
                .field("name", "Amy")
                .child(RawRow::new("c").field("name", "Bob")),
        ]
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(&[], &ColumnConfig::default()).unwrap(), Vec::<Row>::new());
    }

    #[test]
    fn roots_keep_ids_children_get_generated_ones() {
        let tree = normalize(&sample(), &ColumnConfig::default()).unwrap();
        assert_eq!(tree[0].id, "a");
        assert_eq!(tree[0].depth, 0);
        assert_eq!(tree[0].parent_id, None);
        assert!(!tree[0].has_children);

        let b = &tree[1];
        assert!(b.has_children);
        assert!(!b.expanded);
        let child = &b.children[0];
        assert_eq!(child.id, "b.1");
        assert_eq!(child.depth, 1);
        assert_eq!(child.parent_id.as_deref(), Some("b"));
        assert!(!child.expanded);
        assert!(!child.has_children);
        assert_eq!(child.get("name"), Some(&Value::from("Bob")));
    }

    #[test]
    fn counters_are_per_parent() {
        let raw = vec![
            RawRow::new("r")
                .child(
                    RawRow::anonymous()
                        .child(RawRow::anonymous())
                        .child(RawRow::anonymous()),
                )
                .child(RawRow::anonymous().child(RawRow::anonymous())),
        ];
        let tree = normalize(&raw, &ColumnConfig::default()).unwrap();
        let ids: Vec<&str> = iter_forest(&tree).map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r", "r.1", "r.1.1", "r.1.2", "r.2", "r.2.1"]);
    }

    #[test]
    fn empty_children_equal_absent() {
        let with_empty = vec![RawRow::new("x").with_children(Vec::new())];
        let without = vec![RawRow::new("x")];
        let config = ColumnConfig::default();
        assert_eq!(normalize(&with_empty, &config).unwrap(), normalize(&without, &config).unwrap());
    }

    #[test]
    fn fields_follow_column_order() {
        let raw = vec![
            RawRow::new("a")
                .field("size", 3)
                .field("extra", true)
                .field("name", "n"),
        ];
        let config = ColumnConfig::default().with_column_order(["name", "size"]);
        let tree = normalize(&raw, &config).unwrap();
        let columns: Vec<&str> = tree[0].columns().collect();
        assert_eq!(columns, ["extra", "name", "size"]);
    }

    #[test]
    fn missing_root_id_is_rejected() {
        let raw = vec![RawRow::new("a"), RawRow::anonymous()];
        let err = normalize(&raw, &ColumnConfig::default()).unwrap_err();
        assert!(matches!(err, TreeError::MissingIdentifier { ref path } if *path == vec![1]));
    }

    #[test]
    fn duplicate_root_ids_are_rejected() {
        let raw = vec![RawRow::new("a"), RawRow::new("a")];
        let err = normalize(&raw, &ColumnConfig::default()).unwrap_err();
        assert!(matches!(err, TreeError::DuplicateIdentifier { ref id } if id == "a"));
    }

    #[test]
    fn structural_column_names_are_rejected() {
        let raw = vec![
            RawRow::new("a").field("name", "ok"),
            RawRow::new("b").child(RawRow::anonymous().field("depth", "deep")),
        ];
        let err = normalize(&raw, &ColumnConfig::default()).unwrap_err();
        match err {
            TreeError::InvalidRow { path, reason } => {
                assert_eq!(path, vec![1, 0]);
                assert!(reason.contains("\"depth\""), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }

        let raw = vec![RawRow::new("r").field("children", "kept")];
        assert!(matches!(
            normalize(&raw, &ColumnConfig::default()),
            Err(TreeError::InvalidRow { .. })
        ));
    }

    #[test]
    fn generated_id_colliding_with_root_is_rejected() {
        let raw = vec![RawRow::new("b").child(RawRow::anonymous()), RawRow::new("b.1")];
        let err = normalize(&raw, &ColumnConfig::default()).unwrap_err();
        assert!(matches!(err, TreeError::DuplicateIdentifier { ref id } if id == "b.1"));
    }
}
