//! Visibility annotation.
//!
//! An annotator reshapes rows for display once the displayed columns are
//! known. The default [`ColumnVisibility`] keeps exactly the displayed
//! columns on each row, in column order, filling gaps with
//! [`Value::Null`], and parks every other field in [`RowMetadata::hidden`].
//!
//! A sibling sequence whose first row already carries metadata counts as
//! annotated and keeps its rows as they are; its children are still visited.

use rowtree_core::{Fields, Row, RowMetadata, Value};

/// Attaches per-row visibility metadata.
pub trait VisibilityAnnotator {
    /// Annotate a sibling sequence (and, recursively, its descendants).
    fn annotate(&self, rows: Vec<Row>, columns: &[String]) -> Vec<Row>;
}

impl<F> VisibilityAnnotator for F
where
    F: Fn(Vec<Row>, &[String]) -> Vec<Row>,
{
    fn annotate(&self, rows: Vec<Row>, columns: &[String]) -> Vec<Row> {
        self(rows, columns)
    }
}

/// Default annotator that splits fields into displayed and hidden.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnVisibility;

impl VisibilityAnnotator for ColumnVisibility {
    fn annotate(&self, rows: Vec<Row>, columns: &[String]) -> Vec<Row> {
        let annotated = rows.first().is_some_and(|row| row.metadata.is_some());

        rows.into_iter()
            .enumerate()
            .map(|(index, mut row)| {
                if !annotated {
                    split_fields(&mut row, index, columns);
                }
                if !row.children.is_empty() {
                    let children = std::mem::take(&mut row.children);
                    row.children = self.annotate(children, columns);
                }
                row
            })
            .collect()
    }
}

fn split_fields(row: &mut Row, index: usize, columns: &[String]) {
    let mut fields = std::mem::take(&mut row.fields);
    let mut shown = Fields::with_capacity(columns.len());
    for column in columns {
        let value = fields.shift_remove(column).unwrap_or(Value::Null);
        shown.insert(column.clone(), value);
    }
    row.fields = shown;
    row.metadata = Some(RowMetadata {
        index,
        hidden: fields,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(id: &str, pairs: &[(&str, Value)], children: Vec<Row>) -> Row {
        let fields = pairs.iter().map(|(k, v)| ((*k).to_owned(), v.clone())).collect();
        Row {
            id: id.into(),
            fields,
            has_children: !children.is_empty(),
            children,
            ..Row::default()
        }
    }

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn splits_shown_and_hidden() {
        let rows = vec![row(
            "a",
            &[("secret", Value::from(1)), ("name", Value::from("Amy"))],
            vec![],
        )];
        let out = ColumnVisibility.annotate(rows, &columns(&["name", "size"]));
        let cols: Vec<&str> = out[0].columns().collect();
        assert_eq!(cols, ["name", "size"]);
        assert_eq!(out[0].get("size"), Some(&Value::Null));

        let meta = out[0].metadata.as_ref().unwrap();
        assert_eq!(meta.index, 0);
        assert_eq!(meta.hidden.get("secret"), Some(&Value::from(1)));
    }

    #[test]
    fn children_annotated_with_sibling_index() {
        let rows = vec![row(
            "p",
            &[("name", Value::from("P"))],
            vec![
                row("p.1", &[("name", Value::from("x"))], vec![]),
                row("p.2", &[("name", Value::from("y"))], vec![]),
            ],
        )];
        let out = ColumnVisibility.annotate(rows, &columns(&["name"]));
        let second = &out[0].children[1];
        assert_eq!(second.metadata.as_ref().map(|m| m.index), Some(1));
    }

    #[test]
    fn annotated_sequence_passes_through() {
        let first = ColumnVisibility.annotate(
            vec![row("a", &[("name", Value::from("A")), ("x", Value::from(2))], vec![])],
            &columns(&["name"]),
        );
        let again = ColumnVisibility.annotate(first.clone(), &columns(&["x"]));
        assert_eq!(again, first);
    }

    #[test]
    fn empty_sequence() {
        assert!(ColumnVisibility.annotate(Vec::new(), &columns(&["a"])).is_empty());
    }
}
