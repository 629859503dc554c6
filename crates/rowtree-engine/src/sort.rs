//! Sorting.
//!
//! Ordering a sequence of sibling rows is delegated to a [`RowSorter`]. The
//! engine only decides *which* sequences get sorted: [`sort_subtrees`]
//! walks down through expanded rows and re-sorts their children, leaving
//! collapsed subtrees in whatever order they already had.
//!
//! # Invariants
//!
//! 1. The sequence passed to the outermost call is never reordered when
//!    `apply_sort_at_this_level` is `false`. Callers sort the top level
//!    themselves before handing it over.
//! 2. Children of a collapsed (or childless) row come out in exactly the
//!    order they went in, at every depth below that row.

use std::cmp::Ordering;

use rowtree_core::{Row, Value};

/// Sort direction(s) for the configured sort columns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum SortDirection {
    /// One direction for every sort column (`true` = ascending).
    Global(bool),
    /// One direction per sort column, by position. Missing entries are ascending.
    PerColumn(Vec<bool>),
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Global(true)
    }
}

impl SortDirection {
    /// Whether the sort column at `index` sorts ascending.
    #[must_use]
    pub fn is_ascending(&self, index: usize) -> bool {
        match self {
            SortDirection::Global(ascending) => *ascending,
            SortDirection::PerColumn(flags) => flags.get(index).copied().unwrap_or(true),
        }
    }
}

/// Which columns to sort by, and in which direction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SortProperties {
    /// Sort columns, most significant first.
    pub sort_columns: Vec<String>,
    /// Direction flags.
    pub sort_ascending: SortDirection,
}

impl SortProperties {
    /// Sort ascending by the given columns.
    #[must_use]
    pub fn by<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sort_columns: columns.into_iter().map(Into::into).collect(),
            sort_ascending: SortDirection::default(),
        }
    }

    /// Use a single direction for all columns.
    #[must_use]
    pub fn ascending(mut self, ascending: bool) -> Self {
        self.sort_ascending = SortDirection::Global(ascending);
        self
    }

    /// Use one direction per column.
    #[must_use]
    pub fn with_directions(mut self, flags: impl IntoIterator<Item = bool>) -> Self {
        self.sort_ascending = SortDirection::PerColumn(flags.into_iter().collect());
        self
    }

    /// Whether any sort column is configured.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.sort_columns.is_empty()
    }
}

/// Orders one sequence of sibling rows.
pub trait RowSorter {
    /// Return `rows` ordered per `props`.
    fn sort_rows(&self, rows: Vec<Row>, props: &SortProperties) -> Vec<Row>;
}

impl<F> RowSorter for F
where
    F: Fn(Vec<Row>, &SortProperties) -> Vec<Row>,
{
    fn sort_rows(&self, rows: Vec<Row>, props: &SortProperties) -> Vec<Row> {
        self(rows, props)
    }
}

/// Default sorter: stable multi-column sort over [`Value::total_cmp`].
///
/// Sort columns are looked up with [`Row::value`], so a column an annotator
/// moved out of the displayed fields still sorts. A row missing a sort
/// column compares as [`Value::Null`]. Rows that tie on every sort column
/// keep their input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnSorter;

impl ColumnSorter {
    /// Compare two rows per `props`.
    #[must_use]
    pub fn compare(a: &Row, b: &Row, props: &SortProperties) -> Ordering {
        static NULL: Value = Value::Null;
        for (index, column) in props.sort_columns.iter().enumerate() {
            let left = a.value(column).unwrap_or(&NULL);
            let right = b.value(column).unwrap_or(&NULL);
            let ord = left.total_cmp(right);
            let ord = if props.sort_ascending.is_ascending(index) {
                ord
            } else {
                ord.reverse()
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl RowSorter for ColumnSorter {
    fn sort_rows(&self, mut rows: Vec<Row>, props: &SortProperties) -> Vec<Row> {
        if props.is_active() {
            rows.sort_by(|a, b| Self::compare(a, b, props));
        }
        rows
    }
}

/// Re-sort the children of expanded rows, recursively.
///
/// When `apply_sort_at_this_level` is `true`, `rows` itself is also passed
/// through `sorter` after its subtrees were processed.
#[must_use]
pub fn sort_subtrees(
    rows: Vec<Row>,
    apply_sort_at_this_level: bool,
    sorter: &dyn RowSorter,
    props: &SortProperties,
) -> Vec<Row> {
    let rows: Vec<Row> = rows
        .into_iter()
        .map(|mut row| {
            if row.has_children && row.expanded {
                let children = std::mem::take(&mut row.children);
                row.children = sort_subtrees(children, true, sorter, props);
            }
            row
        })
        .collect();

    if apply_sort_at_this_level {
        sorter.sort_rows(rows, props)
    } else {
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rowtree_core::Fields;

    fn row(id: &str, name: &str, expanded: bool, children: Vec<Row>) -> Row {
        let mut fields = Fields::new();
        fields.insert("name".into(), Value::from(name));
        Row {
            id: id.into(),
            fields,
            expanded,
            has_children: !children.is_empty(),
            children,
            ..Row::default()
        }
    }

    fn names(rows: &[Row]) -> Vec<String> {
        rows.iter().map(|r| r.get("name").map(ToString::to_string).unwrap_or_default()).collect()
    }

    fn unsorted(expanded: bool) -> Vec<Row> {
        vec![
            row("z", "Zed", false, vec![]),
            row(
                "p",
                "Pat",
                expanded,
                vec![
                    row("p.1", "Sue", false, vec![]),
                    row("p.2", "Ann", false, vec![]),
                    row("p.3", "Kim", false, vec![]),
                ],
            ),
        ]
    }

    #[test]
    fn direction_flags() {
        assert!(SortDirection::Global(true).is_ascending(5));
        let per = SortDirection::PerColumn(vec![false]);
        assert!(!per.is_ascending(0));
        assert!(per.is_ascending(1));
    }

    #[test]
    fn column_sorter_multi_key() {
        let mut a = row("1", "Ann", false, vec![]);
        a.fields.insert("age".into(), Value::from(30));
        let mut b = row("2", "Ann", false, vec![]);
        b.fields.insert("age".into(), Value::from(20));
        let c = row("3", "Bo", false, vec![]);

        let props = SortProperties::by(["name", "age"]).with_directions([true, false]);
        let out = ColumnSorter.sort_rows(vec![c, b, a], &props);
        let ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn column_sorter_reads_hidden_fields() {
        let hidden_size = |id: &str, size: i64| {
            let mut r = row(id, id, false, vec![]);
            let mut hidden = Fields::new();
            hidden.insert("size".into(), Value::from(size));
            r.metadata = Some(rowtree_core::RowMetadata { index: 0, hidden });
            r
        };
        let rows = vec![hidden_size("x", 3), hidden_size("y", 1), hidden_size("z", 2)];
        let out = ColumnSorter.sort_rows(rows, &SortProperties::by(["size"]));
        let ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["y", "z", "x"]);
    }

    #[test]
    fn column_sorter_is_stable() {
        let rows = vec![row("x", "Same", false, vec![]), row("y", "Same", false, vec![])];
        let out = ColumnSorter.sort_rows(rows, &SortProperties::by(["name"]).ascending(false));
        assert_eq!(out[0].id, "x");
        assert_eq!(out[1].id, "y");
    }

    #[test]
    fn top_level_left_alone() {
        let out = sort_subtrees(unsorted(true), false, &ColumnSorter, &SortProperties::by(["name"]));
        assert_eq!(names(&out), ["Zed", "Pat"]);
    }

    #[test]
    fn expanded_children_sorted() {
        let out = sort_subtrees(unsorted(true), false, &ColumnSorter, &SortProperties::by(["name"]));
        assert_eq!(names(&out[1].children), ["Ann", "Kim", "Sue"]);
    }

    #[test]
    fn collapsed_children_untouched() {
        let out = sort_subtrees(unsorted(false), false, &ColumnSorter, &SortProperties::by(["name"]));
        assert_eq!(names(&out[1].children), ["Sue", "Ann", "Kim"]);
    }

    #[test]
    fn apply_at_top_sorts_roots() {
        let out = sort_subtrees(unsorted(false), true, &ColumnSorter, &SortProperties::by(["name"]));
        assert_eq!(names(&out), ["Pat", "Zed"]);
    }

    #[test]
    fn collapsed_row_below_expanded_row_is_untouched() {
        let inner = row(
            "p.1",
            "Inner",
            false,
            vec![row("p.1.1", "Yu", false, vec![]), row("p.1.2", "Al", false, vec![])],
        );
        let outer = vec![row("p", "Pat", true, vec![inner])];
        let out = sort_subtrees(outer, false, &ColumnSorter, &SortProperties::by(["name"]));
        assert_eq!(names(&out[0].children[0].children), ["Yu", "Al"]);
    }

    #[test]
    fn closures_are_sorters() {
        let reverse = |mut rows: Vec<Row>, _: &SortProperties| {
            rows.reverse();
            rows
        };
        let out = sort_subtrees(unsorted(true), false, &reverse, &SortProperties::default());
        assert_eq!(names(&out[1].children), ["Kim", "Ann", "Sue"]);
    }
}
