#![forbid(unsafe_code)]

//! Transformation engine for hierarchical row trees.
//!
//! # Key Components
//!
//! - [`normalize`](normalize::normalize) - raw forest to canonical tree
//!   (identifiers, depth, parent linkage, flags)
//! - [`toggle`](expand::toggle) - flip one row's expansion flag
//! - [`filter`](filter::filter) - keep rows matching a text query directly
//!   or through a descendant
//! - [`sort_subtrees`](sort::sort_subtrees) - keep expanded subtrees sorted
//! - [`Reducer`] - applies [`Action`]s to a [`GridState`] and rebuilds the
//!   visible projection after each one
//!
//! Column resolution, visibility annotation, and sibling ordering are
//! injected through [`ColumnResolver`], [`VisibilityAnnotator`], and
//! [`RowSorter`]; each has a default implementation.
//!
//! Every operation takes its input tree by reference (or by value when the
//! caller gives it up) and returns a new tree. Nothing here is shared or
//! mutated behind the caller's back.

pub mod columns;
pub mod expand;
pub mod filter;
pub mod normalize;
#[cfg(feature = "state-persistence")]
pub mod persistence;
pub mod reducer;
pub mod sort;
pub mod state;
pub mod visibility;

pub use columns::{ColumnResolver, DataColumns};
pub use expand::{is_expanded, toggle};
pub use filter::{FilterScope, filter, row_matches};
pub use normalize::{ensure_unique_ids, normalize};
#[cfg(feature = "state-persistence")]
pub use persistence::{load_state, save_state};
pub use reducer::{Action, Reducer};
pub use sort::{ColumnSorter, RowSorter, SortDirection, SortProperties, sort_subtrees};
pub use state::GridState;
pub use visibility::{ColumnVisibility, VisibilityAnnotator};
