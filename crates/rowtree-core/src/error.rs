//! Error types shared by the rowtree crates.
//!
//! The tree transformations themselves are total: an unknown toggle target
//! or an empty tree is not an error. Errors only come from ingesting raw
//! data (ill-formed rows, identifier collisions) and from persisting state.

use std::fmt;

/// Errors raised while loading, normalizing, or persisting a tree.
#[derive(Debug)]
pub enum TreeError {
    /// Two rows ended up with the same identifier after normalization.
    DuplicateIdentifier {
        /// The identifier that appeared more than once.
        id: String,
    },
    /// A root row carried no identifier.
    MissingIdentifier {
        /// Position of the offending row, as sibling indices from the root.
        path: Vec<usize>,
    },
    /// A raw row could not be interpreted.
    InvalidRow {
        /// Position of the offending row, as sibling indices from the root.
        path: Vec<usize>,
        /// What was wrong with it.
        reason: String,
    },
    /// State could not be encoded or decoded.
    Persistence(String),
    /// I/O failure while reading or writing persisted state.
    Io(std::io::Error),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::DuplicateIdentifier { id } => {
                write!(f, "duplicate row identifier: {id:?}")
            }
            TreeError::MissingIdentifier { path } => {
                write!(f, "root row at {} has no identifier", format_path(path))
            }
            TreeError::InvalidRow { path, reason } => {
                write!(f, "invalid row at {}: {reason}", format_path(path))
            }
            TreeError::Persistence(msg) => write!(f, "persistence error: {msg}"),
            TreeError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for TreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TreeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TreeError {
    fn from(e: std::io::Error) -> Self {
        TreeError::Io(e)
    }
}

impl From<serde_json::Error> for TreeError {
    fn from(e: serde_json::Error) -> Self {
        TreeError::Persistence(e.to_string())
    }
}

/// Result type for fallible tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

fn format_path(path: &[usize]) -> String {
    let parts: Vec<String> = path.iter().map(usize::to_string).collect();
    format!("[{}]", parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_duplicate() {
        let err = TreeError::DuplicateIdentifier { id: "b.1".into() };
        assert_eq!(err.to_string(), "duplicate row identifier: \"b.1\"");
    }

    #[test]
    fn display_paths() {
        let err = TreeError::MissingIdentifier { path: vec![2] };
        assert_eq!(err.to_string(), "root row at [2] has no identifier");

        let err = TreeError::InvalidRow {
            path: vec![0, 3],
            reason: "expected an object".into(),
        };
        assert_eq!(err.to_string(), "invalid row at [0/3]: expected an object");
    }

    #[test]
    fn io_has_source() {
        let err = TreeError::from(std::io::Error::other("disk gone"));
        assert!(err.source().is_some());
        assert!(TreeError::Persistence("x".into()).source().is_none());
    }
}
