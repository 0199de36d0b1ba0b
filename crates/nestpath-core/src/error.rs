use thiserror::Error;

/// Failure to resolve a vertex name to exactly one vertex.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No vertex carries the name.
    #[error("no vertex named {0:?}")]
    Missing(String),
    /// More than one vertex carries the name.
    #[error("vertex name {name:?} is shared by {count} vertices")]
    Ambiguous {
        /// The name that was looked up.
        name: String,
        /// How many vertices carry it.
        count: usize,
    },
}
