use thiserror::Error;

/// Errors surfaced by the heap primitives and the selection algorithms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    /// Peek or pop was called on a heap holding no elements.
    ///
    /// The public algorithms validate their inputs before touching a heap,
    /// so this escaping one of them indicates an internal invariant break.
    #[error("container is empty")]
    EmptyContainer,

    /// A caller-supplied argument makes the requested result ill-defined.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
