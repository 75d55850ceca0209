use std::fmt::Debug;

/// Errors reported by [`MoveSelector`](crate::MoveSelector) queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError<L: Debug> {
    /// The adversary search depth was negative.
    #[error("search depth must be non-negative, got {max_search_depth}")]
    InvalidArgument { max_search_depth: i32 },
    /// `from` has no neighbor that leads toward the destination: either it
    /// has no neighbors at all, or none of them share its component.
    #[error("no legal moves from {from:?}")]
    NoLegalMoves { from: L },
}
