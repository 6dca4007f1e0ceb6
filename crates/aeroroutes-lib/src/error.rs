use thiserror::Error;

/// Convenient result alias for the aeroroutes library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Every variant is a validation failure surfaced before a search runs. An
/// unreachable goal is reported as an empty route, never as an error, and
/// callers are expected to branch on that distinction.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when searching a graph that has no vertices at all.
    #[error("the graph has no vertices")]
    EmptyGraph,

    /// Raised when the start key does not name a vertex in the graph.
    #[error("start vertex '{key}' is not in the graph")]
    StartVertexNotInGraph { key: String },

    /// Raised when the goal key does not name a vertex in the graph.
    #[error("goal vertex '{key}' is not in the graph")]
    GoalVertexNotInGraph { key: String },

    /// Raised when inserting a vertex whose key is already taken.
    #[error("duplicate vertex key: {key}")]
    DuplicateVertexKey { key: String },
}
