use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the flight route library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an operation needs at least one element and the structure has none.
    #[error("{structure} is empty")]
    Empty { structure: &'static str },

    /// Raised when a requested value is not stored in the structure.
    #[error("{what} not found")]
    NotFound { what: String },

    /// Raised when a 1-based position falls outside the structure.
    #[error("position {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Raised when a graph vertex is missing.
    #[error("vertex {vertex} not found")]
    VertexNotFound { vertex: String },

    /// Raised when a graph edge is missing.
    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: String, to: String },

    /// Raised when a fixed-capacity structure is already full.
    #[error("{structure} is full (capacity {capacity})")]
    Full {
        structure: &'static str,
        capacity: usize,
    },

    /// Raised when a fixed-capacity structure is constructed without room for any element.
    #[error("{structure} capacity must be greater than zero")]
    InvalidCapacity { structure: &'static str },

    /// Raised when a shortest-route search is asked for a cost dimension it does not know.
    #[error("unsupported cost metric '{metric}'; expected duration, distance or price")]
    UnsupportedCostMetric { metric: String },

    /// Raised when an airport code could not be found in the network.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when an airport code is registered twice.
    #[error("airport {code} is already registered")]
    DuplicateAirport { code: String },

    /// Raised when no route could be found between two airports.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a network definition file cannot be read.
    #[error("failed to read network definition from {path}: {source}")]
    NetworkLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for JSON errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn empty(structure: &'static str) -> Self {
        Error::Empty { structure }
    }

    pub(crate) fn not_found(what: impl Into<String>) -> Self {
        Error::NotFound { what: what.into() }
    }

    pub(crate) fn vertex_not_found(vertex: impl std::fmt::Debug) -> Self {
        Error::VertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn edge_not_found(from: impl std::fmt::Debug, to: impl std::fmt::Debug) -> Self {
        Error::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    /// True for the Empty-structure condition.
    pub fn is_empty_structure(&self) -> bool {
        matches!(self, Error::Empty { .. })
    }

    /// True for every Not-found flavour (value, position, vertex, edge, airport).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::NotFound { .. }
                | Error::IndexOutOfBounds { .. }
                | Error::VertexNotFound { .. }
                | Error::EdgeNotFound { .. }
                | Error::UnknownAirport { .. }
        )
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
