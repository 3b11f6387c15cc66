//! Error types for hybridgraph operations.
//!
//! Every engine operation returns [`Result<T>`]. An `Ok` value is the OK
//! status and carries no message; every [`GraphError`] variant carries a
//! human-readable message defaulted per kind and overridable by the raising
//! site via [`GraphError::with_message`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for hybridgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Status kind of an engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    /// The operation succeeded
    Ok,
    /// Generic lookup miss
    NotFound,
    /// The call shape or arguments violate the graph configuration
    InvalidArgument,
    /// A vertex with the same identity is already stored
    VertexAlreadyExists,
    /// The edge exists and parallel edges are not permitted
    EdgeAlreadyExists,
    /// A referenced vertex is unknown to the representation
    VertexNotFound,
    /// No edge between the given pair
    EdgeNotFound,
    /// Generic duplicate
    AlreadyExists,
    /// Internal invariant violated (e.g. reading an uncompacted structure)
    InternalError,
    /// The representation does not support the operation
    Unimplemented,
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "NOT_FOUND",
            StatusCode::InvalidArgument => "INVALID_ARGUMENT",
            StatusCode::VertexAlreadyExists => "VERTEX_ALREADY_EXISTS",
            StatusCode::EdgeAlreadyExists => "EDGE_ALREADY_EXISTS",
            StatusCode::VertexNotFound => "VERTEX_NOT_FOUND",
            StatusCode::EdgeNotFound => "EDGE_NOT_FOUND",
            StatusCode::AlreadyExists => "ALREADY_EXISTS",
            StatusCode::InternalError => "INTERNAL_ERROR",
            StatusCode::Unimplemented => "UNIMPLEMENTED",
        };
        f.write_str(name)
    }
}

/// Error type for all engine operations.
///
/// One variant per non-OK [`StatusCode`]. The `Display` output is the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Generic lookup miss
    #[error("{message}")]
    NotFound {
        /// Human-readable detail
        message: String,
    },

    /// Arguments or call shape rejected by the graph configuration
    #[error("{message}")]
    InvalidArgument {
        /// Human-readable detail
        message: String,
    },

    /// Duplicate vertex identity
    #[error("{message}")]
    VertexAlreadyExists {
        /// Human-readable detail
        message: String,
    },

    /// Duplicate edge while parallel edges are disallowed
    #[error("{message}")]
    EdgeAlreadyExists {
        /// Human-readable detail
        message: String,
    },

    /// Unknown vertex
    #[error("{message}")]
    VertexNotFound {
        /// Human-readable detail
        message: String,
    },

    /// No such edge
    #[error("{message}")]
    EdgeNotFound {
        /// Human-readable detail
        message: String,
    },

    /// Generic duplicate
    #[error("{message}")]
    AlreadyExists {
        /// Human-readable detail
        message: String,
    },

    /// Internal invariant violated
    #[error("{message}")]
    InternalError {
        /// Human-readable detail
        message: String,
    },

    /// Operation not supported by this representation
    #[error("{message}")]
    Unimplemented {
        /// Human-readable detail
        message: String,
    },
}

impl GraphError {
    /// Generic not-found error with the default message.
    pub fn not_found() -> Self {
        Self::NotFound {
            message: "Not Found".to_string(),
        }
    }

    /// Invalid-argument error with the default message.
    pub fn invalid_argument() -> Self {
        Self::InvalidArgument {
            message: "Invalid Argument".to_string(),
        }
    }

    /// Duplicate-vertex error with the default message.
    pub fn vertex_already_exists() -> Self {
        Self::VertexAlreadyExists {
            message: "Vertex Already Exists".to_string(),
        }
    }

    /// Duplicate-edge error with the default message.
    pub fn edge_already_exists() -> Self {
        Self::EdgeAlreadyExists {
            message: "Edge Already Exists".to_string(),
        }
    }

    /// Unknown-vertex error with the default message.
    pub fn vertex_not_found() -> Self {
        Self::VertexNotFound {
            message: "Vertex Not Found".to_string(),
        }
    }

    /// Missing-edge error with the default message.
    pub fn edge_not_found() -> Self {
        Self::EdgeNotFound {
            message: "Edge Not Found".to_string(),
        }
    }

    /// Generic duplicate error with the default message.
    pub fn already_exists() -> Self {
        Self::AlreadyExists {
            message: "Already Exists".to_string(),
        }
    }

    /// Internal error with the default message.
    pub fn internal() -> Self {
        Self::InternalError {
            message: "Internal Error".to_string(),
        }
    }

    /// Unimplemented error with the default message.
    pub fn unimplemented() -> Self {
        Self::Unimplemented {
            message: "Unimplemented".to_string(),
        }
    }

    /// Replace the message, keeping the kind.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        match &mut self {
            Self::NotFound { message: m }
            | Self::InvalidArgument { message: m }
            | Self::VertexAlreadyExists { message: m }
            | Self::EdgeAlreadyExists { message: m }
            | Self::VertexNotFound { message: m }
            | Self::EdgeNotFound { message: m }
            | Self::AlreadyExists { message: m }
            | Self::InternalError { message: m }
            | Self::Unimplemented { message: m } => *m = message,
        }
        self
    }

    /// Status kind of this error.
    pub fn code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NotFound,
            Self::InvalidArgument { .. } => StatusCode::InvalidArgument,
            Self::VertexAlreadyExists { .. } => StatusCode::VertexAlreadyExists,
            Self::EdgeAlreadyExists { .. } => StatusCode::EdgeAlreadyExists,
            Self::VertexNotFound { .. } => StatusCode::VertexNotFound,
            Self::EdgeNotFound { .. } => StatusCode::EdgeNotFound,
            Self::AlreadyExists { .. } => StatusCode::AlreadyExists,
            Self::InternalError { .. } => StatusCode::InternalError,
            Self::Unimplemented { .. } => StatusCode::Unimplemented,
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message }
            | Self::InvalidArgument { message }
            | Self::VertexAlreadyExists { message }
            | Self::EdgeAlreadyExists { message }
            | Self::VertexNotFound { message }
            | Self::EdgeNotFound { message }
            | Self::AlreadyExists { message }
            | Self::InternalError { message }
            | Self::Unimplemented { message } => message,
        }
    }

    /// True for any of the not-found kinds.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.code(),
            StatusCode::NotFound | StatusCode::VertexNotFound | StatusCode::EdgeNotFound
        )
    }

    /// True for any of the already-exists kinds.
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self.code(),
            StatusCode::AlreadyExists
                | StatusCode::VertexAlreadyExists
                | StatusCode::EdgeAlreadyExists
        )
    }
}

/// Map any engine result to its [`StatusCode`].
pub fn status_code<T>(result: &Result<T>) -> StatusCode {
    match result {
        Ok(_) => StatusCode::Ok,
        Err(e) => e.code(),
    }
}
