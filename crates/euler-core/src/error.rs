use std::fmt;

/// Machine-readable error codes for graph input and circuit construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NoVertices,
    WrongCellCount,
    NegativeMultiplicity,
    AsymmetricMatrix,
    MultiplicityOverflow,
    GraphTooLarge,
    InvalidToken,
    TruncatedInput,
    ReadFailed,
    CircuitPrecondition,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NoVertices => "E1001",
            Self::WrongCellCount => "E1002",
            Self::NegativeMultiplicity => "E1003",
            Self::AsymmetricMatrix => "E1004",
            Self::MultiplicityOverflow => "E1005",
            Self::GraphTooLarge => "E1006",
            Self::InvalidToken => "E2001",
            Self::TruncatedInput => "E2002",
            Self::ReadFailed => "E2003",
            Self::CircuitPrecondition => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoVertices => "Number of vertices must be positive",
            Self::WrongCellCount => "Adjacency matrix has the wrong number of cells",
            Self::NegativeMultiplicity => "Number of edges cannot be negative",
            Self::AsymmetricMatrix => "Adjacency matrix is not symmetric",
            Self::MultiplicityOverflow => "Edge count does not fit in 32 bits",
            Self::GraphTooLarge => "Adjacency matrix size overflows",
            Self::InvalidToken => "Input token is not an integer",
            Self::TruncatedInput => "Input ended in the middle of a matrix",
            Self::ReadFailed => "Input could not be read",
            Self::CircuitPrecondition => "Circuit requested on a graph without an Euler circuit",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::NoVertices => Some("Start each graph with a vertex count of at least 1."),
            Self::WrongCellCount => Some("Provide exactly n*n cells for an n-vertex graph."),
            Self::NegativeMultiplicity => Some("Use non-negative edge counts."),
            Self::AsymmetricMatrix => Some("Undirected graphs need cell (i,j) equal to cell (j,i)."),
            Self::MultiplicityOverflow | Self::TruncatedInput | Self::ReadFailed => None,
            Self::GraphTooLarge => Some("Use fewer vertices."),
            Self::InvalidToken => Some("Separate integers with whitespace only."),
            Self::CircuitPrecondition => {
                Some("Check has_euler_circuit() before building a circuit.")
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Rejection of graph input.
///
/// A rejected graph is never partially exposed: constructors return this
/// error instead of a [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("number of vertices must be positive")]
    NoVertices,

    #[error("expected {expected} matrix cells, got {actual}")]
    WrongCellCount { expected: usize, actual: usize },

    #[error("number of edges cannot be negative: cell ({row}, {col}) = {value}")]
    NegativeMultiplicity { row: usize, col: usize, value: i64 },

    #[error("cell ({row}, {col}) = {value} exceeds the supported edge multiplicity")]
    MultiplicityOverflow { row: usize, col: usize, value: i64 },

    #[error("adjacency matrix is not symmetric: ({row}, {col}) = {forward} but ({col}, {row}) = {backward}")]
    Asymmetric {
        row: usize,
        col: usize,
        forward: u32,
        backward: u32,
    },

    #[error("{vertex_count} vertices do not fit in an adjacency matrix")]
    TooLarge { vertex_count: usize },

    #[error("token {position} is not an integer: {token:?}")]
    InvalidToken { position: usize, token: String },

    #[error("input ended after {actual} of {expected} matrix cells")]
    Truncated { expected: usize, actual: usize },

    #[error("read failed after {position} tokens: {message}")]
    Read { position: usize, message: String },
}

impl GraphError {
    /// Machine-readable code associated with this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NoVertices => ErrorCode::NoVertices,
            Self::WrongCellCount { .. } => ErrorCode::WrongCellCount,
            Self::NegativeMultiplicity { .. } => ErrorCode::NegativeMultiplicity,
            Self::Asymmetric { .. } => ErrorCode::AsymmetricMatrix,
            Self::MultiplicityOverflow { .. } => ErrorCode::MultiplicityOverflow,
            Self::TooLarge { .. } => ErrorCode::GraphTooLarge,
            Self::InvalidToken { .. } => ErrorCode::InvalidToken,
            Self::Truncated { .. } => ErrorCode::TruncatedInput,
            Self::Read { .. } => ErrorCode::ReadFailed,
        }
    }

    /// Whether a reader can keep going after this error.
    ///
    /// Validation failures reject one graph; token, truncation and read
    /// failures leave the stream in an unknown position.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::InvalidToken { .. } | Self::Truncated { .. } | Self::Read { .. }
        )
    }
}

/// Precondition violation detected while assembling a circuit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CircuitError {
    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("pending stack drained at vertex {vertex} with {remaining} edges left")]
    PendingUnderflow { vertex: usize, remaining: usize },

    #[error("trail is not closed: starts at {first}, ends at {last}")]
    NotClosed { first: usize, last: usize },

    #[error("trail has {actual} vertices, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("vertex {vertex} is not on the trail")]
    Unreached { vertex: usize },
}

impl CircuitError {
    /// Machine-readable code associated with this error.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn code(&self) -> ErrorCode {
        ErrorCode::CircuitPrecondition
    }
}
