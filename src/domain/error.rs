use thiserror::Error;

/// Errors raised by the board core. None of them are transient; they are
/// reported to the immediate caller and never retried.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid board dimensions {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cell ({row}, {col}) is not alive for the marking player")]
    NotMarkable { row: usize, col: usize },

    #[error("render precondition failed: {0}")]
    RenderPrecondition(String),

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
