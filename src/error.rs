use std::path::PathBuf;

/// Why a token could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("an empty token cannot be placed")]
    EmptyToken,

    #[error("cell ({column}, {row}) is outside the board")]
    OutOfRange { column: usize, row: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("cell ({column}, {row}) is already occupied")]
    Occupied { column: usize, row: usize },
}

/// Errors raised while building a board from its text rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown token {symbol:?} at ({column}, {row})")]
    UnknownToken {
        symbol: char,
        column: usize,
        row: usize,
    },

    #[error("token at ({column}, {row}) is not resting on the column below it")]
    Floating { column: usize, row: usize },
}

/// Errors raised while loading or validating game settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("gravity board must be between {min}x{min} and {max}x{max}, got {width}x{height}")]
    BoardSize {
        width: usize,
        height: usize,
        min: usize,
        max: usize,
    },

    #[error("settings validation error: {0}")]
    Validation(String),
}
