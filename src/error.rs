use std::path::PathBuf;

use thiserror::Error;

/// Malformed map text. A level that fails to parse is unusable; callers
/// surface this as a load failure and skip or abort.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognized map symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },
    #[error("map has no player")]
    MissingPlayer,
    #[error("map has more than one player")]
    MultiplePlayers,
}

/// A cell combination with no map symbol, e.g. a box resting on a goal.
/// Reaching this during persistence means a play grid leaked into a save.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("cell at ({x}, {y}) has no map symbol")]
    Unrepresentable { x: i32, y: i32 },
}

/// Unreadable or structurally invalid level record.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read level file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("level file {} is not a valid level record", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("level file {} has an invalid map", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Write failure during score persistence. The in-memory score is updated
/// before the write is attempted, so on failure memory is ahead of disk.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to write level file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize level record for {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
}
