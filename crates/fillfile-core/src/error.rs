//! Error types for the fillfile core library

use thiserror::Error;

/// Main error type for fillfile operations
#[derive(Error, Debug)]
pub enum Error {
    /// Size token failed the grammar or overflowed the byte-count range
    #[error("First parameter must be file size in bytes: {0}")]
    InvalidSize(String),

    /// Decimal/hex byte data failed to parse or was empty where required
    #[error("{0}")]
    InvalidByteSequence(String),

    /// Required positional parameter was not given
    #[error("Missing {0} parameter: {1}")]
    MissingParameter(&'static str, &'static str),

    /// Unknown command-line flag
    #[error("Option not recognized: {0}")]
    UnrecognizedOption(String),

    /// More than two positional parameters on the command line
    #[error("Too many parameters on command line: {0}")]
    TooManyParameters(String),

    /// IO error while creating or writing the output file
    #[error("Error while writing file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the fillfile error type
pub type Result<T> = std::result::Result<T, Error>;
