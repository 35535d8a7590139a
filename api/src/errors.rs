use quill_algebra::prelude::AlgebraError;
use quill_snark::errors::SnarkError;
use std::{error, fmt, io};

pub(crate) type Result<T> = core::result::Result<T, CliError>;

/// The errors of the command line tool.
#[derive(Debug)]
pub enum CliError {
    /// Algebra error, e.g. an unreadable or unknown curve description.
    Algebra(AlgebraError),
    /// Protocol error.
    Snark(SnarkError),
    /// An argument is not a decimal field element.
    InvalidNumber {
        /// Which argument.
        name: String,
        /// What was given.
        value: String,
    },
    /// Encoding the reference string failed.
    Encoding(String),
    /// Console or file I/O failed.
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CliError::*;
        match self {
            Algebra(e) => write!(f, "{}", e),
            Snark(e) => write!(f, "{}", e),
            InvalidNumber { name, value } => {
                write!(f, "{} is not a decimal field element: {:?}", name, value)
            }
            Encoding(e) => write!(f, "encoding failed: {}", e),
            Io(e) => write!(f, "I/O: {}", e),
        }
    }
}

impl error::Error for CliError {}

impl From<AlgebraError> for CliError {
    fn from(e: AlgebraError) -> CliError {
        CliError::Algebra(e)
    }
}

impl From<SnarkError> for CliError {
    fn from(e: SnarkError) -> CliError {
        CliError::Snark(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> CliError {
        CliError::Io(e)
    }
}

impl From<bincode::Error> for CliError {
    fn from(e: bincode::Error) -> CliError {
        CliError::Encoding(e.to_string())
    }
}
