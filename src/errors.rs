use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

use crate::aligner::traceback::Direction;

#[derive(Debug)]
pub enum NwError {
    /// The traceback matrix holds a direction that can't occur at the given cell. This means the
    /// matrices were built incorrectly.
    InvalidTraceback { row: usize, col: usize, direction: Direction },

    /// The traceback matrix has no cells, not even the origin
    EmptyTraceback,

    /// A line of an input file could not be parsed
    ParseError { line: usize, message: String },

    /// Error variant when we couldn't open or read from a file
    FileReadError { source: io::Error },

    /// Other IO errors
    IOError(io::Error),

    /// Other miscellaneous errors
    Other,
}

impl Error for NwError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::FileReadError { ref source } => Some(source),
            Self::IOError(ref source) => Some(source),
            _ => None
        }
    }
}

impl From<io::Error> for NwError {
    fn from(value: io::Error) -> Self {
        Self::IOError(value)
    }
}

impl Display for NwError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::InvalidTraceback { row, col, direction } =>
                write!(f, "Invalid traceback direction {direction:?} at cell ({row}, {col})! The alignment matrices are inconsistent."),
            Self::EmptyTraceback =>
                write!(f, "Traceback matrix is empty! It needs at least one row and one column."),
            Self::ParseError { line, ref message } =>
                write!(f, "Could not parse line {line}: {message}"),
            Self::FileReadError { source: _ } =>
                write!(f, "Could not read from file!"),
            Self::IOError(ref err) =>
                err.fmt(f),
            Self::Other =>
                write!(f, "nwalign error!")
        }
    }
}
