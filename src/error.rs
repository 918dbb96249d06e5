//! This module contains the error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Errors that can occur when accessing cells of a
/// [SudokuGrid](crate::SudokuGrid). This does not include errors that occur
/// when parsing grids, see [SudokuParseError] for that.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some number is invalid as a cell content, that is, it
    /// is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the 9x9 grid, that is, at least one of them is greater than 8.
    OutOfBounds
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::InvalidNumber => f.write_str("invalid number"),
            SudokuError::OutOfBounds => f.write_str("coordinates out of bounds")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a
/// [SudokuGrid](crate::SudokuGrid) from a code or constructing it from raw
/// cell values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of provided cells does not equal 81, the
    /// number of cells in a 9x9 grid.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than 9 in a code; more than 9 in raw cell values, where 0 denotes an
    /// empty cell).
    InvalidNumber
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                f.write_str("wrong number of cells"),
            SudokuParseError::NumberFormatError =>
                f.write_str("number format error"),
            SudokuParseError::InvalidNumber =>
                f.write_str("invalid number")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}
