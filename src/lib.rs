// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a solver for classic 9x9 Sudoku. It supports the
//! following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Computing the candidate digits of every empty cell from the digits
//! already used in its row, column, and box (its *margins*)
//! * Solving by repeated exclusive-candidate sweeps: wherever a digit has
//! exactly one remaining candidate cell within some row, column, or box, it
//! is entered
//! * Bounded backtracking for puzzles on which sweeps stall, by guessing
//! candidate tuples for the empty cells of whole rows
//! * Validating completed grids
//!
//! # Parsing and printing grids
//!
//! A grid code is a comma-separated list of 81 entries, each either empty or
//! a digit from 1 to 9, assigned left-to-right, top-to-bottom. Alternatively,
//! a grid can be constructed from a 9x9 array of numbers, where 0 denotes an
//! empty cell. Grids render as three 3-row bands separated by a dashed rule,
//! with blank cells shown as spaces.
//!
//! ```
//! use sudoku_margins::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving
//!
//! The entry point is [solver::solve], which first runs sweeps to a fixpoint
//! (at most 50), then resorts to row guessing (at most 300 attempts), and
//! reports the outcome together with its statistics.
//!
//! ```
//! use sudoku_margins::SudokuGrid;
//! use sudoku_margins::solver::{self, SolveMethod};
//!
//! let puzzle = SudokuGrid::parse("\
//!      ,3,4,6,7,8,9,1,2,\
//!     6, ,2,1,9,5,3,4,8,\
//!     1,9, ,3,4,2,5,6,7,\
//!     8,5,9, ,6,1,4,2,3,\
//!     4,2,6,8, ,3,7,9,1,\
//!     7,1,3,9,2, ,8,5,6,\
//!     9,6,1,5,3,7, ,8,4,\
//!     2,8,7,4,1,9,6, ,5,\
//!     3,4,5,2,8,6,1,7, ").unwrap();
//!
//! let report = solver::solve(&puzzle);
//!
//! assert!(report.is_solved());
//! assert_eq!(Some(SolveMethod::Propagation), report.method);
//! ```

pub mod error;
pub mod group;
pub mod solver;
pub mod util;
pub mod validator;


use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of cells along one axis of the grid.
pub const SIZE: usize = 9;

/// A 9x9 Sudoku grid. Each cell may or may not be occupied by a digit from 1
/// to 9. Two instances matter to the solver: the immutable original puzzle,
/// kept for display and reference, and the working copy that the solving
/// passes transform in place.
///
/// `SudokuGrid` implements `Display`, rendering the grid as three 3-row
/// bands separated by a dashed rule, where each row consists of three
/// 3-digit clusters joined by vertical bars and blank cells are shown as
/// spaces:
///
/// ```text
///   6   |   8 7 |
///     3 | 9     | 6   5
///   7   |       |     4
/// ---------------------
/// 6   4 | 8     |
///   9   |   2   |   6
///       |     6 | 1   3
/// ---------------------
/// 1     |       |   5
/// 2   9 |     5 | 4
///       | 2 7   |   1
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "Vec<usize>")]
#[serde(try_from = "Vec<usize>")]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

/// The horizontal rule drawn between the three 3-row bands of a grid.
const BAND_SEPARATOR: &str = "---------------------";

fn content_row(grid: &SudokuGrid, row: usize) -> String {
    let mut result = String::new();

    for column in 0..SIZE {
        if column > 0 {
            result.push(' ');

            if column % group::BOX_SIZE == 0 {
                result.push('|');
                result.push(' ');
            }
        }

        result.push(to_char(grid.cells[index(column, row)]));
    }

    result
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row > 0 {
                f.write_str("\n")?;

                if row % group::BOX_SIZE == 0 {
                    f.write_str(BAND_SEPARATOR)?;
                    f.write_str("\n")?;
                }
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

impl SudokuGrid {

    /// Creates a new, empty 9x9 Sudoku grid.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; SIZE * SIZE]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of 81 entries, which are either empty or a digit from 1 to 9.
    /// The entries are assigned left-to-right, top-to-bottom, where each row
    /// is completed before the next one is started. Whitespace in the
    /// entries is ignored to allow for more intuitive formatting.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let numbers: Vec<&str> = code.split(',').collect();

        if numbers.len() != SIZE * SIZE {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::new();

        for (i, number_str) in numbers.iter().enumerate() {
            let number_str = number_str.trim();

            if number_str.is_empty() {
                continue;
            }

            let number = number_str.parse::<usize>()?;

            if number == 0 || number > SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string
    /// and parsed again will not change.
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Creates a grid from a 9x9 array of numbers in the format
    /// `cells[row][column]`, where 0 denotes an empty cell. This is the
    /// input format of the solver's callers.
    ///
    /// # Errors
    ///
    /// If any entry is greater than 9. In that case,
    /// `SudokuParseError::InvalidNumber` is returned.
    pub fn from_array(cells: [[usize; SIZE]; SIZE])
            -> SudokuParseResult<SudokuGrid> {
        let flat: Vec<usize> = cells.iter()
            .flat_map(|row| row.iter().cloned())
            .collect();
        SudokuGrid::try_from(flat)
    }

    /// Converts the grid into a 9x9 array of numbers in the format
    /// `cells[row][column]`, where 0 denotes an empty cell.
    pub fn to_array(&self) -> [[usize; SIZE]; SIZE] {
        let mut result = [[0; SIZE]; SIZE];

        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Some(number) = self.cells[index(column, row)] {
                    result[row][column] = number;
                }
            }
        }

        result
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are greater than 8. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Writes a number to a cell whose coordinates and content are known to
    /// be valid, skipping the range checks of [SudokuGrid::set_cell]. Used
    /// by the solving passes, whose placements are valid by construction.
    pub(crate) fn place(&mut self, column: usize, row: usize, number: usize) {
        debug_assert!(column < SIZE && row < SIZE);
        debug_assert!(number >= 1 && number <= SIZE);

        self.cells[index(column, row)] = Some(number);
    }

    /// Assigns the content of another grid to this one, that is, changes the
    /// cells in this grid to the state in `other`.
    pub fn assign(&mut self, other: &SudokuGrid) {
        self.cells.copy_from_slice(&other.cells);
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Indicates whether this grid is full, that is, every cell is filled
    /// with a number.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be
    /// filled in `other` with the same number.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| match self_cell {
                Some(_) => self_cell == other_cell,
                None => true
            })
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl From<SudokuGrid> for Vec<usize> {
    fn from(grid: SudokuGrid) -> Vec<usize> {
        grid.cells.iter().map(|cell| cell.unwrap_or(0)).collect()
    }
}

impl TryFrom<Vec<usize>> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(cells: Vec<usize>) -> SudokuParseResult<SudokuGrid> {
        if cells.len() != SIZE * SIZE {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::new();

        for (i, &number) in cells.iter().enumerate() {
            if number > SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            if number > 0 {
                grid.cells[i] = Some(number);
            }
        }

        Ok(grid)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let grid = SudokuGrid::parse("\
            1, , , , , , ,2, ,\
             ,3, , , , , , , ,\
             , , , , , ,4, , ,\
             , , , , , , , , ,\
             , ,5, , , , , , ,\
             , , , , ,6, , , ,\
             , , , , , , , , ,\
             ,7, , , , , , ,8,\
             , , , ,9, , , , ").unwrap();

        assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
        assert_eq!(Some(2), grid.get_cell(7, 0).unwrap());
        assert_eq!(Some(3), grid.get_cell(1, 1).unwrap());
        assert_eq!(Some(4), grid.get_cell(6, 2).unwrap());
        assert_eq!(Some(5), grid.get_cell(2, 4).unwrap());
        assert_eq!(Some(6), grid.get_cell(5, 5).unwrap());
        assert_eq!(Some(7), grid.get_cell(1, 7).unwrap());
        assert_eq!(Some(8), grid.get_cell(8, 7).unwrap());
        assert_eq!(Some(9), grid.get_cell(4, 8).unwrap());
        assert_eq!(None, grid.get_cell(4, 4).unwrap());
        assert_eq!(10, grid.count_clues());
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse("1,2,3"));
    }

    #[test]
    fn parse_number_format_error() {
        let mut code = "#,".repeat(80);
        code.push('#');
        assert_eq!(Err(SudokuParseError::NumberFormatError),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn parse_invalid_number() {
        let mut code = "10,".repeat(80);
        code.push_str("10");
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse(code.as_str()));

        let mut code = "0,".repeat(80);
        code.push('0');
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(4, 2, 5).unwrap();
        grid.set_cell(8, 8, 9).unwrap();

        let code = grid.to_parseable_string();
        assert_eq!(grid, SudokuGrid::parse(code.as_str()).unwrap());
    }

    #[test]
    fn array_round_trip() {
        let cells = [
            [0, 6, 0, 0, 8, 7, 0, 0, 0],
            [0, 0, 3, 9, 0, 0, 6, 0, 5],
            [0, 7, 0, 0, 0, 0, 0, 0, 4],
            [6, 0, 4, 8, 0, 0, 0, 0, 0],
            [0, 9, 0, 0, 2, 0, 0, 6, 0],
            [0, 0, 0, 0, 0, 6, 1, 0, 3],
            [1, 0, 0, 0, 0, 0, 0, 5, 0],
            [2, 0, 9, 0, 0, 5, 4, 0, 0],
            [0, 0, 0, 2, 7, 0, 0, 1, 0]
        ];
        let grid = SudokuGrid::from_array(cells).unwrap();

        assert_eq!(Some(6), grid.get_cell(1, 0).unwrap());
        assert_eq!(Some(9), grid.get_cell(3, 1).unwrap());
        assert_eq!(None, grid.get_cell(0, 0).unwrap());
        assert_eq!(cells, grid.to_array());
    }

    #[test]
    fn from_array_invalid_number() {
        let mut cells = [[0; SIZE]; SIZE];
        cells[3][4] = 17;
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::from_array(cells));
    }

    #[test]
    fn cell_accessors_out_of_bounds() {
        let mut grid = SudokuGrid::new();
        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(0, 9, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear_cell(10, 10));
    }

    #[test]
    fn set_cell_invalid_number() {
        let mut grid = SudokuGrid::new();
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 10));
    }

    #[test]
    fn subset_relations() {
        let mut small = SudokuGrid::new();
        small.set_cell(2, 3, 4).unwrap();

        let mut large = small.clone();
        large.set_cell(5, 6, 7).unwrap();

        assert!(small.is_subset(&large));
        assert!(!large.is_subset(&small));
        assert!(small.is_subset(&small));

        let mut conflicting = SudokuGrid::new();
        conflicting.set_cell(2, 3, 5).unwrap();
        assert!(!small.is_subset(&conflicting));
    }

    #[test]
    fn display_format() {
        let grid = SudokuGrid::from_array([
            [0, 6, 0, 0, 8, 7, 0, 0, 0],
            [0, 0, 3, 9, 0, 0, 6, 0, 5],
            [0, 7, 0, 0, 0, 0, 0, 0, 4],
            [6, 0, 4, 8, 0, 0, 0, 0, 0],
            [0, 9, 0, 0, 2, 0, 0, 6, 0],
            [0, 0, 0, 0, 0, 6, 1, 0, 3],
            [1, 0, 0, 0, 0, 0, 0, 5, 0],
            [2, 0, 9, 0, 0, 5, 4, 0, 0],
            [0, 0, 0, 2, 7, 0, 0, 1, 0]
        ]).unwrap();

        let expected =
            "  6   |   8 7 |      \n\
             \x20   3 | 9     | 6   5\n\
             \x20 7   |       |     4\n\
             ---------------------\n\
             6   4 | 8     |      \n\
             \x20 9   |   2   |   6  \n\
             \x20     |     6 | 1   3\n\
             ---------------------\n\
             1     |       |   5  \n\
             2   9 |     5 | 4    \n\
             \x20     | 2 7   |   1  ";

        assert_eq!(expected, format!("{}", grid));
    }

    #[test]
    fn serde_round_trip() {
        let grid = SudokuGrid::parse("\
            5,3, , ,7, , , , ,\
            6, , ,1,9,5, , , ,\
             ,9,8, , , , ,6, ,\
            8, , , ,6, , , ,3,\
            4, , ,8, ,3, , ,1,\
            7, , , ,2, , , ,6,\
             ,6, , , , ,2,8, ,\
             , , ,4,1,9, , ,5,\
             , , , ,8, , ,7,9").unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        let parsed: SudokuGrid = serde_json::from_str(json.as_str()).unwrap();

        assert_eq!(grid, parsed);
        assert!(json.starts_with("[5,3,0,0,7,0,0,0,0,"));
    }

    #[test]
    fn serde_rejects_invalid_cells() {
        let result: Result<SudokuGrid, _> =
            serde_json::from_str("[1,2,3]");
        assert!(result.is_err());
    }
}
