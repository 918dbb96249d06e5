//! This module computes the candidate domains of cells, that is, the sets of
//! digits that may still legally occupy each empty cell given the digits
//! already placed in its row, column, and box.
//!
//! Candidate maps are snapshots. They are recomputed from the grid whenever a
//! solving pass needs fresh information, instead of being updated
//! incrementally as cells are filled. At the fixed 9x9 size the recomputation
//! is cheap and keeps the solving passes free of bookkeeping.

use crate::{SudokuGrid, SIZE, index};
use crate::group::{self, BoxBounds};
use crate::util::DigitSet;

/// The state of a single cell as seen by the solving passes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CellState {

    /// The cell is occupied by the contained digit, either as an original
    /// clue or by an earlier solving step. Fixed cells have no candidates.
    Fixed(usize),

    /// The cell is empty and the contained [DigitSet] holds its candidate
    /// digits, that is, the digits not yet used in its row, column, or box.
    Open(DigitSet)
}

/// A snapshot of the [CellState] of every cell in a grid at the moment of
/// computation. Obtained from [CandidateMap::compute].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateMap {
    cells: Vec<CellState>
}

fn used_in_row(grid: &SudokuGrid, row: usize) -> DigitSet {
    let mut used = DigitSet::empty();

    for column in 0..SIZE {
        if let Ok(Some(number)) = grid.get_cell(column, row) {
            used.insert(number);
        }
    }

    used
}

fn used_in_column(grid: &SudokuGrid, column: usize) -> DigitSet {
    let mut used = DigitSet::empty();

    for row in 0..SIZE {
        if let Ok(Some(number)) = grid.get_cell(column, row) {
            used.insert(number);
        }
    }

    used
}

fn used_in_box(grid: &SudokuGrid, bounds: BoxBounds) -> DigitSet {
    let mut used = DigitSet::empty();

    for row in bounds.rows() {
        for column in bounds.columns() {
            if let Ok(Some(number)) = grid.get_cell(column, row) {
                used.insert(number);
            }
        }
    }

    used
}

impl CandidateMap {

    /// Computes the candidate map of the given grid. Every occupied cell is
    /// recorded as [CellState::Fixed] with its digit, every empty cell as
    /// [CellState::Open] with the set of digits not yet used in its row,
    /// column, or box.
    pub fn compute(grid: &SudokuGrid) -> CandidateMap {
        let mut row_used = [DigitSet::empty(); SIZE];
        let mut column_used = [DigitSet::empty(); SIZE];
        let mut box_used = [DigitSet::empty(); SIZE];

        for row in 0..SIZE {
            row_used[row] = used_in_row(grid, row);
        }

        for column in 0..SIZE {
            column_used[column] = used_in_column(grid, column);
        }

        for (box_index, &bounds) in group::BOXES.iter().enumerate() {
            box_used[box_index] = used_in_box(grid, bounds);
        }

        let mut cells = Vec::with_capacity(SIZE * SIZE);

        for row in 0..SIZE {
            for column in 0..SIZE {
                let state = match grid.get_cell(column, row) {
                    Ok(Some(number)) => CellState::Fixed(number),
                    _ => {
                        let used = row_used[row]
                            | column_used[column]
                            | box_used[group::box_index(column, row)];
                        CellState::Open(DigitSet::full() - used)
                    }
                };
                cells.push(state);
            }
        }

        CandidateMap {
            cells
        }
    }

    /// Gets the [CellState] of the cell at the specified position. The
    /// coordinates must be in the range `[0, 9[`.
    pub fn state(&self, column: usize, row: usize) -> CellState {
        self.cells[index(column, row)]
    }

    /// Gets the candidate digits of the cell at the specified position, or
    /// `None` if the cell is occupied.
    pub fn options(&self, column: usize, row: usize) -> Option<DigitSet> {
        match self.state(column, row) {
            CellState::Open(options) => Some(options),
            CellState::Fixed(_) => None
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::digit_set;

    fn example_grid() -> SudokuGrid {
        SudokuGrid::parse("\
            5,3, , ,7, , , , ,\
            6, , ,1,9,5, , , ,\
             ,9,8, , , , ,6, ,\
            8, , , ,6, , , ,3,\
            4, , ,8, ,3, , ,1,\
            7, , , ,2, , , ,6,\
             ,6, , , , ,2,8, ,\
             , , ,4,1,9, , ,5,\
             , , , ,8, , ,7,9").unwrap()
    }

    #[test]
    fn fixed_cells_carry_their_digit() {
        let candidates = CandidateMap::compute(&example_grid());

        assert_eq!(CellState::Fixed(5), candidates.state(0, 0));
        assert_eq!(CellState::Fixed(9), candidates.state(4, 1));
        assert_eq!(None, candidates.options(0, 0));
    }

    #[test]
    fn open_cells_exclude_their_margins() {
        let candidates = CandidateMap::compute(&example_grid());

        // Cell (2, 0): row 0 uses {5, 3, 7}, column 2 uses {8}, box 0 uses
        // {5, 3, 6, 9, 8}.
        assert_eq!(Some(digit_set!(1, 2, 4)), candidates.options(2, 0));

        // Cell (4, 4): row 4 uses {4, 8, 3, 1}, column 4 uses
        // {7, 9, 6, 2, 1, 8}, box 4 uses {1, 8, 3, 2}.
        assert_eq!(Some(digit_set!(5)), candidates.options(4, 4));
    }

    #[test]
    fn empty_grid_has_full_domains() {
        let candidates = CandidateMap::compute(&SudokuGrid::new());

        for row in 0..SIZE {
            for column in 0..SIZE {
                assert_eq!(Some(DigitSet::full()),
                    candidates.options(column, row));
            }
        }
    }

    #[test]
    fn full_grid_has_no_open_cells() {
        let grid = SudokuGrid::parse("\
            5,3,4,6,7,8,9,1,2,\
            6,7,2,1,9,5,3,4,8,\
            1,9,8,3,4,2,5,6,7,\
            8,5,9,7,6,1,4,2,3,\
            4,2,6,8,5,3,7,9,1,\
            7,1,3,9,2,4,8,5,6,\
            9,6,1,5,3,7,2,8,4,\
            2,8,7,4,1,9,6,3,5,\
            3,4,5,2,8,6,1,7,9").unwrap();
        let candidates = CandidateMap::compute(&grid);

        for row in 0..SIZE {
            for column in 0..SIZE {
                assert_eq!(None, candidates.options(column, row));
            }
        }
    }

    #[test]
    fn contradiction_yields_empty_domain() {
        let mut grid = SudokuGrid::new();

        for (number, column) in (1..SIZE).zip(0..) {
            grid.set_cell(column, 0, number).unwrap();
        }

        grid.set_cell(8, 1, 9).unwrap();

        // Cell (8, 0) sees 1 to 8 in its row and 9 in its box.
        let candidates = CandidateMap::compute(&grid);
        assert_eq!(Some(DigitSet::empty()), candidates.options(8, 0));
    }
}
