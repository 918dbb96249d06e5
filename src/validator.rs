//! This module checks grids for being solved. A grid is solved if every cell
//! is filled and every row, column, and box contains each digit from 1 to 9
//! exactly once.

use crate::SudokuGrid;
use crate::group::{self, Group};
use crate::util::DigitSet;

fn group_complete(grid: &SudokuGrid, group: &Group) -> bool {
    let mut seen = DigitSet::empty();

    for &(column, row) in group {
        match grid.get_cell(column, row) {
            Ok(Some(number)) => {
                if !seen.insert(number) {
                    return false;
                }
            },
            _ => return false
        }
    }

    seen.is_full()
}

/// Indicates whether the given grid is solved, that is, completely filled
/// without any duplicate digit in any row, column, or box.
pub fn is_solved(grid: &SudokuGrid) -> bool {
    group::all_groups().iter()
        .all(|group| group_complete(grid, group))
}

#[cfg(test)]
mod tests {

    use super::*;

    fn solved_grid() -> SudokuGrid {
        SudokuGrid::parse("\
            5,3,4,6,7,8,9,1,2,\
            6,7,2,1,9,5,3,4,8,\
            1,9,8,3,4,2,5,6,7,\
            8,5,9,7,6,1,4,2,3,\
            4,2,6,8,5,3,7,9,1,\
            7,1,3,9,2,4,8,5,6,\
            9,6,1,5,3,7,2,8,4,\
            2,8,7,4,1,9,6,3,5,\
            3,4,5,2,8,6,1,7,9").unwrap()
    }

    #[test]
    fn solved_grid_is_accepted() {
        assert!(is_solved(&solved_grid()));
    }

    #[test]
    fn incomplete_grid_is_rejected() {
        let mut grid = solved_grid();
        grid.clear_cell(4, 4).unwrap();
        assert!(!is_solved(&grid));
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert!(!is_solved(&SudokuGrid::new()));
    }

    #[test]
    fn duplicate_in_row_is_rejected() {
        let mut grid = solved_grid();
        grid.set_cell(0, 0, 3).unwrap();
        assert!(!is_solved(&grid));
    }

    #[test]
    fn duplicate_in_column_is_rejected() {
        // Swapping two cells within row 8 keeps that row valid but breaks
        // the two affected columns.
        let mut grid = solved_grid();
        grid.set_cell(0, 8, 4).unwrap();
        grid.set_cell(1, 8, 3).unwrap();
        assert!(!is_solved(&grid));
    }

    #[test]
    fn duplicate_in_box_is_rejected() {
        // Swapping (0, 0) and (1, 1) breaks box 0 without touching any
        // shared row or column.
        let mut grid = solved_grid();
        grid.set_cell(0, 0, 7).unwrap();
        grid.set_cell(1, 1, 5).unwrap();
        assert!(!is_solved(&grid));
    }
}
