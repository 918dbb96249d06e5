//! This module implements the second solving stage: bounded backtracking
//! over row guesses.
//!
//! When sweeping stalls, the grid and its candidate map are frozen as the
//! *phase start*. The rows are then visited top to bottom, and for each row
//! every combination of candidate digits for its empty cells is tried in
//! deterministic order. Combinations with repeated digits are discarded
//! outright; every other combination is entered into the grid, sweeping is
//! run on the result, and if that completes the grid, the search ends.
//! Otherwise the grid is restored to the phase start and the next
//! combination is tried.
//!
//! Every restoration goes back to the phase start, so progress from one
//! failed guess never carries into the next one. A row without empty cells
//! has exactly one (empty) combination, which is tried like any other. The
//! search gives up after [MAX_ATTEMPTS] tried combinations.

use crate::SudokuGrid;
use crate::SIZE;
use crate::solver::candidates::CandidateMap;
use crate::solver::propagation;
use crate::util;
use crate::validator;

/// The maximum number of combinations tried by [guess] before giving up.
pub const MAX_ATTEMPTS: usize = 300;

/// The result of a [guess] run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchOutcome {

    /// Whether the search completed the grid.
    pub solved: bool,

    /// The number of combinations that were tried, including the final
    /// successful one if `solved` is `true`.
    pub attempts: usize
}

/// An iterator over the Cartesian product of a sequence of digit lists, in
/// odometer order: the digits of the last list vary fastest. A product over
/// zero lists yields exactly one empty combination, while a product over any
/// empty list yields nothing.
struct TupleProduct {
    lists: Vec<Vec<usize>>,
    indices: Vec<usize>,
    done: bool
}

impl TupleProduct {
    fn new(lists: Vec<Vec<usize>>) -> TupleProduct {
        let done = lists.iter().any(|list| list.is_empty());
        let indices = vec![0; lists.len()];

        TupleProduct {
            lists,
            indices,
            done
        }
    }
}

impl Iterator for TupleProduct {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }

        let tuple = self.indices.iter()
            .zip(self.lists.iter())
            .map(|(&index, list)| list[index])
            .collect();

        // Advance the odometer, fastest position last.
        self.done = true;

        for position in (0..self.indices.len()).rev() {
            self.indices[position] += 1;

            if self.indices[position] < self.lists[position].len() {
                self.done = false;
                break;
            }

            self.indices[position] = 0;
        }

        Some(tuple)
    }
}

/// The empty cells of one row together with their candidate digits at the
/// phase start.
struct RowGuess {
    row: usize,
    columns: Vec<usize>,
    options: Vec<Vec<usize>>
}

fn row_guesses(candidates: &CandidateMap) -> Vec<RowGuess> {
    let mut guesses = Vec::with_capacity(SIZE);

    for row in 0..SIZE {
        let mut columns = Vec::new();
        let mut options = Vec::new();

        for column in 0..SIZE {
            if let Some(cell_options) = candidates.options(column, row) {
                columns.push(column);
                options.push(cell_options.iter().collect());
            }
        }

        guesses.push(RowGuess {
            row,
            columns,
            options
        });
    }

    guesses
}

/// Attempts to complete the given stalled grid by guessing rows, as
/// described in the [module documentation](self). The grid is modified in
/// place; if the search succeeds it ends up completely filled, otherwise it
/// is restored to its initial state.
pub fn guess(grid: &mut SudokuGrid) -> SearchOutcome {
    let snapshot = grid.clone();
    let candidates = CandidateMap::compute(grid);
    let mut attempts = 0;

    for RowGuess { row, columns, options } in row_guesses(&candidates) {
        for tuple in TupleProduct::new(options) {
            if !util::all_distinct(&tuple) {
                continue;
            }

            for (&column, &number) in columns.iter().zip(tuple.iter()) {
                grid.place(column, row, number);
            }

            propagation::sweep(grid);
            attempts += 1;

            if validator::is_solved(grid) {
                return SearchOutcome {
                    solved: true,
                    attempts
                };
            }

            grid.assign(&snapshot);

            if attempts >= MAX_ATTEMPTS {
                return SearchOutcome {
                    solved: false,
                    attempts
                };
            }
        }
    }

    SearchOutcome {
        solved: false,
        attempts
    }
}
