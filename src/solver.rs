//! This module orchestrates the two solving stages and defines the types in
//! which their outcome is reported.
//!
//! [solve] first runs exclusive-candidate sweeps
//! ([propagation](self::propagation)) on a working copy of the puzzle. If
//! those stall before the grid is complete, it falls back to bounded row
//! guessing ([search](self::search)). The returned [SolveReport] carries the
//! resulting grid together with the statistics of both stages and the
//! elapsed wall-clock time.

pub mod candidates;
pub mod propagation;
pub mod search;

use crate::SudokuGrid;
use crate::validator;

use std::time::{Duration, Instant};

/// The final grid of a solve run, tagged with whether it is complete.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// The puzzle was solved; the contained grid is completely filled and
    /// valid.
    Solved(SudokuGrid),

    /// The solver gave up. The contained grid holds the progress that
    /// survived, that is, the original clues plus everything sweeping
    /// entered before stalling.
    Unsolved(SudokuGrid)
}

/// The stage which completed the grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolveMethod {

    /// Exclusive-candidate sweeps alone completed the grid.
    Propagation,

    /// Row guessing was needed to complete the grid.
    Search
}

/// The complete outcome of a [solve] run.
#[derive(Clone, Debug)]
pub struct SolveReport {

    /// The final grid, tagged with whether it is complete.
    pub solution: Solution,

    /// The stage which completed the grid, or `None` if the puzzle was not
    /// solved.
    pub method: Option<SolveMethod>,

    /// The number of sweeps run by the first stage.
    pub sweeps: usize,

    /// The number of combinations tried by the second stage. Zero if
    /// sweeping alone solved the puzzle.
    pub attempts: usize,

    /// The wall-clock time the solve run took.
    pub elapsed: Duration
}

impl SolveReport {

    /// Indicates whether the puzzle was solved.
    pub fn is_solved(&self) -> bool {
        matches!(self.solution, Solution::Solved(_))
    }

    /// Gets the final grid, whether complete or not.
    pub fn grid(&self) -> &SudokuGrid {
        match &self.solution {
            Solution::Solved(grid) => grid,
            Solution::Unsolved(grid) => grid
        }
    }
}

/// Solves the given puzzle, first by exclusive-candidate sweeps and, if
/// those stall, by bounded row guessing. The puzzle itself is not modified;
/// the returned [SolveReport] contains the resulting grid and the
/// statistics of the run.
pub fn solve(puzzle: &SudokuGrid) -> SolveReport {
    let start = Instant::now();
    let mut grid = puzzle.clone();
    let sweeps = propagation::sweep(&mut grid);

    if validator::is_solved(&grid) {
        return SolveReport {
            solution: Solution::Solved(grid),
            method: Some(SolveMethod::Propagation),
            sweeps,
            attempts: 0,
            elapsed: start.elapsed()
        };
    }

    let outcome = search::guess(&mut grid);

    if outcome.solved {
        SolveReport {
            solution: Solution::Solved(grid),
            method: Some(SolveMethod::Search),
            sweeps,
            attempts: outcome.attempts,
            elapsed: start.elapsed()
        }
    }
    else {
        SolveReport {
            solution: Solution::Unsolved(grid),
            method: None,
            sweeps,
            attempts: outcome.attempts,
            elapsed: start.elapsed()
        }
    }
}
