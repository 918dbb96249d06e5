//! This module implements the first solving stage: repeated
//! exclusive-candidate sweeps.
//!
//! A digit is an *exclusive candidate* of a cell if, within some group (row,
//! column, or box), that cell is the only one which still has the digit in
//! its candidate domain. Such a digit must go into that cell, so a sweep
//! enters all exclusive candidates it finds and the next sweep works on the
//! grown grid. Sweeping continues until a sweep changes nothing or
//! [MAX_SWEEPS] sweeps have been run.
//!
//! Each sweep scans rows, then columns, then boxes, all against the same
//! candidate snapshot taken at the start of the sweep. The findings of the
//! three scans are merged into one batch and entered in that order, so if
//! two scans disagree about a cell, the later finding stands and the next
//! sweep sees the result.

use crate::SudokuGrid;
use crate::group::{self, GroupKind};
use crate::solver::candidates::{CandidateMap, CellState};

/// The maximum number of sweeps run by [sweep] before giving up.
pub const MAX_SWEEPS: usize = 50;

/// The cells of one group in which a digit is still a candidate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Placement {

    /// The digit is a candidate of no cell in the group.
    None,

    /// The digit is a candidate of exactly one cell, at the contained
    /// position `(column, row)`.
    One(usize, usize),

    /// The digit is a candidate of more than one cell.
    Multiple
}

impl Placement {
    fn union(self, column: usize, row: usize) -> Placement {
        match self {
            Placement::None => Placement::One(column, row),
            _ => Placement::Multiple
        }
    }
}

/// Finds all exclusive candidates among the groups of the given kind,
/// according to the given candidate snapshot. The result contains one entry
/// `(column, row, number)` per finding, ordered by digit first and group
/// index second.
pub(crate) fn find_exclusive(kind: GroupKind, candidates: &CandidateMap)
        -> Vec<(usize, usize, usize)> {
    let groups = group::groups(kind);
    let mut found = Vec::new();

    for number in 1..=9 {
        for group in &groups {
            let mut placement = Placement::None;

            for &(column, row) in group {
                if let CellState::Open(options) = candidates.state(column, row) {
                    if options.contains(number) {
                        placement = placement.union(column, row);
                    }
                }
            }

            if let Placement::One(column, row) = placement {
                found.push((column, row, number));
            }
        }
    }

    found
}

/// Runs exclusive-candidate sweeps on the given grid until a sweep changes
/// nothing or [MAX_SWEEPS] sweeps have been run, and returns the number of
/// sweeps that were run. The grid is modified in place; on success it ends
/// up completely filled, otherwise it keeps all progress that was made.
///
/// Note that detecting a fixpoint costs one sweep, so a grid on which
/// nothing can be entered still counts one sweep.
pub fn sweep(grid: &mut SudokuGrid) -> usize {
    let mut sweeps = 0;

    loop {
        let before = grid.clone();
        let candidates = CandidateMap::compute(grid);
        let mut batch = find_exclusive(GroupKind::Row, &candidates);
        batch.extend(find_exclusive(GroupKind::Column, &candidates));
        batch.extend(find_exclusive(GroupKind::Box, &candidates));

        for (column, row, number) in batch {
            grid.place(column, row, number);
        }

        sweeps += 1;

        if grid == &before || sweeps >= MAX_SWEEPS {
            return sweeps;
        }
    }
}
