//! This module defines the three fixed partitions of the grid into groups of
//! nine cells each: rows, columns, and the 3x3 boxes.
//!
//! The partitions are static. They are only ever re-scanned for their current
//! contents, never recomputed structurally. Boxes are addressed through the
//! [BOXES] array, an explicit indexed collection of descriptors where the box
//! covering cell `(column, row)` has index
//! `(row / 3) * 3 + column / 3` (see [box_index]).

use crate::SIZE;

use std::ops::Range;

/// The width and height of one box, and the number of boxes along one axis
/// of the grid.
pub const BOX_SIZE: usize = 3;

/// A group of cells, in the format `(column, row)`.
pub type Group = Vec<(usize, usize)>;

/// An enumeration of the three kinds of cell groups a 9x9 Sudoku grid is
/// partitioned into. Every cell belongs to exactly one group of each kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GroupKind {

    /// The nine horizontal lines of the grid.
    Row,

    /// The nine vertical lines of the grid.
    Column,

    /// The nine non-overlapping 3x3 sub-grids (see [BOXES]).
    Box
}

/// Describes one 3x3 box by the index ranges of the rows and columns it
/// covers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoxBounds {

    /// The index of the leftmost column covered by this box.
    pub column_start: usize,

    /// The index of the topmost row covered by this box.
    pub row_start: usize
}

impl BoxBounds {

    /// The range of column indices covered by this box.
    pub fn columns(&self) -> Range<usize> {
        self.column_start..(self.column_start + BOX_SIZE)
    }

    /// The range of row indices covered by this box.
    pub fn rows(&self) -> Range<usize> {
        self.row_start..(self.row_start + BOX_SIZE)
    }
}

/// The descriptors of the nine boxes, indexed by
/// `box_row * 3 + box_column`, where `box_row` and `box_column` are the
/// coordinates of the box in the 3x3 arrangement of boxes.
pub const BOXES: [BoxBounds; 9] = [
    BoxBounds { column_start: 0, row_start: 0 },
    BoxBounds { column_start: 3, row_start: 0 },
    BoxBounds { column_start: 6, row_start: 0 },
    BoxBounds { column_start: 0, row_start: 3 },
    BoxBounds { column_start: 3, row_start: 3 },
    BoxBounds { column_start: 6, row_start: 3 },
    BoxBounds { column_start: 0, row_start: 6 },
    BoxBounds { column_start: 3, row_start: 6 },
    BoxBounds { column_start: 6, row_start: 6 }
];

/// Computes the index into [BOXES] of the box which covers the cell at the
/// given position.
pub fn box_index(column: usize, row: usize) -> usize {
    (row / BOX_SIZE) * BOX_SIZE + column / BOX_SIZE
}

/// Gets the cells of the row with the given index, in ascending column
/// order.
pub fn row_group(row: usize) -> Group {
    (0..SIZE).map(|column| (column, row)).collect()
}

/// Gets the cells of the column with the given index, in ascending row
/// order.
pub fn column_group(column: usize) -> Group {
    (0..SIZE).map(|row| (column, row)).collect()
}

/// Gets the cells of the box with the given index into [BOXES], in row-major
/// order within the box.
pub fn box_group(index: usize) -> Group {
    let bounds = BOXES[index];
    let mut group = Group::new();

    for row in bounds.rows() {
        for column in bounds.columns() {
            group.push((column, row));
        }
    }

    group
}

/// Gets the nine groups of the given kind in ascending index order.
pub fn groups(kind: GroupKind) -> Vec<Group> {
    (0..SIZE)
        .map(|index| match kind {
            GroupKind::Row => row_group(index),
            GroupKind::Column => column_group(index),
            GroupKind::Box => box_group(index)
        })
        .collect()
}

/// Gets all 27 groups of the grid: the rows, then the columns, then the
/// boxes, each in ascending index order.
pub fn all_groups() -> Vec<Group> {
    let mut result = groups(GroupKind::Row);
    result.extend(groups(GroupKind::Column));
    result.extend(groups(GroupKind::Box));
    result
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn box_index_matches_bounds() {
        for row in 0..SIZE {
            for column in 0..SIZE {
                let bounds = BOXES[box_index(column, row)];
                assert!(bounds.columns().contains(&column));
                assert!(bounds.rows().contains(&row));
            }
        }
    }

    #[test]
    fn box_index_examples() {
        assert_eq!(0, box_index(0, 0));
        assert_eq!(1, box_index(5, 2));
        assert_eq!(3, box_index(2, 4));
        assert_eq!(8, box_index(8, 8));
    }

    #[test]
    fn groups_have_nine_cells_each() {
        for kind in [GroupKind::Row, GroupKind::Column, GroupKind::Box].iter() {
            let groups = groups(*kind);
            assert_eq!(9, groups.len());

            for group in groups {
                assert_eq!(9, group.len());
            }
        }
    }

    #[test]
    fn every_cell_in_one_group_per_kind() {
        for kind in [GroupKind::Row, GroupKind::Column, GroupKind::Box].iter() {
            let groups = groups(*kind);

            for row in 0..SIZE {
                for column in 0..SIZE {
                    let containing = groups.iter()
                        .filter(|group| group.contains(&(column, row)))
                        .count();
                    assert_eq!(1, containing);
                }
            }
        }
    }

    #[test]
    fn box_group_is_row_major() {
        assert_eq!(
            vec![
                (3, 0), (4, 0), (5, 0),
                (3, 1), (4, 1), (5, 1),
                (3, 2), (4, 2), (5, 2)
            ],
            box_group(1));
    }
}
