//! This module contains utility functionality needed by the solver. Most
//! prominently, it contains the definition of the [DigitSet] used for storing
//! candidate digits.

use std::ops::{BitOr, BitOrAssign, Sub, SubAssign};

/// The bit mask containing the digits 1 to 9.
const ALL_DIGITS: u16 = 0b11_1111_1110;

/// A set of Sudoku digits (1 to 9) that is implemented as a bit mask. Each
/// digit is represented by one bit of a `u16`, which makes set operations on
/// the candidate domains of cells cheap copies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigitSet(u16);

/// An iterator over the digits contained in a [DigitSet] in ascending order.
pub struct DigitSetIter {
    remaining: u16
}

impl Iterator for DigitSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            None
        }
        else {
            let digit = self.remaining.trailing_zeros() as usize;
            self.remaining &= self.remaining - 1;
            Some(digit)
        }
    }
}

impl DigitSet {

    /// Creates a new, empty digit set.
    pub fn empty() -> DigitSet {
        DigitSet(0)
    }

    /// Creates a new digit set that contains all digits 1 to 9.
    pub fn full() -> DigitSet {
        DigitSet(ALL_DIGITS)
    }

    /// Creates a new digit set that contains only the given digit. Must be in
    /// the range `[1, 9]`.
    pub fn singleton(digit: usize) -> DigitSet {
        let mut set = DigitSet::empty();
        set.insert(digit);
        set
    }

    /// Indicates whether this set contains the given digit. Numbers outside
    /// the range `[1, 9]` are never contained.
    pub fn contains(&self, digit: usize) -> bool {
        digit >= 1 && digit <= 9 && self.0 & (1 << digit) != 0
    }

    /// Inserts the given digit into this set, such that [DigitSet::contains]
    /// returns `true` for it afterwards. Must be in the range `[1, 9]`.
    ///
    /// This method returns `true` if and only if the set has changed, that
    /// is, the digit was not present before.
    pub fn insert(&mut self, digit: usize) -> bool {
        debug_assert!(digit >= 1 && digit <= 9);

        let mask = 1 << digit;
        let changed = self.0 & mask == 0;
        self.0 |= mask;
        changed
    }

    /// Removes the given digit from this set, such that [DigitSet::contains]
    /// returns `false` for it afterwards. Must be in the range `[1, 9]`.
    ///
    /// This method returns `true` if and only if the set has changed, that
    /// is, the digit was present before.
    pub fn remove(&mut self, digit: usize) -> bool {
        debug_assert!(digit >= 1 && digit <= 9);

        let mask = 1 << digit;
        let changed = self.0 & mask != 0;
        self.0 &= !mask;
        changed
    }

    /// Indicates whether this set is empty, that is, contains no digits.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Indicates whether this set contains all digits 1 to 9.
    pub fn is_full(&self) -> bool {
        self.0 == ALL_DIGITS
    }

    /// Returns the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns an iterator over the digits contained in this set in
    /// ascending order.
    pub fn iter(&self) -> DigitSetIter {
        DigitSetIter {
            remaining: self.0
        }
    }
}

impl BitOr for DigitSet {
    type Output = DigitSet;

    /// Computes the set union of the two operands.
    fn bitor(self, rhs: DigitSet) -> DigitSet {
        DigitSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: DigitSet) {
        self.0 |= rhs.0;
    }
}

impl Sub for DigitSet {
    type Output = DigitSet;

    /// Computes the set difference of the two operands, that is, the digits
    /// of the left-hand-side which are not contained in the right-hand-side.
    fn sub(self, rhs: DigitSet) -> DigitSet {
        DigitSet(self.0 & !rhs.0)
    }
}

impl SubAssign for DigitSet {
    fn sub_assign(&mut self, rhs: DigitSet) {
        self.0 &= !rhs.0;
    }
}

/// Creates a new [DigitSet] that contains the specified digits, provided as
/// a comma-separated list. For empty sets, [DigitSet::empty] can be used.
///
/// An example usage of this macro looks as follows:
///
/// ```
/// use sudoku_margins::digit_set;
/// use sudoku_margins::util::DigitSet;
///
/// let set = digit_set!(2, 4);
/// assert!(set.contains(2));
/// assert!(!set.contains(3));
/// ```
#[macro_export]
macro_rules! digit_set {
    ($($digit:expr),+) => {
        {
            let mut set = $crate::util::DigitSet::empty();
            $(set.insert($digit);)+
            set
        }
    };
}

/// Determines whether all digits in the given slice are pairwise distinct.
pub(crate) fn all_distinct(digits: &[usize]) -> bool {
    let mut seen = DigitSet::empty();
    digits.iter().all(|&digit| seen.insert(digit))
}
