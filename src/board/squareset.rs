/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{BitOr, BitOrAssign},
};

use crate::Square;

/// A set of [`Square`]s, stored as one bit per square.
///
/// Bit `n` is set when the square with index `n` is a member. Membership tests and inserts are constant time,
/// and iteration always yields squares in index order (`a1`, `b1`, ..., `h8`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct SquareSet(u64);

impl SquareSet {
    /// A set containing no squares.
    pub const EMPTY: Self = Self(0);

    /// Creates a [`SquareSet`] holding only `square`.
    #[inline(always)]
    pub const fn from_square(square: Square) -> Self {
        Self(1u64 << square.index())
    }

    /// Adds `square` to this set.
    #[inline(always)]
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square.index();
    }

    /// Returns `true` if `square` is a member of this set.
    ///
    /// # Example
    /// ```
    /// # use tilechess::{Square, SquareSet};
    /// let set = SquareSet::from_square(Square::E4);
    /// assert!(set.contains(Square::E4));
    /// assert!(!set.contains(Square::E5));
    /// ```
    #[inline(always)]
    pub const fn contains(&self, square: Square) -> bool {
        self.0 & (1u64 << square.index()) != 0
    }

    /// Returns `true` if this set has no members.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the number of squares in this set.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Removes and returns the lowest-indexed member, if there is one.
    #[inline(always)]
    pub fn pop_lowest(&mut self) -> Option<Square> {
        if self.is_empty() {
            return None;
        }

        let square = Square::from_index_unchecked(self.0.trailing_zeros() as usize);
        self.0 &= self.0.wrapping_sub(1);
        Some(square)
    }

    /// Returns a [`SquareSetIter`] over every member, in index order.
    #[inline(always)]
    pub const fn iter(&self) -> SquareSetIter {
        SquareSetIter { set: *self }
    }
}

impl BitOr for SquareSet {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for square in iter {
            set.insert(square);
        }
        set
    }
}

impl fmt::Display for SquareSet {
    /// Prints an 8x8 grid, White's back rank at the bottom, marking members with `X`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Allocate just enough capacity
        let mut board = String::with_capacity(136);

        for rank in (0..Square::SIDE).rev() {
            for file in 0..Square::SIDE {
                let square = Square::new_unchecked(file, rank);
                let occupant = if self.contains(square) { 'X' } else { '.' };

                board.push(occupant);
                board.push(' ');
            }
            board.push('\n');
        }

        write!(f, "{board}")
    }
}

impl fmt::Debug for SquareSet {
    /// Lists the members in algebraic notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|sq| sq.to_uci())).finish()
    }
}

/// Iterates over the members of a [`SquareSet`], lowest index first.
pub struct SquareSetIter {
    set: SquareSet,
}

impl Iterator for SquareSetIter {
    type Item = Square;
    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.set.pop_lowest()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.set.len();
        (size, Some(size))
    }
}

impl ExactSizeIterator for SquareSetIter {}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
