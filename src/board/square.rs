/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use anyhow::{bail, Result};

use crate::{Color, RulesError};

/// Represents a single tile on the 8x8 board.
///
/// Internally this is the flat index `rank * 8 + file`, so `a1` is `0` and `h8` is `63`.
/// Files and ranks are both zero-based: file `0` is the `a` file and rank `0` is White's back rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    pub const A1: Self = Self::new_unchecked(0, 0);
    pub const A2: Self = Self::new_unchecked(0, 1);
    pub const A3: Self = Self::new_unchecked(0, 2);
    pub const A4: Self = Self::new_unchecked(0, 3);
    pub const A5: Self = Self::new_unchecked(0, 4);
    pub const A6: Self = Self::new_unchecked(0, 5);
    pub const A7: Self = Self::new_unchecked(0, 6);
    pub const A8: Self = Self::new_unchecked(0, 7);

    pub const B1: Self = Self::new_unchecked(1, 0);
    pub const B2: Self = Self::new_unchecked(1, 1);
    pub const B3: Self = Self::new_unchecked(1, 2);
    pub const B4: Self = Self::new_unchecked(1, 3);
    pub const B5: Self = Self::new_unchecked(1, 4);
    pub const B6: Self = Self::new_unchecked(1, 5);
    pub const B7: Self = Self::new_unchecked(1, 6);
    pub const B8: Self = Self::new_unchecked(1, 7);

    pub const C1: Self = Self::new_unchecked(2, 0);
    pub const C2: Self = Self::new_unchecked(2, 1);
    pub const C3: Self = Self::new_unchecked(2, 2);
    pub const C4: Self = Self::new_unchecked(2, 3);
    pub const C5: Self = Self::new_unchecked(2, 4);
    pub const C6: Self = Self::new_unchecked(2, 5);
    pub const C7: Self = Self::new_unchecked(2, 6);
    pub const C8: Self = Self::new_unchecked(2, 7);

    pub const D1: Self = Self::new_unchecked(3, 0);
    pub const D2: Self = Self::new_unchecked(3, 1);
    pub const D3: Self = Self::new_unchecked(3, 2);
    pub const D4: Self = Self::new_unchecked(3, 3);
    pub const D5: Self = Self::new_unchecked(3, 4);
    pub const D6: Self = Self::new_unchecked(3, 5);
    pub const D7: Self = Self::new_unchecked(3, 6);
    pub const D8: Self = Self::new_unchecked(3, 7);

    pub const E1: Self = Self::new_unchecked(4, 0);
    pub const E2: Self = Self::new_unchecked(4, 1);
    pub const E3: Self = Self::new_unchecked(4, 2);
    pub const E4: Self = Self::new_unchecked(4, 3);
    pub const E5: Self = Self::new_unchecked(4, 4);
    pub const E6: Self = Self::new_unchecked(4, 5);
    pub const E7: Self = Self::new_unchecked(4, 6);
    pub const E8: Self = Self::new_unchecked(4, 7);

    pub const F1: Self = Self::new_unchecked(5, 0);
    pub const F2: Self = Self::new_unchecked(5, 1);
    pub const F3: Self = Self::new_unchecked(5, 2);
    pub const F4: Self = Self::new_unchecked(5, 3);
    pub const F5: Self = Self::new_unchecked(5, 4);
    pub const F6: Self = Self::new_unchecked(5, 5);
    pub const F7: Self = Self::new_unchecked(5, 6);
    pub const F8: Self = Self::new_unchecked(5, 7);

    pub const G1: Self = Self::new_unchecked(6, 0);
    pub const G2: Self = Self::new_unchecked(6, 1);
    pub const G3: Self = Self::new_unchecked(6, 2);
    pub const G4: Self = Self::new_unchecked(6, 3);
    pub const G5: Self = Self::new_unchecked(6, 4);
    pub const G6: Self = Self::new_unchecked(6, 5);
    pub const G7: Self = Self::new_unchecked(6, 6);
    pub const G8: Self = Self::new_unchecked(6, 7);

    pub const H1: Self = Self::new_unchecked(7, 0);
    pub const H2: Self = Self::new_unchecked(7, 1);
    pub const H3: Self = Self::new_unchecked(7, 2);
    pub const H4: Self = Self::new_unchecked(7, 3);
    pub const H5: Self = Self::new_unchecked(7, 4);
    pub const H6: Self = Self::new_unchecked(7, 5);
    pub const H7: Self = Self::new_unchecked(7, 6);
    pub const H8: Self = Self::new_unchecked(7, 7);

    pub const MIN: u8 = 0;
    pub const MAX: u8 = 63;
    pub const COUNT: usize = 64;

    /// Number of files (and ranks) on the board.
    pub const SIDE: u8 = 8;

    /// Returns an iterator over all squares, from `a1` to `h8` in index order.
    ///
    /// # Example
    /// ```
    /// # use tilechess::Square;
    /// let mut iter = Square::iter();
    /// assert_eq!(iter.len(), 64);
    /// assert_eq!(iter.next().unwrap(), Square::A1);
    /// assert_eq!(iter.last().unwrap(), Square::H8);
    /// ```
    #[inline(always)]
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    /// Creates a new [`Square`] from a file and rank, failing if either lies outside `[0, 7]`.
    ///
    /// Coordinates are signed so that callers can hand over raw offsets without casting first.
    ///
    /// # Example
    /// ```
    /// # use tilechess::{RulesError, Square};
    /// assert_eq!(Square::new(3, 3), Ok(Square::D4));
    /// assert_eq!(Square::new(8, 0), Err(RulesError::OutOfRange { file: 8, rank: 0 }));
    /// assert!(Square::new(0, -1).is_err());
    /// ```
    #[inline(always)]
    pub const fn new(file: i8, rank: i8) -> Result<Self, RulesError> {
        if Self::in_bounds(file, rank) {
            Ok(Self::new_unchecked(file as u8, rank as u8))
        } else {
            Err(RulesError::OutOfRange { file, rank })
        }
    }

    /// Creates a new [`Square`] from a file and rank, without bounds checking.
    ///
    /// # Panics
    ///
    /// If `file` or `rank` is greater than `7` and debug assertions are enabled.
    #[inline(always)]
    pub const fn new_unchecked(file: u8, rank: u8) -> Self {
        debug_assert!(file < Self::SIDE && rank < Self::SIDE);
        Self(rank * Self::SIDE + file)
    }

    /// Creates a new [`Square`] from its flat index, without bounds checking.
    #[inline(always)]
    pub const fn from_index_unchecked(index: usize) -> Self {
        debug_assert!(index < Self::COUNT, "Index must be between [0,64)");
        Self(index as u8)
    }

    /// Returns `true` if `(file, rank)` lies on the board.
    #[inline(always)]
    pub const fn in_bounds(file: i8, rank: i8) -> bool {
        file >= 0 && file < Self::SIDE as i8 && rank >= 0 && rank < Self::SIDE as i8
    }

    /// Returns the file (column) of this [`Square`], in `[0, 7]`.
    #[inline(always)]
    pub const fn file(&self) -> u8 {
        self.0 % Self::SIDE
    }

    /// Returns the rank (row) of this [`Square`], in `[0, 7]`.
    #[inline(always)]
    pub const fn rank(&self) -> u8 {
        self.0 / Self::SIDE
    }

    /// Returns the `(file, rank)` pair of this [`Square`].
    ///
    /// # Example
    /// ```
    /// # use tilechess::Square;
    /// assert_eq!(Square::C4.coords(), (2, 3));
    /// ```
    #[inline(always)]
    pub const fn coords(&self) -> (u8, u8) {
        (self.file(), self.rank())
    }

    /// Returns the flat index of this [`Square`], for indexing into a 64-element array.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Attempt to offset this [`Square`] by the file and rank offsets.
    ///
    /// If the result would leave the board in either direction, `None` is returned.
    ///
    /// # Example
    /// ```
    /// # use tilechess::Square;
    /// assert_eq!(Square::C4.offset(1, 1), Some(Square::D5));
    /// assert_eq!(Square::C4.offset(-1, -1), Some(Square::B3));
    /// assert_eq!(Square::A1.offset(-1, 2), None);
    /// assert_eq!(Square::H8.offset(1, -2), None);
    /// assert_eq!(Square::H8.offset(i8::MAX, 0), None);
    /// assert_eq!(Square::A1.offset(0, i8::MIN), None);
    /// ```
    #[inline(always)]
    pub const fn offset(&self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let (Some(file), Some(rank)) = (
            (self.file() as i8).checked_add(file_delta),
            (self.rank() as i8).checked_add(rank_delta),
        ) else {
            return None;
        };

        match Self::new(file, rank) {
            Ok(square) => Some(square),
            Err(_) => None,
        }
    }

    /// Moves this [`Square`] `n` ranks towards the opponent of `color`, if possible.
    ///
    /// # Example
    /// ```
    /// # use tilechess::{Color, Square};
    /// assert_eq!(Square::C4.forward_by(Color::White, 1), Some(Square::C5));
    /// assert_eq!(Square::C4.forward_by(Color::Black, 2), Some(Square::C2));
    /// assert_eq!(Square::C8.forward_by(Color::White, 1), None);
    /// assert_eq!(Square::A1.forward_by(Color::Black, 128), None);
    /// assert_eq!(Square::A1.forward_by(Color::White, 200), None);
    /// ```
    #[inline(always)]
    pub const fn forward_by(&self, color: Color, n: u8) -> Option<Self> {
        if n > i8::MAX as u8 {
            return None;
        }

        match (n as i8).checked_mul(color.negation_multiplier()) {
            Some(delta) => self.offset(0, delta),
            None => None,
        }
    }

    /// Parses a [`Square`] from algebraic notation, such as `e4`.
    ///
    /// # Example
    /// ```
    /// # use tilechess::Square;
    /// assert_eq!(Square::from_uci("c4").unwrap(), Square::C4);
    /// assert!(Square::from_uci("z0").is_err());
    /// assert!(Square::from_uci("a10").is_err());
    /// ```
    pub fn from_uci(square: &str) -> Result<Self> {
        let bytes = square.as_bytes();
        if bytes.len() != 2 {
            bail!("Invalid Square string: String must contain exactly 2 characters. Got {square:?}")
        }

        let file = bytes[0].to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&file) {
            bail!("Invalid File char: Must be between [a, h]. Got {:?}", bytes[0] as char);
        }

        let rank = bytes[1];
        if !(b'1'..=b'8').contains(&rank) {
            bail!("Invalid Rank char: Must be between [1, 8]. Got {:?}", rank as char);
        }

        Ok(Self::new_unchecked(file - b'a', rank - b'1'))
    }

    /// Converts this [`Square`] to algebraic notation.
    ///
    /// # Example
    /// ```
    /// # use tilechess::Square;
    /// assert_eq!("c4", Square::C4.to_uci());
    /// ```
    #[inline(always)]
    pub fn to_uci(self) -> String {
        format!("{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;
    /// Wrapper for [`Square::from_uci`].
    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_uci(s)
    }
}

impl<T> Index<Square> for [T; Square::COUNT] {
    type Output = T;
    /// A [`Square`] can be used to index into an array of 64 elements.
    #[inline(always)]
    fn index(&self, index: Square) -> &Self::Output {
        &self[index.index()]
    }
}

impl<T> IndexMut<Square> for [T; Square::COUNT] {
    /// A [`Square`] can be used to mutably index into an array of 64 elements.
    #[inline(always)]
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self[index.index()]
    }
}

impl fmt::Display for Square {
    /// Calls [`Square::to_uci`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

impl fmt::Debug for Square {
    /// Displays the algebraic name along with the `(file, rank)` pair.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.to_uci(), self.file(), self.rank())
    }
}
