/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use anyhow::{bail, Result};

use super::BACK_RANK;
use crate::{Color, Piece, PieceKind, RulesError, Square};

/// The authoritative 8x8 grid of pieces.
///
/// Every square holds at most one [`Piece`]. The board is a passive store: it performs no legality checks,
/// which are the job of [`crate::legal_destinations`] and [`crate::commit_move`].
///
/// [`Board::default`] is the standard opening layout. Use [`Board::new`] for an empty board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// One slot per square, indexed by [`Square::index`].
    mailbox: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Creates an empty [`Board`].
    ///
    /// # Example
    /// ```
    /// # use tilechess::Board;
    /// let board = Board::new();
    /// assert_eq!(board.count(), 0);
    /// ```
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            mailbox: [None; Square::COUNT],
        }
    }

    /// Creates a [`Board`] holding the standard 32-piece opening layout.
    ///
    /// White's back rank is rank `0` and its pawns are on rank `1`.
    /// Black mirrors this on ranks `7` and `6`.
    ///
    /// # Example
    /// ```
    /// # use tilechess::{Board, Color, Piece, PieceKind, Square};
    /// let board = Board::opening();
    /// assert_eq!(board.count(), 32);
    /// assert_eq!(board.get(Square::E1), Some(Piece::new(Color::White, PieceKind::King)));
    /// assert_eq!(board.get(Square::D8), Some(Piece::new(Color::Black, PieceKind::Queen)));
    /// ```
    pub fn opening() -> Self {
        let mut board = Self::new();

        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            let file = file as u8;
            for color in Color::all() {
                let (back, pawns) = match color {
                    Color::White => (0, 1),
                    Color::Black => (7, 6),
                };

                board.place(Piece::new(color, kind), Square::new_unchecked(file, back));
                board.place(
                    Piece::new(color, PieceKind::Pawn),
                    Square::new_unchecked(file, pawns),
                );
            }
        }

        board
    }

    /// Returns the piece on `square`, if any.
    #[inline(always)]
    pub const fn get(&self, square: Square) -> Option<Piece> {
        self.mailbox[square.index()]
    }

    /// Returns the piece at raw `(file, rank)` coordinates, if any.
    ///
    /// Fails with [`RulesError::OutOfRange`] if the coordinates are not on the board.
    ///
    /// # Example
    /// ```
    /// # use tilechess::{Board, RulesError};
    /// let board = Board::opening();
    /// assert!(board.get_at(0, 0).unwrap().is_some());
    /// assert!(board.get_at(4, 4).unwrap().is_none());
    /// assert_eq!(board.get_at(-1, 3), Err(RulesError::OutOfRange { file: -1, rank: 3 }));
    /// ```
    #[inline(always)]
    pub fn get_at(&self, file: i8, rank: i8) -> Result<Option<Piece>, RulesError> {
        Ok(self.get(Square::new(file, rank)?))
    }

    /// Assigns `piece` (or nothing) to `square`, returning the previous occupant.
    ///
    /// This is a direct slot assignment with no legality checks.
    #[inline(always)]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.mailbox[square], piece)
    }

    /// Places `piece` on `square`, returning whatever was there before.
    #[inline(always)]
    pub fn place(&mut self, piece: Piece, square: Square) -> Option<Piece> {
        self.set(square, Some(piece))
    }

    /// Removes and returns the piece on `square`, if any.
    #[inline(always)]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.set(square, None)
    }

    /// Returns the team of the piece on `square`, or `None` if the square is empty.
    ///
    /// This is the occupancy test used by move generation.
    ///
    /// # Example
    /// ```
    /// # use tilechess::{Board, Color, Square};
    /// let board = Board::opening();
    /// assert_eq!(board.find(Square::A2), Some(Color::White));
    /// assert_eq!(board.find(Square::A7), Some(Color::Black));
    /// assert_eq!(board.find(Square::A4), None);
    /// ```
    #[inline(always)]
    pub const fn find(&self, square: Square) -> Option<Color> {
        match self.get(square) {
            Some(piece) => Some(piece.color()),
            None => None,
        }
    }

    /// Returns `true` if there is no piece on `square`.
    #[inline(always)]
    pub const fn is_empty_at(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Removes every piece from the board.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.mailbox = [None; Square::COUNT];
    }

    /// Returns an iterator over every piece on the board along with the square it stands on.
    ///
    /// Squares are visited in index order, starting at `a1`.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }

    /// Returns the number of pieces on the board.
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.mailbox.iter().flatten().count()
    }

    /// Returns the square of `color`'s King, if it is still on the board.
    ///
    /// If a custom layout holds more than one King of the same color, the lowest square is returned.
    pub fn king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find_map(|(square, piece)| (piece == king).then_some(square))
    }

    /// Constructs a [`Board`] from the piece-placement field of a FEN string.
    ///
    /// Anything after the first space (side to move, castling rights, etc.) is ignored.
    ///
    /// # Example
    /// ```
    /// # use tilechess::{Board, Square};
    /// let board = Board::from_placement("4k3/8/8/8/3Q4/8/8/4K3").unwrap();
    /// assert_eq!(board.count(), 3);
    /// assert_eq!(board.get(Square::D4).unwrap().to_string(), "Q");
    /// ```
    pub fn from_placement(fen: &str) -> Result<Self> {
        let mut board = Self::new();

        let placements = fen.split(' ').next().unwrap_or_default();

        if placements.matches('/').count() != 7 {
            bail!("Placement must describe all 8 ranks. Got {placements:?}");
        }

        // Reversed so that White's back rank (rank 0) comes first
        for (rank, row) in placements.split('/').rev().enumerate() {
            let rank = rank as u8;
            let mut file = 0;

            for piece_char in row.chars() {
                if file >= Square::SIDE {
                    bail!("Rank {} of placement {placements:?} has more than 8 squares", rank + 1);
                }

                if let Some(empty) = piece_char.to_digit(10) {
                    if empty == 0 {
                        bail!("Placement digits must be between [1, 8]. Got {piece_char:?}");
                    }
                    file += empty as u8;
                } else {
                    let piece = Piece::from_char(piece_char)?;
                    board.place(piece, Square::new_unchecked(file, rank));
                    file += 1;
                }
            }

            if file != Square::SIDE {
                bail!(
                    "Rank {} of placement {placements:?} covers {file} squares instead of 8",
                    rank + 1
                );
            }
        }

        Ok(board)
    }

    /// Generates the FEN piece-placement field of this [`Board`].
    ///
    /// # Example
    /// ```
    /// # use tilechess::{Board, PLACEMENT_STARTPOS};
    /// assert_eq!(Board::opening().to_placement(), PLACEMENT_STARTPOS);
    /// ```
    pub fn to_placement(&self) -> String {
        let mut ranks = Vec::with_capacity(Square::SIDE as usize);

        for rank in (0..Square::SIDE).rev() {
            let mut row = String::new();
            let mut empty_spaces = 0;

            for file in 0..Square::SIDE {
                if let Some(piece) = self.get(Square::new_unchecked(file, rank)) {
                    if empty_spaces != 0 {
                        row += &empty_spaces.to_string();
                        empty_spaces = 0;
                    }
                    row.push(piece.char());
                } else {
                    empty_spaces += 1;
                }
            }

            if empty_spaces != 0 {
                row += &empty_spaces.to_string();
            }

            ranks.push(row);
        }

        ranks.join("/")
    }
}

impl Default for Board {
    #[inline(always)]
    fn default() -> Self {
        Self::opening()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Allocate just enough capacity
        let mut board = String::with_capacity(198);

        for rank in (0..Square::SIDE).rev() {
            board += &format!("{}| ", rank + 1);

            for file in 0..Square::SIDE {
                let occupant = self
                    .get(Square::new_unchecked(file, rank))
                    .map(|piece| piece.char())
                    .unwrap_or('.');

                board.push(occupant);
                board.push(' ');
            }

            board += "\n"
        }
        board += " +";
        for _ in 0..Square::SIDE {
            board += "--";
        }
        board += "\n   ";
        for file in 0..Square::SIDE {
            board.push((b'a' + file) as char);
            board.push(' ');
        }

        write!(f, "{board}")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_placement())
    }
}
