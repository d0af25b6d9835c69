/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::{Color, Piece};

/// Pieces removed from the board, kept per capturing team in the order they were taken.
///
/// The host lays captured pieces out in a stack beside the board;
/// [`CapturedPools::stack_offset`] gives the position for the next one.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct CapturedPools {
    /// `pools[color]` holds the enemy pieces that `color` has captured.
    pools: [Vec<Piece>; Color::COUNT],
}

impl CapturedPools {
    /// Creates empty pools for both teams.
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `capturer` took `piece`.
    pub fn push(&mut self, capturer: Color, piece: Piece) {
        debug_assert_ne!(capturer, piece.color(), "{capturer} cannot capture its own {piece:?}");
        self.pools[capturer].push(piece);
    }

    /// Returns the pieces `capturer` has taken, oldest first.
    #[inline(always)]
    pub fn captured_by(&self, capturer: Color) -> &[Piece] {
        &self.pools[capturer]
    }

    /// Returns how many pieces `capturer` has taken.
    #[inline(always)]
    pub fn count(&self, capturer: Color) -> usize {
        self.pools[capturer].len()
    }

    /// Returns the total number of captured pieces.
    #[inline(always)]
    pub fn total(&self) -> usize {
        self.pools.iter().map(Vec::len).sum()
    }

    /// Display offset of the most recent piece in `capturer`'s stack, given the gap between stacked pieces.
    ///
    /// # Example
    /// ```
    /// # use tilechess::{CapturedPools, Color, Piece, PieceKind};
    /// let mut pools = CapturedPools::new();
    /// assert_eq!(pools.stack_offset(Color::White, 0.5), 0.0);
    ///
    /// pools.push(Color::White, Piece::new(Color::Black, PieceKind::Pawn));
    /// pools.push(Color::White, Piece::new(Color::Black, PieceKind::Rook));
    /// assert_eq!(pools.stack_offset(Color::White, 0.5), 1.0);
    /// ```
    #[inline(always)]
    pub fn stack_offset(&self, capturer: Color, spacing: f32) -> f32 {
        spacing * self.count(capturer) as f32
    }

    /// Material balance of the captures, in pawns.
    ///
    /// Positive means White has taken more material, negative means Black has.
    pub fn material_advantage(&self) -> i32 {
        let score = |color: Color| -> i32 {
            self.captured_by(color)
                .iter()
                .map(|piece| piece.kind().value())
                .sum()
        };

        score(Color::White) - score(Color::Black)
    }

    /// Empties both pools.
    #[inline(always)]
    pub fn clear(&mut self) {
        for pool in &mut self.pools {
            pool.clear();
        }
    }
}

impl fmt::Display for CapturedPools {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in Color::all() {
            let pieces = self
                .captured_by(color)
                .iter()
                .map(|piece| piece.char().to_string())
                .collect::<Vec<_>>();

            let pieces = if pieces.is_empty() {
                String::from("(none)")
            } else {
                pieces.join(" ")
            };

            writeln!(f, "{color:>5} captured: {pieces}")?;
        }

        write!(f, "Material: {:+}", self.material_advantage())
    }
}
