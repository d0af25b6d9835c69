/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::Color;

/// Whose turn it is, and whether that is being enforced.
///
/// With enforcement off, any piece may move at any time and the side to move never changes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TurnState {
    /// The side to move.
    side_to_move: Color,

    /// Number of moves accepted since the game began.
    plies: u32,

    /// Whether moves are restricted to the side to move.
    enforced: bool,
}

impl TurnState {
    /// Creates a new [`TurnState`] with White to move.
    ///
    /// # Example
    /// ```
    /// # use tilechess::{Color, TurnState};
    /// let turn = TurnState::new(true);
    /// assert_eq!(turn.side_to_move(), Color::White);
    /// assert_eq!(turn.plies(), 0);
    /// ```
    #[inline(always)]
    pub const fn new(enforced: bool) -> Self {
        Self::with_side_to_move(Color::White, enforced)
    }

    /// Creates a new [`TurnState`] with `side_to_move` to move.
    #[inline(always)]
    pub const fn with_side_to_move(side_to_move: Color, enforced: bool) -> Self {
        Self {
            side_to_move,
            plies: 0,
            enforced,
        }
    }

    /// Returns the side to move.
    #[inline(always)]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the number of moves accepted so far.
    #[inline(always)]
    pub const fn plies(&self) -> u32 {
        self.plies
    }

    /// Returns `true` if only the side to move may move.
    #[inline(always)]
    pub const fn is_enforced(&self) -> bool {
        self.enforced
    }

    /// Turns enforcement on or off. The side to move is left as-is.
    #[inline(always)]
    pub fn set_enforced(&mut self, enforced: bool) {
        self.enforced = enforced;
    }

    /// Returns `true` if a piece of `color` may move now.
    #[inline(always)]
    pub const fn may_move(&self, color: Color) -> bool {
        !self.enforced || self.side_to_move as u8 == color as u8
    }

    /// Records an accepted move, handing the turn to the opponent when enforced.
    #[inline(always)]
    pub fn advance(&mut self) {
        self.plies = self.plies.saturating_add(1);
        if self.enforced {
            self.side_to_move = self.side_to_move.opponent();
        }
    }
}

impl Default for TurnState {
    /// White to move, with turns enforced.
    #[inline(always)]
    fn default() -> Self {
        Self::new(true)
    }
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enforced {
            write!(f, "{} to move (ply {})", self.side_to_move, self.plies)
        } else {
            write!(f, "free play (ply {})", self.plies)
        }
    }
}
