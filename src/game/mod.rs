/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use anyhow::Result;
use tracing::info;

use crate::{commit_move, legal_destinations, Board, Color, MoveOutcome, Square, SquareSet};

/// Pieces taken by each team.
mod captured;

/// Side to move.
mod turn;

pub use captured::*;
pub use turn::*;

/// Settings for a [`Game`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GameConfig {
    /// If set, only the side to move may move, and the turn alternates after every move.
    pub enforce_turns: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            enforce_turns: true,
        }
    }
}

/// Creates the opening layout with White to move and turns enforced.
///
/// # Example
/// ```
/// # use tilechess::{initialize, Color};
/// let (board, turn) = initialize();
/// assert_eq!(board.count(), 32);
/// assert_eq!(turn.side_to_move(), Color::White);
/// ```
#[inline(always)]
pub fn initialize() -> (Board, TurnState) {
    (Board::opening(), TurnState::default())
}

/// Starts a new game in place: empties both captured pools, removes every piece,
/// re-seeds the opening layout, and hands the move back to White.
///
/// Whether turns are enforced is kept.
pub fn reset(board: &mut Board, turn: &mut TurnState, captured: &mut CapturedPools) {
    captured.clear();
    *board = Board::opening();
    *turn = TurnState::new(turn.is_enforced());
    info!("board reset to the opening layout");
}

/// A single game session: one [`Board`], its [`TurnState`], and the captured pieces.
///
/// This is the only writer of its board. Hosts ask it for [`Game::legal_destinations`] to decide what to highlight,
/// and call [`Game::commit_move`] when a piece is dropped.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Game {
    board: Board,
    turn: TurnState,
    captured: CapturedPools,

    /// The team that captured the first King, if any.
    winner: Option<Color>,
}

impl Game {
    /// Creates a new [`Game`] in the opening layout.
    ///
    /// # Example
    /// ```
    /// # use tilechess::{Color, Game, GameConfig};
    /// let game = Game::new(GameConfig::default());
    /// assert_eq!(game.side_to_move(), Color::White);
    /// assert_eq!(game.board().count(), 32);
    /// ```
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::opening(),
            turn: TurnState::new(config.enforce_turns),
            captured: CapturedPools::new(),
            winner: None,
        }
    }

    /// Creates a new [`Game`] from a FEN piece placement, with `side_to_move` to move.
    ///
    /// # Example
    /// ```
    /// # use tilechess::{Color, Game, GameConfig, Square};
    /// let game = Game::from_placement("4k3/8/8/8/8/8/8/4K3", Color::Black, GameConfig::default()).unwrap();
    /// assert_eq!(game.side_to_move(), Color::Black);
    /// assert_eq!(game.board().king(Color::Black), Some(Square::E8));
    /// ```
    pub fn from_placement(placement: &str, side_to_move: Color, config: GameConfig) -> Result<Self> {
        Ok(Self {
            board: Board::from_placement(placement)?,
            turn: TurnState::with_side_to_move(side_to_move, config.enforce_turns),
            captured: CapturedPools::new(),
            winner: None,
        })
    }

    /// Returns the current [`Board`].
    #[inline(always)]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a mutable reference to the current [`Board`], for setting up positions.
    ///
    /// No legality checks are made on edits through this reference.
    #[inline(always)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Returns the current [`TurnState`].
    #[inline(always)]
    pub const fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Returns the side to move.
    #[inline(always)]
    pub const fn side_to_move(&self) -> Color {
        self.turn.side_to_move()
    }

    /// Returns the pieces captured so far.
    #[inline(always)]
    pub const fn captured(&self) -> &CapturedPools {
        &self.captured
    }

    /// Returns the team that captured a King first, if that has happened.
    #[inline(always)]
    pub const fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Returns the active configuration.
    #[inline(always)]
    pub const fn config(&self) -> GameConfig {
        GameConfig {
            enforce_turns: self.turn.is_enforced(),
        }
    }

    /// Applies a new configuration without disturbing the position.
    #[inline(always)]
    pub fn set_config(&mut self, config: GameConfig) {
        self.turn.set_enforced(config.enforce_turns);
    }

    /// Returns every square the piece on `origin` may move to. See [`legal_destinations`].
    #[inline(always)]
    pub fn legal_destinations(&self, origin: Square) -> SquareSet {
        legal_destinations(&self.board, origin)
    }

    /// Attempts to move the piece on `from` to `to`. See [`commit_move`].
    ///
    /// Moves remain allowed after a King has been captured; the first winner is remembered.
    pub fn commit_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        let outcome = commit_move(
            &mut self.board,
            &mut self.turn,
            &mut self.captured,
            from,
            to,
        );

        if let Some(winner) = outcome.winner() {
            self.winner.get_or_insert(winner);
        }

        outcome
    }

    /// Starts over from the opening layout, keeping the configuration. See [`reset`].
    pub fn reset(&mut self) {
        reset(&mut self.board, &mut self.turn, &mut self.captured);
        self.winner = None;
    }
}

impl Default for Game {
    #[inline(always)]
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        write!(f, "{}", self.turn)?;
        if let Some(winner) = self.winner {
            write!(f, "\n{winner} has captured the King")?;
        }
        Ok(())
    }
}
