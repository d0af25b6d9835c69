/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use tracing::{debug, info, trace};

use crate::{legal_destinations, Board, CapturedPools, Color, Rejection, RulesError, Square, TurnState};

/// The result of asking the rules engine to commit a move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// The move was made.
    Accepted,

    /// The move was made and captured the opposing King. Holds the capturing team.
    AcceptedWithCheckmate(Color),

    /// The move was refused and nothing changed.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Returns `true` if the move was made.
    #[inline(always)]
    pub const fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }

    /// Returns the winning team if this move captured a King.
    #[inline(always)]
    pub const fn winner(&self) -> Option<Color> {
        match self {
            Self::AcceptedWithCheckmate(winner) => Some(*winner),
            _ => None,
        }
    }

    /// Converts a rejection into [`RulesError::IllegalMove`], passing accepted outcomes through.
    #[inline(always)]
    pub fn into_result(self) -> Result<Self, RulesError> {
        match self {
            Self::Rejected(reason) => Err(RulesError::IllegalMove(reason)),
            accepted => Ok(accepted),
        }
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::AcceptedWithCheckmate(winner) => write!(f, "accepted: checkmate, {winner} wins"),
            Self::Rejected(reason) => write!(f, "rejected: {reason}"),
        }
    }
}

/// Validates and performs the move `from -> to`.
///
/// Refused moves return [`MoveOutcome::Rejected`] and leave `board`, `turn`, and `captured` untouched.
/// Otherwise, any enemy piece on `to` is removed and added to the capturing side's pool,
/// the mover is written to `to`, `from` is cleared, and `turn` advances.
///
/// Capturing a King yields [`MoveOutcome::AcceptedWithCheckmate`]. The turn still passes to the opponent.
///
/// # Example
/// ```
/// # use tilechess::{commit_move, Board, CapturedPools, MoveOutcome, Square, TurnState, Color};
/// let mut board = Board::opening();
/// let mut turn = TurnState::new(true);
/// let mut captured = CapturedPools::new();
///
/// let outcome = commit_move(&mut board, &mut turn, &mut captured, Square::E2, Square::E4);
/// assert_eq!(outcome, MoveOutcome::Accepted);
/// assert!(board.get(Square::E2).is_none());
/// assert!(board.get(Square::E4).is_some());
/// assert_eq!(turn.side_to_move(), Color::Black);
/// ```
pub fn commit_move(
    board: &mut Board,
    turn: &mut TurnState,
    captured: &mut CapturedPools,
    from: Square,
    to: Square,
) -> MoveOutcome {
    let Some(mover) = board.get(from) else {
        return reject(Rejection::EmptyOrigin(from));
    };
    let color = mover.color();

    if !turn.may_move(color) {
        return reject(Rejection::NotYourTurn {
            mover: color,
            to_move: turn.side_to_move(),
        });
    }

    if !legal_destinations(board, from).contains(to) {
        return reject(Rejection::Unreachable {
            piece: mover,
            from,
            to,
        });
    }

    let victim = board.get(to);
    if victim.is_some_and(|piece| piece.color() == color) {
        return reject(Rejection::OwnPiece(to));
    }

    // Nothing can fail past this point
    board.take(from);
    board.place(mover, to);
    turn.advance();

    let Some(victim) = victim else {
        debug!(%from, %to, piece = ?mover, "move accepted");
        return MoveOutcome::Accepted;
    };

    captured.push(color, victim);
    debug!(%from, %to, piece = ?mover, captured = ?victim, "move accepted");

    if victim.is_king() {
        info!(winner = %color, square = %to, "king captured");
        MoveOutcome::AcceptedWithCheckmate(color)
    } else {
        MoveOutcome::Accepted
    }
}

#[inline(always)]
fn reject(reason: Rejection) -> MoveOutcome {
    trace!(%reason, "move rejected");
    MoveOutcome::Rejected(reason)
}
