/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::{Color, Piece, Square};

/// Errors raised by the board and the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// Coordinates that do not name a square on the 8x8 board.
    #[error("Square ({file}, {rank}) is outside the board: file and rank must be between [0, 7]")]
    OutOfRange { file: i8, rank: i8 },

    /// A move that was refused. The board is left untouched.
    #[error("Illegal move: {0}")]
    IllegalMove(#[from] Rejection),
}

/// Why [`crate::commit_move`] refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// There is no piece on the origin square.
    #[error("there is no piece on {0}")]
    EmptyOrigin(Square),

    /// The piece on the origin square does not belong to the side to move.
    #[error("it is {to_move}'s turn, but the piece belongs to {mover}")]
    NotYourTurn { mover: Color, to_move: Color },

    /// The destination is not among the piece's legal destinations.
    #[error("{piece:?} on {from} cannot move to {to}")]
    Unreachable {
        piece: Piece,
        from: Square,
        to: Square,
    },

    /// The destination holds a piece of the mover's own team.
    #[error("{0} is occupied by a friendly piece")]
    OwnPiece(Square),
}
