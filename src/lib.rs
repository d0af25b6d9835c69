/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Squares, pieces, and the board that holds them.
mod board;

/// Command-line arguments and console commands.
mod cli;

/// Line-oriented host that drives a game from `stdin`.
mod console;

/// Error types for the board and the rules engine.
mod error;

/// Game sessions: turn order and captured pieces.
mod game;

/// Move generation and move commitment.
mod rules;

pub use board::*;
pub use cli::*;
pub use console::*;
pub use error::*;
pub use game::*;
pub use rules::*;
