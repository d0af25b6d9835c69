/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Colors, piece kinds, and pieces.
mod piece;

/// The 8x8 grid of pieces.
mod position;

/// Squares on the board.
mod square;

/// Sets of squares, as produced by move generation.
mod squareset;

/// Layout constants.
mod utils;

pub use piece::*;
pub use position::*;
pub use square::*;
pub use squareset::*;
pub use utils::*;
