/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::{Board, Color, PieceKind, Square, SquareSet};

/// Unit steps along files and ranks.
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

/// Unit steps along the four diagonals.
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Every unit step a King (or a Queen's ray) can take.
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// The eight "L" jumps of a Knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

/// Computes every square the piece on `origin` may move to.
///
/// Moves are pseudo-legal: they respect how each piece moves and which squares are occupied,
/// but never ask whether the mover's own King is left attacked.
/// A destination is valid when it is empty or holds an enemy piece; a friendly piece blocks it.
///
/// Returns an empty set if `origin` is empty.
///
/// # Example
/// ```
/// # use tilechess::{legal_destinations, Board, Square};
/// let board = Board::opening();
/// let moves = legal_destinations(&board, Square::G1);
/// assert_eq!(moves.len(), 2);
/// assert!(moves.contains(Square::F3));
/// assert!(moves.contains(Square::H3));
/// ```
pub fn legal_destinations(board: &Board, origin: Square) -> SquareSet {
    let Some(piece) = board.get(origin) else {
        return SquareSet::EMPTY;
    };

    let color = piece.color();
    match piece.kind() {
        PieceKind::Pawn => pawn_destinations(board, origin, color),
        PieceKind::Knight => step_destinations(board, origin, color, &KNIGHT_OFFSETS),
        PieceKind::Bishop => ray_destinations(board, origin, color, &DIAGONAL_DIRECTIONS),
        PieceKind::Rook => ray_destinations(board, origin, color, &ORTHOGONAL_DIRECTIONS),
        PieceKind::Queen => ray_destinations(board, origin, color, &ALL_DIRECTIONS),
        PieceKind::King => step_destinations(board, origin, color, &ALL_DIRECTIONS),
    }
}

/// Returns `true` if a piece of `color` may land on `square`: it is empty or holds an enemy.
#[inline(always)]
fn is_enemy_or_empty(board: &Board, square: Square, color: Color) -> bool {
    board.find(square) != Some(color)
}

/// Single jumps by each of `offsets`, as made by Knights and Kings.
///
/// Each offset is tried on its own; an off-board or friendly-occupied target is skipped.
fn step_destinations(
    board: &Board,
    origin: Square,
    color: Color,
    offsets: &[(i8, i8)],
) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(df, dr)| origin.offset(df, dr))
        .filter(|&to| is_enemy_or_empty(board, to, color))
        .collect()
}

/// Sliding moves along each of `directions`, as made by Bishops, Rooks, and Queens.
///
/// Each ray walks outward one square at a time and stops at the first occupied square.
/// That square is included if it holds an enemy, and excluded if it holds a friend.
fn ray_destinations(
    board: &Board,
    origin: Square,
    color: Color,
    directions: &[(i8, i8)],
) -> SquareSet {
    let mut moves = SquareSet::EMPTY;

    for &(df, dr) in directions {
        let mut current = origin;
        while let Some(next) = current.offset(df, dr) {
            match board.find(next) {
                None => moves.insert(next),
                Some(occupant) => {
                    if occupant != color {
                        moves.insert(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }

    moves
}

/// Returns the rank a Pawn of `color` starts on.
#[inline(always)]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// Pawn pushes and captures.
///
/// A Pawn pushes one square forward onto an empty square, or two from its start rank if both are empty.
/// It captures one square diagonally forward, and only onto an enemy.
fn pawn_destinations(board: &Board, origin: Square, color: Color) -> SquareSet {
    let mut moves = SquareSet::EMPTY;

    if let Some(single) = origin.forward_by(color, 1) {
        if board.is_empty_at(single) {
            moves.insert(single);

            if origin.rank() == pawn_start_rank(color) {
                if let Some(double) = origin.forward_by(color, 2) {
                    if board.is_empty_at(double) {
                        moves.insert(double);
                    }
                }
            }
        }
    }

    let forward = color.negation_multiplier();
    for df in [-1, 1] {
        if let Some(target) = origin.offset(df, forward) {
            if board.find(target) == Some(color.opponent()) {
                moves.insert(target);
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Piece;

    fn lone(kind: PieceKind, color: Color, square: Square) -> Board {
        let mut board = Board::new();
        board.place(Piece::new(color, kind), square);
        board
    }

    fn squares(names: &[&str]) -> SquareSet {
        names.iter().map(|s| s.parse::<Square>().unwrap()).collect()
    }

    #[test]
    fn test_empty_origin_has_no_moves() {
        assert!(legal_destinations(&Board::new(), Square::E4).is_empty());
    }

    #[test]
    fn test_knight_in_corner() {
        let board = lone(PieceKind::Knight, Color::White, Square::A1);
        assert_eq!(
            legal_destinations(&board, Square::A1),
            squares(&["b3", "c2"])
        );
    }

    #[test]
    fn test_knight_near_far_corner() {
        let board = lone(PieceKind::Knight, Color::Black, Square::H8);
        assert_eq!(
            legal_destinations(&board, Square::H8),
            squares(&["g6", "f7"])
        );

        let board = lone(PieceKind::Knight, Color::Black, Square::G7);
        assert_eq!(
            legal_destinations(&board, Square::G7),
            squares(&["e8", "e6", "f5", "h5"])
        );
    }

    #[test]
    fn test_knight_in_center() {
        let board = lone(PieceKind::Knight, Color::White, Square::D4);
        assert_eq!(legal_destinations(&board, Square::D4).len(), 8);
    }

    #[test]
    fn test_knight_blocked_by_friend_captures_enemy() {
        let mut board = lone(PieceKind::Knight, Color::White, Square::D4);
        board.place(Piece::new(Color::White, PieceKind::Pawn), Square::E6);
        board.place(Piece::new(Color::Black, PieceKind::Pawn), Square::C6);

        let moves = legal_destinations(&board, Square::D4);
        assert!(!moves.contains(Square::E6));
        assert!(moves.contains(Square::C6));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn test_rook_and_bishop_rays() {
        let board = lone(PieceKind::Rook, Color::White, Square::D4);
        assert_eq!(legal_destinations(&board, Square::D4).len(), 14);

        let board = lone(PieceKind::Bishop, Color::White, Square::D4);
        assert_eq!(legal_destinations(&board, Square::D4).len(), 13);

        let board = lone(PieceKind::Bishop, Color::White, Square::A1);
        assert_eq!(legal_destinations(&board, Square::A1).len(), 7);
    }

    #[test]
    fn test_king_steps() {
        let board = lone(PieceKind::King, Color::White, Square::E1);
        assert_eq!(
            legal_destinations(&board, Square::E1),
            squares(&["d1", "f1", "d2", "e2", "f2"])
        );

        let board = lone(PieceKind::King, Color::Black, Square::D5);
        assert_eq!(legal_destinations(&board, Square::D5).len(), 8);
    }

    #[test]
    fn test_pawn_pushes() {
        let board = lone(PieceKind::Pawn, Color::White, Square::E2);
        assert_eq!(
            legal_destinations(&board, Square::E2),
            squares(&["e3", "e4"])
        );

        let board = lone(PieceKind::Pawn, Color::White, Square::E3);
        assert_eq!(legal_destinations(&board, Square::E3), squares(&["e4"]));

        let board = lone(PieceKind::Pawn, Color::Black, Square::E7);
        assert_eq!(
            legal_destinations(&board, Square::E7),
            squares(&["e6", "e5"])
        );
    }

    #[test]
    fn test_pawn_blocked() {
        let mut board = lone(PieceKind::Pawn, Color::White, Square::E2);
        board.place(Piece::new(Color::Black, PieceKind::Knight), Square::E3);
        assert!(legal_destinations(&board, Square::E2).is_empty());

        let mut board = lone(PieceKind::Pawn, Color::White, Square::E2);
        board.place(Piece::new(Color::Black, PieceKind::Knight), Square::E4);
        assert_eq!(legal_destinations(&board, Square::E2), squares(&["e3"]));
    }

    #[test]
    fn test_pawn_captures_only_enemies_diagonally() {
        let mut board = lone(PieceKind::Pawn, Color::Black, Square::D5);
        board.place(Piece::new(Color::White, PieceKind::Rook), Square::C4);
        board.place(Piece::new(Color::Black, PieceKind::Rook), Square::E4);

        assert_eq!(
            legal_destinations(&board, Square::D5),
            squares(&["d4", "c4"])
        );
    }

    #[test]
    fn test_pawn_on_last_rank_is_stuck() {
        let board = lone(PieceKind::Pawn, Color::White, Square::A8);
        assert!(legal_destinations(&board, Square::A8).is_empty());

        let board = lone(PieceKind::Pawn, Color::Black, Square::H1);
        assert!(legal_destinations(&board, Square::H1).is_empty());
    }

    #[test]
    fn test_opening_position_mobility() {
        let board = Board::opening();
        let white_moves: usize = board
            .pieces()
            .filter(|(_, piece)| piece.color().is_white())
            .map(|(square, _)| legal_destinations(&board, square).len())
            .sum();

        // 16 pawn moves + 4 knight moves
        assert_eq!(white_moves, 20);
    }
}
