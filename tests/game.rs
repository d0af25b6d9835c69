/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use tilechess::{
    commit_move, initialize, legal_destinations, reset, Board, CapturedPools, Color, Game,
    GameConfig, MoveOutcome, Piece, PieceKind, Rejection, RulesError, Square, TurnState,
    NUM_OPENING_PIECES, PLACEMENT_STARTPOS,
};

/// Every `(from, to)` pair the side to move could play, in square order.
fn all_moves(game: &Game) -> Vec<(Square, Square)> {
    game.board()
        .pieces()
        .filter(|(_, piece)| piece.color() == game.side_to_move())
        .flat_map(|(from, _)| game.legal_destinations(from).into_iter().map(move |to| (from, to)))
        .collect()
}

#[test]
fn test_initialize_and_reset_agree() {
    let (board, turn) = initialize();
    assert_eq!(board, Board::opening());
    assert_eq!(board.to_placement(), PLACEMENT_STARTPOS);
    assert_eq!(board.count(), NUM_OPENING_PIECES);
    assert_eq!(turn.side_to_move(), Color::White);

    let mut board = board;
    let mut turn = turn;
    let mut captured = CapturedPools::new();

    // Scramble the position, including a capture
    for (from, to) in [
        (Square::E2, Square::E4),
        (Square::D7, Square::D5),
        (Square::E4, Square::D5),
    ] {
        assert!(commit_move(&mut board, &mut turn, &mut captured, from, to).is_accepted());
    }
    assert_eq!(captured.count(Color::White), 1);
    assert_eq!(turn.side_to_move(), Color::Black);

    reset(&mut board, &mut turn, &mut captured);
    assert_eq!((board, turn), initialize());
    assert_eq!(captured, CapturedPools::new());
}

#[test]
fn test_opening_layout() {
    let board = Board::opening();
    let back = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    for (file, kind) in back.into_iter().enumerate() {
        let file = file as i8;
        let at = |rank| board.get(Square::new(file, rank).unwrap());

        assert_eq!(at(0), Some(Piece::new(Color::White, kind)));
        assert_eq!(at(1), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert_eq!(at(6), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        assert_eq!(at(7), Some(Piece::new(Color::Black, kind)));

        for rank in 2..6 {
            assert_eq!(at(rank), None);
        }
    }
}

#[test]
fn test_commit_moves_piece_to_its_new_slot() {
    let mut game = Game::default();
    let knight = game.board().get(Square::G1).unwrap();

    assert_eq!(game.commit_move(Square::G1, Square::F3), MoveOutcome::Accepted);
    assert_eq!(game.board().get(Square::F3), Some(knight));
    assert_eq!(game.board().get(Square::G1), None);
    assert_eq!(game.board().count(), 32);
}

#[test]
fn test_capture_fills_the_capturers_pool() {
    let mut game =
        Game::from_placement("4k3/8/8/3p4/4N3/8/8/4K3", Color::White, GameConfig::default())
            .unwrap();

    assert_eq!(game.commit_move(Square::E4, Square::D6), MoveOutcome::Accepted);
    assert_eq!(game.commit_move(Square::D5, Square::D4), MoveOutcome::Accepted);
    assert_eq!(game.commit_move(Square::D6, Square::E8), MoveOutcome::AcceptedWithCheckmate(Color::White));

    assert_eq!(
        game.captured().captured_by(Color::White),
        &[Piece::new(Color::Black, PieceKind::King)]
    );
    assert!(game.captured().captured_by(Color::Black).is_empty());
}

#[test]
fn test_king_capture_signals_checkmate() {
    let mut game =
        Game::from_placement("4k3/8/8/8/8/8/8/4R2K", Color::White, GameConfig::default())
            .unwrap();

    let outcome = game.commit_move(Square::E1, Square::E8);
    assert_eq!(outcome, MoveOutcome::AcceptedWithCheckmate(Color::White));
    assert_eq!(outcome.winner(), Some(Color::White));

    assert_eq!(game.board().king(Color::Black), None);
    assert_eq!(
        game.board().get(Square::E8),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(game.winner(), Some(Color::White));

    // The turn still passes after the game-ending capture
    assert_eq!(game.side_to_move(), Color::Black);
}

#[test]
fn test_first_winner_is_kept() {
    let mut game =
        Game::from_placement("k7/8/8/8/8/8/8/RK5r", Color::White, GameConfig::default())
            .unwrap();

    assert_eq!(game.commit_move(Square::A1, Square::A8), MoveOutcome::AcceptedWithCheckmate(Color::White));
    assert_eq!(game.commit_move(Square::H1, Square::B1), MoveOutcome::AcceptedWithCheckmate(Color::Black));
    assert_eq!(game.winner(), Some(Color::White));

    game.reset();
    assert_eq!(game.winner(), None);
}

#[test]
fn test_turns_strictly_alternate() {
    let mut game = Game::default();
    let mut seed: u64 = 0x5eed;

    for n in 0..60u32 {
        let expected = if n % 2 == 0 { Color::White } else { Color::Black };
        assert_eq!(game.side_to_move(), expected, "after {n} moves");
        assert_eq!(game.turn().plies(), n);

        let moves = all_moves(&game);
        if moves.is_empty() {
            break;
        }

        // Cheap deterministic pseudo-random pick
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let (from, to) = moves[(seed >> 33) as usize % moves.len()];

        let mover = game.board().get(from).unwrap();
        assert!(game.commit_move(from, to).is_accepted(), "{from}{to}");
        assert_eq!(game.board().get(to), Some(mover));
        assert_eq!(game.board().get(from), None);
    }
}

#[test]
fn test_rejected_moves_change_nothing() {
    let mut game = Game::default();
    game.commit_move(Square::E2, Square::E4);
    game.commit_move(Square::D7, Square::D5);

    let before = game.clone();

    for from in Square::iter() {
        let legal = game.legal_destinations(from);
        for to in Square::iter().filter(|&to| !legal.contains(to)) {
            let outcome = game.commit_move(from, to);
            assert!(matches!(outcome, MoveOutcome::Rejected(_)), "{from}{to}");
            assert_eq!(game, before, "{from}{to} changed the game");
        }
    }
}

#[test]
fn test_rejection_reasons() {
    let mut game = Game::default();

    assert_eq!(
        game.commit_move(Square::E4, Square::E5),
        MoveOutcome::Rejected(Rejection::EmptyOrigin(Square::E4))
    );

    assert_eq!(
        game.commit_move(Square::E7, Square::E5),
        MoveOutcome::Rejected(Rejection::NotYourTurn {
            mover: Color::Black,
            to_move: Color::White
        })
    );

    let rook = Piece::new(Color::White, PieceKind::Rook);
    assert_eq!(
        game.commit_move(Square::A1, Square::A2),
        MoveOutcome::Rejected(Rejection::Unreachable {
            piece: rook,
            from: Square::A1,
            to: Square::A2
        })
    );

    assert_eq!(
        game.commit_move(Square::E2, Square::E2).into_result(),
        Err(RulesError::IllegalMove(Rejection::Unreachable {
            piece: Piece::new(Color::White, PieceKind::Pawn),
            from: Square::E2,
            to: Square::E2
        }))
    );
}

#[test]
fn test_free_play_ignores_turn_order() {
    let mut board = Board::opening();
    let mut turn = TurnState::new(false);
    let mut captured = CapturedPools::new();

    let outcome = commit_move(&mut board, &mut turn, &mut captured, Square::E7, Square::E5);
    assert_eq!(outcome, MoveOutcome::Accepted);
    let outcome = commit_move(&mut board, &mut turn, &mut captured, Square::D7, Square::D5);
    assert_eq!(outcome, MoveOutcome::Accepted);

    assert_eq!(turn.side_to_move(), Color::White);
    assert_eq!(turn.plies(), 2);
}

#[test]
fn test_toggling_turns_mid_game() {
    let mut game = Game::default();
    game.set_config(GameConfig {
        enforce_turns: false,
    });
    assert!(game.commit_move(Square::B1, Square::C3).is_accepted());
    assert!(game.commit_move(Square::C3, Square::D5).is_accepted());
    assert_eq!(game.side_to_move(), Color::White);

    game.set_config(GameConfig::default());
    assert!(game.commit_move(Square::D5, Square::C7).is_accepted());
    assert_eq!(game.side_to_move(), Color::Black);
    assert_eq!(game.captured().count(Color::White), 1);
    assert_eq!(game.captured().material_advantage(), 1);
}

#[test]
fn test_moves_match_free_function() {
    let game = Game::default();
    for square in Square::iter() {
        assert_eq!(
            game.legal_destinations(square),
            legal_destinations(game.board(), square)
        );
    }
}
