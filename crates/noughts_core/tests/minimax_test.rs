//! Tests for minimax move selection.

use noughts_core::{
    Board, DRAW, GameSession, GameStatus, NoLegalMove, O_WINS, Player, Square, X_WINS, best_move,
    best_move_for_o, evaluate, move_scores, status_of,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_reply_to_center_opening_is_first_corner() {
    let board = board("....X....");
    assert_eq!(best_move_for_o(&board), Ok(0));

    let scores = move_scores(&board, Player::O);
    for corner in [0, 2, 6, 8] {
        assert_eq!(scores[corner], Some(DRAW), "corner {corner}");
    }
    for edge in [1, 3, 5, 7] {
        assert_eq!(scores[edge], Some(X_WINS), "edge {edge}");
    }
    assert_eq!(scores[4], None);
}

#[test]
fn test_near_full_board_win_for_o() {
    let mut board = board("XOXXOO..O");
    assert_eq!(best_move(&board, Player::O), Ok(7));

    board.set(7, Square::Occupied(Player::O)).unwrap();
    assert_eq!(status_of(&board), GameStatus::Won(Player::O));
}

#[test]
fn test_drawn_board_has_no_legal_move() {
    let board = board("XOXOXOOXO");
    assert_eq!(status_of(&board), GameStatus::Draw);
    assert_eq!(best_move(&board, Player::O), Err(NoLegalMove));
    assert_eq!(best_move(&board, Player::X), Err(NoLegalMove));
}

#[test]
fn test_tie_break_lowest_index_on_empty_board() {
    let empty = Board::new();
    assert!(move_scores(&empty, Player::O).iter().all(|s| *s == Some(DRAW)));
    assert_eq!(best_move(&empty, Player::O), Ok(0));
    assert_eq!(best_move(&empty, Player::X), Ok(0));
}

#[test]
fn test_repeated_calls_are_deterministic() {
    let position = board("X...O...X");
    let first = best_move(&position, Player::O);
    for _ in 0..5 {
        assert_eq!(best_move(&position, Player::O), first);
    }
    assert_eq!(position, board("X...O...X"));
}

#[test]
fn test_win_depth_does_not_matter() {
    // O X X / . O . / X . .  O wins at once on 8, but 3 forks and wins later.
    let board = board("OXX.O.X..");
    let scores = move_scores(&board, Player::O);
    assert_eq!(scores[3], Some(O_WINS));
    assert_eq!(scores[8], Some(O_WINS));

    let cell = best_move(&board, Player::O).unwrap();
    assert_eq!(cell, 3);

    let mut after = board;
    after.set(cell, Square::Occupied(Player::O)).unwrap();
    assert_eq!(status_of(&after), GameStatus::InProgress);
}

#[test]
fn test_self_play_is_a_draw() {
    let mut session = GameSession::new();
    while !session.is_over() {
        let player = session.to_move();
        let cell = best_move(session.board(), player).unwrap();
        session.apply_move(cell, player).unwrap();
    }
    assert_eq!(session.status(), GameStatus::Draw);
}

#[test]
fn test_o_never_loses_against_any_x() {
    fn explore(session: GameSession) {
        if session.is_over() {
            assert_ne!(
                session.status(),
                GameStatus::Won(Player::X),
                "O lost: {:?}",
                session.history()
            );
            return;
        }
        match session.to_move() {
            Player::X => {
                for cell in session.board().empty_cells() {
                    explore(session.with_move(cell, Player::X).unwrap());
                }
            }
            Player::O => {
                let cell = best_move(session.board(), Player::O).unwrap();
                explore(session.with_move(cell, Player::O).unwrap());
            }
        }
    }

    explore(GameSession::new());
}

#[test]
fn test_evaluate_matches_best_score() {
    let board = board("X...O....");
    let best = move_scores(&board, Player::X)
        .iter()
        .flatten()
        .copied()
        .min()
        .unwrap();
    assert_eq!(evaluate(&board, Player::X), best);
}
