//! Tests for the one-shot subcommands.

use noughts::{best_move_report, render, self_play, status_report};
use noughts_core::{GameStatus, Player};

#[test]
fn test_best_move_for_x_side() {
    // X X . / O O . / . . .
    let report = best_move_report("XX.OO....", Player::X).unwrap();
    assert_eq!(report.cell, 2);
    assert_eq!(report.scores[2], Some(-1));
}

#[test]
fn test_best_move_json_shape() {
    let report = best_move_report("....X....", Player::O).unwrap();
    let json = render(&report, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["cell"], 0);
    assert_eq!(value["player"], "O");
    assert_eq!(value["scores"].as_array().unwrap().len(), 9);
    assert!(value["scores"][4].is_null());
}

#[test]
fn test_status_of_in_progress_board() {
    assert_eq!(status_report("X...O....").unwrap(), GameStatus::InProgress);
}

#[test]
fn test_self_play_text_transcript() {
    let text = render(&self_play().unwrap(), false).unwrap();
    assert!(text.starts_with(" 1. X -> Top-left"));
    assert!(text.ends_with("Result: Draw"));
}
