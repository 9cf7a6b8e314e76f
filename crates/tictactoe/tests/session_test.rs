//! Tests for game sessions driven the way a UI layer drives them.

use tictactoe::{GameError, GameSession, Marker, MatchStatus, Outcome, Player, TurnOutcome};

#[test]
fn test_session_lifecycle() {
    let mut session = GameSession::new();
    assert_eq!(session.game().status(), &MatchStatus::NotStarted);

    session.start_with_names("Ada", "").unwrap();
    let players = session.game().players().expect("players assigned");
    assert_eq!(players[0].name(), "Ada");
    assert_eq!(players[1].name(), "Player O");

    for (row, column) in [(1, 1), (0, 0), (2, 0), (0, 2)] {
        session.take_turn(row, column).unwrap();
    }
    match session.take_turn(0, 2) {
        Err(GameError::CellOccupied { row: 0, column: 2 }) => {}
        other => panic!("Expected occupied cell, got {other:?}"),
    }

    // The rejected move leaves X to act again.
    match session.take_turn(0, 1) {
        Ok(TurnOutcome::Continue { next, .. }) => assert_eq!(next.marker(), Marker::O),
        other => panic!("Expected the match to continue, got {other:?}"),
    }
    session.take_turn(2, 1).unwrap();
    session.take_turn(1, 0).unwrap();
    session.take_turn(2, 2).unwrap();

    assert_eq!(session.render().filled, 8);
}

#[test]
fn test_independent_sessions() {
    let mut first = GameSession::new();
    let mut second = GameSession::new();
    first.start_with_names("", "").unwrap();
    second.start_with_names("", "").unwrap();

    first.take_turn(1, 1).unwrap();

    assert!(second.board().is_empty_at(1, 1));
    assert_eq!(second.game().current_turn(), 1);
}

#[test]
fn test_reset_twice_matches_reset_once() {
    let mut session = GameSession::replay(
        Player::new(Marker::X),
        Player::new(Marker::O),
        &[(0, 0), (1, 1), (0, 1)],
    )
    .unwrap();

    session.reset();
    let once = session.clone();
    session.reset();

    assert_eq!(session, once);
    assert_eq!(session, GameSession::new());
}

#[test]
fn test_replay_to_draw() {
    let session = GameSession::replay(
        Player::new(Marker::X),
        Player::new(Marker::O),
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (2, 1),
            (1, 2),
            (2, 2),
        ],
    )
    .unwrap();

    assert_eq!(session.game().status(), &MatchStatus::Finished(Outcome::Draw));
    assert!(session.render().full);
}

#[test]
fn test_replay_past_the_end_is_rejected() {
    let result = GameSession::replay(
        Player::new(Marker::X),
        Player::new(Marker::O),
        &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (2, 2)],
    );
    assert_eq!(result, Err(GameError::NotInProgress));
}

#[test]
fn test_rename_through_session() {
    let mut session = GameSession::new();
    session.start_with_names("", "").unwrap();

    if let Some([_, second]) = session.game_mut().players_mut() {
        second.set_name("Grace");
    }

    assert_eq!(
        session
            .game()
            .player_for_marker(Marker::O)
            .map(|p| p.name().as_str()),
        Some("Grace")
    );
}
