//! Tests for the game engine and its turn state machine.

use tictactoe::{Board, Game, GameStatus, MoveError, Player, Position, Square};

fn play_all(game: &mut Game, cells: &[u8]) -> GameStatus {
    let mut status = game.status();
    for cell in cells {
        status = game.play_number(*cell).expect("Valid move");
    }
    status
}

#[test]
fn test_new_game_is_empty_with_x_to_move() {
    let game = Game::new();
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.status(), GameStatus::AwaitingMove(Player::X));
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.last_move(), None);
}

#[test]
fn test_occupied_cell_rejected_for_every_position() {
    for pos in Position::ALL {
        let mut board = Board::new();
        assert_eq!(board.attempt_move(pos.number(), Player::X), Ok(pos));

        let before = board.clone();
        let result = board.attempt_move(pos.number(), Player::O);
        assert_eq!(result, Err(MoveError::SquareOccupied(pos)));
        assert_eq!(board, before);
        assert_eq!(board.get(pos), Square::Occupied(Player::X));
    }
}

#[test]
fn test_invalid_cell_numbers_rejected() {
    let mut board = Board::new();
    for cell in [0, 10, 42, u8::MAX] {
        assert_eq!(
            board.attempt_move(cell, Player::X),
            Err(MoveError::InvalidPosition(cell))
        );
    }
    assert_eq!(board, Board::new());
}

#[test]
fn test_players_alternate() {
    let mut game = Game::new();
    assert_eq!(
        game.play(Position::Center),
        Ok(GameStatus::AwaitingMove(Player::O))
    );
    assert_eq!(
        game.play(Position::TopLeft),
        Ok(GameStatus::AwaitingMove(Player::X))
    );
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::O));
    assert_eq!(game.move_count(), 2);
}

#[test]
fn test_rejected_move_keeps_turn() {
    let mut game = Game::new();
    game.play(Position::Center).unwrap();

    let before = game.clone();
    assert_eq!(
        game.play(Position::Center),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(game, before);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_main_diagonal_win() {
    let mut game = Game::new();
    // X: 1, 5, 9 with O on 2 and 3 in between
    let status = play_all(&mut game, &[1, 2, 5, 3, 9]);

    assert_eq!(status, GameStatus::Won(Player::X));
    assert!(game.is_winner(Player::X));
    assert!(!game.is_winner(Player::O));
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_o_can_win() {
    let mut game = Game::new();
    // O takes the middle column
    let status = play_all(&mut game, &[1, 2, 3, 5, 4, 8]);
    assert_eq!(status, GameStatus::Won(Player::O));
    assert_eq!(status.winner(), Some(Player::O));
}

#[test]
fn test_draw() {
    let mut game = Game::new();
    // X O X / X O O / O X X
    let status = play_all(&mut game, &[1, 2, 3, 5, 4, 6, 8, 7, 9]);

    assert_eq!(status, GameStatus::Draw);
    assert!(game.is_board_full());
    assert!(!game.is_winner(Player::X));
    assert!(!game.is_winner(Player::O));
    assert_eq!(status.winner(), None);
}

#[test]
fn test_win_on_last_cell_is_not_a_draw() {
    let mut game = Game::new();
    // X O X / O X O / O X X - X completes the diagonal with the ninth mark
    let status = play_all(&mut game, &[1, 2, 3, 4, 5, 6, 8, 7, 9]);
    assert!(game.is_board_full());
    assert_eq!(status, GameStatus::Won(Player::X));
}

#[test]
fn test_moves_rejected_after_game_over() {
    let mut game = Game::new();
    play_all(&mut game, &[1, 4, 2, 5, 3]);

    let before = game.clone();
    assert_eq!(game.play(Position::BottomRight), Err(MoveError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = Game::new();
    play_all(&mut game, &[5, 1, 9]);
    game.reset();
    assert_eq!(game, Game::new());

    play_all(&mut game, &[1, 4, 2, 5, 3]);
    assert!(game.status().is_over());
    game.reset();
    assert_eq!(game, Game::new());
    assert_eq!(game.status(), GameStatus::AwaitingMove(Player::X));
}

#[test]
fn test_last_move_tracks_player_and_position() {
    let mut game = Game::new();
    game.play(Position::Center).unwrap();
    game.play(Position::BottomLeft).unwrap();

    let last = game.last_move().expect("A move was made");
    assert_eq!(last.player, Player::O);
    assert_eq!(last.position, Position::BottomLeft);
    assert_eq!(last.to_string(), "O -> Bottom-left");
}

#[test]
fn test_status_messages() {
    assert_eq!(GameStatus::AwaitingMove(Player::O).to_string(), "Player O's turn");
    assert_eq!(GameStatus::Won(Player::X).to_string(), "X has won the game!");
    assert_eq!(GameStatus::Draw.to_string(), "The game is a tie!");
}

#[test]
fn test_game_serializes_board_and_turn() {
    let mut game = Game::new();
    game.play(Position::Center).unwrap();

    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["current_player"], "O");
    assert_eq!(json["board"]["squares"][4], serde_json::json!({ "Occupied": "X" }));
    assert_eq!(json["board"]["squares"][0], "Empty");
}
