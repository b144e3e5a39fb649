//! Tests for application state: clicks, keys, dialog and reset.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe::{Game, GameStatus, Player, Position, Square};
use tictactoe_tui::{App, ClickTargets, Command, CursorMove};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// A 3x3 grid of 4x2 cells at the origin and a reset button below it.
fn grid_targets() -> ClickTargets {
    let mut targets = ClickTargets::new();
    for pos in Position::ALL {
        let x = pos.column() as u16 * 4;
        let y = pos.row() as u16 * 2;
        targets.set_cell(pos, Rect::new(x, y, 4, 2));
    }
    targets.set_reset(Rect::new(0, 8, 12, 3));
    targets
}

fn click_cells(app: &mut App, cells: &[u8]) {
    for cell in cells {
        let pos = Position::from_number(*cell).unwrap();
        app.click_cell(pos);
    }
}

#[test]
fn test_new_app_awaits_x() {
    let app = App::new(true);
    assert_eq!(app.game(), &Game::new());
    assert_eq!(app.dialog(), &None);
    assert_eq!(app.status_message(), "Player X's turn");
    assert!(!app.is_frozen());
    assert!(!app.should_quit());
}

#[test]
fn test_click_places_mark_and_reports_turn() {
    let mut app = App::new(true);
    app.click_cell(Position::Center);

    assert_eq!(app.game().board().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(app.status_message(), "X played Center. Player O's turn.");
    assert_eq!(*app.cursor(), Position::Center);
}

#[test]
fn test_click_on_taken_cell_is_refused() {
    let mut app = App::new(true);
    app.click_cell(Position::Center);
    app.click_cell(Position::Center);

    assert_eq!(app.game().board().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(app.game().current_player(), Player::O);
    assert_eq!(app.status_message(), "Center is already taken");
}

#[test]
fn test_win_opens_dialog_and_freezes_board() {
    let mut app = App::new(true);
    click_cells(&mut app, &[1, 2, 5, 3, 9]);

    let dialog = app.dialog().as_ref().expect("Dialog should be open");
    assert_eq!(dialog.title(), "Game Over");
    assert_eq!(dialog.message(), "X has won the game!");
    assert!(app.is_frozen());

    app.click_cell(Position::BottomLeft);
    assert!(app.game().board().is_empty(Position::BottomLeft));
}

#[test]
fn test_draw_opens_tie_dialog() {
    let mut app = App::new(true);
    click_cells(&mut app, &[1, 2, 3, 5, 4, 6, 8, 7, 9]);

    assert_eq!(app.game().status(), GameStatus::Draw);
    let dialog = app.dialog().as_ref().expect("Dialog should be open");
    assert_eq!(dialog.message(), "The game is a tie!");
}

#[test]
fn test_board_stays_frozen_after_dismiss() {
    let mut app = App::new(true);
    click_cells(&mut app, &[1, 4, 2, 5, 3]);

    app.handle_key(press(KeyCode::Esc));
    assert_eq!(app.dialog(), &None);
    assert!(app.is_frozen());

    app.click_cell(Position::BottomRight);
    assert!(app.game().board().is_empty(Position::BottomRight));
    assert_eq!(
        app.status_message(),
        "Game over. Click Reset or press R to play again."
    );
}

#[test]
fn test_reset_is_blocked_while_dialog_open() {
    let mut app = App::new(true);
    click_cells(&mut app, &[1, 4, 2, 5, 3]);

    app.apply(Command::Reset);
    assert!(app.dialog().is_some());
    assert!(app.game().status().is_over());

    app.apply(Command::Confirm);
    app.apply(Command::Reset);
    assert_eq!(app.game(), &Game::new());
    assert!(!app.is_frozen());
    assert_eq!(app.status_message(), "New game. Player X's turn.");
}

#[test]
fn test_keyboard_play() {
    let mut app = App::new(true);
    app.handle_key(press(KeyCode::Char('7')));
    assert_eq!(app.game().board().get(Position::BottomLeft), Square::Occupied(Player::X));

    app.handle_key(press(KeyCode::Up));
    assert_eq!(*app.cursor(), Position::MiddleLeft);
    app.handle_key(press(KeyCode::Enter));
    assert_eq!(app.game().board().get(Position::MiddleLeft), Square::Occupied(Player::O));
}

#[test]
fn test_cursor_frozen_while_dialog_open() {
    let mut app = App::new(true);
    click_cells(&mut app, &[1, 4, 2, 5, 3]);
    let cursor = *app.cursor();

    app.apply(Command::Cursor(CursorMove::Down));
    assert_eq!(*app.cursor(), cursor);
}

#[test]
fn test_quit() {
    let mut app = App::new(true);
    app.handle_key(press(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_mouse_click_plays_bound_cell() {
    let mut app = App::new(true);
    let targets = grid_targets();

    // Middle of the bottom-right cell
    app.handle_mouse(left_click(9, 5), &targets);
    assert_eq!(app.game().board().get(Position::BottomRight), Square::Occupied(Player::X));

    // Top-left corner pixel of the top-center cell
    app.handle_mouse(left_click(4, 0), &targets);
    assert_eq!(app.game().board().get(Position::TopCenter), Square::Occupied(Player::O));
}

#[test]
fn test_other_mouse_events_ignored() {
    let mut app = App::new(true);
    let targets = grid_targets();

    let mut event = left_click(0, 0);
    event.kind = MouseEventKind::Down(MouseButton::Right);
    app.handle_mouse(event, &targets);
    event.kind = MouseEventKind::Up(MouseButton::Left);
    app.handle_mouse(event, &targets);
    event.kind = MouseEventKind::Moved;
    app.handle_mouse(event, &targets);

    assert_eq!(app.game(), &Game::new());
}

#[test]
fn test_mouse_dialog_then_reset() {
    let mut app = App::new(true);
    let mut targets = grid_targets();
    click_cells(&mut app, &[1, 4, 2, 5, 3]);
    targets.set_dialog(Some(Rect::new(2, 2, 6, 3)));

    // Reset is modal-blocked
    app.handle_mouse(left_click(1, 9), &targets);
    assert!(app.dialog().is_some());

    app.handle_mouse(left_click(3, 3), &targets);
    assert_eq!(app.dialog(), &None);

    targets.set_dialog(None);
    app.handle_mouse(left_click(1, 9), &targets);
    assert_eq!(app.game(), &Game::new());
}
