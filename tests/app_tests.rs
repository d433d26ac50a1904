//! App tests - dialogs, quitting, and the clock driving a session

use crossterm::event::{KeyCode, KeyEvent};

use blockfall::app::App;
use blockfall::config::GameConfig;
use blockfall::term::{FrameBuffer, GameView, Overlay, Viewport};
use blockfall::types::SessionStatus;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::from(code));
}

fn started(seed: u32) -> App {
    let mut app = App::new(&GameConfig::default(), seed);
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.session().status(), SessionStatus::Running);
    app
}

/// Hard drop and let gravity lock until the game-over dialog appears
fn play_until_over(app: &mut App) {
    for _ in 0..1000 {
        press(app, KeyCode::Char(' '));
        app.advance(1000);
        if matches!(app.overlay(), Some(Overlay::GameOver(_))) {
            return;
        }
    }
    panic!("game never ended");
}

#[test]
fn test_exit_dialog_pauses_and_cancel_stays_paused() {
    let mut app = started(1);

    press(&mut app, KeyCode::Char('q'));
    assert_eq!(app.overlay(), Some(&Overlay::ConfirmExit));
    assert_eq!(app.session().status(), SessionStatus::Paused);
    assert!(!app.should_quit());

    // Gravity is stopped while the dialog is up.
    let y = app.session().current().y;
    assert_eq!(app.advance(5_000), None);
    assert_eq!(app.session().current().y, y);

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.overlay(), None);
    assert_eq!(app.session().status(), SessionStatus::Paused);

    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.session().status(), SessionStatus::Running);
}

#[test]
fn test_exit_dialog_confirm_quits() {
    let mut app = started(2);
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('y'));
    assert!(app.should_quit());
}

#[test]
fn test_game_keys_are_swallowed_by_dialog() {
    let mut app = started(3);
    press(&mut app, KeyCode::Char('q'));
    let before = *app.session().current();

    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(*app.session().current(), before);
    assert_eq!(app.overlay(), Some(&Overlay::ConfirmExit));
}

#[test]
fn test_game_over_dialog_and_new_game() {
    let mut app = started(4);
    play_until_over(&mut app);

    let summary = app.session().summary();
    assert_eq!(app.overlay(), Some(&Overlay::GameOver(summary)));
    assert_eq!(app.session().status(), SessionStatus::GameOver);
    let episode = app.session().episode_id();

    press(&mut app, KeyCode::Left);
    assert_eq!(app.overlay(), Some(&Overlay::GameOver(summary)));

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.overlay(), None);
    assert_eq!(app.session().status(), SessionStatus::Running);
    assert_eq!(app.session().episode_id(), episode + 1);
    assert_eq!(app.session().score(), 0);
}

#[test]
fn test_cancelling_exit_from_game_over_restores_summary() {
    let mut app = started(5);
    play_until_over(&mut app);
    let summary = app.session().summary();

    press(&mut app, KeyCode::Char('q'));
    assert_eq!(app.overlay(), Some(&Overlay::ConfirmExit));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.overlay(), Some(&Overlay::GameOver(summary)));
}

#[test]
fn test_gravity_alone_ends_the_game() {
    let mut app = started(6);
    let mut ticks = 0;
    while app.session().status() == SessionStatus::Running {
        app.advance(app.session().tick_interval_ms());
        ticks += 1;
        assert!(ticks < 100_000, "game never ended");
    }
    assert!(matches!(app.overlay(), Some(Overlay::GameOver(_))));
}

#[test]
fn test_render_shows_open_dialog() {
    let mut app = started(7);
    press(&mut app, KeyCode::Char('q'));

    let mut fb = FrameBuffer::new(0, 0);
    app.render_into(&GameView::default(), Viewport::new(60, 24), &mut fb);
    let text: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(text.contains("QUIT GAME?"));
}
