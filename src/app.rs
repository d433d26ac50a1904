//! Frontend state: a session, its gravity clock, and the modal dialogs.
//!
//! `App` performs no I/O. The binary feeds it key events and elapsed time and
//! asks it to render; tests drive it the same way.

use std::time::Duration;

use crossterm::event::KeyEvent;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::core::{GameSession, GameSnapshot, TickOutcome};
use crate::engine::GravityClock;
use crate::input::{handle_key_event, is_exit_request, map_dialog_key, should_quit, DialogChoice};
use crate::term::{FrameBuffer, GameView, Overlay, Viewport};
use crate::types::{GameAction, SessionEvent, SessionStatus};

/// Poll timeout while no gravity schedule is armed.
pub const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct App {
    session: GameSession,
    clock: GravityClock,
    overlay: Option<Overlay>,
    confirm_quit: bool,
    quit: bool,
    snapshot: GameSnapshot,
}

impl App {
    pub fn new(config: &GameConfig, seed: u32) -> Self {
        let session = GameSession::new(seed).with_min_tick_interval_ms(config.min_tick_interval_ms);
        Self {
            session,
            clock: GravityClock::new(),
            overlay: None,
            confirm_quit: config.confirm_quit,
            quit: false,
            snapshot: GameSnapshot::default(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// How long the event loop may block before the next gravity tick.
    pub fn poll_timeout(&self) -> Duration {
        self.clock.time_until_tick().unwrap_or(IDLE_POLL)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if should_quit(key) {
            self.quit = true;
            return;
        }

        match self.overlay {
            Some(Overlay::ConfirmExit) => match map_dialog_key(key) {
                Some(DialogChoice::Confirm) => self.quit = true,
                Some(DialogChoice::Cancel) => {
                    // Back to where we were; a running game stays paused.
                    self.overlay = (self.session.status() == SessionStatus::GameOver)
                        .then(|| Overlay::GameOver(self.session.summary()));
                }
                None => {}
            },
            Some(Overlay::GameOver(_)) => {
                if is_exit_request(key) {
                    self.request_exit();
                } else if matches!(
                    handle_key_event(key),
                    Some(GameAction::Reset | GameAction::Start)
                ) {
                    self.overlay = None;
                    self.session.reset();
                    self.session.start();
                }
            }
            None => {
                if is_exit_request(key) {
                    self.request_exit();
                } else if let Some(action) = handle_key_event(key) {
                    self.session.apply_action(action);
                }
            }
        }

        self.clock.sync(&self.session);
        self.collect_events();
    }

    /// Feed wall-clock time to the gravity clock.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<TickOutcome> {
        let outcome = self.clock.advance(&mut self.session, elapsed_ms);
        self.collect_events();
        outcome
    }

    pub fn render_into(&mut self, view: &GameView, viewport: Viewport, fb: &mut FrameBuffer) {
        self.session.snapshot_into(&mut self.snapshot);
        view.render_into_with_overlay(&self.snapshot, self.overlay.as_ref(), viewport, fb);
    }

    fn request_exit(&mut self) {
        if !self.confirm_quit {
            self.quit = true;
            return;
        }
        self.session.pause();
        self.overlay = Some(Overlay::ConfirmExit);
    }

    fn collect_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                SessionEvent::Locked {
                    lines_cleared,
                    score_delta,
                } => {
                    if lines_cleared > 0 {
                        debug!(lines_cleared, score_delta, "lines cleared");
                    }
                }
                SessionEvent::LevelUp { level } => {
                    info!(level, interval_ms = self.session.tick_interval_ms(), "speed up");
                }
                SessionEvent::GameOver(summary) => {
                    self.overlay = Some(Overlay::GameOver(summary));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_ctrl_c_quits_without_dialog() {
        let mut app = App::new(&GameConfig::default(), 1);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
        assert!(app.overlay().is_none());
    }

    #[test]
    fn test_poll_timeout_idle_and_running() {
        let mut app = App::new(&GameConfig::default(), 1);
        assert_eq!(app.poll_timeout(), IDLE_POLL);
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.poll_timeout(), Duration::from_millis(1000));
    }

    #[test]
    fn test_no_confirm_quits_immediately() {
        let config = GameConfig {
            confirm_quit: false,
            ..GameConfig::default()
        };
        let mut app = App::new(&config, 1);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }
}
