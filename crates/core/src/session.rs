//! Session module - one game from spawn to game over
//!
//! Ties together the grid, the current/next pieces, the randomizer and the
//! score counters. The session never reads a clock: a frontend calls
//! [`GameSession::tick`] whenever its scheduler says gravity is due and
//! forwards player commands in between.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::PieceRandomizer;
use crate::scoring::{calculate_drop_score, calculate_line_score, get_tick_interval_ms, level_for_lines};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Upper bound on queued events between drains
pub const EVENT_QUEUE_CAPACITY: usize = 8;

/// What a gravity tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session was not running; nothing changed.
    Skipped,
    /// The current piece moved down one row.
    Fell,
    /// The current piece locked and the next one spawned.
    Locked { lines_cleared: u32 },
    /// The current piece locked and the next spawn collided.
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    current: Piece,
    next: Piece,
    randomizer: PieceRandomizer,
    /// Increments on every reset.
    episode_id: u32,
    score: u32,
    lines: u32,
    level: u32,
    status: SessionStatus,
    min_tick_interval_ms: u32,
    events: ArrayVec<SessionEvent, EVENT_QUEUE_CAPACITY>,
}

impl GameSession {
    /// Create an idle session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut randomizer = PieceRandomizer::new(seed);
        let current = Piece::spawn(randomizer.next_kind());
        let next = Piece::spawn(randomizer.next_kind());

        Self {
            grid: Grid::new(),
            current,
            next,
            randomizer,
            episode_id: 0,
            score: 0,
            lines: 0,
            level: 1,
            status: SessionStatus::Idle,
            min_tick_interval_ms: MIN_TICK_INTERVAL_MS,
            events: ArrayVec::new(),
        }
    }

    /// Override the gravity interval floor (0 is treated as 1ms)
    pub fn with_min_tick_interval_ms(mut self, floor_ms: u32) -> Self {
        self.min_tick_interval_ms = floor_ms.max(1);
        self
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.score,
            lines: self.lines,
            level: self.level,
        }
    }

    /// Current gravity interval in milliseconds
    pub fn tick_interval_ms(&self) -> u32 {
        get_tick_interval_ms(self.level, self.min_tick_interval_ms)
    }

    /// Take every event queued since the last call
    pub fn drain_events(&mut self) -> ArrayVec<SessionEvent, EVENT_QUEUE_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.grid);
        out.current = self.current;
        out.next = self.next;
        out.landing_y = match self.status {
            SessionStatus::Running | SessionStatus::Paused => {
                Some(self.current.landing_y(&self.grid))
            }
            SessionStatus::Idle | SessionStatus::GameOver => None,
        };
        out.status = self.status;
        out.episode_id = self.episode_id;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.tick_interval_ms = self.tick_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Idle/Paused -> Running. No-op when running or over.
    pub fn start(&mut self) -> bool {
        match self.status {
            SessionStatus::Idle | SessionStatus::Paused => {
                self.set_status(SessionStatus::Running);
                true
            }
            SessionStatus::Running | SessionStatus::GameOver => false,
        }
    }

    /// Running -> Paused. No-op otherwise.
    pub fn pause(&mut self) -> bool {
        if self.status != SessionStatus::Running {
            return false;
        }
        self.set_status(SessionStatus::Paused);
        true
    }

    /// Paused -> Running. No-op otherwise.
    pub fn resume(&mut self) -> bool {
        if self.status != SessionStatus::Paused {
            return false;
        }
        self.set_status(SessionStatus::Running);
        true
    }

    /// Running <-> Paused on a single control
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            SessionStatus::Running => self.pause(),
            SessionStatus::Paused => self.resume(),
            SessionStatus::Idle | SessionStatus::GameOver => false,
        }
    }

    /// Discard the current game and return to a fresh idle one.
    ///
    /// The randomizer keeps advancing, so a reset does not replay the same pieces.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.events.clear();
        self.current = Piece::spawn(self.randomizer.next_kind());
        self.next = Piece::spawn(self.randomizer.next_kind());
        self.episode_id = self.episode_id.wrapping_add(1);
        self.set_status(SessionStatus::Idle);
    }

    fn set_status(&mut self, status: SessionStatus) {
        if self.status != status {
            info!(
                from = self.status.as_str(),
                to = status.as_str(),
                episode = self.episode_id,
                "session status changed"
            );
            self.status = status;
        }
    }

    fn push_event(&mut self, event: SessionEvent) {
        // When full, overwrite the last slot so the most recent event survives.
        if self.events.is_full() {
            self.events.pop();
        }
        self.events.push(event);
    }

    /// Try to move the current piece
    fn try_move(&mut self, dx: i8, dy: i8) -> MoveOutcome {
        if !self.is_running() {
            return MoveOutcome::Blocked;
        }
        self.current.try_move(dx, dy, &self.grid)
    }

    pub fn move_left(&mut self) -> MoveOutcome {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        self.try_move(1, 0)
    }

    /// Move down one row, scoring one point if the piece actually moved.
    ///
    /// A blocked soft drop does not lock; locking is left to the next tick.
    pub fn soft_drop(&mut self) -> MoveOutcome {
        let outcome = self.try_move(0, 1);
        if outcome.moved() {
            self.score = self.score.saturating_add(calculate_drop_score(1, false));
        }
        outcome
    }

    /// Rotate clockwise in place; `false` if rejected or not running
    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.current.try_rotate(&self.grid)
    }

    /// Drop to the resting position, two points per row; returns rows descended.
    ///
    /// The piece stays live until the next tick locks it.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.is_running() {
            return 0;
        }
        let rows = self.current.drop_to_floor(&self.grid);
        self.score = self.score.saturating_add(calculate_drop_score(rows, true));
        debug!(rows, y = self.current.y, "hard drop");
        rows
    }

    /// Gravity step: fall one row, or lock, clear, and spawn the next piece.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Skipped;
        }

        if self.current.try_move(0, 1, &self.grid).moved() {
            return TickOutcome::Fell;
        }

        let lines_cleared = self.lock_current();
        self.spawn_next();

        if !self.current.is_valid(&self.grid) {
            self.game_over();
            return TickOutcome::GameOver;
        }

        TickOutcome::Locked { lines_cleared }
    }

    /// Write the current piece into the grid, clear lines, and update counters.
    fn lock_current(&mut self) -> u32 {
        let piece = self.current;
        self.grid
            .lock_shape(&piece.shape, piece.x, piece.y, piece.color);

        let cleared = self.grid.clear_lines();
        let lines_cleared = cleared as u32;

        let mut score_delta = 0;
        if lines_cleared > 0 {
            // Points use the level in force before these lines count.
            score_delta = calculate_line_score(cleared, self.level);
            self.score = self.score.saturating_add(score_delta);
            self.lines = self.lines.saturating_add(lines_cleared);

            let new_level = level_for_lines(self.lines);
            if new_level != self.level {
                self.level = new_level;
                info!(level = new_level, lines = self.lines, "level up");
                self.push_event(SessionEvent::LevelUp { level: new_level });
            }
        }

        debug!(
            kind = piece.kind.as_str(),
            x = piece.x,
            y = piece.y,
            lines_cleared,
            score_delta,
            "piece locked"
        );
        self.push_event(SessionEvent::Locked {
            lines_cleared,
            score_delta,
        });
        lines_cleared
    }

    /// Promote the next piece and draw a new one
    fn spawn_next(&mut self) {
        let kind = self.randomizer.next_kind();
        self.current = Piece::spawn(self.next.kind);
        self.next = Piece::spawn(kind);
        debug!(
            current = self.current.kind.as_str(),
            next = self.next.kind.as_str(),
            "piece spawned"
        );
    }

    fn game_over(&mut self) {
        let summary = self.summary();
        self.set_status(SessionStatus::GameOver);
        info!(
            score = summary.score,
            lines = summary.lines,
            level = summary.level,
            "game over"
        );
        self.push_event(SessionEvent::GameOver(summary));
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left().moved(),
            GameAction::MoveRight => self.move_right().moved(),
            GameAction::SoftDrop => self.soft_drop().moved(),
            GameAction::HardDrop => self.hard_drop() > 0,
            GameAction::Rotate => self.rotate(),
            GameAction::Start => self.start(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
