//! Gravity scheduler owned by the frontend.
//!
//! There is exactly one schedule. It exists only while the session is
//! running; pausing (or any other non-running status) drops it, and running
//! again arms a brand-new period. Repeated pause/resume therefore can never
//! leave two schedules firing.

use std::time::Duration;

use tracing::trace;

use crate::core::{GameSession, TickOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Schedule {
    interval_ms: u32,
    elapsed_ms: u32,
}

/// Converts elapsed wall-clock time into `GameSession::tick` calls.
#[derive(Debug, Clone, Default)]
pub struct GravityClock {
    schedule: Option<Schedule>,
    /// Episode the schedule belongs to; a reset re-arms from zero.
    episode_id: u32,
}

impl GravityClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a schedule is currently armed
    pub fn is_armed(&self) -> bool {
        self.schedule.is_some()
    }

    /// Interval of the armed schedule
    pub fn interval_ms(&self) -> Option<u32> {
        self.schedule.map(|s| s.interval_ms)
    }

    /// Align the schedule with the session's status and level.
    ///
    /// Arms a fresh schedule when the session is running without one, drops it
    /// when the session is not running, and picks up interval changes (level
    /// ups) without losing the time already accumulated.
    pub fn sync(&mut self, session: &GameSession) {
        if session.episode_id() != self.episode_id {
            self.episode_id = session.episode_id();
            self.schedule = None;
        }

        if !session.is_running() {
            if self.schedule.take().is_some() {
                trace!("gravity schedule dropped");
            }
            return;
        }

        let interval_ms = session.tick_interval_ms();
        if let Some(schedule) = self.schedule.as_mut() {
            schedule.interval_ms = interval_ms;
        } else {
            trace!(interval_ms, "gravity schedule armed");
            self.schedule = Some(Schedule {
                interval_ms,
                elapsed_ms: 0,
            });
        }
    }

    /// Advance by `elapsed_ms` and fire at most one tick if one is due.
    ///
    /// A stall longer than one interval does not produce a burst of catch-up
    /// ticks: the period restarts after each fired tick.
    pub fn advance(&mut self, session: &mut GameSession, elapsed_ms: u32) -> Option<TickOutcome> {
        self.sync(session);

        let schedule = self.schedule.as_mut()?;
        schedule.elapsed_ms = schedule.elapsed_ms.saturating_add(elapsed_ms);
        if schedule.elapsed_ms < schedule.interval_ms {
            return None;
        }
        schedule.elapsed_ms = 0;

        let outcome = session.tick();
        self.sync(session);
        Some(outcome)
    }

    /// Time left until the next tick, or `None` when disarmed
    pub fn time_until_tick(&self) -> Option<Duration> {
        self.schedule.map(|s| {
            Duration::from_millis(u64::from(s.interval_ms.saturating_sub(s.elapsed_ms)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> GameSession {
        let mut s = GameSession::new(5);
        s.start();
        s
    }

    #[test]
    fn test_idle_session_never_ticks() {
        let mut session = GameSession::new(5);
        let mut clock = GravityClock::new();
        assert_eq!(clock.advance(&mut session, 5_000), None);
        assert!(!clock.is_armed());
        assert_eq!(clock.time_until_tick(), None);
    }

    #[test]
    fn test_fires_after_full_interval() {
        let mut session = running();
        let mut clock = GravityClock::new();
        assert_eq!(clock.advance(&mut session, 999), None);
        assert_eq!(clock.advance(&mut session, 1), Some(TickOutcome::Fell));
        assert_eq!(session.current().y, 1);
        assert_eq!(clock.time_until_tick(), Some(Duration::from_millis(1000)));
    }

    #[test]
    fn test_long_stall_fires_once() {
        let mut session = running();
        let mut clock = GravityClock::new();
        assert_eq!(clock.advance(&mut session, 10_000), Some(TickOutcome::Fell));
        assert_eq!(session.current().y, 1);
    }

    #[test]
    fn test_pause_drops_accumulated_time() {
        let mut session = running();
        let mut clock = GravityClock::new();
        clock.advance(&mut session, 900);

        session.toggle_pause();
        assert_eq!(clock.advance(&mut session, 900), None);
        assert!(!clock.is_armed());

        session.toggle_pause();
        // Fresh period after resume: 900ms from before the pause is gone.
        assert_eq!(clock.advance(&mut session, 900), None);
        assert_eq!(clock.advance(&mut session, 100), Some(TickOutcome::Fell));
    }

    #[test]
    fn test_rapid_toggle_keeps_single_schedule() {
        let mut session = running();
        let mut clock = GravityClock::new();
        for _ in 0..10 {
            session.toggle_pause();
            clock.sync(&session);
            session.toggle_pause();
            clock.sync(&session);
        }
        assert_eq!(clock.advance(&mut session, 999), None);
        assert_eq!(clock.advance(&mut session, 1), Some(TickOutcome::Fell));
        assert_eq!(clock.advance(&mut session, 1), None);
    }

    #[test]
    fn test_reset_rearms_from_zero() {
        let mut session = running();
        let mut clock = GravityClock::new();
        clock.advance(&mut session, 800);

        session.reset();
        session.start();
        assert_eq!(clock.advance(&mut session, 800), None);
        assert_eq!(clock.interval_ms(), Some(1000));
    }
}
