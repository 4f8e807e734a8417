use std::time::{Duration, Instant};

use crossterm::event;

use crate::tui::event::TuiEvent;

/// Tick/render scheduling for the blocking event loop.
///
/// `next()` returns the earliest due event: a tick when the tick interval has
/// elapsed, a render when the render interval has elapsed, otherwise the next
/// terminal event. Waiting happens inside `crossterm::event::poll`, so input
/// is never delayed by the timers.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    render_interval: Option<Duration>,
    last_tick: Instant,
    last_render: Instant,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Creates a new `EventLoop` with both timers unset.
    pub(super) fn new() -> Self {
        let now = Instant::now();
        Self {
            tick_interval: None,
            render_interval: None,
            last_tick: now,
            last_render: now,
        }
    }

    /// Sets the tick interval. Pass `None` to disable tick events.
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
    }

    /// Sets the render interval. Pass `None` to disable render events.
    pub(super) fn set_render_interval(&mut self, interval: Option<Duration>) {
        self.render_interval = interval;
    }

    /// Returns the next event, blocking until one is due.
    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= interval
            {
                self.last_tick = now;
                return Ok(TuiEvent::Tick);
            }
            if let Some(interval) = self.render_interval
                && now.duration_since(self.last_render) >= interval
            {
                self.last_render = now;
                return Ok(TuiEvent::Render);
            }

            let Some(timeout) = self.compute_timeout(now) else {
                // No timers armed: block until the next terminal event.
                return Ok(event::read()?.into());
            };
            if event::poll(timeout)? {
                return Ok(event::read()?.into());
            }
        }
    }

    fn compute_timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick_at = self.tick_interval.map(|interval| self.last_tick + interval);
        let next_render_at = self
            .render_interval
            .map(|interval| self.last_render + interval);
        let next_due = [next_tick_at, next_render_at].into_iter().flatten().min()?;
        Some(next_due.saturating_duration_since(now))
    }
}
