//! Slideshow controller: current slide, auto-advance timer and hover pause.

use std::time::Duration;

use tracing::{debug, trace};

use crate::error::Result;
use crate::stage::Stage;
use crate::state::SlideshowState;
use crate::timer::{TimerHandle, Timers};

/// Drives a [`Stage`] through its slides with a single auto-advance timer.
#[derive(Debug)]
pub struct SlideshowController<T: Timers> {
    state: SlideshowState,
    stage: Stage,
    timers: T,
    interval: Duration,
    auto: Option<TimerHandle>, // at most one live interval
}

impl<T: Timers> SlideshowController<T> {
    /// An empty stage gets no timer.
    pub fn new(stage: Stage, timers: T, interval: Duration) -> Self {
        let state = SlideshowState::new(stage.len());
        let mut controller = Self {
            state,
            stage,
            timers,
            interval,
            auto: None,
        };

        if !controller.state.is_empty() {
            controller.render();
            controller.start_auto();
        }
        controller
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn is_auto_running(&self) -> bool {
        self.auto.is_some()
    }

    pub fn show_slide(&mut self, index: usize) -> Result<()> {
        self.state.select(index)?;
        self.render();
        debug!(index, "showing slide");
        Ok(())
    }

    pub fn next(&mut self) {
        if self.advance() {
            self.reset_auto_advance();
        }
    }

    pub fn previous(&mut self) {
        if self.state.is_empty() {
            return;
        }
        let index = self.state.previous_index();
        if self.show_slide(index).is_ok() {
            self.reset_auto_advance();
        }
    }

    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        self.show_slide(index)?;
        self.reset_auto_advance();
        Ok(())
    }

    /// No-op while an interval is already live.
    pub fn start_auto(&mut self) {
        if self.auto.is_some() || self.state.is_empty() {
            return;
        }
        let handle = self.timers.set_interval(self.interval);
        trace!(?handle, "auto-advance started");
        self.auto = Some(handle);
    }

    pub fn stop_auto(&mut self) {
        if let Some(handle) = self.auto.take() {
            self.timers.clear_interval(handle);
            trace!(?handle, "auto-advance stopped");
        }
    }

    /// Restarts the auto-advance period from zero.
    pub fn reset_auto_advance(&mut self) {
        self.stop_auto();
        self.start_auto();
    }

    pub fn hover_enter(&mut self) {
        self.stop_auto();
    }

    pub fn hover_leave(&mut self) {
        self.start_auto();
    }

    /// Ticks from cleared handles are dropped.
    pub fn on_timer(&mut self, handle: TimerHandle) {
        if self.auto != Some(handle) {
            trace!(?handle, "ignoring stale tick");
            return;
        }
        self.advance();
    }

    pub fn tick(&mut self, elapsed: Duration) {
        for handle in self.timers.advance(elapsed) {
            self.on_timer(handle);
        }
    }

    fn advance(&mut self) -> bool {
        if self.state.is_empty() {
            return false;
        }
        let index = self.state.next_index();
        self.show_slide(index).is_ok()
    }

    fn render(&mut self) {
        self.stage.render(&self.state);
    }
}
