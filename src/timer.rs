//! Repeating timers driven by the host's clock.
//!
//! The carousel never sleeps or spawns threads. The host advances its timers
//! by the elapsed frame time and hands back whichever handles fired, in the
//! same way a browser event loop invokes interval callbacks.

use std::time::Duration;

/// Opaque identifier of an installed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Set/clear interval pair supplied by the host.
pub trait Timers {
    /// Installs a repeating timer firing every `period`.
    fn set_interval(&mut self, period: Duration) -> TimerHandle;

    /// Cancels `handle`. Clearing an unknown or already cleared handle does nothing.
    fn clear_interval(&mut self, handle: TimerHandle);

    /// Moves the clock forward. Each interval fires at most once per call.
    fn advance(&mut self, elapsed: Duration) -> Vec<TimerHandle>;
}

#[derive(Debug)]
struct Interval {
    handle: TimerHandle,
    period: Duration,
    elapsed: Duration,
}

/// Intervals counted against the render loop's frame time.
#[derive(Debug, Default)]
pub struct FrameTimers {
    intervals: Vec<Interval>,
    next_id: u64,
}

impl FrameTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of intervals currently installed.
    pub fn live(&self) -> usize {
        self.intervals.len()
    }
}

impl Timers for FrameTimers {
    fn set_interval(&mut self, period: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.intervals.push(Interval {
            handle,
            // Zero would divide by zero in advance()
            period: period.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        });
        handle
    }

    fn clear_interval(&mut self, handle: TimerHandle) {
        self.intervals.retain(|interval| interval.handle != handle);
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<TimerHandle> {
        let mut fired = Vec::new();
        for interval in self.intervals.iter_mut() {
            interval.elapsed += elapsed;
            if interval.elapsed >= interval.period {
                // Missed periods coalesce into one tick
                let remainder = interval.elapsed.as_nanos() % interval.period.as_nanos();
                interval.elapsed = Duration::from_nanos(remainder as u64);
                fired.push(interval.handle);
            }
        }
        fired
    }
}
