//! Bounded time window with a mutable "current" instant.
//!
//! Instants are Unix-epoch seconds as `f64`. The window is the span a
//! promotion runs over; `completion()` is the fraction of it elapsed at the
//! current instant and drives the adaptive win odds.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::EngineError;

/// A fixed `[start, end]` interval plus a movable current instant.
///
/// Bounds are validated at construction and immutable afterwards. The current
/// instant defaults to the wall clock until explicitly set, so a window built
/// for "today" works without any driver bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeWindow {
    start: f64,
    end: f64,
    current: Option<f64>,
}

impl TimeWindow {
    /// Create a window spanning `[start, end]`. Fails unless `end > start`.
    pub fn new(start: f64, end: f64) -> Result<Self, EngineError> {
        if end <= start {
            return Err(EngineError::InvalidConfig {
                field: "end",
                value: end,
            });
        }
        Ok(Self {
            start,
            end,
            current: None,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Window length in time units.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Force the current instant. Fails with an out-of-bounds error if `t`
    /// lies outside `[start, end]`; the previously set value is preserved.
    pub fn set_current(&mut self, t: f64) -> Result<(), EngineError> {
        if t < self.start || t > self.end {
            return Err(EngineError::CurrentOutOfBounds {
                value: t,
                start: self.start,
                end: self.end,
            });
        }
        self.current = Some(t);
        Ok(())
    }

    /// The forced current instant, or wall-clock now if never set.
    pub fn current(&self) -> f64 {
        match self.current {
            Some(t) => t,
            None => wall_clock_secs(),
        }
    }

    /// Fraction of the window elapsed at the current instant.
    ///
    /// The elapsed time is floor-clamped to one time unit, so the result is
    /// always `> 0` and safe to divide by. The clamp sits on the numerator,
    /// not the ratio, so values near the window start read slightly high;
    /// callers downstream rely on that exact behavior.
    pub fn completion(&self) -> f64 {
        (self.current() - self.start).max(1.0) / self.duration()
    }
}

fn wall_clock_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
