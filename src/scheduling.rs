//! Scheduling helpers for hosts that re-filter on user input or file changes.
//!
//! Both types are plain state machines driven by the caller's clock; they spawn
//! no threads. The `*_at` variants take an explicit `Instant` so behavior can
//! be tested deterministically.

use crate::constants::{DEFAULT_DEBOUNCE_DELAY_MS, MIN_REFRESH_INTERVAL};
use std::time::{Duration, Instant};

/// Coalesces rapid requests: only the last request within the quiescence
/// window fires, once the window has elapsed without another request.
///
/// # Examples
///
/// ```
/// use pathsift::scheduling::Debouncer;
/// use std::time::{Duration, Instant};
///
/// let mut debouncer = Debouncer::new(Duration::from_millis(300));
/// let t0 = Instant::now();
///
/// debouncer.request_at(t0);
/// debouncer.request_at(t0 + Duration::from_millis(200)); // typing continues
/// assert!(!debouncer.poll_at(t0 + Duration::from_millis(400)));
/// assert!(debouncer.poll_at(t0 + Duration::from_millis(500)));
/// assert!(!debouncer.poll_at(t0 + Duration::from_millis(900))); // fires once
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiescence window.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The current quiescence window.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Changes the window. A pending request is rescheduled from `now`.
    pub fn reconfigure_at(&mut self, delay: Duration, now: Instant) {
        self.delay = delay;
        if self.deadline.is_some() {
            self.deadline = Some(now + delay);
        }
    }

    /// Changes the window, rescheduling any pending request from the current time.
    pub fn reconfigure(&mut self, delay: Duration) {
        self.reconfigure_at(delay, Instant::now());
    }

    /// Records a request at `now`, superseding any pending one.
    pub fn request_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Records a request at the current time.
    pub fn request(&mut self) {
        self.request_at(Instant::now());
    }

    /// Returns `true` exactly once when a pending request's window has elapsed.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Polls against the current time.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// Returns `true` if a request is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drops any pending request.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_DELAY_MS))
    }
}

/// Enforces a minimum interval between refreshes triggered by file-system events.
#[derive(Debug, Clone)]
pub struct RefreshLimiter {
    min_interval: Duration,
    last: Option<Instant>,
}

impl RefreshLimiter {
    /// Creates a limiter with the given minimum interval.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: None,
        }
    }

    /// Returns `true` and records `now` if a refresh is allowed.
    pub fn try_acquire_at(&mut self, now: Instant) -> bool {
        let allowed = match self.last {
            Some(last) => now.saturating_duration_since(last) >= self.min_interval,
            None => true,
        };
        if allowed {
            self.last = Some(now);
        }
        allowed
    }

    /// Checks against the current time.
    pub fn try_acquire(&mut self) -> bool {
        self.try_acquire_at(Instant::now())
    }

    /// Forgets the last refresh, so the next attempt is allowed.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for RefreshLimiter {
    fn default() -> Self {
        Self::new(MIN_REFRESH_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_debouncer_idle_never_fires() {
        let mut debouncer = Debouncer::default();
        assert_eq!(debouncer.delay(), ms(300));
        assert!(!debouncer.poll_at(Instant::now() + ms(10_000)));
    }

    #[test]
    fn test_debouncer_last_request_wins() {
        let mut debouncer = Debouncer::new(ms(100));
        let t0 = Instant::now();
        for step in 0..5 {
            debouncer.request_at(t0 + ms(step * 50));
        }
        // Last request at 200ms, fires at 300ms.
        assert!(!debouncer.poll_at(t0 + ms(299)));
        assert!(debouncer.poll_at(t0 + ms(300)));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_debouncer_reconfigure_reschedules_pending() {
        let mut debouncer = Debouncer::new(ms(100));
        let t0 = Instant::now();
        debouncer.request_at(t0);
        debouncer.reconfigure_at(ms(500), t0 + ms(50));
        assert!(!debouncer.poll_at(t0 + ms(200)));
        assert!(debouncer.poll_at(t0 + ms(550)));
    }

    #[test]
    fn test_debouncer_cancel() {
        let mut debouncer = Debouncer::new(ms(10));
        let t0 = Instant::now();
        debouncer.request_at(t0);
        debouncer.cancel();
        assert!(!debouncer.poll_at(t0 + ms(100)));
    }

    #[test]
    fn test_refresh_limiter() {
        let mut limiter = RefreshLimiter::default();
        let t0 = Instant::now();
        assert!(limiter.try_acquire_at(t0));
        assert!(!limiter.try_acquire_at(t0 + ms(500)));
        assert!(limiter.try_acquire_at(t0 + ms(1000)));
        assert!(!limiter.try_acquire_at(t0 + ms(1500)));
        limiter.reset();
        assert!(limiter.try_acquire_at(t0 + ms(1600)));
    }
}
