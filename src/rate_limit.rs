//! Debounce and throttle gates for high-frequency event callbacks.
//!
//! Both gates operate on caller-supplied millisecond timestamps (the browser
//! driver passes `js_sys::Date::now()`), keeping the clock at the edges.

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod rate_limit_test;

/// Admits at most one call per window, immediately at window start; calls
/// landing inside an open window are dropped.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    window_ms: f64,
    open_at: f64,
}

impl Throttle {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            open_at: f64::NEG_INFINITY,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        if now_ms >= self.open_at {
            self.open_at = now_ms + self.window_ms;
            true
        } else {
            false
        }
    }
}

/// Collapses a burst of calls into one execution after a quiet window.
///
/// `record` notes a call and returns the deadline to check back at;
/// `fire_due` reports, once, that the burst has gone quiet. A check-back
/// scheduled before the latest `record` sees an unexpired deadline and
/// no-ops, so only the final call in a burst fires.
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    quiet_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms,
            deadline: None,
        }
    }

    pub fn record(&mut self, now_ms: f64) -> f64 {
        let deadline = now_ms + self.quiet_ms;
        self.deadline = Some(deadline);
        deadline
    }

    pub fn fire_due(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
