//! Lightweight performance timing utilities.
//!
//! Rate evaluation sits in the innermost loop of a flow solver, so the
//! engine itself never times anything. Drivers (the bench binary, a solver
//! harness) wrap calls with [`Timer`] and accumulate into the statics in
//! [`kinetics_timing`]. Enabled via [`enable_timing`] or the `RK_TIMING`
//! environment variable.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable performance timing globally.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Check if timing is enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) || std::env::var("RK_TIMING").is_ok()
}

/// A simple timer that measures elapsed time.
pub struct Timer {
    start: Instant,
    enabled: bool,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
            enabled: is_enabled(),
        }
    }

    /// Stop the timer and return elapsed time in seconds, or `None` when
    /// timing is disabled.
    pub fn stop(self) -> Option<f64> {
        self.enabled.then(|| self.start.elapsed().as_secs_f64())
    }

    /// Stop the timer and add the elapsed time to `acc` if enabled.
    pub fn stop_into(self, acc: &AccumulatingTimer) {
        if let Some(elapsed) = self.stop() {
            acc.record(elapsed);
        }
    }
}

/// Accumulating timer for tracking total time across multiple calls.
pub struct AccumulatingTimer {
    total_ns: AtomicU64,
    count: AtomicU64,
}

impl Default for AccumulatingTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl AccumulatingTimer {
    pub const fn new() -> Self {
        Self {
            total_ns: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    pub fn record(&self, duration_s: f64) {
        let nanos = (duration_s * 1e9) as u64;
        self.total_ns.fetch_add(nanos, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Total time spent (in seconds).
    pub fn total_seconds(&self) -> f64 {
        self.total_ns.load(Ordering::Relaxed) as f64 / 1e9
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Average time per call (in seconds).
    pub fn average_seconds(&self) -> f64 {
        let count = self.count();
        if count > 0 {
            self.total_seconds() / count as f64
        } else {
            0.0
        }
    }

    pub fn reset(&self) {
        self.total_ns.store(0, Ordering::Relaxed);
        self.count.store(0, Ordering::Relaxed);
    }
}

/// Per-stage timers for the kinetics pipeline.
pub mod kinetics_timing {
    use super::AccumulatingTimer;

    /// Time spent in `RateManager::update`
    pub static RATE_UPDATE: AccumulatingTimer = AccumulatingTimer::new();
    /// Time spent in `ThirdbodyManager::multiply_thirdbodies`
    pub static THIRDBODY: AccumulatingTimer = AccumulatingTimer::new();
    /// Time spent in forward rate derivative evaluation
    pub static DERIVATIVES: AccumulatingTimer = AccumulatingTimer::new();

    pub fn reset_all() {
        RATE_UPDATE.reset();
        THIRDBODY.reset();
        DERIVATIVES.reset();
    }

    /// `(label, timer)` pairs in pipeline order, for reporting.
    pub fn all() -> [(&'static str, &'static AccumulatingTimer); 3] {
        [
            ("rate update", &RATE_UPDATE),
            ("thirdbody", &THIRDBODY),
            ("derivatives", &DERIVATIVES),
        ]
    }
}
