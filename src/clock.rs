//! Calendar clock abstraction.
//!
//! Age derivation reads the current calendar year. Hiding that read behind a
//! trait keeps the derivation deterministic under test.

use chrono::{Datelike, Utc};

/// Source of the current calendar year.
pub trait Clock: Send + Sync {
    /// The current year, e.g. 2026.
    fn current_year(&self) -> i32;
}

/// Clock backed by the system wall clock (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Utc::now().year()
    }
}

/// Clock pinned to a fixed year, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
