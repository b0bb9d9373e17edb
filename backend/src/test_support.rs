//! Test utilities for the registry crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled for tests or when the
//! `test-support` feature is enabled.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::InMemoryUserRegistry;

/// Year reported by [`FixtureClock::default`].
pub const FIXTURE_YEAR: i32 = 2024;

/// Clock pinned to a single instant so derived ages are deterministic.
#[derive(Debug, Clone, Copy)]
pub struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl FixtureClock {
    /// Pin the clock to mid-year of `year` so local time zones cannot shift
    /// the reported year.
    ///
    /// # Panics
    /// Panics when `year` is outside the range chrono can represent.
    #[must_use]
    pub fn in_year(year: i32) -> Self {
        let utc_now = Utc
            .with_ymd_and_hms(year, 6, 15, 12, 0, 0)
            .single()
            .unwrap_or_else(|| panic!("fixture year {year} must be representable"));
        Self { utc_now }
    }
}

impl Default for FixtureClock {
    fn default() -> Self {
        Self::in_year(FIXTURE_YEAR)
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// Build an empty registry whose clock reports [`FIXTURE_YEAR`].
#[must_use]
pub fn fixture_registry() -> InMemoryUserRegistry {
    InMemoryUserRegistry::new(Arc::new(FixtureClock::default()))
}
