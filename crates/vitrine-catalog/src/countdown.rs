//! Flash-sale countdown.
//!
//! The remaining-time math is pure and clamped: once the sale end passes,
//! every component is zero and stays zero — negative components are never
//! emitted. The ticker recomputes once per second and completes at zero
//! instead of firing forever.

use chrono::{DateTime, Duration as ChronoDuration, Utc};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_DAY: u64 = 86_400;

/// Days/hours/minutes/seconds left until a sale ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    /// Computes the time left between `now` and `end`, clamped to zero when
    /// `now >= end`.
    #[must_use]
    pub fn until(end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let total = u64::try_from((end - now).num_seconds()).unwrap_or(0);
        Self {
            days: total / SECS_PER_DAY,
            hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    }

    /// Returns `true` once every component has reached zero.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        *self == Self::default()
    }
}

/// Derives a sale's end timestamp from its start and configured duration.
#[must_use]
pub fn flash_sale_end(start: DateTime<Utc>, sale_hours: u64) -> DateTime<Utc> {
    start + ChronoDuration::hours(i64::try_from(sale_hours).unwrap_or(0))
}

/// Drives a 1-second countdown tick until the sale ends.
///
/// `on_tick` receives the freshly computed [`TimeRemaining`] every second,
/// including one final all-zero tick, after which the future completes. The
/// owning view cancels simply by dropping the future.
pub async fn tick_flash_sale<F>(end: DateTime<Utc>, mut on_tick: F)
where
    F: FnMut(TimeRemaining),
{
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
    loop {
        interval.tick().await;
        let remaining = TimeRemaining::until(end, Utc::now());
        on_tick(remaining);
        if remaining.is_finished() {
            break;
        }
    }
}
