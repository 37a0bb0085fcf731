use chrono::{DateTime, Duration, Utc};

use crate::constants::{SWIPE_ALLOWANCE, SWIPE_COOLDOWN_HOURS};

/// Lazy refill gate: true once `now` has passed a set `wait_until`.
/// Fires regardless of how many swipes are still left, which can re-grant
/// a full allowance mid-window. Observed behavior, kept as is.
pub fn cooldown_elapsed(wait_until: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    matches!(wait_until, Some(deadline) if now > deadline)
}

/// Swipes the profile is allowed to spend right now, refill applied.
pub fn effective_swipes_left(
    swipes_left: i32,
    wait_until: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> i32 {
    if cooldown_elapsed(wait_until, now) { SWIPE_ALLOWANCE } else { swipes_left }
}

pub fn next_refill_at(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::hours(SWIPE_COOLDOWN_HOURS)
}

/// Spend one swipe: decremented count plus the refreshed deadline.
/// Callers must have checked `effective_swipes_left > 0` first.
pub fn consume(swipes_left: i32, now: DateTime<Utc>) -> (i32, DateTime<Utc>) {
    (swipes_left - 1, next_refill_at(now))
}
