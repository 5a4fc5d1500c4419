//! Time arithmetic helpers.

use crate::clock::Clock;
use std::time::{Duration, SystemTime};

/// Moves `instant` by `seconds` (forward for positive, backward for negative
/// values).
///
/// Returns [None] if the result is not representable as [SystemTime] on this
/// platform.
///
/// # Examples
///
/// ```
/// use cache_expiry::time::add_seconds;
/// use std::time::{Duration, SystemTime};
///
/// let instant = SystemTime::UNIX_EPOCH + Duration::from_secs(100);
/// assert_eq!(add_seconds(instant, -100), Some(SystemTime::UNIX_EPOCH));
/// ```
pub fn add_seconds(
    instant: SystemTime,
    seconds: i64,
) -> Option<SystemTime> {
    let duration = Duration::from_secs(seconds.unsigned_abs());
    if seconds >= 0 {
        instant.checked_add(duration)
    } else {
        instant.checked_sub(duration)
    }
}

/// Like [add_seconds], but relative to current time of `clock`.
pub fn now_plus_seconds(
    clock: &impl Clock,
    seconds: i64,
) -> Option<SystemTime> {
    add_seconds(clock.now(), seconds)
}
