//! Expiry resolution result. Provides [Expiry].

use std::{
    fmt,
    time::{Duration, SystemTime},
};

/// `10000-01-01T00:00:00Z`, first instant that can't be written as http date.
const HTTP_DATE_END: Duration = Duration::from_secs(253_402_300_800);

/// Formats `timestamp` as http date, falling back to [fmt::Debug] for
/// instants http date can't express (before 1970 or after year 9999).
pub(crate) fn fmt_timestamp(timestamp: SystemTime) -> String {
    match timestamp.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(since_epoch) if since_epoch < HTTP_DATE_END => httpdate::fmt_http_date(timestamp),
        _ => format!("{timestamp:?}"),
    }
}

/// Result of parsing caching headers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Expiry {
    /// Response may be cached until given instant.
    Timestamp(SystemTime),
    /// Response must not be cached, either because headers disallow it or
    /// because expiry instant has already passed.
    NonCacheable,
    /// Headers contain no usable caching information.
    Unknown,
}
impl Expiry {
    /// Returns expiry instant for [Self::Timestamp], [None] otherwise.
    pub fn timestamp(&self) -> Option<SystemTime> {
        match self {
            Expiry::Timestamp(timestamp) => Some(*timestamp),
            Expiry::NonCacheable | Expiry::Unknown => None,
        }
    }

    /// Whether [self] is [Self::Timestamp]. Note that [Self::Unknown] is
    /// neither cacheable nor non-cacheable, the decision is up to caller.
    pub fn is_cacheable(&self) -> bool {
        matches!(self, Expiry::Timestamp(_))
    }

    /// Converts [Self::Timestamp] strictly earlier than `now` into
    /// [Self::NonCacheable]. Other values are returned unchanged.
    pub fn sanitize(
        self,
        now: SystemTime,
    ) -> Self {
        match self {
            Expiry::Timestamp(timestamp) if timestamp < now => {
                log::debug!("expiry {} is in the past", fmt_timestamp(timestamp));
                Expiry::NonCacheable
            }
            expiry => expiry,
        }
    }
}
/// Timestamps are formatted as http date, eg. `Tue, 07 Sep 2100 09:16:06 GMT`.
impl fmt::Display for Expiry {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Expiry::Timestamp(timestamp) => write!(f, "{}", fmt_timestamp(*timestamp)),
            Expiry::NonCacheable => write!(f, "non-cacheable"),
            Expiry::Unknown => write!(f, "unknown"),
        }
    }
}
