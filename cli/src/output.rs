//! Result formatting. Provides [Format].

use cache_expiry::expiry::Expiry;
use chrono::{DateTime, SecondsFormat};
use clap::ValueEnum;
use std::time::SystemTime;

/// How [Expiry::Timestamp] is printed. Other variants are always printed as
/// `non-cacheable` and `unknown`.
#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Format {
    /// Http date, eg. `Tue, 07 Sep 2100 09:16:06 GMT`.
    HttpDate,
    /// RFC 3339 in UTC, eg. `2100-09-07T09:16:06Z`.
    Rfc3339,
    /// Seconds since unix epoch, negative for earlier instants.
    Unix,
}
impl Format {
    /// Formats `expiry` according to [self].
    pub fn format(
        &self,
        expiry: &Expiry,
    ) -> String {
        let timestamp = match expiry {
            Expiry::Timestamp(timestamp) => *timestamp,
            Expiry::NonCacheable | Expiry::Unknown => return expiry.to_string(),
        };

        match self {
            Format::HttpDate => expiry.to_string(),
            Format::Rfc3339 => match DateTime::from_timestamp(unix_seconds(timestamp), 0) {
                Some(date_time) => date_time.to_rfc3339_opts(SecondsFormat::Secs, true),
                None => expiry.to_string(),
            },
            Format::Unix => unix_seconds(timestamp).to_string(),
        }
    }
}

/// Whole seconds since unix epoch, saturating at [i64] bounds.
pub fn unix_seconds(timestamp: SystemTime) -> i64 {
    match timestamp.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(since_epoch) => i64::try_from(since_epoch.as_secs()).unwrap_or(i64::MAX),
        Err(error) => i64::try_from(error.duration().as_secs())
            .map(|seconds| -seconds)
            .unwrap_or(i64::MIN),
    }
}
