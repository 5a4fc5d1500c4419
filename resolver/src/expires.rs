//! `expires` header parsing. Provides [parse_expires].

use crate::expiry::Expiry;
use anyhow::{Error, bail};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::time::SystemTime;

/// Date with time formats, tried after the standard ones. Read as UTC.
const DATE_TIME_FORMATS: &[&str] = &[
    "%d %b %Y %H:%M:%S GMT",
    "%d %b %Y %H:%M:%S UTC",
    "%d %b %Y %H:%M:%S UT",
    "%d %b %Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];
/// Date only formats, taken as midnight UTC.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%b %d, %Y"];

/// Parses date in one of widely used formats:
/// - http date: IMF-fixdate (`Sun, 06 Nov 1994 08:49:37 GMT`), obsolete RFC 850
///   (`Sunday, 06-Nov-94 08:49:37 GMT`) and asctime (`Sun Nov  6 08:49:37
///   1994`),
/// - RFC 2822 with numeric zone (`Sun, 06 Nov 1994 08:49:37 +0000`),
/// - RFC 3339 (`1994-11-06T08:49:37Z`),
/// - IMF-fixdate with misspelled or mismatching day name (`Thr, 01 Jan 1970
///   00:00:00 GMT`), `UTC` / `UT` zone or no zone at all, the day name is
///   ignored,
/// - date and time without zone (`1994-11-06 08:49:37`), taken as UTC,
/// - plain date (`1994-11-06`, `Nov 6, 1994`), taken as midnight UTC.
pub fn parse_http_date(value: &str) -> Result<SystemTime, Error> {
    let value = value.trim();

    if let Ok(timestamp) = httpdate::parse_http_date(value) {
        return Ok(timestamp);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc2822(value) {
        return Ok(date_time.into());
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Ok(date_time.into());
    }

    let without_day_name = value.split_once(", ").map(|(_day_name, rest)| rest);
    for candidate in [Some(value), without_day_name].into_iter().flatten() {
        for format in DATE_TIME_FORMATS {
            if let Ok(date_time) = NaiveDateTime::parse_from_str(candidate, format) {
                return Ok(date_time.and_utc().into());
            }
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            let date_time = match date.and_hms_opt(0, 0, 0) {
                Some(date_time) => date_time,
                None => bail!("midnight out of range for {date}"),
            };
            return Ok(date_time.and_utc().into());
        }
    }

    bail!("unable to parse {value:?} as date");
}

/// Parses `expires` header value into [Expiry]:
/// - [None] (header absent) gives [Expiry::Unknown],
/// - valid date gives [Expiry::Timestamp],
/// - anything else gives [Expiry::NonCacheable].
///
/// Timestamps in the past are returned as is.
pub fn parse_expires(expires: Option<&str>) -> Expiry {
    let expires = match expires {
        Some(expires) => expires,
        None => return Expiry::Unknown,
    };

    match parse_http_date(expires) {
        Ok(timestamp) => Expiry::Timestamp(timestamp),
        Err(error) => {
            log::debug!("invalid expires, treating as non-cacheable: {error:#}");
            Expiry::NonCacheable
        }
    }
}
