//! Main resolution logic. Provides [Resolver] and [resolve_expiry].

use crate::{
    cache_control::parse_cache_control,
    clock::{Clock, SystemClock},
    expires::parse_expires,
    expiry::Expiry,
    header_source::HeaderSource,
};
use http::header;

/// Resolves [Expiry] of a response from its headers, using [Clock] as time
/// source.
///
/// Use [resolve_expiry] for the common case of system clock.
///
/// # Examples
///
/// ```
/// use cache_expiry::{clock::FixedClock, expiry::Expiry, resolver::Resolver};
/// use std::time::{Duration, SystemTime};
///
/// let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
/// let resolver = Resolver::new(FixedClock::new(now));
///
/// assert_eq!(
///     resolver.resolve(&[("cache-control", "max-age=60, public")]),
///     Expiry::Timestamp(now + Duration::from_secs(60))
/// );
/// assert_eq!(
///     resolver.resolve(&[("expires", "Thu, 01 Jan 1970 00:00:00 GMT")]),
///     Expiry::NonCacheable
/// );
/// ```
#[derive(Clone, Copy, Default, Debug)]
pub struct Resolver<C>
where
    C: Clock,
{
    clock: C,
}
impl<C> Resolver<C>
where
    C: Clock,
{
    /// Creates new instance, based on [Clock].
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Returns [Expiry] for response with given headers.
    ///
    /// Inside this method:
    /// - Parses `cache-control`.
    /// - If it gave [Expiry::Unknown], parses `expires` instead. `expires` is
    ///   never looked at when `cache-control` made any decision.
    /// - Turns timestamps in the past into [Expiry::NonCacheable].
    pub fn resolve(
        &self,
        headers: &impl HeaderSource,
    ) -> Expiry {
        let cache_control = headers.lookup(&header::CACHE_CONTROL);
        let expiry = match parse_cache_control(cache_control.as_deref(), &self.clock) {
            Expiry::Unknown => {
                let expires = headers.lookup(&header::EXPIRES);
                parse_expires(expires.as_deref())
            }
            expiry => expiry,
        };

        expiry.sanitize(self.clock.now())
    }
}

/// Like [Resolver::resolve], using [SystemClock].
pub fn resolve_expiry(headers: &impl HeaderSource) -> Expiry {
    Resolver::new(SystemClock).resolve(headers)
}
