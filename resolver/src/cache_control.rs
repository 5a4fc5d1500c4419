//! `cache-control` header parsing. Provides [Directive] and
//! [parse_cache_control].
//!
//! Header value is split on `,` into directives, each trimmed. Directives are
//! recognized by substring (`x-no-cache-ext` counts as `no-cache`), with no
//! case folding. They are then applied left to right on an [Expiry]
//! accumulator, starting from [Expiry::Unknown]:
//! - `max-age=<seconds>` sets expiry to `now + seconds`, unless response was
//!   already marked as non-cacheable. Malformed value resets accumulator to
//!   [Expiry::Unknown], also dropping expiry set by earlier `max-age`.
//! - `no-cache` and `no-store` mark response as non-cacheable. Later `max-age`
//!   can't revert this.
//! - everything else (`public`, `private`, `must-revalidate`,
//!   `proxy-revalidate`, `s-maxage`, unknown directives) is ignored.

use crate::{clock::Clock, expiry::Expiry, time::now_plus_seconds};

/// Single `cache-control` directive, classified for expiry resolution.
#[derive(PartialEq, Eq, Debug)]
pub enum Directive {
    /// `max-age`, with value in seconds. [None] if value is missing or is not
    /// an integer.
    MaxAge(Option<i64>),
    /// `public` or `private`.
    Visibility,
    /// `no-cache` or `no-store`.
    NoCache,
    /// `must-revalidate` or `proxy-revalidate`.
    Revalidate,
    /// `s-maxage`. Lifetime for shared caches is not taken into account.
    SharedMaxAge,
    /// Unrecognized directive.
    Other,
}
impl Directive {
    /// Classifies single, already trimmed, directive.
    pub fn from_directive_str(directive: &str) -> Self {
        if directive.contains("max-age") {
            Self::MaxAge(Self::extract_max_age_from_value(directive))
        } else if directive.contains("public") || directive.contains("private") {
            Self::Visibility
        } else if directive.contains("no-cache") || directive.contains("no-store") {
            Self::NoCache
        } else if directive.contains("must-revalidate") || directive.contains("proxy-revalidate") {
            Self::Revalidate
        } else if directive.contains("s-maxage") {
            Self::SharedMaxAge
        } else {
            Self::Other
        }
    }

    /// Extracts number of seconds from `max-age` directive, eg. `3600` from
    /// `max-age=3600`. Returns [None] if there is no `=` or the value is not
    /// an integer.
    pub fn extract_max_age_from_value(directive: &str) -> Option<i64> {
        let value = directive.split('=').nth(1)?;
        let seconds = value.trim().parse::<i64>().ok()?;
        Some(seconds)
    }

    /// Applies [self] on top of `expiry`, returning new accumulator value.
    pub fn apply(
        &self,
        expiry: Expiry,
        clock: &impl Clock,
    ) -> Expiry {
        match self {
            Directive::MaxAge(_) if expiry == Expiry::NonCacheable => Expiry::NonCacheable,
            Directive::MaxAge(Some(seconds)) => match now_plus_seconds(clock, *seconds) {
                Some(timestamp) => Expiry::Timestamp(timestamp),
                None => {
                    log::debug!("max-age {seconds} out of range, discarding expiry");
                    Expiry::Unknown
                }
            },
            Directive::MaxAge(None) => {
                log::debug!("malformed max-age, discarding expiry");
                Expiry::Unknown
            }
            Directive::NoCache => Expiry::NonCacheable,
            Directive::Visibility
            | Directive::Revalidate
            | Directive::SharedMaxAge
            | Directive::Other => expiry,
        }
    }
}

/// Parses `cache-control` header value into [Expiry]. [None] (header absent)
/// gives [Expiry::Unknown].
///
/// `clock` is read once per `max-age` directive.
pub fn parse_cache_control(
    cache_control: Option<&str>,
    clock: &impl Clock,
) -> Expiry {
    let cache_control = match cache_control {
        Some(cache_control) => cache_control,
        None => return Expiry::Unknown,
    };

    cache_control
        .split(',')
        .map(str::trim)
        .fold(Expiry::Unknown, |expiry, directive| {
            let directive_parsed = Directive::from_directive_str(directive);
            log::trace!("cache-control directive {directive:?}: {directive_parsed:?}");
            directive_parsed.apply(expiry, clock)
        })
}
