//! Computes expiration instant of http response, based on its `cache-control`
//! and `expires` headers.
//!
//! The root function of this crate is [resolver::resolve_expiry]. It takes
//! anything implementing [header_source::HeaderSource] (eg. [http::HeaderMap]
//! or [http::Response]) and returns [expiry::Expiry], one of:
//! - [expiry::Expiry::Timestamp] - response may be cached until given instant,
//! - [expiry::Expiry::NonCacheable] - response must not be cached (or it has
//!   already expired),
//! - [expiry::Expiry::Unknown] - headers carry no usable caching information.
//!
//! Resolution order:
//! 1. `cache-control` is parsed first, see [cache_control]. Directives are
//!    evaluated left to right, `no-cache` / `no-store` make response
//!    non-cacheable and `max-age` sets expiry relative to current time.
//!    `s-maxage` is ignored.
//! 2. If `cache-control` gives no information, `expires` is parsed, see
//!    [expires]. Unparsable `expires` makes response non-cacheable.
//! 3. Timestamps in the past are converted to non-cacheable.
//!
//! Time source is abstracted by [clock::Clock], so the result may be computed
//! against a fixed instant with [resolver::Resolver].
//!
//! # Examples
//!
//! ```
//! use cache_expiry::{expiry::Expiry, resolver::resolve_expiry};
//! use http::{HeaderMap, HeaderValue, header};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
//!
//! assert_eq!(resolve_expiry(&headers), Expiry::NonCacheable);
//! ```

#![warn(missing_docs)]

pub mod cache_control;
pub mod clock;
pub mod expires;
pub mod expiry;
pub mod header_source;
pub mod resolver;
pub mod time;
