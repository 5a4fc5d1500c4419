//! Helpers for `cache-expiry` executable: reading raw header lines and
//! formatting results.
//!
//! For the executable itself see `main.rs`, for the resolution logic see
//! [cache_expiry].

#![warn(missing_docs)]

pub mod header_line;
pub mod output;
