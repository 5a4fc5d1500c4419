//! Read access to response headers. Provides [HeaderSource] trait.

use http::{HeaderMap, HeaderName, Response, response::Parts};
use std::borrow::Cow;

/// Trait for anything capable of returning response header value by name.
///
/// Implemented for [http] types ([HeaderMap], [Response], [Parts]) and for
/// plain `(name, value)` slices, handy in tests.
///
/// When header is present multiple times, values are joined with `, ` in
/// order of appearance, so `cache-control: no-cache` followed by
/// `cache-control: max-age=60` is seen as `no-cache, max-age=60`.
pub trait HeaderSource {
    /// Returns value of header `name` or [None] if header is absent.
    fn lookup(
        &self,
        name: &HeaderName,
    ) -> Option<Cow<'_, str>>;
}

/// Joins values with `, `. Returns [None] if there are no values.
fn join_values<'a>(mut values: impl Iterator<Item = Cow<'a, str>>) -> Option<Cow<'a, str>> {
    let first = values.next()?;
    let mut joined = match values.next() {
        Some(second) => format!("{first}, {second}"),
        None => return Some(first),
    };
    for value in values {
        joined.push_str(", ");
        joined.push_str(&value);
    }

    Some(Cow::Owned(joined))
}

impl HeaderSource for HeaderMap {
    fn lookup(
        &self,
        name: &HeaderName,
    ) -> Option<Cow<'_, str>> {
        // opaque (non visible ascii) bytes are replaced, the rest of the value
        // still carries directives
        join_values(
            self.get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes())),
        )
    }
}
impl<B> HeaderSource for Response<B> {
    fn lookup(
        &self,
        name: &HeaderName,
    ) -> Option<Cow<'_, str>> {
        self.headers().lookup(name)
    }
}
impl HeaderSource for Parts {
    fn lookup(
        &self,
        name: &HeaderName,
    ) -> Option<Cow<'_, str>> {
        self.headers.lookup(name)
    }
}
impl HeaderSource for [(&str, &str)] {
    fn lookup(
        &self,
        name: &HeaderName,
    ) -> Option<Cow<'_, str>> {
        join_values(
            self.iter()
                .filter(|(key, _)| key.eq_ignore_ascii_case(name.as_str()))
                .map(|(_, value)| Cow::Borrowed(*value)),
        )
    }
}
impl<const N: usize> HeaderSource for [(&str, &str); N] {
    fn lookup(
        &self,
        name: &HeaderName,
    ) -> Option<Cow<'_, str>> {
        self.as_slice().lookup(name)
    }
}
impl<T> HeaderSource for &T
where
    T: HeaderSource + ?Sized,
{
    fn lookup(
        &self,
        name: &HeaderName,
    ) -> Option<Cow<'_, str>> {
        (**self).lookup(name)
    }
}
