use cache_expiry::{
    clock::SystemClock,
    expiry::Expiry,
    resolver::resolve_expiry,
    time::{add_seconds, now_plus_seconds},
};
use http::{HeaderMap, HeaderValue, header};
use std::{
    thread,
    time::{Duration, SystemTime},
};
use test_case::test_case;

// asserts that timestamps are approximately the same (< 1 second difference)
fn assert_timestamp_equal(
    timestamp1: SystemTime,
    timestamp2: SystemTime,
) {
    let difference = timestamp1
        .duration_since(timestamp2)
        .or_else(|_| timestamp2.duration_since(timestamp1))
        .unwrap();
    assert!(difference < Duration::from_secs(1), "{difference:?}");
}

fn headers(
    expires: Option<&'static str>,
    cache_control: Option<&'static str>,
) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(expires) = expires {
        headers.insert(header::EXPIRES, HeaderValue::from_static(expires));
    }
    if let Some(cache_control) = cache_control {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(cache_control));
    }
    headers
}

#[test]
fn now_plus_seconds_returns_the_correct_time() {
    let elapsed = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_secs_f64();

    let epoch = now_plus_seconds(&SystemClock, -(elapsed.round() as i64)).unwrap();

    assert_timestamp_equal(epoch, SystemTime::UNIX_EPOCH);
}

#[test]
fn no_headers_give_unknown() {
    assert_eq!(resolve_expiry(&headers(None, None)), Expiry::Unknown);
}

#[test]
fn expires_is_used_without_cache_control() {
    let expiry = resolve_expiry(&headers(Some("Sun, 07 Sep 2100 09:16:06 GMT"), None));

    assert_eq!(
        expiry,
        Expiry::Timestamp(SystemTime::UNIX_EPOCH + Duration::from_secs(4_123_991_766))
    );
    assert_eq!(expiry.to_string(), "Tue, 07 Sep 2100 09:16:06 GMT");
}

#[test_case(Some("foo"), None ; "unparsable expires")]
#[test_case(Some("Thr, 01 Jan 1970 00:00:00 GMT"), None ; "expires in the past")]
#[test_case(None, Some("no-cache, max-age=86400") ; "contradictory cache age")]
#[test_case(None, Some("no-cache") ; "no-cache")]
#[test_case(None, Some("no-store") ; "no-store")]
#[test_case(None, Some("no-cache, must-revalidate") ; "must-revalidate is ignored")]
#[test_case(None, Some("max-age=-3600") ; "negative max age")]
fn resolves_non_cacheable(
    expires: Option<&'static str>,
    cache_control: Option<&'static str>,
) {
    assert_eq!(
        resolve_expiry(&headers(expires, cache_control)),
        Expiry::NonCacheable
    );
}

#[test_case("s-maxage=86400" ; "s-maxage is ignored")]
#[test_case("max-age=asdf" ; "invalid max age")]
#[test_case("public" ; "no max age")]
fn resolves_unknown(cache_control: &'static str) {
    assert_eq!(
        resolve_expiry(&headers(None, Some(cache_control))),
        Expiry::Unknown
    );
}

#[test_case("max-age=86400", 86400)]
#[test_case("max-age=3600, public", 3600)]
#[test_case("max-age=3600, private", 3600)]
#[test_case("max-age=3600, proxy-revalidate", 3600)]
#[test_case("max-age=3600, asdf, qwer", 3600 ; "unknown keywords are ignored")]
#[test_case("max-age=0", 0)]
fn resolves_max_age(
    cache_control: &'static str,
    seconds: i64,
) {
    let expiry = resolve_expiry(&headers(None, Some(cache_control)));
    let expected = add_seconds(SystemTime::now(), seconds).unwrap();

    // max-age=0 may already be in the past when sanitized
    match expiry {
        Expiry::Timestamp(timestamp) => assert_timestamp_equal(timestamp, expected),
        Expiry::NonCacheable if seconds == 0 => {}
        expiry => panic!("unexpected {expiry:?}"),
    }
}

#[test]
fn resolves_concurrently() {
    let headers = headers(
        Some("Sun, 07 Sep 2100 09:16:06 GMT"),
        Some("max-age=60, no-store"),
    );

    thread::scope(|scope| {
        let handles = (0..8)
            .map(|_| scope.spawn(|| resolve_expiry(&headers)))
            .collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Expiry::NonCacheable);
        }
    });
}
