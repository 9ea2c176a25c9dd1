use cookiewire::{
    Cookie, EncodeError, SameSite, SetCookieEncoder, Timestamp, parse_cookie_header,
    parse_set_cookie, parse_set_cookie_at,
};
use std::collections::BTreeSet;

// Wed, 21-Oct-2015 07:28:00 GMT
fn frozen() -> Timestamp {
    Timestamp::from_second(1_445_412_480).unwrap()
}

#[test]
fn round_trip_preserves_name_and_value() {
    let cookie = Cookie::new("session", "opaque-token");
    let header = SetCookieEncoder::STRICT.encode(&cookie).unwrap();

    let decoded = parse_set_cookie(&header).unwrap();
    assert_eq!(decoded.name(), "session");
    assert_eq!(decoded.value(), "opaque-token");
    assert!(!decoded.wrap());
}

#[test]
fn round_trip_preserves_attributes() {
    let cookie = Cookie::new("session", "opaque-token")
        .set_max_age(3600)
        .set_same_site(SameSite::None)
        .set_path("/app")
        .set_domain("example.com")
        .set_secure(true)
        .set_http_only(true)
        .set_partitioned(true);

    let header = SetCookieEncoder::STRICT.encode_at(&cookie, frozen()).unwrap();
    let decoded = parse_set_cookie_at(&header, frozen()).unwrap();

    assert_eq!(decoded.max_age(), Some(3600));
    assert_eq!(decoded.same_site(), Some(SameSite::None));
    assert_eq!(decoded.path(), Some("/app"));
    assert_eq!(decoded.domain(), Some("example.com"));
    assert!(decoded.secure());
    assert!(decoded.http_only());
    assert!(decoded.partitioned());
}

#[test]
fn encoding_is_deterministic_without_a_clock() {
    let cookie = Cookie::new("id", "a3fWa").set_path("/").set_secure(true);
    let first = SetCookieEncoder::STRICT.encode(&cookie).unwrap();
    let second = SetCookieEncoder::STRICT.encode(&cookie).unwrap();
    assert_eq!(first, second);
}

#[test]
fn encoding_is_deterministic_with_a_frozen_clock() {
    let cookie = Cookie::new("id", "a3fWa").set_max_age(86_400);
    let first = SetCookieEncoder::STRICT.encode_at(&cookie, frozen()).unwrap();
    let second = SetCookieEncoder::STRICT.encode_at(&cookie, frozen()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first,
        "id=a3fWa; Max-Age=86400; Expires=Thu, 22-Oct-2015 07:28:00 GMT"
    );
}

#[test]
fn attribute_order_is_independent_of_setter_order() {
    let forward = Cookie::new("id", "v")
        .set_same_site(SameSite::Lax)
        .set_path("/")
        .set_domain("example.com");
    let backward = Cookie::new("id", "v")
        .set_domain("example.com")
        .set_path("/")
        .set_same_site(SameSite::Lax);

    let encoder = SetCookieEncoder::STRICT;
    assert_eq!(
        encoder.encode(&forward).unwrap(),
        encoder.encode(&backward).unwrap()
    );
}

#[test]
fn strict_rejects_what_lax_relays() {
    let cookie = Cookie::new("foo bar", "v");

    assert_eq!(
        SetCookieEncoder::STRICT.encode(&cookie),
        Err(EncodeError::InvalidName(' '))
    );
    assert_eq!(SetCookieEncoder::LAX.encode(&cookie).unwrap(), "foo bar=v");
}

#[test]
fn max_age_zero_is_already_expired() {
    let cookie = Cookie::new("id", "gone").set_max_age(0);
    let header = SetCookieEncoder::STRICT.encode_at(&cookie, frozen()).unwrap();
    assert_eq!(
        header,
        "id=gone; Max-Age=0; Expires=Thu, 01-Jan-1970 00:00:00 GMT"
    );
}

#[test]
fn sparse_batch_drops_everything_after_the_first_gap() {
    let a = Cookie::new("a", "1");
    let b = Cookie::new("b", "2");

    let headers = SetCookieEncoder::STRICT
        .encode_sparse([Some(&a), None, Some(&b)])
        .unwrap();
    assert_eq!(headers, ["a=1"]);
}

#[test]
fn empty_batch_is_not_an_error() {
    let cookies: Vec<Cookie<'_>> = Vec::new();
    let headers = SetCookieEncoder::STRICT.encode_all(&cookies).unwrap();
    assert!(headers.is_empty());
}

#[test]
fn wrapped_value_round_trips_through_the_quotes() {
    let cookie = Cookie::new("greeting", "hello world").set_wrap(true);
    let header = SetCookieEncoder::STRICT.encode(&cookie).unwrap();
    assert_eq!(header, "greeting=\"hello world\"");

    let decoded = parse_set_cookie(&header).unwrap();
    assert_eq!(decoded.value(), "hello world");
    assert!(decoded.wrap());
}

#[test]
fn decoded_request_cookies_collect_into_a_deterministic_set() {
    let cookies = parse_cookie_header("b=2; a=1; b=override").unwrap();
    let set: BTreeSet<Cookie<'_>> = cookies.into_iter().collect();

    // Identity is (name, path, domain): the duplicate `b` collapses.
    let names: Vec<&str> = set.iter().map(Cookie::name).collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn decoded_cookies_survive_beyond_the_header_buffer() {
    let owned = {
        let header = String::from("id=a3fWa; theme=dark");
        let cookies = parse_cookie_header(&header).unwrap();
        cookies
            .into_iter()
            .map(Cookie::into_owned)
            .collect::<Vec<Cookie<'static>>>()
    };
    assert_eq!(owned[0].name(), "id");
    assert_eq!(owned[1].value(), "dark");
}
