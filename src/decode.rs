//! Parses `Cookie` and `Set-Cookie` header values back into cookies
use crate::attributes::{self, SameSite};
use crate::cookie::Cookie;
use crate::date;
use jiff::Timestamp;
use thiserror::Error;

/// The error returned when header text cannot be decoded.
///
/// Decoding never hands back a partially populated cookie: a structurally
/// broken name/value head fails the whole call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("the cookie header is empty")]
    EmptyHeader,
    #[error("expected a name-value pair, but no `=` was found in `{0}`")]
    MissingPair(String),
    #[error("the name of a cookie cannot be empty, but found an empty name with `{0}` as value")]
    EmptyName(String),
}

/// Parse a request-side `Cookie` header: `;`-separated name=value pairs,
/// no attributes.
///
/// Cookies are returned in header order, borrowing from the input. A value
/// enclosed in one pair of double quotes is unwrapped and the cookie records
/// `wrap = true`; quotes are not otherwise interpreted.
///
/// ```
/// use cookiewire::parse_cookie_header;
///
/// let cookies = parse_cookie_header("id=a3fWa; theme=dark")?;
/// assert_eq!(cookies.len(), 2);
/// assert_eq!(cookies[0].name(), "id");
/// assert_eq!(cookies[1].value(), "dark");
/// # Ok::<(), cookiewire::DecodeError>(())
/// ```
pub fn parse_cookie_header(header: &str) -> Result<Vec<Cookie<'_>>, DecodeError> {
    if header.trim().is_empty() {
        return Err(DecodeError::EmptyHeader);
    }

    let mut cookies = Vec::new();
    for pair in header.split(';') {
        if pair.chars().all(char::is_whitespace) {
            continue;
        }
        cookies.push(parse_pair(pair)?);
    }
    Ok(cookies)
}

/// Parse a response-side `Set-Cookie` header into a cookie with attributes.
///
/// Reads the wall clock when only an `Expires` attribute is present, to
/// compute the canonical max-age; use [`parse_set_cookie_at`] for
/// deterministic decoding.
pub fn parse_set_cookie(header: &str) -> Result<Cookie<'_>, DecodeError> {
    parse_set_cookie_at(header, Timestamp::now())
}

/// Parse a response-side `Set-Cookie` header against the supplied instant.
///
/// The first `;`-separated segment must be a name=value pair; the rest are
/// attribute=value pairs or bare flags, matched case-insensitively. Unknown
/// attributes are skipped for forward compatibility, as are known attributes
/// whose values do not parse. When both `Max-Age` and `Expires` are present,
/// `Max-Age` wins; an `Expires` alone becomes the seconds from `now` until
/// the expiry instant, partial seconds counting as whole.
pub fn parse_set_cookie_at(header: &str, now: Timestamp) -> Result<Cookie<'_>, DecodeError> {
    if header.trim().is_empty() {
        return Err(DecodeError::EmptyHeader);
    }

    let (first, rest) = match header.split_once(';') {
        Some((first, rest)) => (first, rest),
        None => (header, ""),
    };
    let mut cookie = parse_pair(first)?;

    let mut max_age = None;
    let mut expires = None;
    for segment in rest.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let (key, value) = match segment.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (segment, ""),
        };

        if key.eq_ignore_ascii_case(attributes::MAX_AGE) {
            if let Ok(seconds) = value.parse::<i64>() {
                max_age = Some(seconds);
            }
        } else if key.eq_ignore_ascii_case(attributes::EXPIRES) {
            if let Some(instant) = date::parse(value) {
                expires = Some(instant);
            }
        } else if key.eq_ignore_ascii_case(attributes::SAME_SITE) {
            if let Some(same_site) = SameSite::from_wire(value) {
                cookie = cookie.set_same_site(same_site);
            }
        } else if key.eq_ignore_ascii_case(attributes::PATH) {
            cookie = cookie.set_path(value);
        } else if key.eq_ignore_ascii_case(attributes::DOMAIN) {
            cookie = cookie.set_domain(value);
        } else if key.eq_ignore_ascii_case(attributes::SECURE) {
            cookie = cookie.set_secure(true);
        } else if key.eq_ignore_ascii_case(attributes::HTTP_ONLY) {
            cookie = cookie.set_http_only(true);
        } else if key.eq_ignore_ascii_case(attributes::PARTITIONED) {
            cookie = cookie.set_partitioned(true);
        }
        // Anything else is an unknown attribute and is skipped.
    }

    let max_age = match (max_age, expires) {
        (Some(seconds), _) => Some(seconds),
        (None, Some(expires)) => Some(seconds_until(expires, now)),
        (None, None) => None,
    };
    Ok(cookie.set_max_age(max_age))
}

fn parse_pair(pair: &str) -> Result<Cookie<'_>, DecodeError> {
    let (name, value) = pair
        .split_once('=')
        .ok_or_else(|| DecodeError::MissingPair(pair.trim().to_string()))?;
    let (name, value) = (name.trim(), value.trim());
    if name.is_empty() {
        return Err(DecodeError::EmptyName(value.to_string()));
    }
    let (value, wrap) = unwrap_quotes(value);
    Ok(Cookie::new(name, value).set_wrap(wrap))
}

// One enclosing pair of double quotes marks a wrapped value. A lone `"` is
// not a pair and stays part of the value.
fn unwrap_quotes(value: &str) -> (&str, bool) {
    match value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        Some(interior) => (interior, true),
        None => (value, false),
    }
}

// Whole seconds from `now` until `expires`; a partial second counts as one.
fn seconds_until(expires: Timestamp, now: Timestamp) -> i64 {
    let millis = expires.as_millisecond() - now.as_millisecond();
    millis / 1000 + i64::from(millis % 1000 != 0)
}
