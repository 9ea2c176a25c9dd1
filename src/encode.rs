//! Serializes cookies into `Set-Cookie` header values
use crate::attributes;
use crate::cookie::Cookie;
use crate::date;
use crate::validate::{EncodeError, Strictness};
use jiff::{SignedDuration, Timestamp};
use std::fmt::{Display, Write as _};

/// Encodes cookies into `Set-Cookie` header values, one value per cookie.
///
/// An encoder is a stateless configuration value: construct one of the two
/// modes once and reuse it across any number of concurrent calls.
///
/// ```
/// use cookiewire::{Cookie, SetCookieEncoder};
///
/// let cookie = Cookie::new("id", "a3fWa").set_path("/").set_secure(true);
/// let header = SetCookieEncoder::STRICT.encode(&cookie)?;
/// assert_eq!(header, "id=a3fWa; Path=/; Secure");
/// # Ok::<(), cookiewire::EncodeError>(())
/// ```
///
/// Attributes are always written in a fixed order, regardless of the order
/// they were set on the cookie: `Max-Age` (with its derived `Expires`),
/// `SameSite`, `Path`, `Domain`, `Secure`, `HttpOnly`, `Partitioned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetCookieEncoder {
    strictness: Strictness,
}

impl SetCookieEncoder {
    /// Validates that name and value characters are in the valid scope
    /// defined in RFC6265 before writing anything.
    pub const STRICT: SetCookieEncoder = SetCookieEncoder {
        strictness: Strictness::Strict,
    };

    /// Writes any name and value as-is.
    ///
    /// For relaying legacy cookies that predate the RFC grammar; never the
    /// right choice for server-authored cookies.
    pub const LAX: SetCookieEncoder = SetCookieEncoder {
        strictness: Strictness::Lax,
    };

    pub fn new(strictness: Strictness) -> Self {
        SetCookieEncoder { strictness }
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Encode one cookie into a `Set-Cookie` header value.
    ///
    /// Reads the wall clock to derive the `Expires` attribute when a max-age
    /// is set; use [`SetCookieEncoder::encode_at`] for deterministic output.
    pub fn encode(&self, cookie: &Cookie<'_>) -> Result<String, EncodeError> {
        self.encode_at(cookie, Timestamp::now())
    }

    /// Encode one cookie, deriving `Expires` from the supplied instant.
    ///
    /// When the cookie carries a max-age, `Expires` is the Unix epoch for
    /// ages of zero or less (the cookie is already expired) and `now` plus
    /// the age otherwise.
    pub fn encode_at(&self, cookie: &Cookie<'_>, now: Timestamp) -> Result<String, EncodeError> {
        self.strictness
            .validate(cookie.name(), cookie.value(), cookie.wrap())?;

        let mut buf = String::new();
        if cookie.wrap() {
            let _ = write!(buf, "{}=\"{}\"", cookie.name(), cookie.value());
        } else {
            let _ = write!(buf, "{}={}", cookie.name(), cookie.value());
        }

        if let Some(max_age) = cookie.max_age() {
            add(&mut buf, attributes::MAX_AGE, max_age);
            let expires = if max_age <= 0 {
                Timestamp::UNIX_EPOCH
            } else {
                now.checked_add(SignedDuration::from_secs(max_age))
                    .unwrap_or(Timestamp::MAX)
            };
            add(&mut buf, attributes::EXPIRES, date::format(expires));
        }
        if let Some(same_site) = cookie.same_site() {
            add(&mut buf, attributes::SAME_SITE, same_site);
        }
        if let Some(path) = cookie.path() {
            add(&mut buf, attributes::PATH, path);
        }
        if let Some(domain) = cookie.domain() {
            add(&mut buf, attributes::DOMAIN, domain);
        }
        if cookie.secure() {
            add_flag(&mut buf, attributes::SECURE);
        }
        if cookie.http_only() {
            add_flag(&mut buf, attributes::HTTP_ONLY);
        }
        if cookie.partitioned() {
            add_flag(&mut buf, attributes::PARTITIONED);
        }

        Ok(buf)
    }

    /// Encode a bare name/value pair with no attributes.
    pub fn encode_pair(&self, name: &str, value: &str) -> Result<String, EncodeError> {
        self.encode(&Cookie::new(name, value))
    }

    /// Encode a batch of cookies into independent `Set-Cookie` header values.
    ///
    /// Repeated `Set-Cookie` headers are sent as separate header instances,
    /// so the batch never joins cookies into a single string. Order is
    /// preserved and every cookie is encoded; an empty batch yields an empty
    /// vector. The clock is read once and shared by the whole batch.
    pub fn encode_all<'a, 'c: 'a, I>(&self, cookies: I) -> Result<Vec<String>, EncodeError>
    where
        I: IntoIterator<Item = &'a Cookie<'c>>,
    {
        let now = Timestamp::now();
        let mut headers = Vec::new();
        for cookie in cookies {
            headers.push(self.encode_at(cookie, now)?);
        }
        Ok(headers)
    }

    /// Encode a batch of optional cookies, stopping silently at the first
    /// `None`.
    ///
    /// Cookies after the gap are dropped without error. This mirrors a
    /// legacy batch behavior where a null element terminated the loop, and
    /// exists only for compatibility with callers that relied on it; prefer
    /// [`SetCookieEncoder::encode_all`].
    pub fn encode_sparse<'a, 'c: 'a, I>(&self, cookies: I) -> Result<Vec<String>, EncodeError>
    where
        I: IntoIterator<Item = Option<&'a Cookie<'c>>>,
    {
        let now = Timestamp::now();
        let mut headers = Vec::new();
        for cookie in cookies {
            let Some(cookie) = cookie else { break };
            headers.push(self.encode_at(cookie, now)?);
        }
        Ok(headers)
    }
}

impl Default for SetCookieEncoder {
    fn default() -> Self {
        SetCookieEncoder::STRICT
    }
}

fn add(buf: &mut String, name: &str, value: impl Display) {
    let _ = write!(buf, "; {name}={value}");
}

fn add_flag(buf: &mut String, name: &str) {
    buf.push_str("; ");
    buf.push_str(name);
}
