//! The cookie record handed to the encoder and produced by the decoder
use crate::attributes::SameSite;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;

/// An HTTP cookie: a name, a value, and the RFC6265 attributes carried by a
/// `Set-Cookie` header.
///
/// A cookie borrows its text when it comes out of the decoder and owns it when
/// built by application code; [`Cookie::into_owned`] converts between the two.
/// Setters consume and return the cookie, so configuration chains:
///
/// ```
/// use cookiewire::{Cookie, SameSite};
///
/// let cookie = Cookie::new("session", "opaque-token")
///     .set_path("/")
///     .set_same_site(SameSite::Lax)
///     .set_http_only(true);
///
/// assert_eq!(cookie.name(), "session");
/// assert_eq!(cookie.path(), Some("/"));
/// ```
///
/// Equality and ordering consider only the identity triple of name
/// (case-sensitive), then path, then domain (case-insensitive), so cookies
/// collect into sorted sets deterministically. Value and the remaining
/// attributes do not participate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cookie<'c> {
    name: Cow<'c, str>,
    value: Cow<'c, str>,
    wrap: bool,
    domain: Option<Cow<'c, str>>,
    path: Option<Cow<'c, str>>,
    same_site: Option<SameSite>,
    max_age: Option<i64>,
    secure: bool,
    http_only: bool,
    partitioned: bool,
}

impl<'c> Cookie<'c> {
    /// Create a cookie with the given name and value and no attributes.
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: Into<Cow<'c, str>>,
        V: Into<Cow<'c, str>>,
    {
        Cookie {
            name: name.into(),
            value: value.into(),
            wrap: false,
            domain: None,
            path: None,
            same_site: None,
            max_age: None,
            secure: false,
            http_only: false,
            partitioned: false,
        }
    }

    /// The name of the cookie.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value of the cookie.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value is serialized surrounded by double quotes.
    pub fn wrap(&self) -> bool {
        self.wrap
    }

    /// The `Domain` attribute, if set.
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// The `Path` attribute, if set.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// The `SameSite` attribute, if set.
    pub fn same_site(&self) -> Option<SameSite> {
        self.same_site
    }

    /// The `Max-Age` attribute in seconds, if set.
    ///
    /// Zero and negative ages are concrete values meaning "already expired";
    /// an unset max-age marks a session cookie.
    pub fn max_age(&self) -> Option<i64> {
        self.max_age
    }

    /// Whether the `Secure` flag is set.
    pub fn secure(&self) -> bool {
        self.secure
    }

    /// Whether the `HttpOnly` flag is set.
    pub fn http_only(&self) -> bool {
        self.http_only
    }

    /// Whether the `Partitioned` flag is set.
    pub fn partitioned(&self) -> bool {
        self.partitioned
    }

    #[inline]
    pub fn set_value<T: Into<Cow<'c, str>>>(mut self, value: T) -> Self {
        self.value = value.into();
        self
    }

    #[inline]
    pub fn set_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    #[inline]
    pub fn set_domain<T: Into<Cow<'c, str>>>(mut self, domain: T) -> Self {
        self.domain = Some(domain.into());
        self
    }

    #[inline]
    pub fn set_path<T: Into<Cow<'c, str>>>(mut self, path: T) -> Self {
        self.path = Some(path.into());
        self
    }

    #[inline]
    pub fn set_same_site<T: Into<Option<SameSite>>>(mut self, same_site: T) -> Self {
        self.same_site = same_site.into();
        self
    }

    #[inline]
    pub fn set_max_age<T: Into<Option<i64>>>(mut self, max_age: T) -> Self {
        self.max_age = max_age.into();
        self
    }

    #[inline]
    pub fn set_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    #[inline]
    pub fn set_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    #[inline]
    pub fn set_partitioned(mut self, partitioned: bool) -> Self {
        self.partitioned = partitioned;
        self
    }

    /// Clone any borrowed text so the cookie can outlive the header it was
    /// decoded from.
    pub fn into_owned(self) -> Cookie<'static> {
        Cookie {
            name: Cow::Owned(self.name.into_owned()),
            value: Cow::Owned(self.value.into_owned()),
            wrap: self.wrap,
            domain: self.domain.map(|d| Cow::Owned(d.into_owned())),
            path: self.path.map(|p| Cow::Owned(p.into_owned())),
            same_site: self.same_site,
            max_age: self.max_age,
            secure: self.secure,
            http_only: self.http_only,
            partitioned: self.partitioned,
        }
    }
}

impl PartialEq for Cookie<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cookie<'_> {}

impl PartialOrd for Cookie<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cookie<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name()
            .cmp(other.name())
            .then_with(|| cmp_optional(self.path(), other.path()))
            .then_with(|| cmp_optional_ignore_case(self.domain(), other.domain()))
    }
}

// Absent sorts before present.
fn cmp_optional(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

fn cmp_optional_ignore_case(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a
            .bytes()
            .map(|byte| byte.to_ascii_lowercase())
            .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase())),
        (a, b) => cmp_optional(a, b),
    }
}
