//! Wire tokens for cookie attributes
use serde::{Deserialize, Serialize};
use std::fmt;

// Attribute names exactly as they appear in a Set-Cookie header value.
// The decoder matches them case-insensitively; the encoder emits them as-is.
pub(crate) const MAX_AGE: &str = "Max-Age";
pub(crate) const EXPIRES: &str = "Expires";
pub(crate) const SAME_SITE: &str = "SameSite";
pub(crate) const PATH: &str = "Path";
pub(crate) const DOMAIN: &str = "Domain";
pub(crate) const SECURE: &str = "Secure";
pub(crate) const HTTP_ONLY: &str = "HttpOnly";
pub(crate) const PARTITIONED: &str = "Partitioned";

/// The `SameSite` attribute of a cookie, constraining when it is sent on
/// cross-site requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    /// The exact spelling used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }

    // Attribute values arrive in whatever casing the server chose.
    pub(crate) fn from_wire(value: &str) -> Option<SameSite> {
        if value.eq_ignore_ascii_case("Strict") {
            Some(SameSite::Strict)
        } else if value.eq_ignore_ascii_case("Lax") {
            Some(SameSite::Lax)
        } else if value.eq_ignore_ascii_case("None") {
            Some(SameSite::None)
        } else {
            None
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
