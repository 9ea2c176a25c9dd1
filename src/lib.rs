//! An RFC6265 cookie attribute codec.
//!
//! cookiewire turns a structured cookie (name, value, and attributes) into the
//! exact bytes of a `Set-Cookie` header value, and parses `Cookie`/`Set-Cookie`
//! header text back into structured cookies. It performs no I/O and holds no
//! shared state; it is the encode/decode boundary between your application and
//! whatever writes your HTTP headers.
//!
//! # Features
//! - Byte-exact `Set-Cookie` output with a fixed attribute order, including the
//!   `Expires` date derived from `Max-Age`.
//! - Strict RFC6265 validation of names and values, with a lax mode for
//!   relaying legacy cookies that violate the grammar.
//! - Request-side `Cookie` and response-side `Set-Cookie` decoding that
//!   tolerates unknown attributes and borrows from the header text.
//! - An injectable clock ([`Timestamp`]) wherever wall time is involved, so
//!   encoding and decoding stay deterministic under test.
//!
//! # Usage
//! Build a cookie and encode it into a `Set-Cookie` header value:
//! ```
//! use cookiewire::{Cookie, SameSite, SetCookieEncoder};
//!
//! let cookie = Cookie::new("session", "opaque-token")
//!     .set_path("/")
//!     .set_same_site(SameSite::Lax)
//!     .set_http_only(true);
//!
//! let header = SetCookieEncoder::STRICT.encode(&cookie)?;
//! assert_eq!(header, "session=opaque-token; SameSite=Lax; Path=/; HttpOnly");
//! # Ok::<(), cookiewire::EncodeError>(())
//! ```
//! Each cookie becomes one independent header value; batches never join
//! cookies into a single string:
//! ```
//! use cookiewire::{Cookie, SetCookieEncoder};
//!
//! let cookies = vec![Cookie::new("id", "a3fWa"), Cookie::new("theme", "dark")];
//! let headers = SetCookieEncoder::STRICT.encode_all(&cookies)?;
//! assert_eq!(headers, ["id=a3fWa", "theme=dark"]);
//! # Ok::<(), cookiewire::EncodeError>(())
//! ```
//! Decode incoming header text back into cookies:
//! ```
//! use cookiewire::{parse_cookie_header, parse_set_cookie};
//!
//! let request = parse_cookie_header("id=a3fWa; theme=dark")?;
//! assert_eq!(request[0].name(), "id");
//!
//! let response = parse_set_cookie("id=a3fWa; Max-Age=3600; Path=/; Secure")?;
//! assert_eq!(response.max_age(), Some(3600));
//! assert!(response.secure());
//! # Ok::<(), cookiewire::DecodeError>(())
//! ```
mod attributes;
mod cookie;
mod date;
mod decode;
mod encode;
mod validate;

pub use attributes::SameSite;
pub use cookie::Cookie;
pub use decode::{DecodeError, parse_cookie_header, parse_set_cookie, parse_set_cookie_at};
pub use encode::SetCookieEncoder;
pub use jiff::Timestamp;
pub use validate::{EncodeError, Strictness};
