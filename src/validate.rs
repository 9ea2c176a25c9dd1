//! RFC6265 grammar checks for cookie names and values
use thiserror::Error;

/// The error returned when a cookie fails strict-mode validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("the name of a cookie cannot be empty")]
    EmptyName,
    #[error("invalid character `{0}` in cookie name")]
    InvalidName(char),
    #[error("invalid character `{0}` in cookie value")]
    InvalidValue(char),
}

/// Grammar enforcement mode for outgoing cookies.
///
/// Both modes are stateless values, shareable across any number of concurrent
/// encode calls. [`Strictness::Lax`] exists for relaying legacy cookies that
/// violate the RFC; it is never the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    #[default]
    Strict,
    Lax,
}

impl Strictness {
    /// Check a name/value pair against the RFC6265 grammar.
    ///
    /// Strict mode requires the name to be an HTTP token and the value to be
    /// made of cookie-octets. When `wrap` is set the value ships as the
    /// interior of a double-quoted string, so anything printable except the
    /// quote itself is permitted. Lax mode accepts everything as-is.
    ///
    /// The first offending character is reported; nothing is escaped or
    /// truncated on the caller's behalf.
    pub fn validate(self, name: &str, value: &str, wrap: bool) -> Result<(), EncodeError> {
        match self {
            Strictness::Lax => Ok(()),
            Strictness::Strict => {
                validate_name(name)?;
                validate_value(value, wrap)
            }
        }
    }
}

fn validate_name(name: &str) -> Result<(), EncodeError> {
    if name.is_empty() {
        return Err(EncodeError::EmptyName);
    }
    match name.chars().find(|c| !is_token_char(*c)) {
        Some(offender) => Err(EncodeError::InvalidName(offender)),
        None => Ok(()),
    }
}

fn validate_value(value: &str, wrap: bool) -> Result<(), EncodeError> {
    let permitted = if wrap {
        is_quoted_value_char
    } else {
        is_cookie_octet
    };
    match value.chars().find(|c| !permitted(*c)) {
        Some(offender) => Err(EncodeError::InvalidValue(offender)),
        None => Ok(()),
    }
}

// token = 1*<any CHAR except CTLs or separators>
fn is_token_char(c: char) -> bool {
    if !c.is_ascii() || c.is_ascii_control() {
        return false;
    }
    !matches!(
        c,
        '(' | ')'
            | '<'
            | '>'
            | '@'
            | ','
            | ';'
            | ':'
            | '\\'
            | '"'
            | '/'
            | '['
            | ']'
            | '?'
            | '='
            | '{'
            | '}'
            | ' '
            | '\t'
    )
}

// cookie-octet = %x21 / %x23-2B / %x2D-3A / %x3C-5B / %x5D-7E
fn is_cookie_octet(c: char) -> bool {
    matches!(c, '\x21' | '\x23'..='\x2B' | '\x2D'..='\x3A' | '\x3C'..='\x5B' | '\x5D'..='\x7E')
}

// Interior of a double-quoted value.
fn is_quoted_value_char(c: char) -> bool {
    c.is_ascii() && !c.is_ascii_control() && c != '"'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_accepts_a_plain_pair() {
        assert_eq!(Strictness::Strict.validate("session", "abc123", false), Ok(()));
    }

    #[test]
    fn strict_rejects_an_empty_name() {
        assert_eq!(
            Strictness::Strict.validate("", "v", false),
            Err(EncodeError::EmptyName)
        );
    }

    #[test]
    fn strict_reports_the_offending_name_character() {
        assert_eq!(
            Strictness::Strict.validate("foo bar", "v", false),
            Err(EncodeError::InvalidName(' '))
        );
        assert_eq!(
            Strictness::Strict.validate("a=b", "v", false),
            Err(EncodeError::InvalidName('='))
        );
    }

    #[test]
    fn strict_rejects_separator_and_control_value_characters() {
        for (value, offender) in [
            ("a,b", ','),
            ("a;b", ';'),
            ("a\\b", '\\'),
            ("a\"b", '"'),
            ("a b", ' '),
            ("a\x01b", '\x01'),
        ] {
            assert_eq!(
                Strictness::Strict.validate("n", value, false),
                Err(EncodeError::InvalidValue(offender))
            );
        }
    }

    #[test]
    fn wrap_relaxes_the_value_grammar_to_quoted_string_interior() {
        // Commas, spaces, and semicolons become legal inside the quotes.
        assert_eq!(Strictness::Strict.validate("n", "hello, world;", true), Ok(()));
        // The quote itself and control characters stay forbidden.
        assert_eq!(
            Strictness::Strict.validate("n", "say \"hi\"", true),
            Err(EncodeError::InvalidValue('"'))
        );
        assert_eq!(
            Strictness::Strict.validate("n", "a\tb", true),
            Err(EncodeError::InvalidValue('\t'))
        );
    }

    #[test]
    fn lax_accepts_anything() {
        assert_eq!(Strictness::Lax.validate("foo bar", "a;b\"c", false), Ok(()));
        assert_eq!(Strictness::Lax.validate("", "", false), Ok(()));
    }

    #[test]
    fn non_ascii_is_rejected_in_strict_mode() {
        assert_eq!(
            Strictness::Strict.validate("naïve", "v", false),
            Err(EncodeError::InvalidName('ï'))
        );
        assert_eq!(
            Strictness::Strict.validate("n", "héllo", false),
            Err(EncodeError::InvalidValue('é'))
        );
    }
}
