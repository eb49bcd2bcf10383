//! Validated recipient addresses.

use crate::error::{Error, Result};

/// An email address that passed format validation.
///
/// The accepted shape is `local@domain.tld`: no whitespace, exactly one `@`,
/// and a `.` inside the domain with at least one character on each side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Recipient(String);

impl Recipient {
    /// Parses and validates an email address.
    ///
    /// The input is taken verbatim; no trimming or case folding happens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the address is malformed.
    pub fn parse(email: impl Into<String>) -> Result<Self> {
        let email = email.into();
        if is_valid_email(&email) {
            Ok(Self(email))
        } else {
            Err(Error::InvalidFormat(email))
        }
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the domain part of the address.
    #[must_use]
    pub fn domain(&self) -> &str {
        domain_of(&self.0).unwrap_or_default()
    }

    /// Consumes the recipient, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Recipient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Recipient {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Characters matched by the `\s` class of an ECMAScript regular expression.
///
/// This differs from [`char::is_whitespace`]: U+FEFF is included and U+0085
/// is not.
const SEPARATORS: &[char] = &[
    '\u{0009}', '\u{000A}', '\u{000B}', '\u{000C}', '\u{000D}', '\u{0020}', '\u{00A0}',
    '\u{1680}', '\u{2000}', '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}',
    '\u{2006}', '\u{2007}', '\u{2008}', '\u{2009}', '\u{200A}', '\u{2028}', '\u{2029}',
    '\u{202F}', '\u{205F}', '\u{3000}', '\u{FEFF}',
];

/// Checks an address against `^[^\s@]+@[^\s@]+\.[^\s@]+$`, where `\s` is
/// the ECMAScript whitespace class.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(SEPARATORS) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Needs a dot with something on both sides
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Returns the substring after the first `@`, if any.
#[must_use]
pub fn domain_of(email: &str) -> Option<&str> {
    email.split_once('@').map(|(_, domain)| domain)
}
