//! Common types shared across the Wayfarer crates.

use std::fmt;

use crate::WayfarerError;

/// A Wayfarer API access token.
///
/// Tokens are opaque strings issued by the account service. Public tokens
/// start with `pk.`, secret tokens with `sk.`. The constructor only
/// rejects empty input; scheme-level validity is the job of a
/// [`TokenValidator`].
#[derive(Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new access token from a string.
    ///
    /// # Errors
    /// Returns an error if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, WayfarerError> {
        let token = token.into();
        if token.is_empty() {
            return Err(WayfarerError::InvalidAccessToken(
                "token must not be empty".to_owned(),
            ));
        }
        Ok(Self(token))
    }

    /// Get the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Predicate deciding whether an access token may be sent to the service.
///
/// Consumed by the request builder right before a request is frozen; an
/// invalid token fails the build, it is never sent and then rejected
/// remotely.
pub trait TokenValidator: Send + Sync {
    /// Returns `true` if the token is acceptable for a request.
    fn is_valid(&self, token: &str) -> bool;
}

/// Default token validator matching the account service's token schemes.
///
/// A token is valid when it carries a `pk.` (public) or `sk.` (secret)
/// prefix followed by a non-empty payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixTokenValidator;

impl TokenValidator for PrefixTokenValidator {
    fn is_valid(&self, token: &str) -> bool {
        ["pk.", "sk."]
            .iter()
            .any(|scheme| token.len() > scheme.len() && token.starts_with(scheme))
    }
}
