//! The directions error taxonomy.
//!
//! Four kinds of failure, all surfaced to the immediate caller and never
//! logged-and-swallowed: invariant violations at build time, malformed
//! scalars in the codec, transport failures propagated verbatim, and
//! response decode failures. Retries are a transport-layer concern and do
//! not happen here.

use wayfarer_directions_http::TransportError;
use wayfarer_directions_model::EncodingError;

/// Error type for building and executing directions requests.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// A build-time invariant was violated. Always names the offending
    /// field; recoverable by correcting the input and rebuilding.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// The request field that failed validation.
        field: &'static str,
        /// What the constraint expected.
        reason: String,
    },

    /// A scalar could not be encoded to or decoded from the wire grammar.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// The transport collaborator failed; propagated verbatim.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body was malformed or incomplete.
    #[error("failed to decode directions response: {reason}")]
    Decode {
        /// Why the response could not be used.
        reason: String,
    },
}

impl DirectionsError {
    /// Shorthand for a validation failure on `field`.
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Shorthand for a response decode failure.
    pub(crate) fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }
}

/// Convenience result type for directions operations.
pub type DirectionsResult<T> = Result<T, DirectionsError>;
