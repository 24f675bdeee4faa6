//! Encoding errors for the wire codec.

/// Error raised when a wire segment cannot be encoded or decoded.
///
/// These surface immediately at the codec call that received the malformed
/// value; they are never deferred or silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// A segment that should be numeric did not parse.
    #[error("invalid numeric value {value:?} (expected a number)")]
    Number {
        /// The offending segment text.
        value: String,
    },

    /// A coordinate segment was not a `lon,lat` pair.
    #[error("invalid coordinate segment {segment:?} (expected \"lon,lat\")")]
    Point {
        /// The offending segment text.
        segment: String,
    },

    /// A bearing segment was not empty and not an `angle,tolerance` pair.
    #[error("invalid bearing segment {segment:?} (expected \"angle,tolerance\")")]
    Bearing {
        /// The offending segment text.
        segment: String,
    },

    /// An approach segment was outside the allowed vocabulary.
    #[error("invalid approach {value:?} (must be one of curb, unrestricted)")]
    Approach {
        /// The offending segment text.
        value: String,
    },

    /// An annotation tag was outside the allowed vocabulary.
    #[error("invalid annotation {value:?}")]
    Annotation {
        /// The offending tag text.
        value: String,
    },
}
