//! Error types for triple parsing.

/// Errors that can occur while parsing a target triple.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripleError {
    /// The triple does not split into 2 to 4 hyphen-separated segments.
    #[error("invalid triple: '{triple}', expected arch-apple-platform[version][-simulator]")]
    Malformed {
        /// The offending input.
        triple: String,
    },

    /// The architecture segment is not a known Apple architecture.
    #[error("unexpected arch: '{arch}', expected one of: {expected}")]
    UnsupportedArchitecture {
        /// The architecture segment as written.
        arch: String,
        /// Comma-separated list of accepted architectures.
        expected: String,
    },

    /// The platform token, once stripped of non-letters, is not a known Apple platform.
    #[error("unexpected platform: '{platform}', expected one of: {expected}")]
    UnsupportedPlatform {
        /// The stripped platform token.
        platform: String,
        /// Comma-separated list of accepted platforms.
        expected: String,
    },
}

/// Result type for triple operations.
pub type Result<T> = std::result::Result<T, TripleError>;
