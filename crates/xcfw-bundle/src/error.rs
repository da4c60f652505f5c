//! Error types for bundle operations.

use std::path::PathBuf;

use xcfw_targets::TripleError;

/// Errors that can occur while loading, selecting from, or installing an XCFramework.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    /// The requested triple could not be parsed.
    #[error(transparent)]
    Triple(#[from] TripleError),

    /// The manifest is not a readable property list, or a record is malformed.
    #[error("manifest parse error: {0}")]
    Plist(#[from] plist::Error),

    /// A library record could not be decoded.
    #[error("manifest library #{index}: {source}")]
    Library {
        /// Position of the record in `AvailableLibraries`.
        index: usize,
        /// The deserializer error.
        #[source]
        source: plist::Error,
    },

    /// The manifest's top-level value is not a dictionary.
    #[error("manifest top-level value is not a dictionary")]
    NotADictionary,

    /// A required top-level manifest key is absent or has the wrong type.
    #[error("manifest is missing required key '{key}'")]
    MissingKey {
        /// The key that was expected.
        key: &'static str,
    },

    /// The manifest declares a format version other than the supported one.
    #[error("unsupported xcframework version: {version}")]
    UnsupportedVersion {
        /// The version found in the manifest.
        version: String,
    },

    /// No variant matches the triple.
    #[error(".framework not found for triple: '{triple}'")]
    NoMatch {
        /// The triple as given on the command line.
        triple: String,
    },

    /// More than one variant matches the triple.
    #[error("multiple .framework matches found for triple: '{triple}'")]
    MultipleMatches {
        /// The triple as given on the command line.
        triple: String,
    },

    /// I/O failure while copying a framework.
    #[error("failed to copy {}: {source}", path.display())]
    Copy {
        /// The path being read or written.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// A symbolic link inside the source tree points at nothing.
    #[error("dangling symbolic link: {}", path.display())]
    DanglingSymlink {
        /// The link itself.
        path: PathBuf,
    },
}

/// Result type for bundle operations.
pub type Result<T> = std::result::Result<T, BundleError>;
