//! Apple operating system platforms.

use std::fmt;
use std::str::FromStr;

use crate::error::TripleError;

/// An Apple platform as named in triples and in `SupportedPlatform`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplePlatform {
    WatchOS,
    Ios,
    TvOS,
    MacOSX,
}

impl ApplePlatform {
    /// Every accepted platform.
    pub const ALL: [ApplePlatform; 4] = [
        ApplePlatform::WatchOS,
        ApplePlatform::Ios,
        ApplePlatform::TvOS,
        ApplePlatform::MacOSX,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplePlatform::WatchOS => "watchos",
            ApplePlatform::Ios => "ios",
            ApplePlatform::TvOS => "tvos",
            ApplePlatform::MacOSX => "macosx",
        }
    }

    /// Comma-separated list of accepted spellings, for diagnostics.
    pub fn expected_list() -> String {
        Self::ALL
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parse a raw platform token such as `ios11.0` or `watchos8`.
    ///
    /// Every character that is not a lowercase ASCII letter is dropped before
    /// the lookup, so embedded version numbers never reach the comparison.
    pub fn from_token(token: &str) -> Result<Self, TripleError> {
        strip_version(token).parse()
    }
}

/// Remove everything but lowercase ASCII letters from a platform token.
pub fn strip_version(token: &str) -> String {
    token.chars().filter(|c| c.is_ascii_lowercase()).collect()
}

impl fmt::Display for ApplePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplePlatform {
    type Err = TripleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| TripleError::UnsupportedPlatform {
                platform: s.to_string(),
                expected: Self::expected_list(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_versions() {
        assert_eq!(strip_version("ios11.0"), "ios");
        assert_eq!(strip_version("watchos8"), "watchos");
        assert_eq!(strip_version("macosx10.15.4"), "macosx");
    }

    #[test]
    fn strip_is_idempotent_on_clean_tokens() {
        for platform in ApplePlatform::ALL {
            let once = strip_version(platform.as_str());
            assert_eq!(once, platform.as_str());
            assert_eq!(strip_version(&once), once);
        }
    }

    #[test]
    fn strip_drops_uppercase() {
        // No case folding: "iOS" loses its capitals and becomes unrecognisable.
        assert_eq!(strip_version("iOS14"), "i");
        assert!(ApplePlatform::from_token("iOS14").is_err());
    }

    #[test]
    fn from_token_with_version() {
        assert_eq!(
            ApplePlatform::from_token("tvos15.2").unwrap(),
            ApplePlatform::TvOS
        );
    }

    #[test]
    fn unknown_platform_reports_stripped_token() {
        let err = ApplePlatform::from_token("linux5").unwrap_err();
        assert!(matches!(
            err,
            TripleError::UnsupportedPlatform { ref platform, .. } if platform == "linux"
        ));
    }
}
