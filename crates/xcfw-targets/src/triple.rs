//! Target triple parsing.
//!
//! Accepted shapes:
//! - `arch-apple-platform[version]-simulator` (4 segments)
//! - `arch-apple-platform[version]` (3 segments, vendor spelled out)
//! - `arch-platform[version][-simulator]` (vendor omitted)

use std::fmt;
use std::str::FromStr;

use crate::arch::Architecture;
use crate::error::{Result, TripleError};
use crate::platform::ApplePlatform;

/// Vendor segment recognised in the second position.
const VENDOR: &str = "apple";

/// Final segment that marks a simulator build.
const SIMULATOR: &str = "simulator";

/// A parsed Apple target triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    architecture: Architecture,
    platform: ApplePlatform,
    is_simulator: bool,
    original: String,
}

impl Triple {
    /// Parse a triple such as `x86_64-apple-ios11.0-simulator`.
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('-').collect();
        if !(2..=4).contains(&parts.len()) {
            return Err(TripleError::Malformed {
                triple: text.to_string(),
            });
        }

        let architecture: Architecture = parts[0].parse()?;

        let platform_token = if parts[1] == VENDOR && parts.len() > 2 {
            parts[2]
        } else {
            parts[1]
        };
        let platform = ApplePlatform::from_token(platform_token)?;

        let is_simulator = parts.last() == Some(&SIMULATOR);

        log::debug!(
            "parsed triple '{text}': arch={architecture}, platform={platform}, simulator={is_simulator}"
        );

        Ok(Self {
            architecture,
            platform,
            is_simulator,
            original: text.to_string(),
        })
    }

    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    pub fn platform(&self) -> ApplePlatform {
        self.platform
    }

    /// Whether the triple targets a simulator rather than a device.
    pub fn is_simulator(&self) -> bool {
        self.is_simulator
    }

    /// The triple exactly as it was given.
    pub fn as_str(&self) -> &str {
        &self.original
    }
}

impl FromStr for Triple {
    type Err = TripleError;

    fn from_str(s: &str) -> Result<Self> {
        Triple::parse(s)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Triple {
        Triple::parse(s).unwrap_or_else(|e| panic!("{s}: {e}"))
    }

    #[test]
    fn four_segment_simulator() {
        let t = parse("x86_64-apple-ios11.0-simulator");
        assert_eq!(t.architecture(), Architecture::X86_64);
        assert_eq!(t.platform(), ApplePlatform::Ios);
        assert!(t.is_simulator());
    }

    #[test]
    fn three_segment_device() {
        let t = parse("arm64-apple-ios");
        assert_eq!(t.architecture(), Architecture::Arm64);
        assert_eq!(t.platform(), ApplePlatform::Ios);
        assert!(!t.is_simulator());
    }

    #[test]
    fn three_segment_with_version() {
        let t = parse("arm64e-apple-macosx11.0");
        assert_eq!(t.architecture(), Architecture::Arm64e);
        assert_eq!(t.platform(), ApplePlatform::MacOSX);
        assert!(!t.is_simulator());
    }

    #[test]
    fn two_segment_terse_form() {
        let t = parse("armv7k-watchos8");
        assert_eq!(t.architecture(), Architecture::Armv7k);
        assert_eq!(t.platform(), ApplePlatform::WatchOS);
        assert!(!t.is_simulator());
    }

    #[test]
    fn vendorless_simulator() {
        let t = parse("arm64-tvos15-simulator");
        assert_eq!(t.platform(), ApplePlatform::TvOS);
        assert!(t.is_simulator());
    }

    #[test]
    fn four_segment_non_simulator_suffix() {
        // Only the literal "simulator" marks a simulator build.
        let t = parse("arm64-apple-ios14.0-macabi");
        assert!(!t.is_simulator());
    }

    #[test]
    fn unsupported_architecture() {
        let err = Triple::parse("mips-apple-ios").unwrap_err();
        assert!(matches!(err, TripleError::UnsupportedArchitecture { .. }));
    }

    #[test]
    fn unsupported_platform() {
        let err = Triple::parse("arm64-apple-linux").unwrap_err();
        assert!(matches!(
            err,
            TripleError::UnsupportedPlatform { ref platform, .. } if platform == "linux"
        ));
    }

    #[test]
    fn architecture_checked_before_platform() {
        let err = Triple::parse("mips-apple-linux").unwrap_err();
        assert!(matches!(err, TripleError::UnsupportedArchitecture { .. }));
    }

    #[test]
    fn too_few_segments() {
        let err = Triple::parse("arm64").unwrap_err();
        assert_eq!(
            err,
            TripleError::Malformed {
                triple: "arm64".into()
            }
        );
        assert!(err
            .to_string()
            .contains("arch-apple-platform[version][-simulator]"));
    }

    #[test]
    fn too_many_segments() {
        for s in [
            "arm64-apple-ios-simulator-extra",
            "arm64-apple-ios-a-b-c",
        ] {
            assert!(matches!(
                Triple::parse(s).unwrap_err(),
                TripleError::Malformed { .. }
            ));
        }
    }

    #[test]
    fn empty_platform_segment_is_unsupported() {
        let err = Triple::parse("arm64--simulator").unwrap_err();
        assert!(matches!(err, TripleError::UnsupportedPlatform { .. }));
    }

    #[test]
    fn vendor_without_platform() {
        let err = Triple::parse("arm64-apple").unwrap_err();
        assert!(matches!(
            err,
            TripleError::UnsupportedPlatform { ref platform, .. } if platform == "apple"
        ));
    }

    #[test]
    fn display_keeps_original_text() {
        let t = parse("x86_64-apple-ios11.0-simulator");
        assert_eq!(t.to_string(), "x86_64-apple-ios11.0-simulator");
        assert_eq!(t.as_str(), "x86_64-apple-ios11.0-simulator");
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let t: Triple = "i386-apple-ios-simulator".parse().unwrap();
        assert_eq!(t.architecture(), Architecture::I386);
        assert!(t.is_simulator());
    }
}
