//! CPU architectures that can appear in an Apple target triple.

use std::fmt;
use std::str::FromStr;

use crate::error::TripleError;

/// An Apple CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    I386,
    Arm64,
    /// ARM64 with pointer authentication.
    Arm64e,
    X86_64,
    Armv7s,
    /// 32-bit ARM used by older Apple Watch hardware.
    Armv7k,
}

impl Architecture {
    /// Every accepted architecture.
    pub const ALL: [Architecture; 6] = [
        Architecture::I386,
        Architecture::Arm64,
        Architecture::Arm64e,
        Architecture::X86_64,
        Architecture::Armv7s,
        Architecture::Armv7k,
    ];

    /// The spelling used in triples and in `SupportedArchitectures`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::I386 => "i386",
            Architecture::Arm64 => "arm64",
            Architecture::Arm64e => "arm64e",
            Architecture::X86_64 => "x86_64",
            Architecture::Armv7s => "armv7s",
            Architecture::Armv7k => "armv7k",
        }
    }

    /// Comma-separated list of accepted spellings, for diagnostics.
    pub fn expected_list() -> String {
        Self::ALL
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = TripleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| TripleError::UnsupportedArchitecture {
                arch: s.to_string(),
                expected: Self::expected_list(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_spelling() {
        for arch in Architecture::ALL {
            assert_eq!(arch.as_str().parse::<Architecture>().unwrap(), arch);
        }
    }

    #[test]
    fn rejects_unknown_arch() {
        let err = "mips".parse::<Architecture>().unwrap_err();
        assert!(matches!(
            err,
            TripleError::UnsupportedArchitecture { ref arch, .. } if arch == "mips"
        ));
        assert!(err.to_string().contains("arm64e"));
    }

    #[test]
    fn rust_style_names_are_not_accepted() {
        assert!("aarch64".parse::<Architecture>().is_err());
        assert!("ARM64".parse::<Architecture>().is_err());
    }
}
