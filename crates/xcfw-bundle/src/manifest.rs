//! `Info.plist` parsing for XCFramework bundles.
//!
//! The manifest lives at `<xcframework>/Info.plist` and lists every built
//! variant under `AvailableLibraries`. Each variant's framework directory is
//! found at `<xcframework>/<LibraryIdentifier>/<LibraryPath>`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use plist::Value;
use serde::Deserialize;
use xcfw_targets::Triple;

use crate::error::{BundleError, Result};

/// The only manifest format version understood.
pub const SUPPORTED_FORMAT_VERSION: &str = "1.0";

const FORMAT_VERSION_KEY: &str = "XCFrameworkFormatVersion";
const AVAILABLE_LIBRARIES_KEY: &str = "AvailableLibraries";

/// Value of `SupportedPlatformVariant` that marks a simulator build.
const SIMULATOR_VARIANT: &str = "simulator";

/// One entry of `AvailableLibraries`, as stored in the manifest.
#[derive(Debug, Deserialize)]
struct LibraryRecord {
    #[serde(rename = "LibraryIdentifier")]
    identifier: String,
    #[serde(rename = "LibraryPath")]
    path: String,
    #[serde(rename = "SupportedArchitectures")]
    architectures: Vec<String>,
    #[serde(rename = "SupportedPlatform")]
    platform: String,
    #[serde(rename = "SupportedPlatformVariant", default)]
    platform_variant: Option<String>,
}

/// A single platform/architecture build inside an XCFramework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Library file name without its extension (e.g. `Foo` for `Foo.framework`).
    pub name: String,
    /// The `LibraryIdentifier` directory, e.g. `ios-arm64_x86_64-simulator`.
    pub identifier: String,
    /// Directory to copy: `<root>/<identifier>/<LibraryPath>`.
    pub source_directory: PathBuf,
    /// The binary inside the framework: `<source_directory>/<name>`.
    pub binary_path: PathBuf,
    /// `SupportedArchitectures`, e.g. `arm64` and `x86_64` for a fat simulator slice.
    pub supported_architectures: BTreeSet<String>,
    /// Platform name as written in the manifest. Not validated.
    pub platform: String,
    /// True when `SupportedPlatformVariant` is `simulator`.
    pub is_simulator: bool,
}

impl Variant {
    fn from_record(root: &Path, record: LibraryRecord) -> Self {
        let name = Path::new(&record.path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| record.path.clone());
        let source_directory = root.join(&record.identifier).join(&record.path);
        let binary_path = source_directory.join(&name);

        Self {
            name,
            identifier: record.identifier,
            source_directory,
            binary_path,
            supported_architectures: record.architectures.into_iter().collect(),
            platform: record.platform,
            is_simulator: record.platform_variant.as_deref() == Some(SIMULATOR_VARIANT),
        }
    }

    /// Whether this variant was built for `triple`: same platform, the
    /// triple's architecture among the supported ones, and the same
    /// simulator/device environment.
    pub fn matches(&self, triple: &Triple) -> bool {
        self.platform == triple.platform().as_str()
            && self
                .supported_architectures
                .contains(triple.architecture().as_str())
            && self.is_simulator == triple.is_simulator()
    }
}

/// A parsed XCFramework manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    format_version: String,
    root: PathBuf,
    variants: Vec<Variant>,
}

impl Manifest {
    /// Load the manifest at `path` (binary or XML property list).
    ///
    /// Variant paths are resolved against the directory containing `path`.
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("loading manifest {}", path.display());
        let value = Value::from_file(path)?;
        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self::from_value(root, &value)
    }

    /// Build a manifest from an already-decoded property list.
    pub fn from_value(root: impl Into<PathBuf>, value: &Value) -> Result<Self> {
        let root = root.into();
        let dict = value.as_dictionary().ok_or(BundleError::NotADictionary)?;

        let format_version = dict
            .get(FORMAT_VERSION_KEY)
            .and_then(Value::as_string)
            .ok_or(BundleError::MissingKey {
                key: FORMAT_VERSION_KEY,
            })?;
        if format_version != SUPPORTED_FORMAT_VERSION {
            return Err(BundleError::UnsupportedVersion {
                version: format_version.to_string(),
            });
        }

        let libraries = dict
            .get(AVAILABLE_LIBRARIES_KEY)
            .and_then(Value::as_array)
            .ok_or(BundleError::MissingKey {
                key: AVAILABLE_LIBRARIES_KEY,
            })?;

        let mut variants = Vec::with_capacity(libraries.len());
        for (index, library) in libraries.iter().enumerate() {
            let record: LibraryRecord =
                plist::from_value(library)
                    .map_err(|source| BundleError::Library { index, source })?;
            variants.push(Variant::from_record(&root, record));
        }
        log::debug!("manifest lists {} variant(s)", variants.len());

        Ok(Self {
            format_version: format_version.to_string(),
            root,
            variants,
        })
    }

    pub fn format_version(&self) -> &str {
        &self.format_version
    }

    /// Directory containing the manifest.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Variants in manifest order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }
}
