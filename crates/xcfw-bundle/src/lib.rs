//! XCFramework bundle handling.
//!
//! An XCFramework is a directory holding one framework build per
//! platform/architecture/environment combination, described by an
//! `Info.plist` manifest. This crate loads that manifest, picks the single
//! variant matching a target triple, and installs it at an output path.

pub mod error;
pub mod install;
pub mod manifest;
pub mod select;

use std::path::Path;

use xcfw_targets::Triple;

pub use error::{BundleError, Result};
pub use install::{DirectoryCopy, Installer};
pub use manifest::{Manifest, Variant};
pub use select::select;

/// Resolve the variant of the manifest's XCFramework matching `triple_text`
/// and install it at `output`.
///
/// Returns the variant that was installed. Any failure aborts before the
/// installer is invoked, except for failures raised by the installer itself.
pub fn extract(
    triple_text: &str,
    manifest_path: &Path,
    output: &Path,
    installer: &impl Installer,
) -> Result<Variant> {
    let triple = Triple::parse(triple_text)?;
    let manifest = Manifest::load(manifest_path)?;
    let variant = select(&triple, &manifest)?;

    log::info!(
        "selected {} ({}) for '{triple}'",
        variant.identifier,
        variant.source_directory.display()
    );
    installer.install(&variant.source_directory, output)?;

    Ok(variant.clone())
}
