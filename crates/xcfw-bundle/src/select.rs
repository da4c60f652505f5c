//! Variant selection.

use xcfw_targets::Triple;

use crate::error::{BundleError, Result};
use crate::manifest::{Manifest, Variant};

/// Find the one variant of `manifest` built for `triple`.
///
/// Variants are scanned in manifest order. A second match stops the scan
/// with [`BundleError::MultipleMatches`]; ambiguity is never resolved by
/// preference. No match at all yields [`BundleError::NoMatch`].
pub fn select<'m>(triple: &Triple, manifest: &'m Manifest) -> Result<&'m Variant> {
    let mut found: Option<&Variant> = None;

    for variant in manifest.variants() {
        if !variant.matches(triple) {
            continue;
        }
        log::debug!("'{triple}' matches {}", variant.identifier);
        if found.is_some() {
            return Err(BundleError::MultipleMatches {
                triple: triple.to_string(),
            });
        }
        found = Some(variant);
    }

    found.ok_or_else(|| BundleError::NoMatch {
        triple: triple.to_string(),
    })
}
