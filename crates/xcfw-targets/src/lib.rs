//! Apple target triple parsing.
//!
//! A triple such as `x86_64-apple-ios11.0-simulator` is decomposed into:
//! - **Architecture:** one of a closed set of Apple CPU architectures
//! - **Platform:** one of a closed set of Apple operating systems, version stripped
//! - **Environment:** simulator or device

pub mod arch;
pub mod error;
pub mod platform;
pub mod triple;

pub use arch::Architecture;
pub use error::{Result, TripleError};
pub use platform::ApplePlatform;
pub use triple::Triple;
