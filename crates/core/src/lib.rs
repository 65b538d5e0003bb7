// bmake-shim Core - Version Identifier, Ports & Validation
// NO CLI or logging-backend dependencies

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{validate_version, VersionValidator};
pub use domain::{DomainError, VersionIdentifier};
pub use error::{AppError, Result};
pub use port::{process_version, BuildVersionProvider, FixedVersionProvider, VersionProvider};

/// Package name reported by the shim
pub const PACKAGE_NAME: &str = "bmake-shim";

/// Version of the shim package.
///
/// Taken from `BMAKE_SHIM_VERSION` at compile time when set (release builds
/// stamp a tag or commit there), otherwise from the crate manifest.
pub const VERSION: &str = match option_env!("BMAKE_SHIM_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};
