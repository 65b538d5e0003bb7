// Version Provider Port (for testability)

use crate::domain::VersionIdentifier;
use std::sync::OnceLock;

static PROCESS_VERSION: OnceLock<VersionIdentifier> = OnceLock::new();

/// Process-wide version identifier, built from [`crate::VERSION`] on first use.
pub fn process_version() -> &'static VersionIdentifier {
    PROCESS_VERSION.get_or_init(|| VersionIdentifier::new(crate::VERSION))
}

/// Version provider interface (allows arbitrary identifiers in tests)
#[cfg_attr(test, mockall::automock)]
pub trait VersionProvider: Send + Sync {
    /// Get the version identifier. Pure read, never fails.
    fn version(&self) -> VersionIdentifier;
}

/// Build-time version provider (production)
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildVersionProvider;

impl VersionProvider for BuildVersionProvider {
    fn version(&self) -> VersionIdentifier {
        process_version().clone()
    }
}

/// Provider returning an identifier fixed at construction
#[derive(Debug, Clone)]
pub struct FixedVersionProvider {
    version: VersionIdentifier,
}

impl FixedVersionProvider {
    pub fn new(version: impl Into<VersionIdentifier>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl VersionProvider for FixedVersionProvider {
    fn version(&self) -> VersionIdentifier {
        self.version.clone()
    }
}
