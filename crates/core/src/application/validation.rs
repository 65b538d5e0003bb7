// Version validation
use crate::domain::error::Result;
use crate::domain::{DomainError, VersionIdentifier};
use crate::port::VersionProvider;
use std::sync::Arc;
use tracing::{debug, warn};

/// Check a bare identifier: an empty version is a packaging defect.
pub fn validate_version(version: &VersionIdentifier) -> Result<()> {
    if version.is_empty() {
        return Err(DomainError::EmptyVersion);
    }
    Ok(())
}

/// Validates the identifier exposed by a [`VersionProvider`].
///
/// The provider itself never fails; this is the caller-side check that turns
/// an empty identifier into an error.
pub struct VersionValidator {
    provider: Arc<dyn VersionProvider>,
}

impl VersionValidator {
    pub fn new(provider: Arc<dyn VersionProvider>) -> Self {
        Self { provider }
    }

    /// Read the provider once and check the value.
    ///
    /// Returns the identifier on success so callers don't read twice.
    pub fn validate(&self) -> Result<VersionIdentifier> {
        let version = self.provider.version();

        match validate_version(&version) {
            Ok(()) => {
                debug!(version = %version, "Version identifier is valid");
                Ok(version)
            }
            Err(e) => {
                warn!(error = %e, "Version identifier failed validation");
                Err(e)
            }
        }
    }
}
