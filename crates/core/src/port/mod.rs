// Port Layer - Interfaces for external dependencies

pub mod version_provider;

// Re-exports
pub use version_provider::{
    process_version, BuildVersionProvider, FixedVersionProvider, VersionProvider,
};

#[cfg(test)]
pub use version_provider::MockVersionProvider;
