// Domain Layer - Version identifier and its errors

pub mod error;
pub mod version;

// Re-exports
pub use error::DomainError;
pub use version::VersionIdentifier;
