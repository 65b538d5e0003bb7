// Application Layer - Use Cases

pub mod validation;

// Re-exports
pub use validation::{validate_version, VersionValidator};
