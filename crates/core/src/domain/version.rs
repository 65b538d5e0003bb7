// Version Identifier Domain Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Human-readable version/build tag of the shim package (e.g. `1.2.3`).
///
/// Immutable once built: clones share the same backing string and no `&mut`
/// access to the contents is exposed. Emptiness is not rejected here so a
/// misconfigured build can still be represented and caught by validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct VersionIdentifier(Arc<str>);

impl VersionIdentifier {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(Arc::from(value.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VersionIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VersionIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VersionIdentifier {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl From<VersionIdentifier> for String {
    fn from(value: VersionIdentifier) -> Self {
        value.0.to_string()
    }
}
