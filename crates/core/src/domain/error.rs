// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("expected version to be non-empty")]
    EmptyVersion,
}

pub type Result<T> = std::result::Result<T, DomainError>;
