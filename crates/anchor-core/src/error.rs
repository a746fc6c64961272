use thiserror::Error;

/// Errors raised while selecting a slug style by name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("unknown slug style '{0}' (expected generic, github or gitlab)")]
    UnknownStyle(String),
}
