use thiserror::Error;

/// Returned when a value is not in the boolean token whitelist.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unrecognized boolean token {token:?}")]
pub struct UnrecognizedToken {
    pub token: String,
}
