use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Failures of catalog operations, worded for the user.
///
/// The underlying transport or decode cause is logged where it is translated
/// and is never carried here, so the error can travel inside actions.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum CatalogError {
    #[error("Enter a name or number to search")]
    Validation,
    #[error("No creature found for '{0}'")]
    NotFound(String),
    #[error("Could not reach the catalog, try again")]
    RemoteUnavailable,
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Io(String),
    #[error("encode error: {0}")]
    Encode(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Encode(err.to_string())
    }
}
