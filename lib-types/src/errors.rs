//! Primitive parsing errors

use thiserror::Error;

/// Error while parsing a primitive from its textual form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Unsupported asset type: {0}")]
    UnsupportedAssetType(String),

    #[error("Unknown reward kind: {0}")]
    UnknownRewardKind(String),
}
