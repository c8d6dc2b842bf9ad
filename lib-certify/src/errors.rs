//! Certification Errors
//!
//! Every failure is synchronous and leaves state untouched: a call that
//! returns an error is a no-op.

use lib_types::{Address, AssetId, TypesError};
use thiserror::Error;

use crate::asset::AssetStatus;

/// Error during certification operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CertifyError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unsupported asset type: {0}")]
    UnsupportedAssetType(String),

    #[error("Asset not found: {0}")]
    NotFound(AssetId),

    #[error("Not a validator: {0}")]
    NotAValidator(Address),

    #[error("Validator {validator} already voted on asset {asset_id}")]
    DuplicateVote { asset_id: AssetId, validator: Address },

    #[error("Asset {asset_id} already finalized as {status:?}")]
    AlreadyFinalized { asset_id: AssetId, status: AssetStatus },

    #[error("Validator roster full: max {max}")]
    Capacity { max: usize },

    #[error("Validator already registered: {0}")]
    DuplicateValidator(Address),

    #[error("Validator not present: {0}")]
    NotPresent(Address),

    #[error("Unauthorized: {0} is not the administrator")]
    Authorization(Address),

    #[error("Out of range: {value} not in [{min}, {max}]")]
    Range { value: u64, min: u64, max: u64 },

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<TypesError> for CertifyError {
    fn from(err: TypesError) -> Self {
        match err {
            TypesError::UnsupportedAssetType(name) => CertifyError::UnsupportedAssetType(name),
            other => CertifyError::Validation(other.to_string()),
        }
    }
}

/// Result type for certification operations
pub type CertifyResult<T> = Result<T, CertifyError>;
