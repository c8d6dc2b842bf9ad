//! Asset records and registration requests

use serde::{Deserialize, Serialize};

use lib_types::{
    Address, Amount, AssetId, AssetType, MAX_PURITY_PERCENTAGE, MAX_WEIGHT_GRAMS,
};

use crate::errors::{CertifyError, CertifyResult};

/// Minimum number of image URIs on a claim
pub const MIN_IMAGE_URIS: usize = 2;

/// Certification outcome of an asset claim
///
/// `Pending -> True` or `Pending -> False`; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetStatus {
    Pending,
    True,
    False,
}

impl AssetStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, AssetStatus::Pending)
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AssetStatus::Pending => "Pending",
            AssetStatus::True => "True",
            AssetStatus::False => "False",
        };
        f.write_str(s)
    }
}

/// A claim submitted for certification
///
/// Descriptive strings are opaque; only the measured fields are checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    /// Raw asset type name; anything other than Silver/Gold is rejected
    pub asset_type: String,
    pub year: String,
    pub asset_country: String,
    pub creator_country: String,
    pub asset_name: String,
    /// Grams x100
    pub weight_grams: u64,
    /// Percent x1000
    pub purity_percentage: u64,
    pub quantity: u64,
    pub is_fungible: bool,
    /// First entry is the canonical image
    pub image_uris: Vec<String>,
}

impl RegistrationRequest {
    /// Check cardinality and fixed-point bounds.
    ///
    /// Images are checked before weight and purity.
    pub fn validate(&self) -> CertifyResult<()> {
        if self.image_uris.len() < MIN_IMAGE_URIS {
            return Err(CertifyError::Validation(format!(
                "at least {} image URIs required, got {}",
                MIN_IMAGE_URIS,
                self.image_uris.len()
            )));
        }
        if self.purity_percentage > MAX_PURITY_PERCENTAGE {
            return Err(CertifyError::Validation(format!(
                "purity_percentage {} exceeds {}",
                self.purity_percentage, MAX_PURITY_PERCENTAGE
            )));
        }
        if self.weight_grams > MAX_WEIGHT_GRAMS {
            return Err(CertifyError::Validation(format!(
                "weight_grams {} exceeds {}",
                self.weight_grams, MAX_WEIGHT_GRAMS
            )));
        }
        Ok(())
    }

    /// Resolve the asset type name
    pub fn parsed_asset_type(&self) -> CertifyResult<AssetType> {
        Ok(self.asset_type.parse::<AssetType>()?)
    }
}

/// A registered claim with its embedded vote tally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub id: AssetId,
    pub name: String,
    pub asset_type: AssetType,
    pub year: String,
    pub asset_country: String,
    pub creator_country: String,
    pub asset_name: String,
    pub weight_grams: u64,
    pub purity_percentage: u64,
    pub quantity: u64,
    pub is_fungible: bool,
    pub image_uris: Vec<String>,
    /// Submitting identity, immutable after creation
    pub creator: Address,
    /// Fee computed at registration
    pub minting_fee: Amount,
    pub true_votes: u8,
    pub false_votes: u8,
    pub status: AssetStatus,
}

impl AssetRecord {
    /// Create a pending record with zero counters
    pub(crate) fn pending(
        id: AssetId,
        creator: Address,
        asset_type: AssetType,
        minting_fee: Amount,
        request: RegistrationRequest,
    ) -> Self {
        Self {
            id,
            name: request.name,
            asset_type,
            year: request.year,
            asset_country: request.asset_country,
            creator_country: request.creator_country,
            asset_name: request.asset_name,
            weight_grams: request.weight_grams,
            purity_percentage: request.purity_percentage,
            quantity: request.quantity,
            is_fungible: request.is_fungible,
            image_uris: request.image_uris,
            creator,
            minting_fee,
            true_votes: 0,
            false_votes: 0,
            status: AssetStatus::Pending,
        }
    }

    /// Canonical (first) image
    pub fn canonical_image(&self) -> Option<&str> {
        self.image_uris.first().map(String::as_str)
    }

    /// Votes cast so far
    pub fn total_votes(&self) -> u8 {
        self.true_votes + self.false_votes
    }

    pub fn is_pending(&self) -> bool {
        self.status == AssetStatus::Pending
    }
}
