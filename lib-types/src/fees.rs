//! Fee and reward primitives for bullion certification.
//!
//! Pure data types for minting-fee and reward calculation. Behavior
//! (computation logic) lives in lib-fees.
//!
//! Rule: These types must remain behavior-free and serialization-stable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TypesError;
use crate::primitives::Amount;

// =============================================================================
// FIXED-POINT SCALES
// =============================================================================

/// `weight_grams` carries two implied decimal digits (10050 = 100.50 g)
pub const WEIGHT_SCALE: u64 = 100;

/// `purity_percentage` carries three implied decimal digits (99_990 = 99.990%)
pub const PURITY_SCALE: u64 = 1_000;

/// Upper bound for `weight_grams` (100,000.00 g)
pub const MAX_WEIGHT_GRAMS: u64 = 10_000_000;

/// Upper bound for `purity_percentage` (100.000%)
pub const MAX_PURITY_PERCENTAGE: u64 = 100_000;

/// Grams per troy ounce, scaled x10000 (31.1034 g)
pub const GRAMS_PER_TROY_OUNCE: u64 = 311_034;

/// Scale of the intermediate troy-ounce figure
pub const TROY_OUNCE_SCALE: u64 = 10_000;

// =============================================================================
// ASSET TYPE
// =============================================================================

/// Metal class of a certified asset
///
/// Serialized by name ("Silver", "Gold") so it can key JSON maps and appear
/// in TOML configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AssetType {
    /// Fee bucketed by whole troy ounces
    Silver,
    /// Fee bucketed by whole grams
    Gold,
}

impl AssetType {
    /// Every supported asset type
    pub const ALL: [AssetType; 2] = [AssetType::Silver, AssetType::Gold];

    /// Canonical name
    pub const fn as_str(self) -> &'static str {
        match self {
            AssetType::Silver => "Silver",
            AssetType::Gold => "Gold",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Silver" => Ok(AssetType::Silver),
            "Gold" => Ok(AssetType::Gold),
            other => Err(TypesError::UnsupportedAssetType(other.to_string())),
        }
    }
}

impl TryFrom<String> for AssetType {
    type Error = TypesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AssetType> for String {
    fn from(value: AssetType) -> Self {
        value.as_str().to_string()
    }
}

// =============================================================================
// REWARD RATES
// =============================================================================

/// Which reward rate an administrative update targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    /// Points per troy ounce of registered silver
    SilverPerOz,
    /// Points per gram of registered gold
    GoldPerGram,
    /// Flat points paid to the validator whose vote finalizes an asset
    ValidatorFinalization,
}

impl FromStr for RewardKind {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "silver_per_oz" | "silver" => Ok(RewardKind::SilverPerOz),
            "gold_per_gram" | "gold" => Ok(RewardKind::GoldPerGram),
            "validator_finalization" | "validator" => Ok(RewardKind::ValidatorFinalization),
            other => Err(TypesError::UnknownRewardKind(other.to_string())),
        }
    }
}

impl fmt::Display for RewardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RewardKind::SilverPerOz => "silver_per_oz",
            RewardKind::GoldPerGram => "gold_per_gram",
            RewardKind::ValidatorFinalization => "validator_finalization",
        };
        f.write_str(name)
    }
}

/// Reward-point rates applied at registration and finalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRates {
    /// Points credited per troy ounce of silver, scaled x10000
    #[serde(default = "default_silver_per_oz")]
    pub silver_per_oz: Amount,
    /// Points credited per gram of gold
    #[serde(default = "default_gold_per_gram")]
    pub gold_per_gram: Amount,
    /// Points credited to the finalizing validator
    #[serde(default = "default_validator_finalization")]
    pub validator_finalization: Amount,
}

fn default_silver_per_oz() -> Amount {
    1_000_000
}

fn default_gold_per_gram() -> Amount {
    10
}

fn default_validator_finalization() -> Amount {
    50
}

impl RewardRates {
    /// Rates with every reward disabled
    pub const fn zero() -> Self {
        Self {
            silver_per_oz: 0,
            gold_per_gram: 0,
            validator_finalization: 0,
        }
    }

    /// Read one rate
    pub fn get(&self, kind: RewardKind) -> Amount {
        match kind {
            RewardKind::SilverPerOz => self.silver_per_oz,
            RewardKind::GoldPerGram => self.gold_per_gram,
            RewardKind::ValidatorFinalization => self.validator_finalization,
        }
    }

    /// Overwrite one rate
    pub fn set(&mut self, kind: RewardKind, value: Amount) {
        match kind {
            RewardKind::SilverPerOz => self.silver_per_oz = value,
            RewardKind::GoldPerGram => self.gold_per_gram = value,
            RewardKind::ValidatorFinalization => self.validator_finalization = value,
        }
    }
}

impl Default for RewardRates {
    fn default() -> Self {
        Self {
            silver_per_oz: default_silver_per_oz(),
            gold_per_gram: default_gold_per_gram(),
            validator_finalization: default_validator_finalization(),
        }
    }
}
