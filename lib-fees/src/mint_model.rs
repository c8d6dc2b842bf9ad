//! Minting Fee Model (Pure Function)
//!
//! Deterministic fee and reward computation for bullion registrations.
//!
//! # Rules (enforced in code)
//!
//! - No floats - all arithmetic is integer
//! - u128 arithmetic internally to prevent overflow
//! - Floor division throughout, including the double floor on silver
//!   (grams -> whole troy ounces -> ten-thousand-ounce bucket)
//! - A bucket with no configured fee costs 0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use lib_types::{
    Amount, AssetType, RewardRates, GRAMS_PER_TROY_OUNCE, TROY_OUNCE_SCALE, WEIGHT_SCALE,
};

// =============================================================================
// FEE SCHEDULE
// =============================================================================

/// One configured fee entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeEntry {
    pub asset_type: AssetType,
    pub bucket: u64,
    pub fee: Amount,
}

/// Minting fee table: (asset type, bucket) -> fee in USD-scaled units
///
/// Read-only to registration; only administration writes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    tables: BTreeMap<AssetType, BTreeMap<u64, Amount>>,
}

impl FeeSchedule {
    /// Create an empty schedule (every lookup yields 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schedule from configured entries; later entries win
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = FeeEntry>,
    {
        let mut schedule = Self::new();
        for entry in entries {
            schedule.set(entry.asset_type, entry.bucket, entry.fee);
        }
        schedule
    }

    /// Set the fee for a bucket, returning the previous value if any
    pub fn set(&mut self, asset_type: AssetType, bucket: u64, fee: Amount) -> Option<Amount> {
        self.tables.entry(asset_type).or_default().insert(bucket, fee)
    }

    /// Fee for a bucket (0 when unconfigured)
    pub fn get(&self, asset_type: AssetType, bucket: u64) -> Amount {
        self.tables
            .get(&asset_type)
            .and_then(|table| table.get(&bucket))
            .copied()
            .unwrap_or(0)
    }

    /// All configured entries in (asset type, bucket) order
    pub fn entries(&self) -> impl Iterator<Item = FeeEntry> + '_ {
        self.tables.iter().flat_map(|(asset_type, table)| {
            table.iter().map(move |(bucket, fee)| FeeEntry {
                asset_type: *asset_type,
                bucket: *bucket,
                fee: *fee,
            })
        })
    }

    /// Number of configured entries
    pub fn len(&self) -> usize {
        self.tables.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

/// Whole troy ounces in a scaled gram weight.
///
/// `weight_grams * 10000 / (311034 * 100)`, floored.
pub fn troy_ounces(weight_grams: u64) -> u64 {
    let numerator = weight_grams as u128 * TROY_OUNCE_SCALE as u128;
    let denominator = GRAMS_PER_TROY_OUNCE as u128 * WEIGHT_SCALE as u128;
    (numerator / denominator) as u64
}

/// Fee bucket for a weight.
///
/// Silver buckets by `troy_ounces / 10000`; gold by whole grams.
pub fn fee_bucket(asset_type: AssetType, weight_grams: u64) -> u64 {
    match asset_type {
        AssetType::Silver => troy_ounces(weight_grams) / TROY_OUNCE_SCALE,
        AssetType::Gold => weight_grams / WEIGHT_SCALE,
    }
}

// =============================================================================
// FEE + REWARD COMPUTATION (PURE FUNCTIONS)
// =============================================================================

/// Compute the minting fee for a registration
///
/// Pure in (asset type, weight, schedule): identical inputs always yield the
/// same fee.
pub fn compute_minting_fee(
    schedule: &FeeSchedule,
    asset_type: AssetType,
    weight_grams: u64,
) -> Amount {
    schedule.get(asset_type, fee_bucket(asset_type, weight_grams))
}

/// Compute the reward credited to the submitter of a registration
///
/// ```text
/// Silver: weight_grams * silver_per_oz / (311034 * 100)
/// Gold:   weight_grams * gold_per_gram / 100
/// ```
///
/// Returns `None` only if the intermediate product overflows u128.
pub fn compute_registration_reward(
    rates: &RewardRates,
    asset_type: AssetType,
    weight_grams: u64,
) -> Option<Amount> {
    let weight = weight_grams as u128;
    match asset_type {
        AssetType::Silver => weight
            .checked_mul(rates.silver_per_oz)
            .map(|v| v / (GRAMS_PER_TROY_OUNCE as u128 * WEIGHT_SCALE as u128)),
        AssetType::Gold => weight
            .checked_mul(rates.gold_per_gram)
            .map(|v| v / WEIGHT_SCALE as u128),
    }
}

// =============================================================================
// QUOTE
// =============================================================================

/// Full breakdown of what a registration would cost and earn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintQuote {
    pub asset_type: AssetType,
    pub weight_grams: u64,
    /// Whole troy ounces (silver only)
    pub troy_ounces: Option<u64>,
    pub bucket: u64,
    pub fee: Amount,
    pub reward: Amount,
}

/// Quote a registration without touching any state
pub fn quote(
    schedule: &FeeSchedule,
    rates: &RewardRates,
    asset_type: AssetType,
    weight_grams: u64,
) -> Option<MintQuote> {
    let reward = compute_registration_reward(rates, asset_type, weight_grams)?;
    let troy = match asset_type {
        AssetType::Silver => Some(troy_ounces(weight_grams)),
        AssetType::Gold => None,
    };
    Some(MintQuote {
        asset_type,
        weight_grams,
        troy_ounces: troy,
        bucket: fee_bucket(asset_type, weight_grams),
        fee: compute_minting_fee(schedule, asset_type, weight_grams),
        reward,
    })
}

// =============================================================================
// TESTS
// =============================================================================
