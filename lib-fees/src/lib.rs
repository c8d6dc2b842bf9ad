//! Bullion Minting Fee Model
//!
//! Pure, deterministic fee and reward computation for asset registrations.
//!
//! # Design Principles
//!
//! 1. **Pure functions** - No side effects, no global state
//! 2. **Deterministic** - Same inputs produce identical outputs across all platforms
//! 3. **No floats** - All arithmetic uses u64/u128 integers
//! 4. **Lossy by contract** - Bucketing floors exactly as the fee tables were priced
//!
//! # Usage
//!
//! ```
//! use lib_fees::{compute_minting_fee, FeeEntry, FeeSchedule};
//! use lib_types::AssetType;
//!
//! let schedule = FeeSchedule::from_entries([FeeEntry {
//!     asset_type: AssetType::Gold,
//!     bucket: 1,
//!     fee: 6,
//! }]);
//!
//! // 1.00 g of gold
//! assert_eq!(compute_minting_fee(&schedule, AssetType::Gold, 100), 6);
//! ```

pub mod mint_model;

#[cfg(test)]
mod golden_vectors;

pub use mint_model::{
    compute_minting_fee, compute_registration_reward, fee_bucket, quote, troy_ounces, FeeEntry,
    FeeSchedule, MintQuote,
};
