//! Bullion certification primitives.
//! Stable, protocol-neutral, behavior-free.
//!
//! Rule: No String identifiers in certification state. Ever.

pub mod errors;
pub mod fees;
pub mod primitives;

pub use errors::TypesError;
pub use fees::{
    AssetType, RewardKind, RewardRates, GRAMS_PER_TROY_OUNCE, MAX_PURITY_PERCENTAGE,
    MAX_WEIGHT_GRAMS, PURITY_SCALE, TROY_OUNCE_SCALE, WEIGHT_SCALE,
};
pub use primitives::{Address, Amount, AssetId};
