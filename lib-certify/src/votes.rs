//! Write-once vote records
//!
//! One boolean per (asset, validator). A second vote for the same pair is
//! rejected, never overwritten, and records are never deleted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use lib_types::{Address, AssetId};

use crate::errors::{CertifyError, CertifyResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteBook {
    records: BTreeMap<AssetId, BTreeMap<Address, bool>>,
}

impl VoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded vote, if any
    pub fn get(&self, asset_id: AssetId, validator: &Address) -> Option<bool> {
        self.records
            .get(&asset_id)
            .and_then(|votes| votes.get(validator))
            .copied()
    }

    pub fn has_voted(&self, asset_id: AssetId, validator: &Address) -> bool {
        self.get(asset_id, validator).is_some()
    }

    /// Record a vote; fails if this validator already voted on this asset
    pub fn record(&mut self, asset_id: AssetId, validator: Address, approve: bool) -> CertifyResult<()> {
        let votes = self.records.entry(asset_id).or_default();
        if votes.contains_key(&validator) {
            return Err(CertifyError::DuplicateVote { asset_id, validator });
        }
        votes.insert(validator, approve);
        Ok(())
    }

    /// Every vote recorded for an asset, including from validators since removed
    pub fn for_asset(&self, asset_id: AssetId) -> impl Iterator<Item = (&Address, &bool)> {
        self.records.get(&asset_id).into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_once() {
        let mut book = VoteBook::new();
        let v = Address::from_label("v1");

        book.record(1, v, true).unwrap();
        assert_eq!(book.get(1, &v), Some(true));

        let err = book.record(1, v, false).unwrap_err();
        assert_eq!(err, CertifyError::DuplicateVote { asset_id: 1, validator: v });
        assert_eq!(book.get(1, &v), Some(true));
    }

    #[test]
    fn test_votes_are_per_asset() {
        let mut book = VoteBook::new();
        let v = Address::from_label("v1");
        book.record(1, v, true).unwrap();
        book.record(2, v, false).unwrap();
        assert_eq!(book.get(2, &v), Some(false));
        assert!(!book.has_voted(3, &v));
        assert_eq!(book.for_asset(1).count(), 1);
    }
}
