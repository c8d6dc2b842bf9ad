//! Asset registration: validate, price, record, reward

use lib_fees::{compute_minting_fee, compute_registration_reward};
use lib_types::{Address, AssetId};

use super::CertificationEngine;
use crate::asset::{AssetRecord, RegistrationRequest};
use crate::errors::{CertifyError, CertifyResult};
use crate::events::{Applied, CertificationEvent, RewardReason};

impl CertificationEngine {
    /// Register a new asset claim submitted by `caller`.
    ///
    /// Emits `AssetRegistered` then `RewardCredited` (the credit is emitted
    /// even when the computed reward floors to zero).
    pub fn register(
        &mut self,
        caller: Address,
        request: RegistrationRequest,
    ) -> CertifyResult<Applied<AssetId>> {
        request.validate()?;
        let asset_type = request.parsed_asset_type()?;

        let minting_fee = compute_minting_fee(&self.fee_schedule, asset_type, request.weight_grams);
        let reward =
            compute_registration_reward(&self.reward_rates, asset_type, request.weight_grams)
                .ok_or_else(|| CertifyError::Overflow("registration reward".to_string()))?;
        self.ledger.check_credit(&caller, reward)?;

        let asset_id = self.next_asset_id;
        let next = asset_id
            .checked_add(1)
            .ok_or_else(|| CertifyError::Overflow("asset id counter".to_string()))?;

        // Nothing below can fail
        let weight_grams = request.weight_grams;
        self.next_asset_id = next;
        self.assets.insert(
            asset_id,
            AssetRecord::pending(asset_id, caller, asset_type, minting_fee, request),
        );
        self.ledger.credit(caller, reward)?;

        tracing::info!(
            "Registered asset {} ({}, {} cg) for {}: fee {}, reward {}",
            asset_id,
            asset_type,
            weight_grams,
            caller.short(),
            minting_fee,
            reward
        );

        let events = self.emit(vec![
            CertificationEvent::AssetRegistered {
                asset_id,
                creator: caller,
                asset_type,
                weight_grams,
                minting_fee,
            },
            CertificationEvent::RewardCredited {
                account: caller,
                amount: reward,
                reason: RewardReason::Registration { asset_id },
            },
        ]);
        Ok(Applied::new(asset_id, events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetStatus;
    use lib_types::AssetType;

    fn admin() -> Address {
        Address::from_label("admin")
    }

    fn request(asset_type: &str, weight_grams: u64) -> RegistrationRequest {
        RegistrationRequest {
            name: "Bar".to_string(),
            asset_type: asset_type.to_string(),
            year: "2023".to_string(),
            asset_country: "AU".to_string(),
            creator_country: "AU".to_string(),
            asset_name: "Perth Mint".to_string(),
            weight_grams,
            purity_percentage: 99_900,
            quantity: 1,
            is_fungible: true,
            image_uris: vec!["ipfs://front".to_string(), "ipfs://back".to_string()],
        }
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut engine = CertificationEngine::new(admin());
        let alice = Address::from_label("alice");
        let a = engine.register(alice, request("Gold", 100)).unwrap().value;
        let b = engine.register(alice, request("Silver", 100)).unwrap().value;
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[test]
    fn test_record_and_reward() {
        let mut engine = CertificationEngine::new(admin());
        engine.fee_schedule.set(AssetType::Gold, 1, 6);
        let alice = Address::from_label("alice");

        let applied = engine.register(alice, request("Gold", 100)).unwrap();
        let record = engine.get_asset(applied.value).unwrap();

        assert_eq!(record.minting_fee, 6);
        assert_eq!(record.status, AssetStatus::Pending);
        assert_eq!(record.creator, alice);
        // 100 * 10 / 100
        assert_eq!(engine.get_balance(&alice), 10);
        assert_eq!(applied.count("AssetRegistered"), 1);
        assert_eq!(applied.count("RewardCredited"), 1);
    }

    #[test]
    fn test_unsupported_type_creates_nothing() {
        let mut engine = CertificationEngine::new(admin());
        let alice = Address::from_label("alice");
        let err = engine.register(alice, request("Platinum", 100)).unwrap_err();
        assert_eq!(err, CertifyError::UnsupportedAssetType("Platinum".to_string()));
        assert_eq!(engine.asset_count(), 0);
        assert!(engine.events_since(0).is_empty());
        // id not consumed
        assert_eq!(engine.register(alice, request("Gold", 100)).unwrap().value, 1);
    }

    #[test]
    fn test_validation_precedes_type_check() {
        let mut engine = CertificationEngine::new(admin());
        let mut req = request("Platinum", 100);
        req.image_uris.pop();
        let err = engine.register(Address::from_label("alice"), req).unwrap_err();
        assert!(matches!(err, CertifyError::Validation(_)));
    }

    #[test]
    fn test_reward_overflow_is_a_noop() {
        let mut engine = CertificationEngine::new(admin());
        engine.reward_rates.gold_per_gram = u128::MAX;
        let alice = Address::from_label("alice");

        let err = engine.register(alice, request("Gold", 200)).unwrap_err();
        assert!(matches!(err, CertifyError::Overflow(_)));
        assert_eq!(engine.asset_count(), 0);
        assert_eq!(engine.get_balance(&alice), 0);
    }
}
