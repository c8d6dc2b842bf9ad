//! Shared async handle over the engine
//!
//! Mutating calls take the write lock for their whole duration, so calls
//! are linearized and each one's checks and effects are atomic with respect
//! to every other call.

use std::sync::Arc;
use tokio::sync::RwLock;

use lib_fees::{quote, MintQuote};
use lib_types::{Address, Amount, AssetId, AssetType, RewardKind};

use crate::asset::{AssetRecord, AssetStatus, RegistrationRequest};
use crate::engine::CertificationEngine;
use crate::errors::CertifyResult;
use crate::events::{Applied, EventRecord};
use crate::storage::SnapshotStore;

#[derive(Debug, Clone)]
pub struct CertificationService {
    engine: Arc<RwLock<CertificationEngine>>,
}

impl CertificationService {
    pub fn new(engine: CertificationEngine) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
        }
    }

    /// Resume from a snapshot, or start from `genesis` when none exists
    pub fn open(store: &SnapshotStore, genesis: impl FnOnce() -> CertifyResult<CertificationEngine>) -> CertifyResult<Self> {
        let engine = match store.load()? {
            Some(engine) => engine,
            None => {
                tracing::info!("No snapshot at {}, starting from genesis", store.path().display());
                genesis()?
            }
        };
        Ok(Self::new(engine))
    }

    pub async fn register(&self, caller: Address, request: RegistrationRequest) -> CertifyResult<Applied<AssetId>> {
        self.engine.write().await.register(caller, request)
    }

    pub async fn cast_vote(&self, asset_id: AssetId, validator: Address, approve: bool) -> CertifyResult<Applied<AssetStatus>> {
        self.engine.write().await.cast_vote(asset_id, validator, approve)
    }

    pub async fn get_asset(&self, asset_id: AssetId) -> CertifyResult<AssetRecord> {
        self.engine.read().await.get_asset(asset_id).cloned()
    }

    pub async fn get_status(&self, asset_id: AssetId) -> CertifyResult<AssetStatus> {
        self.engine.read().await.get_status(asset_id)
    }

    pub async fn get_votes(&self, asset_id: AssetId) -> CertifyResult<Vec<(Address, Option<bool>)>> {
        self.engine.read().await.get_votes(asset_id)
    }

    pub async fn get_balance(&self, account: &Address) -> Amount {
        self.engine.read().await.get_balance(account)
    }

    pub async fn add_validator(&self, caller: &Address, validator: Address) -> CertifyResult<Applied<()>> {
        self.engine.write().await.add_validator(caller, validator)
    }

    pub async fn remove_validator(&self, caller: &Address, validator: &Address) -> CertifyResult<Applied<()>> {
        self.engine.write().await.remove_validator(caller, validator)
    }

    pub async fn set_required_approvals(&self, caller: &Address, value: u8) -> CertifyResult<Applied<()>> {
        self.engine.write().await.set_required_approvals(caller, value)
    }

    pub async fn set_fee_schedule(
        &self,
        caller: &Address,
        asset_type: AssetType,
        bucket: u64,
        fee: Amount,
    ) -> CertifyResult<Applied<Option<Amount>>> {
        self.engine
            .write()
            .await
            .set_fee_schedule(caller, asset_type, bucket, fee)
    }

    pub async fn set_reward_rate(&self, caller: &Address, kind: RewardKind, value: Amount) -> CertifyResult<Applied<Amount>> {
        self.engine.write().await.set_reward_rate(caller, kind, value)
    }

    pub async fn transfer_admin(&self, caller: &Address, new_admin: Address) -> CertifyResult<Applied<()>> {
        self.engine.write().await.transfer_admin(caller, new_admin)
    }

    /// Price a prospective registration against the live parameters
    pub async fn quote(&self, asset_type: AssetType, weight_grams: u64) -> Option<MintQuote> {
        let engine = self.engine.read().await;
        quote(engine.fee_schedule(), engine.reward_rates(), asset_type, weight_grams)
    }

    pub async fn events_since(&self, from: u64) -> Vec<EventRecord> {
        self.engine.read().await.events_since(from).to_vec()
    }

    /// Consistent copy of the whole state
    pub async fn snapshot(&self) -> CertificationEngine {
        self.engine.read().await.clone()
    }

    /// Persist the current state; readers may proceed, writers wait
    pub async fn persist(&self, store: &SnapshotStore) -> CertifyResult<()> {
        let engine = self.engine.read().await;
        store.save(&engine)
    }
}
