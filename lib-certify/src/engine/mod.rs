//! Certification engine combining registration, the vote tally and
//! administration over one owned state.
//!
//! # Enforced Invariants
//!
//! ## Terminal status is single-fire
//!
//! An asset leaves `Pending` at most once. Every vote on a non-pending asset
//! is rejected with `AlreadyFinalized`, so `StatusChanged` is emitted exactly
//! once per finalized asset.
//!
//! ## One vote per (asset, validator)
//!
//! Votes are write-once. A second attempt fails with `DuplicateVote` and the
//! counters are left unchanged.
//!
//! ## Early accept, late reject
//!
//! - `true_votes >= required_approvals` finalizes `True` immediately, even
//!   if some validators never vote.
//! - `False` requires all `NUM_VALIDATORS` votes in with too few approvals.
//!
//! ## All-or-nothing calls
//!
//! Every check, including reward overflow, runs before the first mutation.
//! A failed call leaves the engine exactly as it was.
//!
//! ## Serialization
//!
//! The engine is a plain `&mut self` state machine. Callers that share it
//! across tasks go through [`crate::service::CertificationService`], which
//! holds a single writer lock for the whole of every mutating call.

mod admin;
mod registration;
mod vote_tally;

pub use vote_tally::resolve_status;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use lib_fees::{compute_minting_fee, FeeSchedule};
use lib_types::{Address, Amount, AssetId, AssetType, RewardRates};

use crate::asset::{AssetRecord, AssetStatus};
use crate::errors::{CertifyError, CertifyResult};
use crate::events::{CertificationEvent, EventJournal, EventRecord};
use crate::ledger::RewardLedger;
use crate::validators::{ValidatorSet, NUM_VALIDATORS};
use crate::votes::VoteBook;

/// Default approvals needed to certify a claim (3 of 5)
pub const DEFAULT_REQUIRED_APPROVALS: u8 = 3;

/// Owned certification state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationEngine {
    admin: Address,
    required_approvals: u8,
    validators: ValidatorSet,
    assets: BTreeMap<AssetId, AssetRecord>,
    votes: VoteBook,
    ledger: RewardLedger,
    fee_schedule: FeeSchedule,
    reward_rates: RewardRates,
    next_asset_id: AssetId,
    journal: EventJournal,
}

impl CertificationEngine {
    /// Create an engine with an empty roster, empty fee schedule and
    /// default reward rates.
    pub fn new(admin: Address) -> Self {
        Self {
            admin,
            required_approvals: DEFAULT_REQUIRED_APPROVALS,
            validators: ValidatorSet::new(),
            assets: BTreeMap::new(),
            votes: VoteBook::new(),
            ledger: RewardLedger::new(),
            fee_schedule: FeeSchedule::new(),
            reward_rates: RewardRates::default(),
            next_asset_id: 1,
            journal: EventJournal::new(),
        }
    }

    /// Seed parameters without emitting events (used at genesis)
    pub(crate) fn bootstrap(
        admin: Address,
        required_approvals: u8,
        validators: ValidatorSet,
        fee_schedule: FeeSchedule,
        reward_rates: RewardRates,
    ) -> CertifyResult<Self> {
        check_required_approvals(required_approvals)?;
        let mut engine = Self::new(admin);
        engine.required_approvals = required_approvals;
        engine.validators = validators;
        engine.fee_schedule = fee_schedule;
        engine.reward_rates = reward_rates;
        Ok(engine)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn get_asset(&self, asset_id: AssetId) -> CertifyResult<&AssetRecord> {
        self.assets
            .get(&asset_id)
            .ok_or(CertifyError::NotFound(asset_id))
    }

    pub fn get_status(&self, asset_id: AssetId) -> CertifyResult<AssetStatus> {
        Ok(self.get_asset(asset_id)?.status)
    }

    /// Votes of the current roster on an asset, in roster order.
    ///
    /// `None` means that validator has not voted.
    pub fn get_votes(&self, asset_id: AssetId) -> CertifyResult<Vec<(Address, Option<bool>)>> {
        self.get_asset(asset_id)?;
        Ok(self
            .validators
            .iter()
            .map(|v| (*v, self.votes.get(asset_id, v)))
            .collect())
    }

    pub fn get_balance(&self, account: &Address) -> Amount {
        self.ledger.balance_of(account)
    }

    pub fn admin(&self) -> Address {
        self.admin
    }

    pub fn required_approvals(&self) -> u8 {
        self.required_approvals
    }

    pub fn validators(&self) -> &ValidatorSet {
        &self.validators
    }

    pub fn is_validator(&self, identity: &Address) -> bool {
        self.validators.contains(identity)
    }

    pub fn fee_schedule(&self) -> &FeeSchedule {
        &self.fee_schedule
    }

    pub fn reward_rates(&self) -> &RewardRates {
        &self.reward_rates
    }

    pub fn ledger(&self) -> &RewardLedger {
        &self.ledger
    }

    /// Minting fee a registration would be charged under the live schedule
    pub fn fee_for(&self, asset_type: AssetType, weight_grams: u64) -> Amount {
        compute_minting_fee(&self.fee_schedule, asset_type, weight_grams)
    }

    /// Number of registered assets
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    pub fn assets(&self) -> impl Iterator<Item = &AssetRecord> {
        self.assets.values()
    }

    /// Journaled events with `seq >= from`
    pub fn events_since(&self, from: u64) -> &[EventRecord] {
        self.journal.since(from)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn emit(&mut self, events: Vec<CertificationEvent>) -> Vec<CertificationEvent> {
        self.journal.append(&events);
        events
    }

    fn ensure_admin(&self, caller: &Address) -> CertifyResult<()> {
        if *caller != self.admin {
            tracing::warn!(
                "Rejected privileged call from {} (admin is {})",
                caller.short(),
                self.admin.short()
            );
            return Err(CertifyError::Authorization(*caller));
        }
        Ok(())
    }
}

/// Required approvals must lie in `[1, NUM_VALIDATORS]`
pub(crate) fn check_required_approvals(value: u8) -> CertifyResult<()> {
    if value == 0 || value as usize > NUM_VALIDATORS {
        return Err(CertifyError::Range {
            value: value as u64,
            min: 1,
            max: NUM_VALIDATORS as u64,
        });
    }
    Ok(())
}
