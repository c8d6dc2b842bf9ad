//! Quorum state machine
//!
//! `Pending -> True` as soon as approvals reach the requirement;
//! `Pending -> False` only once every seat has voted without reaching it.
//! Resolution is evaluated exactly once, right after the vote is recorded.

use lib_types::{Address, AssetId};

use super::CertificationEngine;
use crate::asset::AssetStatus;
use crate::errors::{CertifyError, CertifyResult};
use crate::events::{Applied, CertificationEvent, RewardReason};
use crate::validators::NUM_VALIDATORS;

/// Status implied by a pending asset's counters
pub fn resolve_status(true_votes: u8, false_votes: u8, required_approvals: u8) -> AssetStatus {
    if true_votes >= required_approvals {
        AssetStatus::True
    } else if true_votes as usize + false_votes as usize == NUM_VALIDATORS {
        AssetStatus::False
    } else {
        AssetStatus::Pending
    }
}

impl CertificationEngine {
    /// Cast `validator`'s vote on an asset and resolve it.
    ///
    /// Check order: roster membership, asset existence, pending status,
    /// duplicate vote. On a terminal transition only the validator whose
    /// vote finalized the asset is credited.
    pub fn cast_vote(
        &mut self,
        asset_id: AssetId,
        validator: Address,
        approve: bool,
    ) -> CertifyResult<Applied<AssetStatus>> {
        if !self.validators.contains(&validator) {
            return Err(CertifyError::NotAValidator(validator));
        }
        let record = self
            .assets
            .get(&asset_id)
            .ok_or(CertifyError::NotFound(asset_id))?;
        if record.status.is_terminal() {
            return Err(CertifyError::AlreadyFinalized {
                asset_id,
                status: record.status,
            });
        }
        if self.votes.has_voted(asset_id, &validator) {
            return Err(CertifyError::DuplicateVote { asset_id, validator });
        }

        let (true_votes, false_votes) = if approve {
            (record.true_votes + 1, record.false_votes)
        } else {
            (record.true_votes, record.false_votes + 1)
        };
        let status = resolve_status(true_votes, false_votes, self.required_approvals);
        let reward = self.reward_rates.validator_finalization;
        if status.is_terminal() {
            self.ledger.check_credit(&validator, reward)?;
        }

        // Nothing below can fail
        self.votes.record(asset_id, validator, approve)?;
        let record = self
            .assets
            .get_mut(&asset_id)
            .ok_or(CertifyError::NotFound(asset_id))?;
        record.true_votes = true_votes;
        record.false_votes = false_votes;
        record.status = status;

        tracing::debug!(
            "Vote on asset {} by {}: {} ({} for / {} against)",
            asset_id,
            validator.short(),
            approve,
            true_votes,
            false_votes
        );

        let mut events = vec![CertificationEvent::VoteCast {
            asset_id,
            validator,
            approve,
        }];

        if status.is_terminal() {
            self.ledger.credit(validator, reward)?;
            tracing::info!(
                "Asset {} finalized as {} by {} ({} for / {} against)",
                asset_id,
                status,
                validator.short(),
                true_votes,
                false_votes
            );
            events.push(CertificationEvent::StatusChanged { asset_id, status });
            events.push(CertificationEvent::RewardCredited {
                account: validator,
                amount: reward,
                reason: RewardReason::Finalization { asset_id },
            });
        }

        let events = self.emit(events);
        Ok(Applied::new(status, events))
    }
}
