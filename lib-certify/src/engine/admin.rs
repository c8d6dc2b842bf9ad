//! Privileged administration over roster and parameters
//!
//! Every operation here requires the caller to be the administrator and
//! fails with `Authorization` before looking at its arguments otherwise.

use lib_types::{Address, Amount, AssetType, RewardKind};

use super::{check_required_approvals, CertificationEngine};
use crate::errors::{CertifyError, CertifyResult};
use crate::events::{Applied, CertificationEvent};

impl CertificationEngine {
    pub fn add_validator(&mut self, caller: &Address, validator: Address) -> CertifyResult<Applied<()>> {
        self.ensure_admin(caller)?;
        self.validators.add(validator)?;
        tracing::info!(
            "Added validator {} ({}/{} seats)",
            validator.short(),
            self.validators.len(),
            crate::validators::NUM_VALIDATORS
        );
        let events = self.emit(vec![CertificationEvent::ValidatorAdded { validator }]);
        Ok(Applied::new((), events))
    }

    /// Remove a validator. Votes it already cast keep counting.
    pub fn remove_validator(&mut self, caller: &Address, validator: &Address) -> CertifyResult<Applied<()>> {
        self.ensure_admin(caller)?;
        self.validators.remove(validator)?;
        tracing::info!("Removed validator {}", validator.short());
        let events = self.emit(vec![CertificationEvent::ValidatorRemoved {
            validator: *validator,
        }]);
        Ok(Applied::new((), events))
    }

    /// Change the approval quorum. Pending assets are not re-evaluated until
    /// their next vote.
    pub fn set_required_approvals(&mut self, caller: &Address, value: u8) -> CertifyResult<Applied<()>> {
        self.ensure_admin(caller)?;
        check_required_approvals(value)?;
        let previous = self.required_approvals;
        self.required_approvals = value;
        tracing::info!("Required approvals changed {} -> {}", previous, value);
        let events = self.emit(vec![CertificationEvent::RequiredApprovalsChanged {
            previous,
            current: value,
        }]);
        Ok(Applied::new((), events))
    }

    /// Set one fee-table entry; returns the previous fee for that bucket
    pub fn set_fee_schedule(
        &mut self,
        caller: &Address,
        asset_type: AssetType,
        bucket: u64,
        fee: Amount,
    ) -> CertifyResult<Applied<Option<Amount>>> {
        self.ensure_admin(caller)?;
        let previous = self.fee_schedule.set(asset_type, bucket, fee);
        tracing::info!("Fee for {} bucket {} set to {}", asset_type, bucket, fee);
        let events = self.emit(vec![CertificationEvent::FeeScheduleUpdated {
            asset_type,
            bucket,
            fee,
        }]);
        Ok(Applied::new(previous, events))
    }

    /// Set one reward rate; returns the previous rate
    pub fn set_reward_rate(
        &mut self,
        caller: &Address,
        kind: RewardKind,
        value: Amount,
    ) -> CertifyResult<Applied<Amount>> {
        self.ensure_admin(caller)?;
        let previous = self.reward_rates.get(kind);
        self.reward_rates.set(kind, value);
        tracing::info!("Reward rate {} changed {} -> {}", kind, previous, value);
        let events = self.emit(vec![CertificationEvent::RewardRateUpdated { kind, value }]);
        Ok(Applied::new(previous, events))
    }

    /// Hand administration to another identity
    pub fn transfer_admin(&mut self, caller: &Address, new_admin: Address) -> CertifyResult<Applied<()>> {
        self.ensure_admin(caller)?;
        if new_admin.is_zero() {
            return Err(CertifyError::Validation(
                "administrator cannot be the zero address".to_string(),
            ));
        }
        let previous = self.admin;
        self.admin = new_admin;
        tracing::info!("Administration transferred {} -> {}", previous.short(), new_admin.short());
        let events = self.emit(vec![CertificationEvent::AdminTransferred {
            previous,
            current: new_admin,
        }]);
        Ok(Applied::new((), events))
    }
}
