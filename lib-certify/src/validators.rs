//! Validator roster management

use serde::{Deserialize, Serialize};

use lib_types::Address;

use crate::errors::{CertifyError, CertifyResult};

/// Fixed committee size; also the vote count at which a claim must resolve.
pub const NUM_VALIDATORS: usize = 5;

/// Bounded roster of authorized voters
///
/// Membership is a linear scan over at most [`NUM_VALIDATORS`] entries.
/// Removal swaps the last member into the vacated slot, so roster order is
/// not stable across removals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorSet {
    members: Vec<Address>,
}

impl ValidatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, identity: &Address) -> bool {
        self.members.iter().any(|m| m == identity)
    }

    pub fn position(&self, identity: &Address) -> Option<usize> {
        self.members.iter().position(|m| m == identity)
    }

    /// Add a validator; fails when full or already present
    pub fn add(&mut self, identity: Address) -> CertifyResult<()> {
        if self.is_full() {
            return Err(CertifyError::Capacity {
                max: NUM_VALIDATORS,
            });
        }
        if self.contains(&identity) {
            return Err(CertifyError::DuplicateValidator(identity));
        }
        self.members.push(identity);
        Ok(())
    }

    /// Remove a validator by swapping the last member into its slot
    pub fn remove(&mut self, identity: &Address) -> CertifyResult<()> {
        let index = self
            .position(identity)
            .ok_or(CertifyError::NotPresent(*identity))?;
        self.members.swap_remove(index);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= NUM_VALIDATORS
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[Address] {
        &self.members
    }
}
