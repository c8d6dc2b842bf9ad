//! Reward-point ledger
//!
//! Balances only ever grow; there is no debit path. Credits are checked so a
//! failing credit can be detected before any other state is touched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use lib_types::{Address, Amount};

use crate::errors::{CertifyError, CertifyResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardLedger {
    balances: BTreeMap<Address, Amount>,
    /// Informational sum of all credits; saturates and never fails a credit
    total_issued: Amount,
}

impl RewardLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance of an identity (0 if never credited)
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Total points issued across all accounts, saturating at `Amount::MAX`
    pub fn total_issued(&self) -> Amount {
        self.total_issued
    }

    /// Dry-run a credit: the account's resulting balance, without mutating.
    ///
    /// Only the account's own balance can overflow.
    pub fn check_credit(&self, account: &Address, amount: Amount) -> CertifyResult<Amount> {
        self.balance_of(account)
            .checked_add(amount)
            .ok_or_else(|| CertifyError::Overflow(format!("balance of {}", account)))
    }

    /// Credit an account, returning its new balance
    pub fn credit(&mut self, account: Address, amount: Amount) -> CertifyResult<Amount> {
        let balance = self.check_credit(&account, amount)?;
        self.balances.insert(account, balance);
        self.total_issued = self.total_issued.saturating_add(amount);
        Ok(balance)
    }

    /// Accounts with a ledger entry, in address order
    pub fn accounts(&self) -> impl Iterator<Item = (&Address, &Amount)> {
        self.balances.iter()
    }
}
