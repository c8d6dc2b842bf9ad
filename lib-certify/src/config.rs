//! Genesis configuration loader
//!
//! ```toml
//! admin = "admin"                 # hex identity or label
//! required_approvals = 3
//! validators = ["v1", "v2", "v3", "v4", "v5"]
//!
//! [rewards]
//! silver_per_oz = 1000000
//! gold_per_gram = 10
//! validator_finalization = 50
//!
//! [[fee_schedule]]
//! asset_type = "Silver"
//! bucket = 0
//! fee = 2
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use lib_fees::{FeeEntry, FeeSchedule};
use lib_types::{Address, RewardRates};

use crate::engine::{check_required_approvals, CertificationEngine, DEFAULT_REQUIRED_APPROVALS};
use crate::errors::{CertifyError, CertifyResult};
use crate::validators::{ValidatorSet, NUM_VALIDATORS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertifyConfig {
    /// Administrator identity (hex or label)
    pub admin: String,
    #[serde(default = "default_required_approvals")]
    pub required_approvals: u8,
    /// Initial roster (hex or label), at most five distinct entries
    #[serde(default)]
    pub validators: Vec<String>,
    #[serde(default)]
    pub rewards: RewardRates,
    #[serde(default)]
    pub fee_schedule: Vec<FeeEntry>,
}

fn default_required_approvals() -> u8 {
    DEFAULT_REQUIRED_APPROVALS
}

impl Default for CertifyConfig {
    fn default() -> Self {
        Self {
            admin: "admin".to_string(),
            required_approvals: default_required_approvals(),
            validators: Vec::new(),
            rewards: RewardRates::default(),
            fee_schedule: Vec::new(),
        }
    }
}

impl CertifyConfig {
    /// Load and validate a TOML config file
    pub fn load<P: AsRef<Path>>(path: P) -> CertifyResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            CertifyError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&raw)?;
        tracing::info!(
            "Loaded config from {} ({} validators, {} fee entries)",
            path.display(),
            config.validators.len(),
            config.fee_schedule.len()
        );
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn from_toml(raw: &str) -> CertifyResult<Self> {
        let config: Self =
            toml::from_str(raw).map_err(|e| CertifyError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn admin_address(&self) -> CertifyResult<Address> {
        resolve_identity("admin", &self.admin)
    }

    pub fn validator_addresses(&self) -> CertifyResult<Vec<Address>> {
        self.validators
            .iter()
            .map(|v| resolve_identity("validator", v))
            .collect()
    }

    /// Check roster size, distinctness and the approval range
    pub fn validate(&self) -> CertifyResult<()> {
        if self.admin.trim().is_empty() {
            return Err(CertifyError::Config("admin must not be empty".to_string()));
        }
        self.admin_address()?;
        check_required_approvals(self.required_approvals)?;
        if self.validators.len() > NUM_VALIDATORS {
            return Err(CertifyError::Capacity {
                max: NUM_VALIDATORS,
            });
        }
        let mut seen = HashSet::new();
        for address in self.validator_addresses()? {
            if !seen.insert(address) {
                return Err(CertifyError::DuplicateValidator(address));
            }
        }
        Ok(())
    }
}

fn resolve_identity(field: &str, raw: &str) -> CertifyResult<Address> {
    Address::from_hex_or_label(raw).map_err(|e| CertifyError::Config(format!("{}: {}", field, e)))
}

impl CertificationEngine {
    /// Build a genesis engine from configuration
    pub fn from_config(config: &CertifyConfig) -> CertifyResult<Self> {
        config.validate()?;
        let mut roster = ValidatorSet::new();
        for address in config.validator_addresses()? {
            roster.add(address)?;
        }
        let engine = Self::bootstrap(
            config.admin_address()?,
            config.required_approvals,
            roster,
            FeeSchedule::from_entries(config.fee_schedule.iter().copied()),
            config.rewards,
        )?;
        tracing::info!(
            "Genesis: admin {}, {} validators, quorum {}",
            engine.admin().short(),
            engine.validators().len(),
            engine.required_approvals()
        );
        Ok(engine)
    }
}
