//! Shared state handling for command handlers

use serde_json::{json, Value};

use lib_certify::{Applied, CertificationService, SnapshotStore};
use lib_types::Address;

use crate::argument_parsing::CertifyCli;
use crate::error::{CliError, CliResult};

/// Identity from 64 hex chars or a label
pub fn resolve_identity(raw: &str) -> CliResult<Address> {
    Address::from_hex_or_label(raw.trim()).map_err(|e| CliError::InvalidArgument(e.to_string()))
}

/// Open service over an existing snapshot
pub struct StateContext {
    pub service: CertificationService,
    pub store: SnapshotStore,
    pub caller: Address,
}

impl StateContext {
    pub fn open(cli: &CertifyCli) -> CliResult<Self> {
        let caller = resolve_identity(&cli.caller)?;
        let store = SnapshotStore::at(&cli.state);
        let engine = store.load()?.ok_or_else(|| CliError::StateNotInitialized {
            path: cli.state.clone(),
        })?;
        Ok(Self {
            service: CertificationService::new(engine),
            store,
            caller,
        })
    }

    /// Write the snapshot back after a successful mutation
    pub async fn commit(&self) -> CliResult<()> {
        self.service.persist(&self.store).await?;
        tracing::debug!("Committed state to {}", self.store.path().display());
        Ok(())
    }
}

/// Names of the events an operation emitted, in order
pub fn event_names<T>(applied: &Applied<T>) -> Vec<&'static str> {
    applied.events.iter().map(|e| e.name()).collect()
}

/// Render a recorded vote
pub fn vote_label(vote: Option<bool>) -> Value {
    match vote {
        Some(true) => json!("approve"),
        Some(false) => json!("reject"),
        None => Value::Null,
    }
}
