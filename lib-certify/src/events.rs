//! Observable certification events
//!
//! Every mutating call returns the events it emitted, in emission order, and
//! the engine appends the same events to a sequenced journal.

use serde::{Deserialize, Serialize};

use lib_types::{Address, Amount, AssetId, AssetType, RewardKind};

use crate::asset::AssetStatus;

/// Why reward points were credited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardReason {
    /// Submitter reward for registering an asset
    Registration { asset_id: AssetId },
    /// Flat reward for the vote that finalized an asset
    Finalization { asset_id: AssetId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertificationEvent {
    AssetRegistered {
        asset_id: AssetId,
        creator: Address,
        asset_type: AssetType,
        weight_grams: u64,
        minting_fee: Amount,
    },
    VoteCast {
        asset_id: AssetId,
        validator: Address,
        approve: bool,
    },
    StatusChanged {
        asset_id: AssetId,
        status: AssetStatus,
    },
    RewardCredited {
        account: Address,
        amount: Amount,
        reason: RewardReason,
    },
    ValidatorAdded {
        validator: Address,
    },
    ValidatorRemoved {
        validator: Address,
    },
    RequiredApprovalsChanged {
        previous: u8,
        current: u8,
    },
    FeeScheduleUpdated {
        asset_type: AssetType,
        bucket: u64,
        fee: Amount,
    },
    RewardRateUpdated {
        kind: RewardKind,
        value: Amount,
    },
    AdminTransferred {
        previous: Address,
        current: Address,
    },
}

impl CertificationEvent {
    /// Short event name for logs and table output
    pub fn name(&self) -> &'static str {
        match self {
            CertificationEvent::AssetRegistered { .. } => "AssetRegistered",
            CertificationEvent::VoteCast { .. } => "VoteCast",
            CertificationEvent::StatusChanged { .. } => "StatusChanged",
            CertificationEvent::RewardCredited { .. } => "RewardCredited",
            CertificationEvent::ValidatorAdded { .. } => "ValidatorAdded",
            CertificationEvent::ValidatorRemoved { .. } => "ValidatorRemoved",
            CertificationEvent::RequiredApprovalsChanged { .. } => "RequiredApprovalsChanged",
            CertificationEvent::FeeScheduleUpdated { .. } => "FeeScheduleUpdated",
            CertificationEvent::RewardRateUpdated { .. } => "RewardRateUpdated",
            CertificationEvent::AdminTransferred { .. } => "AdminTransferred",
        }
    }

    /// Asset the event concerns, if any
    pub fn asset_id(&self) -> Option<AssetId> {
        match self {
            CertificationEvent::AssetRegistered { asset_id, .. }
            | CertificationEvent::VoteCast { asset_id, .. }
            | CertificationEvent::StatusChanged { asset_id, .. } => Some(*asset_id),
            CertificationEvent::RewardCredited { reason, .. } => match reason {
                RewardReason::Registration { asset_id } | RewardReason::Finalization { asset_id } => {
                    Some(*asset_id)
                }
            },
            _ => None,
        }
    }
}

/// A journaled event with its global sequence number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub seq: u64,
    pub event: CertificationEvent,
}

/// Append-only, totally ordered event log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventJournal {
    next_seq: u64,
    records: Vec<EventRecord>,
}

impl EventJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, events: &[CertificationEvent]) {
        for event in events {
            self.records.push(EventRecord {
                seq: self.next_seq,
                event: event.clone(),
            });
            self.next_seq += 1;
        }
    }

    /// Records with `seq >= from`
    pub fn since(&self, from: u64) -> &[EventRecord] {
        let start = self.records.partition_point(|r| r.seq < from);
        &self.records[start..]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Result of a mutating call: its return value plus the events it emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied<T> {
    pub value: T,
    pub events: Vec<CertificationEvent>,
}

impl<T> Applied<T> {
    pub fn new(value: T, events: Vec<CertificationEvent>) -> Self {
        Self { value, events }
    }

    /// Count emitted events with the given name
    pub fn count(&self, name: &str) -> usize {
        self.events.iter().filter(|e| e.name() == name).count()
    }
}
