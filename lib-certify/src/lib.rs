//! Bullion Asset Certification
//!
//! Submitters register physical gold and silver claims; a fixed roster of
//! five validators votes each claim to a terminal `True` or `False` status.
//! Submitters earn weight-proportional reward points at registration and the
//! validator whose vote finalizes a claim earns a flat finalization reward.
//!
//! # Key Types
//!
//! - [`CertificationEngine`]: Owned state machine behind every operation
//! - [`CertificationService`]: Shared async handle that serializes callers
//! - [`AssetRecord`] / [`AssetStatus`]: A claim and its quorum outcome
//! - [`CertificationEvent`]: Observable record of every state change
//!
//! Fee and reward arithmetic lives in `lib-fees`.

pub mod asset;
pub mod config;
pub mod engine;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod service;
pub mod storage;
pub mod validators;
pub mod votes;

pub use asset::{AssetRecord, AssetStatus, RegistrationRequest, MIN_IMAGE_URIS};
pub use config::CertifyConfig;
pub use engine::{resolve_status, CertificationEngine, DEFAULT_REQUIRED_APPROVALS};
pub use errors::{CertifyError, CertifyResult};
pub use events::{Applied, CertificationEvent, EventJournal, EventRecord, RewardReason};
pub use ledger::RewardLedger;
pub use service::CertificationService;
pub use storage::{SnapshotStore, SNAPSHOT_VERSION};
pub use validators::{ValidatorSet, NUM_VALIDATORS};
pub use votes::VoteBook;
