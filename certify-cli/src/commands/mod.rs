//! Command handlers
//!
//! Each handler opens the snapshot, performs one operation through
//! `CertificationService` and returns a JSON value for rendering.
//! Mutating handlers persist the snapshot only after the operation succeeds.

pub mod admin;
pub mod asset;
pub mod common;
pub mod init;
pub mod query;
