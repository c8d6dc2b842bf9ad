//! Canonical Primitive Types for Bullion Certification
//!
//! Rule: No String identifiers in certification state. Ever.
//!
//! These types are the foundational building blocks for all ledger-critical
//! data structures. They are designed to be:
//! - Fixed-size (no dynamic allocation)
//! - Deterministically serializable
//! - Efficient to copy and compare

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::TypesError;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Monotonically increasing asset identifier (first issued id is 1)
pub type AssetId = u64;

/// Reward-point and fee amounts
pub type Amount = u128;

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// Domain separator for label-derived identities
const LABEL_DOMAIN: &[u8] = b"BULLION_CERT_IDENTITY_V1";

/// 32-byte identity of a submitter, validator or administrator
///
/// Serialized as a lowercase hex string so it can key JSON maps.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Address(pub [u8; 32]);

impl Address {
    /// Create a new Address from raw bytes
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create a zeroed Address
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Derive a deterministic identity from a human-readable label.
    ///
    /// Uses a domain-separated BLAKE3 hash, so `from_label("alice")` is the
    /// same identity on every machine.
    pub fn from_label(label: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(LABEL_DOMAIN);
        hasher.update(label.as_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    /// Parse a hex identity, or derive one from a label.
    ///
    /// Input that looks like hex (a `0x` prefix, or nothing but hex digits)
    /// must be a full 32-byte address; a mistyped address is an error rather
    /// than a fresh label identity.
    pub fn from_hex_or_label(s: &str) -> Result<Self, TypesError> {
        if looks_like_hex(s) {
            s.parse()
        } else {
            Ok(Self::from_label(s))
        }
    }

    /// Get the underlying bytes
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if this is the zero address
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Shortened hex form used in logs
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

fn looks_like_hex(s: &str) -> bool {
    s.starts_with("0x") || (!s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit()))
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(trimmed)
            .map_err(|e| TypesError::InvalidAddress(format!("{}: {}", s, e)))?;
        let bytes: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
            TypesError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
        })?;
        Ok(Self(bytes))
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// TESTS
// ============================================================================
