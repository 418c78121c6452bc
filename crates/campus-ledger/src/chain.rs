//! Genesis construction and chain integrity verification.
//!
//! Verification walks the whole chain on every call. For each record, in
//! order:
//!
//!   1. `sequence_id` must equal the record's position.
//!   2. The stored `hash` must equal the digest recomputed from the other
//!      fields (content tampering).
//!   3. `previous_hash` must equal the predecessor's `hash` (reordering,
//!      insertion, deletion).
//!
//! Position 0 is compared field-for-field with the fixed genesis record, so
//! a rewritten genesis is caught even when it is self-consistent.

use chrono::{DateTime, Utc};
use serde_json::json;
use thiserror::Error;

use campus_contracts::{Category, Record};

use crate::digest::{DigestAlgorithm, RecordFields};

/// Action label of the genesis record.
pub const GENESIS_ACTION: &str = "System Initialized";

/// Message stored in the genesis payload.
pub const GENESIS_MESSAGE: &str = "Genesis Block - College Portal Blockchain Initialized";

/// 2024-01-01T00:00:00Z
const GENESIS_UNIX_SECONDS: i64 = 1_704_067_200;

/// Why a chain failed verification, and where.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainViolation {
    #[error("chain is empty: a genesis record is required")]
    Empty,

    #[error("record 0 is not the expected genesis record")]
    GenesisMismatch,

    #[error("record at index {index} has sequence id {found}")]
    SequenceGap { index: usize, found: u64 },

    #[error("hash mismatch at index {index}: stored hash does not match record content")]
    HashMismatch { index: usize },

    #[error("broken link at index {index}: previous_hash does not match the preceding record")]
    BrokenLink { index: usize },
}

impl ChainViolation {
    /// Position of the first failing record, if the failure has one.
    pub fn index(&self) -> Option<usize> {
        match self {
            ChainViolation::Empty => None,
            ChainViolation::GenesisMismatch => Some(0),
            ChainViolation::SequenceGap { index, .. }
            | ChainViolation::HashMismatch { index }
            | ChainViolation::BrokenLink { index } => Some(*index),
        }
    }
}

/// Timestamp carried by every genesis record.
pub fn genesis_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(GENESIS_UNIX_SECONDS, 0).unwrap_or_default()
}

/// Build the fixed genesis record, hashed with `algorithm`.
pub fn genesis_record(algorithm: DigestAlgorithm) -> Record {
    let mut record = Record {
        sequence_id: 0,
        timestamp: genesis_timestamp(),
        category: Category::System,
        action: GENESIS_ACTION.to_string(),
        author_id: Record::SYSTEM_AUTHOR_ID.to_string(),
        author_name: Record::SYSTEM_AUTHOR_NAME.to_string(),
        payload: json!({ "message": GENESIS_MESSAGE }),
        hash: String::new(),
        previous_hash: Record::GENESIS_PREVIOUS_HASH.to_string(),
    };
    record.hash = hash_record(algorithm, &record);
    record
}

/// Recompute the hash `record` should carry, ignoring its stored `hash`.
pub fn hash_record(algorithm: DigestAlgorithm, record: &Record) -> String {
    RecordFields::from(record).hash(algorithm)
}

/// Verify a chain, reporting the first violation found.
pub fn verify_chain(records: &[Record], algorithm: DigestAlgorithm) -> Result<(), ChainViolation> {
    let genesis = records.first().ok_or(ChainViolation::Empty)?;
    if *genesis != genesis_record(algorithm) {
        return Err(ChainViolation::GenesisMismatch);
    }

    for (index, pair) in records.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        let index = index + 1;

        if current.sequence_id != index as u64 {
            return Err(ChainViolation::SequenceGap {
                index,
                found: current.sequence_id,
            });
        }

        if current.hash != hash_record(algorithm, current) {
            return Err(ChainViolation::HashMismatch { index });
        }

        if current.previous_hash != previous.hash {
            return Err(ChainViolation::BrokenLink { index });
        }
    }

    Ok(())
}
