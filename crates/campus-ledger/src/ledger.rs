//! The in-memory activity ledger.
//!
//! `Ledger` owns the chain for one session. Records live in a `Vec` behind a
//! `Mutex`: an append reads the tail hash and pushes the new record under a
//! single lock, and every read works on a snapshot taken under that lock.
//!
//! Construct one ledger at session start and lend it (or an `Arc` of it) to
//! whatever needs to record or query activity.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tracing::{debug, info, warn};

use campus_contracts::{Category, LedgerError, LedgerResult, Payload, Record};

use crate::{
    chain::{genesis_record, verify_chain, ChainViolation},
    config::LedgerConfig,
    digest::{DigestAlgorithm, RecordFields},
};

/// An append-only, hash-linked sequence of activity records.
///
/// The chain always holds at least the genesis record.
#[derive(Debug)]
pub struct Ledger {
    config: LedgerConfig,
    pub(crate) records: Mutex<Vec<Record>>,
}

impl Ledger {
    /// Create a ledger with the default configuration (SHA-256 digests).
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Create a ledger and write its genesis record.
    pub fn with_config(config: LedgerConfig) -> Self {
        let genesis = genesis_record(config.digest);
        info!(
            digest = ?config.digest,
            genesis_hash = %genesis.hash,
            "ledger initialized"
        );
        Self {
            config,
            records: Mutex::new(vec![genesis]),
        }
    }

    /// The digest every record in this ledger is hashed with.
    pub fn digest(&self) -> DigestAlgorithm {
        self.config.digest
    }

    /// Append a record and return a copy of it.
    ///
    /// The ledger assigns `sequence_id`, `timestamp`, `previous_hash` and
    /// `hash`. Returns `LedgerError::Validation` for the reserved `System`
    /// category or an empty `action`, `author_id` or `author_name`; nothing
    /// is stored in that case.
    pub fn append(
        &self,
        category: Category,
        action: impl Into<String>,
        author_id: impl Into<String>,
        author_name: impl Into<String>,
        payload: Payload,
    ) -> LedgerResult<Record> {
        let action = action.into();
        let author_id = author_id.into();
        let author_name = author_name.into();

        if !category.is_appendable() {
            return Err(LedgerError::Validation {
                reason: format!("category '{}' is reserved for the genesis record", category),
            });
        }
        for (field, value) in [
            ("action", &action),
            ("author_id", &author_id),
            ("author_name", &author_name),
        ] {
            if value.trim().is_empty() {
                return Err(LedgerError::Validation {
                    reason: format!("{} must not be empty", field),
                });
            }
        }

        let mut records = self.lock();
        let sequence_id = records.len() as u64;
        let previous_hash = records
            .last()
            .map(|r| r.hash.clone())
            .unwrap_or_else(|| Record::GENESIS_PREVIOUS_HASH.to_string());
        let timestamp = Utc::now();

        let hash = RecordFields {
            sequence_id,
            timestamp: &timestamp,
            category,
            action: &action,
            author_id: &author_id,
            author_name: &author_name,
            payload: &payload,
            previous_hash: &previous_hash,
        }
        .hash(self.config.digest);

        let record = Record {
            sequence_id,
            timestamp,
            category,
            action,
            author_id,
            author_name,
            payload,
            hash,
            previous_hash,
        };
        records.push(record.clone());

        debug!(
            sequence_id,
            category = %record.category,
            action = %record.action,
            author_id = %record.author_id,
            hash = %record.hash,
            "record appended"
        );

        Ok(record)
    }

    /// A copy of every record, genesis first.
    pub fn chain(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Records written by `author_id`, in insertion order.
    pub fn records_by_author(&self, author_id: &str) -> Vec<Record> {
        self.lock()
            .iter()
            .filter(|r| r.author_id == author_id)
            .cloned()
            .collect()
    }

    /// Records in `category`, in insertion order.
    pub fn records_by_category(&self, category: Category) -> Vec<Record> {
        self.lock()
            .iter()
            .filter(|r| r.category == category)
            .cloned()
            .collect()
    }

    /// Number of records, genesis included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Always false: the genesis record is written on construction.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// The most recently appended record.
    pub fn head(&self) -> Option<Record> {
        self.lock().last().cloned()
    }

    /// Hash of the most recently appended record.
    pub fn head_hash(&self) -> String {
        self.lock()
            .last()
            .map(|r| r.hash.clone())
            .unwrap_or_default()
    }

    /// True when the whole chain passes verification.
    pub fn verify(&self) -> bool {
        self.verify_detailed().is_ok()
    }

    /// Verify the chain and report the first violation.
    ///
    /// Runs against a snapshot, so the lock is not held while hashing.
    pub fn verify_detailed(&self) -> Result<(), ChainViolation> {
        let snapshot = self.chain();
        let result = verify_chain(&snapshot, self.config.digest);
        if let Err(violation) = &result {
            warn!(
                index = ?violation.index(),
                records = snapshot.len(),
                "ledger verification failed: {}",
                violation
            );
        }
        result
    }

    /// Records are pushed fully formed, so a poisoned lock still guards a
    /// consistent chain.
    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
