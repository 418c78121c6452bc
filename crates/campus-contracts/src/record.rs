//! The ledger record type.
//!
//! A `Record` is one immutable entry in the hash chain. The ledger builds
//! records; callers only ever see copies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Action-specific details attached to a record.
///
/// Stored verbatim and committed to by the record's hash. Object keys are
/// kept sorted, so serializing the same value always yields the same bytes.
pub type Payload = serde_json::Value;

/// A single entry in the activity ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Position in the chain. 0 is genesis; ids are dense and increasing.
    pub sequence_id: u64,

    /// When the ledger appended the record (UTC).
    pub timestamp: DateTime<Utc>,

    pub category: Category,

    /// Free-text label, e.g. "Leave Approved".
    pub action: String,

    pub author_id: String,

    pub author_name: String,

    pub payload: Payload,

    /// Digest over every other field of this record.
    pub hash: String,

    /// `hash` of the preceding record, or `GENESIS_PREVIOUS_HASH` for genesis.
    pub previous_hash: String,
}

impl Record {
    /// The sentinel `previous_hash` carried by the genesis record.
    pub const GENESIS_PREVIOUS_HASH: &'static str = "0";

    /// Author id reserved for records written by the ledger itself.
    pub const SYSTEM_AUTHOR_ID: &'static str = "system";

    /// Display name paired with `SYSTEM_AUTHOR_ID`.
    pub const SYSTEM_AUTHOR_NAME: &'static str = "System";

    /// True for the record at position 0.
    pub fn is_genesis(&self) -> bool {
        self.sequence_id == 0
    }
}
