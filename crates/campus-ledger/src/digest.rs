//! Record digests.
//!
//! Every digest is computed over the same canonical string: a compact JSON
//! object holding the eight committed fields of a record. `serde_json` keeps
//! object keys sorted, so the layout is
//!
//! ```text
//! {"action":..,"author_id":..,"author_name":..,"category":..,
//!  "payload":..,"previous_hash":..,"sequence_id":..,"timestamp":..}
//! ```
//!
//! and nested payload maps are sorted the same way. Identical field values
//! therefore always produce identical bytes.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::{Digest, Sha256};

use campus_contracts::{Category, Payload, Record};

/// Which function turns the canonical string into a record hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// SHA-256, rendered as 64 lowercase hex characters.
    #[default]
    Sha256,

    /// The portal's rolling 32-bit checksum, rendered as 16 hex characters.
    ///
    /// Not collision resistant. Kept so chains match the portal's format.
    Checksum,
}

impl DigestAlgorithm {
    /// Digest `input` with this algorithm.
    pub fn digest(&self, input: &str) -> String {
        match self {
            DigestAlgorithm::Sha256 => sha256_hex(input),
            DigestAlgorithm::Checksum => rolling_checksum(input),
        }
    }
}

/// The fields of a record that its hash commits to: everything but `hash`.
#[derive(Debug, Clone, Copy)]
pub struct RecordFields<'a> {
    pub sequence_id: u64,
    pub timestamp: &'a DateTime<Utc>,
    pub category: Category,
    pub action: &'a str,
    pub author_id: &'a str,
    pub author_name: &'a str,
    pub payload: &'a Payload,
    pub previous_hash: &'a str,
}

impl<'a> From<&'a Record> for RecordFields<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            sequence_id: record.sequence_id,
            timestamp: &record.timestamp,
            category: record.category,
            action: &record.action,
            author_id: &record.author_id,
            author_name: &record.author_name,
            payload: &record.payload,
            previous_hash: &record.previous_hash,
        }
    }
}

impl RecordFields<'_> {
    /// The canonical string the digest is computed over.
    pub fn canonical(&self) -> String {
        json!({
            "sequence_id": self.sequence_id,
            "timestamp": self.timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            "category": self.category.as_str(),
            "action": self.action,
            "author_id": self.author_id,
            "author_name": self.author_name,
            "payload": self.payload,
            "previous_hash": self.previous_hash,
        })
        .to_string()
    }

    /// Hash these fields with `algorithm`.
    pub fn hash(&self, algorithm: DigestAlgorithm) -> String {
        algorithm.digest(&self.canonical())
    }
}

fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// `h = h * 31 + unit` over UTF-16 code units, wrapping at 32 bits.
///
/// The absolute value is taken in 64 bits so `i32::MIN` stays positive.
fn rolling_checksum(input: &str) -> String {
    let mut h: i32 = 0;
    for unit in input.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit));
    }
    format!("{:016x}", i64::from(h).unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_empty_string() {
        assert_eq!(
            DigestAlgorithm::Sha256.digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn checksum_matches_known_values() {
        assert_eq!(DigestAlgorithm::Checksum.digest(""), "0000000000000000");
        // 'a' = 97
        assert_eq!(DigestAlgorithm::Checksum.digest("a"), "0000000000000061");
        // 97 * 31 + 98 = 3105
        assert_eq!(DigestAlgorithm::Checksum.digest("ab"), "0000000000000c21");
    }

    #[test]
    fn checksum_is_always_sixteen_hex_chars() {
        let long = "x".repeat(10_000);
        let digest = DigestAlgorithm::Checksum.digest(&long);
        assert_eq!(digest.len(), 16);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn checksum_walks_utf16_code_units() {
        // U+1F600 is a surrogate pair: two code units, not one char.
        let astral = DigestAlgorithm::Checksum.digest("\u{1F600}");
        let pair = {
            let (hi, lo) = (0xD83Di32, 0xDE00i32);
            format!("{:016x}", hi * 31 + lo)
        };
        assert_eq!(astral, pair);
    }

    #[test]
    fn canonical_sorts_payload_keys() {
        let ts = DateTime::<Utc>::default();
        let a = serde_json::json!({ "b": 1, "a": 2 });
        let b = serde_json::json!({ "a": 2, "b": 1 });
        let fields = |payload| RecordFields {
            sequence_id: 3,
            timestamp: &ts,
            category: Category::Event,
            action: "Event Registration",
            author_id: "s1",
            author_name: "Alice",
            payload,
            previous_hash: "0",
        };
        assert_eq!(fields(&a).canonical(), fields(&b).canonical());
        assert!(fields(&a).canonical().starts_with("{\"action\":\"Event Registration\""));
    }

    #[test]
    fn algorithm_parses_from_lowercase_names() {
        let algo: DigestAlgorithm = serde_json::from_str("\"checksum\"").unwrap();
        assert_eq!(algo, DigestAlgorithm::Checksum);
        assert_eq!(DigestAlgorithm::default(), DigestAlgorithm::Sha256);
    }
}
