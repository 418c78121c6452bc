//! # campus-contracts
//!
//! Shared types for the campus activity ledger.
//!
//! Every crate in the workspace imports from here. No ledger logic lives in
//! this crate, only data definitions and error types.

pub mod category;
pub mod error;
pub mod record;

pub use category::Category;
pub use error::{LedgerError, LedgerResult};
pub use record::{Payload, Record};

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;

    // ── Category ─────────────────────────────────────────────────────────────

    #[test]
    fn category_parses_appendable_values() {
        assert_eq!("leave".parse::<Category>().unwrap(), Category::Leave);
        assert_eq!("event".parse::<Category>().unwrap(), Category::Event);
        assert_eq!("resource".parse::<Category>().unwrap(), Category::Resource);
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(" Leave ".parse::<Category>().unwrap(), Category::Leave);
        assert_eq!("EVENT".parse::<Category>().unwrap(), Category::Event);
    }

    #[test]
    fn category_parse_rejects_reserved_and_unknown() {
        for bad in ["system", "achievement", ""] {
            match bad.parse::<Category>() {
                Err(LedgerError::InvalidCategory { value }) => assert_eq!(value, bad),
                other => panic!("expected InvalidCategory for {bad:?}, got {:?}", other),
            }
        }
    }

    #[test]
    fn category_appendable_set_excludes_system() {
        assert!(Category::APPENDABLE.iter().all(Category::is_appendable));
        assert!(!Category::System.is_appendable());
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Resource).unwrap(), "\"resource\"");
        assert_eq!(Category::System.to_string(), "system");
    }

    // ── Record ───────────────────────────────────────────────────────────────

    #[test]
    fn record_json_keeps_payload_verbatim() {
        let record = Record {
            sequence_id: 1,
            timestamp: Utc.with_ymd_and_hms(2026, 2, 10, 9, 30, 0).unwrap(),
            category: Category::Leave,
            action: "Leave Applied".to_string(),
            author_id: "student-001".to_string(),
            author_name: "Thirumalai.C".to_string(),
            payload: json!({ "leaveId": "leave-001", "days": [10, 11, 12] }),
            hash: "abc".to_string(),
            previous_hash: "def".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let decoded: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, record);
        assert!(!decoded.is_genesis());
    }

    // ── LedgerError display messages ─────────────────────────────────────────

    #[test]
    fn error_invalid_category_display() {
        let err = LedgerError::InvalidCategory {
            value: "achievement".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid category"));
        assert!(msg.contains("achievement"));
    }

    #[test]
    fn error_validation_display() {
        let err = LedgerError::Validation {
            reason: "author_id must not be empty".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("validation error"));
        assert!(msg.contains("author_id"));
    }

    #[test]
    fn error_serialization_display() {
        let err = LedgerError::Serialization {
            reason: "key must be a string".to_string(),
        };
        assert!(err.to_string().starts_with("serialization error"));
    }

    #[test]
    fn error_config_display() {
        let err = LedgerError::Config {
            reason: "unknown digest".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("unknown digest"));
    }
}
