//! # campus-ledger
//!
//! Append-only, hash-linked activity ledger for the campus portal.
//!
//! ## Overview
//!
//! A `Ledger` starts with a fixed genesis record. Every appended `Record`
//! stores the hash of its predecessor and a hash of its own content, so
//! editing, reordering, inserting or removing any record breaks the chain
//! and is detected by `Ledger::verify`.
//!
//! Hashes are SHA-256 by default. `DigestAlgorithm::Checksum` reproduces
//! the portal's 16-hex-digit rolling checksum, which detects accidents but
//! not deliberate forgery.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use campus_contracts::Category;
//! use campus_ledger::Ledger;
//! use serde_json::json;
//!
//! let ledger = Ledger::new();
//! ledger.append(Category::Leave, "Leave Applied", "s1", "Alice", json!({ "leaveId": "L1" }))?;
//! assert!(ledger.verify());
//! ```

pub mod chain;
pub mod config;
pub mod digest;
pub mod ledger;

pub use chain::{genesis_record, hash_record, verify_chain, ChainViolation};
pub use config::LedgerConfig;
pub use digest::{DigestAlgorithm, RecordFields};
pub use ledger::Ledger;

// ── Tests ─────────────────────────────────────────────────────────────────────
