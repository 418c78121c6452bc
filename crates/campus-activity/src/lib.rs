//! # campus-activity
//!
//! The boundary between portal services and the activity ledger.
//!
//! Services describe what happened as an [`Activity`]; an
//! [`ActivityRecorder`] borrowing the session's ledger turns it into a
//! record in one of the ledger's three categories. [`mock_data`] holds the
//! history a fresh session is seeded with.

pub mod activity;
pub mod mock_data;
pub mod recorder;

pub use activity::{Activity, Actor, LeaveDecision};
pub use recorder::ActivityRecorder;

// ── Tests ─────────────────────────────────────────────────────────────────────
