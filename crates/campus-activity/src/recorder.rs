//! Writes portal activities to a borrowed ledger.

use tracing::debug;

use campus_contracts::{LedgerResult, Record};
use campus_ledger::Ledger;

use crate::activity::{Activity, Actor};

/// Records activities on behalf of portal services.
///
/// Borrows the session's ledger rather than owning one, so every service in
/// a session writes to the same chain.
#[derive(Debug, Clone, Copy)]
pub struct ActivityRecorder<'a> {
    ledger: &'a Ledger,
}

impl<'a> ActivityRecorder<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Append one record describing `activity` performed by `actor`.
    pub fn record(&self, actor: &Actor, activity: &Activity) -> LedgerResult<Record> {
        debug!(actor = %actor.id, action = activity.action(), "recording activity");
        self.ledger.append(
            activity.category(),
            activity.action(),
            actor.id.as_str(),
            actor.name.as_str(),
            activity.payload(),
        )
    }

    /// Every record written for `actor`, oldest first.
    pub fn history(&self, actor: &Actor) -> Vec<Record> {
        self.ledger.records_by_author(&actor.id)
    }

    /// The `limit` most recent records for `actor`, newest first.
    pub fn recent(&self, actor: &Actor, limit: usize) -> Vec<Record> {
        let mut history = self.history(actor);
        history.reverse();
        history.truncate(limit);
        history
    }
}
