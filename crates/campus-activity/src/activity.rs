//! Portal activities and how they map onto ledger records.
//!
//! The ledger only knows three categories. Richer portal actions are folded
//! into them here: achievements are filed under `resource`, leave reviews
//! under `leave` with an approved/rejected action label.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use campus_contracts::{Category, Payload};

/// The person whose action produced a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
}

impl Actor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Outcome of a leave review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveDecision {
    Approved,
    Rejected,
}

impl LeaveDecision {
    fn as_str(&self) -> &'static str {
        match self {
            LeaveDecision::Approved => "approved",
            LeaveDecision::Rejected => "rejected",
        }
    }
}

/// One portal action that is written to the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Activity {
    LeaveApplied {
        leave_id: String,
        leave_type: String,
        from_date: NaiveDate,
        to_date: NaiveDate,
    },
    LeaveReviewed {
        leave_id: String,
        leave_type: String,
        from_date: NaiveDate,
        to_date: NaiveDate,
        reviewed_by: String,
        decision: LeaveDecision,
    },
    EventRegistration {
        event_id: String,
        event_name: String,
        event_type: String,
        event_date: NaiveDate,
    },
    ResourceUploaded {
        resource_id: String,
        title: String,
        subject: String,
        resource_type: String,
    },
    AchievementAdded {
        achievement_id: String,
        title: String,
        achievement_category: String,
    },
}

impl Activity {
    /// Ledger category this activity is filed under.
    pub fn category(&self) -> Category {
        match self {
            Activity::LeaveApplied { .. } | Activity::LeaveReviewed { .. } => Category::Leave,
            Activity::EventRegistration { .. } => Category::Event,
            Activity::ResourceUploaded { .. } | Activity::AchievementAdded { .. } => {
                Category::Resource
            }
        }
    }

    /// Action label shown in the ledger history.
    pub fn action(&self) -> &'static str {
        match self {
            Activity::LeaveApplied { .. } => "Leave Applied",
            Activity::LeaveReviewed {
                decision: LeaveDecision::Approved,
                ..
            } => "Leave Approved",
            Activity::LeaveReviewed {
                decision: LeaveDecision::Rejected,
                ..
            } => "Leave Rejected",
            Activity::EventRegistration { .. } => "Event Registration",
            Activity::ResourceUploaded { .. } => "Resource Uploaded",
            Activity::AchievementAdded { .. } => "Achievement Added",
        }
    }

    /// Record payload, keyed the way the portal's history views read it.
    pub fn payload(&self) -> Payload {
        match self {
            Activity::LeaveApplied {
                leave_id,
                leave_type,
                from_date,
                to_date,
            } => json!({
                "leaveId": leave_id,
                "type": leave_type,
                "fromDate": from_date,
                "toDate": to_date,
            }),
            Activity::LeaveReviewed {
                leave_id,
                leave_type,
                from_date,
                to_date,
                reviewed_by,
                decision,
            } => json!({
                "leaveId": leave_id,
                "type": leave_type,
                "fromDate": from_date,
                "toDate": to_date,
                "reviewedBy": reviewed_by,
                "status": decision.as_str(),
            }),
            Activity::EventRegistration {
                event_id,
                event_name,
                event_type,
                event_date,
            } => json!({
                "eventId": event_id,
                "eventName": event_name,
                "eventType": event_type,
                "eventDate": event_date,
            }),
            Activity::ResourceUploaded {
                resource_id,
                title,
                subject,
                resource_type,
            } => json!({
                "resourceId": resource_id,
                "title": title,
                "subject": subject,
                "type": resource_type,
            }),
            Activity::AchievementAdded {
                achievement_id,
                title,
                achievement_category,
            } => json!({
                "achievementId": achievement_id,
                "title": title,
                "category": achievement_category,
            }),
        }
    }
}
