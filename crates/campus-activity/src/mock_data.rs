//! The portal's seeded session history.
//!
//! All data here is fictional. A new session starts from these three
//! records so the dashboards have history to show.

use chrono::NaiveDate;

use campus_contracts::{LedgerResult, Record};
use campus_ledger::Ledger;

use crate::{
    activity::{Activity, Actor, LeaveDecision},
    recorder::ActivityRecorder,
};

/// The demo student every seeded record belongs to.
pub fn demo_student() -> Actor {
    Actor::new("student-001", "Thirumalai.C")
}

/// The faculty member who reviewed the seeded leave.
pub const DEMO_REVIEWER: &str = "Dr. Ramesh Kumar";

/// The activities a fresh session is seeded with, in order.
pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity::LeaveReviewed {
            leave_id: "leave-001".to_string(),
            leave_type: "sick".to_string(),
            from_date: date(2026, 2, 10),
            to_date: date(2026, 2, 12),
            reviewed_by: DEMO_REVIEWER.to_string(),
            decision: LeaveDecision::Approved,
        },
        Activity::EventRegistration {
            event_id: "event-001".to_string(),
            event_name: "Smart India Hackathon 2026".to_string(),
            event_type: "hackathon".to_string(),
            event_date: date(2026, 3, 15),
        },
        Activity::ResourceUploaded {
            resource_id: "resource-001".to_string(),
            title: "Data Structures Complete Notes".to_string(),
            subject: "Data Structures".to_string(),
            resource_type: "notes".to_string(),
        },
    ]
}

/// Append the seeded history to `ledger` and return the new records.
pub fn seed_session(ledger: &Ledger) -> LedgerResult<Vec<Record>> {
    let recorder = ActivityRecorder::new(ledger);
    let student = demo_student();
    seed_activities()
        .iter()
        .map(|activity| recorder.record(&student, activity))
        .collect()
}

// Seed dates are fixed literals, all valid.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
