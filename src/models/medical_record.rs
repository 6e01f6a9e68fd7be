use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MedicalRecord {
    pub id: i64,
    pub appointment_id: i64,
    pub diagnosis: String,
    pub treatment: String,
    pub notes: Option<String>,
}

/// Denormalized row of a pet's medical history, pre-joined with the
/// appointment it belongs to. Read-only projection for display purposes,
/// never used for writes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalHistoryEntry {
    pub record_id: i64,
    pub date: NaiveDate,
    pub reason: String,
    pub diagnosis: String,
    pub treatment: String,
    pub notes: Option<String>,
}
