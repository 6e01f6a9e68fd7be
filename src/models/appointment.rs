use chrono::NaiveDate;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Lifecycle of an appointment as the clinic tracks it. New bookings always
/// start out pending.
#[derive(Debug, Display, Clone, Default, Deserialize, Serialize, PartialEq)]
pub enum AppointmentStatus {
    #[default]
    #[display("Pendiente")]
    #[serde(alias = "Pendiente", rename(serialize = "Pendiente"))]
    Pendiente,
    #[display("Completada")]
    #[serde(alias = "Completada", rename(serialize = "Completada"))]
    Completada,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: i64,
    pub pet_id: i64,
    pub date: NaiveDate,
    pub reason: String,
    pub status: AppointmentStatus,
}
