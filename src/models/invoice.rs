use chrono::NaiveDate;
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Clone, Default, Deserialize, Serialize, PartialEq)]
pub enum InvoiceStatus {
    #[default]
    #[display("Pendiente")]
    #[serde(alias = "Pendiente", rename(serialize = "Pendiente"))]
    Pendiente,
    #[display("Pagada")]
    #[serde(alias = "Pagada", rename(serialize = "Pagada"))]
    Pagada,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: i64,
    pub client_id: i64,
    pub date: NaiveDate,
    pub total_amount: f64,
    pub status: InvoiceStatus,
}
