use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: i64,
    pub client_id: i64,
    /// Integer score in [1, 5], validated by the service before persisting.
    pub rating: i64,
    pub comment: Option<String>,
    pub date: NaiveDate,
}
