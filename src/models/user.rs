use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Salted PHC-format hash. The clear-text password is never stored,
    /// serialized or logged.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
}
