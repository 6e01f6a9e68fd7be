use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: i64,
    pub client_id: i64,
}
