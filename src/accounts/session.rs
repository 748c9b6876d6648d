use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// Session identifies the logged-in operator and is passed explicitly to every
// catalog-facing controller call.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub username: String,
    #[serde(with = "serializer")]
    pub started_at: NaiveDateTime,
}

impl Session {
    pub fn new(username: &str) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            started_at: Utc::now().naive_utc(),
        }
    }
}
