use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// UserEntity is a registered operator of the catalog console.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct UserEntity {
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl UserEntity {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn matches_password(&self, password: &str) -> bool {
        self.password == password
    }
}

impl Identifiable for UserEntity {
    fn id(&self) -> String {
        self.username.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::accounts::domain::model::UserEntity;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_user() {
        let user = UserEntity::new("alice", "secret");
        assert_eq!("alice", user.id().as_str());
        assert!(user.matches_password("secret"));
        assert!(!user.matches_password("Secret"));
    }

    #[tokio::test]
    async fn test_should_not_serialize_password() {
        let json = serde_json::to_string(&UserEntity::new("alice", "secret")).expect("serialize");
        assert!(!json.contains("secret"));
        assert!(json.contains("alice"));
    }
}
