use async_trait::async_trait;
use tracing::{info, warn};
use crate::accounts::domain::{AccountService, SharedUserRepository};
use crate::accounts::domain::model::UserEntity;
use crate::accounts::session::Session;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct AccountServiceImpl {
    user_repository: SharedUserRepository,
}

impl AccountServiceImpl {
    pub(crate) fn new(_config: &Configuration, user_repository: SharedUserRepository) -> Self {
        Self {
            user_repository,
        }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn register(&self, username: &str, password: &str) -> LibraryResult<()> {
        self.user_repository.create(&UserEntity::new(username, password)).await
            .map_err(|err| match err {
                LibraryError::DuplicateKey { .. } => LibraryError::duplicate_key(
                    "username already exists, please choose a different username"),
                other => other,
            })?;
        info!(username, "user registered");
        Ok(())
    }

    async fn authenticate(&self, username: &str, password: &str) -> LibraryResult<bool> {
        match self.user_repository.get(username).await {
            Ok(user) => Ok(user.matches_password(password)),
            Err(LibraryError::NotFound { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    async fn login(&self, username: &str, password: &str) -> LibraryResult<Session> {
        if !self.authenticate(username, password).await? {
            warn!(username, "rejected login");
            return Err(LibraryError::access_denied("invalid username or password", None));
        }
        let session = Session::new(username);
        info!(username, session_id = session.session_id.as_str(), "user logged in");
        Ok(session)
    }

    async fn logout(&self, session: Session) -> LibraryResult<()> {
        info!(username = session.username.as_str(), session_id = session.session_id.as_str(), "user logged out");
        Ok(())
    }
}
