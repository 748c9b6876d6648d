pub mod model;
pub mod service;

use std::sync::Arc;
use async_trait::async_trait;
use crate::accounts::domain::model::UserEntity;
use crate::accounts::session::Session;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

pub type SharedUserRepository = Arc<dyn Repository<UserEntity>>;

#[async_trait]
pub trait AccountService: Sync + Send {
    async fn register(&self, username: &str, password: &str) -> LibraryResult<()>;
    async fn authenticate(&self, username: &str, password: &str) -> LibraryResult<bool>;
    async fn login(&self, username: &str, password: &str) -> LibraryResult<Session>;
    async fn logout(&self, session: Session) -> LibraryResult<()>;
}
