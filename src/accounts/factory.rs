use std::sync::Arc;
use crate::accounts::domain::{AccountService, SharedUserRepository};
use crate::accounts::domain::model::UserEntity;
use crate::accounts::domain::service::AccountServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::memory_repository::MemoryRepository;

pub fn create_user_repository() -> SharedUserRepository {
    Arc::new(MemoryRepository::<UserEntity>::new("users"))
}

pub(crate) fn create_account_service(config: &Configuration, user_repository: SharedUserRepository) -> Box<dyn AccountService> {
    Box::new(AccountServiceImpl::new(config, user_repository))
}
