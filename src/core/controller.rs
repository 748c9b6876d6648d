use std::sync::Arc;
use crate::accounts::domain::SharedUserRepository;
use crate::accounts::factory::create_user_repository;
use crate::catalog::domain::SharedCatalog;
use crate::catalog::factory::create_shared_catalog;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;

// AppState carries the process-wide catalog, user store and publisher into controllers.
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: SharedCatalog,
    pub users: SharedUserRepository,
    pub publisher: Arc<dyn EventPublisher>,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        let publisher = create_publisher(config.publisher);
        AppState::with_publisher(config, publisher)
    }

    pub fn with_publisher(config: Configuration, publisher: Arc<dyn EventPublisher>) -> AppState {
        AppState {
            config,
            catalog: create_shared_catalog(),
            users: create_user_repository(),
            publisher,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReplyStatus {
    BadRequest,
    Unauthorized,
    NotFound,
    Conflict,
    InternalError,
}

pub type ServerError = (ReplyStatus, String);

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Access { message, .. } => {
                (ReplyStatus::Unauthorized, message)
            }
            CommandError::DuplicateKey { message } => {
                (ReplyStatus::Conflict, message)
            }
            CommandError::NotFound { message } => {
                (ReplyStatus::NotFound, message)
            }
            CommandError::Conflict { message, .. } => {
                (ReplyStatus::Conflict, message)
            }
            CommandError::NothingToUndo { message } => {
                (ReplyStatus::NotFound, message)
            }
            CommandError::Runtime { message, .. } => {
                (ReplyStatus::InternalError, message)
            }
            CommandError::Serialization { message } => {
                (ReplyStatus::BadRequest, message)
            }
            CommandError::Validation { message, .. } => {
                (ReplyStatus::BadRequest, message)
            }
        }
    }
}
