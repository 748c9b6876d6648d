use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::accounts::domain::AccountService;
use crate::accounts::session::Session;
use crate::core::command::{Command, CommandError};

pub(crate) struct LoginUserCommand {
    account_service: Box<dyn AccountService>,
}

impl LoginUserCommand {
    pub(crate) fn new(account_service: Box<dyn AccountService>) -> Self {
        Self {
            account_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginUserCommandRequest {
    username: String,
    password: String,
}

impl LoginUserCommandRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginUserCommandResponse {
    pub session: Session,
}

#[async_trait]
impl Command<LoginUserCommandRequest, LoginUserCommandResponse> for LoginUserCommand {
    async fn execute(&self, req: LoginUserCommandRequest) -> Result<LoginUserCommandResponse, CommandError> {
        self.account_service.login(req.username.as_str(), req.password.as_str())
            .await.map_err(CommandError::from).map(|session| LoginUserCommandResponse { session })
    }
}
