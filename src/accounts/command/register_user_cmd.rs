use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::accounts::domain::AccountService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RegisterUserCommand {
    account_service: Box<dyn AccountService>,
}

impl RegisterUserCommand {
    pub(crate) fn new(account_service: Box<dyn AccountService>) -> Self {
        Self {
            account_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterUserCommandRequest {
    username: String,
    password: String,
}

impl RegisterUserCommandRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterUserCommandResponse {
    pub username: String,
}

#[async_trait]
impl Command<RegisterUserCommandRequest, RegisterUserCommandResponse> for RegisterUserCommand {
    async fn execute(&self, req: RegisterUserCommandRequest) -> Result<RegisterUserCommandResponse, CommandError> {
        if req.username.is_empty() {
            return Err(CommandError::Validation { message: "username is required".to_string(), reason_code: Some("400".to_string()) });
        }
        self.account_service.register(req.username.as_str(), req.password.as_str())
            .await.map_err(CommandError::from).map(|_| RegisterUserCommandResponse { username: req.username })
    }
}
