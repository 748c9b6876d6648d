use crate::accounts::command::login_user_cmd::{LoginUserCommand, LoginUserCommandRequest};
use crate::accounts::command::register_user_cmd::{RegisterUserCommand, RegisterUserCommandRequest, RegisterUserCommandResponse};
use crate::accounts::domain::AccountService;
use crate::accounts::factory;
use crate::accounts::session::Session;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, ServerError};

fn build_service(state: &AppState) -> Box<dyn AccountService> {
    factory::create_account_service(&state.config, state.users.clone())
}

pub(crate) async fn register_user(
    state: &AppState,
    username: &str,
    password: &str) -> Result<RegisterUserCommandResponse, ServerError> {
    let req = RegisterUserCommandRequest::new(username, password);
    let res = RegisterUserCommand::new(build_service(state)).execute(req).await?;
    Ok(res)
}

pub(crate) async fn login_user(
    state: &AppState,
    username: &str,
    password: &str) -> Result<Session, ServerError> {
    let req = LoginUserCommandRequest::new(username, password);
    let res = LoginUserCommand::new(build_service(state)).execute(req).await?;
    Ok(res.session)
}

pub(crate) async fn logout_user(
    state: &AppState,
    session: Session) -> Result<(), ServerError> {
    build_service(state).logout(session).await.map_err(CommandError::from)?;
    Ok(())
}
