// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let username = Username::new(command.username)?;

        // One message for every failure mode, so usernames cannot be probed.
        let invalid = || ApplicationError::unauthorized("invalid username or password");

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(invalid)?;

        if !user.is_active {
            return Err(invalid());
        }

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await
            .map_err(|_| invalid())?;

        let subject = TokenSubject {
            user_id: user.id,
            username: user.username.to_string(),
        };
        let token = self.token_manager.issue(subject).await?;

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }
}
