// src/application/commands/users/register.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub full_name: Option<String>,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let hash = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser::new(
            username,
            command.full_name,
            PasswordHash::new(hash)?,
            self.clock.now(),
        );

        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(username = user.username.as_str(), "user registered");
        Ok(user.into())
    }
}
