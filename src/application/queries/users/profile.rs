// src/application/queries/users/profile.rs
use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    pub async fn get_profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        Ok(user.into())
    }
}
