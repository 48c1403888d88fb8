use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryResult, Role, UserStatus};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::UserDto;
use crate::utils::cpf::mask_cpf;

pub struct UpdateUserCommand {
    patron_service: Box<dyn PatronService>,
}

impl UpdateUserCommand {
    pub fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

// Fields left as None keep the value stored by the user service.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserCommandRequest {
    pub user_id: i64,
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub role: Option<String>,
}

impl UpdateUserCommandRequest {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    pub fn apply(&self, user: &mut UserDto) -> LibraryResult<()> {
        if let Some(name) = &self.name {
            user.name = name.trim().to_string();
        }
        if let Some(cpf) = &self.cpf {
            user.cpf = mask_cpf(cpf);
        }
        if let Some(email) = &self.email {
            user.email = Some(email.to_string());
        }
        if let Some(birth_date) = self.birth_date {
            user.birth_date = Some(birth_date);
        }
        if let Some(status) = &self.status {
            user.status = UserStatus::try_from(status.as_str())?;
        }
        if let Some(role) = &self.role {
            user.role = Role::try_from(role.as_str())?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateUserCommandResponse {
    pub user: UserDto,
}

impl UpdateUserCommandResponse {
    pub fn new(user: UserDto) -> Self {
        Self {
            user,
        }
    }
}

#[async_trait]
impl Command<UpdateUserCommandRequest, UpdateUserCommandResponse> for UpdateUserCommand {
    async fn execute(&self, req: UpdateUserCommandRequest) -> Result<UpdateUserCommandResponse, CommandError> {
        let mut user = self.patron_service.find_user_by_id(req.user_id).await.map_err(CommandError::from)?;
        req.apply(&mut user).map_err(CommandError::from)?;
        self.patron_service.update_user(&user)
            .await.map_err(CommandError::from).map(UpdateUserCommandResponse::new)
    }
}
