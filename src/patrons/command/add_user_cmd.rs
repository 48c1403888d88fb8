use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryResult, Role, UserStatus};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::UserDto;

pub struct AddUserCommand {
    patron_service: Box<dyn PatronService>,
}

impl AddUserCommand {
    pub fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddUserCommandRequest {
    pub name: String,
    pub cpf: String,
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub role: Option<String>,
    pub password: Option<String>,
}

impl AddUserCommandRequest {
    pub fn new(name: &str, cpf: &str) -> Self {
        Self {
            name: name.to_string(),
            cpf: cpf.to_string(),
            email: None,
            birth_date: None,
            status: None,
            role: None,
            password: None,
        }
    }

    // unknown status or role values are rejected instead of falling back to a default
    pub fn build_user(&self) -> LibraryResult<UserDto> {
        let mut user = UserDto::new(self.name.trim(), self.cpf.as_str());
        user.email = self.email.clone();
        user.birth_date = self.birth_date;
        if let Some(status) = &self.status {
            user.status = UserStatus::try_from(status.as_str())?;
        }
        if let Some(role) = &self.role {
            user.role = Role::try_from(role.as_str())?;
        }
        Ok(user)
    }
}

#[derive(Debug, Serialize)]
pub struct AddUserCommandResponse {
    pub user: UserDto,
}

impl AddUserCommandResponse {
    pub fn new(user: UserDto) -> Self {
        Self {
            user,
        }
    }
}

#[async_trait]
impl Command<AddUserCommandRequest, AddUserCommandResponse> for AddUserCommand {
    async fn execute(&self, req: AddUserCommandRequest) -> Result<AddUserCommandResponse, CommandError> {
        let user = req.build_user().map_err(CommandError::from)?;
        self.patron_service.add_user(&user, req.password.as_deref())
            .await.map_err(CommandError::from).map(AddUserCommandResponse::new)
    }
}
