use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::UserDto;

pub struct ListUsersCommand {
    patron_service: Box<dyn PatronService>,
}

impl ListUsersCommand {
    pub fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListUsersCommandRequest {
    pub filter: Option<String>,
}

impl ListUsersCommandRequest {
    pub fn new(filter: Option<String>) -> Self {
        Self {
            filter,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListUsersCommandResponse {
    pub users: Vec<UserDto>,
}

impl ListUsersCommandResponse {
    pub fn new(users: Vec<UserDto>) -> Self {
        Self {
            users,
        }
    }
}

#[async_trait]
impl Command<ListUsersCommandRequest, ListUsersCommandResponse> for ListUsersCommand {
    async fn execute(&self, req: ListUsersCommandRequest) -> Result<ListUsersCommandResponse, CommandError> {
        let res = match &req.filter {
            Some(term) => self.patron_service.filter_users(term).await,
            None => self.patron_service.list_users().await,
        };
        res.map_err(CommandError::from).map(ListUsersCommandResponse::new)
    }
}
