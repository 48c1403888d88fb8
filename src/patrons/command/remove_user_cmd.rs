use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;

pub struct RemoveUserCommand {
    patron_service: Box<dyn PatronService>,
}

impl RemoveUserCommand {
    pub fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveUserCommandRequest {
    pub user_id: i64,
}

impl RemoveUserCommandRequest {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveUserCommandResponse {
    pub user_id: i64,
}

impl RemoveUserCommandResponse {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
        }
    }
}

#[async_trait]
impl Command<RemoveUserCommandRequest, RemoveUserCommandResponse> for RemoveUserCommand {
    async fn execute(&self, req: RemoveUserCommandRequest) -> Result<RemoveUserCommandResponse, CommandError> {
        self.patron_service.remove_user(req.user_id)
            .await.map_err(CommandError::from).map(|_| RemoveUserCommandResponse::new(req.user_id))
    }
}
