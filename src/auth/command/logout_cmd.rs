use async_trait::async_trait;
use serde::Serialize;
use crate::auth::domain::AuthService;
use crate::core::command::{Command, CommandError};

pub struct LogoutCommand {
    auth_service: Box<dyn AuthService>,
}

impl LogoutCommand {
    pub fn new(auth_service: Box<dyn AuthService>) -> Self {
        Self {
            auth_service,
        }
    }
}

#[derive(Debug)]
pub struct LogoutCommandRequest {}

#[derive(Debug, Serialize)]
pub struct LogoutCommandResponse {
    pub cleared: bool,
}

impl LogoutCommandResponse {
    pub fn new(cleared: bool) -> Self {
        Self {
            cleared,
        }
    }
}

#[async_trait]
impl Command<LogoutCommandRequest, LogoutCommandResponse> for LogoutCommand {
    async fn execute(&self, _req: LogoutCommandRequest) -> Result<LogoutCommandResponse, CommandError> {
        self.auth_service.logout().await.map_err(CommandError::from).map(LogoutCommandResponse::new)
    }
}
