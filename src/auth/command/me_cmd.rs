use async_trait::async_trait;
use serde::Serialize;
use crate::auth::domain::AuthService;
use crate::core::command::{Command, CommandError};
use crate::patrons::dto::UserDto;

pub struct MeCommand {
    auth_service: Box<dyn AuthService>,
}

impl MeCommand {
    pub fn new(auth_service: Box<dyn AuthService>) -> Self {
        Self {
            auth_service,
        }
    }
}

#[derive(Debug)]
pub struct MeCommandRequest {}

#[derive(Debug, Serialize)]
pub struct MeCommandResponse {
    pub user: UserDto,
}

impl MeCommandResponse {
    pub fn new(user: UserDto) -> Self {
        Self {
            user,
        }
    }
}

#[async_trait]
impl Command<MeCommandRequest, MeCommandResponse> for MeCommand {
    async fn execute(&self, _req: MeCommandRequest) -> Result<MeCommandResponse, CommandError> {
        self.auth_service.me().await.map_err(CommandError::from).map(MeCommandResponse::new)
    }
}
