use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::auth::domain::AuthService;
use crate::auth::session::Session;
use crate::core::command::{Command, CommandError};

pub struct LoginCommand {
    auth_service: Box<dyn AuthService>,
}

impl LoginCommand {
    pub fn new(auth_service: Box<dyn AuthService>) -> Self {
        Self {
            auth_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginCommandRequest {
    pub matricula: String,
    pub password: String,
}

impl LoginCommandRequest {
    pub fn new(matricula: &str, password: &str) -> Self {
        Self {
            matricula: matricula.to_string(),
            password: password.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginCommandResponse {
    pub session: Session,
}

impl LoginCommandResponse {
    pub fn new(session: Session) -> Self {
        Self {
            session,
        }
    }
}

#[async_trait]
impl Command<LoginCommandRequest, LoginCommandResponse> for LoginCommand {
    async fn execute(&self, req: LoginCommandRequest) -> Result<LoginCommandResponse, CommandError> {
        self.auth_service.login(req.matricula.as_str(), req.password.as_str())
            .await.map_err(CommandError::from).map(LoginCommandResponse::new)
    }
}
