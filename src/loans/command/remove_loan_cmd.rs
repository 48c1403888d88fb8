use async_trait::async_trait;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::loans::domain::LoanService;

pub struct RemoveLoanCommand {
    loan_service: Box<dyn LoanService>,
}

impl RemoveLoanCommand {
    pub fn new(loan_service: Box<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

#[derive(Debug)]
pub struct RemoveLoanCommandRequest {
    pub loan_id: i64,
}

impl RemoveLoanCommandRequest {
    pub fn new(loan_id: i64) -> Self {
        Self {
            loan_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveLoanCommandResponse {
    pub loan_id: i64,
}

impl RemoveLoanCommandResponse {
    pub fn new(loan_id: i64) -> Self {
        Self {
            loan_id,
        }
    }
}

#[async_trait]
impl Command<RemoveLoanCommandRequest, RemoveLoanCommandResponse> for RemoveLoanCommand {
    async fn execute(&self, req: RemoveLoanCommandRequest) -> Result<RemoveLoanCommandResponse, CommandError> {
        self.loan_service.remove_loan(req.loan_id)
            .await.map_err(CommandError::from).map(|_| RemoveLoanCommandResponse::new(req.loan_id))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::loans::command::remove_loan_cmd::{RemoveLoanCommand, RemoveLoanCommandRequest};
    use crate::loans::factory;
    use crate::utils::fake_backend::FakeBackend;

    #[tokio::test]
    async fn test_should_fail_removing_unknown_loan() {
        let backend = FakeBackend::start().await;
        let cmd = RemoveLoanCommand::new(factory::create_loan_service(&backend.config()).await.unwrap());
        let err = cmd.execute(RemoveLoanCommandRequest::new(3)).await.expect_err("unknown loan");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
