use async_trait::async_trait;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::loans::domain::LoanService;
use crate::loans::dto::LoanDto;

pub struct ReturnLoanCommand {
    loan_service: Box<dyn LoanService>,
}

impl ReturnLoanCommand {
    pub fn new(loan_service: Box<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

#[derive(Debug)]
pub struct ReturnLoanCommandRequest {
    pub loan_id: i64,
}

impl ReturnLoanCommandRequest {
    pub fn new(loan_id: i64) -> Self {
        Self {
            loan_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnLoanCommandResponse {
    pub loan: LoanDto,
}

impl ReturnLoanCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<ReturnLoanCommandRequest, ReturnLoanCommandResponse> for ReturnLoanCommand {
    async fn execute(&self, req: ReturnLoanCommandRequest) -> Result<ReturnLoanCommandResponse, CommandError> {
        self.loan_service.return_loan(req.loan_id)
            .await.map_err(CommandError::from).map(ReturnLoanCommandResponse::new)
    }
}
