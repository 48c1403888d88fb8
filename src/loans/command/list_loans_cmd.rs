use async_trait::async_trait;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::loans::domain::LoanService;
use crate::loans::dto::LoanDto;

pub struct ListLoansCommand {
    loan_service: Box<dyn LoanService>,
}

impl ListLoansCommand {
    pub fn new(loan_service: Box<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListLoansCommandRequest {
    pub filter: Option<String>,
}

impl ListLoansCommandRequest {
    pub fn new(filter: Option<String>) -> Self {
        Self {
            filter,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListLoansCommandResponse {
    pub loans: Vec<LoanDto>,
}

impl ListLoansCommandResponse {
    pub fn new(loans: Vec<LoanDto>) -> Self {
        Self {
            loans,
        }
    }
}

#[async_trait]
impl Command<ListLoansCommandRequest, ListLoansCommandResponse> for ListLoansCommand {
    async fn execute(&self, req: ListLoansCommandRequest) -> Result<ListLoansCommandResponse, CommandError> {
        self.loan_service.list_loans(req.filter.as_deref())
            .await.map_err(CommandError::from).map(ListLoansCommandResponse::new)
    }
}
