use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryResult, LoanStatus};
use crate::loans::domain::LoanService;
use crate::loans::dto::{LoanDto, LoanForm, submitted_status};
use crate::utils::date::parse_date;

pub struct RegisterLoanCommand {
    loan_service: Box<dyn LoanService>,
}

impl RegisterLoanCommand {
    pub fn new(loan_service: Box<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

// Dates are typed as `yyyy-mm-dd`, a missing loan date means today.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterLoanCommandRequest {
    pub user_id: Option<i64>,
    pub book_id: Option<i64>,
    pub loan_date: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}

impl RegisterLoanCommandRequest {
    pub fn new(user_id: i64, book_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            book_id: Some(book_id),
            ..Default::default()
        }
    }

    pub fn build_form(&self) -> LibraryResult<LoanForm> {
        Ok(LoanForm {
            loan_id: None,
            user_id: self.user_id,
            book_id: self.book_id,
            loan_date: self.loan_date.as_deref().map(parse_date).transpose()?,
            due_date: self.due_date.as_deref().map(parse_date).transpose()?,
            status: match &self.status {
                Some(status) => submitted_status(status)?,
                None => LoanStatus::Active,
            },
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterLoanCommandResponse {
    pub loan: LoanDto,
}

impl RegisterLoanCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<RegisterLoanCommandRequest, RegisterLoanCommandResponse> for RegisterLoanCommand {
    async fn execute(&self, req: RegisterLoanCommandRequest) -> Result<RegisterLoanCommandResponse, CommandError> {
        let form = req.build_form().map_err(CommandError::from)?;
        self.loan_service.submit_loan(&form)
            .await.map_err(CommandError::from).map(RegisterLoanCommandResponse::new)
    }
}
