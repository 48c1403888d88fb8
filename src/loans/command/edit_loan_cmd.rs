use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;
use crate::loans::domain::LoanService;
use crate::loans::dto::{LoanDto, LoanForm, submitted_status};
use crate::utils::date::parse_date;

pub struct EditLoanCommand {
    loan_service: Box<dyn LoanService>,
}

impl EditLoanCommand {
    pub fn new(loan_service: Box<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

// Fields left as None keep the stored value. A new loan date without a due date
// moves the due date along with it.
#[derive(Debug, Default, Deserialize)]
pub struct EditLoanCommandRequest {
    pub loan_id: i64,
    pub user_id: Option<i64>,
    pub book_id: Option<i64>,
    pub loan_date: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}

impl EditLoanCommandRequest {
    pub fn new(loan_id: i64) -> Self {
        Self {
            loan_id,
            ..Default::default()
        }
    }

    pub fn apply(&self, loan: &LoanDto) -> LibraryResult<LoanForm> {
        let mut form = LoanForm {
            loan_id: Some(loan.loan_id),
            user_id: Some(self.user_id.unwrap_or(loan.user_id)),
            book_id: Some(self.book_id.unwrap_or(loan.book_id)),
            loan_date: Some(loan.loan_date),
            due_date: Some(loan.due_date),
            status: loan.status,
        };
        if let Some(status) = &self.status {
            form.status = submitted_status(status)?;
        }
        if let Some(loan_date) = &self.loan_date {
            form.loan_date = Some(parse_date(loan_date)?);
            form.due_date = None;
        }
        if let Some(due_date) = &self.due_date {
            form.due_date = Some(parse_date(due_date)?);
        }
        Ok(form)
    }
}

#[derive(Debug, Serialize)]
pub struct EditLoanCommandResponse {
    pub loan: LoanDto,
}

impl EditLoanCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<EditLoanCommandRequest, EditLoanCommandResponse> for EditLoanCommand {
    async fn execute(&self, req: EditLoanCommandRequest) -> Result<EditLoanCommandResponse, CommandError> {
        let loan = self.loan_service.find_loan_by_id(req.loan_id).await.map_err(CommandError::from)?;
        let form = req.apply(&loan).map_err(CommandError::from)?;
        self.loan_service.submit_loan(&form)
            .await.map_err(CommandError::from).map(EditLoanCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::core::command::{Command, CommandError};
    use crate::loans::command::edit_loan_cmd::{EditLoanCommand, EditLoanCommandRequest};
    use crate::loans::command::register_loan_cmd::{RegisterLoanCommand, RegisterLoanCommandRequest};
    use crate::loans::factory;
    use crate::utils::fake_backend::FakeBackend;

    #[tokio::test]
    async fn test_should_run_edit_loan() {
        let backend = FakeBackend::start().await;
        let user = backend.add_user("Ana", "52998224725");
        let book = backend.add_book("Iracema", 1);
        let other = backend.add_book("Senhora", 1);
        let config = backend.config();
        let register = RegisterLoanCommand::new(factory::create_loan_service(&config).await.unwrap());
        let loan = register.execute(RegisterLoanCommandRequest::new(user.id, book.id)).await.expect("should register").loan;

        let cmd = EditLoanCommand::new(factory::create_loan_service(&config).await.unwrap());
        let mut req = EditLoanCommandRequest::new(loan.loan_id);
        req.book_id = Some(other.id);
        req.loan_date = Some("2024-02-01".to_string());
        let res = cmd.execute(req).await.expect("should edit loan");
        assert_eq!(loan.loan_id, res.loan.loan_id);
        assert_eq!("Senhora", res.loan.book_title.as_str());
        assert_eq!(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(), res.loan.due_date);

        let mut req = EditLoanCommandRequest::new(loan.loan_id);
        req.status = Some("atrasado".to_string());
        let err = cmd.execute(req).await.expect_err("overdue is not a choosable status");
        assert!(matches!(err, CommandError::Validation { .. }));

        let err = cmd.execute(EditLoanCommandRequest::new(42)).await.expect_err("unknown loan");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
