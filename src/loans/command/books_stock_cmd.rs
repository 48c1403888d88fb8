use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::loans::domain::LoanService;

pub struct BooksStockCommand {
    loan_service: Box<dyn LoanService>,
}

impl BooksStockCommand {
    pub fn new(loan_service: Box<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

// `ignore_loan_id` gives back the copy held by the loan being edited
#[derive(Debug, Default)]
pub struct BooksStockCommandRequest {
    pub ignore_loan_id: Option<i64>,
}

impl BooksStockCommandRequest {
    pub fn new(ignore_loan_id: Option<i64>) -> Self {
        Self {
            ignore_loan_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BooksStockCommandResponse {
    pub books: Vec<BookDto>,
}

impl BooksStockCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<BooksStockCommandRequest, BooksStockCommandResponse> for BooksStockCommand {
    async fn execute(&self, req: BooksStockCommandRequest) -> Result<BooksStockCommandResponse, CommandError> {
        self.loan_service.books_with_stock(req.ignore_loan_id)
            .await.map_err(CommandError::from).map(BooksStockCommandResponse::new)
    }
}
