pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::loans::dto::{LoanDto, LoanForm};

#[async_trait]
pub trait LoanService: Sync + Send {
    // registers a new loan, or replaces the one named by `form.loan_id`
    async fn submit_loan(&self, form: &LoanForm) -> LibraryResult<LoanDto>;
    async fn return_loan(&self, id: i64) -> LibraryResult<LoanDto>;
    async fn remove_loan(&self, id: i64) -> LibraryResult<()>;
    async fn find_loan_by_id(&self, id: i64) -> LibraryResult<LoanDto>;
    async fn list_loans(&self, term: Option<&str>) -> LibraryResult<Vec<LoanDto>>;
    // the catalog with `available` computed from open loans, `ignore_loan_id` not counted
    async fn books_with_stock(&self, ignore_loan_id: Option<i64>) -> LibraryResult<Vec<BookDto>>;
}
