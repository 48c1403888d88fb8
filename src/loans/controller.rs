use crate::books::dto::BookDto;
use crate::catalog::controller::render_book;
use crate::core::command::Command;
use crate::core::controller::{AppState, CliResult};
use crate::core::library::LibraryResult;
use crate::loans::command::books_stock_cmd::{BooksStockCommand, BooksStockCommandRequest};
use crate::loans::command::edit_loan_cmd::{EditLoanCommand, EditLoanCommandRequest};
use crate::loans::command::list_loans_cmd::{ListLoansCommand, ListLoansCommandRequest};
use crate::loans::command::register_loan_cmd::{RegisterLoanCommand, RegisterLoanCommandRequest};
use crate::loans::command::remove_loan_cmd::{RemoveLoanCommand, RemoveLoanCommandRequest};
use crate::loans::command::return_loan_cmd::{ReturnLoanCommand, ReturnLoanCommandRequest};
use crate::loans::domain::LoanService;
use crate::loans::dto::LoanDto;
use crate::loans::factory;
use crate::utils::date::format_display;

async fn build_service(state: &AppState) -> LibraryResult<Box<dyn LoanService>> {
    factory::create_loan_service(&state.config).await
}

fn render_loan(loan: &LoanDto) -> String {
    format!("{:>4}  {:<25} {:<40} {}  {}  {}",
            loan.loan_id,
            loan.user_name,
            loan.book_title,
            format_display(loan.loan_date),
            format_display(loan.due_date),
            loan.display_status)
}

fn render_loans(loans: &[LoanDto]) -> String {
    if loans.is_empty() {
        return "no loans found".to_string();
    }
    loans.iter().map(render_loan).collect::<Vec<String>>().join("\n")
}

fn render_stock(books: &[BookDto]) -> String {
    if books.is_empty() {
        return "no books found".to_string();
    }
    books.iter().map(render_book).collect::<Vec<String>>().join("\n")
}

pub async fn list_loans(state: &AppState, filter: Option<String>) -> CliResult {
    let svc = build_service(state).await?;
    let res = ListLoansCommand::new(svc).execute(ListLoansCommandRequest::new(filter)).await?;
    Ok(render_loans(&res.loans))
}

pub async fn register_loan(state: &AppState, req: RegisterLoanCommandRequest) -> CliResult {
    let svc = build_service(state).await?;
    let res = RegisterLoanCommand::new(svc).execute(req).await?;
    Ok(format!("loan registered\n{}", render_loan(&res.loan)))
}

pub async fn edit_loan(state: &AppState, req: EditLoanCommandRequest) -> CliResult {
    let svc = build_service(state).await?;
    let res = EditLoanCommand::new(svc).execute(req).await?;
    Ok(format!("loan updated\n{}", render_loan(&res.loan)))
}

pub async fn return_loan(state: &AppState, loan_id: i64) -> CliResult {
    let svc = build_service(state).await?;
    let res = ReturnLoanCommand::new(svc).execute(ReturnLoanCommandRequest::new(loan_id)).await?;
    Ok(format!("loan returned\n{}", render_loan(&res.loan)))
}

pub async fn remove_loan(state: &AppState, loan_id: i64) -> CliResult {
    let svc = build_service(state).await?;
    let res = RemoveLoanCommand::new(svc).execute(RemoveLoanCommandRequest::new(loan_id)).await?;
    Ok(format!("loan {} removed", res.loan_id))
}

pub async fn books_stock(state: &AppState, ignore_loan_id: Option<i64>) -> CliResult {
    let svc = build_service(state).await?;
    let res = BooksStockCommand::new(svc).execute(BooksStockCommandRequest::new(ignore_loan_id)).await?;
    Ok(render_stock(&res.books))
}
