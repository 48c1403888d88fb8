pub mod books_stock_cmd;
pub mod edit_loan_cmd;
pub mod list_loans_cmd;
pub mod register_loan_cmd;
pub mod remove_loan_cmd;
pub mod return_loan_cmd;
