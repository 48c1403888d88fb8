pub mod add_book_cmd;
pub mod adjust_stock_cmd;
pub mod import_book_cmd;
pub mod list_books_cmd;
pub mod remove_book_cmd;
pub mod update_book_cmd;
