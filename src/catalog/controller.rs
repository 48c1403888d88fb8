use crate::books::domain::StockAdjustment;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::adjust_stock_cmd::{AdjustStockCommand, AdjustStockCommandRequest};
use crate::catalog::command::import_book_cmd::{ImportBookCommand, ImportBookCommandRequest};
use crate::catalog::command::list_books_cmd::{BookQuery, ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, CliResult};
use crate::core::library::LibraryResult;

async fn build_service(state: &AppState) -> LibraryResult<Box<dyn CatalogService>> {
    factory::create_catalog_service(&state.config).await
}

pub(crate) fn render_book(book: &BookDto) -> String {
    format!("{:>4}  {:<40} {:<25} {:<15} {:>4}  {}/{}",
            book.book_id,
            book.title,
            book.author,
            book.isbn,
            book.published_year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string()),
            book.available,
            book.quantity)
}

fn render_books(books: &[BookDto]) -> String {
    if books.is_empty() {
        return "no books found".to_string();
    }
    books.iter().map(render_book).collect::<Vec<String>>().join("\n")
}

pub async fn list_books(state: &AppState, filter: Option<String>) -> CliResult {
    let query = match filter {
        Some(term) => BookQuery::Filter(term),
        None => BookQuery::All,
    };
    let svc = build_service(state).await?;
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::new(query)).await?;
    Ok(render_books(&res.books))
}

pub async fn search_books(state: &AppState, term: &str) -> CliResult {
    let svc = build_service(state).await?;
    let res = ListBooksCommand::new(svc)
        .execute(ListBooksCommandRequest::new(BookQuery::Search(term.to_string()))).await?;
    Ok(render_books(&res.books))
}

pub async fn add_book(state: &AppState, req: AddBookCommandRequest) -> CliResult {
    let svc = build_service(state).await?;
    let res = AddBookCommand::new(svc).execute(req).await?;
    Ok(format!("book added\n{}", render_book(&res.book)))
}

pub async fn update_book(state: &AppState, req: UpdateBookCommandRequest) -> CliResult {
    let svc = build_service(state).await?;
    let res = UpdateBookCommand::new(svc).execute(req).await?;
    Ok(format!("book updated\n{}", render_book(&res.book)))
}

pub async fn remove_book(state: &AppState, book_id: i64) -> CliResult {
    let svc = build_service(state).await?;
    let res = RemoveBookCommand::new(svc).execute(RemoveBookCommandRequest::new(book_id)).await?;
    Ok(format!("book {} removed", res.book_id))
}

pub async fn import_book(state: &AppState, isbn: &str) -> CliResult {
    let svc = build_service(state).await?;
    let res = ImportBookCommand::new(svc).execute(ImportBookCommandRequest::new(isbn)).await?;
    Ok(format!("book imported\n{}", render_book(&res.book)))
}

pub async fn adjust_stock(state: &AppState, book_id: i64, adjustment: StockAdjustment) -> CliResult {
    let svc = build_service(state).await?;
    let res = AdjustStockCommand::new(svc).execute(AdjustStockCommandRequest::new(book_id, adjustment)).await?;
    Ok(format!("stock updated\n{}", render_book(&res.book)))
}
