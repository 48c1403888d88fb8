pub mod service;

use async_trait::async_trait;
use crate::books::domain::StockAdjustment;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    // local filter on title, author or isbn
    async fn filter_books(&self, term: &str) -> LibraryResult<Vec<BookDto>>;
    // search done by the catalog service
    async fn search_books(&self, term: &str) -> LibraryResult<Vec<BookDto>>;
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: i64) -> LibraryResult<()>;
    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Vec<BookDto>>;
    async fn import_book(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn adjust_stock(&self, id: i64, adjustment: StockAdjustment) -> LibraryResult<BookDto>;
}
