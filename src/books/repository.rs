pub mod http_book_repository;

use async_trait::async_trait;
use crate::books::domain::StockAdjustment;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // free-text search done by the catalog service
    async fn search(&self, term: &str) -> LibraryResult<Vec<BookEntity>>;

    // asks the catalog service to create a title from an external ISBN lookup
    async fn import_isbn(&self, isbn: &str) -> LibraryResult<BookEntity>;

    async fn adjust_stock(&self, id: i64, adjustment: StockAdjustment) -> LibraryResult<()>;
}
