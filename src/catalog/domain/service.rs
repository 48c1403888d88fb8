use std::collections::HashMap;
use async_trait::async_trait;
use tracing::warn;
use crate::books::domain::StockAdjustment;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::library::{LibraryError, LibraryResult};

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }

    fn validate(book: &BookDto) -> LibraryResult<()> {
        if book.title.trim().is_empty() {
            warn!("rejected book without title");
            return Err(LibraryError::validation("the title is required", None));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.query(&HashMap::new()).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn filter_books(&self, term: &str) -> LibraryResult<Vec<BookDto>> {
        let all = self.list_books().await?;
        Ok(all.into_iter().filter(|b| b.matches_term(term.trim())).collect())
    }

    async fn search_books(&self, term: &str) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.search(term.trim()).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        Self::validate(book)?;
        self.book_repository.create(&BookEntity::from(book)).await.map(|b| BookDto::from(&b))
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<()> {
        self.book_repository.delete(id).await.map(|_| ())
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        Self::validate(book)?;
        self.book_repository.update(&BookEntity::from(book)).await.map(|b| BookDto::from(&b))
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.query(
            &HashMap::from([("isbn".to_string(), isbn.trim().to_string())])).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn import_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        if isbn.trim().is_empty() {
            return Err(LibraryError::validation("type an ISBN to import", None));
        }
        self.book_repository.import_isbn(isbn).await.map(|b| BookDto::from(&b))
    }

    async fn adjust_stock(&self, id: i64, adjustment: StockAdjustment) -> LibraryResult<BookDto> {
        self.book_repository.adjust_stock(id, adjustment).await?;
        self.find_book_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::StockAdjustment;
    use crate::books::dto::BookDto;
    use crate::catalog::factory;
    use crate::core::library::LibraryError;
    use crate::utils::fake_backend::FakeBackend;

    #[tokio::test]
    async fn test_should_add_book() {
        let backend = FakeBackend::start().await;
        let catalog_svc = factory::create_catalog_service(&backend.config()).await.expect("should build service");

        let book = BookDto::new("Dom Casmurro", "Machado de Assis", "9788535909558", 2);
        let added = catalog_svc.add_book(&book).await.expect("should add book");

        let loaded = catalog_svc.find_book_by_id(added.book_id).await.expect("should return book");
        assert_eq!(book.title, loaded.title);
        assert_eq!(Some(2024), loaded.published_year);
        assert_eq!(2, loaded.available);
    }

    #[tokio::test]
    async fn test_should_reject_book_without_title() {
        let backend = FakeBackend::start().await;
        let catalog_svc = factory::create_catalog_service(&backend.config()).await.expect("should build service");

        let err = catalog_svc.add_book(&BookDto::new(" ", "Autor", "1", 1)).await.expect_err("should reject");
        assert!(matches!(err, LibraryError::Validation { .. }));
        assert!(backend.books().is_empty());
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let backend = FakeBackend::start().await;
        let catalog_svc = factory::create_catalog_service(&backend.config()).await.expect("should build service");

        let mut book = catalog_svc.add_book(&BookDto::new("Iracema", "Alencar", "333", 1)).await.expect("should add book");
        book.title = "Iracema, lenda do Ceará".to_string();
        book.published_year = Some(1865);
        let _ = catalog_svc.update_book(&book).await.expect("should update book");

        let loaded = catalog_svc.find_book_by_id(book.book_id).await.expect("should return book");
        assert_eq!(book.title, loaded.title);
        assert_eq!(Some(1865), loaded.published_year);
    }

    #[tokio::test]
    async fn test_should_find_by_isbn_and_filter() {
        let backend = FakeBackend::start().await;
        let catalog_svc = factory::create_catalog_service(&backend.config()).await.expect("should build service");

        let _ = catalog_svc.add_book(&BookDto::new("Vidas Secas", "Graciliano Ramos", "981", 1)).await.expect("should add book");
        let _ = catalog_svc.add_book(&BookDto::new("São Bernardo", "Graciliano Ramos", "982", 1)).await.expect("should add book");
        assert_eq!(1, catalog_svc.find_book_by_isbn("981").await.expect("should return book").len());
        assert_eq!(2, catalog_svc.filter_books("graciliano").await.expect("should filter").len());
        assert_eq!(1, catalog_svc.search_books("vidas").await.expect("should search").len());
    }

    #[tokio::test]
    async fn test_should_import_and_adjust_stock() {
        let backend = FakeBackend::start().await;
        let catalog_svc = factory::create_catalog_service(&backend.config()).await.expect("should build service");

        assert!(matches!(catalog_svc.import_book("  ").await, Err(LibraryError::Validation { .. })));
        let imported = catalog_svc.import_book("9788508").await.expect("should import");
        assert_eq!(1, imported.available);

        let book = catalog_svc.adjust_stock(imported.book_id, StockAdjustment::Decrement).await.expect("should decrement");
        assert_eq!(0, book.available);
        let err = catalog_svc.adjust_stock(imported.book_id, StockAdjustment::Decrement).await.expect_err("no stock");
        assert!(matches!(err, LibraryError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let backend = FakeBackend::start().await;
        let catalog_svc = factory::create_catalog_service(&backend.config()).await.expect("should build service");

        let book = catalog_svc.add_book(&BookDto::new("Macunaíma", "Mário de Andrade", "123", 1)).await.expect("should add book");
        let _ = catalog_svc.remove_book(book.book_id).await.expect("should remove book");

        let loaded = catalog_svc.find_book_by_id(book.book_id).await;
        assert!(loaded.is_err());
    }
}
