use std::collections::HashMap;

use async_trait::async_trait;
use tracing::info;

use crate::books::domain::StockAdjustment;
use crate::books::domain::model::{BookEntity, BookPayload};
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::http::RestClient;

#[derive(Debug)]
pub struct HttpBookRepository {
    client: RestClient,
    resource: String,
}

impl HttpBookRepository {
    pub fn new(client: RestClient, resource: &str) -> Self {
        Self {
            client,
            resource: resource.to_string(),
        }
    }

    fn path(&self, suffix: &str) -> String {
        if suffix.is_empty() {
            self.resource.to_string()
        } else {
            format!("{}/{}", self.resource, suffix)
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for HttpBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let request = self.client.post(&self.path("")).json(&BookPayload::for_create(entity));
        let created: BookEntity = self.client.send_json(request, "failed to add book").await?;
        info!(book_id = created.id, isbn = created.isbn.as_str(), "book added");
        Ok(created)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let request = self.client.put(&self.path(&entity.id.to_string()))
            .json(&BookPayload::for_update(entity));
        let updated: BookEntity = self.client.send_json(request, "failed to update book").await?;
        info!(book_id = updated.id, "book updated");
        Ok(updated)
    }

    // the catalog service has no lookup by id, the list is small enough to scan
    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        let books = self.query(&HashMap::from([("id".to_string(), id.to_string())])).await?;
        books.into_iter().next()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        let request = self.client.delete(&self.path(&id.to_string()));
        self.client.send(request, "failed to remove book").await?;
        info!(book_id = id, "book removed");
        Ok(1)
    }

    async fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<BookEntity>> {
        let request = self.client.get(&self.path(""));
        let books: Vec<BookEntity> = self.client.send_json(request, "failed to list books").await?;
        Ok(books.into_iter().filter(|b| b.matches(predicate)).collect())
    }
}

#[async_trait]
impl BookRepository for HttpBookRepository {
    async fn search(&self, term: &str) -> LibraryResult<Vec<BookEntity>> {
        let request = self.client.post(&self.path("buscar"))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(term.to_string());
        self.client.send_json(request, "failed to search books").await
    }

    async fn import_isbn(&self, isbn: &str) -> LibraryResult<BookEntity> {
        let request = self.client.post(&self.path(&format!("importar/{}", isbn.trim())));
        let imported: BookEntity = self.client.send_json(request, "failed to import isbn").await?;
        info!(book_id = imported.id, isbn = imported.isbn.as_str(), "book imported");
        Ok(imported)
    }

    async fn adjust_stock(&self, id: i64, adjustment: StockAdjustment) -> LibraryResult<()> {
        let op = match adjustment {
            StockAdjustment::Increment => "incrementar",
            StockAdjustment::Decrement => "decrementar",
        };
        let request = self.client.put(&self.path(&format!("{}/estoque/{}", id, op)));
        self.client.send(request, "failed to update stock").await?;
        info!(book_id = id, op, "stock adjusted");
        Ok(())
    }
}
