use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Fields left as None keep the value stored by the catalog service.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBookCommandRequest {
    pub book_id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub quantity: Option<i64>,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
            ..Default::default()
        }
    }

    pub fn apply(&self, book: &mut BookDto) {
        if let Some(title) = &self.title {
            book.title = title.trim().to_string();
        }
        if let Some(author) = &self.author {
            book.author = author.trim().to_string();
        }
        if let Some(isbn) = &self.isbn {
            book.isbn = isbn.trim().to_string();
        }
        if let Some(year) = self.published_year {
            book.published_year = Some(year);
        }
        if let Some(quantity) = self.quantity {
            book.quantity = quantity.max(1);
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let mut book = self.catalog_service.find_book_by_id(req.book_id).await.map_err(CommandError::from)?;
        req.apply(&mut book);
        self.catalog_service.update_book(&book).await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
