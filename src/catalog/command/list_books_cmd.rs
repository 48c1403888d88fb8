use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub enum BookQuery {
    All,
    // filtered locally on title, author or isbn
    Filter(String),
    // searched by the catalog service
    Search(String),
}

#[derive(Debug, Deserialize)]
pub struct ListBooksCommandRequest {
    pub query: BookQuery,
}

impl ListBooksCommandRequest {
    pub fn new(query: BookQuery) -> Self {
        Self {
            query,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let res = match &req.query {
            BookQuery::All => self.catalog_service.list_books().await,
            BookQuery::Filter(term) => self.catalog_service.filter_books(term).await,
            BookQuery::Search(term) => self.catalog_service.search_books(term).await,
        };
        res.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}
