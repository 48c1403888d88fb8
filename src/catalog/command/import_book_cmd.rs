use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ImportBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ImportBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImportBookCommandRequest {
    pub isbn: String,
}

impl ImportBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImportBookCommandResponse {
    pub book: BookDto,
}

impl ImportBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<ImportBookCommandRequest, ImportBookCommandResponse> for ImportBookCommand {
    async fn execute(&self, req: ImportBookCommandRequest) -> Result<ImportBookCommandResponse, CommandError> {
        self.catalog_service.import_book(req.isbn.as_str())
            .await.map_err(CommandError::from).map(ImportBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::import_book_cmd::{ImportBookCommand, ImportBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::utils::fake_backend::FakeBackend;

    #[tokio::test]
    async fn test_should_run_import_book() {
        let backend = FakeBackend::start().await;
        let cmd = ImportBookCommand::new(factory::create_catalog_service(&backend.config()).await.unwrap());

        let res = cmd.execute(ImportBookCommandRequest::new("9788535909558")).await.expect("should import");
        assert_eq!("9788535909558", res.book.isbn.as_str());
        let err = cmd.execute(ImportBookCommandRequest::new("0000")).await.expect_err("unknown isbn");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
