use async_trait::async_trait;
use serde::Serialize;
use crate::books::domain::StockAdjustment;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AdjustStockCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AdjustStockCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct AdjustStockCommandRequest {
    pub book_id: i64,
    pub adjustment: StockAdjustment,
}

impl AdjustStockCommandRequest {
    pub fn new(book_id: i64, adjustment: StockAdjustment) -> Self {
        Self {
            book_id,
            adjustment,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdjustStockCommandResponse {
    pub book: BookDto,
}

impl AdjustStockCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AdjustStockCommandRequest, AdjustStockCommandResponse> for AdjustStockCommand {
    async fn execute(&self, req: AdjustStockCommandRequest) -> Result<AdjustStockCommandResponse, CommandError> {
        self.catalog_service.adjust_stock(req.book_id, req.adjustment)
            .await.map_err(CommandError::from).map(AdjustStockCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::StockAdjustment;
    use crate::catalog::command::adjust_stock_cmd::{AdjustStockCommand, AdjustStockCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::utils::fake_backend::FakeBackend;

    #[tokio::test]
    async fn test_should_run_adjust_stock() {
        let backend = FakeBackend::start().await;
        let book = backend.add_book("Iracema", 3);
        let cmd = AdjustStockCommand::new(factory::create_catalog_service(&backend.config()).await.unwrap());

        let res = cmd.execute(AdjustStockCommandRequest::new(book.id, StockAdjustment::Decrement))
            .await.expect("should decrement");
        assert_eq!(2, res.book.available);
        assert_eq!(3, res.book.quantity);
    }
}
