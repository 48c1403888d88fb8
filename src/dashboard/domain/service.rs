use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;
use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryResult;
use crate::dashboard::domain::DashboardService;
use crate::dashboard::dto::DashboardDto;
use crate::loans::domain::LoanService;
use crate::utils::date;

pub struct DashboardServiceImpl {
    today: Option<NaiveDate>,
    loan_service: Box<dyn LoanService>,
    catalog_service: Box<dyn CatalogService>,
}

impl DashboardServiceImpl {
    pub fn new(loan_service: Box<dyn LoanService>, catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            today: None,
            loan_service,
            catalog_service,
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
}

#[async_trait]
impl DashboardService for DashboardServiceImpl {
    async fn summary(&self) -> LibraryResult<DashboardDto> {
        let books = self.catalog_service.list_books().await?;
        let loans = self.loan_service.list_loans(None).await?;
        let today = self.today.unwrap_or_else(date::today);
        debug!(books = books.len(), loans = loans.len(), "computing dashboard");
        Ok(DashboardDto::compute(&books, &loans, today))
    }
}
