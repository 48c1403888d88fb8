use crate::catalog::factory as catalog_factory;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::dashboard::domain::DashboardService;
use crate::dashboard::domain::service::DashboardServiceImpl;
use crate::loans::factory as loan_factory;

pub async fn create_dashboard_service(config: &Configuration) -> LibraryResult<Box<dyn DashboardService>> {
    let loan_svc = loan_factory::create_loan_service(config).await?;
    let catalog_svc = catalog_factory::create_catalog_service(config).await?;
    Ok(Box::new(DashboardServiceImpl::new(loan_svc, catalog_svc)))
}
