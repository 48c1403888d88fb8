use crate::catalog::factory as catalog_factory;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::loans::domain::LoanService;
use crate::loans::domain::service::LoanServiceImpl;
use crate::loans::repository::LoanRepository;
use crate::loans::repository::file_loan_repository::FileLoanRepository;
use crate::patrons::factory as patron_factory;

pub fn create_loan_repository(config: &Configuration) -> Box<dyn LoanRepository> {
    Box::new(FileLoanRepository::new(config.loans_file()))
}

pub async fn create_loan_service(config: &Configuration) -> LibraryResult<Box<dyn LoanService>> {
    let catalog_svc = catalog_factory::create_catalog_service(config).await?;
    let patron_svc = patron_factory::create_patron_service(config).await?;
    Ok(Box::new(LoanServiceImpl::new(config, create_loan_repository(config), catalog_svc, patron_svc)))
}
