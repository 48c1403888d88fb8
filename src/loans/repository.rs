pub mod file_loan_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::loans::domain::model::LoanEntity;


#[async_trait]
pub trait LoanRepository: Repository<LoanEntity> {
    // every loan in insertion order
    async fn list(&self) -> LibraryResult<Vec<LoanEntity>>;
}
