pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::dashboard::dto::DashboardDto;

#[async_trait]
pub trait DashboardService: Sync + Send {
    async fn summary(&self) -> LibraryResult<DashboardDto>;
}
