use async_trait::async_trait;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::dashboard::domain::DashboardService;
use crate::dashboard::dto::DashboardDto;

pub struct DashboardCommand {
    dashboard_service: Box<dyn DashboardService>,
}

impl DashboardCommand {
    pub fn new(dashboard_service: Box<dyn DashboardService>) -> Self {
        Self {
            dashboard_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct DashboardCommandRequest {}

#[derive(Debug, Serialize)]
pub struct DashboardCommandResponse {
    pub dashboard: DashboardDto,
}

impl DashboardCommandResponse {
    pub fn new(dashboard: DashboardDto) -> Self {
        Self {
            dashboard,
        }
    }
}

#[async_trait]
impl Command<DashboardCommandRequest, DashboardCommandResponse> for DashboardCommand {
    async fn execute(&self, _req: DashboardCommandRequest) -> Result<DashboardCommandResponse, CommandError> {
        self.dashboard_service.summary()
            .await.map_err(CommandError::from).map(DashboardCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::dashboard::command::dashboard_cmd::{DashboardCommand, DashboardCommandRequest};
    use crate::dashboard::factory;
    use crate::utils::fake_backend::FakeBackend;

    #[tokio::test]
    async fn test_should_run_dashboard() {
        let backend = FakeBackend::start().await;
        let _ = backend.add_book("Iracema", 3);
        let cmd = DashboardCommand::new(factory::create_dashboard_service(&backend.config()).await.unwrap());
        let res = cmd.execute(DashboardCommandRequest::default()).await.expect("should summarize");
        assert_eq!(1, res.dashboard.titles);
        assert_eq!(3, res.dashboard.copies);
        assert!(res.dashboard.recent.is_empty());
    }
}
