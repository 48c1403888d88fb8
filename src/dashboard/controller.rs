use crate::core::command::Command;
use crate::core::controller::{AppState, CliResult};
use crate::core::library::LibraryResult;
use crate::dashboard::command::dashboard_cmd::{DashboardCommand, DashboardCommandRequest};
use crate::dashboard::domain::DashboardService;
use crate::dashboard::dto::{DashboardDto, MONTHS};
use crate::dashboard::factory;
use crate::utils::date::format_display;

async fn build_service(state: &AppState) -> LibraryResult<Box<dyn DashboardService>> {
    factory::create_dashboard_service(&state.config).await
}

fn render_dashboard(stats: &DashboardDto) -> String {
    let mut lines = vec![
        format!("titles:          {}", stats.titles),
        format!("copies:          {}", stats.copies),
        format!("active loans:    {}", stats.active_loans),
        format!("overdue loans:   {}", stats.overdue_loans),
        format!("penalized users: {}", stats.penalized_users),
        String::new(),
        "loans per month:".to_string(),
    ];
    lines.extend(MONTHS.iter().zip(stats.loans_per_month.iter())
        .map(|(month, count)| format!("  {} {:>4}", month, count)));
    lines.push(String::new());
    if stats.recent.is_empty() {
        lines.push("no recent activity".to_string());
    } else {
        lines.push("recent activity:".to_string());
        lines.extend(stats.recent.iter()
            .map(|a| format!("  {:<8} {}  {}", a.kind, format_display(a.date), a.text)));
    }
    lines.join("\n")
}

pub async fn dashboard(state: &AppState) -> CliResult {
    let svc = build_service(state).await?;
    let res = DashboardCommand::new(svc).execute(DashboardCommandRequest::default()).await?;
    Ok(render_dashboard(&res.dashboard))
}
