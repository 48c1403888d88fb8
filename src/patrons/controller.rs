use crate::core::command::Command;
use crate::core::controller::{AppState, CliResult};
use crate::core::library::LibraryResult;
use crate::patrons::command::add_user_cmd::{AddUserCommand, AddUserCommandRequest};
use crate::patrons::command::list_users_cmd::{ListUsersCommand, ListUsersCommandRequest};
use crate::patrons::command::remove_user_cmd::{RemoveUserCommand, RemoveUserCommandRequest};
use crate::patrons::command::update_user_cmd::{UpdateUserCommand, UpdateUserCommandRequest};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::UserDto;
use crate::patrons::factory;
use crate::utils::date::format_display;

async fn build_service(state: &AppState) -> LibraryResult<Box<dyn PatronService>> {
    factory::create_patron_service(&state.config).await
}

pub(crate) fn render_user(user: &UserDto) -> String {
    format!("{:>4}  {:<30} {:<14} {:<13} {:<8} {:<10} {}",
            user.user_id,
            user.name,
            user.cpf,
            user.role.to_string(),
            user.status.to_string(),
            user.birth_date.map(format_display).unwrap_or_else(|| "-".to_string()),
            user.email.as_deref().unwrap_or("-"))
}

pub async fn list_users(state: &AppState, filter: Option<String>) -> CliResult {
    let svc = build_service(state).await?;
    let res = ListUsersCommand::new(svc).execute(ListUsersCommandRequest::new(filter)).await?;
    if res.users.is_empty() {
        return Ok("no users found".to_string());
    }
    Ok(res.users.iter().map(render_user).collect::<Vec<String>>().join("\n"))
}

pub async fn add_user(state: &AppState, req: AddUserCommandRequest) -> CliResult {
    let svc = build_service(state).await?;
    let res = AddUserCommand::new(svc).execute(req).await?;
    Ok(format!("user added\n{}", render_user(&res.user)))
}

pub async fn update_user(state: &AppState, req: UpdateUserCommandRequest) -> CliResult {
    let svc = build_service(state).await?;
    let res = UpdateUserCommand::new(svc).execute(req).await?;
    Ok(format!("user updated\n{}", render_user(&res.user)))
}

pub async fn remove_user(state: &AppState, user_id: i64) -> CliResult {
    let svc = build_service(state).await?;
    let res = RemoveUserCommand::new(svc).execute(RemoveUserCommandRequest::new(user_id)).await?;
    Ok(format!("user {} removed", res.user_id))
}

#[cfg(test)]
mod tests {
    use crate::core::controller::{AppState, EXIT_USAGE};
    use crate::patrons::command::add_user_cmd::AddUserCommandRequest;
    use crate::patrons::controller;
    use crate::utils::fake_backend::FakeBackend;

    #[tokio::test]
    async fn test_should_render_users() {
        let backend = FakeBackend::start().await;
        let state = AppState::new(backend.config());

        assert_eq!("no users found", controller::list_users(&state, None).await.expect("should list"));
        let out = controller::add_user(&state, AddUserCommandRequest::new("Ana Souza", "52998224725"))
            .await.expect("should add user");
        assert!(out.contains("529.982.247-25"));
        assert!(out.contains("ALUNO"));

        let err = controller::add_user(&state, AddUserCommandRequest::new("Bia", "11111111111"))
            .await.expect_err("invalid cpf");
        assert_eq!(EXIT_USAGE, err.code);
        assert_eq!("the CPF is invalid", err.message.as_str());
    }
}
