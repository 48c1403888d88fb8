use crate::auth::command::login_cmd::{LoginCommand, LoginCommandRequest};
use crate::auth::command::logout_cmd::{LogoutCommand, LogoutCommandRequest};
use crate::auth::command::me_cmd::{MeCommand, MeCommandRequest};
use crate::auth::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, CliResult};
use crate::patrons::controller::render_user;
use crate::patrons::Patron;

pub async fn login(state: &AppState, matricula: &str, password: &str) -> CliResult {
    let svc = factory::create_auth_service(&state.config).await?;
    let res = LoginCommand::new(svc).execute(LoginCommandRequest::new(matricula, password)).await?;
    Ok(format!("logged in as {}", res.session.matricula))
}

pub async fn logout(state: &AppState) -> CliResult {
    let svc = factory::create_auth_service(&state.config).await?;
    let res = LogoutCommand::new(svc).execute(LogoutCommandRequest {}).await?;
    if res.cleared {
        Ok("logged out".to_string())
    } else {
        Ok("no active session".to_string())
    }
}

pub async fn me(state: &AppState) -> CliResult {
    let svc = factory::create_auth_service(&state.config).await?;
    let res = MeCommand::new(svc).execute(MeCommandRequest {}).await?;
    let mut out = render_user(&res.user);
    if !res.user.is_staff() {
        out.push_str("\nnote: this account is not a librarian or admin");
    }
    Ok(out)
}
