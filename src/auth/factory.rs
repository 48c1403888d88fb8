use crate::auth::domain::AuthService;
use crate::auth::domain::service::AuthServiceImpl;
use crate::auth::session::SessionStore;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::users::factory;

pub async fn create_auth_service(config: &Configuration) -> LibraryResult<Box<dyn AuthService>> {
    let user_repo = factory::create_user_repository(config).await?;
    Ok(Box::new(AuthServiceImpl::new(user_repo, SessionStore::new(config.session_file()))))
}
