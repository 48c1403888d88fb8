use crate::auth::session::current_token;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::users::repository::UserRepository;
use crate::users::repository::http_user_repository::HttpUserRepository;
use crate::utils::http::{build_http_client, RestClient};

pub async fn create_user_repository(config: &Configuration) -> LibraryResult<Box<dyn UserRepository>> {
    let token = current_token(config).await?;
    let client = RestClient::new(build_http_client()?, config.users_url.as_str(), token);
    Ok(Box::new(HttpUserRepository::new(client, "usuarios", "auth/login")))
}
