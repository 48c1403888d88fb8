pub mod service;

use async_trait::async_trait;
use crate::auth::session::Session;
use crate::core::library::LibraryResult;
use crate::patrons::dto::UserDto;

#[async_trait]
pub trait AuthService: Sync + Send {
    async fn login(&self, matricula: &str, password: &str) -> LibraryResult<Session>;
    // true when a session was cleared
    async fn logout(&self) -> LibraryResult<bool>;
    async fn me(&self) -> LibraryResult<UserDto>;
}
