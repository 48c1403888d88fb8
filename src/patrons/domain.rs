pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::patrons::dto::UserDto;

#[async_trait]
pub trait PatronService: Sync + Send {
    async fn list_users(&self) -> LibraryResult<Vec<UserDto>>;
    async fn filter_users(&self, term: &str) -> LibraryResult<Vec<UserDto>>;
    async fn add_user(&self, user: &UserDto, password: Option<&str>) -> LibraryResult<UserDto>;
    async fn update_user(&self, user: &UserDto) -> LibraryResult<UserDto>;
    async fn remove_user(&self, id: i64) -> LibraryResult<()>;
    async fn find_user_by_id(&self, id: i64) -> LibraryResult<UserDto>;
}
