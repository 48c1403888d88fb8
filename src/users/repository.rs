pub mod http_user_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::users::domain::model::UserEntity;


#[async_trait]
pub trait UserRepository: Repository<UserEntity> {
    // creates the account with the given password, or the default one
    async fn create_with_password(&self, entity: &UserEntity, password: Option<&str>) -> LibraryResult<UserEntity>;

    // exchanges credentials for a bearer token
    async fn authenticate(&self, matricula: &str, password: &str) -> LibraryResult<String>;

    // the account behind the current token
    async fn me(&self) -> LibraryResult<UserEntity>;
}
