use std::collections::HashMap;
use async_trait::async_trait;
use tracing::warn;
use crate::core::library::{LibraryError, LibraryResult};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::UserDto;
use crate::users::domain::model::UserEntity;
use crate::users::repository::UserRepository;
use crate::utils::cpf::validate_cpf;

pub struct PatronServiceImpl {
    user_repository: Box<dyn UserRepository>,
}

impl PatronServiceImpl {
    pub fn new(user_repository: Box<dyn UserRepository>) -> Self {
        PatronServiceImpl {
            user_repository,
        }
    }

    fn validate(user: &UserDto) -> LibraryResult<()> {
        if user.name.trim().is_empty() {
            return Err(LibraryError::validation("the name is required", None));
        }
        if !validate_cpf(&user.cpf) {
            warn!(cpf = user.cpf.as_str(), "rejected invalid cpf");
            return Err(LibraryError::validation("the CPF is invalid", None));
        }
        Ok(())
    }
}

#[async_trait]
impl PatronService for PatronServiceImpl {
    async fn list_users(&self) -> LibraryResult<Vec<UserDto>> {
        let res = self.user_repository.query(&HashMap::new()).await?;
        Ok(res.iter().map(UserDto::from).collect())
    }

    async fn filter_users(&self, term: &str) -> LibraryResult<Vec<UserDto>> {
        let all = self.list_users().await?;
        Ok(all.into_iter().filter(|u| u.matches_term(term)).collect())
    }

    async fn add_user(&self, user: &UserDto, password: Option<&str>) -> LibraryResult<UserDto> {
        Self::validate(user)?;
        self.user_repository.create_with_password(&UserEntity::from(user), password).await
            .map(|u| UserDto::from(&u))
    }

    async fn update_user(&self, user: &UserDto) -> LibraryResult<UserDto> {
        Self::validate(user)?;
        self.user_repository.update(&UserEntity::from(user)).await.map(|u| UserDto::from(&u))
    }

    async fn remove_user(&self, id: i64) -> LibraryResult<()> {
        self.user_repository.delete(id).await.map(|_| ())
    }

    async fn find_user_by_id(&self, id: i64) -> LibraryResult<UserDto> {
        self.user_repository.get(id).await.map(|u| UserDto::from(&u))
    }
}
