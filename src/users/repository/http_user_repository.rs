use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::users::domain::model::{LoginPayload, UserEntity, UserPayload};
use crate::users::repository::UserRepository;
use crate::utils::http::RestClient;

#[derive(Debug)]
pub struct HttpUserRepository {
    client: RestClient,
    resource: String,
    login_path: String,
}

impl HttpUserRepository {
    pub fn new(client: RestClient, resource: &str, login_path: &str) -> Self {
        Self {
            client,
            resource: resource.to_string(),
            login_path: login_path.to_string(),
        }
    }

    fn path(&self, suffix: &str) -> String {
        if suffix.is_empty() {
            self.resource.to_string()
        } else {
            format!("{}/{}", self.resource, suffix)
        }
    }
}

// The login endpoint answers either `{"token": "..."}` or the bare token.
pub(crate) fn parse_token(body: &str) -> LibraryResult<String> {
    let token = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map.get("token").and_then(Value::as_str).map(str::to_string),
        Ok(Value::String(token)) => Some(token),
        Ok(_) => None,
        Err(_) => Some(body.to_string()),
    };
    token.map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| LibraryError::access_denied("the user service returned no valid token", None))
}

#[async_trait]
impl Repository<UserEntity> for HttpUserRepository {
    async fn create(&self, entity: &UserEntity) -> LibraryResult<UserEntity> {
        self.create_with_password(entity, None).await
    }

    async fn update(&self, entity: &UserEntity) -> LibraryResult<UserEntity> {
        let request = self.client.put(&self.path(&entity.id.to_string()))
            .json(&UserPayload::for_update(entity, None));
        let updated: UserEntity = self.client.send_json(request, "failed to update user").await?;
        info!(user_id = updated.id, "user updated");
        Ok(updated)
    }

    // the user service has no lookup by id, the list is small enough to scan
    async fn get(&self, id: i64) -> LibraryResult<UserEntity> {
        let users = self.query(&HashMap::from([("id".to_string(), id.to_string())])).await?;
        users.into_iter().next()
            .ok_or_else(|| LibraryError::not_found(format!("user not found for {}", id).as_str()))
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        let request = self.client.delete(&self.path(&id.to_string()));
        self.client.send(request, "failed to remove user").await?;
        info!(user_id = id, "user removed");
        Ok(1)
    }

    async fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<UserEntity>> {
        let request = self.client.get(&self.path(""));
        let users: Vec<UserEntity> = self.client.send_json(request, "failed to list users").await?;
        Ok(users.into_iter().filter(|u| u.matches(predicate)).collect())
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn create_with_password(&self, entity: &UserEntity, password: Option<&str>) -> LibraryResult<UserEntity> {
        let request = self.client.post(&self.path(""))
            .json(&UserPayload::for_create(entity, password));
        let created: UserEntity = self.client.send_json(request, "failed to add user").await?;
        info!(user_id = created.id, "user added");
        Ok(created)
    }

    async fn authenticate(&self, matricula: &str, password: &str) -> LibraryResult<String> {
        let payload = LoginPayload { matricula: matricula.to_string(), senha: password.to_string() };
        let request = self.client.post(&self.login_path).json(&payload);
        let response = self.client.send(request, "login failed").await?;
        let body = response.text().await?;
        parse_token(&body)
    }

    async fn me(&self) -> LibraryResult<UserEntity> {
        let request = self.client.get(&self.path("me"));
        self.client.send_json(request, "failed to load profile").await
    }
}
