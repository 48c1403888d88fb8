use async_trait::async_trait;
use tracing::info;
use crate::auth::domain::AuthService;
use crate::auth::session::{Session, SessionStore};
use crate::core::library::{LibraryError, LibraryResult};
use crate::patrons::dto::UserDto;
use crate::users::repository::UserRepository;

pub struct AuthServiceImpl {
    user_repository: Box<dyn UserRepository>,
    session_store: SessionStore,
}

impl AuthServiceImpl {
    pub fn new(user_repository: Box<dyn UserRepository>, session_store: SessionStore) -> Self {
        Self {
            user_repository,
            session_store,
        }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, matricula: &str, password: &str) -> LibraryResult<Session> {
        let matricula = matricula.trim();
        if matricula.is_empty() || password.is_empty() {
            return Err(LibraryError::validation("fill in login and password", None));
        }
        let token = self.user_repository.authenticate(matricula, password).await?;
        let session = Session::new(&token, matricula);
        self.session_store.save(&session).await?;
        info!(matricula, "logged in");
        Ok(session)
    }

    async fn logout(&self) -> LibraryResult<bool> {
        let cleared = self.session_store.clear().await?;
        if cleared {
            info!("logged out");
        }
        Ok(cleared)
    }

    async fn me(&self) -> LibraryResult<UserDto> {
        if self.session_store.load().await?.is_none() {
            return Err(LibraryError::access_denied("not logged in, run `biblio login` first", None));
        }
        self.user_repository.me().await.map(|u| UserDto::from(&u))
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::factory;
    use crate::auth::session::current_token;
    use crate::core::library::LibraryError;
    use crate::utils::fake_backend::FakeBackend;

    #[tokio::test]
    async fn test_should_login_and_load_profile() {
        let backend = FakeBackend::start().await;
        let config = backend.config();
        let _ = backend.add_user("Ana Souza", "529.982.247-25");

        let auth_svc = factory::create_auth_service(&config).await.expect("should build service");
        let session = auth_svc.login(" 52998224725 ", "secret").await.expect("should login");
        assert_eq!("tok-52998224725", session.token.as_str());
        assert_eq!("52998224725", session.matricula.as_str());
        assert_eq!(Some("tok-52998224725".to_string()), current_token(&config).await.unwrap());

        // the token is read when the service is built
        let auth_svc = factory::create_auth_service(&config).await.expect("should build service");
        let me = auth_svc.me().await.expect("should load profile");
        assert_eq!("Ana Souza", me.name.as_str());
        assert_eq!(Some("Bearer tok-52998224725".to_string()), backend.last_authorization());
    }

    #[tokio::test]
    async fn test_should_reject_empty_credentials() {
        let backend = FakeBackend::start().await;
        let auth_svc = factory::create_auth_service(&backend.config()).await.expect("should build service");

        let err = auth_svc.login("", "secret").await.expect_err("should reject");
        assert!(matches!(err, LibraryError::Validation { .. }));
        assert_eq!("fill in login and password", err.message());
        assert!(auth_svc.login("52998224725", "").await.is_err());
    }

    #[tokio::test]
    async fn test_should_keep_no_session_on_failed_login() {
        let backend = FakeBackend::start().await;
        let config = backend.config();
        let auth_svc = factory::create_auth_service(&config).await.expect("should build service");

        let err = auth_svc.login("52998224725", "wrong").await.expect_err("should reject");
        assert!(matches!(err, LibraryError::AccessDenied { .. }));
        assert_eq!(None, current_token(&config).await.unwrap());
        assert!(matches!(auth_svc.me().await, Err(LibraryError::AccessDenied { .. })));
    }

    #[tokio::test]
    async fn test_should_logout() {
        let backend = FakeBackend::start().await;
        let config = backend.config();
        let auth_svc = factory::create_auth_service(&config).await.expect("should build service");

        let _ = auth_svc.login("admin", "bare").await.expect("should login");
        assert_eq!(Some("bare-token".to_string()), current_token(&config).await.unwrap());
        assert!(auth_svc.logout().await.expect("should logout"));
        assert!(!auth_svc.logout().await.expect("should logout twice"));
        assert_eq!(None, current_token(&config).await.unwrap());
    }
}
