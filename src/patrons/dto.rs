use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{Role, UserStatus};
use crate::patrons::Patron;
use crate::users::domain::model::UserEntity;
use crate::utils::cpf::{digits_only, mask_cpf};

// UserDto is a library member as the admin front-end shows it, the CPF always masked.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub user_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub cpf: String,
    pub birth_date: Option<NaiveDate>,
    pub status: UserStatus,
    pub role: Role,
}

impl UserDto {
    pub fn new(name: &str, cpf: &str) -> Self {
        Self {
            user_id: 0,
            name: name.to_string(),
            email: None,
            cpf: mask_cpf(cpf),
            birth_date: None,
            status: UserStatus::Active,
            role: Role::Student,
        }
    }

    // case-insensitive on name and email, substring on the CPF with or without mask
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return true;
        }
        let lower = term.to_lowercase();
        let digits = digits_only(term);
        self.name.to_lowercase().contains(&lower) ||
            self.email.as_ref().map(|e| e.to_lowercase().contains(&lower)).unwrap_or(false) ||
            self.cpf.contains(term) ||
            (!digits.is_empty() && digits_only(&self.cpf).contains(&digits))
    }
}

impl Identifiable for UserDto {
    fn id(&self) -> i64 {
        self.user_id
    }
}

impl Patron for UserDto {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn is_role(&self, match_role: Role) -> bool {
        self.role == match_role
    }
}

impl From<&UserEntity> for UserDto {
    fn from(other: &UserEntity) -> Self {
        Self {
            user_id: other.id,
            name: other.name.to_string(),
            email: other.email.clone(),
            cpf: mask_cpf(&other.matricula),
            birth_date: other.birth_date,
            status: other.status.as_ref().map(|s| UserStatus::from(s.to_string())).unwrap_or(UserStatus::Active),
            role: other.role.as_ref().map(|r| Role::from(r.to_string())).unwrap_or(Role::Student),
        }
    }
}

impl From<&UserDto> for UserEntity {
    fn from(other: &UserDto) -> Self {
        Self {
            id: other.user_id,
            name: other.name.to_string(),
            email: other.email.clone().filter(|e| !e.trim().is_empty()),
            matricula: digits_only(&other.cpf),
            birth_date: other.birth_date,
            status: Some(other.status.to_string()),
            role: Some(other.role.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{Role, UserStatus};
    use crate::patrons::Patron;
    use crate::patrons::dto::UserDto;
    use crate::users::domain::model::UserEntity;

    #[tokio::test]
    async fn test_should_build_user() {
        let user = UserDto::new("Ana Souza", "52998224725");
        assert_eq!("529.982.247-25", user.cpf.as_str());
        assert_eq!(UserStatus::Active, user.status);
        assert!(!user.is_staff());
    }

    #[tokio::test]
    async fn test_should_match_filter_term() {
        let mut user = UserDto::new("Ana Souza", "529.982.247-25");
        user.email = Some("Ana@Example.com".to_string());
        assert!(user.matches_term(""));
        assert!(user.matches_term("souza"));
        assert!(user.matches_term("example"));
        assert!(user.matches_term("982.247"));
        assert!(user.matches_term("982247"));
        assert!(!user.matches_term("bia"));
    }

    #[tokio::test]
    async fn test_should_convert_backend_user() {
        let mut entity = UserEntity::new("Bia", "111.444.777-35");
        entity.id = 9;
        entity.role = Some("bibliotecario".to_string());
        entity.status = Some("suspenso".to_string());
        let user = UserDto::from(&entity);
        assert_eq!(9, user.user_id);
        assert_eq!("111.444.777-35", user.cpf.as_str());
        assert_eq!(Role::Librarian, user.role);
        assert_eq!(UserStatus::Suspended, user.status);
        assert!(user.is_staff());

        let back = UserEntity::from(&user);
        assert_eq!("11144477735", back.matricula.as_str());
        assert_eq!(Some("BIBLIOTECARIO".to_string()), back.role);
        assert_eq!(Some("SUSPENSO".to_string()), back.status);
    }
}
