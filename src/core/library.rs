use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    Gateway {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    AccessDenied {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The backend answered with a server-side failure or could not be reached at all.
    // Nothing in this client retries, the flag only tells the caller whether trying
    // again later could succeed.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn gateway(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Gateway { message: message.to_string(), reason_code, retryable }
    }

    pub fn access_denied(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::AccessDenied { message: message.to_string(), reason_code }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    // maps a non-2xx answer of the backend
    pub fn from_status(status: u16, message: &str) -> LibraryError {
        let reason = Some(status.to_string());
        match status {
            404 => LibraryError::not_found(message),
            401 | 403 => LibraryError::access_denied(message, reason),
            409 => LibraryError::duplicate_key(message),
            400 | 422 => LibraryError::validation(message, reason),
            500..=599 => LibraryError::unavailable(message, reason, true),
            _ => LibraryError::gateway(message, reason, false),
        }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::Gateway { message, .. } => message,
            LibraryError::AccessDenied { message, .. } => message,
            LibraryError::DuplicateKey { message } => message,
            LibraryError::NotFound { message } => message,
            LibraryError::CurrentlyUnavailable { message, .. } => message,
            LibraryError::Validation { message, .. } => message,
            LibraryError::Serialization { message } => message,
            LibraryError::Runtime { message, .. } => message,
        }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::Gateway { retryable, .. } => { *retryable }
            LibraryError::AccessDenied { .. } => { false }
            LibraryError::DuplicateKey { .. } => { false }
            LibraryError::NotFound { .. } => { false }
            LibraryError::CurrentlyUnavailable { retryable, .. } => { *retryable }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("cache io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            LibraryError::from_status(status.as_u16(), format!("{}", err).as_str())
        } else if err.is_decode() {
            LibraryError::serialization(format!("unexpected response body {}", err).as_str())
        } else if err.is_connect() || err.is_timeout() {
            LibraryError::unavailable(format!("backend unreachable {}", err).as_str(),
                                      Some("connect".to_string()), true)
        } else {
            LibraryError::gateway(format!("request failed {}", err).as_str(), None, false)
        }
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Gateway { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::AccessDenied { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for Repository .
pub type LibraryResult<T> = Result<T, LibraryError>;

// LoanStatus is the stored status of a loan. The serialized names match the
// loan history kept by the browser front-end so the same cache file can be shared.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum LoanStatus {
    #[serde(rename = "Ativo")]
    Active,
    #[serde(rename = "Atrasado")]
    Overdue,
    #[serde(rename = "Devolvido")]
    Returned,
}

impl LoanStatus {
    // Active and Overdue loans hold a copy of the book
    pub fn is_open(&self) -> bool {
        matches!(self, LoanStatus::Active | LoanStatus::Overdue)
    }
}

impl From<String> for LoanStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "ativo" | "active" => LoanStatus::Active,
            "atrasado" | "overdue" => LoanStatus::Overdue,
            "devolvido" | "returned" => LoanStatus::Returned,
            _ => LoanStatus::Active,
        }
    }
}

// Strict parse for statuses typed by the librarian, the lenient `From` stays for stored data.
impl TryFrom<&str> for LoanStatus {
    type Error = LibraryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "ativo" | "active" => Ok(LoanStatus::Active),
            "atrasado" | "overdue" => Ok(LoanStatus::Overdue),
            "devolvido" | "returned" => Ok(LoanStatus::Returned),
            _ => Err(LibraryError::validation(format!("unknown loan status {}", s).as_str(), None)),
        }
    }
}

impl Display for LoanStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanStatus::Active => write!(f, "Active"),
            LoanStatus::Overdue => write!(f, "Overdue"),
            LoanStatus::Returned => write!(f, "Returned"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "ALUNO")]
    Student,
    #[serde(rename = "PROFESSOR")]
    Professor,
    #[serde(rename = "BIBLIOTECARIO")]
    Librarian,
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.to_uppercase().as_str() {
            "ADMIN" => Role::Admin,
            "ALUNO" | "STUDENT" => Role::Student,
            "PROFESSOR" | "TEACHER" => Role::Professor,
            "BIBLIOTECARIO" | "LIBRARIAN" => Role::Librarian,
            _ => Role::Student,
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = LibraryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "ALUNO" | "STUDENT" => Ok(Role::Student),
            "PROFESSOR" | "TEACHER" => Ok(Role::Professor),
            "BIBLIOTECARIO" | "LIBRARIAN" => Ok(Role::Librarian),
            _ => Err(LibraryError::validation(format!("unknown role {}", s).as_str(), None)),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::Student => write!(f, "ALUNO"),
            Role::Professor => write!(f, "PROFESSOR"),
            Role::Librarian => write!(f, "BIBLIOTECARIO"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum UserStatus {
    #[serde(rename = "ATIVO")]
    Active,
    #[serde(rename = "INATIVO")]
    Inactive,
    #[serde(rename = "SUSPENSO")]
    Suspended,
}

impl From<String> for UserStatus {
    fn from(s: String) -> Self {
        match s.to_uppercase().as_str() {
            "ATIVO" | "ACTIVE" => UserStatus::Active,
            "INATIVO" | "INACTIVE" => UserStatus::Inactive,
            "SUSPENSO" | "SUSPENDED" => UserStatus::Suspended,
            _ => UserStatus::Active,
        }
    }
}

impl TryFrom<&str> for UserStatus {
    type Error = LibraryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "ATIVO" | "ACTIVE" => Ok(UserStatus::Active),
            "INATIVO" | "INACTIVE" => Ok(UserStatus::Inactive),
            "SUSPENSO" | "SUSPENDED" => Ok(UserStatus::Suspended),
            _ => Err(LibraryError::validation(format!("unknown user status {}", s).as_str(), None)),
        }
    }
}

impl Display for UserStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            UserStatus::Active => write!(f, "ATIVO"),
            UserStatus::Inactive => write!(f, "INATIVO"),
            UserStatus::Suspended => write!(f, "SUSPENSO"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{LibraryError, LoanStatus, Role, UserStatus};

    #[tokio::test]
    async fn test_should_create_gateway_error() {
        assert!(matches!(LibraryError::gateway("test", None, false), LibraryError::Gateway{ message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_access_error() {
        assert!(matches!(LibraryError::access_denied("test", None), LibraryError::AccessDenied{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_duplicate_key_error() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
        assert_eq!("test", LibraryError::validation("test", None).message());
    }

    #[tokio::test]
    async fn test_should_map_http_status() {
        assert!(matches!(LibraryError::from_status(404, "x"), LibraryError::NotFound{ .. }));
        assert!(matches!(LibraryError::from_status(401, "x"), LibraryError::AccessDenied{ .. }));
        assert!(matches!(LibraryError::from_status(403, "x"), LibraryError::AccessDenied{ .. }));
        assert!(matches!(LibraryError::from_status(409, "x"), LibraryError::DuplicateKey{ .. }));
        assert!(matches!(LibraryError::from_status(400, "x"), LibraryError::Validation{ .. }));
        assert!(matches!(LibraryError::from_status(422, "x"), LibraryError::Validation{ .. }));
        assert!(LibraryError::from_status(503, "x").retryable());
        assert!(matches!(LibraryError::from_status(418, "x"), LibraryError::Gateway{ .. }));
        assert!(!LibraryError::from_status(418, "x").retryable());
    }

    #[tokio::test]
    async fn test_should_serialize_loan_status_with_cache_names() {
        assert_eq!("\"Ativo\"", serde_json::to_string(&LoanStatus::Active).unwrap());
        assert_eq!("\"Devolvido\"", serde_json::to_string(&LoanStatus::Returned).unwrap());
        let status: LoanStatus = serde_json::from_str("\"Atrasado\"").unwrap();
        assert_eq!(LoanStatus::Overdue, status);
        assert!(status.is_open());
        assert!(!LoanStatus::Returned.is_open());
    }

    #[tokio::test]
    async fn test_should_format_roles() {
        let roles = vec![
            Role::Admin,
            Role::Student,
            Role::Professor,
            Role::Librarian,
        ];
        for role in roles {
            let str = role.to_string();
            let str_role = Role::from(str);
            assert_eq!(role, str_role);
        }
    }

    #[tokio::test]
    async fn test_should_parse_user_status() {
        assert_eq!(UserStatus::Suspended, UserStatus::from("Suspenso".to_string()));
        assert_eq!(UserStatus::Inactive, UserStatus::from("inativo".to_string()));
        assert_eq!(UserStatus::Active, UserStatus::from("".to_string()));
    }

    #[tokio::test]
    async fn test_should_reject_unknown_typed_values() {
        assert_eq!(LoanStatus::Returned, LoanStatus::try_from("Devolvido").unwrap());
        assert!(matches!(LoanStatus::try_from("devolvdo"), Err(LibraryError::Validation { .. })));
        assert_eq!(Role::Librarian, Role::try_from(" bibliotecario ").unwrap());
        assert!(matches!(Role::try_from("aluna"), Err(LibraryError::Validation { .. })));
        assert_eq!(UserStatus::Inactive, UserStatus::try_from("inactive").unwrap());
        assert_eq!("unknown user status banido", UserStatus::try_from("banido").unwrap_err().message());
    }
}
