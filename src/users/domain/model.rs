use std::collections::HashMap;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{Role, UserStatus};
use crate::utils::cpf::digits_only;
use crate::utils::date::opt_serializer;

// Password given to accounts created without one
pub const DEFAULT_PASSWORD: &str = "123456789012";

// UserEntity is an account as the user service stores it. The login credential
// (`matricula`) is the digits of the user's CPF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntity {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub matricula: String,
    #[serde(rename = "dataNascimento", default, with = "opt_serializer")]
    pub birth_date: Option<NaiveDate>,
    // kept as sent by the service, see `UserStatus::from` and `Role::from`
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "tipoDeConta", default)]
    pub role: Option<String>,
}

impl UserEntity {
    pub fn new(name: &str, cpf: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            email: None,
            matricula: digits_only(cpf),
            birth_date: None,
            status: None,
            role: None,
        }
    }

    pub fn matches(&self, predicate: &HashMap<String, String>) -> bool {
        predicate.iter().all(|(k, v)| match k.as_str() {
            "id" => self.id.to_string() == *v,
            "matricula" => self.matricula == digits_only(v),
            "email" => self.email.as_deref() == Some(v.as_str()),
            _ => true,
        })
    }
}

impl Identifiable for UserEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

// UserPayload is the body of create and update calls on the user service.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub nome: String,
    pub email: Option<String>,
    #[serde(with = "opt_serializer")]
    pub data_nascimento: Option<NaiveDate>,
    pub status: String,
    pub matricula: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senha: Option<String>,
    pub tipo_de_conta: String,
}

impl UserPayload {
    // new accounts always carry a password, the default one when none was typed
    pub fn for_create(user: &UserEntity, password: Option<&str>) -> Self {
        Self {
            senha: Some(password.filter(|p| !p.is_empty()).unwrap_or(DEFAULT_PASSWORD).to_string()),
            ..Self::for_update(user, None)
        }
    }

    pub fn for_update(user: &UserEntity, password: Option<&str>) -> Self {
        Self {
            nome: user.name.to_string(),
            email: user.email.clone(),
            data_nascimento: user.birth_date,
            status: user.status.as_ref()
                .map(|s| UserStatus::from(s.to_string()))
                .unwrap_or(UserStatus::Active)
                .to_string(),
            matricula: digits_only(&user.matricula),
            senha: password.filter(|p| !p.is_empty()).map(str::to_string),
            tipo_de_conta: user.role.as_ref()
                .map(|r| Role::from(r.to_string()))
                .unwrap_or(Role::Student)
                .to_string(),
        }
    }
}

// Credentials posted to the login endpoint of the user service.
#[derive(Debug, Serialize)]
pub struct LoginPayload {
    pub matricula: String,
    pub senha: String,
}
