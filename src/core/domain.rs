use std::env;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> i64;
}

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8082";

// Configuration abstracts config options for the admin front-end
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub catalog_url: String,
    pub users_url: String,
    pub data_dir: PathBuf,
    pub max_active_loans: usize,
    pub loan_days: i64,
    pub sync_stock: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl Configuration {
    pub fn new(data_dir: &str) -> Self {
        Configuration {
            catalog_url: DEFAULT_BACKEND_URL.to_string(),
            users_url: DEFAULT_BACKEND_URL.to_string(),
            data_dir: PathBuf::from(data_dir),
            max_active_loans: 5,
            loan_days: 30,
            sync_stock: false,
            log_level: "warn".to_string(),
            log_json: false,
        }
    }

    /// Builds the configuration from `BIBLIO_*` environment variables, values that
    /// are missing or do not parse keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Configuration::new(
            env::var("BIBLIO_DATA_DIR").unwrap_or_else(|_| ".biblio".to_string()).as_str());
        if let Ok(url) = env::var("BIBLIO_CATALOG_URL") {
            config.catalog_url = url;
        }
        if let Ok(url) = env::var("BIBLIO_USERS_URL") {
            config.users_url = url;
        }
        config.max_active_loans = env::var("BIBLIO_MAX_ACTIVE_LOANS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(config.max_active_loans);
        config.loan_days = env::var("BIBLIO_LOAN_DAYS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(config.loan_days);
        config.sync_stock = env::var("BIBLIO_SYNC_STOCK")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(config.sync_stock);
        if let Ok(level) = env::var("BIBLIO_LOG") {
            config.log_level = level;
        }
        config.log_json = env::var("BIBLIO_LOG_JSON")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(config.log_json);
        config
    }

    pub fn with_urls(mut self, catalog_url: Option<String>, users_url: Option<String>) -> Self {
        if let Some(url) = catalog_url {
            self.catalog_url = url;
        }
        if let Some(url) = users_url {
            self.users_url = url;
        }
        self
    }

    pub fn loans_file(&self) -> PathBuf {
        self.data_dir.join("loans.json")
    }

    pub fn session_file(&self) -> PathBuf {
        self.data_dir.join("session.json")
    }
}
