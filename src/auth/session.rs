use std::path::PathBuf;

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, warn};

use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

// Session is the bearer token kept between two runs of the binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub matricula: String,
    pub logged_at: NaiveDateTime,
}

impl Session {
    pub fn new(token: &str, matricula: &str) -> Self {
        Self {
            token: token.to_string(),
            matricula: matricula.to_string(),
            logged_at: Utc::now().naive_utc(),
        }
    }
}

// SessionStore keeps the current session as a JSON document in the data directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    // a missing or unreadable file means nobody is logged in
    pub async fn load(&self) -> LibraryResult<Option<Session>> {
        if !fs::try_exists(&self.path).await? {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path).await?;
        match serde_json::from_str::<Session>(&data) {
            Ok(session) if !session.token.trim().is_empty() => Ok(Some(session)),
            Ok(_) => Ok(None),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring corrupt session file");
                Ok(None)
            }
        }
    }

    pub async fn save(&self, session: &Session) -> LibraryResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    // true when there was a session to clear
    pub async fn clear(&self) -> LibraryResult<bool> {
        if !fs::try_exists(&self.path).await? {
            return Ok(false);
        }
        fs::remove_file(&self.path).await?;
        Ok(true)
    }
}

pub async fn current_token(config: &Configuration) -> LibraryResult<Option<String>> {
    let session = SessionStore::new(config.session_file()).load().await?;
    Ok(session.map(|s| s.token))
}
