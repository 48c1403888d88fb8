use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use crate::core::library::{LibraryError, LibraryResult};

// RestClient wraps the http client shared by the repositories of one backend service.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl RestClient {
    pub fn new(client: Client, base_url: &str, token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            // blank credentials are never sent
            token: token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.get(self.url(path)))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.post(self.url(path)))
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.put(self.url(path)))
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.delete(self.url(path)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    // sends the request and turns any non-2xx answer into an error carrying the backend message
    pub async fn send(&self, request: RequestBuilder, default_message: &str) -> LibraryResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "backend response");
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body, default_message);
        warn!(status = status.as_u16(), message = message.as_str(), "backend rejected request");
        Err(LibraryError::from_status(status.as_u16(), message.as_str()))
    }

    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder, default_message: &str) -> LibraryResult<T> {
        let response = self.send(request, default_message).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(LibraryError::from)
    }
}

// Error bodies: a `message` field wins, then the whole JSON document, then the raw text.
pub fn error_message(body: &str, default_message: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return default_message.to_string();
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => {
            if let Some(Value::String(message)) = map.get("message") {
                if !message.is_empty() {
                    return message.to_string();
                }
            }
            Value::Object(map).to_string()
        }
        Ok(Value::String(message)) if !message.is_empty() => message,
        Ok(Value::Null) => default_message.to_string(),
        Ok(other) => other.to_string(),
        Err(_) => trimmed.to_string(),
    }
}

// helper method to build the http client used by every repository
pub fn build_http_client() -> LibraryResult<Client> {
    Client::builder()
        .user_agent(concat!("biblio-admin/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(LibraryError::from)
}

// logs go to stderr so that command output on stdout stays clean
pub fn setup_tracing(level: &str, json: bool) {
    let max_level = level.parse::<tracing::Level>().unwrap_or(tracing::Level::WARN);
    let builder = tracing_subscriber::fmt()
        .with_max_level(max_level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
