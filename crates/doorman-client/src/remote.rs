//! HTTP client for the remote login endpoint.
//!
//! The remote side is an opaque collaborator: a single POST to the login
//! path with the request JSON, expecting at least `{success, userId?,
//! message?, user?}` back. Everything beyond those fields is ignored.

use crate::{ClientError, ClientResult};

use doorman_core::LoginRequest;

use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use serde_json::Value;

pub struct RemoteAuth {
    base_url: String,
    login_path: String,
    client: ReqwestClient,
}

/// Response body of the remote login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteLogin {
    pub success: bool,
    #[serde(default, rename = "userId")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    /// Remaining server payload, passed through unexamined.
    #[serde(default)]
    pub user: Option<Value>,
}

impl RemoteLogin {
    /// Identifier assigned by the remote side, wherever it put one.
    /// (`userId` at the top level, or `id` inside the user payload.)
    pub fn remote_id(&self) -> Option<i64> {
        self.user_id.or_else(|| {
            self.user
                .as_ref()
                .and_then(|user| user.get("id"))
                .and_then(Value::as_i64)
        })
    }
}

impl RemoteAuth {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:8000")
    /// * `login_path` - Path the login POST is sent to (e.g., "/api/login")
    pub fn new(base_url: &str, login_path: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            login_path: login_path.to_string(),
            client: ReqwestClient::new(),
        }
    }

    pub fn from_config(config: &doorman_config::ServerConfig) -> Self {
        Self::new(&config.url, &config.login_path)
    }

    /// Issue the single login write.
    ///
    /// Transport errors, non-2xx statuses and unparseable bodies all come
    /// back as `Err`; the caller treats them all as one failure class.
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<RemoteLogin> {
        let url = format!("{}{}", self.base_url, self.login_path);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::remote(format!("Server error: {}", status)));
        }

        let body: RemoteLogin = response.json().await?;
        Ok(body)
    }
}
