//! Typed client for the course backend

use super::ClientError;
use coursedesk_core::ClientConfig;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("coursedesk-client/", env!("CARGO_PKG_VERSION"));

/// Client for the course backend. None of its endpoints take credentials;
/// requests are scoped by the student id in the path.
#[derive(Clone)]
pub struct CourseClient {
    client: Client,
    base_url: String,
}

impl CourseClient {
    /// Create a new client with no request timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, None)
    }

    /// Create a client from shared configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let builder = Self::builder().base_url(&config.api_url);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        builder.build()
    }

    pub fn builder() -> CourseClientBuilder {
        CourseClientBuilder::default()
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base_url is required".into()));
        }

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = timeout; // Timeouts not supported on WASM
            ClientBuilder::new().user_agent(USER_AGENT).build()?
        };

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder for a path under the base URL
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request, treating any non-2xx status as an error
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, error_message(&body, status)))
        }
    }

    /// Execute a request whose answer is a `{success, message}` envelope.
    ///
    /// The backend reports business failures with a 4xx status and an
    /// envelope body, so the body is decoded whatever the status. Only a
    /// body that does not decode is turned into an error.
    pub async fn execute_envelope<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str(&body) {
            Ok(envelope) => {
                if !status.is_success() {
                    debug!("Backend answered {status} with an envelope");
                }
                Ok(envelope)
            }
            Err(e) if status.is_success() => Err(ClientError::Serialization(e)),
            Err(_) => Err(ClientError::from_status(status, error_message(&body, status))),
        }
    }
}

/// Pull `message` out of a JSON error body, else use the raw text
fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string));

    match from_json {
        Some(message) => message,
        None if body.trim().is_empty() => status.to_string(),
        None => body.to_string(),
    }
}

/// Builder for [`CourseClient`]
#[derive(Default)]
pub struct CourseClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl CourseClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<CourseClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        CourseClient::new_with_timeout(base_url, self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_error_message_prefers_envelope() {
        assert_eq!(
            error_message(
                r#"{"success": false, "message": "Student not found"}"#,
                StatusCode::NOT_FOUND
            ),
            "Student not found"
        );
        assert_eq!(
            error_message("<h1>Oops</h1>", StatusCode::INTERNAL_SERVER_ERROR),
            "<h1>Oops</h1>"
        );
        assert_eq!(
            error_message("", StatusCode::BAD_GATEWAY),
            "502 Bad Gateway"
        );
    }
}
