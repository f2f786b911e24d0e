//! Client configuration and fixed user-facing strings

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Connection settings shared by every front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the course backend
    pub api_url: String,
    /// Request timeout in seconds (native clients only)
    pub timeout_secs: u64,
    /// Storage key for the student identifier
    pub session_key: String,
}

impl ClientConfig {
    pub const DEFAULT_API_URL: &'static str = "http://127.0.0.1:5000";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
    pub const DEFAULT_SESSION_KEY: &'static str = "studentId";

    pub fn validate(&self) -> CoreResult<()> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(CoreError::invalid_config("api_url: cannot be empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CoreError::invalid_config(format!(
                "api_url: expected an http(s) URL, got '{url}'"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(CoreError::invalid_config(
                "timeout_secs: must be at least 1 second",
            ));
        }
        if self.session_key.trim().is_empty() {
            return Err(CoreError::invalid_config("session_key: cannot be empty"));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
            session_key: Self::DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

/// Messages shown when the backend gives no explanation or cannot be reached
pub struct Messages;

impl Messages {
    pub const LOGIN_FAILED: &'static str = "Login failed.";
    pub const LOGIN_UNREACHABLE: &'static str = "Server error. Please try again.";
    pub const SIGNUP_FAILED: &'static str = "Signup failed.";
    pub const SIGNUP_UNREACHABLE: &'static str = "Server error. Try again later.";
    pub const ENROLL_FAILED: &'static str = "Enrollment failed.";
    pub const ENROLL_UNREACHABLE: &'static str = "Could not enroll in course.";
    pub const DROP_FAILED: &'static str = "Failed to drop course.";
    pub const DROP_UNREACHABLE: &'static str = "Could not drop course.";
    pub const SESSION_NOT_SAVED: &'static str = "Could not save your session. Please try again.";
    pub const NOT_LOGGED_IN: &'static str = "You are not logged in.";
}
