//! Client configuration and initialization

use crate::config::FrontendConfig;
pub use coursedesk_http::ClientError;
use coursedesk_http::CourseClient;
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Global client instance
static COURSE_CLIENT: Lazy<Mutex<Option<CourseClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the shared course backend client, building it on first use
pub fn create_course_client() -> Result<CourseClient, ClientError> {
    let mut client_lock = COURSE_CLIENT
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = CourseClient::from_config(&FrontendConfig::client_config())?;
    *client_lock = Some(client.clone());
    Ok(client)
}
