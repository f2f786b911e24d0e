//! Frontend configuration

use coursedesk_core::ClientConfig;

/// Browser build settings
pub struct FrontendConfig;

impl FrontendConfig {
    /// localStorage key holding the student identifier, overridable at build
    /// time through `COURSEDESK_SESSION_KEY`
    pub fn session_key() -> &'static str {
        option_env!("COURSEDESK_SESSION_KEY").unwrap_or(ClientConfig::DEFAULT_SESSION_KEY)
    }

    /// Backend base URL, fixed at build time through `COURSEDESK_API_URL`
    pub fn api_url() -> &'static str {
        option_env!("COURSEDESK_API_URL").unwrap_or(ClientConfig::DEFAULT_API_URL)
    }

    pub fn client_config() -> ClientConfig {
        ClientConfig {
            api_url: Self::api_url().to_string(),
            session_key: Self::session_key().to_string(),
            ..ClientConfig::default()
        }
    }
}
