use crate::services::logging::Logger;

/// Backend address used when `EXPENSE_API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Startup configuration for the client
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Reads the build-time environment, falling back to the defaults
    pub fn from_env() -> Self {
        match option_env!("EXPENSE_API_BASE_URL") {
            Some(base_url) => Self::with_base_url(base_url),
            None => {
                Logger::warn_with_component(
                    "config",
                    &format!("EXPENSE_API_BASE_URL not set, using {}", DEFAULT_API_BASE_URL),
                );
                Self::with_base_url(DEFAULT_API_BASE_URL)
            }
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { api_base_url }
    }
}
