use gloo::net::http::Request;
use shared::{CreateExpenseRequest, Expense, InsightsResponse, ParseTextRequest, ParseTextResponse};
use thiserror::Error;

use crate::config::AppConfig;

/// Failures surfaced by [`ApiClient`]. HTTP status codes are never inspected,
/// so a server-side failure only shows up here when its body fails to decode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// API client for communicating with the expense server
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetch every expense, in server order
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        let response = Request::get(&self.endpoint("/api/expense"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json::<Vec<Expense>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Store a new expense. The response body is not read.
    pub async fn create_expense(&self, request: &CreateExpenseRequest) -> Result<(), ApiError> {
        Request::post(&self.endpoint("/api/expense"))
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(())
    }

    /// Ask the server to turn free text into expense fields
    pub async fn parse_text(&self, request: &ParseTextRequest) -> Result<ParseTextResponse, ApiError> {
        let response = Request::post(&self.endpoint("/api/ai/parse-text"))
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json::<ParseTextResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get_insights(&self) -> Result<InsightsResponse, ApiError> {
        let response = Request::get(&self.endpoint("/api/ai/insights"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json::<InsightsResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
