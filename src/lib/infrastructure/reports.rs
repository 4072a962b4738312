//! HTTP client for the daily-reports endpoints of the CubeAI API.
//!
//! Thin boundary client: report generation itself happens in the backend.
//! All three operations carry a bearer token sourced from the environment.

use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::info;

/// Reports API connection details, sourced from the environment.
///
/// A missing `CUBEAI_API_KEY` is a startup failure, before any request.
#[derive(Debug, Clone, Parser)]
pub struct ReportsApiConfig {
    /// Base URL of the CubeAI API
    #[clap(long, env = "CUBEAI_API_URL", default_value = "http://localhost:4000")]
    pub api_url: String,

    /// API key sent as a bearer token
    #[clap(long, env = "CUBEAI_API_KEY", hide_env_values = true)]
    pub api_key: String,
}

/// Errors from the reports API.
///
/// Network-level failures and application-level (non-200) responses are
/// reported distinctly so operators can tell them apart.
#[derive(Debug, Error)]
pub enum ReportsApiError {
    /// The request never completed
    #[error("could not reach the CubeAI API")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-200 status
    #[error("CubeAI API returned {status}: {body}")]
    Api {
        /// HTTP status code of the response
        status: StatusCode,
        /// Response body, verbatim
        body: String,
    },
}

/// Report generation takes minutes across all sessions.
const GENERATE_TIMEOUT: Duration = Duration::from_secs(300);
const TEST_TIMEOUT: Duration = Duration::from_secs(120);
const STATISTICS_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the daily-reports endpoints.
#[derive(Debug, Clone)]
pub struct ReportsClient {
    http: Client,
    config: ReportsApiConfig,
}

impl ReportsClient {
    /// Creates a new client from the given configuration.
    pub fn new(config: ReportsApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Triggers generation and delivery of the daily usage reports.
    ///
    /// Without a date the backend reports on the current day.
    pub async fn generate(&self, date: Option<NaiveDate>) -> Result<Value, ReportsApiError> {
        info!("triggering daily report generation");

        let request = self
            .http
            .post(self.endpoint("/api/reports/generate"))
            .timeout(GENERATE_TIMEOUT)
            .json(&date_payload(date));

        self.execute(request).await
    }

    /// Tests report generation for a single session.
    pub async fn test_session(
        &self,
        session_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Value, ReportsApiError> {
        info!("testing report generation for session {session_id}");

        let request = self
            .http
            .post(self.endpoint(&format!("/api/reports/test/{session_id}")))
            .timeout(TEST_TIMEOUT)
            .json(&date_payload(date));

        self.execute(request).await
    }

    /// Retrieves report statistics over a date range.
    pub async fn statistics(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Value, ReportsApiError> {
        let request = self
            .http
            .get(self.endpoint("/api/reports/statistics"))
            .timeout(STATISTICS_TIMEOUT)
            .query(&[
                ("startDate", start_date.to_string()),
                ("endDate", end_date.to_string()),
            ]);

        self.execute(request).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url.trim_end_matches('/'), path)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Value, ReportsApiError> {
        let response = request
            .bearer_auth(&self.config.api_key)
            .send()
            .await?;

        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();

            return Err(ReportsApiError::Api { status, body });
        }

        Ok(response.json().await?)
    }
}

/// `{"date": "YYYY-MM-DD"}` when a date is given, `{}` otherwise.
fn date_payload(date: Option<NaiveDate>) -> Value {
    match date {
        Some(date) => json!({ "date": date.to_string() }),
        None => json!({}),
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn client(api_url: &str) -> ReportsClient {
        ReportsClient::new(ReportsApiConfig {
            api_url: api_url.to_string(),
            api_key: "test-key".to_string(),
        })
    }

    #[test]
    fn test_endpoint_joins_without_duplicate_slash() {
        let client = client("http://localhost:4000/");

        assert_eq!(
            "http://localhost:4000/api/reports/generate",
            client.endpoint("/api/reports/generate")
        );
    }

    #[test]
    fn test_date_payload_includes_date_only_when_given() -> TestResult {
        let date = NaiveDate::from_ymd_opt(2024, 12, 19).unwrap();

        assert_eq!(json!({ "date": "2024-12-19" }), date_payload(Some(date)));
        assert_eq!(json!({}), date_payload(None));

        Ok(())
    }

    #[test]
    fn test_api_error_carries_status_and_body() {
        let error = ReportsApiError::Api {
            status: StatusCode::UNAUTHORIZED,
            body: "invalid token".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("invalid token"));
    }
}
