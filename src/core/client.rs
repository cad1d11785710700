use std::time::Duration;

use reqwest::{
    header::CONTENT_TYPE,
    Client,
};
use tracing::{
    debug,
    info,
    warn,
};
use url::Url;

use crate::core::{
    config::AppConfig,
    http::{
        ensure_success,
        http_client,
    },
    models::{
        AnalyzeOutcome,
        AnalyzeRequest,
        AnalyzeResponse,
        ErrorPayload,
        WordItem,
        GENERIC_FAILURE,
    },
    CloudError,
};

/// Upper bound for one `GET /health` round trip, independent of the request timeout.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Talks to the remote analysis service. Cheap to clone.
#[derive(Clone, Debug)]
pub struct AnalysisClient {
    http: Client,
    analyze_url: Url,
    health_url: Url,
    health_timeout: Duration,
}

impl AnalysisClient {
    pub fn new(config: &AppConfig) -> Result<Self, CloudError> {
        Ok(Self {
            http: http_client(config.request_timeout)?,
            analyze_url: config.endpoint("analyze")?,
            health_url: config.endpoint("health")?,
            health_timeout: HEALTH_TIMEOUT,
        })
    }

    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }

    pub fn analyze_url(&self) -> &Url {
        &self.analyze_url
    }

    /// Runs one analysis round trip. Never fails: every error becomes
    /// `AnalyzeOutcome::Failure` carrying the message to display.
    pub async fn analyze(&self, url: &str) -> AnalyzeOutcome {
        info!(url, endpoint = %self.analyze_url, "submitting article for analysis");

        match self.request_analysis(url).await {
            Ok(words) => {
                info!(url, count = words.len(), "analysis succeeded");
                AnalyzeOutcome::Success { words }
            }
            Err(AnalysisFailure::Declared(message)) => {
                warn!(url, %message, "analysis service returned an error");
                AnalyzeOutcome::failure(message)
            }
            Err(AnalysisFailure::Transport(error)) => {
                warn!(url, error = %error, "analysis request failed");
                AnalyzeOutcome::from(error)
            }
        }
    }

    async fn request_analysis(&self, url: &str) -> Result<Vec<WordItem>, AnalysisFailure> {
        let resp = self
            .http
            .post(self.analyze_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&AnalyzeRequest { url: url.to_string() })
            .send()
            .await
            .map_err(CloudError::from)?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(CloudError::from)?;

        if !status.is_success() {
            debug!(%status, len = body.len(), "non-success response");
            return Err(AnalysisFailure::Declared(failure_message(&body)));
        }

        Ok(parse_words(&body)?)
    }

    /// `true` when `GET /health` answers with a 2xx `{"status": "ok"}`.
    pub async fn health(&self) -> bool {
        match self.check_health().await {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "backend health check failed");
                false
            }
        }
    }

    async fn check_health(&self) -> Result<(), CloudError> {
        let resp =
            self.http.get(self.health_url.clone()).timeout(self.health_timeout).send().await?;
        ensure_success(&resp)?;

        let status: serde_json::Value = resp.json().await?;
        match status.get("status").and_then(|s| s.as_str()) {
            Some("ok") => Ok(()),
            other => Err(CloudError::InvalidResponse(format!("unexpected health status {other:?}"))),
        }
    }
}

enum AnalysisFailure {
    Declared(String),
    Transport(CloudError),
}

impl From<CloudError> for AnalysisFailure {
    fn from(error: CloudError) -> Self {
        AnalysisFailure::Transport(error)
    }
}

/// Message for a non-2xx body: the `detail` string verbatim, else the generic fallback.
pub fn failure_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorPayload>(body)
        .ok()
        .and_then(|payload| payload.message().map(str::to_string))
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

pub fn parse_words(body: &[u8]) -> Result<Vec<WordItem>, CloudError> {
    let response: AnalyzeResponse = serde_json::from_slice(body)?;
    response.validate()
}
