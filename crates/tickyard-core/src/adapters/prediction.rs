use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::data_source::SourceError;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient, DEFAULT_TIMEOUT_MS};

pub const DEFAULT_PREDICTION_URL: &str = "http://localhost:8000";

/// Passthrough client for the separately hosted price prediction service.
///
/// The response body is returned verbatim; its schema belongs to the model
/// service.
#[derive(Clone)]
pub struct PredictionClient {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::default()))
    }
}

impl PredictionClient {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            base_url: String::from(DEFAULT_PREDICTION_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn predict_url(&self, ticker: &str, timeframe: &str, interval: &str) -> String {
        format!(
            "{}/predict/{}?timeframe={}&interval={}",
            self.base_url,
            urlencoding::encode(ticker.trim()),
            urlencoding::encode(timeframe),
            urlencoding::encode(interval)
        )
    }

    /// The ticker is forwarded as given (trimmed); its vocabulary belongs to
    /// the model service.
    pub async fn predict(
        &self,
        ticker: &str,
        timeframe: &str,
        interval: &str,
    ) -> Result<Value, SourceError> {
        if ticker.trim().is_empty() {
            return Err(SourceError::invalid_request("prediction requires a ticker"));
        }
        if timeframe.trim().is_empty() || interval.trim().is_empty() {
            return Err(SourceError::invalid_request(
                "prediction requires both timeframe and interval",
            ));
        }

        let url = self.predict_url(ticker, timeframe, interval);
        debug!(ticker = ticker.trim(), url = %url, "requesting prediction");

        let request = HttpRequest::get(url)
            .with_header("content-type", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|e| {
            SourceError::unavailable(format!("prediction transport error: {}", e.message()))
        })?;

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "prediction service returned status {}",
                response.status
            )));
        }

        serde_json::from_str(&response.body).map_err(|e| {
            SourceError::internal(format!("failed to parse prediction response: {}", e))
        })
    }
}
