use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use crate::chart::ChartPayload;
use crate::data_source::{ChartRequest, ChartSource, SourceError};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient, DEFAULT_TIMEOUT_MS};

pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Yahoo Finance v8 chart adapter.
///
/// The chart endpoint needs no cookie/crumb handshake, so every call is a
/// single unauthenticated GET.
#[derive(Clone)]
pub struct YahooChartAdapter {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl Default for YahooChartAdapter {
    fn default() -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::default()))
    }
}

impl YahooChartAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            base_url: String::from(DEFAULT_YAHOO_BASE_URL),
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

    pub fn chart_url(&self, req: &ChartRequest) -> String {
        let mut url = format!(
            "{}/v8/finance/chart/{}",
            self.base_url,
            urlencoding::encode(req.symbol.as_str())
        );
        if let Some(window) = req.window {
            url.push_str(&format!(
                "?period1={}&period2={}&interval={}",
                window.period1, window.period2, window.interval
            ));
        }
        url
    }

    async fn fetch_chart(&self, req: &ChartRequest) -> Result<ChartPayload, SourceError> {
        let url = self.chart_url(req);
        debug!(symbol = %req.symbol, url = %url, "requesting yahoo chart");

        let request = HttpRequest::get(url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|error| {
            if error.is_invalid_request() {
                SourceError::invalid_request(format!("yahoo request rejected: {}", error.message()))
            } else {
                SourceError::unavailable(format!("yahoo transport error: {}", error.message()))
            }
        })?;

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "yahoo returned status {}",
                response.status
            )));
        }

        let payload = ChartPayload::from_json(&response.body)
            .map_err(|e| SourceError::internal(format!("failed to parse yahoo chart: {}", e)))?;

        if payload.results().is_empty() {
            if let Some(error) = &payload.chart.error {
                return Err(SourceError::unavailable(format!(
                    "yahoo chart API error: {}",
                    error
                )));
            }
        }

        Ok(payload)
    }
}

impl ChartSource for YahooChartAdapter {
    fn chart<'a>(
        &'a self,
        req: ChartRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ChartPayload, SourceError>> + Send + 'a>> {
        Box::pin(async move { self.fetch_chart(&req).await })
    }
}
