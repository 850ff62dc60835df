use std::sync::Arc;

use tickyard_core::{
    HttpClient, MarketIndexService, PredictionClient, ReqwestHttpClient, YahooChartAdapter,
};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub markets: MarketIndexService,
    pub predictions: PredictionClient,
}

impl AppState {
    pub fn new(markets: MarketIndexService, predictions: PredictionClient) -> Self {
        Self {
            markets,
            predictions,
        }
    }

    /// Wires both upstreams over one shared transport.
    pub fn from_config(config: &Config) -> Self {
        let http_client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
        Self::with_http_client(config, http_client)
    }

    pub fn with_http_client(config: &Config, http_client: Arc<dyn HttpClient>) -> Self {
        let charts = YahooChartAdapter::with_http_client(Arc::clone(&http_client))
            .with_base_url(config.yahoo_base_url.as_str())
            .with_timeout_ms(config.upstream_timeout_ms);
        let predictions = PredictionClient::with_http_client(http_client)
            .with_base_url(config.prediction_url.as_str())
            .with_timeout_ms(config.upstream_timeout_ms);

        Self::new(MarketIndexService::new(Arc::new(charts)), predictions)
    }
}
