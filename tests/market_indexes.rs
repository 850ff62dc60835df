//! Behavior tests for market index aggregation.
//!
//! Upstream traffic is served by a scripted transport, so these tests cover
//! the full path: chart adapter, normalizer and aggregator.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use serde_json::json;
use time::macros::datetime;
use time::OffsetDateTime;
use tickyard_core::{
    Country, CoreError, HttpClient, HttpError, HttpRequest, HttpResponse, MarketIndexService,
    Timeframe, ValidationError, YahooChartAdapter,
};

const NOW: OffsetDateTime = datetime!(2024-06-15 00:00:00 UTC);

/// Answers every chart request with a small valid series and records URLs.
#[derive(Default)]
struct ScriptedHttpClient {
    currency: Option<&'static str>,
    urls: Mutex<Vec<String>>,
}

impl ScriptedHttpClient {
    fn without_currency() -> Self {
        Self::default()
    }

    fn with_currency(currency: &'static str) -> Self {
        Self {
            currency: Some(currency),
            ..Self::default()
        }
    }

    fn urls(&self) -> Vec<String> {
        self.urls.lock().expect("url store should not be poisoned").clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.urls
            .lock()
            .expect("url store should not be poisoned")
            .push(request.url);

        let mut meta = json!({ "regularMarketPrice": 110.0, "chartPreviousClose": 98.0 });
        if let Some(currency) = self.currency {
            meta["currency"] = json!(currency);
        }
        let body = json!({
            "chart": {
                "result": [{
                    "meta": meta,
                    "timestamp": [1_715_817_600_i64, 1_715_904_000_i64, 1_715_990_400_i64],
                    "indicators": { "quote": [{ "close": [100.0, null, 108.5] }] }
                }],
                "error": null
            }
        })
        .to_string();

        Box::pin(async move { Ok(HttpResponse::ok_json(body)) })
    }
}

fn service_over(client: Arc<ScriptedHttpClient>) -> MarketIndexService {
    let adapter = YahooChartAdapter::with_http_client(client)
        .with_base_url("https://charts.example.test");
    MarketIndexService::new(Arc::new(adapter))
}

#[tokio::test]
async fn every_supported_pair_returns_one_entry_per_catalog_instrument() {
    let client = Arc::new(ScriptedHttpClient::with_currency("USD"));
    let service = service_over(client);

    for country in Country::ALL {
        for timeframe in Timeframe::ALL {
            let entries = service
                .market_indexes_at(country.as_str(), timeframe.as_str(), NOW)
                .await
                .expect("supported pair must succeed");

            let symbols: Vec<&str> = entries.iter().map(|e| e.symbol.as_str()).collect();
            let catalog: Vec<&str> = country.instruments().iter().map(|i| i.symbol).collect();
            assert_eq!(symbols, catalog, "{country}/{timeframe}");
            assert!(entries.iter().all(|e| e.timeframe == timeframe));
            assert!(entries.iter().all(|e| e.country == country));
        }
    }
}

#[tokio::test]
async fn india_one_month_uses_daily_bars_and_inr_default() {
    let client = Arc::new(ScriptedHttpClient::without_currency());
    let service = service_over(client.clone());

    let entries = service
        .market_indexes_at("in", "1m", NOW)
        .await
        .expect("must succeed");

    assert_eq!(entries.len(), 4);
    for entry in &entries {
        assert_eq!(entry.currency, "INR");
        assert_eq!(entry.timeframe, Timeframe::OneMonth);
        assert!(entry.error.is_none());
        assert_eq!(entry.current_price, Some(110.0));
        assert_eq!(entry.change, Some(10.0));
        assert_eq!(entry.change_percent, Some(10.0));
        assert_eq!(entry.historical_data.len(), 2);
    }

    let urls = client.urls();
    assert_eq!(urls.len(), 4);
    for url in &urls {
        assert!(url.ends_with("&interval=1d"), "unexpected url {url}");
        assert!(url.contains("period1=1715817600&period2=1718409600"));
    }
}

#[tokio::test]
async fn tokens_are_matched_case_insensitively() {
    let client = Arc::new(ScriptedHttpClient::with_currency("USD"));
    let service = service_over(client);

    let entries = service
        .market_indexes_at(" Crypto ", "YTD", NOW)
        .await
        .expect("must succeed");

    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0].symbol, "BTC-USD");
}

#[tokio::test]
async fn unsupported_country_fails_without_network_io() {
    let client = Arc::new(ScriptedHttpClient::with_currency("USD"));
    let service = service_over(client.clone());

    let error = service
        .market_indexes_at("jp", "1m", NOW)
        .await
        .expect_err("unsupported country must fail");

    assert!(matches!(
        error,
        CoreError::Validation(ValidationError::UnsupportedCountry { ref value }) if value == "jp"
    ));
    assert!(client.urls().is_empty());
}

#[tokio::test]
async fn unsupported_timeframe_fails_without_network_io() {
    let client = Arc::new(ScriptedHttpClient::with_currency("USD"));
    let service = service_over(client.clone());

    let error = service
        .market_indexes_at("us", "5y", NOW)
        .await
        .expect_err("unsupported timeframe must fail");

    assert!(matches!(
        error,
        CoreError::Validation(ValidationError::UnsupportedTimeframe { .. })
    ));
    assert!(client.urls().is_empty());
}

#[tokio::test]
async fn one_day_and_all_request_their_fixed_intervals() {
    let client = Arc::new(ScriptedHttpClient::with_currency("USD"));
    let service = service_over(client.clone());

    service.market_indexes_at("us", "1d", NOW).await.expect("1d");
    service.market_indexes_at("us", "1w", NOW).await.expect("1w");
    service.market_indexes_at("us", "all", NOW).await.expect("all");

    let urls = client.urls();
    assert_eq!(urls.len(), 15);
    assert!(urls[..5].iter().all(|url| url.ends_with("interval=5m")));
    assert!(urls[5..10].iter().all(|url| url.ends_with("interval=1h")));
    assert!(urls[10..]
        .iter()
        .all(|url| url.contains("period1=0&") && url.ends_with("interval=1wk")));
}

// Declared assumption: the `ytd` boundary is January 1, 00:00:00 UTC.
#[tokio::test]
async fn ytd_starts_at_utc_new_year() {
    // Given: "now" is mid-June 2024
    let client = Arc::new(ScriptedHttpClient::with_currency("USD"));
    let service = service_over(client.clone());

    // When: the year-to-date listing is requested
    service
        .market_indexes_at("us", "ytd", NOW)
        .await
        .expect("ytd must succeed");

    // Then: every upstream window opens at 2024-01-01T00:00:00Z with daily bars
    let urls = client.urls();
    assert_eq!(urls.len(), 5);
    for url in &urls {
        assert!(
            url.ends_with("?period1=1704067200&period2=1718409600&interval=1d"),
            "unexpected url {url}"
        );
    }
}

/// Serves a long, minute-spaced close series.
struct LongSeriesHttpClient {
    points: i64,
}

impl HttpClient for LongSeriesHttpClient {
    fn execute<'a>(
        &'a self,
        _request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let timestamps: Vec<i64> = (0..self.points).map(|i| 1_700_000_000 + i * 60).collect();
        let closes: Vec<f64> = (0..self.points).map(|i| 1_000.0 + i as f64).collect();
        let body = json!({
            "chart": {
                "result": [{
                    "meta": { "currency": "USD", "regularMarketPrice": 2_000.0 },
                    "timestamp": timestamps,
                    "indicators": { "quote": [{ "close": closes }] }
                }]
            }
        })
        .to_string();

        Box::pin(async move { Ok(HttpResponse::ok_json(body)) })
    }
}

#[tokio::test]
async fn thousand_raw_points_are_bounded_and_end_on_last_sample() {
    // Given: the provider returns 1,000 closes per instrument
    let adapter =
        YahooChartAdapter::with_http_client(Arc::new(LongSeriesHttpClient { points: 1_000 }));
    let service = MarketIndexService::new(Arc::new(adapter));

    // When: a full-history listing is built
    let entries = service
        .market_indexes_at("crypto", "all", NOW)
        .await
        .expect("must succeed");

    // Then: each history is thinned but keeps both endpoints
    let last_raw = 1_700_000_000 + 999 * 60;
    for entry in &entries {
        let history = &entry.historical_data;
        assert!(history.len() <= 101, "{} has {} points", entry.symbol, history.len());
        assert_eq!(history[0].date.unix_timestamp(), 1_700_000_000);
        assert_eq!(history.last().map(|p| p.date.unix_timestamp()), Some(last_raw));
        assert!(history.windows(2).all(|pair| pair[0].date < pair[1].date));
        assert_eq!(entry.change, Some(1_000.0));
        assert_eq!(entry.change_percent, Some(100.0));
    }
}
