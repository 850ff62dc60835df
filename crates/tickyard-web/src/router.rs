use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, hotdata, prediction};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let hotdata_routes = Router::new()
        .route("/indexes", get(hotdata::list_indexes))
        .route("/indexes/:symbol", get(hotdata::get_index))
        .route("/stocks/:symbol", get(hotdata::get_stock));

    let prediction_routes = Router::new().route("/:ticker", get(prediction::predict));

    Router::new()
        .route("/", get(health::root))
        .nest("/api/hotdata", hotdata_routes)
        .nest("/api/prediction", prediction_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::{Arc, Mutex};
    use tickyard_core::{HttpClient, HttpError, HttpRequest, HttpResponse};
    use tower::ServiceExt;

    /// Answers chart and prediction URLs from fixed bodies.
    #[derive(Default)]
    struct StubUpstream {
        failing_chart: Option<&'static str>,
        prediction_down: bool,
        urls: Mutex<Vec<String>>,
    }

    impl HttpClient for StubUpstream {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            let url = request.url;
            self.urls.lock().expect("url store").push(url.clone());

            let response = if url.contains("/predict/") {
                if self.prediction_down {
                    Err(HttpError::new("connection refused"))
                } else {
                    Ok(HttpResponse::ok_json(r#"{"ticker":"AAPL","forecast":[1.0,2.0]}"#))
                }
            } else if self.failing_chart.is_some_and(|symbol| url.contains(symbol)) {
                Ok(HttpResponse::with_status(500, "boom"))
            } else {
                Ok(HttpResponse::ok_json(
                    json!({
                        "chart": { "result": [{
                            "meta": {
                                "symbol": "AAPL",
                                "shortName": "Apple Inc.",
                                "exchangeName": "NMS",
                                "currency": "USD",
                                "regularMarketPrice": 103.456,
                                "previousClose": 100.0
                            },
                            "timestamp": [1718000000, 1718086400],
                            "indicators": { "quote": [{ "close": [100.0, 101.0] }] }
                        }]}
                    })
                    .to_string(),
                ))
            };

            Box::pin(async move { response })
        }
    }

    fn app(upstream: Arc<StubUpstream>) -> Router {
        create_router(AppState::with_http_client(&Config::default(), upstream))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn root_reports_running() {
        let (status, body) = get_json(app(Arc::default()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "API is running" }));
    }

    #[tokio::test]
    async fn indexes_default_to_us_one_month() {
        let (status, body) = get_json(app(Arc::default()), "/api/hotdata/indexes").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["country"], "us");
        assert_eq!(body["timeframe"], "1m");
        let indexes = body["indexes"].as_array().expect("array");
        assert_eq!(indexes.len(), 5);
        assert_eq!(indexes[0]["symbol"], "^GSPC");
        assert_eq!(indexes[0]["historicalData"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn simple_format_rounds_change_percent() {
        let (status, body) = get_json(
            app(Arc::default()),
            "/api/hotdata/indexes?country=crypto&timeframe=1w&format=simple",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let first = &body["indexes"][0];
        assert_eq!(first["symbol"], "BTC-USD");
        assert_eq!(first["changePercent"], 3.46);
        assert!(first.get("historicalData").is_none());
    }

    #[tokio::test]
    async fn invalid_tokens_are_bad_requests_without_upstream_calls() {
        let upstream = Arc::new(StubUpstream::default());

        let (status, body) =
            get_json(app(upstream.clone()), "/api/hotdata/indexes?country=jp").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);

        let (status, _) =
            get_json(app(upstream.clone()), "/api/hotdata/indexes?timeframe=10y").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get_json(app(upstream.clone()), "/api/hotdata/indexes?format=csv").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert!(upstream.urls.lock().expect("url store").is_empty());
    }

    #[tokio::test]
    async fn failed_instrument_is_reported_inline() {
        let upstream = Arc::new(StubUpstream {
            failing_chart: Some("%5ENSEI"),
            ..StubUpstream::default()
        });

        let (status, body) = get_json(app(upstream), "/api/hotdata/indexes?country=in").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["indexes"][0]["symbol"], "^NSEI");
        assert_eq!(body["indexes"][0]["error"], "Failed to fetch data");
        assert!(body["indexes"][1].get("error").is_none());
    }

    #[tokio::test]
    async fn single_index_infers_country_from_symbol() {
        let (status, body) =
            get_json(app(Arc::default()), "/api/hotdata/indexes/%5ENSEBANK").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["index"]["symbol"], "^NSEBANK");
        assert_eq!(body["index"]["country"], "in");
    }

    #[tokio::test]
    async fn unrecognised_country_falls_back_to_inferred_market() {
        let upstream = Arc::new(StubUpstream::default());

        let (status, body) = get_json(
            app(upstream.clone()),
            "/api/hotdata/indexes/%5ENSEI?country=uk",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["index"]["symbol"], "^NSEI");
        assert_eq!(body["index"]["country"], "in");
        assert_eq!(upstream.urls.lock().expect("url store").len(), 4);
    }

    #[tokio::test]
    async fn single_index_matches_display_name() {
        let (status, body) = get_json(
            app(Arc::default()),
            "/api/hotdata/indexes/bitcoin?country=crypto&timeframe=1d",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["index"]["symbol"], "BTC-USD");
        assert_eq!(body["index"]["timeframe"], "1d");
    }

    #[tokio::test]
    async fn unknown_index_is_not_found() {
        let (status, body) = get_json(app(Arc::default()), "/api/hotdata/indexes/FTSE").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "success": false, "message": "Index not found: FTSE" }));
    }

    #[tokio::test]
    async fn stock_snapshot_and_upstream_failure() {
        let (status, body) = get_json(app(Arc::default()), "/api/hotdata/stocks/aapl").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Apple Inc.");
        assert_eq!(body["data"]["country"], "US");

        let upstream = Arc::new(StubUpstream {
            failing_chart: Some("/MSFT"),
            ..StubUpstream::default()
        });
        let (status, body) = get_json(app(upstream), "/api/hotdata/stocks/MSFT").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn prediction_requires_both_parameters() {
        let upstream = Arc::new(StubUpstream::default());

        let (status, body) =
            get_json(app(upstream.clone()), "/api/prediction/AAPL?timeframe=1m").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "Missing timeframe or interval query parameters" })
        );
        assert!(upstream.urls.lock().expect("url store").is_empty());
    }

    #[tokio::test]
    async fn prediction_is_passed_through() {
        let upstream = Arc::new(StubUpstream::default());

        let (status, body) = get_json(
            app(upstream.clone()),
            "/api/prediction/AAPL?timeframe=1m&interval=1d",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ticker": "AAPL", "forecast": [1.0, 2.0] }));
        let urls = upstream.urls.lock().expect("url store").clone();
        assert_eq!(
            urls,
            ["http://localhost:8000/predict/AAPL?timeframe=1m&interval=1d"]
        );
    }

    #[tokio::test]
    async fn prediction_ticker_is_forwarded_unchanged() {
        let upstream = Arc::new(StubUpstream::default());

        let (status, _) = get_json(
            app(upstream.clone()),
            "/api/prediction/reliance.ns?timeframe=1m&interval=1d",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let urls = upstream.urls.lock().expect("url store").clone();
        assert_eq!(
            urls,
            ["http://localhost:8000/predict/reliance.ns?timeframe=1m&interval=1d"]
        );
    }

    #[tokio::test]
    async fn prediction_failure_is_generic_500() {
        let upstream = Arc::new(StubUpstream {
            prediction_down: true,
            ..StubUpstream::default()
        });

        let (status, body) = get_json(
            app(upstream),
            "/api/prediction/AAPL?timeframe=1m&interval=1d",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch prediction" }));
    }
}
