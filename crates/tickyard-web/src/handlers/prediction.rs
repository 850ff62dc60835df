use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PredictionQuery {
    pub timeframe: Option<String>,
    pub interval: Option<String>,
}

/// Forwards to the prediction service and returns its body untouched.
pub async fn predict(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    Query(query): Query<PredictionQuery>,
) -> Result<Json<Value>, ApiError> {
    let (Some(timeframe), Some(interval)) = (
        query.timeframe.filter(|value| !value.trim().is_empty()),
        query.interval.filter(|value| !value.trim().is_empty()),
    ) else {
        return Err(ApiError::MissingPredictionParams);
    };

    state
        .predictions
        .predict(&ticker, &timeframe, &interval)
        .await
        .map(Json)
        .map_err(|error| ApiError::PredictionFailed(error.to_string()))
}
