use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tickyard_core::CoreError;

pub const MISSING_PREDICTION_PARAMS: &str = "Missing timeframe or interval query parameters";
pub const PREDICTION_FAILED: &str = "Failed to fetch prediction";

/// Errors returned by route handlers.
///
/// Market routes answer `{ success: false, message, error? }`; prediction
/// routes keep the bare `{ error }` body their consumers expect.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("upstream failure: {detail}")]
    Upstream { message: String, detail: String },

    #[error("internal error: {0}")]
    Internal(String),

    #[error("missing timeframe or interval query parameters")]
    MissingPredictionParams,

    #[error("prediction failed: {0}")]
    PredictionFailed(String),
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(validation) => Self::BadRequest(validation.to_string()),
            CoreError::NoDataForInstrument { symbol } => {
                Self::NotFound(format!("No data found for {symbol}"))
            }
            CoreError::QuoteFetchFailed { symbol, source } => Self::Upstream {
                message: format!("Failed to fetch data for {symbol}"),
                detail: source.to_string(),
            },
            CoreError::Serialization(error) => Self::Internal(error.to_string()),
        }
    }
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::MissingPredictionParams => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal(_) | Self::PredictionFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        }

        let body = match self {
            Self::BadRequest(message) | Self::NotFound(message) => {
                json!({ "success": false, "message": message })
            }
            Self::Upstream { message, detail } => {
                json!({ "success": false, "message": message, "error": detail })
            }
            Self::Internal(detail) => {
                json!({ "success": false, "message": "Internal server error", "error": detail })
            }
            Self::MissingPredictionParams => json!({ "error": MISSING_PREDICTION_PARAMS }),
            Self::PredictionFailed(_) => json!({ "error": PREDICTION_FAILED }),
        };

        (status, Json(body)).into_response()
    }
}
