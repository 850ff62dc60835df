//! HTTP API over the tickyard market index service.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /` | liveness message |
//! | `GET /api/hotdata/indexes` | market listing (`country`, `timeframe`, `format`) |
//! | `GET /api/hotdata/indexes/:symbol` | one catalog entry by symbol or name |
//! | `GET /api/hotdata/stocks/:symbol` | single listing snapshot |
//! | `GET /api/prediction/:ticker` | prediction service passthrough |

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
