//! Chart source trait and request/error types.
//!
//! [`ChartSource`] is the seam between the aggregator and the quote provider.
//! The production implementation is [`YahooChartAdapter`](crate::YahooChartAdapter);
//! tests substitute their own transport underneath it.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::chart::ChartPayload;
use crate::{Symbol, TimeWindow};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Transport failure or non-success status.
    Unavailable,
    /// Request rejected before it was sent.
    InvalidRequest,
    /// Upstream answered but the body could not be understood.
    Internal,
}

/// Structured upstream error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// One chart lookup. Without a window the provider's default range applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    pub symbol: Symbol,
    pub window: Option<TimeWindow>,
}

impl ChartRequest {
    pub fn new(symbol: Symbol, window: TimeWindow) -> Self {
        Self {
            symbol,
            window: Some(window),
        }
    }

    pub fn latest(symbol: Symbol) -> Self {
        Self {
            symbol,
            window: None,
        }
    }
}

/// Quote provider contract: one attempt per call, no retry.
pub trait ChartSource: Send + Sync {
    /// Fetch the raw chart payload for one symbol.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure, non-success status or a
    /// body that does not have the chart shape.
    fn chart<'a>(
        &'a self,
        req: ChartRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ChartPayload, SourceError>> + Send + 'a>>;
}
