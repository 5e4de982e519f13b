use crate::utils::error::{ApiError, Result};
use std::future::Future;

/// Settled result of an API call for callers that prefer a value over
/// error propagation.
#[derive(Debug)]
pub enum ApiOutcome<T> {
    Data(T),
    Failure(ApiError),
}

impl<T> ApiOutcome<T> {
    pub fn is_data(&self) -> bool {
        matches!(self, ApiOutcome::Data(_))
    }

    pub fn data(self) -> Option<T> {
        match self {
            ApiOutcome::Data(data) => Some(data),
            ApiOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ApiOutcome::Data(_) => None,
            ApiOutcome::Failure(e) => Some(e),
        }
    }
}

/// Run an API call without propagating its error: failures are logged and
/// returned as a value.
///
/// ```rust,ignore
/// let outcome = safe_call(client.tours().get("tour-123")).await;
/// if let Some(tour) = outcome.data() { /* use tour */ }
/// ```
pub async fn safe_call<T, F>(call: F) -> ApiOutcome<T>
where
    F: Future<Output = Result<T>>,
{
    match call.await {
        Ok(data) => ApiOutcome::Data(data),
        Err(e) => {
            tracing::error!("❌ API error: {}", e);
            ApiOutcome::Failure(e)
        }
    }
}
