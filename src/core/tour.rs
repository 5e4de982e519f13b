use crate::core::http::HttpClient;
use crate::domain::model::{GenerateTourParams, TourGenerationRequest, TourResponse};
use crate::utils::error::Result;

/// `POST /tour/generate` — the tour-generation endpoint group.
#[derive(Debug, Clone, Copy)]
pub struct TourApi<'a> {
    http: &'a HttpClient,
}

impl<'a> TourApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Generate a tour. Caller values are forwarded verbatim; omitted
    /// fields get the documented defaults (pace `normal`, language `en`).
    pub async fn generate(&self, params: GenerateTourParams) -> Result<TourResponse> {
        let request = TourGenerationRequest::from(params);
        tracing::debug!(
            "🗺️  Generating tour: {} for {} day(s)",
            request.city,
            request.days
        );

        let response: TourResponse = self
            .http
            .post_json("/tour/generate", &request)
            .await
            .inspect_err(|e| tracing::error!("❌ Failed to generate tour: {}", e))?;

        tracing::info!("✅ Tour generated: {}", response.tour_id);
        Ok(response)
    }
}
