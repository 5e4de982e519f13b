use crate::core::http::HttpClient;
use crate::domain::model::{
    BatchPoiReplacementRequest, PoiReplacement, PoiReplacementRequest, TourListResponse,
    TourResponse,
};
use crate::utils::error::Result;

const DEFAULT_LIST_LIMIT: u32 = 20;

/// `/tours` — retrieval, listing and POI replacement on saved tours.
#[derive(Debug, Clone, Copy)]
pub struct ToursApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ToursApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn get(&self, tour_id: &str) -> Result<TourResponse> {
        self.http
            .get_json(&format!("/tours/{}", tour_id), &[])
            .await
            .inspect_err(|e| tracing::error!("❌ Failed to get tour {}: {}", tour_id, e))
    }

    /// List saved tours, optionally filtered by city. `limit` defaults to
    /// 20 and `offset` to 0.
    pub async fn list(
        &self,
        city: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<TourListResponse> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(city) = city {
            query.push(("city", city.to_string()));
        }
        query.push(("limit", limit.unwrap_or(DEFAULT_LIST_LIMIT).to_string()));
        query.push(("offset", offset.unwrap_or(0).to_string()));

        self.http
            .get_json("/tours", &query)
            .await
            .inspect_err(|e| tracing::error!("❌ Failed to list tours: {}", e))
    }

    /// Replace one POI in a tour. Always sends `mode = "simple"`; language
    /// defaults to `en`.
    pub async fn replace_poi(
        &self,
        tour_id: &str,
        original_poi: &str,
        replacement_poi: &str,
        language: Option<&str>,
    ) -> Result<TourResponse> {
        let request = PoiReplacementRequest {
            original_poi: original_poi.to_string(),
            replacement_poi: replacement_poi.to_string(),
            mode: "simple".to_string(),
            language: language.unwrap_or("en").to_string(),
        };

        let response: TourResponse = self
            .http
            .post_json(&format!("/tours/{}/replace-poi", tour_id), &request)
            .await
            .inspect_err(|e| tracing::error!("❌ Failed to replace POI: {}", e))?;

        tracing::info!("✅ POI replaced successfully");
        Ok(response)
    }

    /// Replace several POIs in one pass-through call. The replacements are
    /// forwarded as-is to the batch endpoint.
    pub async fn replace_pois_batch(
        &self,
        tour_id: &str,
        replacements: Vec<PoiReplacement>,
        language: Option<&str>,
    ) -> Result<TourResponse> {
        let request = BatchPoiReplacementRequest {
            replacements,
            mode: "simple".to_string(),
            language: language.unwrap_or("en").to_string(),
        };

        let response: TourResponse = self
            .http
            .post_json(&format!("/tours/{}/replace-pois-batch", tour_id), &request)
            .await
            .inspect_err(|e| tracing::error!("❌ Failed to replace POIs: {}", e))?;

        tracing::info!("✅ POIs replaced successfully");
        Ok(response)
    }
}
