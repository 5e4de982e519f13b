use crate::core::http::HttpClient;
use crate::domain::model::{PoiDetail, PoiListResponse, TranscriptResponse};
use crate::utils::error::Result;

/// `/pois` — point-of-interest listing, detail and audio-guide transcript.
#[derive(Debug, Clone, Copy)]
pub struct PoisApi<'a> {
    http: &'a HttpClient,
}

impl<'a> PoisApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list_city(&self, city: &str) -> Result<PoiListResponse> {
        self.http
            .get_json(&format!("/pois/{}", city), &[])
            .await
            .inspect_err(|e| tracing::error!("❌ Failed to get POIs for {}: {}", city, e))
    }

    pub async fn get(&self, city: &str, poi_id: &str) -> Result<PoiDetail> {
        self.http
            .get_json(&format!("/pois/{}/{}", city, poi_id), &[])
            .await
            .inspect_err(|e| {
                tracing::error!("❌ Failed to get POI details for {}: {}", poi_id, e)
            })
    }

    /// Transcript for a POI. Language defaults to `en`; `tour_id` is only
    /// sent when present so the backend can tailor the narration.
    pub async fn transcript(
        &self,
        city: &str,
        poi_id: &str,
        language: Option<&str>,
        tour_id: Option<&str>,
    ) -> Result<TranscriptResponse> {
        let mut query: Vec<(&str, String)> =
            vec![("language", language.unwrap_or("en").to_string())];
        if let Some(tour_id) = tour_id {
            query.push(("tour_id", tour_id.to_string()));
        }

        self.http
            .get_json(&format!("/pois/{}/{}/transcript", city, poi_id), &query)
            .await
            .inspect_err(|e| {
                tracing::error!("❌ Failed to get transcript for {}: {}", poi_id, e)
            })
    }
}
