use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Walking pace of a generated tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    #[default]
    Normal,
    Packed,
}

/// Caller-facing parameters for tour generation. Optional fields fall back
/// to the documented defaults when the request is built.
#[derive(Debug, Clone)]
pub struct GenerateTourParams {
    pub city: String,
    pub days: u32,
    pub interests: Vec<String>,
    pub pace: Option<Pace>,
    pub language: Option<String>,
    pub start_location: Option<String>,
    pub end_location: Option<String>,
}

impl GenerateTourParams {
    pub fn new(city: impl Into<String>, days: u32, interests: Vec<String>) -> Self {
        Self {
            city: city.into(),
            days,
            interests,
            pace: None,
            language: None,
            start_location: None,
            end_location: None,
        }
    }
}

/// Wire shape of `POST /tour/generate`. Owned by the backend's OpenAPI
/// contract; values are forwarded verbatim apart from the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourGenerationRequest {
    pub city: String,
    pub days: u32,
    pub interests: Vec<String>,
    pub provider: String,
    pub pace: Pace,
    pub walking: String,
    pub language: String,
    pub mode: String,
    pub save: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_location: Option<String>,
}

impl From<GenerateTourParams> for TourGenerationRequest {
    fn from(params: GenerateTourParams) -> Self {
        Self {
            city: params.city,
            days: params.days,
            interests: params.interests,
            provider: "anthropic".to_string(),
            pace: params.pace.unwrap_or_default(),
            walking: "moderate".to_string(),
            language: params.language.unwrap_or_else(|| "en".to_string()),
            mode: "simple".to_string(),
            save: true,
            start_location: params.start_location,
            end_location: params.end_location,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourStop {
    pub poi_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayItinerary {
    pub day: u32,
    pub stops: Vec<TourStop>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourResponse {
    pub tour_id: String,
    pub city: String,
    pub days: u32,
    pub language: String,
    pub itinerary: Vec<DayItinerary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourSummary {
    pub tour_id: String,
    pub city: String,
    pub days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourListResponse {
    pub tours: Vec<TourSummary>,
    pub total: u64,
}

/// Wire shape of `POST /tours/{tour_id}/replace-poi`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoiReplacementRequest {
    pub original_poi: String,
    pub replacement_poi: String,
    pub mode: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoiReplacement {
    pub original_poi: String,
    pub replacement_poi: String,
    pub day: u32,
}

/// Wire shape of `POST /tours/{tour_id}/replace-pois-batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPoiReplacementRequest {
    pub replacements: Vec<PoiReplacement>,
    pub mode: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoiDetail {
    pub poi_id: String,
    pub name: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoiListResponse {
    pub city: String,
    pub pois: Vec<PoiDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub poi_id: String,
    pub language: String,
    pub transcript: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComboTicket {
    pub ticket_id: String,
    pub city: String,
    pub name: String,
    pub attractions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComboTicketListResponse {
    pub city: String,
    pub tickets: Vec<ComboTicket>,
}
