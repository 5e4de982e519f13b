pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command};
pub use config::toml_config::FileConfig;
pub use config::ClientConfig;
pub use core::client::PocketGuideClient;
pub use core::combo_tickets::ComboTicketsApi;
pub use core::http::HttpClient;
pub use core::outcome::{safe_call, ApiOutcome};
pub use core::pois::PoisApi;
pub use core::state::{GenerateTourState, ToursFeed};
pub use core::tour::TourApi;
pub use core::tours::ToursApi;
pub use domain::model::{
    BatchPoiReplacementRequest, ComboTicket, ComboTicketListResponse, DayItinerary,
    GenerateTourParams, Pace, PoiDetail, PoiListResponse, PoiReplacement, PoiReplacementRequest,
    TourGenerationRequest, TourListResponse, TourResponse, TourStop, TourSummary,
    TranscriptResponse,
};
pub use domain::ports::ClientSettings;
pub use utils::error::{ApiError, Result};
