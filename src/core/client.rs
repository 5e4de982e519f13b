use crate::core::combo_tickets::ComboTicketsApi;
use crate::core::http::HttpClient;
use crate::core::pois::PoisApi;
use crate::core::tour::TourApi;
use crate::core::tours::ToursApi;
use crate::domain::ports::ClientSettings;
use crate::utils::error::Result;

/// Facade over one shared transport, handing out the endpoint groups the
/// way the generated client hands out its per-tag classes.
#[derive(Debug, Clone)]
pub struct PocketGuideClient {
    http: HttpClient,
}

impl PocketGuideClient {
    pub fn new(settings: &impl ClientSettings) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(settings)?,
        })
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn tour(&self) -> TourApi<'_> {
        TourApi::new(&self.http)
    }

    pub fn tours(&self) -> ToursApi<'_> {
        ToursApi::new(&self.http)
    }

    pub fn pois(&self) -> PoisApi<'_> {
        PoisApi::new(&self.http)
    }

    pub fn combo_tickets(&self) -> ComboTicketsApi<'_> {
        ComboTicketsApi::new(&self.http)
    }
}
