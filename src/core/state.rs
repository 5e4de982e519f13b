use crate::core::client::PocketGuideClient;
use crate::domain::model::{GenerateTourParams, TourListResponse, TourResponse, TourSummary};
use crate::utils::error::Result;

/// Loading/error handle around tour generation, for UI layers that track
/// request state. A new call clears the previous error; a failed call
/// records the error message and still propagates the error.
#[derive(Debug, Default)]
pub struct GenerateTourState {
    loading: bool,
    error: Option<String>,
}

impl GenerateTourState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn generate(
        &mut self,
        client: &PocketGuideClient,
        params: GenerateTourParams,
    ) -> Result<TourResponse> {
        self.loading = true;
        self.error = None;

        let result = client.tour().generate(params).await;
        self.loading = false;
        if let Err(e) = &result {
            self.error = Some(e.to_string());
        }
        result
    }
}

/// Loading/error handle around the tour list, keeping the last fetched
/// tours for display and re-fetching on demand.
#[derive(Debug)]
pub struct ToursFeed {
    city: Option<String>,
    limit: u32,
    tours: Vec<TourSummary>,
    loading: bool,
    error: Option<String>,
}

impl ToursFeed {
    pub fn new(city: Option<String>, limit: u32) -> Self {
        Self {
            city,
            limit,
            tours: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn tours(&self) -> &[TourSummary] {
        &self.tours
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn refetch(&mut self, client: &PocketGuideClient) -> Result<TourListResponse> {
        self.loading = true;
        self.error = None;

        let result = client
            .tours()
            .list(self.city.as_deref(), Some(self.limit), None)
            .await;
        self.loading = false;
        match &result {
            Ok(response) => self.tours = response.tours.clone(),
            Err(e) => self.error = Some(e.to_string()),
        }
        result
    }
}
