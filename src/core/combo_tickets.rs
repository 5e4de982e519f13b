use crate::core::http::HttpClient;
use crate::domain::model::{ComboTicket, ComboTicketListResponse};
use crate::utils::error::Result;

/// `/combo-tickets` — bundled admission tickets covering several
/// attractions of a city.
#[derive(Debug, Clone, Copy)]
pub struct ComboTicketsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ComboTicketsApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, city: &str) -> Result<ComboTicketListResponse> {
        self.http
            .get_json(&format!("/combo-tickets/{}", city), &[])
            .await
            .inspect_err(|e| {
                tracing::error!("❌ Failed to get combo tickets for {}: {}", city, e)
            })
    }

    pub async fn get(&self, city: &str, ticket_id: &str) -> Result<ComboTicket> {
        self.http
            .get_json(&format!("/combo-tickets/{}/{}", city, ticket_id), &[])
            .await
            .inspect_err(|e| {
                tracing::error!("❌ Failed to get combo ticket {}: {}", ticket_id, e)
            })
    }
}
