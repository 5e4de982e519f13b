use crate::domain::ports::ClientSettings;
use crate::utils::error::{ApiError, Result};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Shared HTTP transport for all endpoint groups. Holds the base URL, the
/// optional bearer token and one `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpClient {
    pub fn new(settings: &impl ClientSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url().trim_end_matches('/').to_string(),
            auth_token: settings.auth_token().map(str::to_string),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        request
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        tracing::debug!("📡 GET {}{}", self.base_url, path);
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::handle_response(path, response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!("📡 POST {}{}", self.base_url, path);
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::handle_response(path, response).await
    }

    /// Map the status line first, then decode. The body is read as text so
    /// a failed response keeps its payload for the error and a malformed
    /// success body surfaces as a serialization error rather than a
    /// transport one.
    async fn handle_response<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
        let status = response.status();
        tracing::debug!("📡 {} -> {}", path, status);

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                resource: path.to_string(),
            });
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
