use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Issues a GET for `path` (relative to the API base URL) and decodes
    /// the JSON body, mapping non-2xx responses onto `ApiError`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.resolved_base_url().await, path);
        log::debug!("GET {}", url);
        let mut request = self.http_client().get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.dispatch(request).await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)));
        }

        let body = response.text().await.unwrap_or_default();
        let error = serde_json::from_str::<ApiError>(&body).unwrap_or_else(|_| {
            ApiError::request_failed(format!("Request failed with status {}", status.as_u16()))
        });
        log::warn!("API error {}: {} ({})", status.as_u16(), error.error, error.code);
        Err(error)
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    async fn dispatch(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    async fn dispatch(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        match mock_for(request.url().as_str()) {
            Some(responder) => responder.respond(&request).map(MockResponse::into_response),
            None => self
                .client
                .execute(request)
                .await
                .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e))),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::*;
