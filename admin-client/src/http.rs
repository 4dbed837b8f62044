//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{ColorScheme, ColorSchemeParams, ColorSchemePayload};
use shared::{ErrorBody, SuccessBody};

/// HTTP client for making network requests to the admin server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorize(self.client.get(self.url(path)));
        Self::handle_response(request.send().await?).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        Self::handle_response(request.send().await?).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let request = self.authorize(self.client.put(self.url(path)).json(body));
        Self::handle_response(request.send().await?).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorize(self.client.delete(self.url(path)));
        Self::handle_response(request.send().await?).await
    }

    /// Handle the HTTP response
    ///
    /// Error bodies are decoded as [`ErrorBody`]; anything else is kept as raw text.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let errors = match serde_json::from_str::<ErrorBody>(&text) {
                Ok(body) => body.errors,
                Err(_) => vec![text],
            };
            tracing::debug!(status = %status, ?errors, "Request failed");

            return Err(match status {
                StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
                StatusCode::FORBIDDEN => ClientError::Forbidden(errors.join(", ")),
                StatusCode::NOT_FOUND => ClientError::NotFound(errors.join(", ")),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    ClientError::Validation(errors)
                }
                _ => ClientError::Internal(errors.join(", ")),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    // ========== Color Scheme API ==========

    /// Built-in palettes followed by stored schemes
    pub async fn list_color_schemes(&self) -> ClientResult<Vec<ColorScheme>> {
        self.get("/admin/color_schemes.json").await
    }

    pub async fn create_color_scheme(&self, params: ColorSchemeParams) -> ClientResult<ColorScheme> {
        self.post("/admin/color_schemes.json", &ColorSchemePayload::wrap(params))
            .await
    }

    pub async fn update_color_scheme(
        &self,
        id: i64,
        params: ColorSchemeParams,
    ) -> ClientResult<ColorScheme> {
        self.put(
            &format!("/admin/color_schemes/{id}.json"),
            &ColorSchemePayload::wrap(params),
        )
        .await
    }

    pub async fn delete_color_scheme(&self, id: i64) -> ClientResult<()> {
        self.delete::<SuccessBody>(&format!("/admin/color_schemes/{id}.json"))
            .await?;
        Ok(())
    }
}
