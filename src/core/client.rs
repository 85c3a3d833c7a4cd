use crate::core::{ApiResponse, ConfigProvider};
use crate::utils::error::Result;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Thin wrapper over `reqwest::Client` bound to one base URL.
#[derive(Debug, Clone)]
pub struct AdminApiClient {
    client: Client,
    base_url: String,
}

impl AdminApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        let url = self.endpoint(path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::read_response(response).await
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ApiResponse> {
        let url = self.endpoint(path);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;
        Self::read_response(response).await
    }

    async fn read_response(response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!("📡 API response status: {} ({} bytes)", status, body.len());

        Ok(ApiResponse { status, body })
    }
}
