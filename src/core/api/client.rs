//! reqwest-backed client for the analysis service.

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{AnalysisRequest, AnalysisResult, AnalyzeReply, HealthReport, ModelListResponse};
use super::AnalysisBackend;

/// HTTP client bound to one service base URL. No request timeout is applied.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let res = self.client.get(&url).send().await?;
        let status = res.status();
        if !status.is_success() {
            log::debug!("GET {} -> {}", url, status);
            return Err(ApiError::Status(status.as_u16()));
        }
        let bytes = res.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl AnalysisBackend for HttpApi {
    async fn list_models(&self) -> Result<ModelListResponse, ApiError> {
        self.get_json("/api/models").await
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalyzeReply, ApiError> {
        let url = self.url("/api/analyze");
        log::info!(
            "POST {} ({} chars, model {})",
            url,
            request.text.chars().count(),
            request.model_name
        );
        let res = self.client.post(&url).json(request).send().await?;
        let status = res.status().as_u16();
        let bytes = res.bytes().await?;
        let body: AnalysisResult = serde_json::from_slice(&bytes)?;
        log::debug!("POST {} -> {}", url, status);
        Ok(AnalyzeReply { status, body })
    }

    async fn health(&self) -> Result<HealthReport, ApiError> {
        self.get_json("/health").await
    }
}
