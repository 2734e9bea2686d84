//! Analysis API: wire types, errors, and the HTTP client.

mod client;
mod error;
mod types;

use std::future::Future;

pub use client::HttpApi;
pub use error::ApiError;
pub use types::{AnalysisRequest, AnalysisResult, AnalyzeReply, HealthReport, ModelListResponse};

/// Operations the page needs from the analysis service.
///
/// `HttpApi` is the real implementation; tests substitute in-memory fakes.
pub trait AnalysisBackend: Send + Sync {
    /// `GET /api/models`. Non-2xx statuses are errors.
    fn list_models(&self) -> impl Future<Output = Result<ModelListResponse, ApiError>> + Send;

    /// `POST /api/analyze`. The body is parsed whatever the status.
    fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<AnalyzeReply, ApiError>> + Send;

    /// `GET /health`.
    fn health(&self) -> impl Future<Output = Result<HealthReport, ApiError>> + Send;
}
