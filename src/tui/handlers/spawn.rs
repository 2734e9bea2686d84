//! Spawns backend requests on a background thread with result channels.

use std::sync::Arc;
use std::sync::mpsc;

use tokio::runtime::Runtime;

use crate::core::api::{
    AnalysisBackend, AnalysisRequest, AnalyzeReply, ApiError, HealthReport, HttpApi,
    ModelListResponse,
};

/// Receiver for one in-flight analysis.
pub type PendingAnalysis = mpsc::Receiver<Result<AnalyzeReply, ApiError>>;

/// Fetch the model list. Receiver yields the raw result; the page decides what to ignore.
pub fn spawn_models_fetch(
    rt: &Arc<Runtime>,
    api: Arc<HttpApi>,
) -> mpsc::Receiver<Result<ModelListResponse, ApiError>> {
    let (tx, rx) = mpsc::channel();
    let rt_clone = Arc::clone(rt);
    std::thread::spawn(move || {
        let result = rt_clone.block_on(api.list_models());
        let _ = tx.send(result);
    });
    rx
}

/// Check backend health. Errors are stringified for display.
pub fn spawn_health_check(
    rt: &Arc<Runtime>,
    api: Arc<HttpApi>,
) -> mpsc::Receiver<Result<HealthReport, String>> {
    let (tx, rx) = mpsc::channel();
    let rt_clone = Arc::clone(rt);
    std::thread::spawn(move || {
        let result = rt_clone.block_on(api.health()).map_err(|e| e.to_string());
        let _ = tx.send(result);
    });
    rx
}

/// Send one analysis request.
pub fn spawn_analysis(
    rt: &Arc<Runtime>,
    api: Arc<HttpApi>,
    request: AnalysisRequest,
) -> PendingAnalysis {
    let (tx, rx) = mpsc::channel();
    let rt_clone = Arc::clone(rt);
    std::thread::spawn(move || {
        let result = rt_clone.block_on(api.analyze(&request));
        let _ = tx.send(result);
    });
    rx
}
