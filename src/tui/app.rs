//! TUI application state: the page controller plus view-only state.

use std::time::Instant;

use ratatui::widgets::ListState;

use crate::core::api::HealthReport;
use crate::core::page::{Page, PageController, ScrollTarget};
use crate::core::samples::builtin_samples;

/// State for the model selector popup.
pub struct ModelSelectorState {
    /// Filter query (case-insensitive search on the model name).
    pub filter: String,
    /// Index into the filtered list.
    pub selected_index: usize,
    pub list_state: ListState,
}

/// Backend health as shown in the header.
pub enum HealthStatus {
    Checking,
    Healthy,
    Unhealthy(String),
    Unreachable(String),
}

impl From<Result<HealthReport, String>> for HealthStatus {
    fn from(result: Result<HealthReport, String>) -> Self {
        match result {
            Ok(report) if report.is_healthy() => HealthStatus::Healthy,
            Ok(report) => HealthStatus::Unhealthy(report.status),
            Err(e) => HealthStatus::Unreachable(e),
        }
    }
}

pub struct App {
    pub(crate) controller: PageController,
    /// When set, show the model selector popup (Alt+M).
    pub model_selector: Option<ModelSelectorState>,
    pub(crate) health: HealthStatus,
    /// First visible line of the results panel.
    pub(crate) results_scroll: u16,
    /// Base URL shown in the header.
    pub(crate) api_base_url: String,
    /// For spinner animation.
    pub(crate) started_at: Instant,
}

impl App {
    pub fn new(default_model: &str, api_base_url: &str) -> Self {
        let page = Page::standard(default_model, builtin_samples());
        Self {
            controller: PageController::new(page, default_model),
            model_selector: None,
            health: HealthStatus::Checking,
            results_scroll: 0,
            api_base_url: api_base_url.to_string(),
            started_at: Instant::now(),
        }
    }

    pub(crate) fn page(&self) -> &Page {
        self.controller.page()
    }

    /// Consume a pending scroll-into-view request from the page.
    pub(crate) fn apply_scroll_request(&mut self) {
        if let Some(ScrollTarget::Results) = self.controller.page_mut().scrolled_to.take() {
            self.results_scroll = 0;
        }
    }

    pub(crate) fn scroll_down(&mut self, n: u16) {
        self.results_scroll = self.results_scroll.saturating_add(n);
    }

    pub(crate) fn scroll_up(&mut self, n: u16) {
        self.results_scroll = self.results_scroll.saturating_sub(n);
    }

    /// Open the model selector with the current selection highlighted.
    pub(crate) fn open_model_selector(&mut self) {
        let Some(select) = self.page().model_select.as_ref() else {
            return;
        };
        let selected_index = select.selected.unwrap_or(0);
        self.model_selector = Some(ModelSelectorState {
            filter: String::new(),
            selected_index,
            list_state: ListState::default(),
        });
    }

    /// Select `model` in the page's selector.
    pub(crate) fn select_model(&mut self, model: &str) {
        if let Some(select) = self.controller.page_mut().model_select.as_mut()
            && let Some(index) = select.options.iter().position(|m| m == model)
        {
            select.selected = Some(index);
        }
    }
}

/// Filter model names by case-insensitive substring. Returns all when query is empty.
pub(crate) fn filter_models<'a>(models: &'a [String], query: &str) -> Vec<&'a String> {
    if query.is_empty() {
        return models.iter().collect();
    }
    let q = query.to_lowercase();
    models
        .iter()
        .filter(|m| m.to_lowercase().contains(&q))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::ModelListResponse;

    fn app_with_models() -> App {
        let mut app = App::new("qwen2.5-coder:0.5b", "http://localhost:8000");
        app.controller.apply_models(Ok(ModelListResponse {
            models: vec!["llama3.2".into(), "mistral".into(), "codellama".into()],
            default: Some("llama3.2".into()),
        }));
        app
    }

    #[test]
    fn new_app_binds_samples() {
        let app = App::new("m", "http://localhost:8000");
        assert_eq!(app.page().sample_triggers.len(), builtin_samples().len());
        assert!(app.page().missing().is_empty());
    }

    #[test]
    fn select_model_by_name() {
        let mut app = app_with_models();
        app.select_model("codellama");
        assert_eq!(app.controller.selected_model(), "codellama");
        app.select_model("unknown");
        assert_eq!(app.controller.selected_model(), "codellama");
    }

    #[test]
    fn selector_opens_on_current_selection() {
        let mut app = app_with_models();
        app.select_model("mistral");
        app.open_model_selector();
        assert_eq!(app.model_selector.as_ref().unwrap().selected_index, 1);
    }

    #[test]
    fn results_scroll_request_resets_scroll() {
        let mut app = app_with_models();
        app.scroll_down(5);
        app.controller
            .display_results(&crate::core::api::AnalysisResult::default());
        app.apply_scroll_request();
        assert_eq!(app.results_scroll, 0);
        assert_eq!(app.page().scrolled_to, None);
    }

    #[test]
    fn filter_models_case_insensitive() {
        let models = vec!["Llama3.2".to_string(), "mistral".to_string()];
        assert_eq!(filter_models(&models, "").len(), 2);
        assert_eq!(filter_models(&models, "LLAMA"), vec![&models[0]]);
        assert!(filter_models(&models, "xyz").is_empty());
    }

    #[test]
    fn health_status_from_result() {
        let ok = HealthReport {
            status: "healthy".into(),
            message: None,
        };
        assert!(matches!(HealthStatus::from(Ok(ok)), HealthStatus::Healthy));
        assert!(matches!(
            HealthStatus::from(Err("refused".to_string())),
            HealthStatus::Unreachable(_)
        ));
    }
}
