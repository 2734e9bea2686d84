//! Page controller: counter, model list, loading/error states, submission, samples.

use std::time::{Duration, Instant};

use crate::core::api::{
    AnalysisBackend, AnalysisRequest, AnalysisResult, AnalyzeReply, ApiError, ModelListResponse,
};

use super::counter::CounterTier;
use super::sentiment;
use super::{MAX_TEXT_CHARS, Page, SUBMIT_BUSY_LABEL, SUBMIT_LABEL, ScrollTarget};

/// Delay before a shown error hides itself.
pub const ERROR_AUTO_HIDE: Duration = Duration::from_secs(10);

/// Summary shown when the backend returns none.
pub const SUMMARY_PLACEHOLDER: &str = "No summary generated";

/// Shown when the service replies with a failure but no message.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred during analysis";

/// Shown when the request fails before a usable reply arrives.
pub const CONNECTION_FAILURE_MESSAGE: &str =
    "Failed to connect to the server. Please check if the backend is running and try again.";

/// Input rejected before any request is made. Display is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter some text to analyze")]
    Empty,
    #[error("Text is too long. Maximum 10,000 characters allowed.")]
    TooLong,
}

/// Where the submission state machine currently is.
///
/// `Idle → Validating → Loading → {Success, Failure} → Idle`. `Validating`
/// returns straight to `Idle` on rejected input. There is no re-entrancy
/// guard, so `Loading → Validating` is also legal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Loading,
    Success,
    Failure,
}

impl SubmitPhase {
    fn can_transition(self, to: SubmitPhase) -> bool {
        use SubmitPhase::*;
        matches!(
            (self, to),
            (Idle, Validating)
                | (Loading, Validating)
                | (Validating, Idle)
                | (Validating, Loading)
                | (Loading, Success)
                | (Loading, Failure)
                | (Success, Idle)
                | (Failure, Idle)
        )
    }
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No analyze form on the page; nothing happened.
    Unbound,
    /// Input failed validation; no request was made.
    Rejected(ValidationError),
    /// Results were rendered.
    Rendered,
    /// The service replied with a failure; the message was shown.
    ServerError(String),
    /// Transport or decode failure; the connectivity message was shown.
    TransportError,
}

/// Drives a `Page`. Every operation is a no-op for elements the page lacks.
pub struct PageController {
    page: Page,
    default_model: String,
    models_requested: bool,
    phase: SubmitPhase,
}

impl PageController {
    /// Bind to `page`. `default_model` is sent when there is no model selection.
    pub fn new(page: Page, default_model: impl Into<String>) -> Self {
        let missing = page.missing();
        if !missing.is_empty() {
            log::debug!("Page bound without: {:?}", missing);
        }
        let mut controller = Self {
            page,
            default_model: default_model.into(),
            models_requested: false,
            phase: SubmitPhase::Idle,
        };
        controller.on_input();
        controller
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    fn transition(&mut self, to: SubmitPhase) {
        if !self.phase.can_transition(to) {
            log::debug!("Unexpected submit transition {:?} -> {:?}", self.phase, to);
        }
        self.phase = to;
    }

    // ---- input & counter ----

    /// Refresh the character counter (and word count) from the input.
    /// Needs `TextInput` and `CharCounter`.
    pub fn on_input(&mut self) {
        let Some(input) = self.page.text_input.as_ref() else {
            return;
        };
        let Some(counter) = self.page.char_counter.as_mut() else {
            return;
        };
        let len = input.value.chars().count();
        counter.text = len.to_string();
        counter.tier = CounterTier::for_length(len);
        if let Some(words) = self.page.word_count.as_mut() {
            words.text = input.value.split_whitespace().count().to_string();
        }
    }

    /// Replace the input text as if typed, then refresh the counter.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if let Some(input) = self.page.text_input.as_mut() {
            input.value = text.into();
            self.on_input();
        }
    }

    /// Edit the input in place, then refresh the counter.
    pub fn edit_input(&mut self, edit: impl FnOnce(&mut String)) {
        if let Some(input) = self.page.text_input.as_mut() {
            edit(&mut input.value);
            self.on_input();
        }
    }

    // ---- model list ----

    /// True the first time only: the model list is requested once per page.
    pub fn begin_load_models(&mut self) -> bool {
        !std::mem::replace(&mut self.models_requested, true)
    }

    /// Apply a model list reply. Failures are logged and otherwise ignored.
    /// Needs `ModelSelect`.
    pub fn apply_models(&mut self, result: Result<ModelListResponse, ApiError>) {
        let response = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Could not load models: {}", e);
                return;
            }
        };
        let Some(select) = self.page.model_select.as_mut() else {
            return;
        };
        let selected = response
            .default
            .as_deref()
            .and_then(|d| response.models.iter().position(|m| m == d))
            .or(if response.models.is_empty() { None } else { Some(0) });
        select.options = response.models;
        select.selected = selected;
        log::info!("Loaded {} models", select.options.len());
    }

    /// Fetch and apply the model list, at most once per controller.
    pub async fn load_models<B: AnalysisBackend>(&mut self, backend: &B) {
        if !self.begin_load_models() {
            return;
        }
        let result = backend.list_models().await;
        self.apply_models(result);
    }

    /// Model to send: the selection, else the configured default.
    pub fn selected_model(&self) -> String {
        self.page
            .model_select
            .as_ref()
            .and_then(|s| s.value())
            .unwrap_or(&self.default_model)
            .to_string()
    }

    // ---- error alert ----

    /// Show `message` in the error alert and schedule its auto-hide.
    pub fn show_error(&mut self, message: &str) {
        self.show_error_at(message, Instant::now());
    }

    pub(crate) fn show_error_at(&mut self, message: &str, now: Instant) {
        let Some(alert) = self.page.error_alert.as_mut() else {
            return;
        };
        alert.text = message.to_string();
        alert.hidden = false;
        alert.pending_hides.push(now + ERROR_AUTO_HIDE);
        self.page.scrolled_to = Some(ScrollTarget::ErrorAlert);
    }

    /// Hide the error alert. Scheduled auto-hides stay pending.
    pub fn hide_error(&mut self) {
        if let Some(alert) = self.page.error_alert.as_mut() {
            alert.hidden = true;
        }
    }

    /// Fire every auto-hide due at `now`.
    pub fn tick(&mut self, now: Instant) {
        let Some(alert) = self.page.error_alert.as_mut() else {
            return;
        };
        let before = alert.pending_hides.len();
        alert.pending_hides.retain(|deadline| *deadline > now);
        if alert.pending_hides.len() < before {
            alert.hidden = true;
        }
    }

    // ---- loading ----

    pub fn show_loading(&mut self) {
        if let Some(loading) = self.page.loading.as_mut() {
            loading.hidden = false;
        }
        if let Some(results) = self.page.results.as_mut() {
            results.hidden = true;
        }
        self.hide_error();
        if let Some(button) = self.page.submit_button.as_mut() {
            button.disabled = true;
            button.label = SUBMIT_BUSY_LABEL.to_string();
        }
    }

    /// Undo `show_loading` for the indicator and button. Results stay as they are.
    pub fn hide_loading(&mut self) {
        if let Some(loading) = self.page.loading.as_mut() {
            loading.hidden = true;
        }
        if let Some(button) = self.page.submit_button.as_mut() {
            button.disabled = false;
            button.label = SUBMIT_LABEL.to_string();
        }
    }

    // ---- results ----

    /// Render an analysis result. Needs `Results`.
    pub fn display_results(&mut self, data: &AnalysisResult) {
        let page = &mut self.page;
        if page.results.is_none() {
            return;
        }

        if let Some(field) = page.result_word_count.as_mut() {
            field.text = data.word_count.unwrap_or(0).to_string();
        }
        if let Some(field) = page.result_char_count.as_mut() {
            field.text = data.character_count.unwrap_or(0).to_string();
        }
        if let Some(field) = page.result_model.as_mut() {
            field.text = data
                .model_used
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or("N/A")
                .to_string();
        }
        if let Some(field) = page.summary.as_mut() {
            field.text = data
                .summary
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(SUMMARY_PLACEHOLDER)
                .to_string();
        }
        if let Some(badge) = page.sentiment_badge.as_mut()
            && let Some(raw) = data.sentiment.as_deref().filter(|s| !s.is_empty())
        {
            let (text, classes) = sentiment::badge(raw);
            badge.text = text;
            badge.classes = classes;
        }

        if let Some(results) = page.results.as_mut() {
            results.hidden = false;
        }
        page.scrolled_to = Some(ScrollTarget::Results);
    }

    // ---- submission ----

    /// Trimmed input checked against the length limits.
    fn validated_text(&self) -> Result<String, ValidationError> {
        let text = self.page.input_text().trim();
        if text.is_empty() {
            return Err(ValidationError::Empty);
        }
        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(ValidationError::TooLong);
        }
        Ok(text.to_string())
    }

    /// Validate and enter the loading state.
    ///
    /// Returns the request to send, or the reason nothing should be sent.
    pub fn begin_submit(&mut self) -> Result<AnalysisRequest, SubmitOutcome> {
        if self.page.form.is_none() {
            return Err(SubmitOutcome::Unbound);
        }
        self.transition(SubmitPhase::Validating);
        let model_name = self.selected_model();
        let text = match self.validated_text() {
            Ok(text) => text,
            Err(e) => {
                self.show_error(&e.to_string());
                self.transition(SubmitPhase::Idle);
                return Err(SubmitOutcome::Rejected(e));
            }
        };
        self.show_loading();
        self.transition(SubmitPhase::Loading);
        Ok(AnalysisRequest { text, model_name })
    }

    /// Apply the analyze reply (or failure) and leave the loading state.
    pub fn finish_submit(&mut self, result: Result<AnalyzeReply, ApiError>) -> SubmitOutcome {
        let outcome = match result {
            Ok(reply) if reply.is_status_success() && reply.body.is_success_flagged() => {
                self.display_results(&reply.body);
                self.transition(SubmitPhase::Success);
                SubmitOutcome::Rendered
            }
            Ok(reply) => {
                let message = reply
                    .body
                    .failure_message()
                    .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
                log::warn!("Analysis failed (HTTP {}): {}", reply.status, message);
                self.show_error(&message);
                self.transition(SubmitPhase::Failure);
                SubmitOutcome::ServerError(message)
            }
            Err(e) => {
                log::error!("Analysis request failed: {}", e);
                self.show_error(CONNECTION_FAILURE_MESSAGE);
                self.transition(SubmitPhase::Failure);
                SubmitOutcome::TransportError
            }
        };
        self.hide_loading();
        self.transition(SubmitPhase::Idle);
        outcome
    }

    /// Full submission: validate, send, render.
    pub async fn submit<B: AnalysisBackend>(&mut self, backend: &B) -> SubmitOutcome {
        match self.begin_submit() {
            Ok(request) => {
                let result = backend.analyze(&request).await;
                self.finish_submit(result)
            }
            Err(outcome) => outcome,
        }
    }

    // ---- samples ----

    /// Fill the input from sample trigger `index`. Triggers without text do nothing.
    pub fn activate_sample(&mut self, index: usize) {
        let Some(sample) = self
            .page
            .sample_triggers
            .get(index)
            .and_then(|t| t.sample.clone())
            .filter(|s| !s.is_empty())
        else {
            return;
        };
        self.set_input(sample);
    }
}
