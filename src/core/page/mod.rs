//! Page model: injectable element handles and the controller that drives them.
//!
//! A `Page` is the whole "document" the controller may touch. Every handle is
//! optional; operations skip silently when the elements they need are absent,
//! so a partial page (tests, one-shot CLI) behaves predictably.

mod controller;
mod counter;
mod sentiment;

use std::time::Instant;

pub use controller::{PageController, SubmitOutcome};
pub use counter::CounterTier;
pub use sentiment::Sentiment;

use crate::core::samples::Sample;

/// Maximum characters accepted by the analyze form (after trimming).
pub const MAX_TEXT_CHARS: usize = 10_000;

/// Submit button label while idle.
pub const SUBMIT_LABEL: &str = "✨ Analyze Text";

/// Submit button label while a request is in flight.
pub const SUBMIT_BUSY_LABEL: &str = "Analyzing...";

/// Named element slots of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    AnalyzeForm,
    TextInput,
    ModelSelect,
    SubmitButton,
    Results,
    Loading,
    ErrorAlert,
    CharCounter,
    WordCount,
    ResultWordCount,
    ResultCharCount,
    ResultModel,
    Summary,
    SentimentBadge,
}

impl Binding {
    pub const ALL: [Binding; 14] = [
        Binding::AnalyzeForm,
        Binding::TextInput,
        Binding::ModelSelect,
        Binding::SubmitButton,
        Binding::Results,
        Binding::Loading,
        Binding::ErrorAlert,
        Binding::CharCounter,
        Binding::WordCount,
        Binding::ResultWordCount,
        Binding::ResultCharCount,
        Binding::ResultModel,
        Binding::Summary,
        Binding::SentimentBadge,
    ];
}

/// Marker for the analyze form; submission is only wired when it exists.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeForm;

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub value: String,
}

/// Live character counter under the text input.
#[derive(Debug, Clone, Default)]
pub struct CharCounter {
    pub text: String,
    pub tier: CounterTier,
}

/// Model dropdown. `selected` indexes into `options`.
#[derive(Debug, Clone, Default)]
pub struct ModelSelect {
    pub options: Vec<String>,
    pub selected: Option<usize>,
}

impl ModelSelect {
    /// Select with a single markup-default option.
    pub fn with_default(model: &str) -> Self {
        Self {
            options: vec![model.to_string()],
            selected: Some(0),
        }
    }

    /// Currently selected option, if any.
    pub fn value(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(self.options.len() - 1),
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }
}

#[derive(Debug, Clone)]
pub struct SubmitButton {
    pub disabled: bool,
    pub label: String,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            disabled: false,
            label: SUBMIT_LABEL.to_string(),
        }
    }
}

/// A region that can only be shown or hidden (results, loading indicator).
#[derive(Debug, Clone)]
pub struct Region {
    pub hidden: bool,
}

impl Default for Region {
    fn default() -> Self {
        Self { hidden: true }
    }
}

/// Error alert with its pending auto-hide deadlines.
#[derive(Debug, Clone)]
pub struct ErrorAlert {
    pub text: String,
    pub hidden: bool,
    /// Each `show_error` schedules one hide; none is ever cancelled.
    pub pending_hides: Vec<Instant>,
}

impl Default for ErrorAlert {
    fn default() -> Self {
        Self {
            text: String::new(),
            hidden: true,
            pending_hides: Vec::new(),
        }
    }
}

/// Plain text slot (counts, model used, summary).
#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct SentimentBadge {
    pub text: String,
    pub classes: Vec<String>,
}

impl SentimentBadge {
    /// Sentiment named by the badge's modifier class, if it is a known one.
    pub fn sentiment(&self) -> Option<Sentiment> {
        self.classes
            .iter()
            .filter(|c| c.as_str() != sentiment::BADGE_BASE_CLASS)
            .find_map(|c| c.strip_prefix("sentiment-"))
            .and_then(Sentiment::from_lowercase)
    }
}

/// Button that fills the input with preset text.
#[derive(Debug, Clone)]
pub struct SampleTrigger {
    pub label: String,
    /// `None` models a trigger whose data attribute is missing.
    pub sample: Option<String>,
}

impl From<&Sample> for SampleTrigger {
    fn from(sample: &Sample) -> Self {
        Self {
            label: sample.label.clone(),
            sample: Some(sample.text.clone()),
        }
    }
}

/// Element the page last scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    ErrorAlert,
    Results,
}

/// The document: every element the controller may bind to.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub form: Option<AnalyzeForm>,
    pub text_input: Option<TextInput>,
    pub model_select: Option<ModelSelect>,
    pub submit_button: Option<SubmitButton>,
    pub results: Option<Region>,
    pub loading: Option<Region>,
    pub error_alert: Option<ErrorAlert>,
    pub char_counter: Option<CharCounter>,
    pub word_count: Option<TextField>,
    pub result_word_count: Option<TextField>,
    pub result_char_count: Option<TextField>,
    pub result_model: Option<TextField>,
    pub summary: Option<TextField>,
    pub sentiment_badge: Option<SentimentBadge>,
    pub sample_triggers: Vec<SampleTrigger>,
    pub scrolled_to: Option<ScrollTarget>,
}

impl Page {
    /// Fully bound page: every element present, selector holding `markup_model`.
    pub fn standard(markup_model: &str, samples: &[Sample]) -> Self {
        Self {
            form: Some(AnalyzeForm),
            text_input: Some(TextInput::default()),
            model_select: Some(ModelSelect::with_default(markup_model)),
            submit_button: Some(SubmitButton::default()),
            results: Some(Region::default()),
            loading: Some(Region::default()),
            error_alert: Some(ErrorAlert::default()),
            char_counter: Some(CharCounter {
                text: "0".to_string(),
                tier: CounterTier::Neutral,
            }),
            word_count: Some(TextField {
                text: "0".to_string(),
            }),
            result_word_count: Some(TextField::default()),
            result_char_count: Some(TextField::default()),
            result_model: Some(TextField::default()),
            summary: Some(TextField::default()),
            sentiment_badge: Some(SentimentBadge::default()),
            sample_triggers: samples.iter().map(SampleTrigger::from).collect(),
            scrolled_to: None,
        }
    }

    pub fn has(&self, binding: Binding) -> bool {
        match binding {
            Binding::AnalyzeForm => self.form.is_some(),
            Binding::TextInput => self.text_input.is_some(),
            Binding::ModelSelect => self.model_select.is_some(),
            Binding::SubmitButton => self.submit_button.is_some(),
            Binding::Results => self.results.is_some(),
            Binding::Loading => self.loading.is_some(),
            Binding::ErrorAlert => self.error_alert.is_some(),
            Binding::CharCounter => self.char_counter.is_some(),
            Binding::WordCount => self.word_count.is_some(),
            Binding::ResultWordCount => self.result_word_count.is_some(),
            Binding::ResultCharCount => self.result_char_count.is_some(),
            Binding::ResultModel => self.result_model.is_some(),
            Binding::Summary => self.summary.is_some(),
            Binding::SentimentBadge => self.sentiment_badge.is_some(),
        }
    }

    /// Bindings absent from this page.
    pub fn missing(&self) -> Vec<Binding> {
        Binding::ALL
            .into_iter()
            .filter(|b| !self.has(*b))
            .collect()
    }

    /// Current input text, or empty when there is no input.
    pub fn input_text(&self) -> &str {
        self.text_input
            .as_ref()
            .map(|i| i.value.as_str())
            .unwrap_or("")
    }

    pub fn is_results_visible(&self) -> bool {
        self.results.as_ref().is_some_and(|r| !r.hidden)
    }

    pub fn is_loading_visible(&self) -> bool {
        self.loading.as_ref().is_some_and(|r| !r.hidden)
    }

    /// Visible error text, if the alert is shown.
    pub fn visible_error(&self) -> Option<&str> {
        self.error_alert
            .as_ref()
            .filter(|a| !a.hidden)
            .map(|a| a.text.as_str())
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.submit_button.as_ref().is_some_and(|b| b.disabled)
    }
}
