//! Event handlers for the TUI: keyboard and paste.

mod input;
mod model_selector;
mod spawn;

use crossterm::event::{KeyEvent, KeyEventKind};
use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::core::api::HttpApi;

use super::app::App;
use super::shortcuts::Shortcut;

pub(crate) use spawn::{PendingAnalysis, spawn_health_check, spawn_models_fetch};

use self::model_selector::{ModelSelectorAction, handle_model_selector_key};

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Everything a key handler may touch.
pub(crate) struct HandleKeyContext<'a> {
    pub app: &'a mut App,
    pub api: &'a Arc<HttpApi>,
    pub pending_analyses: &'a mut Vec<PendingAnalysis>,
    pub rt: &'a Arc<Runtime>,
}

/// Handle a key event.
pub(crate) fn handle_key(key: KeyEvent, ctx: HandleKeyContext<'_>) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }
    let HandleKeyContext {
        app,
        api,
        pending_analyses,
        rt,
    } = ctx;

    if let Some(ref mut selector) = app.model_selector {
        let models = app
            .controller
            .page()
            .model_select
            .as_ref()
            .map(|s| s.options.clone())
            .unwrap_or_default();
        match handle_model_selector_key(key.code, key.modifiers, selector, &models) {
            ModelSelectorAction::Close => app.model_selector = None,
            ModelSelectorAction::Select(model) => {
                app.select_model(&model);
                app.model_selector = None;
            }
            ModelSelectorAction::Keep => {}
        }
        return HandleResult::Continue;
    }

    match Shortcut::match_key(&key) {
        Some(Shortcut::Quit) => return HandleResult::Break,
        Some(Shortcut::ModelSelector) => app.open_model_selector(),
        Some(Shortcut::Sample(n)) => app.controller.activate_sample(n),
        Some(Shortcut::ClearInput) => app.controller.set_input(String::new()),
        Some(Shortcut::HideError) => app.controller.hide_error(),
        None => input::handle_main_input(key.code, key.modifiers, app, api, pending_analyses, rt),
    }
    HandleResult::Continue
}

/// Bracketed paste: append to the model filter when the selector is open, else to the input.
pub(crate) fn handle_paste(text: &str, app: &mut App) {
    if let Some(ref mut selector) = app.model_selector {
        selector.filter.push_str(text.trim());
        return;
    }
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    app.controller.edit_input(|s| s.push_str(&text));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paste_normalizes_line_endings() {
        let mut app = App::new("m", "http://localhost:8000");
        handle_paste("one\r\ntwo\rthree", &mut app);
        assert_eq!(app.page().input_text(), "one\ntwo\nthree");
        assert_eq!(app.page().char_counter.as_ref().unwrap().text, "13");
    }

    #[test]
    fn paste_goes_to_filter_when_selector_open() {
        let mut app = App::new("m", "http://localhost:8000");
        app.open_model_selector();
        handle_paste(" llama \n", &mut app);
        assert_eq!(app.model_selector.as_ref().unwrap().filter, "llama");
        assert_eq!(app.page().input_text(), "");
    }
}
