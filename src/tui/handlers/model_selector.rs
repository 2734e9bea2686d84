//! Handler for the model selector popup.

use crossterm::event::{KeyCode, KeyModifiers};

use super::super::app::{ModelSelectorState, filter_models};

/// Action to apply after handling a model selector key.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ModelSelectorAction {
    Close,
    Select(String),
    /// No action; keep the selector open.
    Keep,
}

/// Handle key when model selector is open. Returns action to apply; caller applies to app.
pub(crate) fn handle_model_selector_key(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    selector: &mut ModelSelectorState,
    models: &[String],
) -> ModelSelectorAction {
    // Filter input
    match key_code {
        KeyCode::Backspace => {
            selector.filter.pop();
        }
        KeyCode::Char(c) if !key_modifiers.contains(KeyModifiers::CONTROL) => {
            selector.filter.push(c);
        }
        _ => {}
    }

    let filtered = filter_models(models, &selector.filter);
    match key_code {
        KeyCode::Esc => ModelSelectorAction::Close,
        KeyCode::Up => {
            selector.selected_index = selector.selected_index.saturating_sub(1);
            ModelSelectorAction::Keep
        }
        KeyCode::Down => {
            if !filtered.is_empty() {
                selector.selected_index =
                    (selector.selected_index + 1).min(filtered.len().saturating_sub(1));
            }
            ModelSelectorAction::Keep
        }
        KeyCode::Enter => match filtered.get(selector.selected_index) {
            Some(model) => ModelSelectorAction::Select((*model).clone()),
            None => ModelSelectorAction::Keep,
        },
        KeyCode::Backspace | KeyCode::Char(_) => {
            selector.selected_index = selector
                .selected_index
                .min(filtered.len().saturating_sub(1));
            ModelSelectorAction::Keep
        }
        _ => ModelSelectorAction::Keep,
    }
}
