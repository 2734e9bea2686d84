//! Handler for the main form (text input, submit, results scroll).

use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::core::api::HttpApi;

use super::super::app::App;
use super::super::constants;
use super::spawn::{self, PendingAnalysis};

/// What a key on the main form asks for.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FormAction {
    Submit,
    Insert(char),
    Newline,
    Backspace,
    ScrollUp(u16),
    ScrollDown(u16),
    NextModel,
    PrevModel,
    Ignore,
}

/// Map a key to a form action (no side effects).
pub(crate) fn form_action(key_code: KeyCode, key_modifiers: KeyModifiers) -> FormAction {
    match key_code {
        KeyCode::Enter
            if key_modifiers.contains(KeyModifiers::SHIFT)
                || key_modifiers.contains(KeyModifiers::ALT) =>
        {
            FormAction::Newline
        }
        KeyCode::Enter => FormAction::Submit,
        KeyCode::Backspace => FormAction::Backspace,
        KeyCode::Tab => FormAction::Insert('\t'),
        KeyCode::Up if key_modifiers.contains(KeyModifiers::ALT) => FormAction::PrevModel,
        KeyCode::Down if key_modifiers.contains(KeyModifiers::ALT) => FormAction::NextModel,
        KeyCode::Up => FormAction::ScrollUp(constants::SCROLL_LINES_SMALL),
        KeyCode::Down => FormAction::ScrollDown(constants::SCROLL_LINES_SMALL),
        KeyCode::PageUp => FormAction::ScrollUp(constants::SCROLL_LINES_PAGE),
        KeyCode::PageDown => FormAction::ScrollDown(constants::SCROLL_LINES_PAGE),
        // Alt/Ctrl+key not mapped to a shortcut is most likely a mistyped shortcut
        KeyCode::Char(_)
            if key_modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) =>
        {
            FormAction::Ignore
        }
        KeyCode::Char(c) => FormAction::Insert(c),
        _ => FormAction::Ignore,
    }
}

/// Handle main form keys (when no popup is open).
pub(crate) fn handle_main_input(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
    api: &Arc<HttpApi>,
    pending_analyses: &mut Vec<PendingAnalysis>,
    rt: &Arc<Runtime>,
) {
    match form_action(key_code, key_modifiers) {
        FormAction::Submit => {
            // The page itself has no re-entrancy guard; the disabled button is ours.
            if app.page().is_submit_disabled() {
                return;
            }
            if let Ok(request) = app.controller.begin_submit() {
                pending_analyses.push(spawn::spawn_analysis(rt, Arc::clone(api), request));
            }
        }
        FormAction::Insert(c) => app.controller.edit_input(|s| s.push(c)),
        FormAction::Newline => app.controller.edit_input(|s| s.push('\n')),
        FormAction::Backspace => app.controller.edit_input(|s| {
            s.pop();
        }),
        FormAction::ScrollUp(n) => app.scroll_up(n),
        FormAction::ScrollDown(n) => app.scroll_down(n),
        FormAction::NextModel => {
            if let Some(select) = app.controller.page_mut().model_select.as_mut() {
                select.select_next();
            }
        }
        FormAction::PrevModel => {
            if let Some(select) = app.controller.page_mut().model_select.as_mut() {
                select.select_prev();
            }
        }
        FormAction::Ignore => {}
    }
}
