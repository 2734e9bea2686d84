//! Centralized keyboard shortcuts.
//!
//! | Action         | Keys                          |
//! |----------------|-------------------------------|
//! | Analyze        | Enter                         |
//! | Newline        | Shift+Enter, Alt+Enter        |
//! | Model selector | Alt+M, µ (Option+M Mac)       |
//! | Load sample    | F1–F9, Alt+1–9                |
//! | Clear input    | Ctrl+L                        |
//! | Hide error     | Esc                           |
//! | Scroll results | ↑ ↓ PageUp PageDown           |
//! | Quit           | Ctrl+C                        |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Open the model selector (Alt+M)
    ModelSelector,
    /// Fill the input with sample `n` (0-based)
    Sample(usize),
    /// Clear the text input (Ctrl+L)
    ClearInput,
    /// Hide the error alert (Esc)
    HideError,
    /// Quit (Ctrl+C)
    Quit,
}

/// Option+M on Mac when Option is not configured as Meta.
const MAC_OPTION_M: char = '\u{00B5}'; // µ

impl Shortcut {
    /// Returns the shortcut if the key matches.
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::Quit)
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::ClearInput)
            }
            KeyCode::Char('m') if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Shortcut::ModelSelector)
            }
            KeyCode::Char(MAC_OPTION_M) => Some(Shortcut::ModelSelector),
            KeyCode::Char(c @ '1'..='9') if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Shortcut::Sample(c as usize - '1' as usize))
            }
            KeyCode::F(n @ 1..=9) => Some(Shortcut::Sample(n as usize - 1)),
            KeyCode::Esc => Some(Shortcut::HideError),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Shortcut;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn match_quit_ctrl_c() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Shortcut::Quit)
        );
    }

    #[test]
    fn plain_c_is_not_a_shortcut() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::empty())),
            None
        );
    }

    #[test]
    fn match_model_selector() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('m'), KeyModifiers::ALT)),
            Some(Shortcut::ModelSelector)
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('µ'), KeyModifiers::empty())),
            Some(Shortcut::ModelSelector)
        );
    }

    #[test]
    fn match_samples() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::F(1), KeyModifiers::empty())),
            Some(Shortcut::Sample(0))
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('3'), KeyModifiers::ALT)),
            Some(Shortcut::Sample(2))
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::F(10), KeyModifiers::empty())),
            None
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('3'), KeyModifiers::empty())),
            None
        );
    }

    #[test]
    fn match_clear_and_escape() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('l'), KeyModifiers::CONTROL)),
            Some(Shortcut::ClearInput)
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Esc, KeyModifiers::empty())),
            Some(Shortcut::HideError)
        );
    }

    #[test]
    fn release_events_ignored() {
        let mut k = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        k.kind = KeyEventKind::Release;
        assert_eq!(Shortcut::match_key(&k), None);
    }
}
