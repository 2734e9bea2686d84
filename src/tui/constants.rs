//! TUI constants: colors, timing, and layout sizes.

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent, soft cyan (#7EC8E3).
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys in the results panel.
pub(crate) const SCROLL_LINES_SMALL: u16 = 1;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: u16 = 10;

/// Input textarea height (visible lines inside the block borders).
pub(crate) const INPUT_LINES: u16 = 8;

/// Error alert height including borders.
pub(crate) const ALERT_HEIGHT: u16 = 3;

/// Minimalist logo when idle (single character).
pub(super) const LOGO_IDLE: &str = "◆";

/// Spinner frames for the loading indicator (braille pattern, 4 frames).
pub(super) const LOGO_THINKING: &[&str] = &["⠋", "⠙", "⠹", "⠸"];
