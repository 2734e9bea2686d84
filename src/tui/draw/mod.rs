//! TUI rendering: layout and widgets for the analysis page.

mod form;
mod header;
mod popups;
mod results;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::app::App;
use super::constants::{ACCENT, ALERT_HEIGHT, INPUT_LINES};

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    app.apply_scroll_request();

    let alert_height = if app.page().visible_error().is_some() {
        ALERT_HEIGHT
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(INPUT_LINES + 2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(alert_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    header::draw_header(f, app, chunks[0], ACCENT);
    form::draw_input(f, app, chunks[1]);
    form::draw_samples(f, app, chunks[2]);
    form::draw_submit_line(f, app, chunks[3]);
    if alert_height > 0 {
        results::draw_error_alert(f, app, chunks[4]);
    }
    results::draw_results(f, app, chunks[5]);
    draw_bottom_bar(f, chunks[6]);

    if let Some(ref mut selector) = app.model_selector {
        let models = app
            .controller
            .page()
            .model_select
            .as_ref()
            .map(|s| s.options.as_slice())
            .unwrap_or(&[]);
        popups::draw_model_selector_popup(f, area, selector, models);
    }
}

fn draw_bottom_bar(f: &mut Frame, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::DarkGray));
    let line = Line::from(vec![
        key("Enter "),
        Span::raw("analyze  "),
        key("Shift+Enter "),
        Span::raw("newline  "),
        key("Alt+M "),
        Span::raw("model  "),
        key("Alt+↑↓ "),
        Span::raw("cycle  "),
        key("F1-F9 "),
        Span::raw("sample  "),
        key("Ctrl+L "),
        Span::raw("clear  "),
        key("Esc "),
        Span::raw("hide error  "),
        key("Ctrl+C "),
        Span::raw("quit"),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
