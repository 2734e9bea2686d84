//! Header: logo, title, selected model, backend health.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::app;

use super::super::app::{App, HealthStatus};
use super::super::constants::{LOGO_IDLE, LOGO_THINKING};

/// Max width for model name in header; longer names are truncated with "…".
const MODEL_HEADER_WIDTH: u16 = 28;

/// Width of the backend status area.
const HEALTH_HEADER_WIDTH: u16 = 36;

pub(super) fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        format!(
            "{}…",
            s.chars()
                .take(max_width.saturating_sub(1))
                .collect::<String>()
        )
    }
}

/// Spinner frame while loading, else the idle logo.
pub(super) fn logo(app: &App) -> &'static str {
    if app.page().is_loading_visible() {
        let frame = (app.started_at.elapsed().as_millis() / 120) as usize % LOGO_THINKING.len();
        LOGO_THINKING[frame]
    } else {
        LOGO_IDLE
    }
}

fn health_span(health: &HealthStatus) -> Span<'static> {
    match health {
        HealthStatus::Checking => Span::styled("● checking…", Style::default().fg(Color::DarkGray)),
        HealthStatus::Healthy => Span::styled("● backend online", Style::default().fg(Color::Green)),
        HealthStatus::Unhealthy(status) => Span::styled(
            format!("● backend {}", status),
            Style::default().fg(Color::Yellow),
        ),
        HealthStatus::Unreachable(_) => {
            Span::styled("● backend unreachable", Style::default().fg(Color::Red))
        }
    }
}

/// Second status line: the failure reason when unreachable, else the base URL.
fn health_detail<'a>(health: &'a HealthStatus, base_url: &'a str) -> (&'a str, Color) {
    match health {
        HealthStatus::Unreachable(reason) => (reason.as_str(), Color::Red),
        _ => (base_url, Color::DarkGray),
    }
}

pub(crate) fn draw_header(f: &mut Frame, app: &mut App, area: Rect, accent: Color) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(MODEL_HEADER_WIDTH + 2),
            Constraint::Length(HEALTH_HEADER_WIDTH),
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(format!(" {} ", logo(app)), Style::default().fg(accent)),
        Span::styled(
            app::NAME,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" v{}", app::VERSION),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(title), header_chunks[0]);

    let model = truncate_with_ellipsis(
        &app.controller.selected_model(),
        MODEL_HEADER_WIDTH as usize,
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            model,
            Style::default().fg(Color::White),
        ))),
        header_chunks[1],
    );

    let health = Line::from(vec![health_span(&app.health)]);
    let (detail, detail_color) = health_detail(&app.health, &app.api_base_url);
    let detail = Line::from(Span::styled(
        truncate_with_ellipsis(detail, HEALTH_HEADER_WIDTH as usize),
        Style::default().fg(detail_color),
    ));
    f.render_widget(Paragraph::new(vec![health, detail]), header_chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::{HealthStatus, health_detail, truncate_with_ellipsis};
    use ratatui::style::Color;

    #[test]
    fn truncate_short_unchanged() {
        assert_eq!(truncate_with_ellipsis("llama3.2", 28), "llama3.2");
    }

    #[test]
    fn truncate_long_adds_ellipsis() {
        let s = truncate_with_ellipsis("a-very-long-model-name", 10);
        assert_eq!(s.chars().count(), 10);
        assert!(s.ends_with('…'));
    }

    #[test]
    fn unreachable_backend_shows_reason() {
        let down = HealthStatus::Unreachable("connection refused".into());
        assert_eq!(
            health_detail(&down, "http://localhost:8000"),
            ("connection refused", Color::Red)
        );
        assert_eq!(
            health_detail(&HealthStatus::Healthy, "http://localhost:8000"),
            ("http://localhost:8000", Color::DarkGray)
        );
    }
}
