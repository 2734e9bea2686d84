//! Error alert and results panel.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::page::{Page, Sentiment, TextField};

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY};

fn sentiment_color(sentiment: Option<Sentiment>) -> Color {
    match sentiment {
        Some(Sentiment::Positive) => Color::Green,
        Some(Sentiment::Negative) => Color::Red,
        Some(Sentiment::Neutral) => Color::Gray,
        Some(Sentiment::Mixed) => Color::Yellow,
        None => Color::White,
    }
}

fn field_text(field: &Option<TextField>) -> &str {
    field.as_ref().map(|f| f.text.as_str()).unwrap_or("")
}

pub(crate) fn draw_error_alert(f: &mut Frame, app: &App, area: Rect) {
    let Some(message) = app.page().visible_error() else {
        return;
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(Span::styled(
            " Error (Esc to dismiss) ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(Color::Red),
    )))
    .block(block);
    f.render_widget(paragraph, area);
}

fn stat_card(f: &mut Frame, area: Rect, title: &str, value: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(Color::DarkGray),
        ));
    let paragraph = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default()
            .fg(ACCENT_SECONDARY)
            .add_modifier(Modifier::BOLD),
    )))
    .block(block)
    .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, area);
}

fn summary_lines(page: &Page) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    if let Some(badge) = page.sentiment_badge.as_ref()
        && !badge.text.is_empty()
    {
        lines.push(Line::from(vec![
            Span::styled("Sentiment: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                badge.text.as_str(),
                Style::default()
                    .fg(sentiment_color(badge.sentiment()))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
    }
    for line in field_text(&page.summary).lines() {
        lines.push(Line::from(line));
    }
    lines
}

pub(crate) fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let page = app.page();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " Analysis results ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));

    if !page.is_results_visible() {
        let hint = if page.is_loading_visible() {
            "Analyzing your text..."
        } else {
            "Results will appear here after you submit some text."
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(rows[0]);

    stat_card(f, cards[0], "Words", field_text(&page.result_word_count));
    stat_card(f, cards[1], "Characters", field_text(&page.result_char_count));
    stat_card(f, cards[2], "Model", field_text(&page.result_model));

    let summary = Paragraph::new(summary_lines(page))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(" Summary ", Style::default().fg(Color::DarkGray))),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.results_scroll, 0));
    f.render_widget(summary, rows[1]);
}
