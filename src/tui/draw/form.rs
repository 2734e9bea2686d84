//! Analysis form: text area with counter, sample bar, submit line.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::page::{CounterTier, MAX_TEXT_CHARS, SUBMIT_LABEL};

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY};
use super::header::logo;

fn tier_color(tier: CounterTier) -> Color {
    match tier {
        CounterTier::Neutral => Color::DarkGray,
        CounterTier::Warning => Color::Yellow,
        CounterTier::Error => Color::Red,
    }
}

/// Last cursor row and column for `text` wrapped at `width`. Rows past `u16::MAX` clamp.
fn cursor_offset(text: &str, width: u16) -> (u16, u16) {
    let width = width.max(1) as usize;
    let mut row = 0usize;
    let mut col = 0usize;
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            row += 1;
        }
        let len = line.chars().count();
        row += len / width;
        col = len % width;
    }
    (
        u16::try_from(row).unwrap_or(u16::MAX),
        u16::try_from(col).unwrap_or(u16::MAX),
    )
}

pub(crate) fn draw_input(f: &mut Frame, app: &mut App, area: Rect) {
    let page = app.page();
    let input = page.input_text();

    let mut title = vec![Span::styled(
        " Text to analyze ",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )];
    if let Some(counter) = page.char_counter.as_ref() {
        title.push(Span::styled(
            format!(" {}/{} ", counter.text, MAX_TEXT_CHARS),
            Style::default().fg(tier_color(counter.tier)),
        ));
    }
    if let Some(words) = page.word_count.as_ref() {
        title.push(Span::styled(
            format!(" {} words ", words.text),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Line::from(title));
    let inner = block.inner(area);

    let lines: Vec<Line> = if input.is_empty() {
        vec![Line::from(Span::styled(
            "Enter or paste text here (F1-F9 load a sample)...",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        input.split('\n').map(|l| Line::from(l.to_string())).collect()
    };

    let (row, col) = cursor_offset(input, inner.width);
    let scroll = row.saturating_sub(inner.height.saturating_sub(1));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(paragraph, area);

    if app.model_selector.is_none() {
        let x = inner.x.saturating_add(col);
        let y = inner.y.saturating_add(row - scroll);
        f.set_cursor_position(Position::new(x, y));
    }
}

pub(crate) fn draw_samples(f: &mut Frame, app: &App, area: Rect) {
    let triggers = &app.page().sample_triggers;
    let mut spans = vec![Span::styled(
        " Samples: ",
        Style::default().fg(Color::DarkGray),
    )];
    if triggers.is_empty() {
        spans.push(Span::styled(
            "none",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    for (i, trigger) in triggers.iter().enumerate() {
        spans.push(Span::styled(
            format!("F{} ", i + 1),
            Style::default().fg(ACCENT_SECONDARY),
        ));
        spans.push(Span::raw(format!("{}  ", trigger.label)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Submit button, or the loading indicator while a request is in flight.
pub(crate) fn draw_submit_line(f: &mut Frame, app: &App, area: Rect) {
    let page = app.page();
    let label = page
        .submit_button
        .as_ref()
        .map(|b| b.label.as_str())
        .unwrap_or(SUBMIT_LABEL);

    let button_style = if page.is_submit_disabled() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    };
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(format!(" {} ", label), button_style),
    ];
    if page.is_loading_visible() {
        spans.push(Span::styled(
            format!("  {} waiting for the model…", logo(app)),
            Style::default().fg(ACCENT_SECONDARY),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
