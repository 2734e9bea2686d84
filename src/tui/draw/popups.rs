//! Model selector popup.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use super::super::app::{ModelSelectorState, filter_models};
use super::super::constants::ACCENT;

fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let vertical_areas = vertical.split(area);
    let horizontal_areas = horizontal.split(vertical_areas[0]);
    horizontal_areas[0]
}

fn dim_italic(msg: &str) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::styled(
        msg,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
}

pub(crate) fn draw_model_selector_popup(
    f: &mut Frame,
    area: Rect,
    selector: &mut ModelSelectorState,
    models: &[String],
) {
    let popup_rect = popup_area(area, 60, 50);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Select model (Alt+M) ");

    let inner = block.inner(popup_rect);
    f.render_widget(Clear, popup_rect);
    f.render_widget(block, popup_rect);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);
    let filter_area = chunks[0];
    let list_area = chunks[1];
    let hint_area = chunks[2];

    let filter_content = if selector.filter.is_empty() {
        Span::styled("Filter... ", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(selector.filter.as_str())
    };
    let filter_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let filter_inner = filter_block.inner(filter_area);
    let filter_para = Paragraph::new(Line::from(filter_content))
        .block(filter_block)
        .style(Style::default().fg(Color::White));
    f.render_widget(filter_para, filter_area);
    let cx = filter_inner.x
        + selector
            .filter
            .chars()
            .count()
            .min(filter_inner.width as usize) as u16;
    f.set_cursor_position(Position::new(cx, filter_area.y + 1));

    let filtered = filter_models(models, &selector.filter);
    if filtered.is_empty() {
        let msg = if models.is_empty() {
            "No models available"
        } else {
            "No models match filter"
        };
        f.render_widget(dim_italic(msg), list_area);
    } else {
        selector.selected_index = selector
            .selected_index
            .min(filtered.len().saturating_sub(1));

        let items: Vec<ListItem> = filtered
            .iter()
            .map(|m| ListItem::new(format!(" {} ", m)))
            .collect();

        selector.list_state.select(Some(selector.selected_index));

        let list =
            List::new(items).highlight_style(Style::default().fg(Color::Black).bg(ACCENT));
        f.render_stateful_widget(list, list_area, &mut selector.list_state);
    }

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("↑↓ ", Style::default().fg(Color::DarkGray)),
        Span::raw("select  "),
        Span::styled("Enter ", Style::default().fg(Color::DarkGray)),
        Span::raw("confirm  "),
        Span::styled("Esc ", Style::default().fg(Color::DarkGray)),
        Span::raw("cancel  "),
        Span::styled("type ", Style::default().fg(Color::DarkGray)),
        Span::raw("filter"),
    ]));
    f.render_widget(hint, hint_area);
}
