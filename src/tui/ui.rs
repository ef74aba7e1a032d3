//! Rendering for the search TUI
//!
//! One frame = search bar, result list, pagination footer, status bar.
//! While a fetch is in flight the list area shows a loading placeholder
//! and the footer is suppressed, so stale controls cannot be clicked.

use crate::format_count;
use crate::tui::app::{App, SearchPhase};
use crate::tui::colors;
use chrono::{DateTime, Utc};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Result list
            Constraint::Length(1), // Pagination footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_search_bar(frame, app, chunks[0]);
    draw_results(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    // Show cursor in the search bar when it has focus
    if app.input.focused {
        // Border (1) + leading space (1)
        let cursor_x = chunks[0].x + 2 + app.input.cursor_column();
        let cursor_y = chunks[0].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.input.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search ");

    let paragraph = Paragraph::new(format!(" {}", app.input.query))
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = if app.results.is_empty() {
        " Results ".to_string()
    } else {
        format!(" Results ({}) ", format_count(app.total_count))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Loading masks whatever was on screen before
    if app.is_loading() {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(loading, inner);
        return;
    }

    if app.results.is_empty() {
        let text = match app.phase {
            SearchPhase::Loaded => "No repositories found.",
            _ => "Type to search GitHub repositories.",
        };
        let placeholder = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    }

    app.list.visible_rows = inner.height as usize;

    let start = app.list.scroll_offset;
    let end = (start + app.list.visible_rows).min(app.results.len());

    let lines: Vec<Line> = (start..end)
        .map(|i| {
            let repo = &app.results[i];
            let is_selected = app.list.selected == Some(i);

            let marker = if is_selected { "▶ " } else { "  " };
            let name_style = Style::default()
                .fg(colors::color_for_language(repo.language.as_deref()))
                .add_modifier(Modifier::BOLD);

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(repo.full_name.clone(), name_style),
                Span::styled(
                    format!("  ★ {}", format_count(repo.stargazers_count)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("  {}", colors::language_label(repo.language.as_deref())),
                    Style::default().fg(Color::Gray),
                ),
            ];
            if let Some(updated) = &repo.updated_at {
                spans.push(Span::styled(
                    format!("  {}", format_relative(updated)),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if let Some(description) = &repo.description {
                spans.push(Span::styled(
                    format!("  {}", description),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            let line = Line::from(spans);
            if is_selected {
                line.style(Style::default().bg(Color::Rgb(40, 40, 50)))
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    // No footer while loading or while pagination is idle
    if app.is_loading() || app.pager.is_idle() {
        return;
    }

    let mut spans = Vec::new();
    if app.pager.has_prev() {
        spans.push(Span::styled("◀ Prev", Style::default().fg(Color::Cyan)));
    }
    spans.push(Span::styled(
        format!(" [{}] ", app.pager.page()),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    if app.pager.has_next() {
        spans.push(Span::styled("Next ▶", Style::default().fg(Color::Cyan)));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = format!(" {}", app.status_message);
    let right_text = " Tab:Focus  ↑↓:Select  ←→:Page  Enter:Open  Ctrl+Q:Quit ";

    // Left-aligned message + padding + right-aligned key hints
    let available_width = area.width as usize;
    let left_width = left_text.width();
    let right_width = right_text.width();

    let status_str = if left_width + right_width < available_width {
        let padding = available_width - left_width - right_width;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        left_text
    };

    let status = Paragraph::new(status_str)
        .style(Style::default().fg(Color::White).bg(Color::Rgb(0, 95, 135)));

    frame.render_widget(status, area);
}

/// Short relative form of a repository's last-update time
fn format_relative(updated: &DateTime<Utc>) -> String {
    let delta = Utc::now().signed_duration_since(*updated);
    let days = delta.num_days();
    if days >= 365 {
        format!("{}y ago", days / 365)
    } else if days >= 30 {
        format!("{}mo ago", days / 30)
    } else if days >= 1 {
        format!("{}d ago", days)
    } else if delta.num_hours() >= 1 {
        format!("{}h ago", delta.num_hours())
    } else {
        "just now".to_string()
    }
}
