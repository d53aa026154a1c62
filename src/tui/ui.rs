// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: (C) 2025 Cranky Kernel <crankykernel@proton.me>

use chrono::{DateTime, Local};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

use super::app::{App, Mode};
use super::widgets::{centered_rect, create_help_widget};
use crate::epg::ProgramBlock;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // Main layout: Header, Content, Footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(size);

    draw_header(frame, app, chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);

    if app.mode == Mode::Help {
        let help_area = centered_rect(60, 80, size);
        frame.render_widget(Clear, help_area);
        frame.render_widget(create_help_widget(), help_area);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "Genie TV Guide — {}",
        app.now.format("%a %H:%M:%S")
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );

    frame.render_widget(header, area);
}

fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Channel list
            Constraint::Length(46), // Now/next detail
        ])
        .split(area);

    draw_channel_list(frame, app, chunks[0]);
    draw_detail_panel(frame, app, chunks[1]);
}

fn draw_channel_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" Channels ");

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    app.update_visible_height(inner_area.height as usize);

    if app.filtered_indices.is_empty() {
        let empty_msg = Paragraph::new("No channels match")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty_msg, inner_area);
        return;
    }

    let visible_height = inner_area.height as usize;
    let start = app.scroll_offset;
    let end = (start + visible_height).min(app.filtered_indices.len());

    let rows: Vec<(usize, String, String)> = app
        .visible_channels()
        .enumerate()
        .skip(start)
        .take(end - start)
        .map(|(index, channel)| {
            let schedule = app.schedule_for(channel);
            (index, channel.name.clone(), schedule.current.title)
        })
        .collect();

    let items: Vec<ListItem> = rows
        .into_iter()
        .map(|(index, name, now_playing)| {
            let marker = if index == app.selected_index {
                " ▶ "
            } else {
                "   "
            };
            let line = Line::from(vec![
                Span::raw(marker),
                Span::raw(format!("{:<26}", name)),
                Span::styled(now_playing, Style::default().fg(Color::DarkGray)),
            ]);
            let line = if index == app.selected_index {
                line.style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                line
            };
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));
    frame.render_widget(list, inner_area);
}

fn draw_detail_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Now & Next ");

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let Some(channel) = app.selected_channel() else {
        return;
    };
    let schedule = app.schedule_for(channel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Current programme
            Constraint::Length(3), // Progress
            Constraint::Length(3), // Next programme
        ])
        .split(inner_area);

    let current_lines = vec![
        Line::from(Span::styled(
            channel.name.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            schedule.current.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format_span(&schedule.current),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            schedule.current.description.clone(),
            Style::default().fg(Color::Gray),
        )),
    ];
    let current = Paragraph::new(current_lines).wrap(Wrap { trim: true });
    frame.render_widget(current, chunks[0]);

    let fraction = elapsed_fraction(app.now, &schedule.current);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .percent((fraction * 100.0) as u16)
        .label(app.now.format("%H:%M").to_string());
    frame.render_widget(gauge, chunks[1]);

    let next_lines = vec![
        Line::from(vec![
            Span::styled("Up Next: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                schedule.next.title.clone(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(Span::styled(
            format_span(&schedule.next),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let next = Paragraph::new(next_lines);
    frame.render_widget(next, chunks[2]);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer_text = match app.mode {
        Mode::Search => format!(" Search: {}▌  (Enter: apply, Esc: cancel) ", app.search_query),
        _ => format!(
            " Channel {} of {} | ↑↓/jk: Navigate | /: Search | ?: Help | q: Quit ",
            app.selected_index + 1,
            app.filtered_indices.len().max(1)
        ),
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(footer, area);
}

fn format_span(block: &ProgramBlock<Local>) -> String {
    format!(
        "{} - {}",
        block.start.format("%H:%M"),
        block.end.format("%H:%M")
    )
}

/// How far into the current block we are, for the progress gauge. This is
/// display math, not part of the generator contract.
fn elapsed_fraction(now: DateTime<Local>, block: &ProgramBlock<Local>) -> f64 {
    let total = (block.end - block.start).num_milliseconds() as f64;
    let elapsed = (now - block.start).num_milliseconds() as f64;
    (elapsed / total).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn block_at(start: DateTime<Local>) -> ProgramBlock<Local> {
        ProgramBlock {
            title: "Daily News".to_string(),
            start,
            end: start + Duration::hours(1),
            description: String::new(),
        }
    }

    #[test]
    fn elapsed_fraction_is_clamped() {
        let start = Local::now();
        let block = block_at(start);
        assert_eq!(elapsed_fraction(start - Duration::minutes(5), &block), 0.0);
        assert_eq!(elapsed_fraction(start + Duration::hours(2), &block), 1.0);
    }

    #[test]
    fn elapsed_fraction_at_midpoint() {
        let start = Local::now();
        let block = block_at(start);
        let fraction = elapsed_fraction(start + Duration::minutes(30), &block);
        assert!((fraction - 0.5).abs() < 1e-9);
    }
}
