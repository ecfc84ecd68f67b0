//! AI assistant chat view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use skywalker_core::models::ChatRole;

use crate::tui::app::App;

/// Render the chat view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(area);

    render_transcript(frame, app, chunks[0]);
    render_input(frame, app, chunks[1]);
}

fn render_transcript(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let state = &app.chat;

    let mut lines: Vec<Line> = Vec::new();
    for message in &state.messages {
        let (name, color) = match message.role {
            ChatRole::User => (labels.chat_you, Color::Green),
            ChatRole::Model => (labels.chat_assistant_name, Color::Cyan),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{name} "),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                message.timestamp.format("%H:%M").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.extend(message.text.lines().map(|l| Line::from(format!("  {l}"))));
        if !message.sources.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", labels.chat_references),
                Style::default().fg(Color::DarkGray),
            )));
            for source in &message.sources {
                lines.push(Line::from(Span::styled(
                    format!("    {} ({})", source.title, source.uri),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        lines.push(Line::from(""));
    }
    if state.busy {
        lines.push(Line::from(Span::styled(
            labels.chat_processing,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    // Stick to the bottom of the conversation, offset by manual scroll
    let visible = area.height.saturating_sub(2) as usize;
    let offset = lines
        .len()
        .saturating_sub(visible)
        .saturating_sub(state.scroll);

    let status = if state.busy {
        labels.chat_processing
    } else {
        labels.chat_online
    };
    let transcript = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} [{}] ", labels.chat_assistant_name, status)),
        );
    frame.render_widget(transcript, area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let state = &app.chat;

    let content = if state.input.is_empty() && !state.editing {
        Span::styled(labels.chat_placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(state.input.as_str())
    };
    let cursor = if state.editing {
        Span::styled("_", Style::default().fg(Color::Cyan))
    } else {
        Span::raw("")
    };

    let border = if state.editing { Color::Cyan } else { Color::DarkGray };
    let input = Paragraph::new(Line::from(vec![content, cursor])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(input, area);
}
