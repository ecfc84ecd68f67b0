//! Usage agreement gate, shown until accepted

use ratatui::{
    layout::{Constraint, Flex, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;

/// Render the agreement over the whole frame
pub fn render(frame: &mut Frame, app: &App) {
    let labels = app.labels();

    let [area] = Layout::horizontal([Constraint::Max(78)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::vertical([Constraint::Max(20)])
        .flex(Flex::Center)
        .areas(area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            labels.disclaimer_warning,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
        Line::from(labels.disclaimer_body1),
        Line::from(""),
        Line::from(labels.disclaimer_body2),
        Line::from(""),
        Line::from(vec![
            Span::styled("  * ", Style::default().fg(Color::Yellow)),
            Span::raw(labels.disclaimer_clause1),
        ]),
        Line::from(vec![
            Span::styled("  * ", Style::default().fg(Color::Yellow)),
            Span::raw(labels.disclaimer_clause2),
        ]),
        Line::from(vec![
            Span::styled("  * ", Style::default().fg(Color::Yellow)),
            Span::raw(labels.disclaimer_clause3),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(format!(" {}   ", labels.disclaimer_accept)),
            Span::styled("l", Style::default().fg(Color::Yellow)),
            Span::raw(format!(" {}   ", labels.disclaimer_lang_toggle)),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" Quit"),
        ])
        .centered(),
    ];

    let dialog = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" {} ", labels.disclaimer_title)),
    );

    frame.render_widget(dialog, area);
}
