//! System preferences view

use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use skywalker_core::i18n::Language;
use skywalker_core::store::HISTORY_CAP;

use crate::tui::app::App;

/// Render the settings view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let language_lines = vec![
        Line::from(Span::styled(
            labels.settings_lang_subtitle,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            lang_span(labels.settings_lang_en, app.language == Language::En),
            Span::raw("   "),
            lang_span(labels.settings_lang_az, app.language == Language::Az),
            Span::styled(
                format!("   {}", labels.settings_toggle_hint),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];
    let language = Paragraph::new(language_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.settings_lang_title)),
    );
    frame.render_widget(language, chunks[0]);

    let data_lines = vec![
        Line::from(Span::styled(
            labels.settings_data_subtitle,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(format!(
            "{} / {} {}",
            app.dashboard.history.len(),
            HISTORY_CAP,
            labels.dash_op_history
        )),
        Line::from(vec![
            Span::styled("p ", Style::default().fg(Color::Yellow)),
            Span::styled(labels.settings_clear, Style::default().fg(Color::Red)),
        ]),
    ];
    let data = Paragraph::new(data_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.settings_data_title)),
    );
    frame.render_widget(data, chunks[1]);

    if app.settings.confirm_purge {
        render_purge_dialog(frame, app);
    }
}

fn lang_span(label: &str, active: bool) -> Span<'_> {
    if active {
        Span::styled(
            format!("[{label}]"),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw(format!(" {label} "))
    }
}

fn render_purge_dialog(frame: &mut Frame, app: &App) {
    let labels = app.labels();

    let [area] = Layout::horizontal([Constraint::Max(64)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(labels.settings_clear_confirm),
        Line::from(""),
        Line::from(Span::styled("(y/n)", Style::default().fg(Color::Yellow))).centered(),
    ];
    let dialog = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" {} ", labels.settings_clear)),
    );
    frame.render_widget(dialog, area);
}
