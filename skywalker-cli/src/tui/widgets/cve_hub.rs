//! Live CVE intelligence view

use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

use skywalker_core::models::CveInfo;

use crate::tui::app::App;
use crate::tui::colors::severity_style;

/// Render the CVE intelligence view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(4),
        ])
        .split(area);

    render_filter_bar(frame, app, chunks[0]);
    render_feed(frame, app, chunks[1]);
    render_sources(frame, app, chunks[2]);

    if let Some(index) = app.cve_hub.detail {
        if let Some(cve) = app.cve_hub.filtered().get(index).copied() {
            render_detail(frame, app, cve);
        }
    }
}

fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let state = &app.cve_hub;

    let filter = state
        .severity_filter
        .map_or(labels.cve_filter_all, |sev| sev.as_str());

    let query = if state.query.is_empty() && !state.editing {
        Span::styled(labels.cve_search_placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(state.query.as_str())
    };
    let cursor = if state.editing {
        Span::styled("_", Style::default().fg(Color::Cyan))
    } else {
        Span::raw("")
    };

    let line = Line::from(vec![
        Span::styled("f ", Style::default().fg(Color::Yellow)),
        Span::styled(format!("[{filter}]  "), Style::default().fg(Color::Cyan)),
        Span::styled("r ", Style::default().fg(Color::Yellow)),
        Span::raw(format!("{}  / ", labels.cve_sync)),
        query,
        cursor,
    ]);

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.cve_title)),
    );
    frame.render_widget(bar, area);
}

fn render_feed(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let state = &app.cve_hub;

    if state.loading {
        let loading = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                labels.cve_loading,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(Span::styled(
                labels.cve_synthesizing,
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(loading, area);
        return;
    }

    let filtered = state.filtered();
    if filtered.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                labels.cve_no_intel,
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        labels.col_id,
        labels.col_title,
        labels.col_severity,
        labels.col_cvss,
        labels.col_published,
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = filtered
        .iter()
        .enumerate()
        .map(|(i, cve)| {
            let labels = app.labels();
            let row = Row::new(vec![
                Cell::from(cve.id.as_str()),
                Cell::from(cve.title.as_str()),
                Cell::from(severity_cell(labels, cve)).style(severity_style(cve.severity)),
                Cell::from(format!("{:.1}", cve.cvss)),
                Cell::from(cve.date_published.as_str()),
            ]);
            if i == state.cursor {
                row.style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Min(24),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.cve_subtitle)),
    );
    frame.render_widget(table, area);
}

fn render_sources(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let lines: Vec<Line> = app
        .cve_hub
        .sources
        .iter()
        .take(2)
        .map(|source| {
            Line::from(vec![
                Span::styled(source.title.as_str(), Style::default().fg(Color::Cyan)),
                Span::styled(format!("  {}", source.uri), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let sources = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.cve_grounding)),
    );
    frame.render_widget(sources, area);
}

fn render_detail(frame: &mut Frame, app: &App, cve: &CveInfo) {
    let labels = app.labels();

    let [area] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::vertical([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(vec![
            Span::styled(
                cve.id.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(severity_cell(labels, cve), severity_style(cve.severity)),
            Span::styled(
                format!("  CVSS {:.1}", cve.cvss),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(Span::styled(
            cve.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            labels.cve_tech_desc,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(cve.description.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            labels.cve_target_scope,
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(cve.affected.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            format!("Esc: {}", labels.cve_close_report),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let dialog = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", labels.cve_risk_assess)),
    );
    frame.render_widget(dialog, area);
}

fn severity_cell(labels: &'static skywalker_core::i18n::Labels, cve: &CveInfo) -> &'static str {
    use skywalker_core::models::Severity;
    match cve.severity {
        Severity::Critical => labels.sev_critical,
        Severity::High => labels.sev_high,
        Severity::Medium => labels.sev_medium,
        Severity::Low => labels.sev_low,
    }
}
