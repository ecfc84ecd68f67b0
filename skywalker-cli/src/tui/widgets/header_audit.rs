//! HTTP header audit view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::colors::{finding_status_color, risk_color, score_color};

/// Render the header audit view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_input(frame, app, chunks[0]);
    render_result(frame, app, chunks[1]);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let state = &app.header_audit;

    let mut text: Vec<Line> = if state.input.is_empty() && !state.editing {
        vec![Line::from(Span::styled(
            labels.headers_subtitle,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        state.input.lines().map(|l| Line::from(l.to_string())).collect()
    };
    if state.editing {
        text.push(Line::from(Span::styled("_", Style::default().fg(Color::Cyan))));
    }

    let border = if state.editing { Color::Cyan } else { Color::DarkGray };
    let hint = if state.editing {
        format!(" {} ", labels.headers_hint_editing)
    } else {
        format!(" {} ", labels.headers_hint_idle)
    };
    let input = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", labels.headers_paste_label))
            .title_bottom(Line::from(hint).right_aligned()),
    );
    frame.render_widget(input, area);
}

fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let state = &app.header_audit;

    if state.busy {
        let busy = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                labels.headers_executing,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))
            .centered(),
        ])
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", labels.headers_title)));
        frame.render_widget(busy, area);
        return;
    }

    let Some(ref result) = state.result else {
        let idle = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(labels.headers_title, Style::default().add_modifier(Modifier::BOLD)))
                .centered(),
            Line::from(Span::styled(
                labels.headers_subtitle,
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(idle, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(4),
        ])
        .split(area);

    let title = Line::from(vec![
        Span::raw(format!(" {} (", labels.headers_posture_score)),
        Span::styled(
            result.risk_level.as_str(),
            Style::default().fg(risk_color(result.risk_level)),
        ),
        Span::raw(") "),
    ]);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(score_color(result.score)))
        .percent(result.score.clamp(0.0, 100.0) as u16)
        .label(format!("{:.0}/100", result.score));
    frame.render_widget(gauge, chunks[0]);

    let summary = Paragraph::new(result.summary.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", labels.headers_summary)),
        );
    frame.render_widget(summary, chunks[1]);

    let missing: Vec<Line> = if result.missing_headers.is_empty() {
        vec![Line::from(Span::styled(
            labels.headers_all_secure,
            Style::default().fg(Color::Green),
        ))]
    } else {
        result
            .missing_headers
            .iter()
            .map(|h| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", labels.headers_missing_marker),
                        Style::default().fg(Color::Red),
                    ),
                    Span::raw(h.as_str()),
                ])
            })
            .collect()
    };
    let missing = Paragraph::new(missing).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.headers_missing)),
    );
    frame.render_widget(missing, chunks[2]);

    render_findings(frame, app, chunks[3]);
}

fn render_findings(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let state = &app.header_audit;
    let Some(ref result) = state.result else {
        return;
    };

    let items: Vec<ListItem> = result
        .findings
        .iter()
        .enumerate()
        .map(|(i, finding)| {
            let selected = i == state.finding_cursor;
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("{:?} ", finding.status),
                    Style::default().fg(finding_status_color(finding.status)),
                ),
                Span::styled(
                    finding.header.as_str(),
                    if selected {
                        Style::default().add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    },
                ),
                Span::styled(
                    format!("  [{:?}]", finding.category),
                    Style::default().fg(Color::DarkGray),
                ),
            ])];
            // Selected finding expands to its full detail
            if selected {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {}: ", labels.headers_impact),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(finding.impact.as_str()),
                ]));
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {}: ", labels.headers_recommendation),
                        Style::default().fg(Color::Green),
                    ),
                    Span::raw(finding.recommendation.as_str()),
                ]));
                if let Some(ref snippet) = finding.remediation_snippet {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("  {}: ", labels.headers_snippet),
                            Style::default().fg(Color::Magenta),
                        ),
                        Span::styled(snippet.as_str(), Style::default().fg(Color::Magenta)),
                    ]));
                }
            }
            ListItem::new(lines)
        })
        .collect();

    let findings = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.headers_title)),
    );
    frame.render_widget(findings, area);
}
