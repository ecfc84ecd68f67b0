//! Audit operations dashboard

use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Gauge, List, ListItem, Paragraph, Row, Table, Wrap},
    Frame,
};

use skywalker_core::i18n::scan_module_description;
use skywalker_core::models::{ScanModule, Severity};

use crate::tui::app::{App, RiskModal, ThreatModal};
use crate::tui::colors::{score_color, severity_style};

/// Render the dashboard view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(area);

    render_main(frame, app, chunks[0]);
    render_side(frame, app, chunks[1]);

    if let Some(ref modal) = app.dashboard.threat_modal {
        render_threat_modal(frame, app, modal);
    }
    if let Some(ref modal) = app.dashboard.risk_modal {
        render_risk_modal(frame, app, modal);
    }
}

fn render_main(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(5),
        ])
        .split(area);

    render_target_input(frame, app, chunks[0]);
    render_modules(frame, app, chunks[1]);

    if app.dashboard.scanning {
        render_progress(frame, app, chunks[2]);
    } else if app.dashboard.report.is_some() {
        render_report(frame, app, chunks[2]);
    } else {
        render_idle(frame, app, chunks[2]);
    }
}

fn render_target_input(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let state = &app.dashboard;

    let content = if state.target_input.is_empty() && !state.editing {
        Span::styled(labels.dash_placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(state.target_input.as_str())
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
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", labels.dash_title)),
    );

    frame.render_widget(input, area);
}

fn render_modules(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let state = &app.dashboard;

    let mut spans = Vec::new();
    for (i, module) in ScanModule::ALL.iter().enumerate() {
        let selected = state.selected_modules.contains(module);
        let marker = if selected { "[x] " } else { "[ ] " };
        let mut style = if selected {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if i == state.module_cursor {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!("{marker}{}  ", module.label()), style));
    }

    let cursor_module = ScanModule::ALL[state.module_cursor];
    let text = vec![
        Line::from(spans),
        Line::from(Span::styled(
            scan_module_description(cursor_module, app.language),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let modules = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.dash_modules)),
    );
    frame.render_widget(modules, area);
}

fn render_idle(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            labels.dash_neural_core,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            format!("Enter/s: {}", labels.dash_start),
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ];

    let idle = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(idle, area);
}

fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let state = &app.dashboard;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} {} ", labels.dash_analyzing, state.target_input)),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(state.scan_progress.clamp(0.0, 100.0) as u16);
    frame.render_widget(gauge, chunks[0]);

    let items: Vec<ListItem> = state
        .scan_task_list
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let (marker, style) = if i < state.scan_step {
                ("[ok] ", Style::default().fg(Color::Green))
            } else if i == state.scan_step {
                ("[>>] ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            } else {
                ("[..] ", Style::default().fg(Color::DarkGray))
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(task.as_str(), style),
            ]))
        })
        .collect();

    let tasks = List::new(items).block(Block::default().borders(Borders::ALL));
    frame.render_widget(tasks, chunks[1]);
}

fn render_report(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let Some(ref report) = app.dashboard.report else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(4),
            Constraint::Length(6),
        ])
        .split(area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", labels.dash_node_posture)),
        )
        .gauge_style(Style::default().fg(score_color(report.score)))
        .percent(report.score.clamp(0.0, 100.0) as u16)
        .label(format!("{:.0}/100", report.score));
    frame.render_widget(gauge, chunks[0]);

    let summary = Paragraph::new(report.summary.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", labels.dash_exec_summary)),
        );
    frame.render_widget(summary, chunks[1]);

    render_risks(frame, app, chunks[2]);
    render_recon(frame, app, chunks[3]);
}

fn render_risks(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let Some(ref report) = app.dashboard.report else {
        return;
    };

    let header = Row::new(vec![
        labels.col_risk,
        labels.col_severity,
        labels.col_category,
        labels.col_cve,
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let filtered = app.dashboard.filtered_risks(report);
    let rows: Vec<Row> = filtered
        .iter()
        .enumerate()
        .map(|(i, risk)| {
            let row = Row::new(vec![
                Cell::from(risk.name.as_str()),
                Cell::from(risk.severity.as_str()).style(severity_text_style(&risk.severity)),
                Cell::from(risk.category.as_str()),
                Cell::from(risk.cve.as_deref().unwrap_or("-")),
            ]);
            if i == app.dashboard.risk_cursor {
                row.style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(9),
            Constraint::Length(14),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " {} {} ",
                filtered.len(),
                labels.dash_risks_identified
            ))
            .title_bottom(filter_line(app).right_aligned()),
    );

    frame.render_widget(table, area);
}

fn filter_line(app: &App) -> Line<'_> {
    let state = &app.dashboard;
    if state.filter_editing {
        Line::from(vec![
            Span::styled(" / ", Style::default().fg(Color::Cyan)),
            Span::raw(state.risk_filter.as_str()),
            Span::styled("_ ", Style::default().fg(Color::Cyan)),
        ])
    } else if state.risk_filter.is_empty() {
        Line::from(Span::styled(
            format!(" / {} ", app.labels().dash_filter_hint),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            format!(" / {} ", state.risk_filter),
            Style::default().fg(Color::Cyan),
        ))
    }
}

fn render_recon(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let Some(ref report) = app.dashboard.report else {
        return;
    };

    let items: Vec<ListItem> = report
        .reconnaissance
        .iter()
        .map(|finding| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", finding.kind),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(finding.value.as_str()),
                Span::styled(
                    format!("  [{}]", finding.status),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let recon = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.dash_recon_assets)),
    );
    frame.render_widget(recon, area);
}

fn render_side(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_intel(frame, app, chunks[0]);
    render_history(frame, app, chunks[1]);
}

fn render_intel(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let state = &app.dashboard;

    let items: Vec<ListItem> = if state.loading_threats {
        vec![ListItem::new(Span::styled(
            labels.dash_syncing,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        state
            .threats
            .iter()
            .enumerate()
            .map(|(i, threat)| {
                let style = if i == state.threat_cursor {
                    Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            format!("[{}] ", severity_short(threat.impact)),
                            severity_style(threat.impact),
                        ),
                        Span::styled(threat.title.as_str(), style),
                    ]),
                    Line::from(Span::styled(
                        format!("    {}", threat.date),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect()
    };

    let intel = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.dash_intel_feed)),
    );
    frame.render_widget(intel, area);
}

fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let history = &app.dashboard.history;

    let items: Vec<ListItem> = if history.is_empty() {
        vec![ListItem::new(Span::styled(
            labels.dash_no_logs,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        history
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>3.0} ", entry.score),
                        Style::default().fg(score_color(entry.score)),
                    ),
                    Span::raw(entry.url.as_str()),
                    Span::styled(
                        format!("  {}", entry.date),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.dash_op_history)),
    );
    frame.render_widget(list, area);
}

fn render_threat_modal(frame: &mut Frame, app: &App, modal: &ThreatModal) {
    let labels = app.labels();
    let area = modal_area(frame.area());
    frame.render_widget(Clear, area);

    let mut text = vec![
        Line::from(Span::styled(
            modal.report.title.as_str(),
            severity_style(modal.report.impact).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{}  {}", modal.report.date, modal.report.tags.join(" / ")),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(modal.report.summary.as_str()),
        Line::from(""),
    ];

    if modal.busy {
        text.push(Line::from(Span::styled(
            labels.chat_processing,
            Style::default().fg(Color::DarkGray),
        )));
    } else if let Some(ref analysis) = modal.analysis {
        text.extend(analysis.lines().map(|l| Line::from(l.to_string())));
    }

    let dialog = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", labels.dash_tech_impact)),
    );
    frame.render_widget(dialog, area);
}

fn render_risk_modal(frame: &mut Frame, app: &App, modal: &RiskModal) {
    let labels = app.labels();
    let area = modal_area(frame.area());
    frame.render_widget(Clear, area);

    let mut text = vec![
        Line::from(Span::styled(
            modal.name.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(ref dive) = modal.dive {
        text.extend(dive.explanation.lines().map(|l| Line::from(l.to_string())));
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            labels.dive_payload,
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )));
        text.push(Line::from(Span::styled(
            dive.payload.as_str(),
            Style::default().fg(Color::Magenta),
        )));
        text.push(Line::from(""));
        for (i, step) in dive.poc_steps.iter().enumerate() {
            text.push(Line::from(format!("  {}. {}", i + 1, step)));
        }
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            labels.dive_remediation,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        text.extend(dive.remediation.lines().map(|l| Line::from(l.to_string())));
    }

    if let Some(ref summary) = modal.summary {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            labels.dash_exec_summary,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        text.extend(summary.lines().map(|l| Line::from(l.to_string())));
    }

    if modal.busy {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            labels.chat_processing,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let dialog = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" {} ", labels.dash_tech_impact)),
    );
    frame.render_widget(dialog, area);
}

fn modal_area(area: Rect) -> Rect {
    let [area] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn severity_short(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "CRIT",
        Severity::High => "HIGH",
        Severity::Medium => "MED",
        Severity::Low => "LOW",
    }
}

/// Style for the free-text severity strings a scan report carries
fn severity_text_style(severity: &str) -> Style {
    match severity.to_lowercase().as_str() {
        "critical" => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        "high" => Style::default().fg(Color::LightRed),
        "medium" => Style::default().fg(Color::Yellow),
        "low" => Style::default().fg(Color::Blue),
        _ => Style::default(),
    }
}
