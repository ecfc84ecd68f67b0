//! TUI main loop runner

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame, Terminal,
};

use skywalker_core::i18n::help_bindings;

use super::app::{App, View};
use super::events::{handle_event, poll_event, EventResult};
use super::widgets::{chat, cve_hub, dashboard, disclaimer, header_audit, owasp, settings, vuln_explainer};

/// Views reachable from the tab bar, in key order
const TABS: [View; 7] = [
    View::Dashboard,
    View::HeaderAudit,
    View::CveHub,
    View::Owasp,
    View::VulnExplainer,
    View::Chat,
    View::Settings,
];

fn tab_index(view: View) -> Option<usize> {
    TABS.iter().position(|v| *v == view)
}

/// Render the current view
fn render(frame: &mut Frame, app: &App) {
    // The agreement gate owns the whole frame
    if app.view == View::Disclaimer {
        disclaimer::render(frame, app);
        if app.confirm_quit {
            render_quit_dialog(frame, app);
        }
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);

    match app.view {
        View::Dashboard => dashboard::render(frame, app, chunks[1]),
        View::HeaderAudit => header_audit::render(frame, app, chunks[1]),
        View::CveHub => cve_hub::render(frame, app, chunks[1]),
        View::Owasp => owasp::render(frame, app, chunks[1]),
        View::VulnExplainer => vuln_explainer::render(frame, app, chunks[1]),
        View::Chat => chat::render(frame, app, chunks[1]),
        View::Settings => settings::render(frame, app, chunks[1]),
        View::Help => render_help(frame, app, chunks[1]),
        View::Disclaimer => {}
    }

    render_footer(frame, app, chunks[2]);

    if app.confirm_quit {
        render_quit_dialog(frame, app);
    }
}

/// Render the navigation tab bar
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let titles = [
        labels.nav_dashboard,
        labels.nav_header_audit,
        labels.nav_cve_hub,
        labels.nav_compliance,
        labels.nav_vuln_db,
        labels.nav_ai_chat,
        labels.nav_settings,
    ];
    let titles: Vec<Line> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(*title),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Skywalker Security AI "),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(tab_index(app.view).unwrap_or(0));

    frame.render_widget(tabs, area);
}

/// Render the status footer
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let load = format!("cpu {:>3.0}%", app.system_load * 100.0);
    let help = Line::from(vec![
        Span::styled("1-7", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}  ", labels.footer_views)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}  ", labels.footer_help)),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}  ", labels.footer_quit)),
        Span::styled(load, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(
            format!("{} {}", labels.footer_uptime, app.elapsed_display()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", app.language.code()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let footer = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

/// Render quit confirmation dialog
fn render_quit_dialog(frame: &mut Frame, app: &App) {
    use ratatui::layout::Flex;
    use ratatui::widgets::Clear;

    let labels = app.labels();
    let area = frame.area();
    let dialog_width = 30;
    let dialog_height = 5;

    let [dialog_area] = Layout::horizontal([Constraint::Length(dialog_width)])
        .flex(Flex::Center)
        .areas(area);
    let [dialog_area] = Layout::vertical([Constraint::Length(dialog_height)])
        .flex(Flex::Center)
        .areas(dialog_area);

    frame.render_widget(Clear, dialog_area);

    let text = vec![
        Line::from(""),
        Line::from(labels.quit_confirm).centered(),
        Line::from(""),
    ];

    let dialog = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", labels.quit_title)),
    );

    frame.render_widget(dialog, dialog_area);
}

/// Render help view
fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();

    let mut help_text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            format!("  {}", labels.help_keybindings),
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];
    for (keys, action) in help_bindings(app.language) {
        help_text.push(Line::from(vec![
            Span::styled(format!("  {keys:<12}"), Style::default().fg(Color::Yellow)),
            Span::raw(*action),
        ]));
    }

    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.help_title)),
    );
    frame.render_widget(help, area);
}

/// Drain pending results from the task channel
fn drain_results(app: &mut App) {
    let mut results = Vec::new();
    while let Ok(result) = app.result_rx.try_recv() {
        results.push(result);
    }
    for result in results {
        app.apply(result);
    }
}

/// Run the TUI application
pub fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Main loop
    let result = run_loop(&mut terminal, app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    // Past the gate, prime the ticker right away
    if app.view != View::Disclaimer {
        app.refresh_threats();
    }

    loop {
        // Draw
        terminal.draw(|frame| render(frame, app))?;

        // Handle events
        if let Some(event) = poll_event(Duration::from_millis(100))? {
            match handle_event(app, event) {
                EventResult::Quit => break,
                EventResult::Continue => {}
            }
        }

        // Drain background task results
        drain_results(app);

        // Advance timers
        app.tick();

        // Check for quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::test_support::offline_app;

    #[test]
    fn test_tab_index_covers_all_views() {
        assert_eq!(tab_index(View::Dashboard), Some(0));
        assert_eq!(tab_index(View::Settings), Some(6));
        assert_eq!(tab_index(View::Help), None);
        assert_eq!(tab_index(View::Disclaimer), None);
    }

    #[test]
    fn test_drain_results_applies_in_order() {
        use crate::tui::channel::TaskResult;
        use skywalker_core::models::{DeepDive, ThreatReport};
        use skywalker_core::models::Severity;

        let (mut app, _rt) = offline_app();
        app.dashboard.risk_modal = Some(crate::tui::app::RiskModal {
            name: "SQL Injection".to_string(),
            dive: None,
            summary: None,
            busy: true,
        });

        // Feed results directly through apply, same as the loop does
        app.apply(TaskResult::Threats(Ok((
            vec![ThreatReport {
                title: "t".into(),
                summary: "s".into(),
                impact: Severity::Low,
                date: "d".into(),
                tags: vec![],
            }],
            vec![],
        ))));
        app.apply(TaskResult::RiskDive(Ok(DeepDive {
            explanation: "e".into(),
            payload: "p".into(),
            poc_steps: vec![],
            remediation: "r".into(),
        })));
        app.apply(TaskResult::RiskSummary(Ok("summary".into())));

        assert_eq!(app.dashboard.threats.len(), 1);
        let modal = app.dashboard.risk_modal.as_ref().unwrap();
        assert!(modal.dive.is_some());
        assert_eq!(modal.summary.as_deref(), Some("summary"));
        assert!(!modal.busy);
    }
}
