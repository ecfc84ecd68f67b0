//! Security knowledge engine view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

use skywalker_core::i18n::Language;

use crate::tui::app::App;

/// One knowledge domain of the vulnerability catalog
pub struct Category {
    name_en: &'static str,
    name_az: &'static str,
    pub items: &'static [&'static str],
}

impl Category {
    pub fn name(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.name_en,
            Language::Az => self.name_az,
        }
    }
}

/// Knowledge domains browsable without typing a query
pub static CATEGORIES: [Category; 4] = [
    Category {
        name_en: "Web & API",
        name_az: "Veb və API",
        items: &[
            "Cross-Site Scripting (XSS)",
            "SQL Injection (SQLi)",
            "Broken Access Control",
            "Server-Side Request Forgery (SSRF)",
            "Insecure Direct Object References (IDOR)",
            "API BOLA (Broken Object Level Authorization)",
        ],
    },
    Category {
        name_en: "Infrastructure & OS",
        name_az: "İnfrastruktur və ƏS",
        items: &[
            "Command Injection",
            "Directory Traversal",
            "Privilege Escalation",
            "Buffer Overflow",
            "Race Conditions",
        ],
    },
    Category {
        name_en: "Cloud & DevOps",
        name_az: "Bulud və DevOps",
        items: &[
            "S3 Bucket Misconfiguration",
            "Insecure Kubernetes API",
            "IAM Policy Over-permissioning",
            "Supply Chain Attack",
        ],
    },
    Category {
        name_en: "Modern Threats",
        name_az: "Müasir Təhdidlər",
        items: &[
            "Prompt Injection (LLM)",
            "Insecure Output Handling (LLM)",
            "Zero-Day Exploitation",
            "Subdomain Takeover",
        ],
    },
];

/// Render the knowledge engine view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_query(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);

    render_domains(frame, app, body[0]);
    render_advisory(frame, app, body[1]);
}

fn render_query(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let state = &app.vuln_explainer;

    let content = if state.query.is_empty() && !state.editing {
        Span::styled(labels.vuln_placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(state.query.as_str())
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
            .title(format!(" {} ", labels.vuln_title)),
    );

    frame.render_widget(input, area);
}

fn render_domains(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let state = &app.vuln_explainer;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let titles: Vec<Line> = CATEGORIES
        .iter()
        .map(|c| Line::from(c.name(app.language)))
        .collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", labels.vuln_domains)),
        )
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .select(state.category_cursor);
    frame.render_widget(tabs, chunks[0]);

    let category = &CATEGORIES[state.category_cursor];
    let items: Vec<ListItem> = category
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == state.item_cursor {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(*item)).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL));
    frame.render_widget(list, chunks[1]);
}

fn render_advisory(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let state = &app.vuln_explainer;

    let text: Vec<Line> = if state.busy {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                labels.vuln_analyzing,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(Span::styled(
                labels.vuln_consulting,
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        ]
    } else if let Some(ref result) = state.result {
        let mut lines = vec![Line::from(Span::styled(
            state.current.as_deref().unwrap_or_default().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        lines.push(Line::from(""));
        lines.extend(result.lines().map(|l| Line::from(l.to_string())));
        lines
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                labels.vuln_ready,
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(Span::styled(
                labels.vuln_ready_desc,
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        ]
    };

    let advisory = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.vuln_advisory)),
    );

    frame.render_widget(advisory, area);
}
