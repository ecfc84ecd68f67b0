//! OWASP Top 10 reference view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use skywalker_core::i18n::Language;
use skywalker_core::models::Severity;

use crate::tui::app::App;
use crate::tui::colors::severity_style;

/// One OWASP Top 10 standard
pub struct OwaspStandard {
    pub rank: &'static str,
    pub severity: Severity,
    title_en: &'static str,
    title_az: &'static str,
    desc_en: &'static str,
    desc_az: &'static str,
}

impl OwaspStandard {
    pub fn title(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.title_en,
            Language::Az => self.title_az,
        }
    }

    pub fn description(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.desc_en,
            Language::Az => self.desc_az,
        }
    }
}

/// OWASP Top 10 (2021) catalog
pub static STANDARDS: [OwaspStandard; 10] = [
    OwaspStandard {
        rank: "A01",
        severity: Severity::Critical,
        title_en: "Broken Access Control",
        title_az: "Sındırılmış Giriş Nəzarəti",
        desc_en: "Failure to enforce restrictions on what authenticated users can do.",
        desc_az: "Autentifikasiya olunmuş istifadəçilərin edə biləcəyi məhdudiyyətlərin yerinə yetirilməməsi.",
    },
    OwaspStandard {
        rank: "A02",
        severity: Severity::High,
        title_en: "Cryptographic Failures",
        title_az: "Kriptoqrafik Xətalar",
        desc_en: "Exposure of sensitive data due to weak encryption or insecure storage.",
        desc_az: "Zəif şifrələmə və ya qeyri-təhlükəsiz saxlama səbəbindən həssas məlumatların ifşası.",
    },
    OwaspStandard {
        rank: "A03",
        severity: Severity::High,
        title_en: "Injection",
        title_az: "İnyeksiya",
        desc_en: "Unsanitized user data reaching database queries or OS commands.",
        desc_az: "Məlumat bazası sorğularına və ya ƏS əmrlərinə çatan təmizlənməmiş istifadəçi məlumatları.",
    },
    OwaspStandard {
        rank: "A04",
        severity: Severity::Medium,
        title_en: "Insecure Design",
        title_az: "Qeyri-təhlükəsiz Dizayn",
        desc_en: "Architectural flaws where security controls were never properly planned.",
        desc_az: "Təhlükəsizlik nəzarətinin heç vaxt düzgün planlaşdırılmadığı memarlıq qüsurları.",
    },
    OwaspStandard {
        rank: "A05",
        severity: Severity::Medium,
        title_en: "Security Misconfiguration",
        title_az: "Səhv Təhlükəsizlik Konfiqurasiyası",
        desc_en: "Unpatched flaws, default accounts, or detailed error messages.",
        desc_az: "Yamaqlanmamış qüsurlar, standart hesablar və ya ətraflı xəta mesajları.",
    },
    OwaspStandard {
        rank: "A06",
        severity: Severity::Medium,
        title_en: "Vulnerable Components",
        title_az: "Zəif Komponentlər",
        desc_en: "Using outdated or compromised third-party libraries.",
        desc_az: "Köhnəlmiş və ya təhlükə altına alınmış üçüncü tərəf kitabxanalarından istifadə.",
    },
    OwaspStandard {
        rank: "A07",
        severity: Severity::High,
        title_en: "Auth Failures",
        title_az: "Autentifikasiya Xətaları",
        desc_en: "Weak password policies or lack of MFA permitting credential stuffing.",
        desc_az: "Zəif şifrə siyasəti və ya MFA-nın olmaması.",
    },
    OwaspStandard {
        rank: "A08",
        severity: Severity::High,
        title_en: "Software/Data Integrity",
        title_az: "Proqram/Məlumat Bütövlüyü",
        desc_en: "Code or data from untrusted sources without validation.",
        desc_az: "Doğrulanmadan etibarsız mənbələrdən gələn kod və ya məlumat.",
    },
    OwaspStandard {
        rank: "A09",
        severity: Severity::Medium,
        title_en: "Logging & Monitoring",
        title_az: "Loqlama və Monitorinq",
        desc_en: "Insufficient logging allowing attackers to remain undetected.",
        desc_az: "Təcavüzkarların aşkar edilməməsinə imkan verən qeyri-kafi loqlama.",
    },
    OwaspStandard {
        rank: "A10",
        severity: Severity::Medium,
        title_en: "SSRF",
        title_az: "SSRF",
        desc_en: "Inducing the server into making requests to internal resources.",
        desc_az: "Serveri daxili resurslara sorğular etməyə vadar etmək.",
    },
];

/// Render the OWASP reference view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_catalog(frame, app, chunks[0]);
    render_advisory(frame, app, chunks[1]);
}

fn render_catalog(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let header = Row::new(vec!["#", labels.col_standard, labels.col_severity])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = STANDARDS
        .iter()
        .enumerate()
        .map(|(i, std)| {
            let row = Row::new(vec![
                Cell::from(std.rank),
                Cell::from(std.title(app.language)),
                Cell::from(severity_label(labels, std.severity)).style(severity_style(std.severity)),
            ]);
            if i == app.owasp.cursor {
                row.style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Min(20),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.owasp_title)),
    );

    frame.render_widget(table, area);
}

fn render_advisory(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let standard = &STANDARDS[app.owasp.cursor];

    let mut text = vec![
        Line::from(vec![
            Span::styled(standard.rank, Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            Span::styled(
                standard.title(app.language),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(standard.description(app.language)),
        Line::from(""),
    ];

    if app.owasp.busy {
        text.push(Line::from(Span::styled(
            labels.cve_synthesizing,
            Style::default().fg(Color::DarkGray),
        )));
    } else if let Some(ref advice) = app.owasp.advice {
        text.push(section_title(labels.owasp_root_cause, Color::Cyan));
        text.push(Line::from(advice.root_cause.as_str()));
        text.push(Line::from(""));

        text.push(section_title(labels.owasp_mitigations, Color::Green));
        for (i, m) in advice.mitigations.iter().enumerate() {
            text.push(Line::from(format!("  {}. {}", i + 1, m)));
        }
        text.push(Line::from(""));

        text.push(section_title(labels.owasp_verification, Color::Yellow));
        for procedure in &advice.testing_procedures {
            text.push(Line::from(format!("  - {procedure}")));
        }
        text.push(Line::from(""));

        text.push(section_title(labels.owasp_compliance, Color::Magenta));
        text.push(Line::from(advice.compliance_impact.as_str()));
    } else {
        text.push(Line::from(Span::styled(
            format!("Enter: {}", labels.owasp_mitigation_guide),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let advisory = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", labels.owasp_mitigation_guide)),
    );

    frame.render_widget(advisory, area);
}

fn section_title(title: &str, color: Color) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn severity_label(labels: &'static skywalker_core::i18n::Labels, severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => labels.sev_critical,
        Severity::High => labels.sev_high,
        Severity::Medium => labels.sev_medium,
        Severity::Low => labels.sev_low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_top_ten() {
        assert_eq!(STANDARDS.len(), 10);
        assert_eq!(STANDARDS[0].rank, "A01");
        assert_eq!(STANDARDS[9].rank, "A10");
    }

    #[test]
    fn test_titles_localized() {
        let a01 = &STANDARDS[0];
        assert_eq!(a01.title(Language::En), "Broken Access Control");
        assert_ne!(a01.title(Language::Az), a01.title(Language::En));
    }

    #[test]
    fn test_broken_access_control_is_critical() {
        assert_eq!(STANDARDS[0].severity, Severity::Critical);
    }
}
