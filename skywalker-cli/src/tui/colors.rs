//! Color and style helpers for severity and status indicators

use ratatui::style::{Color, Modifier, Style};
use skywalker_core::models::{FindingStatus, RiskLevel, Severity};

/// Get the color for a given severity level
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::High => Color::LightRed,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Blue,
    }
}

/// Get the styled representation for a severity level
/// Critical severity is bold
pub fn severity_style(severity: Severity) -> Style {
    let style = Style::default().fg(severity_color(severity));
    if matches!(severity, Severity::Critical) {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Get the color for an overall risk level
pub fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::LightRed,
        RiskLevel::Critical => Color::Red,
    }
}

/// Get the color for a header finding status
pub fn finding_status_color(status: FindingStatus) -> Color {
    match status {
        FindingStatus::Pass => Color::Green,
        FindingStatus::Fail => Color::Red,
        FindingStatus::Warning => Color::Yellow,
    }
}

/// Get the color for a 0-100 posture score
pub fn score_color(score: f64) -> Color {
    if score > 80.0 {
        Color::Green
    } else if score > 50.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colors() {
        assert_eq!(severity_color(Severity::Critical), Color::Red);
        assert_eq!(severity_color(Severity::High), Color::LightRed);
        assert_eq!(severity_color(Severity::Medium), Color::Yellow);
        assert_eq!(severity_color(Severity::Low), Color::Blue);
    }

    #[test]
    fn test_severity_style_critical_is_bold() {
        let style = severity_style(Severity::Critical);
        assert_eq!(style.fg, Some(Color::Red));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_risk_colors() {
        assert_eq!(risk_color(RiskLevel::Low), Color::Green);
        assert_eq!(risk_color(RiskLevel::Critical), Color::Red);
    }

    #[test]
    fn test_score_color_bands() {
        assert_eq!(score_color(95.0), Color::Green);
        assert_eq!(score_color(65.0), Color::Yellow);
        assert_eq!(score_color(30.0), Color::Red);
    }

    #[test]
    fn test_finding_status_colors() {
        assert_eq!(finding_status_color(FindingStatus::Pass), Color::Green);
        assert_eq!(finding_status_color(FindingStatus::Fail), Color::Red);
        assert_eq!(finding_status_color(FindingStatus::Warning), Color::Yellow);
    }
}
