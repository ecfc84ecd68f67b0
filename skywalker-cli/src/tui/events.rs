//! TUI Event handling

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use skywalker_core::models::{ScanModule, Severity};

use super::app::{App, View};

/// Event handling result
pub enum EventResult {
    /// Continue running
    Continue,
    /// Should quit
    Quit,
}

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Whether a text field currently captures keystrokes
fn editing(app: &App) -> bool {
    match app.view {
        View::Dashboard => app.dashboard.editing || app.dashboard.filter_editing,
        View::HeaderAudit => app.header_audit.editing,
        View::CveHub => app.cve_hub.editing,
        View::VulnExplainer => app.vuln_explainer.editing,
        View::Chat => app.chat.editing,
        _ => false,
    }
}

/// Route a keystroke into the active text field
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C always reaches the quit dialog, even mid-edit
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.confirm_quit = true;
        return;
    }

    match app.view {
        View::Dashboard if app.dashboard.filter_editing => match key.code {
            KeyCode::Esc | KeyCode::Enter => app.dashboard.filter_editing = false,
            KeyCode::Backspace => {
                app.dashboard.risk_filter.pop();
                app.dashboard.risk_cursor = 0;
            }
            KeyCode::Char(c) => {
                app.dashboard.risk_filter.push(c);
                app.dashboard.risk_cursor = 0;
            }
            _ => {}
        },
        View::Dashboard => match key.code {
            KeyCode::Esc => app.dashboard.editing = false,
            KeyCode::Enter => {
                app.dashboard.editing = false;
                app.start_scan();
            }
            KeyCode::Backspace => {
                app.dashboard.target_input.pop();
            }
            KeyCode::Char(c) => app.dashboard.target_input.push(c),
            _ => {}
        },
        // The header field is multiline; Enter inserts a newline and Esc
        // leaves editing, after which `r` runs the audit
        View::HeaderAudit => match key.code {
            KeyCode::Esc => app.header_audit.editing = false,
            KeyCode::Enter => app.header_audit.input.push('\n'),
            KeyCode::Backspace => {
                app.header_audit.input.pop();
            }
            KeyCode::Char(c) => app.header_audit.input.push(c),
            _ => {}
        },
        View::CveHub => match key.code {
            KeyCode::Esc | KeyCode::Enter => app.cve_hub.editing = false,
            KeyCode::Backspace => {
                app.cve_hub.query.pop();
                app.cve_hub.cursor = 0;
            }
            KeyCode::Char(c) => {
                app.cve_hub.query.push(c);
                app.cve_hub.cursor = 0;
            }
            _ => {}
        },
        View::VulnExplainer => match key.code {
            KeyCode::Esc => app.vuln_explainer.editing = false,
            KeyCode::Enter => {
                app.vuln_explainer.editing = false;
                let query = app.vuln_explainer.query.clone();
                app.explain(query);
            }
            KeyCode::Backspace => {
                app.vuln_explainer.query.pop();
            }
            KeyCode::Char(c) => app.vuln_explainer.query.push(c),
            _ => {}
        },
        View::Chat => match key.code {
            KeyCode::Esc => app.chat.editing = false,
            KeyCode::Enter => app.send_chat(),
            KeyCode::Backspace => {
                app.chat.input.pop();
            }
            KeyCode::Char(c) => app.chat.input.push(c),
            _ => {}
        },
        _ => {}
    }
}

/// Cycle the CVE severity filter one step
fn cycle_severity(current: Option<Severity>) -> Option<Severity> {
    match current {
        None => Some(Severity::Critical),
        Some(Severity::Critical) => Some(Severity::High),
        Some(Severity::High) => Some(Severity::Medium),
        Some(Severity::Medium) => Some(Severity::Low),
        Some(Severity::Low) => None,
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    // Modals swallow input while open
    if app.dashboard.threat_modal.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.dashboard.threat_modal = None;
        }
        return;
    }
    if app.dashboard.risk_modal.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.dashboard.risk_modal = None;
        }
        return;
    }

    match key.code {
        KeyCode::Char('e') => app.dashboard.editing = true,
        // Substring filter over the identified risks
        KeyCode::Char('/') if app.dashboard.report.is_some() => {
            app.dashboard.filter_editing = true;
        }
        KeyCode::Char('/') => app.dashboard.editing = true,
        KeyCode::Char('s') => app.start_scan(),
        KeyCode::Char('r') => app.refresh_threats(),
        KeyCode::Left => {
            app.dashboard.module_cursor =
                app.dashboard.module_cursor.checked_sub(1).unwrap_or(ScanModule::ALL.len() - 1);
        }
        KeyCode::Right => {
            app.dashboard.module_cursor = (app.dashboard.module_cursor + 1) % ScanModule::ALL.len();
        }
        KeyCode::Char(' ') => {
            app.toggle_module(ScanModule::ALL[app.dashboard.module_cursor]);
        }
        KeyCode::Char('a') => app.toggle_all_modules(),
        KeyCode::Up | KeyCode::Char('k') => {
            app.dashboard.risk_cursor = app.dashboard.risk_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let risks = app
                .dashboard
                .report
                .as_ref()
                .map_or(0, |r| app.dashboard.filtered_risks(r).len());
            if app.dashboard.risk_cursor + 1 < risks {
                app.dashboard.risk_cursor += 1;
            }
        }
        KeyCode::Char('p') => {
            app.dashboard.threat_cursor = app.dashboard.threat_cursor.saturating_sub(1);
        }
        KeyCode::Char('n') => {
            if app.dashboard.threat_cursor + 1 < app.dashboard.threats.len() {
                app.dashboard.threat_cursor += 1;
            }
        }
        KeyCode::Char('t') => {
            if let Some(report) = app.dashboard.threats.get(app.dashboard.threat_cursor).cloned() {
                app.open_threat(report);
            }
        }
        KeyCode::Enter => {
            let risk = app.dashboard.report.as_ref().and_then(|report| {
                app.dashboard
                    .filtered_risks(report)
                    .get(app.dashboard.risk_cursor)
                    .map(|r| r.name.clone())
            });
            match risk {
                Some(name) => app.open_risk(name),
                None => app.start_scan(),
            }
        }
        _ => {}
    }
}

fn handle_view_key(app: &mut App, key: KeyEvent) {
    match app.view {
        View::Dashboard => handle_dashboard_key(app, key),
        View::HeaderAudit => match key.code {
            KeyCode::Char('i') | KeyCode::Char('e') => app.header_audit.editing = true,
            KeyCode::Char('r') | KeyCode::Enter => app.run_header_audit(),
            KeyCode::Char('x') => {
                app.header_audit.input.clear();
                app.header_audit.result = None;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.header_audit.finding_cursor = app.header_audit.finding_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let findings = app
                    .header_audit
                    .result
                    .as_ref()
                    .map_or(0, |r| r.findings.len());
                if app.header_audit.finding_cursor + 1 < findings {
                    app.header_audit.finding_cursor += 1;
                }
            }
            _ => {}
        },
        View::CveHub => match key.code {
            KeyCode::Char('r') => app.sync_cves(),
            KeyCode::Char('/') => app.cve_hub.editing = true,
            KeyCode::Char('f') => {
                app.cve_hub.severity_filter = cycle_severity(app.cve_hub.severity_filter);
                app.cve_hub.cursor = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.cve_hub.cursor = app.cve_hub.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if app.cve_hub.cursor + 1 < app.cve_hub.filtered().len() {
                    app.cve_hub.cursor += 1;
                }
            }
            KeyCode::Enter => {
                if app.cve_hub.cursor < app.cve_hub.filtered().len() {
                    app.cve_hub.detail = Some(app.cve_hub.cursor);
                }
            }
            KeyCode::Esc => app.cve_hub.detail = None,
            _ => {}
        },
        View::Owasp => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                app.owasp.cursor = app.owasp.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if app.owasp.cursor + 1 < super::widgets::owasp::STANDARDS.len() {
                    app.owasp.cursor += 1;
                }
            }
            KeyCode::Enter => {
                let standard = &super::widgets::owasp::STANDARDS[app.owasp.cursor];
                let index = app.owasp.cursor;
                app.request_advice(index, standard.rank, standard.title(app.language));
            }
            KeyCode::Esc => {
                app.owasp.open = None;
                app.owasp.advice = None;
            }
            _ => {}
        },
        View::VulnExplainer => match key.code {
            KeyCode::Char('/') | KeyCode::Char('i') => app.vuln_explainer.editing = true,
            KeyCode::Left => {
                app.vuln_explainer.category_cursor =
                    app.vuln_explainer.category_cursor.saturating_sub(1);
                app.vuln_explainer.item_cursor = 0;
            }
            KeyCode::Right => {
                if app.vuln_explainer.category_cursor + 1
                    < super::widgets::vuln_explainer::CATEGORIES.len()
                {
                    app.vuln_explainer.category_cursor += 1;
                    app.vuln_explainer.item_cursor = 0;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.vuln_explainer.item_cursor = app.vuln_explainer.item_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let category =
                    &super::widgets::vuln_explainer::CATEGORIES[app.vuln_explainer.category_cursor];
                if app.vuln_explainer.item_cursor + 1 < category.items.len() {
                    app.vuln_explainer.item_cursor += 1;
                }
            }
            KeyCode::Enter => {
                let category =
                    &super::widgets::vuln_explainer::CATEGORIES[app.vuln_explainer.category_cursor];
                let name = category.items[app.vuln_explainer.item_cursor].to_string();
                app.explain(name);
            }
            _ => {}
        },
        View::Chat => match key.code {
            KeyCode::Char('i') | KeyCode::Char('/') => app.chat.editing = true,
            KeyCode::Char('x') => {
                let language = app.language;
                app.chat.reset(language);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.chat.scroll = app.chat.scroll.saturating_add(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.chat.scroll = app.chat.scroll.saturating_sub(1);
            }
            _ => {}
        },
        View::Settings => match key.code {
            KeyCode::Char('l') => {
                let toggled = app.language.toggled();
                app.set_language(toggled);
            }
            KeyCode::Char('p') => app.settings.confirm_purge = true,
            KeyCode::Esc => app.navigate(View::Dashboard),
            _ => {}
        },
        View::Help | View::Disclaimer => {}
    }
}

/// Handle keyboard events
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Handle quit confirmation dialog
    if app.confirm_quit {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                app.should_quit = true;
                return EventResult::Quit;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                app.confirm_quit = false;
            }
            _ => {}
        }
        return EventResult::Continue;
    }

    // History purge confirmation
    if app.settings.confirm_purge {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => app.purge_history(),
            KeyCode::Char('n') | KeyCode::Esc => app.settings.confirm_purge = false,
            _ => {}
        }
        return EventResult::Continue;
    }

    // Text fields capture everything except Ctrl+C
    if editing(app) {
        handle_editing_key(app, key);
        return EventResult::Continue;
    }

    // The agreement gate only accepts, toggles language, or quits
    if app.view == View::Disclaimer {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => app.accept_disclaimer(),
            KeyCode::Char('l') => {
                let toggled = app.language.toggled();
                app.set_language(toggled);
            }
            KeyCode::Char('q') => app.confirm_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.confirm_quit = true;
            }
            _ => {}
        }
        return EventResult::Continue;
    }

    // Check for quit keys - show confirmation
    if key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        app.confirm_quit = true;
        return EventResult::Continue;
    }

    match key.code {
        // Navigation
        KeyCode::Char('1') => app.navigate(View::Dashboard),
        KeyCode::Char('2') => app.navigate(View::HeaderAudit),
        KeyCode::Char('3') => app.navigate(View::CveHub),
        KeyCode::Char('4') => app.navigate(View::Owasp),
        KeyCode::Char('5') => app.navigate(View::VulnExplainer),
        KeyCode::Char('6') => app.navigate(View::Chat),
        KeyCode::Char('7') => app.navigate(View::Settings),
        KeyCode::Char('?') => app.navigate(View::Help),
        KeyCode::Esc if app.view == View::Help => app.navigate(View::Dashboard),
        _ => handle_view_key(app, key),
    }

    EventResult::Continue
}

/// Process an event
#[allow(clippy::needless_pass_by_value)]
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) => {
            // Terminal resize - ratatui handles this automatically
            EventResult::Continue
        }
        _ => EventResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::test_support::offline_app;
    use skywalker_core::i18n::Language;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn accepted_app() -> (App, tokio::runtime::Runtime) {
        let (mut app, rt) = offline_app();
        app.accept_disclaimer();
        (app, rt)
    }

    #[test]
    fn test_quit_shows_confirmation() {
        let (mut app, _rt) = accepted_app();

        let result = handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(matches!(result, EventResult::Continue));
        assert!(app.confirm_quit);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_confirmation_yes() {
        let (mut app, _rt) = accepted_app();
        app.confirm_quit = true;

        let result = handle_key_event(&mut app, key(KeyCode::Char('y')));
        assert!(matches!(result, EventResult::Quit));
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_confirmation_no() {
        let (mut app, _rt) = accepted_app();
        app.confirm_quit = true;

        let result = handle_key_event(&mut app, key(KeyCode::Char('n')));
        assert!(matches!(result, EventResult::Continue));
        assert!(!app.confirm_quit);
    }

    #[test]
    fn test_ctrl_c_shows_confirmation() {
        let (mut app, _rt) = accepted_app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        handle_key_event(&mut app, key);
        assert!(app.confirm_quit);
    }

    #[test]
    fn test_number_navigation() {
        let (mut app, _rt) = accepted_app();

        handle_key_event(&mut app, key(KeyCode::Char('6')));
        assert_eq!(app.view, View::Chat);

        handle_key_event(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.view, View::CveHub);

        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.view, View::Help);
    }

    #[test]
    fn test_disclaimer_blocks_number_navigation() {
        let (mut app, _rt) = offline_app();
        assert_eq!(app.view, View::Disclaimer);

        handle_key_event(&mut app, key(KeyCode::Char('6')));
        assert_eq!(app.view, View::Disclaimer);

        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.view, View::Dashboard);
    }

    #[test]
    fn test_disclaimer_language_toggle() {
        let (mut app, _rt) = offline_app();
        assert_eq!(app.language, Language::En);

        handle_key_event(&mut app, key(KeyCode::Char('l')));
        assert_eq!(app.language, Language::Az);
    }

    #[test]
    fn test_dashboard_target_editing() {
        let (mut app, _rt) = accepted_app();

        handle_key_event(&mut app, key(KeyCode::Char('e')));
        assert!(app.dashboard.editing);

        for c in "acme.io".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c)));
        }
        handle_key_event(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.dashboard.target_input, "acme.i");

        // Typing a navigation digit goes into the field, not the router
        handle_key_event(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.dashboard.target_input, "acme.i3");
        assert_eq!(app.view, View::Dashboard);

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.dashboard.editing);
    }

    #[test]
    fn test_module_toggle_keys() {
        let (mut app, _rt) = accepted_app();
        app.dashboard.module_cursor = 0; // Xss, selected by default

        handle_key_event(&mut app, key(KeyCode::Char(' ')));
        assert!(!app.dashboard.selected_modules.contains(&ScanModule::Xss));

        handle_key_event(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.dashboard.selected_modules.len(), ScanModule::ALL.len());
    }

    #[test]
    fn test_module_cursor_wraps() {
        let (mut app, _rt) = accepted_app();

        handle_key_event(&mut app, key(KeyCode::Left));
        assert_eq!(app.dashboard.module_cursor, ScanModule::ALL.len() - 1);

        handle_key_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.dashboard.module_cursor, 0);
    }

    #[test]
    fn test_header_audit_multiline_editing() {
        let (mut app, _rt) = accepted_app();
        app.navigate(View::HeaderAudit);

        handle_key_event(&mut app, key(KeyCode::Char('i')));
        for c in "server: nginx".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c)));
        }
        handle_key_event(&mut app, key(KeyCode::Enter));
        for c in "x-powered-by: php".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c)));
        }

        assert_eq!(app.header_audit.input, "server: nginx\nx-powered-by: php");
        assert!(app.header_audit.editing);
    }

    #[test]
    fn test_cve_filter_cycles() {
        let (mut app, _rt) = accepted_app();
        app.navigate(View::CveHub);

        handle_key_event(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.cve_hub.severity_filter, Some(Severity::Critical));

        for _ in 0..4 {
            handle_key_event(&mut app, key(KeyCode::Char('f')));
        }
        assert_eq!(app.cve_hub.severity_filter, None);
    }

    #[test]
    fn test_purge_requires_confirmation() {
        let (mut app, _rt) = accepted_app();
        app.store.record_scan("a.com", 10.0).unwrap();
        app.dashboard.history = app.store.history().unwrap();
        app.navigate(View::Settings);

        handle_key_event(&mut app, key(KeyCode::Char('p')));
        assert!(app.settings.confirm_purge);
        assert_eq!(app.dashboard.history.len(), 1);

        handle_key_event(&mut app, key(KeyCode::Char('n')));
        assert!(!app.settings.confirm_purge);
        assert_eq!(app.dashboard.history.len(), 1);

        handle_key_event(&mut app, key(KeyCode::Char('p')));
        handle_key_event(&mut app, key(KeyCode::Char('y')));
        assert!(app.dashboard.history.is_empty());
    }

    #[test]
    fn test_settings_language_toggle_persists() {
        let (mut app, _rt) = accepted_app();
        app.navigate(View::Settings);

        handle_key_event(&mut app, key(KeyCode::Char('l')));
        assert_eq!(app.language, Language::Az);
        assert_eq!(app.store.language().unwrap(), Some(Language::Az));
    }

    #[test]
    fn test_threat_modal_closes_on_esc() {
        let (mut app, _rt) = accepted_app();
        app.dashboard.threat_modal = Some(crate::tui::app::ThreatModal {
            report: skywalker_core::models::ThreatReport {
                title: "t".into(),
                summary: "s".into(),
                impact: Severity::High,
                date: "2025-08-25".into(),
                tags: vec![],
            },
            analysis: None,
            busy: false,
        });

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(app.dashboard.threat_modal.is_none());
    }
}
