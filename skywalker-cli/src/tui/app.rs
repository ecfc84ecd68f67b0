//! TUI Application state

use std::future::Future;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::warn;

use skywalker_core::config::AppConfig;
use skywalker_core::gateway::AiGateway;
use skywalker_core::i18n::{labels, scan_tasks, Labels, Language};
use skywalker_core::models::{
    ChatMessage, ComplianceAdvice, CveInfo, DeepDive, DomainScanReport, GroundingSource,
    HeaderAnalysisResult, ScanHistoryEntry, ScanModule, Severity, ThreatReport, TopRisk,
};
use skywalker_core::store::PreferenceStore;

use super::channel::TaskResult;

/// Active view in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Usage agreement gate; blocks all navigation until accepted
    Disclaimer,
    #[default]
    Dashboard,
    HeaderAudit,
    CveHub,
    Owasp,
    VulnExplainer,
    Chat,
    Settings,
    Help,
}

/// Impact analysis modal over the dashboard
pub struct ThreatModal {
    pub report: ThreatReport,
    pub analysis: Option<String>,
    pub busy: bool,
}

/// Deep dive modal for a selected scan risk
pub struct RiskModal {
    pub name: String,
    pub dive: Option<DeepDive>,
    pub summary: Option<String>,
    pub busy: bool,
}

/// Audit operations view state
pub struct DashboardState {
    pub target_input: String,
    pub editing: bool,
    pub selected_modules: Vec<ScanModule>,
    pub module_cursor: usize,
    pub scanning: bool,
    /// Localized progress steps for the running scan
    pub scan_task_list: Vec<String>,
    pub scan_step: usize,
    /// 0-100; capped at 90 until the result lands
    pub scan_progress: f64,
    last_step: Instant,
    pub report: Option<DomainScanReport>,
    pub risk_cursor: usize,
    pub risk_filter: String,
    pub filter_editing: bool,
    pub threats: Vec<ThreatReport>,
    pub threat_sources: Vec<GroundingSource>,
    pub loading_threats: bool,
    pub threat_cursor: usize,
    pub threat_modal: Option<ThreatModal>,
    pub risk_modal: Option<RiskModal>,
    pub history: Vec<ScanHistoryEntry>,
}

impl DashboardState {
    fn new(history: Vec<ScanHistoryEntry>) -> Self {
        Self {
            target_input: String::new(),
            editing: false,
            selected_modules: ScanModule::default_selection(),
            module_cursor: 0,
            scanning: false,
            scan_task_list: Vec::new(),
            scan_step: 0,
            scan_progress: 0.0,
            last_step: Instant::now(),
            report: None,
            risk_cursor: 0,
            risk_filter: String::new(),
            filter_editing: false,
            threats: Vec::new(),
            threat_sources: Vec::new(),
            loading_threats: false,
            threat_cursor: 0,
            threat_modal: None,
            risk_modal: None,
            history,
        }
    }

    /// Risks of the current report matching the substring filter
    pub fn filtered_risks<'a>(&self, report: &'a DomainScanReport) -> Vec<&'a TopRisk> {
        let query = self.risk_filter.to_lowercase();
        report
            .top_risks
            .iter()
            .filter(|risk| {
                query.is_empty()
                    || risk.name.to_lowercase().contains(&query)
                    || risk.category.to_lowercase().contains(&query)
            })
            .collect()
    }
}

/// Header audit view state
#[derive(Default)]
pub struct HeaderAuditState {
    pub input: String,
    pub editing: bool,
    pub busy: bool,
    pub result: Option<HeaderAnalysisResult>,
    pub finding_cursor: usize,
}

/// CVE intelligence view state
#[derive(Default)]
pub struct CveHubState {
    pub cves: Vec<CveInfo>,
    pub sources: Vec<GroundingSource>,
    pub loading: bool,
    pub severity_filter: Option<Severity>,
    pub query: String,
    pub editing: bool,
    pub cursor: usize,
    /// Index into the filtered list of the open detail report
    pub detail: Option<usize>,
}

impl CveHubState {
    /// CVEs matching the severity filter and search query
    pub fn filtered(&self) -> Vec<&CveInfo> {
        let query = self.query.to_lowercase();
        self.cves
            .iter()
            .filter(|cve| {
                self.severity_filter
                    .map_or(true, |sev| cve.severity == sev)
            })
            .filter(|cve| {
                query.is_empty()
                    || cve.id.to_lowercase().contains(&query)
                    || cve.title.to_lowercase().contains(&query)
                    || cve.affected.to_lowercase().contains(&query)
            })
            .collect()
    }
}

/// OWASP reference view state
#[derive(Default)]
pub struct OwaspState {
    pub cursor: usize,
    /// Standard index the open advisory belongs to
    pub open: Option<usize>,
    pub advice: Option<ComplianceAdvice>,
    pub busy: bool,
}

/// Knowledge engine view state
#[derive(Default)]
pub struct VulnExplainerState {
    pub query: String,
    pub editing: bool,
    pub busy: bool,
    /// Vulnerability the current result explains
    pub current: Option<String>,
    pub result: Option<String>,
    pub category_cursor: usize,
    pub item_cursor: usize,
}

/// Assistant chat view state
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub editing: bool,
    pub busy: bool,
    pub scroll: usize,
}

impl ChatState {
    fn new(language: Language) -> Self {
        Self {
            messages: vec![ChatMessage::model(labels(language).chat_initial)],
            input: String::new(),
            editing: false,
            busy: false,
            scroll: 0,
        }
    }

    /// Drop the conversation and re-greet in the given language
    pub fn reset(&mut self, language: Language) {
        self.messages = vec![ChatMessage::model(labels(language).chat_initial)];
        self.scroll = 0;
    }

    /// True when nothing beyond the greeting has been said
    pub fn is_pristine(&self) -> bool {
        self.messages.len() == 1
    }
}

/// Settings view state
#[derive(Default)]
pub struct SettingsState {
    pub confirm_purge: bool,
}

/// Interval between cosmetic load gauge updates
const WOBBLE_INTERVAL: Duration = Duration::from_secs(5);

/// TUI Application state
pub struct App {
    pub view: View,
    pub should_quit: bool,
    pub confirm_quit: bool,
    pub language: Language,
    pub store: PreferenceStore,
    gateway: AiGateway,
    runtime: Handle,
    tx: mpsc::Sender<TaskResult>,
    pub result_rx: mpsc::Receiver<TaskResult>,
    pub start_time: Instant,
    /// Cosmetic CPU gauge, 0.10 to 0.80
    pub system_load: f64,
    last_wobble: Instant,

    pub dashboard: DashboardState,
    pub header_audit: HeaderAuditState,
    pub cve_hub: CveHubState,
    pub owasp: OwaspState,
    pub vuln_explainer: VulnExplainerState,
    pub chat: ChatState,
    pub settings: SettingsState,
}

impl App {
    /// Create a new app instance; the stored preferences override the
    /// configured defaults
    pub fn new(config: &AppConfig, store: PreferenceStore, gateway: AiGateway, runtime: Handle) -> Self {
        let language = store
            .language()
            .unwrap_or_default()
            .unwrap_or(config.default_language);
        let accepted = store.disclaimer_accepted().unwrap_or(false);
        let history = store.history().unwrap_or_default();
        let (tx, result_rx) = mpsc::channel(64);

        Self {
            view: if accepted { View::Dashboard } else { View::Disclaimer },
            should_quit: false,
            confirm_quit: false,
            language,
            store,
            gateway,
            runtime,
            tx,
            result_rx,
            start_time: Instant::now(),
            system_load: 0.35,
            last_wobble: Instant::now(),
            dashboard: DashboardState::new(history),
            header_audit: HeaderAuditState::default(),
            cve_hub: CveHubState::default(),
            owasp: OwaspState::default(),
            vuln_explainer: VulnExplainerState::default(),
            chat: ChatState::new(language),
            settings: SettingsState::default(),
        }
    }

    /// Label table for the active language
    pub fn labels(&self) -> &'static Labels {
        labels(self.language)
    }

    /// Navigate to a view; blocked until the disclaimer is accepted
    pub fn navigate(&mut self, view: View) {
        if self.view == View::Disclaimer && view != View::Disclaimer {
            return;
        }
        self.view = view;
        // The CVE feed loads on first visit, manual refresh after that
        if view == View::CveHub && self.cve_hub.cves.is_empty() && !self.cve_hub.loading {
            self.sync_cves();
        }
    }

    /// Accept the usage agreement and enter the dashboard
    pub fn accept_disclaimer(&mut self) {
        if let Err(e) = self.store.accept_disclaimer() {
            warn!("failed to persist disclaimer acceptance: {e}");
        }
        self.view = View::Dashboard;
        self.refresh_threats();
    }

    /// Switch interface language and persist the choice
    pub fn set_language(&mut self, language: Language) {
        if self.language == language {
            return;
        }
        if let Err(e) = self.store.set_language(language) {
            warn!("failed to persist language: {e}");
        }
        self.language = language;
        // Re-greet only when the conversation has not started
        if self.chat.is_pristine() {
            self.chat.reset(language);
        }
    }

    /// Advance timers: scan step ticker and the cosmetic load gauge
    pub fn tick(&mut self) {
        if self.last_wobble.elapsed() >= WOBBLE_INTERVAL {
            self.last_wobble = Instant::now();
            let n = self.start_time.elapsed().subsec_nanos();
            self.system_load = 0.10 + 0.70 * f64::from(n % 1000) / 1000.0;
        }

        if self.dashboard.scanning && self.dashboard.last_step.elapsed() >= Duration::from_secs(1) {
            self.dashboard.last_step = Instant::now();
            let total = self.dashboard.scan_task_list.len();
            if self.dashboard.scan_step + 1 < total {
                self.dashboard.scan_step += 1;
                self.dashboard.scan_progress =
                    (self.dashboard.scan_step as f64 / total as f64) * 90.0;
            }
        }
    }

    fn spawn_task<F>(&self, task: F)
    where
        F: Future<Output = TaskResult> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let _ = tx.send(task.await).await;
        });
    }

    /// Fetch the threat intelligence ticker feed
    pub fn refresh_threats(&mut self) {
        if self.dashboard.loading_threats {
            return;
        }
        self.dashboard.loading_threats = true;
        let gateway = self.gateway.clone();
        self.spawn_task(async move { TaskResult::Threats(gateway.latest_threat_intel().await) });
    }

    /// Kick off a domain scan for the entered target
    pub fn start_scan(&mut self) {
        let url = self.dashboard.target_input.trim().to_string();
        if url.is_empty() || self.dashboard.scanning {
            return;
        }

        let mut tasks: Vec<String> = scan_tasks(self.language)
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        tasks.extend(
            self.dashboard
                .selected_modules
                .iter()
                .map(|m| m.label().to_string()),
        );

        self.dashboard.scanning = true;
        self.dashboard.report = None;
        self.dashboard.risk_cursor = 0;
        self.dashboard.risk_filter.clear();
        self.dashboard.scan_task_list = tasks;
        self.dashboard.scan_step = 0;
        self.dashboard.scan_progress = 0.0;
        self.dashboard.last_step = Instant::now();

        let gateway = self.gateway.clone();
        let modules = self.dashboard.selected_modules.clone();
        let target = url.clone();
        self.spawn_task(async move {
            TaskResult::Scan {
                url,
                result: gateway.analyze_domain(&target, &modules).await,
            }
        });
    }

    /// Open the impact modal for a ticker threat
    pub fn open_threat(&mut self, report: ThreatReport) {
        self.dashboard.threat_modal = Some(ThreatModal {
            report: report.clone(),
            analysis: None,
            busy: true,
        });
        let gateway = self.gateway.clone();
        self.spawn_task(async move { TaskResult::ThreatImpact(gateway.threat_impact(&report).await) });
    }

    /// Open the deep dive modal for a scan risk; the executive summary is
    /// generated right after a successful dive
    pub fn open_risk(&mut self, name: String) {
        self.dashboard.risk_modal = Some(RiskModal {
            name: name.clone(),
            dive: None,
            summary: None,
            busy: true,
        });
        let gateway = self.gateway.clone();
        let tx = self.tx.clone();
        let domain = self.dashboard.target_input.trim().to_string();
        let domain = (!domain.is_empty()).then_some(domain);
        self.runtime.spawn(async move {
            let dive = gateway
                .vulnerability_deep_dive(&name, domain.as_deref(), None)
                .await;
            match dive {
                Ok(dive) => {
                    let summary = gateway.executive_summary(&name, &dive).await;
                    let _ = tx.send(TaskResult::RiskDive(Ok(dive))).await;
                    let _ = tx.send(TaskResult::RiskSummary(summary)).await;
                }
                Err(e) => {
                    let _ = tx.send(TaskResult::RiskDive(Err(e))).await;
                }
            }
        });
    }

    /// Run a header audit over the pasted block
    pub fn run_header_audit(&mut self) {
        let raw = self.header_audit.input.trim().to_string();
        if raw.is_empty() || self.header_audit.busy {
            return;
        }
        self.header_audit.busy = true;
        self.header_audit.result = None;
        self.header_audit.finding_cursor = 0;
        let gateway = self.gateway.clone();
        self.spawn_task(async move { TaskResult::HeaderAudit(gateway.analyze_headers(&raw).await) });
    }

    /// Refresh the CVE feed
    pub fn sync_cves(&mut self) {
        if self.cve_hub.loading {
            return;
        }
        self.cve_hub.loading = true;
        self.cve_hub.detail = None;
        let gateway = self.gateway.clone();
        self.spawn_task(async move { TaskResult::Cves(gateway.live_cves().await) });
    }

    /// Request the mitigation guide for an OWASP standard
    pub fn request_advice(&mut self, index: usize, rank: &str, title: &str) {
        if self.owasp.busy {
            return;
        }
        self.owasp.busy = true;
        self.owasp.open = Some(index);
        self.owasp.advice = None;
        let gateway = self.gateway.clone();
        let rank = rank.to_string();
        let title = title.to_string();
        self.spawn_task(async move { TaskResult::Advice(gateway.compliance_advice(&rank, &title).await) });
    }

    /// Ask the knowledge engine about a vulnerability
    pub fn explain(&mut self, name: String) {
        if name.trim().is_empty() || self.vuln_explainer.busy {
            return;
        }
        self.vuln_explainer.busy = true;
        self.vuln_explainer.current = Some(name.clone());
        self.vuln_explainer.result = None;
        let gateway = self.gateway.clone();
        self.spawn_task(async move { TaskResult::Explanation(gateway.explain_vulnerability(&name).await) });
    }

    /// Send the typed chat message
    pub fn send_chat(&mut self) {
        let message = self.chat.input.trim().to_string();
        if message.is_empty() || self.chat.busy {
            return;
        }
        self.chat.input.clear();
        self.chat.busy = true;
        // History sent to the model excludes the message being added now
        let history = self.chat.messages.clone();
        self.chat.messages.push(ChatMessage::user(&message));
        let gateway = self.gateway.clone();
        self.spawn_task(async move { TaskResult::ChatReply(gateway.chat(&history, &message).await) });
    }

    /// Delete all persisted scan history
    pub fn purge_history(&mut self) {
        if let Err(e) = self.store.clear_history() {
            warn!("failed to purge history: {e}");
            return;
        }
        self.dashboard.history.clear();
        self.settings.confirm_purge = false;
    }

    /// Apply one background task result to the view state
    pub fn apply(&mut self, result: TaskResult) {
        match result {
            TaskResult::Threats(Ok((threats, sources))) => {
                self.dashboard.threats = threats;
                self.dashboard.threat_sources = sources;
                self.dashboard.threat_cursor = 0;
                self.dashboard.loading_threats = false;
            }
            TaskResult::Threats(Err(e)) => {
                warn!("threat feed failed: {e}");
                self.dashboard.loading_threats = false;
            }
            TaskResult::ThreatImpact(result) => {
                if let Some(ref mut modal) = self.dashboard.threat_modal {
                    modal.busy = false;
                    match result {
                        Ok(analysis) => modal.analysis = Some(analysis),
                        Err(e) => warn!("threat impact failed: {e}"),
                    }
                }
            }
            TaskResult::Scan { url, result } => {
                self.dashboard.scanning = false;
                match result {
                    Ok(report) => {
                        self.dashboard.scan_progress = 100.0;
                        match self.store.record_scan(&url, report.score) {
                            Ok(_) => {
                                self.dashboard.history =
                                    self.store.history().unwrap_or_default();
                            }
                            Err(e) => warn!("failed to record scan: {e}"),
                        }
                        self.dashboard.report = Some(report);
                    }
                    Err(e) => warn!("domain scan failed: {e}"),
                }
            }
            TaskResult::RiskDive(result) => {
                if let Some(ref mut modal) = self.dashboard.risk_modal {
                    match result {
                        Ok(dive) => modal.dive = Some(dive),
                        Err(e) => {
                            modal.busy = false;
                            warn!("deep dive failed: {e}");
                        }
                    }
                }
            }
            TaskResult::RiskSummary(result) => {
                if let Some(ref mut modal) = self.dashboard.risk_modal {
                    modal.busy = false;
                    match result {
                        Ok(summary) => modal.summary = Some(summary),
                        Err(e) => warn!("executive summary failed: {e}"),
                    }
                }
            }
            TaskResult::HeaderAudit(result) => {
                self.header_audit.busy = false;
                match result {
                    Ok(analysis) => self.header_audit.result = Some(analysis),
                    Err(e) => warn!("header audit failed: {e}"),
                }
            }
            TaskResult::Cves(result) => {
                self.cve_hub.loading = false;
                match result {
                    Ok((cves, sources)) => {
                        self.cve_hub.cves = cves;
                        self.cve_hub.sources = sources;
                        self.cve_hub.cursor = 0;
                    }
                    Err(e) => warn!("CVE feed failed: {e}"),
                }
            }
            TaskResult::Advice(result) => {
                self.owasp.busy = false;
                match result {
                    Ok(advice) => self.owasp.advice = Some(advice),
                    Err(e) => warn!("compliance advice failed: {e}"),
                }
            }
            TaskResult::Explanation(result) => {
                self.vuln_explainer.busy = false;
                match result {
                    Ok(text) => self.vuln_explainer.result = Some(text),
                    Err(e) => warn!("explanation failed: {e}"),
                }
            }
            TaskResult::ChatReply(result) => {
                self.chat.busy = false;
                match result {
                    Ok(reply) => self
                        .chat
                        .messages
                        .push(ChatMessage::model(reply.text).with_sources(reply.sources)),
                    Err(_) => self
                        .chat
                        .messages
                        .push(ChatMessage::model("Connection failed.")),
                }
            }
        }
    }

    /// Toggle one scan module in the selection
    pub fn toggle_module(&mut self, module: ScanModule) {
        if let Some(pos) = self
            .dashboard
            .selected_modules
            .iter()
            .position(|m| *m == module)
        {
            self.dashboard.selected_modules.remove(pos);
        } else {
            self.dashboard.selected_modules.push(module);
        }
    }

    /// Select every module, or none when all are already selected
    pub fn toggle_all_modules(&mut self) {
        if self.dashboard.selected_modules.len() == ScanModule::ALL.len() {
            self.dashboard.selected_modules.clear();
        } else {
            self.dashboard.selected_modules = ScanModule::ALL.to_vec();
        }
    }

    /// Format elapsed time for display
    pub fn elapsed_display(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        let mins = secs / 60;
        let hours = mins / 60;

        if hours > 0 {
            format!("{}h {:02}m {:02}s", hours, mins % 60, secs % 60)
        } else if mins > 0 {
            format!("{}m {:02}s", mins, secs % 60)
        } else {
            format!("{}s", secs)
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use async_trait::async_trait;
    use skywalker_core::gemini::{GenerateRequest, GenerateResponse, GenerativeModel};
    use skywalker_core::Error;

    use super::*;

    /// Backend that always fails; view-state tests never hit the network
    struct OfflineModel;

    #[async_trait]
    impl GenerativeModel for OfflineModel {
        async fn generate(
            &self,
            _request: GenerateRequest,
        ) -> skywalker_core::Result<GenerateResponse> {
            Err(Error::Provider("offline".to_string()))
        }
    }

    /// App over the given store and an offline backend. The returned
    /// runtime must stay alive for the app's handle to be valid.
    pub fn offline_app_with(store: PreferenceStore) -> (App, tokio::runtime::Runtime) {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let gateway = AiGateway::new(Arc::new(OfflineModel));
        let app = App::new(&AppConfig::default(), store, gateway, runtime.handle().clone());
        (app, runtime)
    }

    /// App over a fresh in-memory store
    pub fn offline_app() -> (App, tokio::runtime::Runtime) {
        offline_app_with(PreferenceStore::open_in_memory().expect("store"))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::offline_app;
    use super::*;

    #[test]
    fn test_disclaimer_gates_navigation() {
        let (mut app, _rt) = offline_app();
        assert_eq!(app.view, View::Disclaimer);

        app.navigate(View::Chat);
        assert_eq!(app.view, View::Disclaimer);

        app.accept_disclaimer();
        assert_eq!(app.view, View::Dashboard);
        assert!(app.store.disclaimer_accepted().unwrap());

        app.navigate(View::Chat);
        assert_eq!(app.view, View::Chat);
    }

    #[test]
    fn test_accepted_store_skips_gate() {
        let store = PreferenceStore::open_in_memory().unwrap();
        store.accept_disclaimer().unwrap();
        store.set_language(Language::Az).unwrap();

        let (app, _rt) = super::test_support::offline_app_with(store);
        assert_eq!(app.view, View::Dashboard);
        assert_eq!(app.language, Language::Az);
    }

    #[test]
    fn test_set_language_persists_and_regreets() {
        let (mut app, _rt) = offline_app();
        let en_greeting = app.chat.messages[0].text.clone();

        app.set_language(Language::Az);
        assert_eq!(app.store.language().unwrap(), Some(Language::Az));
        assert_ne!(app.chat.messages[0].text, en_greeting);
    }

    #[test]
    fn test_language_switch_keeps_started_conversation() {
        let (mut app, _rt) = offline_app();
        app.chat.messages.push(ChatMessage::user("hello"));

        app.set_language(Language::Az);
        assert_eq!(app.chat.messages.len(), 2);
        assert_eq!(app.chat.messages[1].text, "hello");
    }

    #[test]
    fn test_scan_ticker_caps_at_ninety_percent() {
        let (mut app, _rt) = offline_app();
        app.dashboard.scan_task_list = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        app.dashboard.scanning = true;

        for _ in 0..20 {
            app.dashboard.last_step = Instant::now() - Duration::from_secs(2);
            app.tick();
        }

        assert_eq!(app.dashboard.scan_step, 3);
        assert!(app.dashboard.scan_progress <= 90.0);
    }

    #[test]
    fn test_scan_result_records_history() {
        let (mut app, _rt) = offline_app();
        let report = DomainScanReport {
            score: 77.0,
            category_scores: vec![],
            summary: "ok".into(),
            reconnaissance: vec![],
            top_risks: vec![],
            technologies: vec![],
            remediation: "none".into(),
            sources: vec![],
        };
        app.dashboard.scanning = true;

        app.apply(TaskResult::Scan {
            url: "example.com".into(),
            result: Ok(report),
        });

        assert!(!app.dashboard.scanning);
        assert_eq!(app.dashboard.scan_progress, 100.0);
        assert_eq!(app.dashboard.history.len(), 1);
        assert_eq!(app.dashboard.history[0].url, "example.com");
        assert_eq!(app.dashboard.history[0].score, 77.0);
    }

    #[test]
    fn test_chat_error_appends_connection_failed() {
        let (mut app, _rt) = offline_app();
        app.chat.busy = true;
        app.apply(TaskResult::ChatReply(Err(skywalker_core::Error::Provider(
            "boom".into(),
        ))));

        assert!(!app.chat.busy);
        let last = app.chat.messages.last().unwrap();
        assert_eq!(last.text, "Connection failed.");
    }

    #[test]
    fn test_module_toggles() {
        let (mut app, _rt) = offline_app();
        assert_eq!(app.dashboard.selected_modules.len(), 3);

        app.toggle_module(ScanModule::Xss);
        assert!(!app.dashboard.selected_modules.contains(&ScanModule::Xss));

        app.toggle_all_modules();
        assert_eq!(app.dashboard.selected_modules.len(), ScanModule::ALL.len());
        app.toggle_all_modules();
        assert!(app.dashboard.selected_modules.is_empty());
    }

    #[test]
    fn test_cve_filtering() {
        let (mut app, _rt) = offline_app();
        app.cve_hub.cves = vec![
            CveInfo {
                id: "CVE-2025-1".into(),
                title: "Router RCE".into(),
                description: String::new(),
                severity: Severity::Critical,
                cvss: 9.8,
                affected: "acme-router".into(),
                date_published: "2025-08-20".into(),
            },
            CveInfo {
                id: "CVE-2025-2".into(),
                title: "Library DoS".into(),
                description: String::new(),
                severity: Severity::Low,
                cvss: 3.1,
                affected: "libfoo".into(),
                date_published: "2025-08-21".into(),
            },
        ];

        assert_eq!(app.cve_hub.filtered().len(), 2);

        app.cve_hub.severity_filter = Some(Severity::Critical);
        assert_eq!(app.cve_hub.filtered().len(), 1);

        app.cve_hub.severity_filter = None;
        app.cve_hub.query = "libfoo".into();
        let hits = app.cve_hub.filtered();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "CVE-2025-2");
    }

    #[test]
    fn test_chat_reset_leaves_one_greeting() {
        let (mut app, _rt) = offline_app();
        app.chat.messages.push(ChatMessage::user("question"));
        app.chat.messages.push(ChatMessage::model("answer"));

        app.chat.reset(app.language);
        assert_eq!(app.chat.messages.len(), 1);
        assert!(app.chat.is_pristine());
    }

    #[test]
    fn test_risk_filter_matches_name_and_category() {
        let (mut app, _rt) = offline_app();
        let report = DomainScanReport {
            score: 50.0,
            category_scores: vec![],
            summary: String::new(),
            reconnaissance: vec![],
            top_risks: vec![
                TopRisk {
                    name: "Reflected XSS in search".into(),
                    severity: "High".into(),
                    category: "Injection".into(),
                    cve: None,
                },
                TopRisk {
                    name: "Missing HSTS".into(),
                    severity: "Medium".into(),
                    category: "Headers".into(),
                    cve: None,
                },
            ],
            technologies: vec![],
            remediation: String::new(),
            sources: vec![],
        };

        app.dashboard.risk_filter = "xss".into();
        assert_eq!(app.dashboard.filtered_risks(&report).len(), 1);

        app.dashboard.risk_filter = "headers".into();
        let hits = app.dashboard.filtered_risks(&report);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Missing HSTS");

        app.dashboard.risk_filter.clear();
        assert_eq!(app.dashboard.filtered_risks(&report).len(), 2);
    }

    #[test]
    fn test_scan_submit_ignored_while_running() {
        let (mut app, _rt) = offline_app();
        app.dashboard.target_input = "example.com".into();
        app.start_scan();
        assert!(app.dashboard.scanning);

        app.dashboard.scan_step = 2;
        app.dashboard.scan_progress = 45.0;
        app.start_scan();

        // The running scan keeps its progress; nothing was restarted
        assert_eq!(app.dashboard.scan_step, 2);
        assert_eq!(app.dashboard.scan_progress, 45.0);
    }

    #[test]
    fn test_failed_scan_reenables_input() {
        let (mut app, _rt) = offline_app();
        app.dashboard.scanning = true;

        app.apply(TaskResult::Scan {
            url: "example.com".into(),
            result: Err(skywalker_core::Error::Provider("down".into())),
        });

        assert!(!app.dashboard.scanning);
        assert!(app.dashboard.report.is_none());
        assert!(app.dashboard.history.is_empty());
    }

    #[test]
    fn test_header_audit_submit_ignored_while_busy() {
        let (mut app, _rt) = offline_app();
        app.header_audit.input = "x: y".into();
        app.header_audit.busy = true;
        app.header_audit.finding_cursor = 3;

        app.run_header_audit();

        assert!(app.header_audit.busy);
        assert_eq!(app.header_audit.finding_cursor, 3);
    }

    #[test]
    fn test_failed_header_audit_reenables_input() {
        let (mut app, _rt) = offline_app();
        app.header_audit.busy = true;

        app.apply(TaskResult::HeaderAudit(Err(skywalker_core::Error::Decode(
            "bad shape".into(),
        ))));

        assert!(!app.header_audit.busy);
        assert!(app.header_audit.result.is_none());
    }

    #[test]
    fn test_chat_submit_ignored_while_busy() {
        let (mut app, _rt) = offline_app();
        app.chat.busy = true;
        app.chat.input = "hello".into();

        app.send_chat();

        // The pending reply keeps the input queued, not sent
        assert_eq!(app.chat.input, "hello");
        assert_eq!(app.chat.messages.len(), 1);
    }

    #[test]
    fn test_purge_history() {
        let (mut app, _rt) = offline_app();
        app.store.record_scan("a.com", 10.0).unwrap();
        app.dashboard.history = app.store.history().unwrap();
        assert_eq!(app.dashboard.history.len(), 1);

        app.purge_history();
        assert!(app.dashboard.history.is_empty());
        assert!(app.store.history().unwrap().is_empty());
    }
}
