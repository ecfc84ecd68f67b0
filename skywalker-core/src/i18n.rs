//! Interface language and static label tables.
//!
//! Every user-visible string lives here in both languages so views never
//! hardcode text. Labels are `&'static str`; switching language swaps the
//! whole table at once.

use serde::{Deserialize, Serialize};

/// Supported interface languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Az,
}

impl Language {
    /// Two-letter code used by the preference store
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Az => "az",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "az" => Some(Language::Az),
            _ => None,
        }
    }

    /// The other language, for the toggle action
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Az,
            Language::Az => Language::En,
        }
    }
}

/// All user-visible labels for one language
#[derive(Debug)]
pub struct Labels {
    // Navigation
    pub nav_dashboard: &'static str,
    pub nav_header_audit: &'static str,
    pub nav_cve_hub: &'static str,
    pub nav_compliance: &'static str,
    pub nav_vuln_db: &'static str,
    pub nav_ai_chat: &'static str,
    pub nav_settings: &'static str,
    pub nav_filter: &'static str,
    pub nav_no_results: &'static str,
    pub cpu: &'static str,
    pub system_status: &'static str,
    pub operational: &'static str,
    pub created: &'static str,
    pub footer_views: &'static str,
    pub footer_help: &'static str,
    pub footer_quit: &'static str,
    pub footer_uptime: &'static str,
    pub quit_title: &'static str,
    pub quit_confirm: &'static str,
    pub help_title: &'static str,
    pub help_keybindings: &'static str,

    // Disclaimer
    pub disclaimer_title: &'static str,
    pub disclaimer_warning: &'static str,
    pub disclaimer_body1: &'static str,
    pub disclaimer_body2: &'static str,
    pub disclaimer_clause1: &'static str,
    pub disclaimer_clause2: &'static str,
    pub disclaimer_clause3: &'static str,
    pub disclaimer_accept: &'static str,
    pub disclaimer_lang_toggle: &'static str,

    // Dashboard
    pub dash_title: &'static str,
    pub dash_intel_feed: &'static str,
    pub dash_syncing: &'static str,
    pub dash_node_posture: &'static str,
    pub dash_neural_core: &'static str,
    pub dash_placeholder: &'static str,
    pub dash_start: &'static str,
    pub dash_modules: &'static str,
    pub dash_toggle_all: &'static str,
    pub dash_analyzing: &'static str,
    pub dash_posture_established: &'static str,
    pub dash_recon_assets: &'static str,
    pub dash_risks_identified: &'static str,
    pub dash_intel_monitor: &'static str,
    pub dash_op_history: &'static str,
    pub dash_no_logs: &'static str,
    pub dash_exec_summary: &'static str,
    pub dash_tech_impact: &'static str,
    pub dash_close: &'static str,
    pub dash_filter_hint: &'static str,
    pub col_risk: &'static str,
    pub col_severity: &'static str,
    pub col_category: &'static str,
    pub col_cve: &'static str,
    pub dive_payload: &'static str,
    pub dive_remediation: &'static str,

    // Header audit
    pub headers_title: &'static str,
    pub headers_subtitle: &'static str,
    pub headers_new_audit: &'static str,
    pub headers_paste_label: &'static str,
    pub headers_execute: &'static str,
    pub headers_executing: &'static str,
    pub headers_summary: &'static str,
    pub headers_missing: &'static str,
    pub headers_posture_score: &'static str,
    pub headers_all_secure: &'static str,
    pub headers_impact: &'static str,
    pub headers_recommendation: &'static str,
    pub headers_snippet: &'static str,
    pub headers_hint_idle: &'static str,
    pub headers_hint_editing: &'static str,
    pub headers_missing_marker: &'static str,

    // CVE hub
    pub cve_title: &'static str,
    pub cve_subtitle: &'static str,
    pub cve_sync: &'static str,
    pub cve_search_placeholder: &'static str,
    pub cve_loading: &'static str,
    pub cve_synthesizing: &'static str,
    pub cve_no_intel: &'static str,
    pub cve_grounding: &'static str,
    pub cve_tech_desc: &'static str,
    pub cve_risk_assess: &'static str,
    pub cve_target_scope: &'static str,
    pub cve_close_report: &'static str,
    pub cve_filter_all: &'static str,
    pub cve_impact: &'static str,
    pub col_id: &'static str,
    pub col_title: &'static str,
    pub col_cvss: &'static str,
    pub col_published: &'static str,

    // Severity labels shared by CVE hub and OWASP view
    pub sev_critical: &'static str,
    pub sev_high: &'static str,
    pub sev_medium: &'static str,
    pub sev_low: &'static str,

    // OWASP advisor
    pub owasp_title: &'static str,
    pub owasp_subtitle: &'static str,
    pub owasp_desc: &'static str,
    pub owasp_mitigation_guide: &'static str,
    pub owasp_close: &'static str,
    pub owasp_root_cause: &'static str,
    pub owasp_compliance: &'static str,
    pub owasp_mitigations: &'static str,
    pub owasp_verification: &'static str,
    pub col_standard: &'static str,

    // Vulnerability explainer
    pub vuln_title: &'static str,
    pub vuln_subtitle: &'static str,
    pub vuln_domains: &'static str,
    pub vuln_placeholder: &'static str,
    pub vuln_explore: &'static str,
    pub vuln_analyzing: &'static str,
    pub vuln_consulting: &'static str,
    pub vuln_advisory: &'static str,
    pub vuln_ready: &'static str,
    pub vuln_ready_desc: &'static str,

    // AI chat
    pub chat_initial: &'static str,
    pub chat_assistant_name: &'static str,
    pub chat_online: &'static str,
    pub chat_placeholder: &'static str,
    pub chat_processing: &'static str,
    pub chat_references: &'static str,
    pub chat_you: &'static str,

    // Settings
    pub settings_title: &'static str,
    pub settings_subtitle: &'static str,
    pub settings_lang_title: &'static str,
    pub settings_lang_subtitle: &'static str,
    pub settings_data_title: &'static str,
    pub settings_data_subtitle: &'static str,
    pub settings_clear: &'static str,
    pub settings_clear_confirm: &'static str,
    pub settings_back: &'static str,
    pub settings_lang_en: &'static str,
    pub settings_lang_az: &'static str,
    pub settings_toggle_hint: &'static str,
}

static EN: Labels = Labels {
    nav_dashboard: "Audit Dashboard",
    nav_header_audit: "Header Analysis",
    nav_cve_hub: "CVE Intelligence",
    nav_compliance: "Compliance Standards",
    nav_vuln_db: "Vulnerability Database",
    nav_ai_chat: "AI Security Assistant",
    nav_settings: "System Preferences",
    nav_filter: "Filter modules...",
    nav_no_results: "No results found",
    cpu: "CPU Usage",
    system_status: "System Status:",
    operational: "Operational",
    created: "Created by Skywalker",
    footer_views: "views",
    footer_help: "help",
    footer_quit: "quit",
    footer_uptime: "up",
    quit_title: "Confirm",
    quit_confirm: "Quit? (y/n)",
    help_title: "Help",
    help_keybindings: "Keybindings",

    disclaimer_title: "Ethical Conduct & Usage Agreement",
    disclaimer_warning: "CRITICAL SECURITY NOTICE",
    disclaimer_body1: "The Skywalker Security AI suite is a professional-grade platform designed strictly for educational, research, and authorized security auditing purposes.",
    disclaimer_body2: "By proceeding, you acknowledge that any unauthorized testing against systems you do not own or have explicit written permission to audit is illegal and punishable by law.",
    disclaimer_clause1: "I will only use this tool for \"White Hat\" research.",
    disclaimer_clause2: "I accept full responsibility for my actions.",
    disclaimer_clause3: "I will not perform any denial-of-service or destructive attacks.",
    disclaimer_accept: "I UNDERSTAND & ACCEPT TERMS",
    disclaimer_lang_toggle: "Switch to Azerbaijani",

    dash_title: "Audit Operations",
    dash_intel_feed: "Global Intelligence Feed",
    dash_syncing: "Synchronizing with neural threat nodes...",
    dash_node_posture: "Node Posture Active",
    dash_neural_core: "Neural Core Ready",
    dash_placeholder: "Enter domain or IP to audit...",
    dash_start: "Start Audit",
    dash_modules: "Modules",
    dash_toggle_all: "Toggle All",
    dash_analyzing: "Analyzing:",
    dash_posture_established: "Posture Established.",
    dash_recon_assets: "Technical Reconnaissance Assets",
    dash_risks_identified: "Risks Identified",
    dash_intel_monitor: "Intelligence Monitor",
    dash_op_history: "Operational History",
    dash_no_logs: "No logs detected",
    dash_exec_summary: "Executive Summary",
    dash_tech_impact: "Technical Impact Assessment",
    dash_close: "Close Assessment",
    dash_filter_hint: "filter",
    col_risk: "Risk",
    col_severity: "Severity",
    col_category: "Category",
    col_cve: "CVE",
    dive_payload: "Payload",
    dive_remediation: "Remediation",

    headers_title: "Protocol & Policy Auditor",
    headers_subtitle: "Deep-dive into HTTP response headers for security and privacy.",
    headers_new_audit: "New Audit",
    headers_paste_label: "Paste Raw HTTP Headers",
    headers_execute: "Execute Audit",
    headers_executing: "Performing Audit...",
    headers_summary: "Executive Summary",
    headers_missing: "Critical Compliance Gaps",
    headers_posture_score: "Posture Score",
    headers_all_secure: "All critical security headers are present.",
    headers_impact: "Impact Assessment",
    headers_recommendation: "Recommendation",
    headers_snippet: "Remediation Snippet",
    headers_hint_idle: "i edit / r run / x clear",
    headers_hint_editing: "Esc done",
    headers_missing_marker: "missing",

    cve_title: "CVE Intelligence",
    cve_subtitle: "Real-time vulnerability feeds from global research nodes",
    cve_sync: "Synchronize Feed",
    cve_search_placeholder: "Search by ID, product, or keyword...",
    cve_loading: "Accessing Global CVE Nodes",
    cve_synthesizing: "Synthesizing vulnerability intelligence graph...",
    cve_no_intel: "No Intelligence Matching Criteria",
    cve_grounding: "Grounding Sources",
    cve_tech_desc: "Technical Description",
    cve_risk_assess: "Risk Assessment",
    cve_target_scope: "Target Scope",
    cve_close_report: "Close Report",
    cve_filter_all: "All",
    cve_impact: "IMPACT",
    col_id: "ID",
    col_title: "Title",
    col_cvss: "CVSS",
    col_published: "Published",

    sev_critical: "Critical",
    sev_high: "High",
    sev_medium: "Medium",
    sev_low: "Low",

    owasp_title: "OWASP Top 10 Reference",
    owasp_subtitle: "AppSec Compliance",
    owasp_desc: "Standardized technical guidance for identifying and mitigating the most critical web application security risks.",
    owasp_mitigation_guide: "Technical Mitigation Guide",
    owasp_close: "Close Advisory",
    owasp_root_cause: "Technical Root Cause",
    owasp_compliance: "Compliance Relevance",
    owasp_mitigations: "Strategic Mitigations",
    owasp_verification: "Verification Procedures",
    col_standard: "Standard",

    vuln_title: "Security Knowledge Engine",
    vuln_subtitle: "Explore the deep mechanics of vulnerabilities across the modern tech stack.",
    vuln_domains: "Knowledge Domains",
    vuln_placeholder: "Query technical mechanics (e.g., 'Blind SQLi in GraphQL')...",
    vuln_explore: "Explore",
    vuln_analyzing: "Analyzing Vector Mechanics",
    vuln_consulting: "Consulting deep-learning security models...",
    vuln_advisory: "Security Advisory",
    vuln_ready: "Researcher Terminal Ready",
    vuln_ready_desc: "Select a domain or query the neural database for comprehensive technical analysis.",

    chat_initial: "Skywalker Security AI initialized. I am ready to assist with vulnerability analysis, code review, and general security inquiries. How can I help you today?",
    chat_assistant_name: "Skywalker AI Assistant",
    chat_online: "Online",
    chat_placeholder: "Describe a security concern or request analysis...",
    chat_processing: "Processing inquiry...",
    chat_references: "Reference Sources",
    chat_you: "you",

    settings_title: "System Preferences",
    settings_subtitle: "Configure your Skywalker Security AI environment",
    settings_lang_title: "Regional & Language",
    settings_lang_subtitle: "Set your preferred interface language",
    settings_data_title: "Data Management",
    settings_data_subtitle: "Control your local scan records and history",
    settings_clear: "Purge Scan History",
    settings_clear_confirm: "Are you sure? This will permanently delete all saved audits.",
    settings_back: "Back to Dashboard",
    settings_lang_en: "English",
    settings_lang_az: "Azerbaijani (Azərbaycan)",
    settings_toggle_hint: "l toggle",
};

static AZ: Labels = Labels {
    nav_dashboard: "Audit Paneli",
    nav_header_audit: "Başlıq Analizi",
    nav_cve_hub: "CVE Kəşfiyyatı",
    nav_compliance: "Uyğunluq Standartları",
    nav_vuln_db: "Boşluqlar Bazası",
    nav_ai_chat: "Sİ Təhlükəsizlik Köməkçisi",
    nav_settings: "Sistem Parametrləri",
    nav_filter: "Modulları filtrlə...",
    nav_no_results: "Nəticə tapılmadı",
    cpu: "CPU Yüklənməsi",
    system_status: "Sistem Statusu:",
    operational: "İşləkdir",
    created: "Skywalker tərəfindən yaradılıb",
    footer_views: "görünüşlər",
    footer_help: "kömək",
    footer_quit: "çıxış",
    footer_uptime: "vaxt",
    quit_title: "Təsdiq",
    quit_confirm: "Çıxış? (y/n)",
    help_title: "Kömək",
    help_keybindings: "Klaviatura qısayolları",

    disclaimer_title: "Etik Davranış və İstifadə Müqaviləsi",
    disclaimer_warning: "KRİTİK TƏHLÜKƏSİZLİK BİLDİRİŞİ",
    disclaimer_body1: "Skywalker Təhlükəsizlik Sİ dəsti ciddi şəkildə təhsil, tədqiqat və səlahiyyətli təhlükəsizlik auditi məqsədləri üçün hazırlanmış peşəkar səviyyəli platformadır.",
    disclaimer_body2: "Davam edərək, sahib olmadığınız və ya audit üçün açıq yazılı icazəniz olmayan sistemlərə qarşı hər hansı icazəsiz sınaqların qeyri-qanuni olduğunu və qanunla cəzalandırıldığını qəbul edirsiniz.",
    disclaimer_clause1: "Mən bu alətdən yalnız \"Ağ Papaqlı\" tədqiqat üçün istifadə edəcəyəm.",
    disclaimer_clause2: "Hərəkətlərimə görə tam məsuliyyət daşıyıram.",
    disclaimer_clause3: "Dağıdıcı hücumlar və ya xidmətdən imtina (DoS) testləri etməyəcəyəm.",
    disclaimer_accept: "ŞƏRTLƏRİ ANLAYIRAM VƏ QƏBUL EDİRƏM",
    disclaimer_lang_toggle: "İngilis dilinə keç",

    dash_title: "Audit Əməliyyatları",
    dash_intel_feed: "Qlobal Kəşfiyyat Axını",
    dash_syncing: "Neyron təhdid düyünləri ilə sinxronlaşdırılır...",
    dash_node_posture: "Düyün Vəziyyəti Aktivdir",
    dash_neural_core: "Neyron Nüvəsi Hazırdır",
    dash_placeholder: "Audit üçün domen və ya IP daxil edin...",
    dash_start: "Auditi Başlat",
    dash_modules: "Modullar",
    dash_toggle_all: "Hamısını seç",
    dash_analyzing: "Analiz edilir:",
    dash_posture_established: "Vəziyyət Təyin Edildi.",
    dash_recon_assets: "Texniki Kəşfiyyat Aktivləri",
    dash_risks_identified: "Aşkar Olunmuş Risklər",
    dash_intel_monitor: "Kəşfiyyat Monitoru",
    dash_op_history: "Əməliyyat Tarixçəsi",
    dash_no_logs: "Giriş qeydə alınmayıb",
    dash_exec_summary: "İcraçı Xülasə",
    dash_tech_impact: "Texniki Təsir Qiymətləndirməsi",
    dash_close: "Qiymətləndirməni Bağla",
    dash_filter_hint: "filtr",
    col_risk: "Risk",
    col_severity: "Ciddilik",
    col_category: "Kateqoriya",
    col_cve: "CVE",
    dive_payload: "Zərərli Yük",
    dive_remediation: "Aradan Qaldırma",

    headers_title: "Protokol və Siyasət Auditi",
    headers_subtitle: "Təhlükəsizlik və məxfilik üçün HTTP cavab başlıqlarını dərindən analiz edin.",
    headers_new_audit: "Yeni Audit",
    headers_paste_label: "Xam HTTP Başlıqlarını Daxil Edin",
    headers_execute: "Auditi İcra Et",
    headers_executing: "Audit aparılır...",
    headers_summary: "İcraçı Xülasə",
    headers_missing: "Kritik Uyğunluq Boşluqları",
    headers_posture_score: "Vəziyyət Balı",
    headers_all_secure: "Bütün kritik təhlükəsizlik başlıqları mövcuddur.",
    headers_impact: "Təsir Qiymətləndirməsi",
    headers_recommendation: "Tövsiyə",
    headers_snippet: "Düzəliş Kodu",
    headers_hint_idle: "i redaktə / r icra / x təmizlə",
    headers_hint_editing: "Esc bitir",
    headers_missing_marker: "çatışmır",

    cve_title: "CVE Kəşfiyyatı",
    cve_subtitle: "Qlobal tədqiqat düyünlərindən real vaxt boşluq axını",
    cve_sync: "Axını Yenilə",
    cve_search_placeholder: "ID, məhsul və ya açar sözlə axtarın...",
    cve_loading: "Qlobal CVE Düyünlərinə Giriş",
    cve_synthesizing: "Zəiflik kəşfiyyat qrafı sintez edilir...",
    cve_no_intel: "Kriteryalara uyğun kəşfiyyat tapılmadı",
    cve_grounding: "Məlumat Mənbələri",
    cve_tech_desc: "Texniki Təsvir",
    cve_risk_assess: "Risk Qiymətləndirməsi",
    cve_target_scope: "Hədəf Sahəsi",
    cve_close_report: "Hesabatı Bağla",
    cve_filter_all: "Hamısı",
    cve_impact: "TƏSİR",
    col_id: "ID",
    col_title: "Başlıq",
    col_cvss: "CVSS",
    col_published: "Dərc edilib",

    sev_critical: "Kritik",
    sev_high: "Yüksək",
    sev_medium: "Orta",
    sev_low: "Aşağı",

    owasp_title: "OWASP Top 10 İstinadı",
    owasp_subtitle: "AppSec Uyğunluğu",
    owasp_desc: "Ən kritik veb tətbiqi təhlükəsizlik risklərini müəyyən etmək və azaltmaq üçün standartlaşdırılmış texniki rəhbərlik.",
    owasp_mitigation_guide: "Texniki Düzəliş Rəhbəri",
    owasp_close: "Məsləhəti Bağla",
    owasp_root_cause: "Texniki Köklü Səbəb",
    owasp_compliance: "Uyğunluq Əhəmiyyəti",
    owasp_mitigations: "Strateji Düzəlişlər",
    owasp_verification: "Yoxlama Prosedurları",
    col_standard: "Standart",

    vuln_title: "Təhlükəsizlik Bilik Mühərriki",
    vuln_subtitle: "Müasir texnologiya yığınında zəifliklərin dərin mexanikasını araşdırın.",
    vuln_domains: "Bilik Sahələri",
    vuln_placeholder: "Texniki mexanikanı sorğulayın (məs: 'GraphQL-də Blind SQLi')...",
    vuln_explore: "Araşdır",
    vuln_analyzing: "Vektor Mexanikası Analiz Edilir",
    vuln_consulting: "Dərin öyrənmə təhlükəsizlik modellərinə müraciət edilir...",
    vuln_advisory: "Təhlükəsizlik Bildirişi",
    vuln_ready: "Tədqiqatçı Terminalı Hazırdır",
    vuln_ready_desc: "Hərtərəfli texniki analiz üçün bir sahə seçin və ya neyron bazanı sorğulayın.",

    chat_initial: "Skywalker Təhlükəsizlik Sİ işə salındı. Zəiflik analizi, kod yoxlanışı və ümumi təhlükəsizlik sorğularında kömək etməyə hazıram. Bu gün sizə necə kömək edə bilərəm?",
    chat_assistant_name: "Skywalker Sİ Köməkçisi",
    chat_online: "Aktiv",
    chat_placeholder: "Təhlükəsizlik narahatlığını təsvir edin və ya analiz tələb edin...",
    chat_processing: "Sorğu işlənilir...",
    chat_references: "İstinad Mənbələri",
    chat_you: "siz",

    settings_title: "Sistem Parametrləri",
    settings_subtitle: "Skywalker Süni İntellekt mühitini tənzimləyin",
    settings_lang_title: "Regional və Dil",
    settings_lang_subtitle: "İnterfeys dilini seçin",
    settings_data_title: "Məlumat İdarəetməsi",
    settings_data_subtitle: "Lokal skan qeydlərini və tarixçəni idarə edin",
    settings_clear: "Skan Tarixçəsini Təmizlə",
    settings_clear_confirm: "Əminsiniz? Bu, bütün saxlanılan auditləri həmişəlik siləcək.",
    settings_back: "Audit Panelinə Qayıt",
    settings_lang_en: "İngilis dili",
    settings_lang_az: "Azərbaycan dili",
    settings_toggle_hint: "l dəyiş",
};

/// Label table for the given language
pub fn labels(lang: Language) -> &'static Labels {
    match lang {
        Language::En => &EN,
        Language::Az => &AZ,
    }
}

/// Progress messages shown while a domain scan runs
pub fn scan_tasks(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::En => &[
            "Synchronizing threat intelligence feed",
            "Running advanced Google OSINT queries",
            "Analyzing domain DNS (SPF/DKIM/DMARC)",
            "Identifying server-side signatures",
            "Evaluating SSL/TLS handshake protocols",
        ],
        Language::Az => &[
            "Təhdid kəşfiyyatı axını sinxronlaşdırılır",
            "Qabaqcıl Google OSINT sorğuları icra edilir",
            "Domen DNS analizi (SPF/DKIM/DMARC)",
            "Server tərəfi imzalar təyin edilir",
            "SSL/TLS əlaqə protokolları qiymətləndirilir",
        ],
    }
}

/// Key binding reference shown on the help view
pub fn help_bindings(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::En => &[
            ("q, Ctrl+c", "Quit"),
            ("1", "Dashboard"),
            ("2", "Header audit"),
            ("3", "CVE intelligence"),
            ("4", "OWASP reference"),
            ("5", "Knowledge engine"),
            ("6", "Assistant chat"),
            ("7", "Settings"),
            ("e, /", "Edit the focused input"),
            ("Enter", "Submit / open selection"),
            ("Esc", "Close modal or leave editing"),
            ("j/k, arrows", "Move selection"),
            ("Space, a", "Toggle scan modules (dashboard)"),
            ("?", "This help"),
        ],
        Language::Az => &[
            ("q, Ctrl+c", "Çıxış"),
            ("1", "Audit paneli"),
            ("2", "Başlıq auditi"),
            ("3", "CVE kəşfiyyatı"),
            ("4", "OWASP istinadı"),
            ("5", "Bilik mühərriki"),
            ("6", "Köməkçi söhbəti"),
            ("7", "Parametrlər"),
            ("e, /", "Seçilmiş sahəni redaktə et"),
            ("Enter", "Göndər / seçimi aç"),
            ("Esc", "Pəncərəni bağla və ya redaktədən çıx"),
            ("j/k, arrows", "Seçimi hərəkət etdir"),
            ("Space, a", "Skan modullarını dəyiş (panel)"),
            ("?", "Bu kömək"),
        ],
    }
}

/// Short description shown next to each scan module toggle
pub fn scan_module_description(module: crate::models::ScanModule, lang: Language) -> &'static str {
    use crate::models::ScanModule;
    match (module, lang) {
        (ScanModule::Xss, Language::En) => "Testing for unsanitized input",
        (ScanModule::Xss, Language::Az) => "Təmizlənməmiş girişlərin yoxlanılması",
        (ScanModule::Sqli, Language::En) => "Checking database query vectors",
        (ScanModule::Sqli, Language::Az) => "Məlumat bazası sorğu vektorlarının yoxlanılması",
        (ScanModule::Auth, Language::En) => "Evaluating login management",
        (ScanModule::Auth, Language::Az) => "Giriş idarəetməsinin qiymətləndirilməsi",
        (ScanModule::Data, Language::En) => "Scanning for leaked credentials",
        (ScanModule::Data, Language::Az) => "Sızan etimadnamələrin skan edilməsi",
        (ScanModule::Api, Language::En) => "Auditing REST interfaces",
        (ScanModule::Api, Language::Az) => "REST interfeyslərinin auditi",
        (ScanModule::Headers, Language::En) => "Analyzing CSP, HSTS, etc.",
        (ScanModule::Headers, Language::Az) => "CSP, HSTS və s. analizi",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("az"), Some(Language::Az));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::En.code(), "en");
    }

    #[test]
    fn test_language_toggle_is_involutive() {
        assert_eq!(Language::En.toggled(), Language::Az);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_labels_differ_between_languages() {
        assert_ne!(labels(Language::En).nav_dashboard, labels(Language::Az).nav_dashboard);
        assert_eq!(labels(Language::En).nav_dashboard, "Audit Dashboard");
    }

    #[test]
    fn test_scan_tasks_have_same_length() {
        assert_eq!(scan_tasks(Language::En).len(), scan_tasks(Language::Az).len());
    }

    #[test]
    fn test_help_bindings_keys_match_across_languages() {
        let en = help_bindings(Language::En);
        let az = help_bindings(Language::Az);
        assert_eq!(en.len(), az.len());
        for ((en_key, _), (az_key, _)) in en.iter().zip(az) {
            assert_eq!(en_key, az_key);
        }
    }

    #[test]
    fn test_table_and_hint_labels_are_translated() {
        let en = labels(Language::En);
        let az = labels(Language::Az);
        assert_ne!(en.col_severity, az.col_severity);
        assert_ne!(en.col_published, az.col_published);
        assert_ne!(en.chat_you, az.chat_you);
        assert_ne!(en.quit_confirm, az.quit_confirm);
        assert_ne!(en.headers_hint_idle, az.headers_hint_idle);
        assert_ne!(en.headers_missing_marker, az.headers_missing_marker);
    }
}
