//! Typed entities decoded from AI-service responses, plus local state types.
//!
//! Everything the model produces is untrusted display data: decode enforces
//! shape only, never content (a score may be out of range, a date may be
//! prose). Feed entities carry no stable identity; re-fetches replace
//! wholesale rather than merge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A citation the model attached to a web-grounded answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// Severity scale shared by CVE entries and threat reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];
}

/// Chat participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// A single chat turn; session-only, never persisted
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub sources: Vec<GroundingSource>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            timestamp: Utc::now(),
            sources: Vec::new(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
            timestamp: Utc::now(),
            sources: Vec::new(),
        }
    }

    pub fn with_sources(mut self, sources: Vec<GroundingSource>) -> Self {
        self.sources = sources;
        self
    }
}

/// One entry of the threat intelligence feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatReport {
    pub title: String,
    pub summary: String,
    pub impact: Severity,
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One entry of the live CVE feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CveInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub cvss: f64,
    pub affected: String,
    #[serde(rename = "datePublished")]
    pub date_published: String,
}

/// Pass/fail status of a single header finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingStatus {
    Pass,
    Fail,
    Warning,
}

/// Category a header finding belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingCategory {
    Security,
    Information,
    Performance,
    Privacy,
}

/// Overall risk level of an audited header set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

/// Analysis of one HTTP response header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderFinding {
    pub header: String,
    pub status: FindingStatus,
    pub impact: String,
    pub recommendation: String,
    #[serde(rename = "remediationSnippet", default)]
    pub remediation_snippet: Option<String>,
    pub category: FindingCategory,
}

/// Full result of a header audit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderAnalysisResult {
    pub score: f64,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    pub summary: String,
    #[serde(rename = "missingHeaders")]
    pub missing_headers: Vec<String>,
    pub findings: Vec<HeaderFinding>,
}

/// Per-category posture score of a domain scan.
/// The prompt requests exactly six fixed categories; the shape is trusted
/// after decode, so a model that returns fewer is displayed as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: f64,
}

/// One reconnaissance asset discovered during a domain scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconFinding {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub status: String,
}

/// One identified risk of a domain scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopRisk {
    pub name: String,
    pub severity: String,
    pub category: String,
    #[serde(default)]
    pub cve: Option<String>,
}

/// Full result of a domain scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainScanReport {
    pub score: f64,
    #[serde(rename = "categoryScores")]
    pub category_scores: Vec<CategoryScore>,
    pub summary: String,
    pub reconnaissance: Vec<ReconFinding>,
    #[serde(rename = "topRisks")]
    pub top_risks: Vec<TopRisk>,
    pub technologies: Vec<String>,
    pub remediation: String,
    /// Citations from web-search grounding; attached after decode
    #[serde(default, skip_serializing)]
    pub sources: Vec<GroundingSource>,
}

/// Technical deep dive into a single vulnerability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepDive {
    pub explanation: String,
    pub payload: String,
    #[serde(rename = "pocSteps")]
    pub poc_steps: Vec<String>,
    pub remediation: String,
}

/// Tuning parameters for a deep dive
#[derive(Debug, Clone, Default)]
pub struct ExploitTuning {
    pub injection_point: Option<String>,
    pub evasion_technique: Option<String>,
    pub custom_context: Option<String>,
}

/// Mitigation guide for one OWASP standard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceAdvice {
    #[serde(rename = "rootCause")]
    pub root_cause: String,
    #[serde(rename = "testingProcedures")]
    pub testing_procedures: Vec<String>,
    pub mitigations: Vec<String>,
    #[serde(rename = "complianceImpact")]
    pub compliance_impact: String,
}

/// Attack-vector module a domain scan can focus on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanModule {
    Xss,
    Sqli,
    Auth,
    Data,
    Api,
    Headers,
}

impl ScanModule {
    pub const ALL: [ScanModule; 6] = [
        ScanModule::Xss,
        ScanModule::Sqli,
        ScanModule::Auth,
        ScanModule::Data,
        ScanModule::Api,
        ScanModule::Headers,
    ];

    /// Default selection for a fresh dashboard
    pub fn default_selection() -> Vec<ScanModule> {
        vec![ScanModule::Xss, ScanModule::Sqli, ScanModule::Headers]
    }

    /// Label embedded in scan prompts
    pub fn label(&self) -> &'static str {
        match self {
            ScanModule::Xss => "Cross-Site Scripting",
            ScanModule::Sqli => "SQL Injection",
            ScanModule::Auth => "Broken Authentication",
            ScanModule::Data => "Sensitive Data Exposure",
            ScanModule::Api => "API Endpoints",
            ScanModule::Headers => "Security Headers",
        }
    }
}

/// One persisted scan-history record, newest first, capped at 10
#[derive(Debug, Clone, PartialEq)]
pub struct ScanHistoryEntry {
    /// Creation timestamp in milliseconds, doubles as the identity
    pub id: i64,
    pub url: String,
    pub score: f64,
    /// Human-readable completion date
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_header_analysis() {
        let json = r#"{
            "score": 42,
            "riskLevel": "High",
            "summary": "Weak posture",
            "missingHeaders": ["Content-Security-Policy"],
            "findings": [{
                "header": "server",
                "status": "Warning",
                "impact": "Version disclosure",
                "recommendation": "Strip the header",
                "category": "Information"
            }]
        }"#;
        let result: HeaderAnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.score, 42.0);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.missing_headers.len(), 1);
        assert_eq!(result.findings[0].status, FindingStatus::Warning);
        assert_eq!(result.findings[0].category, FindingCategory::Information);
        assert!(result.findings[0].remediation_snippet.is_none());
    }

    #[test]
    fn test_decode_cve_with_rename() {
        let json = r#"{
            "id": "CVE-2025-12345",
            "title": "RCE in example",
            "description": "Unauthenticated remote code execution",
            "severity": "Critical",
            "cvss": 9.8,
            "affected": "example-server < 2.0",
            "datePublished": "2025-08-20"
        }"#;
        let cve: CveInfo = serde_json::from_str(json).unwrap();
        assert_eq!(cve.severity, Severity::Critical);
        assert_eq!(cve.date_published, "2025-08-20");
    }

    #[test]
    fn test_decode_threat_report_missing_tags() {
        // "tags" is optional in the requested schema
        let json = r#"{
            "title": "Zero-day in widget",
            "summary": "Active exploitation observed",
            "impact": "High",
            "date": "2025-08-25"
        }"#;
        let report: ThreatReport = serde_json::from_str(json).unwrap();
        assert!(report.tags.is_empty());
        assert_eq!(report.impact, Severity::High);
    }

    #[test]
    fn test_decode_rejects_unknown_severity() {
        let json = r#"{"title":"t","summary":"s","impact":"Apocalyptic","date":"d"}"#;
        assert!(serde_json::from_str::<ThreatReport>(json).is_err());
    }

    #[test]
    fn test_chat_message_constructors() {
        let msg = ChatMessage::user("hello");
        assert_eq!(msg.role, ChatRole::User);
        assert!(msg.sources.is_empty());

        let reply = ChatMessage::model("hi").with_sources(vec![GroundingSource {
            title: "NVD".to_string(),
            uri: "https://nvd.nist.gov".to_string(),
        }]);
        assert_eq!(reply.role, ChatRole::Model);
        assert_eq!(reply.sources.len(), 1);
    }

    #[test]
    fn test_scan_module_default_selection() {
        let defaults = ScanModule::default_selection();
        assert_eq!(defaults.len(), 3);
        assert!(defaults.contains(&ScanModule::Xss));
        assert!(defaults.contains(&ScanModule::Headers));
    }
}
