//! Channel communication between background gateway tasks and the TUI.
//!
//! Every gateway call runs on the tokio runtime and reports back exactly
//! one of these results; the UI thread drains the channel each tick and
//! never blocks on the network.

use skywalker_core::gateway::GroundedText;
use skywalker_core::models::{
    ComplianceAdvice, CveInfo, DeepDive, DomainScanReport, GroundingSource,
    HeaderAnalysisResult, ThreatReport,
};
use skywalker_core::Result;

/// Results sent from gateway tasks to the TUI
pub enum TaskResult {
    /// Threat intelligence feed for the dashboard ticker
    Threats(Result<(Vec<ThreatReport>, Vec<GroundingSource>)>),

    /// Impact analysis for the open threat modal
    ThreatImpact(Result<String>),

    /// Completed domain scan
    Scan {
        url: String,
        result: Result<DomainScanReport>,
    },

    /// Deep dive for the open risk modal
    RiskDive(Result<DeepDive>),

    /// Executive summary following a successful deep dive
    RiskSummary(Result<String>),

    /// Header audit result
    HeaderAudit(Result<HeaderAnalysisResult>),

    /// CVE feed refresh
    Cves(Result<(Vec<CveInfo>, Vec<GroundingSource>)>),

    /// OWASP mitigation guide
    Advice(Result<ComplianceAdvice>),

    /// Free-text vulnerability explanation
    Explanation(Result<String>),

    /// Chat reply with citations
    ChatReply(Result<GroundedText>),
}
