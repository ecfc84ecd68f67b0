//! AI gateway: every model-backed operation the dashboard performs.
//!
//! Each operation pairs a prompt with a model tier and, for structured
//! calls, a response schema. Transport failures surface as
//! [`Error::Provider`]; a model answer that does not match the requested
//! shape surfaces as [`Error::Decode`].

pub mod prompts;
pub mod schemas;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::gemini::{GenerateRequest, GenerativeModel, Message, ModelTier};
use crate::models::{
    ChatMessage, ComplianceAdvice, CveInfo, DeepDive, DomainScanReport, ExploitTuning,
    GroundingSource, HeaderAnalysisResult, ScanModule, ThreatReport,
};
use crate::{Error, Result};

/// A plain-text answer together with its web citations
#[derive(Debug, Clone)]
pub struct GroundedText {
    pub text: String,
    pub sources: Vec<GroundingSource>,
}

#[derive(Debug, Deserialize)]
struct CveFeed {
    cves: Vec<CveInfo>,
}

#[derive(Debug, Deserialize)]
struct ThreatFeed {
    threats: Vec<ThreatReport>,
}

/// Front door to the generative model
#[derive(Clone)]
pub struct AiGateway {
    model: Arc<dyn GenerativeModel>,
}

impl AiGateway {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Audit a raw HTTP header block
    pub async fn analyze_headers(&self, raw_headers: &str) -> Result<HeaderAnalysisResult> {
        let request = GenerateRequest::new(ModelTier::Flash, prompts::analyze_headers(raw_headers))
            .schema(schemas::header_analysis());
        let response = self.model.generate(request).await?;
        decode(&response.text)
    }

    /// Fetch the 15 most recent critical CVEs via web search
    pub async fn live_cves(&self) -> Result<(Vec<CveInfo>, Vec<GroundingSource>)> {
        let request = GenerateRequest::new(ModelTier::Flash, prompts::live_cves())
            .schema(schemas::cve_feed())
            .search();
        let response = self.model.generate(request).await?;
        let feed: CveFeed = decode(&response.text)?;
        debug!(count = feed.cves.len(), "decoded CVE feed");
        Ok((feed.cves, response.sources))
    }

    /// Run a grounded security audit of a domain, focused on the
    /// selected modules (broad analysis when none are selected)
    pub async fn analyze_domain(
        &self,
        domain: &str,
        modules: &[ScanModule],
    ) -> Result<DomainScanReport> {
        let request = GenerateRequest::new(ModelTier::Pro, prompts::analyze_domain(domain, modules))
            .schema(schemas::domain_scan())
            .search();
        let response = self.model.generate(request).await?;
        let mut report: DomainScanReport = decode(&response.text)?;
        report.sources = response.sources;
        Ok(report)
    }

    /// Technical deep dive into one vulnerability
    pub async fn vulnerability_deep_dive(
        &self,
        vuln_name: &str,
        domain: Option<&str>,
        tuning: Option<&ExploitTuning>,
    ) -> Result<DeepDive> {
        let request =
            GenerateRequest::new(ModelTier::Pro, prompts::deep_dive(vuln_name, domain, tuning))
                .schema(schemas::deep_dive());
        let response = self.model.generate(request).await?;
        decode(&response.text)
    }

    /// Board-level summary of a deep dive
    pub async fn executive_summary(&self, vuln_name: &str, dive: &DeepDive) -> Result<String> {
        let request =
            GenerateRequest::new(ModelTier::Flash, prompts::executive_summary(vuln_name, dive));
        Ok(self.model.generate(request).await?.text)
    }

    /// Mitigation guide for one OWASP standard
    pub async fn compliance_advice(
        &self,
        standard_rank: &str,
        standard_title: &str,
    ) -> Result<ComplianceAdvice> {
        let request = GenerateRequest::new(
            ModelTier::Pro,
            prompts::compliance_advice(standard_rank, standard_title),
        )
        .schema(schemas::compliance_advice());
        let response = self.model.generate(request).await?;
        decode(&response.text)
    }

    /// Fetch the 10 most critical threat reports via web search
    pub async fn latest_threat_intel(&self) -> Result<(Vec<ThreatReport>, Vec<GroundingSource>)> {
        let request = GenerateRequest::new(ModelTier::Flash, prompts::latest_threat_intel())
            .schema(schemas::threat_feed())
            .search();
        let response = self.model.generate(request).await?;
        let feed: ThreatFeed = decode(&response.text)?;
        Ok((feed.threats, response.sources))
    }

    /// Free-text impact assessment for one threat report
    pub async fn threat_impact(&self, report: &ThreatReport) -> Result<String> {
        let request = GenerateRequest::new(ModelTier::Pro, prompts::threat_impact(report));
        Ok(self.model.generate(request).await?.text)
    }

    /// Grounded chat turn; `history` is the prior conversation in order
    pub async fn chat(&self, history: &[ChatMessage], message: &str) -> Result<GroundedText> {
        let mut messages: Vec<Message> = history
            .iter()
            .map(|m| Message {
                role: m.role,
                text: m.text.clone(),
            })
            .collect();
        messages.push(Message::user(message));

        let request = GenerateRequest::with_history(ModelTier::Pro, messages)
            .system(prompts::CHAT_SYSTEM_INSTRUCTION)
            .search();
        let response = self.model.generate(request).await?;
        Ok(GroundedText {
            text: response.text,
            sources: response.sources,
        })
    }

    /// Free-text technical explanation of a vulnerability
    pub async fn explain_vulnerability(&self, vuln_name: &str) -> Result<String> {
        let request =
            GenerateRequest::new(ModelTier::Flash, prompts::explain_vulnerability(vuln_name));
        Ok(self.model.generate(request).await?.text)
    }
}

/// Decode model output into a typed entity; a shape mismatch is a decode
/// error, not a provider error
fn decode<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| Error::Decode(format!("{e}: {text}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_distinguishes_shape_errors() {
        let err = decode::<CveFeed>(r#"{"unexpected": true}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_decode_feed_wrapper() {
        let feed: ThreatFeed = decode(
            r#"{"threats":[{"title":"t","summary":"s","impact":"Low","date":"d","tags":[]}]}"#,
        )
        .unwrap();
        assert_eq!(feed.threats.len(), 1);
    }
}
