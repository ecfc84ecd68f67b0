//! Prompt builders for every gateway operation.
//!
//! Prompts address the model in a fixed persona per operation and embed
//! user input verbatim. They are plain text; structure is enforced by the
//! response schemas, not by the prompt.

use crate::models::{DeepDive, ExploitTuning, ScanModule, ThreatReport};

pub const CHAT_SYSTEM_INSTRUCTION: &str = "You are Skywalker AI, a world-class Cybersecurity Assistant. Use Google Search to provide factual, up-to-date security information. Speak with technical precision and professionalism.";

pub fn analyze_headers(raw_headers: &str) -> String {
    format!(
        "Act as a Senior Security Compliance Engineer.\n\
         Analyze these HTTP headers for security posture, privacy leaks, and best practices.\n\n\
         Headers to analyze:\n\
         ---\n\
         {raw_headers}\n\
         ---\n\n\
         Provide a professional analysis including:\n\
         1. A security score (0-100).\n\
         2. A list of critical missing headers.\n\
         3. Detailed findings for existing headers, categorized by \"Security\", \"Information\", \"Performance\", or \"Privacy\".\n\
         4. For each finding, provide the status (Pass/Fail/Warning), a clear impact statement, a technical recommendation, and where applicable, a remediation code snippet (e.g., Nginx or Apache config).\n\
         5. An overall summary and risk level assessment."
    )
}

pub fn live_cves() -> String {
    "Act as a Global Cybersecurity Intelligence Node.\n\
     Use Google Search to find the 15 most recent and critical CVEs (Common Vulnerabilities and Exposures) published in the last 7 days.\n\n\
     For each CVE, provide:\n\
     1. The CVE ID (e.g., CVE-2025-XXXXX)\n\
     2. A technical title\n\
     3. A brief description of the vulnerability and attack vector\n\
     4. Severity level (Critical, High, Medium, Low)\n\
     5. CVSS Score (estimate if not final)\n\
     6. Affected software, hardware, or components\n\
     7. Date published or last updated"
        .to_string()
}

pub fn analyze_domain(domain: &str, modules: &[ScanModule]) -> String {
    let module_focus = if modules.is_empty() {
        "Perform a broad security posture analysis across common web attack vectors.".to_string()
    } else {
        let labels: Vec<&str> = modules.iter().map(|m| m.label()).collect();
        format!(
            "Heavily focus your analysis on these specific attack vectors: {}.",
            labels.join(", ")
        )
    };

    format!(
        "Act as a high-level Penetration Tester and OSINT Specialist.\n\
         Perform an advanced security audit for: {domain}.\n\n\
         Reconnaissance Instructions:\n\
         1. Use Google Search to find subdomains, hidden paths, and exposed files (e.g., .env, .git, config.php).\n\
         2. Check for technology signatures and associated CVEs.\n\
         3. Evaluate DNS records and email security (SPF, DKIM, DMARC).\n\n\
         {module_focus}\n\n\
         CRITICAL: You MUST provide scores (0-100) for exactly these 6 categories:\n\
         \"Network\", \"Application\", \"Authentication\", \"Encryption\", \"Data Privacy\", and \"API Security\".\n\n\
         Structure the response to include technical reconnaissance assets and identified risks."
    )
}

pub fn deep_dive(vuln_name: &str, domain: Option<&str>, tuning: Option<&ExploitTuning>) -> String {
    let scope = domain
        .map(|d| format!(" as it applies to {d}"))
        .unwrap_or_default();

    let tuning_block = tuning
        .map(|t| {
            format!(
                "\nTailor the technical details using these parameters:\n\
                 - Target Injection Point: {}\n\
                 - Evasion Technique: {}\n\
                 - Additional Context: {}\n",
                t.injection_point.as_deref().unwrap_or("Standard"),
                t.evasion_technique.as_deref().unwrap_or("None"),
                t.custom_context.as_deref().unwrap_or("General"),
            )
        })
        .unwrap_or_default();

    format!(
        "Act as a Master Security Researcher. Provide a technical deep dive for the vulnerability: \"{vuln_name}\"{scope}.\n\
         {tuning_block}\
         Explain the underlying mechanism, provide a sample research payload, list clear POC steps, and detailed remediation."
    )
}

pub fn executive_summary(vuln_name: &str, dive: &DeepDive) -> String {
    format!(
        "Act as a Chief Information Security Officer (CISO).\n\
         Convert this technical vulnerability report into a professional 3-sentence executive summary.\n\
         Focus on business risk, technical root cause, and the primary strategic remediation step.\n\
         Keep it strictly professional and suitable for board-level reporting.\n\n\
         Vulnerability: {vuln_name}\n\
         Explanation: {}\n\
         Remediation: {}",
        dive.explanation, dive.remediation
    )
}

pub fn compliance_advice(standard_rank: &str, standard_title: &str) -> String {
    format!(
        "Act as a Senior Compliance Auditor and AppSec Specialist.\n\
         Provide a high-precision mitigation guide for the OWASP Standard: {standard_rank} - {standard_title}.\n\n\
         Structure the response into:\n\
         1. Technical Root Cause (Deep Dive)\n\
         2. Testing Procedures (How to verify if you are vulnerable)\n\
         3. Technical Mitigations (Code/Infrastructure solutions)\n\
         4. Compliance Impact (PCI-DSS, HIPAA, SOC2 relevance)"
    )
}

pub fn latest_threat_intel() -> String {
    "Using Google Search, find the 10 most critical cybersecurity threat reports, zero-days, or data breaches from the last 72 hours. Provide a structured summary for each.".to_string()
}

pub fn threat_impact(report: &ThreatReport) -> String {
    format!(
        "Analyze the following threat intelligence report and provide a detailed technical impact assessment and defensive strategy:\n\n\
         Title: {}\n\
         Summary: {}\n\
         Impact: {}\n\
         Date: {}",
        report.title,
        report.summary,
        report.impact.as_str(),
        report.date
    )
}

pub fn explain_vulnerability(vuln_name: &str) -> String {
    format!(
        "Act as a Security Researcher. Explain {vuln_name} technically and professionally. Include historical context and modern variants."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn test_domain_prompt_lists_selected_modules() {
        let prompt = analyze_domain("example.com", &[ScanModule::Xss, ScanModule::Sqli]);
        assert!(prompt.contains("example.com"));
        assert!(prompt.contains("Cross-Site Scripting, SQL Injection"));
        assert!(!prompt.contains("broad security posture"));
    }

    #[test]
    fn test_domain_prompt_broad_when_no_modules() {
        let prompt = analyze_domain("example.com", &[]);
        assert!(prompt.contains("broad security posture analysis"));
    }

    #[test]
    fn test_deep_dive_tuning_defaults() {
        let tuning = ExploitTuning {
            injection_point: Some("search box".to_string()),
            ..Default::default()
        };
        let prompt = deep_dive("XSS", Some("example.com"), Some(&tuning));
        assert!(prompt.contains("as it applies to example.com"));
        assert!(prompt.contains("Target Injection Point: search box"));
        assert!(prompt.contains("Evasion Technique: None"));
    }

    #[test]
    fn test_deep_dive_without_tuning_has_no_parameters() {
        let prompt = deep_dive("XSS", None, None);
        assert!(!prompt.contains("Tailor the technical details"));
        assert!(!prompt.contains("as it applies to"));
    }

    #[test]
    fn test_threat_impact_embeds_report() {
        let report = ThreatReport {
            title: "Widget zero-day".to_string(),
            summary: "Active exploitation".to_string(),
            impact: Severity::Critical,
            date: "2025-08-25".to_string(),
            tags: vec![],
        };
        let prompt = threat_impact(&report);
        assert!(prompt.contains("Title: Widget zero-day"));
        assert!(prompt.contains("Impact: Critical"));
    }
}
