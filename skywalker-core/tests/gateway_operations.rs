//! Integration tests for the AI gateway against a scripted model backend

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use skywalker_core::gateway::AiGateway;
use skywalker_core::gemini::{GenerateRequest, GenerateResponse, GenerativeModel, ModelTier};
use skywalker_core::models::{
    ChatMessage, GroundingSource, RiskLevel, ScanModule, Severity,
};
use skywalker_core::Error;

/// Scripted backend: pops canned responses and records every request
struct ScriptedModel {
    responses: Mutex<VecDeque<GenerateResponse>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedModel {
    fn new(responses: Vec<GenerateResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn text(text: &str) -> GenerateResponse {
        GenerateResponse {
            text: text.to_string(),
            sources: Vec::new(),
        }
    }

    fn grounded(text: &str, sources: Vec<GroundingSource>) -> GenerateResponse {
        GenerateResponse {
            text: text.to_string(),
            sources,
        }
    }

    fn recorded(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate(&self, request: GenerateRequest) -> skywalker_core::Result<GenerateResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Provider("no scripted response".to_string()))
    }
}

#[tokio::test]
async fn test_header_audit_decodes_structured_result() {
    let body = r#"{
        "score": 42,
        "riskLevel": "High",
        "summary": "Several critical headers are absent.",
        "missingHeaders": ["Content-Security-Policy"],
        "findings": [{
            "header": "server",
            "status": "Warning",
            "impact": "Version disclosure aids fingerprinting",
            "recommendation": "Remove or genericize the server header",
            "remediationSnippet": "server_tokens off;",
            "category": "Information"
        }]
    }"#;
    let model = ScriptedModel::new(vec![ScriptedModel::text(body)]);
    let gateway = AiGateway::new(model.clone());

    let result = gateway
        .analyze_headers("HTTP/2 200 OK\nserver: nginx/1.18.0")
        .await
        .expect("should decode");

    assert_eq!(result.score, 42.0);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.missing_headers, vec!["Content-Security-Policy"]);
    assert_eq!(result.findings.len(), 1);
    assert_eq!(
        result.findings[0].remediation_snippet.as_deref(),
        Some("server_tokens off;")
    );

    // Flash tier, schema constrained, no web search
    let requests = model.recorded();
    assert_eq!(requests[0].tier, ModelTier::Flash);
    assert!(requests[0].schema.is_some());
    assert!(!requests[0].search);
    assert!(requests[0].messages[0].text.contains("server: nginx/1.18.0"));
}

#[tokio::test]
async fn test_cve_feed_returns_entries_and_sources() {
    let body = r#"{"cves": [{
        "id": "CVE-2025-1111",
        "title": "Heap overflow",
        "description": "Crafted packet triggers overflow",
        "severity": "Critical",
        "cvss": 9.8,
        "affected": "widgetd < 3.2",
        "datePublished": "2025-08-24"
    }]}"#;
    let sources = vec![GroundingSource {
        title: "NVD".to_string(),
        uri: "https://nvd.nist.gov".to_string(),
    }];
    let model = ScriptedModel::new(vec![ScriptedModel::grounded(body, sources)]);
    let gateway = AiGateway::new(model.clone());

    let (cves, sources) = gateway.live_cves().await.expect("should decode feed");

    assert_eq!(cves.len(), 1);
    assert_eq!(cves[0].severity, Severity::Critical);
    assert_eq!(sources[0].title, "NVD");
    assert!(model.recorded()[0].search);
}

#[tokio::test]
async fn test_domain_scan_attaches_citations() {
    let body = r#"{
        "score": 64,
        "categoryScores": [{"category": "Network", "score": 70}],
        "summary": "Moderate exposure",
        "reconnaissance": [{"type": "Subdomain", "value": "api.example.com", "status": "Exposed"}],
        "topRisks": [{"name": "Outdated TLS", "severity": "High", "category": "Encryption"}],
        "technologies": ["nginx"],
        "remediation": "Upgrade TLS configuration"
    }"#;
    let sources = vec![GroundingSource {
        title: "crt.sh".to_string(),
        uri: "https://crt.sh".to_string(),
    }];
    let model = ScriptedModel::new(vec![ScriptedModel::grounded(body, sources)]);
    let gateway = AiGateway::new(model.clone());

    let report = gateway
        .analyze_domain("example.com", &[ScanModule::Xss])
        .await
        .expect("should decode report");

    assert_eq!(report.score, 64.0);
    assert_eq!(report.top_risks[0].cve, None);
    assert_eq!(report.sources.len(), 1);

    let request = &model.recorded()[0];
    assert_eq!(request.tier, ModelTier::Pro);
    assert!(request.messages[0].text.contains("Cross-Site Scripting"));
}

#[tokio::test]
async fn test_shape_mismatch_is_decode_error() {
    let model = ScriptedModel::new(vec![ScriptedModel::text("Sorry, I cannot help with that.")]);
    let gateway = AiGateway::new(model);

    let err = gateway.analyze_headers("x: y").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_transport_failure_is_provider_error() {
    // Empty script: the backend errors before producing anything
    let model = ScriptedModel::new(vec![]);
    let gateway = AiGateway::new(model);

    let err = gateway.explain_vulnerability("XSS").await.unwrap_err();
    assert!(matches!(err, Error::Provider(_)));
}

#[tokio::test]
async fn test_chat_sends_full_history_and_system_instruction() {
    let model = ScriptedModel::new(vec![ScriptedModel::grounded(
        "Use parameterized queries.",
        vec![],
    )]);
    let gateway = AiGateway::new(model.clone());

    let history = vec![
        ChatMessage::model("How can I help?"),
        ChatMessage::user("Tell me about SQLi"),
        ChatMessage::model("SQL injection is..."),
    ];
    let reply = gateway
        .chat(&history, "How do I prevent it?")
        .await
        .expect("should answer");

    assert_eq!(reply.text, "Use parameterized queries.");

    let request = &model.recorded()[0];
    assert_eq!(request.tier, ModelTier::Pro);
    assert!(request.search);
    assert!(request.system.as_deref().unwrap().contains("Skywalker AI"));
    // Prior turns plus the new user message, in order
    assert_eq!(request.messages.len(), 4);
    assert_eq!(request.messages[3].text, "How do I prevent it?");
}

#[tokio::test]
async fn test_executive_summary_reuses_deep_dive() {
    let dive_body = r#"{
        "explanation": "Reflected XSS via unescaped query parameter",
        "payload": "<script>alert(1)</script>",
        "pocSteps": ["Open the search page", "Submit the payload"],
        "remediation": "Encode output and set a strict CSP"
    }"#;
    let model = ScriptedModel::new(vec![
        ScriptedModel::text(dive_body),
        ScriptedModel::text("Board-level summary."),
    ]);
    let gateway = AiGateway::new(model.clone());

    let dive = gateway
        .vulnerability_deep_dive("Reflected XSS", None, None)
        .await
        .expect("should decode dive");
    let summary = gateway
        .executive_summary("Reflected XSS", &dive)
        .await
        .expect("should summarize");

    assert_eq!(summary, "Board-level summary.");
    let requests = model.recorded();
    assert_eq!(requests[1].tier, ModelTier::Flash);
    assert!(requests[1].messages[0]
        .text
        .contains("Encode output and set a strict CSP"));
}

#[tokio::test]
async fn test_compliance_advice_embeds_standard() {
    let body = r#"{
        "rootCause": "Missing object-level authorization checks",
        "testingProcedures": ["Swap object IDs between two accounts"],
        "mitigations": ["Centralize authorization middleware"],
        "complianceImpact": "Directly relevant to PCI-DSS 7.x"
    }"#;
    let model = ScriptedModel::new(vec![ScriptedModel::text(body)]);
    let gateway = AiGateway::new(model.clone());

    let advice = gateway
        .compliance_advice("A01", "Broken Access Control")
        .await
        .expect("should decode advice");

    assert_eq!(advice.testing_procedures.len(), 1);
    assert!(model.recorded()[0]
        .messages[0]
        .text
        .contains("A01 - Broken Access Control"));
}
