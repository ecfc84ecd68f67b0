//! Response schemas for the structured gateway operations

use crate::gemini::Schema;

/// Header audit result shape
pub fn header_analysis() -> Schema {
    let finding = Schema::object([
        ("header", Schema::string()),
        (
            "status",
            Schema::string().describe("Pass, Fail, or Warning"),
        ),
        ("impact", Schema::string()),
        ("recommendation", Schema::string()),
        ("remediationSnippet", Schema::string()),
        (
            "category",
            Schema::string().describe("Security, Information, Performance, or Privacy"),
        ),
    ])
    .require(["header", "status", "impact", "recommendation", "category"]);

    Schema::object([
        ("score", Schema::number()),
        (
            "riskLevel",
            Schema::string().describe("Low, Medium, High, or Critical"),
        ),
        ("summary", Schema::string()),
        ("missingHeaders", Schema::array(Schema::string())),
        ("findings", Schema::array(finding)),
    ])
    .require(["score", "riskLevel", "summary", "missingHeaders", "findings"])
}

/// CVE feed wrapper shape
pub fn cve_feed() -> Schema {
    let cve = Schema::object([
        ("id", Schema::string()),
        ("title", Schema::string()),
        ("description", Schema::string()),
        (
            "severity",
            Schema::string().describe("One of: Critical, High, Medium, Low"),
        ),
        ("cvss", Schema::number()),
        ("affected", Schema::string()),
        ("datePublished", Schema::string()),
    ])
    .require([
        "id",
        "title",
        "description",
        "severity",
        "cvss",
        "affected",
        "datePublished",
    ]);

    Schema::object([("cves", Schema::array(cve))]).require(["cves"])
}

/// Domain scan report shape
pub fn domain_scan() -> Schema {
    let category_score = Schema::object([
        (
            "category",
            Schema::string().describe(
                "One of: Network, Application, Authentication, Encryption, Data Privacy, API Security",
            ),
        ),
        ("score", Schema::number()),
    ])
    .require(["category", "score"]);

    let recon = Schema::object([
        ("type", Schema::string()),
        ("value", Schema::string()),
        ("status", Schema::string()),
    ])
    .require(["type", "value", "status"]);

    let risk = Schema::object([
        ("name", Schema::string()),
        ("severity", Schema::string()),
        ("category", Schema::string()),
        ("cve", Schema::string()),
    ])
    .require(["name", "severity", "category"]);

    Schema::object([
        ("score", Schema::number()),
        ("categoryScores", Schema::array(category_score)),
        ("summary", Schema::string()),
        ("reconnaissance", Schema::array(recon)),
        ("topRisks", Schema::array(risk)),
        ("technologies", Schema::array(Schema::string())),
        ("remediation", Schema::string()),
    ])
    .require([
        "score",
        "categoryScores",
        "summary",
        "reconnaissance",
        "topRisks",
        "technologies",
        "remediation",
    ])
}

/// Vulnerability deep dive shape
pub fn deep_dive() -> Schema {
    Schema::object([
        ("explanation", Schema::string()),
        ("payload", Schema::string()),
        ("pocSteps", Schema::array(Schema::string())),
        ("remediation", Schema::string()),
    ])
    .require(["explanation", "payload", "pocSteps", "remediation"])
}

/// OWASP mitigation guide shape
pub fn compliance_advice() -> Schema {
    Schema::object([
        ("rootCause", Schema::string()),
        ("testingProcedures", Schema::array(Schema::string())),
        ("mitigations", Schema::array(Schema::string())),
        ("complianceImpact", Schema::string()),
    ])
    .require([
        "rootCause",
        "testingProcedures",
        "mitigations",
        "complianceImpact",
    ])
}

/// Threat intelligence feed wrapper shape
pub fn threat_feed() -> Schema {
    let threat = Schema::object([
        ("title", Schema::string()),
        ("summary", Schema::string()),
        (
            "impact",
            Schema::string().describe("Critical, High, Medium, Low"),
        ),
        ("date", Schema::string()),
        ("tags", Schema::array(Schema::string())),
    ])
    .require(["title", "summary", "impact", "date"]);

    Schema::object([("threats", Schema::array(threat))]).require(["threats"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_schema_findings_is_array() {
        let value = header_analysis().to_value();
        assert_eq!(value["properties"]["findings"]["type"], "ARRAY");
        assert_eq!(
            value["properties"]["findings"]["items"]["properties"]["header"]["type"],
            "STRING"
        );
    }

    #[test]
    fn test_cve_feed_is_wrapped() {
        let value = cve_feed().to_value();
        assert_eq!(value["required"], serde_json::json!(["cves"]));
        assert_eq!(value["properties"]["cves"]["type"], "ARRAY");
    }

    #[test]
    fn test_domain_scan_optional_cve() {
        let value = domain_scan().to_value();
        let risk = &value["properties"]["topRisks"]["items"];
        let required = risk["required"].as_array().unwrap();
        assert!(!required.contains(&serde_json::json!("cve")));
    }
}
