//! Gemini API client over the v1beta REST endpoint

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use super::{GenerateRequest, GenerateResponse, GenerativeModel, ModelTier};
use crate::config::ProviderConfig;
use crate::models::{ChatRole, GroundingSource};
use crate::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Production [`GenerativeModel`] backed by the Gemini REST API
pub struct GeminiClient {
    client: Client,
    api_key: String,
    flash_model: String,
    pro_model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| Error::Config("no API key configured".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| Error::Provider(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            flash_model: config.flash_model.clone(),
            pro_model: config.pro_model.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Flash => &self.flash_model,
            ModelTier::Pro => &self.pro_model,
        }
    }

    fn build_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        )
    }

    fn to_wire(request: &GenerateRequest) -> GeminiRequest {
        let contents = request
            .messages
            .iter()
            .map(|msg| GeminiContent {
                role: match msg.role {
                    ChatRole::User => "user".to_string(),
                    ChatRole::Model => "model".to_string(),
                },
                parts: vec![GeminiPart {
                    text: msg.text.clone(),
                }],
            })
            .collect();

        let system_instruction = request.system.as_ref().map(|text| GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiPart { text: text.clone() }],
        });

        let tools = request.search.then(|| {
            vec![GeminiTool {
                google_search: EmptyObject {},
            }]
        });

        let generation_config = request.schema.as_ref().map(|schema| GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema.to_value()),
        });

        GeminiRequest {
            contents,
            system_instruction,
            tools,
            generation_config,
        }
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let model = self.model_for(request.tier);
        let url = self.build_url(model);
        let wire = Self::to_wire(&request);

        debug!(model, search = request.search, "sending generation request");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&wire)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            error!(%status, "generation request failed: {}", text);
            return Err(Error::Provider(format!("API error {status}: {text}")));
        }

        let wire_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| Error::Provider(format!("invalid provider payload: {e}")))?;

        extract_response(wire_response)
    }
}

/// Pull text and grounding citations out of the wire response
fn extract_response(response: GeminiResponse) -> Result<GenerateResponse> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| Error::Provider("no candidates in response".to_string()))?;

    let text = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let sources = candidate
        .grounding_metadata
        .map(|metadata| {
            metadata
                .grounding_chunks
                .into_iter()
                .filter_map(|chunk| chunk.web)
                .filter_map(|web| {
                    let uri = web.uri?;
                    Some(GroundingSource {
                        title: web.title.unwrap_or_else(|| uri.clone()),
                        uri,
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(GenerateResponse { text, sources })
}

// === Wire types ===

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<GeminiTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiTool {
    google_search: EmptyObject,
}

#[derive(Debug, Serialize)]
struct EmptyObject {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebChunk>,
}

#[derive(Debug, Deserialize)]
struct WebChunk {
    title: Option<String>,
    uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::Schema;

    #[test]
    fn test_wire_request_serialization() {
        let request = GenerateRequest::new(ModelTier::Flash, "hello")
            .system("be terse")
            .schema(Schema::object([("a", Schema::string())]))
            .search();
        let wire = GeminiClient::to_wire(&request);
        let value = serde_json::to_value(&wire).unwrap();

        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "be terse");
        assert_eq!(value["tools"][0]["googleSearch"], serde_json::json!({}));
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            value["generationConfig"]["responseSchema"]["type"],
            "OBJECT"
        );
    }

    #[test]
    fn test_wire_request_omits_unset_fields() {
        let request = GenerateRequest::new(ModelTier::Pro, "hi");
        let value = serde_json::to_value(GeminiClient::to_wire(&request)).unwrap();
        assert!(value.get("tools").is_none());
        assert!(value.get("generationConfig").is_none());
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn test_extract_text_and_sources() {
        let json = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "answer"}]},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"title": "NVD", "uri": "https://nvd.nist.gov"}},
                        {"web": {"uri": "https://example.com"}},
                        {"web": null},
                        {"web": {"title": "no uri"}}
                    ]
                }
            }]
        }"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        let result = extract_response(response).unwrap();

        assert_eq!(result.text, "answer");
        assert_eq!(result.sources.len(), 2);
        assert_eq!(result.sources[0].title, "NVD");
        // Title falls back to the URI when absent
        assert_eq!(result.sources[1].title, "https://example.com");
    }

    #[test]
    fn test_extract_rejects_empty_candidates() {
        let response: GeminiResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(matches!(extract_response(response), Err(Error::Provider(_))));
    }

    #[test]
    fn test_history_roles_map_to_wire_roles() {
        let request = GenerateRequest::with_history(
            ModelTier::Pro,
            vec![
                crate::gemini::Message::user("q"),
                crate::gemini::Message::model("a"),
                crate::gemini::Message::user("q2"),
            ],
        );
        let wire = GeminiClient::to_wire(&request);
        assert_eq!(wire.contents[1].role, "model");
        assert_eq!(wire.contents[2].role, "user");
    }
}
