//! Response schema builder in the Gemini dialect.
//!
//! The API expects uppercase `type` tags (`OBJECT`, `ARRAY`, `STRING`,
//! `NUMBER`) with nested `properties`, `items`, `required`, and `enum`
//! fields. The builder keeps gateway code declarative and serializes to
//! that dialect on demand.

use serde_json::{json, Map, Value};

/// Structured-output schema sent as `responseSchema`
#[derive(Debug, Clone)]
pub struct Schema {
    kind: Kind,
    description: Option<String>,
}

#[derive(Debug, Clone)]
enum Kind {
    String { variants: Option<Vec<String>> },
    Number,
    Array { items: Box<Schema> },
    Object {
        properties: Vec<(String, Schema)>,
        required: Vec<String>,
    },
}

impl Schema {
    pub fn string() -> Self {
        Self {
            kind: Kind::String { variants: None },
            description: None,
        }
    }

    /// String restricted to a fixed set of values
    pub fn enumeration<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: Kind::String {
                variants: Some(variants.into_iter().map(Into::into).collect()),
            },
            description: None,
        }
    }

    pub fn number() -> Self {
        Self {
            kind: Kind::Number,
            description: None,
        }
    }

    pub fn array(items: Schema) -> Self {
        Self {
            kind: Kind::Array {
                items: Box::new(items),
            },
            description: None,
        }
    }

    pub fn object<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = (S, Schema)>,
        S: Into<String>,
    {
        Self {
            kind: Kind::Object {
                properties: properties
                    .into_iter()
                    .map(|(name, schema)| (name.into(), schema))
                    .collect(),
                required: Vec::new(),
            },
            description: None,
        }
    }

    /// Attach a description hint for the model
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark object properties as required; no-op for other kinds
    pub fn require<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Kind::Object { ref mut required, .. } = self.kind {
            *required = names.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Serialize into the Gemini `responseSchema` wire shape
    pub fn to_value(&self) -> Value {
        let mut out = Map::new();
        match &self.kind {
            Kind::String { variants } => {
                out.insert("type".into(), json!("STRING"));
                if let Some(variants) = variants {
                    out.insert("enum".into(), json!(variants));
                }
            }
            Kind::Number => {
                out.insert("type".into(), json!("NUMBER"));
            }
            Kind::Array { items } => {
                out.insert("type".into(), json!("ARRAY"));
                out.insert("items".into(), items.to_value());
            }
            Kind::Object {
                properties,
                required,
            } => {
                out.insert("type".into(), json!("OBJECT"));
                let props: Map<String, Value> = properties
                    .iter()
                    .map(|(name, schema)| (name.clone(), schema.to_value()))
                    .collect();
                out.insert("properties".into(), Value::Object(props));
                if !required.is_empty() {
                    out.insert("required".into(), json!(required));
                }
            }
        }
        if let Some(ref description) = self.description {
            out.insert("description".into(), json!(description));
        }
        Value::Object(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_schema() {
        assert_eq!(Schema::string().to_value(), json!({"type": "STRING"}));
    }

    #[test]
    fn test_enumeration_schema() {
        assert_eq!(
            Schema::enumeration(["Low", "High"]).to_value(),
            json!({"type": "STRING", "enum": ["Low", "High"]})
        );
    }

    #[test]
    fn test_nested_object_schema() {
        let schema = Schema::object([
            ("score", Schema::number()),
            (
                "findings",
                Schema::array(Schema::object([("header", Schema::string())]).require(["header"])),
            ),
        ])
        .require(["score", "findings"]);

        assert_eq!(
            schema.to_value(),
            json!({
                "type": "OBJECT",
                "properties": {
                    "score": {"type": "NUMBER"},
                    "findings": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {"header": {"type": "STRING"}},
                            "required": ["header"]
                        }
                    }
                },
                "required": ["score", "findings"]
            })
        );
    }

    #[test]
    fn test_description_is_attached() {
        let value = Schema::string().describe("ISO date").to_value();
        assert_eq!(value["description"], "ISO date");
    }

    #[test]
    fn test_object_without_required_omits_key() {
        let value = Schema::object([("a", Schema::string())]).to_value();
        assert!(value.get("required").is_none());
    }
}
