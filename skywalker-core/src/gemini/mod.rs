//! Generative model abstraction and the Gemini HTTP client behind it.
//!
//! The gateway talks to [`GenerativeModel`] only; [`client::GeminiClient`]
//! is the production implementation and tests substitute their own.

pub mod client;
pub mod schema;

pub use client::GeminiClient;
pub use schema::Schema;

use async_trait::async_trait;

use crate::models::{ChatRole, GroundingSource};
use crate::Result;

/// Which configured model a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    /// Fast model for feeds and structured one-shot calls
    Flash,
    /// Reasoning model for scans, deep dives, and chat
    Pro,
}

/// One conversation turn sent to the model
#[derive(Debug, Clone)]
pub struct Message {
    pub role: ChatRole,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// A single generation request
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub tier: ModelTier,
    pub messages: Vec<Message>,
    pub system: Option<String>,
    /// When set, the model is constrained to JSON matching this shape
    pub schema: Option<Schema>,
    /// Enable web-search grounding; mutually exclusive with `schema` on the
    /// chat path but the API accepts both for grounded structured calls
    pub search: bool,
}

impl GenerateRequest {
    /// Single-turn request with one user prompt
    pub fn new(tier: ModelTier, prompt: impl Into<String>) -> Self {
        Self {
            tier,
            messages: vec![Message::user(prompt)],
            system: None,
            schema: None,
            search: false,
        }
    }

    /// Multi-turn request carrying full conversation history
    pub fn with_history(tier: ModelTier, messages: Vec<Message>) -> Self {
        Self {
            tier,
            messages,
            system: None,
            schema: None,
            search: false,
        }
    }

    pub fn system(mut self, instruction: impl Into<String>) -> Self {
        self.system = Some(instruction.into());
        self
    }

    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn search(mut self) -> Self {
        self.search = true;
        self
    }
}

/// What came back from the model
#[derive(Debug, Clone)]
pub struct GenerateResponse {
    pub text: String,
    /// Web citations when search grounding was enabled; empty otherwise
    pub sources: Vec<GroundingSource>,
}

/// Seam between the gateway and the model provider
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}
