use crate::switches::{SwitchId, SwitchMap};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for a streamed RAG turn.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RagRequest {
    /// The user's question.
    pub query: String,

    /// Enable vector search over the document store.
    #[serde(default = "default_true")]
    pub use_vector_search: bool,

    /// Combine vector and keyword search.
    #[serde(default)]
    pub do_hybrid_search: bool,

    /// Enable knowledge-graph search.
    #[serde(default)]
    pub use_kg_search: bool,

    /// Maximum number of search results to retrieve.
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,

    /// Optional filter document (open shape, passed through to the server).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_filters: Option<Value>,

    /// Generation parameters for the completion model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rag_generation_config: Option<GenerationConfig>,

    /// Enable streaming (always true for this client).
    #[serde(default = "default_true")]
    pub stream: bool,
}

fn default_true() -> bool {
    true
}

fn default_search_limit() -> u32 {
    10
}

impl RagRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            use_vector_search: true,
            do_hybrid_search: false,
            use_kg_search: false,
            search_limit: default_search_limit(),
            search_filters: None,
            rag_generation_config: None,
            stream: true,
        }
    }

    /// Build a request with search toggles taken from a validated switch map.
    pub fn from_switches(query: impl Into<String>, switches: &SwitchMap) -> Self {
        let mut request = Self::new(query);
        request.use_vector_search = switches.is_checked(SwitchId::VectorSearch);
        request.do_hybrid_search = switches.is_checked(SwitchId::HybridSearch);
        request.use_kg_search = switches.is_checked(SwitchId::KnowledgeGraphSearch);
        request
    }
}

/// Generation parameters for the completion model.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens_to_sample: Option<u32>,
}

/// One search result record, deserialized after camelCase normalization.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    // Server record shapes vary by search mode; keep the rest open.
    #[serde(flatten)]
    pub extra: Value,
}

/// Terminal snapshot of one streamed turn.
#[derive(Debug, Clone)]
pub struct TurnOutput {
    /// Full assistant answer text.
    pub content: String,

    /// Raw metadata payload, `None` when no metadata block ever arrived.
    /// Distinct from an explicit empty result set.
    pub raw_metadata: Option<String>,

    /// Parsed search records; empty on a malformed payload.
    pub records: Vec<SearchRecord>,

    /// Whether the metadata phase completed before the stream ended.
    pub metadata_phase_done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_snake_case() {
        let request = RagRequest::new("what is rust");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["query"], "what is rust");
        assert_eq!(value["use_vector_search"], true);
        assert_eq!(value["search_limit"], 10);
        assert!(value.get("search_filters").is_none());
    }

    #[test]
    fn test_search_record_from_camelized_value() {
        let value = serde_json::json!({
            "id": "frag-1",
            "documentId": "doc-9",
            "score": 0.87,
            "text": "snippet",
            "metadata": {"title": "intro"}
        });
        let record: SearchRecord = serde_json::from_value(value).unwrap();

        assert_eq!(record.document_id.as_deref(), Some("doc-9"));
        assert_eq!(record.score, Some(0.87));
        assert_eq!(record.extra["metadata"]["title"], "intro");
    }
}
