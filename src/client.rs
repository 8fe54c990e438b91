use futures::StreamExt;
use reqwest::Client;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::demux::{StreamDemux, TurnMode, Utf8StreamDecoder};
use crate::error::{Result, SdkError};
use crate::metadata::parse_concatenated_objects;
use crate::models::{RagRequest, SearchRecord, TurnOutput};
use crate::sink::{StreamSink, dispatch_effects};
use crate::telemetry::StreamTelemetry;
use crate::transform::{keys_to_camel, keys_to_snake};

/// Streaming client for the R2R RAG endpoint.
///
/// Owns the HTTP transport and drives the decode/demux pipeline; sinks see
/// effects in arrival order, and the terminal state comes back as a
/// [`TurnOutput`].
pub struct RagClient {
    client: Client,
    config: ClientConfig,
    telemetry: Arc<StreamTelemetry>,
}

impl RagClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SdkError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            telemetry: Arc::new(StreamTelemetry::new()),
        })
    }

    pub fn telemetry(&self) -> &StreamTelemetry {
        &self.telemetry
    }

    /// Stream one RAG turn, forwarding effects to `sink` as they arrive.
    ///
    /// The request body is snake_cased before dispatch so caller-supplied
    /// open-shape values (filters, generation config extras) reach the
    /// server in its convention regardless of how they were built.
    pub async fn stream_rag(
        &self,
        request: &RagRequest,
        mode: TurnMode,
        sink: &mut impl StreamSink,
    ) -> Result<TurnOutput> {
        if request.query.trim().is_empty() {
            return Err(SdkError::InvalidRequest("query is empty".to_string()));
        }

        let turn_id = Uuid::new_v4();
        let body = keys_to_snake(&serde_json::to_value(request)?)?;
        let body = serde_json::to_vec(&body)?;
        let url = format!("{}/v2/rag", self.config.base_url.trim_end_matches('/'));

        info!(%turn_id, mode = ?mode, bytes = body.len(), "dispatching rag turn");
        if self.config.telemetry_enabled {
            self.telemetry.record_turn_started();
        }

        let mut req = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body);
        if let Some(key) = &self.config.api_key {
            req = req.bearer_auth(key);
        }

        let response = req
            .send()
            .await
            .map_err(|e| SdkError::Upstream(format!("rag request failed: {}", e)))?;

        let status = response.status();
        info!(%turn_id, %status, "upstream responded");

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SdkError::Upstream(format!(
                "rag endpoint error {}: {}",
                status, error_body
            )));
        }

        let mut stream = response.bytes_stream();
        let mut decoder = Utf8StreamDecoder::new();
        let mut demux = StreamDemux::new(mode);

        while let Some(chunk) = stream.next().await {
            let chunk =
                chunk.map_err(|e| SdkError::Upstream(format!("stream interrupted: {}", e)))?;
            if self.config.telemetry_enabled {
                self.telemetry.record_bytes(chunk.len());
            }

            let fragment = decoder.feed(&chunk)?;
            if fragment.is_empty() {
                continue;
            }

            if self.config.telemetry_enabled {
                self.telemetry.record_fragment();
            }
            let effects = demux.process_fragment(&fragment);
            dispatch_effects(sink, &effects);
        }
        decoder.finish();

        // An unclosed content region at end of stream is a normal terminal
        // state; whatever accumulated is the answer.
        if demux.in_content_region() {
            info!(%turn_id, "stream ended inside content region");
        }

        let output = self.finalize_turn(&demux);
        if self.config.telemetry_enabled {
            self.telemetry.record_turn_completed();
        }
        info!(
            %turn_id,
            content_len = output.content.len(),
            records = output.records.len(),
            "turn complete"
        );
        Ok(output)
    }

    fn finalize_turn(&self, demux: &StreamDemux) -> TurnOutput {
        let records = match demux.raw_metadata() {
            Some(raw) => match parse_concatenated_objects(raw) {
                Ok(values) => values
                    .iter()
                    .filter_map(|value| self.record_from_value(value))
                    .collect(),
                Err(e) => {
                    warn!(error = %e, "discarding malformed metadata payload");
                    if self.config.telemetry_enabled {
                        self.telemetry.record_metadata_parse_failure();
                    }
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        TurnOutput {
            content: demux.content().to_string(),
            raw_metadata: demux.raw_metadata().map(str::to_string),
            records,
            metadata_phase_done: demux.metadata_phase_done(),
        }
    }

    /// Normalize a raw record to camelCase and deserialize it; records that
    /// still fail are skipped individually.
    fn record_from_value(&self, value: &serde_json::Value) -> Option<SearchRecord> {
        let normalized = match keys_to_camel(value) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "skipping record that failed normalization");
                return None;
            }
        };
        match serde_json::from_value(normalized) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, "skipping undeserializable record");
                None
            }
        }
    }
}
