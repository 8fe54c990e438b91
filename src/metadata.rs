//! Parsing for the raw metadata payload captured by the demux.
//!
//! The upstream server concatenates per-result serializations instead of
//! emitting one JSON array, joining them with the literal sequence `,"{"`.
//! This module reconstructs a well-formed array from that concatenation.
//!
//! Known format weakness: the split is a literal substring match, so a text
//! field whose content happens to contain `,"{"` breaks the reconstruction.
//! That is inherent to the format and not recoverable without a real
//! streaming JSON parser; such payloads fail parsing as a whole and the
//! boundary helper reports zero results.

use crate::demux::tokens::{RESULTS_END, RESULTS_START};
use crate::error::{Result, SdkError};
use serde_json::Value;

/// Separator the server emits between adjacent serialized results.
const OBJECT_SEPARATOR: &str = ",\"{\"";

/// Opening fragment each segment after the first lost to the split.
const OBJECT_PREFIX: &str = "{\"";

/// Reconstruct discrete records from a concatenated metadata payload.
///
/// All-or-nothing: a parse failure at either stage discards every record.
pub fn parse_concatenated_objects(raw: &str) -> Result<Vec<Value>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let segments: Vec<String> = trimmed
        .split(OBJECT_SEPARATOR)
        .enumerate()
        .map(|(i, seg)| {
            if i == 0 {
                seg.to_string()
            } else {
                format!("{OBJECT_PREFIX}{seg}")
            }
        })
        .collect();

    let candidate = format!("[{}]", segments.join(","));
    let parsed: Value = serde_json::from_str(&candidate)
        .map_err(|e| SdkError::MetadataPayload(format!("reassembled array is invalid: {e}")))?;

    let Value::Array(items) = parsed else {
        return Err(SdkError::MetadataPayload(
            "reassembled payload is not an array".to_string(),
        ));
    };

    items
        .into_iter()
        .map(|item| match item {
            // Double-encoded element: the record itself arrived as a JSON
            // string and needs a second parse.
            Value::String(inner) => serde_json::from_str(&inner).map_err(|e| {
                SdkError::MetadataPayload(format!("double-encoded record is invalid: {e}"))
            }),
            other => Ok(other),
        })
        .collect()
}

/// Boundary helper: malformed payloads become zero results, never an error.
pub fn parse_metadata_records(raw: &str) -> Vec<Value> {
    match parse_concatenated_objects(raw) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, "discarding malformed metadata payload");
            Vec::new()
        }
    }
}

/// Extract the `<results>...</results>` substring of an agent-mode
/// function-call block. `None` when either tag is absent.
pub fn extract_function_results(raw: &str) -> Option<&str> {
    let start = raw.find(RESULTS_START)? + RESULTS_START.len();
    let len = raw[start..].find(RESULTS_END)?;
    Some(&raw[start..start + len])
}
