//! Offline end-to-end: demux a fragmented turn, reconstruct the metadata
//! records, normalize them to camelCase, and deserialize typed records.

use r2r_stream::demux::{StreamDemux, StreamEffect, TurnMode};
use r2r_stream::metadata::parse_metadata_records;
use r2r_stream::models::{RagRequest, SearchRecord};
use r2r_stream::sink::{StreamSink, dispatch_effects};
use r2r_stream::switches::{SwitchId, SwitchMap};
use r2r_stream::transform::{keys_to_camel, keys_to_snake};

#[derive(Default)]
struct CollectingSink {
    content: String,
    metadata: Option<String>,
    metadata_complete: bool,
}

impl StreamSink for CollectingSink {
    fn on_content(&mut self, text: &str) {
        self.content.push_str(text);
    }

    fn on_metadata(&mut self, raw: &str) {
        self.metadata = Some(raw.to_string());
    }

    fn on_metadata_complete(&mut self) {
        self.metadata_complete = true;
    }
}

#[test]
fn test_search_turn_to_typed_records() {
    let fragments = [
        "<search>",
        r#"{"fragment_id":"f1","document_id":"d1","score":0.91,"text":"Rust is"}"#,
        r#","{"fragment_id":"f2","document_id":"d2","score":0.44,"text":"a language"}"#,
        "</search>\n<completion>",
        "Rust is a systems ",
        "programming language.",
        "</completion>",
    ];

    let mut demux = StreamDemux::new(TurnMode::Search);
    let mut sink = CollectingSink::default();
    for fragment in fragments {
        let effects = demux.process_fragment(fragment);
        dispatch_effects(&mut sink, &effects);
    }

    assert_eq!(sink.content, "Rust is a systems programming language.");
    assert!(sink.metadata_complete);

    let raw = sink.metadata.expect("metadata captured");
    let records: Vec<SearchRecord> = parse_metadata_records(&raw)
        .iter()
        .map(|value| serde_json::from_value(keys_to_camel(value).unwrap()).unwrap())
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].document_id.as_deref(), Some("d1"));
    assert_eq!(records[0].score, Some(0.91));
    assert_eq!(records[1].text.as_deref(), Some("a language"));
    assert_eq!(records[0].extra["fragmentId"], "f1");
}

#[test]
fn test_request_built_from_switches_serializes_snake_case() {
    let mut switches = SwitchMap::defaults();
    switches.set_checked(SwitchId::HybridSearch, true).unwrap();

    let request = RagRequest::from_switches("what is rag?", &switches);
    assert!(request.use_vector_search);
    assert!(request.do_hybrid_search);
    assert!(!request.use_kg_search);

    // The wire body stays snake_case even if a caller round-trips it
    // through the camelCase normalizer.
    let body = serde_json::to_value(&request).unwrap();
    let camel = keys_to_camel(&body).unwrap();
    let wire = keys_to_snake(&camel).unwrap();
    assert_eq!(wire["do_hybrid_search"], true);
    assert_eq!(wire["search_limit"], 10);
}

#[test]
fn test_agent_turn_without_results_has_no_records() {
    let mut demux = StreamDemux::new(TurnMode::Agent);
    let mut effects = Vec::new();
    effects.extend(demux.process_fragment("<function_call>noop()</function_call>"));
    effects.extend(demux.process_fragment("<completion>nothing found</completion>"));

    assert!(effects.contains(&StreamEffect::SetMetadata(String::new())));
    assert!(parse_metadata_records(demux.raw_metadata().unwrap()).is_empty());
    assert_eq!(demux.content(), "nothing found");
}
