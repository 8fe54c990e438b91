use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use r2r_stream::demux::{StreamDemux, TurnMode};
use r2r_stream::metadata::parse_concatenated_objects;
use r2r_stream::transform::{keys_to_camel, keys_to_snake};
use serde_json::json;
use std::hint::black_box;

fn benchmark_demux_complete_turn(c: &mut Criterion) {
    let turn = format!(
        "<search>{}</search><completion>{}</completion>",
        r#"{"id":"1","score":0.9},"{"id":"2","score":0.5}"#,
        "The answer is a moderately long paragraph of assistant text. ".repeat(8)
    );

    let mut group = c.benchmark_group("demux");
    group.throughput(Throughput::Bytes(turn.len() as u64));

    group.bench_function("complete_turn_single_fragment", |b| {
        b.iter(|| {
            let mut demux = StreamDemux::new(TurnMode::Search);
            black_box(demux.process_fragment(&turn));
        });
    });

    group.bench_function("complete_turn_small_fragments", |b| {
        let fragments: Vec<&str> = turn
            .as_bytes()
            .chunks(16)
            .map(|chunk| std::str::from_utf8(chunk).unwrap())
            .collect();
        b.iter(|| {
            let mut demux = StreamDemux::new(TurnMode::Search);
            for fragment in &fragments {
                black_box(demux.process_fragment(fragment));
            }
        });
    });

    group.finish();
}

fn benchmark_metadata_parsing(c: &mut Criterion) {
    let records: Vec<String> = (0..50)
        .map(|i| format!(r#"{{"id":"{i}","score":0.5,"text":"snippet {i}"}}"#))
        .collect();
    // Join the way the server emits: each later record loses its opening
    // brace to the separator sequence.
    let mut raw = records[0].clone();
    for record in &records[1..] {
        raw.push_str(",\"{\"");
        raw.push_str(record.strip_prefix("{\"").unwrap());
    }

    c.bench_function("parse_concatenated_objects_50", |b| {
        b.iter(|| {
            black_box(parse_concatenated_objects(&raw).unwrap());
        });
    });
}

fn benchmark_body_transform(c: &mut Criterion) {
    let body = json!({
        "query": "benchmark",
        "search_limit": 25,
        "rag_generation_config": {
            "model": "gpt-4",
            "max_tokens_to_sample": 512,
            "nested_options": [{"top_p": 0.9}, {"top_k": 40}, {"stop_sequences": ["a", "b"]}]
        },
        "search_filters": {"document_id": {"$in": ["a", "b", "c"]}}
    });

    c.bench_function("keys_to_camel", |b| {
        b.iter(|| {
            black_box(keys_to_camel(&body).unwrap());
        });
    });

    let camel = keys_to_camel(&body).unwrap();
    c.bench_function("keys_to_snake", |b| {
        b.iter(|| {
            black_box(keys_to_snake(&camel).unwrap());
        });
    });
}

criterion_group!(
    benches,
    benchmark_demux_complete_turn,
    benchmark_metadata_parsing,
    benchmark_body_transform
);
criterion_main!(benches);
