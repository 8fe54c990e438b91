//! # r2r-stream
//!
//! Streaming client SDK core for an R2R retrieval-augmented-generation
//! backend.
//!
//! ## Overview
//!
//! An R2R turn arrives as one chunked text stream carrying two logical
//! channels separated by sentinel tokens: a metadata channel (serialized
//! search results inside `<search>`/`</search>` or a `<function_call>`
//! block) and a content channel (answer text inside
//! `<completion>`/`</completion>`). This library provides:
//!
//! - Incremental demultiplexing of that stream across arbitrary fragment
//!   boundaries
//! - Reconstruction of discrete records from the server's concatenated
//!   metadata payload format
//! - Recursive snake_case/camelCase key normalization for JSON bodies
//! - A reqwest-based streaming client tying the pipeline together
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use r2r_stream::client::RagClient;
//! use r2r_stream::config::ClientConfig;
//! use r2r_stream::demux::TurnMode;
//! use r2r_stream::models::RagRequest;
//! use r2r_stream::sink::NullSink;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let client = RagClient::new(config)?;
//!
//! let request = RagRequest::new("What is retrieval-augmented generation?");
//! let output = client
//!     .stream_rag(&request, TurnMode::Search, &mut NullSink)
//!     .await?;
//!
//! println!("{}", output.content);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and handling
//! - [`demux`] - Sentinel-token stream demultiplexer and UTF-8 decoder
//! - [`metadata`] - Concatenated metadata payload parsing
//! - [`transform`] - Case-convention key rewriting
//! - [`client`] - Streaming HTTP client
//! - [`sink`] - Presentation-sink trait and effect dispatch
//! - [`telemetry`] - Stream activity counters
//! - [`switches`] - Validated search-toggle map

pub mod client;
pub mod config;
pub mod demux;
pub mod error;
pub mod metadata;
pub mod models;
pub mod sink;
pub mod switches;
pub mod telemetry;
pub mod transform;

pub use client::RagClient;
pub use config::ClientConfig;
pub use demux::{StreamDemux, StreamEffect, TurnMode};
pub use error::{Result, SdkError};
