use std::io::Write;

use clap::Parser;
use r2r_stream::client::RagClient;
use r2r_stream::config::ClientConfig;
use r2r_stream::demux::TurnMode;
use r2r_stream::models::RagRequest;
use r2r_stream::sink::StreamSink;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "r2r-stream", about = "Stream a RAG turn from an R2R backend")]
struct Args {
    /// The question to ask
    query: String,

    /// Turn mode: "search" or "agent"
    #[arg(long, default_value = "search")]
    mode: String,

    /// TOML config file (environment variables used otherwise)
    #[arg(long)]
    config: Option<String>,

    /// Override the backend base URL
    #[arg(long)]
    base_url: Option<String>,
}

/// Prints content as it streams; sources are summarized at the end.
struct StdoutSink;

impl StreamSink for StdoutSink {
    fn on_content(&mut self, text: &str) {
        print!("{}", text);
        let _ = std::io::stdout().flush();
    }

    fn on_metadata_complete(&mut self) {
        eprintln!("[sources received]");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::from_env()?,
    };
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    let mode = match args.mode.as_str() {
        "search" => TurnMode::Search,
        "agent" => TurnMode::Agent,
        other => anyhow::bail!("unknown mode: {other} (expected \"search\" or \"agent\")"),
    };

    let telemetry_enabled = config.telemetry_enabled;
    let client = RagClient::new(config)?;
    let request = RagRequest::new(args.query.as_str());

    let output = client.stream_rag(&request, mode, &mut StdoutSink).await?;

    println!();
    eprintln!("{} source(s)", output.records.len());
    if telemetry_enabled {
        eprintln!("{}", client.telemetry().snapshot());
    }

    Ok(())
}
