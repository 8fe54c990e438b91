use crate::demux::tokens::{DelimiterSet, TurnMode};
use crate::metadata::extract_function_results;

/// Observable side effect produced while demultiplexing a fragment.
///
/// Effects are returned in the order they occurred; a sink that replays them
/// in order reconstructs the turn exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEffect {
    /// A chunk of assistant text was recognized; append it to the display.
    AppendContent(String),
    /// The metadata block completed; this is its raw serialized payload.
    SetMetadata(String),
    /// The metadata phase is over; sources are final for this turn.
    MetadataPhaseComplete,
}

/// Incremental demultiplexer for one assistant turn.
///
/// Consumes decoded text fragments in arrival order and splits them into a
/// metadata channel (serialized sources) and a content channel (answer text),
/// tracking the region state across arbitrarily-placed fragment boundaries.
pub struct StreamDemux {
    mode: TurnMode,
    delimiters: DelimiterSet,
    /// Unconsumed text since the last recognized token.
    buffer: String,
    in_content_region: bool,
    metadata_phase_done: bool,
    accumulated_content: String,
    raw_metadata: Option<String>,
}

impl StreamDemux {
    pub fn new(mode: TurnMode) -> Self {
        Self {
            mode,
            delimiters: mode.delimiters(),
            buffer: String::new(),
            in_content_region: false,
            metadata_phase_done: false,
            accumulated_content: String::new(),
            raw_metadata: None,
        }
    }

    /// Feed the next decoded fragment and collect the effects it produces.
    ///
    /// The checks run in a fixed order (metadata end, content start, content
    /// emission) and loop until a pass makes no progress, so a single
    /// fragment carrying several complete tokens is fully consumed in one
    /// call. When the metadata-end and content-start tokens arrive in the
    /// same fragment the metadata effects are emitted first.
    pub fn process_fragment(&mut self, fragment: &str) -> Vec<StreamEffect> {
        self.buffer.push_str(fragment);
        let mut effects = Vec::new();

        loop {
            let mut progressed = false;

            if let Some(pos) = self.buffer.find(self.delimiters.metadata_end) {
                let after = self.buffer[pos + self.delimiters.metadata_end.len()..].to_string();
                let mut before = self.buffer[..pos].to_string();
                // The start token may already have been consumed by an
                // earlier pass; strip it only if it is still at the front.
                if let Some(rest) = before.strip_prefix(self.delimiters.metadata_start) {
                    before = rest.to_string();
                }
                let payload = match self.mode {
                    TurnMode::Search => before,
                    // Agent blocks wrap the useful payload in <results> tags;
                    // absent tags mean no results, not an error.
                    TurnMode::Agent => extract_function_results(&before)
                        .unwrap_or_default()
                        .to_string(),
                };
                tracing::debug!(len = payload.len(), "metadata block completed");
                self.raw_metadata = Some(payload.clone());
                self.metadata_phase_done = true;
                self.buffer = after;
                effects.push(StreamEffect::SetMetadata(payload));
                effects.push(StreamEffect::MetadataPhaseComplete);
                progressed = true;
            }

            if let Some(pos) = self.buffer.find(self.delimiters.content_start) {
                // Text preceding the start token is structural noise between
                // regions and is dropped.
                self.buffer = self.buffer[pos + self.delimiters.content_start.len()..].to_string();
                self.in_content_region = true;
                progressed = true;
            }

            if self.in_content_region {
                if let Some(pos) = self.buffer.find(self.delimiters.content_end) {
                    let chunk = self.buffer[..pos].to_string();
                    let after = self.buffer[pos + self.delimiters.content_end.len()..].to_string();
                    if !chunk.is_empty() {
                        self.accumulated_content.push_str(&chunk);
                        effects.push(StreamEffect::AppendContent(chunk));
                    }
                    self.buffer = after;
                    self.in_content_region = false;
                    progressed = true;
                } else if !self.buffer.is_empty() {
                    // No end token visible yet: consume the whole buffer as
                    // tentative content. This is eager on purpose; a fragment
                    // boundary inside the end token itself is not detected
                    // and the token text would be emitted as content.
                    let chunk = std::mem::take(&mut self.buffer);
                    self.accumulated_content.push_str(&chunk);
                    effects.push(StreamEffect::AppendContent(chunk));
                    progressed = true;
                }
            }

            if !progressed {
                break;
            }
        }

        effects
    }

    /// Full content text emitted so far for this turn.
    pub fn content(&self) -> &str {
        &self.accumulated_content
    }

    /// Raw metadata payload, `None` until a metadata block completes.
    pub fn raw_metadata(&self) -> Option<&str> {
        self.raw_metadata.as_deref()
    }

    /// True once the metadata-end token has been seen; never resets.
    pub fn metadata_phase_done(&self) -> bool {
        self.metadata_phase_done
    }

    pub fn in_content_region(&self) -> bool {
        self.in_content_region
    }

    /// Reset for a new turn, keeping the configured mode.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.in_content_region = false;
        self.metadata_phase_done = false;
        self.accumulated_content.clear();
        self.raw_metadata = None;
    }
}
