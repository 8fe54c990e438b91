use crate::demux::StreamEffect;

/// Receiver for channel updates as a turn streams in.
///
/// All methods default to no-ops so a sink implements only what it renders.
pub trait StreamSink {
    /// A chunk of assistant text is ready to append.
    fn on_content(&mut self, _text: &str) {}

    /// The raw metadata payload was captured (replaced, not appended).
    fn on_metadata(&mut self, _raw: &str) {}

    /// The metadata phase is complete; sources are final for this turn.
    fn on_metadata_complete(&mut self) {}
}

/// Sink that ignores everything; useful when only [`crate::models::TurnOutput`]
/// is wanted.
#[derive(Debug, Default)]
pub struct NullSink;

impl StreamSink for NullSink {}

/// Replay an ordered effect list into a sink.
pub fn dispatch_effects(sink: &mut impl StreamSink, effects: &[StreamEffect]) {
    for effect in effects {
        match effect {
            StreamEffect::AppendContent(text) => sink.on_content(text),
            StreamEffect::SetMetadata(raw) => sink.on_metadata(raw),
            StreamEffect::MetadataPhaseComplete => sink.on_metadata_complete(),
        }
    }
}
