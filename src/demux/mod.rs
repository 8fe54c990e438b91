pub mod decode;
pub mod parser;
pub mod tokens;

pub use decode::Utf8StreamDecoder;
pub use parser::{StreamDemux, StreamEffect};
pub use tokens::{DelimiterSet, TurnMode};
