use crate::error::{Result, SdkError};
use bytes::BytesMut;

/// Incremental UTF-8 decoder for arbitrary byte chunk boundaries.
///
/// A chunk may end in the middle of a multi-byte sequence; the incomplete
/// tail is held back and re-joined with the next chunk. Genuinely invalid
/// bytes are an error, not a replacement character.
#[derive(Debug, Default)]
pub struct Utf8StreamDecoder {
    pending: BytesMut,
}

impl Utf8StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next chunk, returning all complete text available so far.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<String> {
        self.pending.extend_from_slice(chunk);

        match std::str::from_utf8(&self.pending) {
            Ok(text) => {
                let out = text.to_string();
                self.pending.clear();
                Ok(out)
            }
            Err(e) => {
                if e.error_len().is_some() {
                    return Err(SdkError::Decode(format!(
                        "invalid UTF-8 at byte offset {}",
                        e.valid_up_to()
                    )));
                }
                // Incomplete trailing sequence: emit the valid prefix and
                // keep the tail for the next chunk.
                let valid = e.valid_up_to();
                let prefix = self.pending.split_to(valid);
                Ok(String::from_utf8_lossy(&prefix).into_owned())
            }
        }
    }

    /// End of stream. A leftover incomplete sequence is dropped; the server
    /// stopping mid-character is treated like it stopping mid-token.
    pub fn finish(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!(
                bytes = self.pending.len(),
                "dropping incomplete UTF-8 tail at end of stream"
            );
            self.pending.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        let mut decoder = Utf8StreamDecoder::new();
        assert_eq!(decoder.feed(b"hello").unwrap(), "hello");
    }

    #[test]
    fn test_split_multibyte_sequence() {
        let mut decoder = Utf8StreamDecoder::new();
        let bytes = "ab\u{00e9}cd".as_bytes(); // e9 is two bytes in UTF-8

        let first = decoder.feed(&bytes[..3]).unwrap();
        assert_eq!(first, "ab");

        let second = decoder.feed(&bytes[3..]).unwrap();
        assert_eq!(second, "\u{00e9}cd");
    }

    #[test]
    fn test_invalid_bytes_error() {
        let mut decoder = Utf8StreamDecoder::new();
        assert!(decoder.feed(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn test_finish_drops_incomplete_tail() {
        let mut decoder = Utf8StreamDecoder::new();
        let bytes = "\u{00e9}".as_bytes();
        assert_eq!(decoder.feed(&bytes[..1]).unwrap(), "");
        decoder.finish();
        assert_eq!(decoder.feed(b"x").unwrap(), "x");
    }
}
