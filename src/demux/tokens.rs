/// Sentinel tokens recognized in the response stream.
///
/// Tokens are literal substrings, never patterns. The content region uses the
/// same pair in both turn modes; the metadata region differs by mode.
pub const SEARCH_START: &str = "<search>";
pub const SEARCH_END: &str = "</search>";
pub const FUNCTION_CALL_START: &str = "<function_call>";
pub const FUNCTION_CALL_END: &str = "</function_call>";
pub const COMPLETION_START: &str = "<completion>";
pub const COMPLETION_END: &str = "</completion>";

/// Nested tags inside an agent-mode function-call block; only the text
/// between them is kept as the metadata payload.
pub const RESULTS_START: &str = "<results>";
pub const RESULTS_END: &str = "</results>";

/// Which metadata region a turn carries. A turn uses exactly one mode;
/// the two metadata variants never appear together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnMode {
    /// RAG turn: sources arrive inside `<search>...</search>`.
    Search,
    /// Agent turn: sources arrive inside `<function_call>...</function_call>`,
    /// further wrapped in `<results>...</results>`.
    Agent,
}

/// The delimiter pairs active for one turn.
#[derive(Debug, Clone, Copy)]
pub struct DelimiterSet {
    pub metadata_start: &'static str,
    pub metadata_end: &'static str,
    pub content_start: &'static str,
    pub content_end: &'static str,
}

impl TurnMode {
    pub fn delimiters(self) -> DelimiterSet {
        match self {
            TurnMode::Search => DelimiterSet {
                metadata_start: SEARCH_START,
                metadata_end: SEARCH_END,
                content_start: COMPLETION_START,
                content_end: COMPLETION_END,
            },
            TurnMode::Agent => DelimiterSet {
                metadata_start: FUNCTION_CALL_START,
                metadata_end: FUNCTION_CALL_END,
                content_start: COMPLETION_START,
                content_end: COMPLETION_END,
            },
        }
    }
}
