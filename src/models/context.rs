/// Context budget shared by every current model family.
pub const DEFAULT_MAX_TOKENS: u64 = 200_000;

/// Token usage of the most recent assistant turn in a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextState {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub max_tokens: u64,
    /// Set only when the scan stopped on a read error.
    pub notes: Option<String>,
}

impl ContextState {
    pub fn empty() -> Self {
        Self {
            input_tokens: 0,
            output_tokens: 0,
            max_tokens: DEFAULT_MAX_TOKENS,
            notes: None,
        }
    }

    pub fn current_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

impl Default for ContextState {
    fn default() -> Self {
        Self::empty()
    }
}
