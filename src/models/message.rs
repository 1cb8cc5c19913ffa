use serde::Deserialize;

/// Token counters of one turn. Counters may be missing or `null`; both read as 0.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct MessageUsage {
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub cache_creation_input_tokens: Option<u64>,
    pub cache_read_input_tokens: Option<u64>,
}

impl MessageUsage {
    /// Everything the model had to read for this turn, cache hits included.
    pub fn context_input(&self) -> u64 {
        self.input_tokens
            .unwrap_or(0)
            .saturating_add(self.cache_creation_input_tokens.unwrap_or(0))
            .saturating_add(self.cache_read_input_tokens.unwrap_or(0))
    }

    pub fn output(&self) -> u64 {
        self.output_tokens.unwrap_or(0)
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct MessageObj {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub usage: Option<MessageUsage>,
}

/// One line of a session transcript.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct TranscriptLine {
    #[serde(rename = "parentUuid")]
    pub parent_uuid: Option<String>,
    pub uuid: Option<String>,
    pub r#type: Option<String>,
    pub message: Option<MessageObj>,
}

impl TranscriptLine {
    pub fn is_assistant_turn(&self) -> bool {
        self.r#type.as_deref() == Some("assistant")
            && self.message.as_ref().and_then(|m| m.role.as_deref()) == Some("assistant")
    }

    /// Usage of this turn, all zero when the line carries none.
    pub fn into_usage(self) -> MessageUsage {
        self.message.and_then(|m| m.usage).unwrap_or_default()
    }
}
