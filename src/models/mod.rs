pub mod context;
pub mod hook;
pub mod message;

pub use context::{ContextState, DEFAULT_MAX_TOKENS};
pub use hook::HookJson;
pub use message::{MessageUsage, TranscriptLine};
