use crate::core::env::EnvStore;
use crate::core::history::{HistoryBuffer, HISTORY_CAPACITY};

pub const DEFAULT_PROMPT: &str = "myshell>> ";

/// Mutable state shared by the loop and the builtins: the prompt string, the
/// bounded command history, and the environment store.
pub struct Session {
    pub prompt: String,
    pub history: HistoryBuffer,
    pub env: EnvStore,
}

impl Session {
    pub fn new() -> Self {
        Session {
            prompt: DEFAULT_PROMPT.to_string(),
            history: HistoryBuffer::new(HISTORY_CAPACITY),
            env: EnvStore::new(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
