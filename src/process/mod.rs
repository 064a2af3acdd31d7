use std::fmt;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    ExecFailed(String, std::io::Error),
    EmptyCommand,
    SpawnFailed(std::io::Error),
    WaitFailed(std::io::Error),
}

impl ProcessError {
    /// A spawn failure that is not a lookup or permission problem is the
    /// moral equivalent of a failed fork: the shell cannot keep going.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProcessError::SpawnFailed(_))
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "command not found: {}", cmd),
            ProcessError::ExecFailed(cmd, e) => write!(f, "failed to execute {}: {}", cmd, e),
            ProcessError::EmptyCommand => write!(f, "empty command"),
            ProcessError::SpawnFailed(e) => write!(f, "failed to spawn process: {}", e),
            ProcessError::WaitFailed(e) => write!(f, "failed to wait for process: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
