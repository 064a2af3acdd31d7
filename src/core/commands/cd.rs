use super::{Command, CommandError, Flow};
use crate::core::state::Session;
use std::env;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    // The whole remainder of the line is the path; no tilde or quote handling.
    fn execute(&self, _session: &mut Session, rest: &str) -> Result<Flow, CommandError> {
        env::set_current_dir(rest).map_err(|e| {
            CommandError::ExecutionError(format!("Failed to change directory: {}", e))
        })?;
        Ok(Flow::Continue)
    }
}
