use super::{Command, CommandError, Flow};
use crate::core::state::Session;
use std::env;

#[derive(Clone)]
pub struct PwdCommand;

impl Default for PwdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(&self, _session: &mut Session, _rest: &str) -> Result<Flow, CommandError> {
        let cwd = env::current_dir()
            .map_err(|e| CommandError::ExecutionError(format!("getcwd error: {}", e)))?;
        println!("{}", cwd.display());
        Ok(Flow::Continue)
    }
}
