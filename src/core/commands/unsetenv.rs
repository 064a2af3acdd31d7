use super::{Command, CommandError, Flow};
use crate::core::state::Session;

#[derive(Clone)]
pub struct UnsetenvCommand;

impl Default for UnsetenvCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl UnsetenvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for UnsetenvCommand {
    fn execute(&self, session: &mut Session, rest: &str) -> Result<Flow, CommandError> {
        let tokens: Vec<&str> = rest.split(' ').collect();
        if tokens.len() != 1 {
            println!("Invalid Arguments");
            return Ok(Flow::Continue);
        }

        session.env.unset(tokens[0])?;
        println!("Environment variable {} removed", tokens[0]);
        Ok(Flow::Continue)
    }
}
