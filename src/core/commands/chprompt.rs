use super::{Command, CommandError, Flow};
use crate::core::state::Session;

#[derive(Clone)]
pub struct ChpromptCommand;

impl Default for ChpromptCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ChpromptCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ChpromptCommand {
    fn execute(&self, session: &mut Session, rest: &str) -> Result<Flow, CommandError> {
        if rest.is_empty() {
            println!("Error: No prompt provided.");
        } else {
            session.prompt = rest.to_string();
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::DEFAULT_PROMPT;

    #[test]
    fn test_chprompt_replaces_prompt() {
        let cmd = ChpromptCommand::new();
        let mut session = Session::new();
        cmd.execute(&mut session, "newp>").unwrap();
        assert_eq!(session.prompt, "newp>");
    }

    #[test]
    fn test_chprompt_empty_leaves_prompt_unchanged() {
        let cmd = ChpromptCommand::new();
        let mut session = Session::new();
        cmd.execute(&mut session, "").unwrap();
        assert_eq!(session.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_chprompt_keeps_inner_spaces() {
        let cmd = ChpromptCommand::new();
        let mut session = Session::new();
        cmd.execute(&mut session, "my shell> ").unwrap();
        assert_eq!(session.prompt, "my shell> ");
    }
}
