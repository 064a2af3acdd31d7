use super::{Command, CommandError, Flow};
use crate::core::state::Session;

#[derive(Clone)]
pub struct SetenvCommand;

impl Default for SetenvCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl SetenvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SetenvCommand {
    fn execute(&self, session: &mut Session, rest: &str) -> Result<Flow, CommandError> {
        // Single-space tokenization; consecutive spaces yield empty tokens
        // that count toward the total, so `setenv a  b` is invalid.
        let tokens: Vec<&str> = rest.split(' ').collect();
        if tokens.len() != 2 {
            println!("Invalid Arguments");
            return Ok(Flow::Continue);
        }

        session.env.set(tokens[0], tokens[1])?;
        println!("Environment variable {} set to {}", tokens[0], tokens[1]);
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setenv_sets_variable() {
        let cmd = SetenvCommand::new();
        let mut session = Session::new();
        cmd.execute(&mut session, "MYSHELL_SETENV_TEST bar").unwrap();
        assert_eq!(session.env.get("MYSHELL_SETENV_TEST").unwrap(), "bar");
    }

    #[test]
    fn test_setenv_missing_value_does_not_mutate() {
        let cmd = SetenvCommand::new();
        let mut session = Session::new();
        // "setenv A" is 2 tokens total, not 3: reported, no mutation.
        cmd.execute(&mut session, "MYSHELL_SETENV_MISSING").unwrap();
        assert!(session.env.get("MYSHELL_SETENV_MISSING").is_none());
    }

    #[test]
    fn test_setenv_extra_tokens_rejected() {
        let cmd = SetenvCommand::new();
        let mut session = Session::new();
        cmd.execute(&mut session, "MYSHELL_SETENV_EXTRA a b").unwrap();
        assert!(session.env.get("MYSHELL_SETENV_EXTRA").is_none());
    }

    #[test]
    fn test_setenv_double_space_counts_empty_token() {
        let cmd = SetenvCommand::new();
        let mut session = Session::new();
        cmd.execute(&mut session, "MYSHELL_SETENV_GAP  b").unwrap();
        assert!(session.env.get("MYSHELL_SETENV_GAP").is_none());
    }

    #[test]
    fn test_setenv_overwrites() {
        let cmd = SetenvCommand::new();
        let mut session = Session::new();
        cmd.execute(&mut session, "MYSHELL_SETENV_OVER old").unwrap();
        cmd.execute(&mut session, "MYSHELL_SETENV_OVER new").unwrap();
        assert_eq!(session.env.get("MYSHELL_SETENV_OVER").unwrap(), "new");
    }
}
