use super::{Command, CommandError, Flow};
use crate::core::state::Session;

#[derive(Clone)]
pub struct HelpCommand;

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, _session: &mut Session, _rest: &str) -> Result<Flow, CommandError> {
        println!("Available commands:");
        println!("  help       : Display this help message");
        println!("  history    : Show command history");
        println!("  pwd        : Print the current working directory");
        println!("  cd <dir>   : Change directory to <dir>");
        println!("  setenv <var> <value> : Set or modify an environment variable");
        println!("  unsetenv <var>       : Remove an environment variable");
        println!("  chprompt <prompt> : Change the shell prompt");
        println!("  exit       : Exit the shell");
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_never_fails() {
        let cmd = HelpCommand::new();
        let mut session = Session::new();
        assert_eq!(cmd.execute(&mut session, "").unwrap(), Flow::Continue);
    }
}
