use super::{Command, CommandError, Flow};
use crate::core::state::Session;

#[derive(Clone)]
pub struct HistoryCommand;

impl Default for HistoryCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HistoryCommand {
    fn execute(&self, session: &mut Session, _rest: &str) -> Result<Flow, CommandError> {
        for (index, entry) in session.history.list() {
            println!("{} {}", index, entry);
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_never_fails() {
        let cmd = HistoryCommand::new();
        let mut session = Session::new();
        session.history.add("echo one");
        session.history.add("echo two");
        assert_eq!(cmd.execute(&mut session, "").unwrap(), Flow::Continue);
        // Listing does not consume the buffer.
        assert_eq!(session.history.len(), 2);
    }
}
