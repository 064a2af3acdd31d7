use super::expand::VariableExpander;
use crate::core::commands::{CommandError, Flow};
use crate::error::ShellError;

pub(crate) trait CommandHandler {
    fn dispatch_line(&mut self, line: &str) -> Result<Flow, ShellError>;
}

impl CommandHandler for super::Shell {
    fn dispatch_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        let expanded = self.expand_variable(line);
        if expanded.is_empty() {
            return Ok(Flow::Continue);
        }

        if self.flags.is_set("debug") {
            eprintln!("expanded: {}", expanded);
        }

        match self.executor.execute(&mut self.session, &expanded) {
            Ok(flow) => Ok(flow),
            Err(CommandError::ProcessError(e)) if e.is_fatal() => Err(ShellError::Process(e)),
            Err(e) => {
                if !self.flags.is_set("quiet") {
                    eprintln!(
                        "{}",
                        self.highlighter
                            .highlight_error(&format!("myshell: {}", e))
                    );
                }
                Ok(Flow::Continue)
            }
        }
    }
}
