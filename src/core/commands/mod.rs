mod cd;
mod chprompt;
mod exit;
mod help;
mod history;
mod pwd;
mod setenv;
mod unsetenv;

pub use cd::CdCommand;
pub use chprompt::ChpromptCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use history::HistoryCommand;
pub use pwd::PwdCommand;
pub use setenv::SetenvCommand;
pub use unsetenv::UnsetenvCommand;

use crate::core::env::EnvError;
use crate::core::state::Session;
use crate::process::{ProcessError, ProcessExecutor};

#[derive(Debug)]
pub enum CommandError {
    ExecutionError(String),
    IoError(std::io::Error),
    EnvError(EnvError),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::ExecutionError(msg) => write!(f, "execution error: {}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::EnvError(err) => write!(f, "environment error: {}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::EnvError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// What the loop should do after a command has been handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub trait Command {
    /// `rest` is the text after the command word and its separating space;
    /// empty for exact-match builtins.
    fn execute(&self, session: &mut Session, rest: &str) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Help(HelpCommand),
    History(HistoryCommand),
    Pwd(PwdCommand),
    Cd(CdCommand),
    Setenv(SetenvCommand),
    Unsetenv(UnsetenvCommand),
    Chprompt(ChpromptCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, session: &mut Session, rest: &str) -> Result<Flow, CommandError> {
        match self {
            CommandType::Help(cmd) => cmd.execute(session, rest),
            CommandType::History(cmd) => cmd.execute(session, rest),
            CommandType::Pwd(cmd) => cmd.execute(session, rest),
            CommandType::Cd(cmd) => cmd.execute(session, rest),
            CommandType::Setenv(cmd) => cmd.execute(session, rest),
            CommandType::Unsetenv(cmd) => cmd.execute(session, rest),
            CommandType::Chprompt(cmd) => cmd.execute(session, rest),
            CommandType::Exit(cmd) => cmd.execute(session, rest),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MatchKind {
    /// The whole line equals the command name.
    Exact,
    /// The line starts with the command name followed by a space.
    Prefix,
}

struct Builtin {
    name: &'static str,
    matching: MatchKind,
    records_history: bool,
    command: CommandType,
}

impl Builtin {
    fn match_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.matching {
            MatchKind::Exact => (line == self.name).then_some(""),
            MatchKind::Prefix => line
                .strip_prefix(self.name)
                .and_then(|rest| rest.strip_prefix(' ')),
        }
    }
}

/// Single dispatch table for all builtins, walked in priority order before
/// falling through to external execution. A bare `cd` or `setenv` without
/// its trailing space does not match and is executed as an external program.
pub struct CommandExecutor {
    builtins: Vec<Builtin>,
    process: ProcessExecutor,
}

impl CommandExecutor {
    pub fn new() -> Self {
        let builtins = vec![
            Builtin {
                name: "history",
                matching: MatchKind::Exact,
                records_history: false,
                command: CommandType::History(HistoryCommand::new()),
            },
            Builtin {
                name: "help",
                matching: MatchKind::Exact,
                records_history: false,
                command: CommandType::Help(HelpCommand::new()),
            },
            Builtin {
                name: "chprompt",
                matching: MatchKind::Prefix,
                records_history: false,
                command: CommandType::Chprompt(ChpromptCommand::new()),
            },
            Builtin {
                name: "setenv",
                matching: MatchKind::Prefix,
                records_history: false,
                command: CommandType::Setenv(SetenvCommand::new()),
            },
            Builtin {
                name: "unsetenv",
                matching: MatchKind::Prefix,
                records_history: false,
                command: CommandType::Unsetenv(UnsetenvCommand::new()),
            },
            Builtin {
                name: "exit",
                matching: MatchKind::Exact,
                records_history: true,
                command: CommandType::Exit(ExitCommand::new()),
            },
            Builtin {
                name: "pwd",
                matching: MatchKind::Exact,
                records_history: true,
                command: CommandType::Pwd(PwdCommand::new()),
            },
            Builtin {
                name: "cd",
                matching: MatchKind::Prefix,
                records_history: true,
                command: CommandType::Cd(CdCommand::new()),
            },
        ];

        CommandExecutor {
            builtins,
            process: ProcessExecutor::new(),
        }
    }

    /// Dispatches one non-empty expanded line: builtins first, then external
    /// execution. History records every line that reaches the executor tier.
    pub fn execute(&self, session: &mut Session, line: &str) -> Result<Flow, CommandError> {
        for builtin in &self.builtins {
            if let Some(rest) = builtin.match_line(line) {
                if builtin.records_history {
                    session.history.add(line);
                }
                return builtin.command.execute(session, rest);
            }
        }

        session.history.add(line);

        let argv: Vec<&str> = line.split(' ').filter(|token| !token.is_empty()).collect();
        self.process.spawn(&argv)?;
        Ok(Flow::Continue)
    }

    pub fn is_builtin(&self, line: &str) -> bool {
        self.builtins
            .iter()
            .any(|builtin| builtin.match_line(line).is_some())
    }

    #[cfg(test)]
    fn match_builtin<'a>(&self, line: &'a str) -> Option<(&'static str, &'a str)> {
        self.builtins
            .iter()
            .find_map(|builtin| builtin.match_line(line).map(|rest| (builtin.name, rest)))
    }
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}
