use std::io::ErrorKind;
use std::process::{Command, Stdio};

use super::ProcessError;

/// Spawns an external program with the given argv, inheriting the process
/// environment and working directory, and blocks until it terminates.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    pub fn spawn(&self, argv: &[&str]) -> Result<(), ProcessError> {
        let (program, args) = match argv.split_first() {
            Some(parts) => parts,
            None => return Err(ProcessError::EmptyCommand),
        };

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(std::env::vars());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProcessError::CommandNotFound(program.to_string()));
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(ProcessError::ExecFailed(program.to_string(), e));
            }
            Err(e) => return Err(ProcessError::SpawnFailed(e)),
        };

        // The child's exit status is not inspected, only awaited.
        match child.wait() {
            Ok(_status) => Ok(()),
            Err(e) => Err(ProcessError::WaitFailed(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_known_program() {
        let executor = ProcessExecutor::new();
        assert!(executor.spawn(&["true"]).is_ok());
    }

    #[test]
    fn test_spawn_with_args() {
        let executor = ProcessExecutor::new();
        assert!(executor.spawn(&["echo", "hello", "world"]).is_ok());
    }

    #[test]
    fn test_spawn_unknown_program() {
        let executor = ProcessExecutor::new();
        let result = executor.spawn(&["myshell-no-such-program"]);
        assert!(matches!(result, Err(ProcessError::CommandNotFound(_))));
    }

    #[test]
    fn test_spawn_empty_argv() {
        let executor = ProcessExecutor::new();
        let result = executor.spawn(&[]);
        assert!(matches!(result, Err(ProcessError::EmptyCommand)));
    }

    #[test]
    fn test_not_found_is_recoverable() {
        let err = ProcessError::CommandNotFound("x".to_string());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_spawn_failure_is_fatal() {
        let err = ProcessError::SpawnFailed(std::io::Error::new(ErrorKind::OutOfMemory, "oom"));
        assert!(err.is_fatal());
    }
}
