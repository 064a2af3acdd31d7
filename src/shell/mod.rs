use rustyline::{history::FileHistory, Editor};

mod dispatch;
mod expand;

use crate::{
    core::{
        commands::{CommandExecutor, Flow},
        state::Session,
    },
    error::ShellError,
    flags::Flags,
    highlight::SyntaxHighlighter,
};

use dispatch::CommandHandler;

pub struct Shell {
    pub(crate) editor: Editor<(), FileHistory>,
    pub(crate) session: Session,
    pub(crate) executor: CommandExecutor,
    pub(crate) highlighter: SyntaxHighlighter,
    pub(crate) flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let editor = Editor::<(), FileHistory>::new()?;

        Ok(Shell {
            editor,
            session: Session::new(),
            executor: CommandExecutor::new(),
            highlighter: SyntaxHighlighter::new(),
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = self.session.prompt.clone();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    // Editor recall history (arrow keys) is separate from the
                    // bounded `history` builtin buffer.
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        if !self.flags.is_set("quiet") {
                            eprintln!("Warning: Couldn't add to history: {}", e);
                        }
                    }

                    match self.dispatch_line(&line)? {
                        Flow::Exit => return Ok(()),
                        Flow::Continue => {}
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    if !self.flags.is_set("quiet") {
                        println!(
                            "{}",
                            self.highlighter.highlight_hint("Use 'exit' to leave the shell")
                        );
                    }
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => return Err(ShellError::EndOfInput),
                Err(e) => return Err(ShellError::Readline(e)),
            }
        }
    }
}
