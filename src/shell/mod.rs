use std::io::{self, Write};

use log::{debug, warn};
use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

use crate::{
    core::{commands::Flow, config::Config, Interpreter, WorkingDir},
    error::ShellError,
    flags::Flags,
    highlight::SyntaxHighlighter,
    input::ShellCompleter,
    path::PathExpander,
};

/// The interactive front end: prompt, line editing and the read loop.
pub struct Shell {
    editor: Editor<ShellCompleter, FileHistory>,
    interpreter: Interpreter,
    config: Config,
    flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let config = Config::load(flags.get_value("config"))?;

        let highlighter = if config.color() {
            SyntaxHighlighter::new()
        } else {
            SyntaxHighlighter::plain()
        };

        let interpreter = Interpreter::new(Self::start_dir(&config)?).with_highlighter(highlighter);

        let completer = ShellCompleter::new(
            interpreter.registry(),
            highlighter,
            interpreter.cwd().current(),
        );
        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));
        editor.set_auto_add_history(true);

        // Only reached while a command runs; at the prompt Ctrl-C is a key.
        // Stdout is locked for the whole command, so the notice goes to stderr.
        ctrlc::set_handler(move || {
            if let Err(err) = notify_interrupt(&mut io::stderr().lock()) {
                debug!("could not print interrupt notice: {}", err);
            }
        })?;

        Ok(Shell {
            editor,
            interpreter,
            config,
            flags,
        })
    }

    fn start_dir(config: &Config) -> Result<WorkingDir, ShellError> {
        if let Some(dir) = config.start_dir() {
            let path = PathExpander::new().expand(dir);
            match WorkingDir::new(&path) {
                Ok(cwd) => return Ok(cwd),
                Err(e) => warn!("start_dir ignored: {}", e),
            }
        }
        WorkingDir::from_process()
    }

    pub fn prompt(&self) -> String {
        format!(
            "{}{}",
            self.interpreter.cwd().current().display(),
            self.config.prompt()
        )
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        let quiet = self.flags.is_set("quiet");

        loop {
            let prompt = self.prompt();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let flow = self.interpreter.execute_line(&line, &mut io::stdout().lock())?;
                    if flow == Flow::Exit {
                        debug!("exit requested");
                        break;
                    }

                    let cwd = self.interpreter.cwd().current();
                    if let Some(helper) = self.editor.helper_mut() {
                        helper.set_cwd(cwd);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    if !quiet {
                        println!("CTRL-C");
                    }
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    if !quiet {
                        println!("CTRL-D");
                    }
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

fn notify_interrupt(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nUse 'exit' to exit the shell")?;
    out.flush()
}
